//! Drag state machine.
//!
//! ```text
//! Idle     -> Dragging   (primary down passed all filters)
//! Dragging -> Idle       (primary up on the target, or anywhere in the document)
//! ```

use crate::input::events::PointerSource;
use crate::types::Point;

/// State of one drag registration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No drag in progress
    #[default]
    Idle,

    /// A drag started by a primary down
    Dragging {
        /// Where the drag began
        origin: Point,
        /// Device that started it
        source: PointerSource,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Get the drag origin, if dragging
    pub fn origin(&self) -> Option<Point> {
        match self {
            Self::Dragging { origin, .. } => Some(*origin),
            Self::Idle => None,
        }
    }

    pub fn source(&self) -> Option<PointerSource> {
        match self {
            Self::Dragging { source, .. } => Some(*source),
            Self::Idle => None,
        }
    }

    pub fn start(&mut self, origin: Point, source: PointerSource) {
        *self = Self::Dragging { origin, source };
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
