//! Raw input signals and the logical pointer events produced from them.

use crate::types::{Point, Target};
use serde::Serialize;

// ============================================================================
// Raw Input
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    Down,
    Move,
    Up,
}

/// A mouse signal as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseInput {
    pub kind: MouseEventKind,
    /// Raw platform button code
    pub button: u16,
    /// Page-relative position
    pub page: Point,
    /// Element the signal originated on
    pub target: Target,
}

impl MouseInput {
    pub fn new(kind: MouseEventKind, button: u16, page: Point, target: Target) -> Self {
        Self {
            kind,
            button,
            page,
            target,
        }
    }

    pub fn down(button: u16, page: Point, target: Target) -> Self {
        Self::new(MouseEventKind::Down, button, page, target)
    }

    pub fn moved(page: Point, target: Target) -> Self {
        Self::new(MouseEventKind::Move, crate::constants::RAW_BUTTON_PRIMARY, page, target)
    }

    pub fn up(button: u16, page: Point, target: Target) -> Self {
        Self::new(MouseEventKind::Up, button, page, target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchEventKind {
    Start,
    Move,
    End,
    Cancel,
}

/// One finger on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Stable for the lifetime of the contact
    pub id: u64,
    pub page: Point,
}

impl TouchPoint {
    pub fn new(id: u64, page: Point) -> Self {
        Self { id, page }
    }
}

/// A touch signal as reported by the platform.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchInput {
    pub kind: TouchEventKind,
    pub target: Target,
    /// Contacts currently on the target, in platform order
    pub touches: Vec<TouchPoint>,
    /// Contacts that changed in this signal (the lifted ones for an end)
    pub changed: Vec<TouchPoint>,
}

impl TouchInput {
    pub fn new(kind: TouchEventKind, target: Target, touches: Vec<TouchPoint>) -> Self {
        Self {
            kind,
            target,
            touches,
            changed: Vec::new(),
        }
    }

    pub fn with_changed(mut self, changed: Vec<TouchPoint>) -> Self {
        self.changed = changed;
        self
    }
}

// ============================================================================
// Logical Output
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LogicalButton {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PointerSource {
    Mouse,
    Touch { id: u64 },
}

/// A unified pointer notification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub button: LogicalButton,
    pub source: PointerSource,
    /// Page-relative position
    pub position: Point,
    pub target: Target,
}

impl PointerEvent {
    pub fn is_touch(&self) -> bool {
        matches!(self.source, PointerSource::Touch { .. })
    }

    pub fn touch_id(&self) -> Option<u64> {
        match self.source {
            PointerSource::Touch { id } => Some(id),
            PointerSource::Mouse => None,
        }
    }
}
