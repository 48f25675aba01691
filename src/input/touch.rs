//! One-finger pinning.
//!
//! Multi-touch gestures are reduced to a single pointer: the first finger
//! to go down is tracked, and later signals resolve to that finger by
//! identifier wherever it appears in the touch list. Extra fingers are
//! never combined or averaged in.
//!
//! ## Transitions
//!
//! ```text
//! Untracked -> Tracked(id)   (start: adopt the first touch point)
//! Tracked   -> Tracked       (start while the tracked finger is down: ignored)
//! Tracked   -> Untracked     (end/cancel of the tracked finger)
//! ```

use crate::input::events::{TouchInput, TouchPoint};
use std::cell::Cell;
use tracing::{debug, trace};

fn find(points: &[TouchPoint], id: u64) -> Option<TouchPoint> {
    points.iter().find(|p| p.id == id).copied()
}

/// Tracks the finger a pointer unifier follows.
#[derive(Debug, Default)]
pub struct TouchTracker {
    tracked: Cell<Option<u64>>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier of the followed finger
    pub fn tracked(&self) -> Option<u64> {
        self.tracked.get()
    }

    pub fn reset(&self) {
        self.tracked.set(None);
    }

    /// Resolve a touch start. `None` means the signal is ignored.
    pub fn resolve_down(&self, input: &TouchInput) -> Option<TouchPoint> {
        if let Some(id) = self.tracked.get() {
            if find(&input.touches, id).is_some() {
                trace!(tracked = id, "ignoring extra finger");
                return None;
            }
            debug!(stale = id, "tracked finger vanished, re-adopting");
        }

        let point = input.touches.first().or(input.changed.first()).copied()?;
        self.tracked.set(Some(point.id));
        debug!(finger = point.id, "adopted finger");
        Some(point)
    }

    /// Resolve a touch move to the tracked finger, or the first touch point
    /// when the tracked finger is gone.
    pub fn resolve_move(&self, input: &TouchInput) -> Option<TouchPoint> {
        self.tracked
            .get()
            .and_then(|id| find(&input.touches, id))
            .or_else(|| input.touches.first().copied())
    }

    /// Resolve a touch end or cancel.
    ///
    /// While the tracked finger is still on the surface, another finger was
    /// lifted and the signal is ignored. Otherwise the tracked finger is
    /// released and its last position returned.
    pub fn resolve_up(&self, input: &TouchInput) -> Option<TouchPoint> {
        let Some(id) = self.tracked.get() else {
            return input.changed.first().or(input.touches.first()).copied();
        };

        if find(&input.touches, id).is_some() {
            trace!(tracked = id, "untracked finger lifted");
            return None;
        }

        self.tracked.set(None);
        debug!(finger = id, "released finger");
        find(&input.changed, id)
            .or_else(|| input.changed.first().copied())
            .or_else(|| input.touches.first().copied())
    }
}
