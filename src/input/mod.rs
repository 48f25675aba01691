//! Pointer input unification.
//!
//! This module turns raw mouse and touch signals into one logical pointer
//! stream with primary/secondary buttons.
//!
//! ## Architecture
//!
//! A `PointerUnifier` is owned by the component that needs pointer events
//! (composition, not a capability mixed into every element). It applies
//! three filters before dispatching:
//!
//! 1. **Button filter** - mouse signals map to a logical button through a
//!    `ButtonMap`; touch is always primary.
//! 2. **Scrollbar exclusion** - a primary press on a scrollbar gutter is not
//!    a `primary-down`.
//! 3. **One-finger pinning** - only the first finger down is followed.
//!
//! ## Modules
//!
//! - `events` - Raw input structs and the logical `PointerEvent`
//! - `pointer` - `PointerUnifier`, registration and touch handling
//! - `mouse` - Mouse handling (button filter, scrollbar exclusion)
//! - `touch` - `TouchTracker` finger pinning
//! - `drag` - Drag composite
//! - `state` - Drag state machine
//! - `coords` - Page/box coordinate conversion

pub mod coords;
mod drag;
mod events;
mod mouse;
mod pointer;
mod state;
mod touch;

pub use drag::DragHandle;
pub use events::{
    LogicalButton, MouseEventKind, MouseInput, PointerEvent, PointerKind, PointerSource,
    TouchEventKind, TouchInput, TouchPoint,
};
pub use pointer::{PointerCallback, PointerUnifier};
pub use state::DragState;
pub use touch::TouchTracker;
