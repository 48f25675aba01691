//! Input-event unification and scheduling core.
//!
//! - `events` - named-channel `EventRegistry` used as a component mediator
//! - `scheduler` - `DebounceScheduler` over a `TimerHost` deferred-execution seam
//! - `scroll` - `ScrollRegionDetector`, scrollbar gutter hit testing
//! - `input` - `PointerUnifier`, one virtual pointer stream from mouse and touch
//!
//! Everything here is single-threaded and callback-driven: dispatch runs
//! synchronously on the caller's turn, and the only deferred work is what a
//! `DebounceScheduler` hands to its timer host.

pub mod constants;
pub mod error;
pub mod events;
pub mod input;
pub mod logging;
pub mod perf;
pub mod scheduler;
pub mod scroll;
pub mod settings;
pub mod types;

pub use error::{SettingsError, SettingsResult};
pub use events::{Callback, EventRegistry, callback};
pub use input::{
    DragHandle, LogicalButton, MouseInput, PointerEvent, PointerKind, PointerSource,
    PointerUnifier, TouchInput, TouchPoint,
};
pub use scheduler::{DebounceScheduler, TimerHost, TimerId, TimerQueue};
pub use scroll::{GeometrySource, ScrollRegionDetector, ScrollbarSize};
pub use settings::{ButtonMap, InputSettings};
pub use types::{ElementId, Point, Size, Target};
