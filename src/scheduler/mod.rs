//! Deferred execution and debouncing.
//!
//! - `timer` - `TimerHost` seam and the `TimerQueue` virtual-time loop
//! - `debounce` - `DebounceScheduler`, one replaceable pending action

mod debounce;
mod timer;

pub use debounce::DebounceScheduler;
pub use timer::{TimerHost, TimerId, TimerQueue};
