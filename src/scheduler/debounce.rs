//! Trailing-edge debounce scheduler.
//!
//! ## State Transitions
//!
//! ```text
//! Idle    -> Pending   (run / maybe_run)
//! Pending -> Pending   (run: old task cancelled, new one scheduled)
//! Pending -> Idle      (clear, or the task fires)
//! ```
//!
//! The slot is emptied before the task body runs, so a task may call
//! `run` on its own scheduler to queue a follow-up.
//!
//! Every cancellation bumps a generation counter and each task carries the
//! generation it was scheduled under. A task whose host failed to cancel it
//! fires as a no-op instead of running a superseded action.

use crate::constants::DEFAULT_DEBOUNCE_MS;
use crate::scheduler::timer::{TimerHost, TimerId};
use crate::settings::InputSettings;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, warn};

/// Keeps at most one deferred action outstanding.
pub struct DebounceScheduler<T: TimerHost> {
    timers: T,
    delay_ms: Cell<u64>,
    pending: Rc<Cell<Option<TimerId>>>,
    generation: Rc<Cell<u64>>,
}

fn clamp_delay(ms: i64) -> u64 {
    if ms < 0 {
        debug!(requested_ms = ms, "negative debounce delay clamped to zero");
    }
    ms.max(0) as u64
}

impl<T: TimerHost> DebounceScheduler<T> {
    /// Create a scheduler with `delay_ms`; negative values clamp to zero.
    pub fn new(timers: T, delay_ms: i64) -> Self {
        Self {
            timers,
            delay_ms: Cell::new(clamp_delay(delay_ms)),
            pending: Rc::new(Cell::new(None)),
            generation: Rc::new(Cell::new(0)),
        }
    }

    /// Create a scheduler that fires on the next tick.
    pub fn next_tick(timers: T) -> Self {
        Self::new(timers, DEFAULT_DEBOUNCE_MS as i64)
    }

    /// Create a scheduler using the configured debounce delay.
    pub fn from_settings(timers: T, settings: &InputSettings) -> Self {
        Self::new(timers, settings.debounce_delay_ms)
    }

    /// Schedule `action`, replacing whatever was pending.
    pub fn run<F>(&self, action: F) -> &Self
    where
        F: FnOnce() + 'static,
    {
        self.clear();
        self.schedule(action);
        self
    }

    /// Schedule `action` only if nothing is pending.
    ///
    /// Returns true if the action was scheduled.
    pub fn maybe_run<F>(&self, action: F) -> bool
    where
        F: FnOnce() + 'static,
    {
        if self.is_pending() {
            return false;
        }
        self.schedule(action);
        true
    }

    /// Cancel the pending action, if any. Returns true if one was cancelled.
    pub fn clear(&self) -> bool {
        match self.pending.take() {
            Some(id) => {
                self.generation.set(self.generation.get() + 1);
                if !self.timers.cancel(id) {
                    warn!(timer = id.raw(), "timer host did not cancel task, it will be skipped");
                }
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    /// Current delay in milliseconds.
    pub fn delay(&self) -> u64 {
        self.delay_ms.get()
    }

    /// Replace the delay, returning the previous value.
    ///
    /// Negative values clamp to zero. An already pending action keeps the
    /// delay it was scheduled with.
    pub fn set_delay(&self, delay_ms: i64) -> u64 {
        self.delay_ms.replace(clamp_delay(delay_ms))
    }

    fn schedule<F>(&self, action: F)
    where
        F: FnOnce() + 'static,
    {
        let slot = self.pending.clone();
        let current = self.generation.clone();
        let generation = current.get();
        let id = self.timers.schedule(
            Duration::from_millis(self.delay_ms.get()),
            Box::new(move || {
                if current.get() != generation {
                    return;
                }
                slot.set(None);
                action();
            }),
        );
        self.pending.set(Some(id));
    }
}

impl<T: TimerHost> Drop for DebounceScheduler<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
