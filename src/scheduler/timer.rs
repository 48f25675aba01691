//! Deferred execution primitive.
//!
//! `TimerHost` is the seam between the scheduler and whatever event loop
//! the host runs: schedule a one-shot task after a delay, cancel it by
//! handle. `TimerQueue` is the in-crate implementation, a cooperative
//! virtual-time loop that fires due tasks when the host advances it.
//!
//! ## Ordering
//!
//! Tasks fire in due-time order; tasks due at the same instant fire in the
//! order they were scheduled. A task scheduled by a firing task is picked
//! up by the same `advance` call when it falls due inside the window.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;
use tracing::trace;

/// Handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// A one-shot task runner.
pub trait TimerHost {
    /// Run `task` once, `delay` from now.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId;

    /// Cancel a task that has not fired yet. Returns false if it already
    /// fired or was never scheduled here.
    fn cancel(&self, id: TimerId) -> bool;
}

impl<T: TimerHost + ?Sized> TimerHost for Rc<T> {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId {
        (**self).schedule(delay, task)
    }

    fn cancel(&self, id: TimerId) -> bool {
        (**self).cancel(id)
    }
}

/// Single-threaded virtual-time timer loop.
pub struct TimerQueue {
    now: Cell<Duration>,
    next_id: Cell<u64>,
    entries: RefCell<BTreeMap<(Duration, TimerId), Box<dyn FnOnce()>>>,
}

impl Default for TimerQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerQueue {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Duration::ZERO),
            next_id: Cell::new(1),
            entries: RefCell::new(BTreeMap::new()),
        }
    }

    /// Current virtual time since the queue was created.
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn pending_count(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Due time of the earliest outstanding task.
    pub fn next_due(&self) -> Option<Duration> {
        self.entries.borrow().keys().next().map(|(due, _)| *due)
    }

    /// Move time forward by `by`, firing every task that falls due.
    ///
    /// Returns the number of tasks fired.
    pub fn advance(&self, by: Duration) -> usize {
        let until = self.now.get() + by;
        let mut fired = 0;

        while let Some(task) = self.pop_due(Some(until)) {
            task();
            fired += 1;
        }

        self.now.set(until);
        fired
    }

    /// Fire tasks until none are left, moving time to each due point.
    ///
    /// A task that always reschedules itself keeps this loop running.
    pub fn run_until_idle(&self) -> usize {
        let mut fired = 0;
        while let Some(task) = self.pop_due(None) {
            task();
            fired += 1;
        }
        fired
    }

    // The borrow is released before the caller runs the task so the task
    // can schedule or cancel.
    fn pop_due(&self, until: Option<Duration>) -> Option<Box<dyn FnOnce()>> {
        let mut entries = self.entries.borrow_mut();
        let (due, id) = *entries.keys().next()?;
        if until.is_some_and(|limit| due > limit) {
            return None;
        }
        let task = entries.remove(&(due, id))?;
        self.now.set(due);
        trace!(timer = id.0, due_ms = due.as_millis() as u64, "timer fired");
        Some(task)
    }
}

impl TimerHost for TimerQueue {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let due = self.now.get() + delay;
        self.entries.borrow_mut().insert((due, id), task);
        id
    }

    fn cancel(&self, id: TimerId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(_, entry_id), _| *entry_id != id);
        entries.len() != before
    }
}
