//! Named-channel callback registry.
//!
//! An `EventRegistry` is the mediator a component owns when other parts of
//! the application need to react to what it does. Callbacks are grouped by
//! channel name and run in the order they were added, each receiving the
//! registry's context and the dispatched arguments.
//!
//! ## Dispatch Snapshot
//!
//! `run` copies the channel's callback list before invoking anything. A
//! callback that adds or removes callbacks on the same registry changes what
//! the *next* dispatch sees; the pass already in progress still runs exactly
//! the callbacks that were registered when it started.
//!
//! ## Missing Channels
//!
//! Running, removing from or clearing a channel nobody registered on is a
//! no-op.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

/// A shared callback handle. Identity (for `remove`) is the `Rc` allocation.
pub type Callback<C, A> = Rc<dyn Fn(&C, &A)>;

/// Wrap a closure as a registry callback.
pub fn callback<C, A, F>(f: F) -> Callback<C, A>
where
    F: Fn(&C, &A) + 'static,
{
    Rc::new(f)
}

/// Named-channel callback registry with a default context.
pub struct EventRegistry<C, A> {
    channels: RefCell<HashMap<String, Vec<Callback<C, A>>>>,
    context: RefCell<C>,
}

impl<C: Clone + 'static, A: 'static> EventRegistry<C, A> {
    /// Create an empty registry using `context` as the default receiver.
    pub fn new(context: C) -> Self {
        Self {
            channels: RefCell::new(HashMap::new()),
            context: RefCell::new(context),
        }
    }

    /// Append `callback` to `channel`, creating the channel if needed.
    ///
    /// The same handle may be added several times; it then runs once per
    /// registration.
    pub fn add(&self, channel: &str, callback: Callback<C, A>) -> &Self {
        self.channels
            .borrow_mut()
            .entry(channel.to_string())
            .or_default()
            .push(callback);
        self
    }

    /// Remove the first registration of `callback` from `channel`.
    pub fn remove(&self, channel: &str, callback: &Callback<C, A>) -> &Self {
        let mut channels = self.channels.borrow_mut();
        if let Some(callbacks) = channels.get_mut(channel) {
            if let Some(index) = callbacks.iter().position(|c| Rc::ptr_eq(c, callback)) {
                callbacks.remove(index);
            }
            if callbacks.is_empty() {
                channels.remove(channel);
            }
        }
        self
    }

    /// Drop every callback registered on `channel`.
    pub fn clear(&self, channel: &str) -> &Self {
        self.channels.borrow_mut().remove(channel);
        self
    }

    pub fn has_listeners(&self, channel: &str) -> bool {
        self.listener_count(channel) > 0
    }

    pub fn listener_count(&self, channel: &str) -> usize {
        self.channels
            .borrow()
            .get(channel)
            .map_or(0, |callbacks| callbacks.len())
    }

    /// Run every callback on `channel` with the default context.
    pub fn run(&self, channel: &str, args: &A) -> &Self {
        let context = self.context.borrow().clone();
        self.dispatch(channel, &context, args)
    }

    /// Run every callback on `channel` with `context` for this call only.
    ///
    /// The stored default context is left untouched.
    pub fn run_with_context(&self, channel: &str, context: &C, args: &A) -> &Self {
        self.dispatch(channel, context, args)
    }

    /// The default context passed to callbacks.
    pub fn context(&self) -> C {
        self.context.borrow().clone()
    }

    pub fn set_context(&self, context: C) -> &Self {
        *self.context.borrow_mut() = context;
        self
    }

    /// Relay `channel` to `other`: every dispatch here re-runs the same
    /// channel on `other` with `other`'s own default context.
    ///
    /// Returns the relay handle so the forwarding can be removed later.
    pub fn forward_to<D>(&self, channel: &str, other: &Rc<EventRegistry<D, A>>) -> Callback<C, A>
    where
        D: Clone + 'static,
    {
        let target = Rc::downgrade(other);
        let name = channel.to_string();
        let relay = callback(move |_: &C, args: &A| {
            if let Some(target) = target.upgrade() {
                target.run(&name, args);
            }
        });
        self.add(channel, relay.clone());
        relay
    }

    fn dispatch(&self, channel: &str, context: &C, args: &A) -> &Self {
        // Snapshot so callbacks may mutate the registry mid-pass.
        let snapshot: Vec<Callback<C, A>> = match self.channels.borrow().get(channel) {
            Some(callbacks) => callbacks.clone(),
            None => return self,
        };

        trace!(channel, listeners = snapshot.len(), "dispatching");
        for callback in &snapshot {
            callback(context, args);
        }
        self
    }
}

impl<C: Clone + Default + 'static, A: 'static> Default for EventRegistry<C, A> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: fmt::Debug, A> fmt::Debug for EventRegistry<C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channels = self.channels.borrow();
        let mut names: Vec<(&String, usize)> =
            channels.iter().map(|(name, cbs)| (name, cbs.len())).collect();
        names.sort();
        f.debug_struct("EventRegistry")
            .field("channels", &names)
            .field("context", &self.context.borrow())
            .finish()
    }
}
