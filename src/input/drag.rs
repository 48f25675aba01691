//! Drag composite built on the unified primary stream.
//!
//! One callback receives the whole gesture: the primary down that starts
//! it, every primary move while it is active, and the primary up that ends
//! it. A document-level primary release also ends the drag (without calling
//! the callback) so releasing off the element never leaves it stuck.

use crate::constants::{
    CHANNEL_DOCUMENT_PRIMARY_UP, CHANNEL_PRIMARY_DOWN, CHANNEL_PRIMARY_MOVE, CHANNEL_PRIMARY_UP,
};
use crate::events::callback;
use crate::input::events::PointerEvent;
use crate::input::pointer::{PointerCallback, PointerUnifier};
use crate::input::state::DragState;
use crate::scroll::GeometrySource;
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

/// One drag registration. Keep it to query or remove the drag.
pub struct DragHandle<C> {
    state: Rc<Cell<DragState>>,
    callbacks: Vec<(&'static str, PointerCallback<C>)>,
}

impl<C> DragHandle<C> {
    pub fn state(&self) -> DragState {
        self.state.get()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.get().is_dragging()
    }
}

impl<G: GeometrySource, C: Clone + 'static> PointerUnifier<G, C> {
    /// Deliver `f` on primary down, on every move while dragging, and on the
    /// primary up that ends the drag.
    ///
    /// Each registration tracks its own drag state.
    pub fn on_drag<F>(&self, f: F) -> DragHandle<C>
    where
        F: Fn(&C, &PointerEvent) + 'static,
    {
        let state = Rc::new(Cell::new(DragState::Idle));
        let f = Rc::new(f);

        let down = {
            let (state, f) = (state.clone(), f.clone());
            callback(move |ctx: &C, ev: &PointerEvent| {
                let mut s = state.get();
                s.start(ev.position, ev.source);
                state.set(s);
                f(ctx, ev);
            })
        };

        let moved = {
            let (state, f) = (state.clone(), f.clone());
            callback(move |ctx: &C, ev: &PointerEvent| {
                if state.get().is_dragging() {
                    f(ctx, ev);
                }
            })
        };

        let up = {
            let (state, f) = (state.clone(), f.clone());
            callback(move |ctx: &C, ev: &PointerEvent| {
                if state.get().is_dragging() {
                    state.set(DragState::Idle);
                    f(ctx, ev);
                }
            })
        };

        let released = {
            let state = state.clone();
            callback(move |_: &C, _: &PointerEvent| {
                if state.get().is_dragging() {
                    debug!("drag released outside target");
                    state.set(DragState::Idle);
                }
            })
        };

        let callbacks = vec![
            (CHANNEL_PRIMARY_DOWN, down),
            (CHANNEL_PRIMARY_MOVE, moved),
            (CHANNEL_PRIMARY_UP, up),
            (CHANNEL_DOCUMENT_PRIMARY_UP, released),
        ];
        for (channel, handle) in &callbacks {
            self.registry.add(channel, handle.clone());
        }

        DragHandle { state, callbacks }
    }

    /// Remove a drag registration and reset its state.
    pub fn off_drag(&self, handle: &DragHandle<C>) {
        for (channel, callback) in &handle.callbacks {
            self.registry.remove(channel, callback);
        }
        handle.state.set(DragState::Idle);
    }
}
