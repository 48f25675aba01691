//! Virtual pointer: one event stream from mouse and touch.
//!
//! A `PointerUnifier` is owned by the component that wants pointer events.
//! The host feeds it raw signals (`handle_mouse`, `handle_touch`,
//! `handle_document_mouse`) and it dispatches logical notifications on its
//! own `EventRegistry`:
//!
//! | channel          | mouse                               | touch              |
//! |------------------|-------------------------------------|--------------------|
//! | `primary-down`   | primary press, not on a scrollbar   | tracked finger start |
//! | `primary-move`   | any move                            | tracked finger move |
//! | `primary-up`     | primary release                     | tracked finger end |
//! | `secondary-down` | secondary press                     | -                  |
//! | `secondary-up`   | secondary release                   | -                  |
//! | `scroll-down`    | primary press on a scrollbar        | -                  |
//! | `scroll-up`      | primary release on a scrollbar      | -                  |
//!
//! Only the down edge is scrollbar-filtered: a drag that started on content
//! keeps receiving moves when the cursor strays over a scrollbar.

use crate::constants::{
    CHANNEL_PRIMARY_DOWN, CHANNEL_PRIMARY_MOVE, CHANNEL_PRIMARY_UP, CHANNEL_SCROLL_DOWN,
    CHANNEL_SCROLL_UP, CHANNEL_SECONDARY_DOWN, CHANNEL_SECONDARY_UP, SLOW_DISPATCH_MS,
};
use crate::events::{Callback, EventRegistry, callback};
use crate::input::events::{
    LogicalButton, PointerEvent, PointerKind, PointerSource, TouchEventKind, TouchInput,
};
use crate::input::touch::TouchTracker;
use crate::perf::{DispatchStats, measure};
use crate::profile_scope;
use crate::scroll::{GeometrySource, ScrollRegionDetector};
use crate::settings::{ButtonMap, InputSettings};
use std::cell::{Ref, RefCell};
use tracing::{trace, warn};

/// Callback handle for pointer channels.
pub type PointerCallback<C> = Callback<C, PointerEvent>;

/// Unifies mouse and touch input into logical pointer events.
pub struct PointerUnifier<G: GeometrySource, C = ()> {
    pub(crate) registry: EventRegistry<C, PointerEvent>,
    pub(crate) detector: ScrollRegionDetector<G>,
    pub(crate) touches: TouchTracker,
    pub(crate) buttons: ButtonMap,
    pub(crate) stats: RefCell<DispatchStats>,
}

impl<G: GeometrySource, C: Clone + 'static> PointerUnifier<G, C> {
    pub fn new(detector: ScrollRegionDetector<G>, context: C) -> Self {
        Self {
            registry: EventRegistry::new(context),
            detector,
            touches: TouchTracker::new(),
            buttons: ButtonMap::default(),
            stats: RefCell::new(DispatchStats::new(SLOW_DISPATCH_MS)),
        }
    }

    /// Build from settings: button mapping and scrollbar width override.
    pub fn from_settings(geometry: G, settings: &InputSettings, context: C) -> Self {
        let detector = match settings.scrollbar_width {
            Some(width) => ScrollRegionDetector::with_scrollbar_width(geometry, width),
            None => ScrollRegionDetector::new(geometry),
        };
        Self::new(detector, context).with_buttons(settings.buttons)
    }

    pub fn with_buttons(mut self, buttons: ButtonMap) -> Self {
        if let Err(e) = buttons.validate() {
            warn!(error = %e, "secondary button is unreachable");
        }
        self.buttons = buttons;
        self
    }

    pub fn buttons(&self) -> ButtonMap {
        self.buttons
    }

    /// The registry pointer notifications are dispatched on.
    pub fn registry(&self) -> &EventRegistry<C, PointerEvent> {
        &self.registry
    }

    pub fn detector(&self) -> &ScrollRegionDetector<G> {
        &self.detector
    }

    /// Identifier of the finger currently followed, if any
    pub fn tracked_finger(&self) -> Option<u64> {
        self.touches.tracked()
    }

    pub fn stats(&self) -> Ref<'_, DispatchStats> {
        self.stats.borrow()
    }

    // ========================================================================
    // Registration
    // ========================================================================

    pub fn on_primary_down<F>(&self, f: F) -> PointerCallback<C>
    where
        F: Fn(&C, &PointerEvent) + 'static,
    {
        self.listen(CHANNEL_PRIMARY_DOWN, f)
    }

    pub fn on_primary_move<F>(&self, f: F) -> PointerCallback<C>
    where
        F: Fn(&C, &PointerEvent) + 'static,
    {
        self.listen(CHANNEL_PRIMARY_MOVE, f)
    }

    pub fn on_primary_up<F>(&self, f: F) -> PointerCallback<C>
    where
        F: Fn(&C, &PointerEvent) + 'static,
    {
        self.listen(CHANNEL_PRIMARY_UP, f)
    }

    /// Secondary press. Mouse only; touch has no secondary button.
    pub fn on_secondary_down<F>(&self, f: F) -> PointerCallback<C>
    where
        F: Fn(&C, &PointerEvent) + 'static,
    {
        self.listen(CHANNEL_SECONDARY_DOWN, f)
    }

    /// Secondary release. Mouse only.
    pub fn on_secondary_up<F>(&self, f: F) -> PointerCallback<C>
    where
        F: Fn(&C, &PointerEvent) + 'static,
    {
        self.listen(CHANNEL_SECONDARY_UP, f)
    }

    /// Primary press that landed on a scrollbar of the target.
    pub fn on_scroll_down<F>(&self, f: F) -> PointerCallback<C>
    where
        F: Fn(&C, &PointerEvent) + 'static,
    {
        self.listen(CHANNEL_SCROLL_DOWN, f)
    }

    /// Primary release that landed on a scrollbar of the target.
    pub fn on_scroll_up<F>(&self, f: F) -> PointerCallback<C>
    where
        F: Fn(&C, &PointerEvent) + 'static,
    {
        self.listen(CHANNEL_SCROLL_UP, f)
    }

    /// Remove a callback returned by one of the `on_*` methods.
    pub fn off(&self, channel: &str, handle: &PointerCallback<C>) {
        self.registry.remove(channel, handle);
    }

    fn listen<F>(&self, channel: &str, f: F) -> PointerCallback<C>
    where
        F: Fn(&C, &PointerEvent) + 'static,
    {
        let handle = callback(f);
        self.registry.add(channel, handle.clone());
        handle
    }

    // ========================================================================
    // Touch input
    // ========================================================================

    /// Feed a touch signal that originated on the owned element.
    pub fn handle_touch(&self, input: &TouchInput) {
        profile_scope!("handle_touch");

        let (channel, kind, point) = match input.kind {
            TouchEventKind::Start => (
                CHANNEL_PRIMARY_DOWN,
                PointerKind::Down,
                self.touches.resolve_down(input),
            ),
            TouchEventKind::Move => (
                CHANNEL_PRIMARY_MOVE,
                PointerKind::Move,
                self.touches.resolve_move(input),
            ),
            TouchEventKind::End | TouchEventKind::Cancel => (
                CHANNEL_PRIMARY_UP,
                PointerKind::Up,
                self.touches.resolve_up(input),
            ),
        };

        let Some(point) = point else {
            self.stats.borrow_mut().record_suppressed();
            return;
        };

        self.dispatch(
            channel,
            PointerEvent {
                kind,
                button: LogicalButton::Primary,
                source: PointerSource::Touch { id: point.id },
                position: point.page,
                target: input.target,
            },
        );
    }

    pub(crate) fn dispatch(&self, channel: &'static str, event: PointerEvent) {
        trace!(
            channel,
            x = event.position.x,
            y = event.position.y,
            touch = event.touch_id(),
            "pointer dispatch"
        );
        let (_, elapsed_ms) = measure(|| {
            self.registry.run(channel, &event);
        });
        self.stats.borrow_mut().record(channel, elapsed_ms);
    }
}
