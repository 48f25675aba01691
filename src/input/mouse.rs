//! Mouse signal handling - button filtering and scrollbar exclusion.

use crate::constants::{
    CHANNEL_DOCUMENT_PRIMARY_UP, CHANNEL_PRIMARY_DOWN, CHANNEL_PRIMARY_MOVE, CHANNEL_PRIMARY_UP,
    CHANNEL_SCROLL_DOWN, CHANNEL_SCROLL_UP, CHANNEL_SECONDARY_DOWN, CHANNEL_SECONDARY_UP,
};
use crate::input::events::{
    LogicalButton, MouseEventKind, MouseInput, PointerEvent, PointerKind, PointerSource,
};
use crate::input::pointer::PointerUnifier;
use crate::profile_scope;
use crate::scroll::GeometrySource;
use tracing::trace;

fn mouse_event(kind: PointerKind, button: LogicalButton, input: &MouseInput) -> PointerEvent {
    PointerEvent {
        kind,
        button,
        source: PointerSource::Mouse,
        position: input.page,
        target: input.target,
    }
}

impl<G: GeometrySource, C: Clone + 'static> PointerUnifier<G, C> {
    /// Feed a mouse signal that originated on the owned element.
    pub fn handle_mouse(&self, input: &MouseInput) {
        profile_scope!("handle_mouse");

        let button = self.buttons.classify(input.button);
        match (input.kind, button) {
            (MouseEventKind::Move, _) => {
                self.dispatch(
                    CHANNEL_PRIMARY_MOVE,
                    mouse_event(PointerKind::Move, LogicalButton::Primary, input),
                );
            }
            (MouseEventKind::Down, Some(LogicalButton::Primary)) => {
                let event = mouse_event(PointerKind::Down, LogicalButton::Primary, input);
                if self.detector.is_in_scroll_region(input.target, input.page) {
                    trace!(x = input.page.x, y = input.page.y, "primary down on scrollbar");
                    self.stats.borrow_mut().record_suppressed();
                    self.dispatch(CHANNEL_SCROLL_DOWN, event);
                } else {
                    self.dispatch(CHANNEL_PRIMARY_DOWN, event);
                }
            }
            (MouseEventKind::Up, Some(LogicalButton::Primary)) => {
                let event = mouse_event(PointerKind::Up, LogicalButton::Primary, input);
                self.dispatch(CHANNEL_PRIMARY_UP, event);
                // Skip the geometry query when nobody listens.
                if self.registry.has_listeners(CHANNEL_SCROLL_UP)
                    && self.detector.is_in_scroll_region(input.target, input.page)
                {
                    self.dispatch(CHANNEL_SCROLL_UP, event);
                }
            }
            (MouseEventKind::Down, Some(LogicalButton::Secondary)) => {
                self.dispatch(
                    CHANNEL_SECONDARY_DOWN,
                    mouse_event(PointerKind::Down, LogicalButton::Secondary, input),
                );
            }
            (MouseEventKind::Up, Some(LogicalButton::Secondary)) => {
                self.dispatch(
                    CHANNEL_SECONDARY_UP,
                    mouse_event(PointerKind::Up, LogicalButton::Secondary, input),
                );
            }
            (_, None) => {
                trace!(button = input.button, "ignoring unmapped button");
            }
        }
    }

    /// Feed a mouse signal seen at document level, wherever it landed.
    ///
    /// Only primary releases matter here: they end drags whose release
    /// happened off the owned element. Hosts that deliver the same release
    /// to both handlers should call `handle_mouse` first, matching bubbling
    /// order.
    pub fn handle_document_mouse(&self, input: &MouseInput) {
        if input.kind != MouseEventKind::Up
            || self.buttons.classify(input.button) != Some(LogicalButton::Primary)
        {
            return;
        }

        self.dispatch(
            CHANNEL_DOCUMENT_PRIMARY_UP,
            mouse_event(PointerKind::Up, LogicalButton::Primary, input),
        );
    }
}
