//! Layout query surface.
//!
//! The scroll detector never measures anything itself. Every platform (a
//! browser binding, a native toolkit, a test fixture) implements
//! `GeometrySource` and reports already-normalized metrics, so engine
//! quirks about what counts as "visible" size stay on the platform side.

use crate::types::{ElementId, Point, Size};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Box and scroll metrics of one element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementMetrics {
    /// Page position of the content box
    pub origin: Point,
    /// Content box size, used for gutter hit testing
    pub size: Size,
    /// Visible (client) size the scrollable extent is compared against
    pub visible: Size,
    /// Total scrollable extent
    pub scroll_size: Size,
    /// Current scroll position
    pub scroll_offset: Point,
}

/// Metrics of the window and document root.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    /// Visible window size
    pub window: Size,
    /// Full document size
    pub document: Size,
    /// Page scroll position
    pub scroll_offset: Point,
}

/// Geometry queries a platform provides to the scroll detector.
pub trait GeometrySource {
    /// Metrics for `element`, or `None` if the host doesn't know it.
    fn element_metrics(&self, element: ElementId) -> Option<ElementMetrics>;

    fn viewport_metrics(&self) -> ViewportMetrics;

    /// Measure the platform scrollbar thickness.
    ///
    /// Typically: lay out an overflowing container off-screen and return
    /// its outer width minus its inner width. Called at most once per
    /// detector.
    fn probe_scrollbar_width(&self) -> f32;
}

/// In-memory geometry for hosts that push layout snapshots.
#[derive(Debug, Default)]
pub struct StaticGeometry {
    elements: RefCell<HashMap<ElementId, ElementMetrics>>,
    viewport: Cell<ViewportMetrics>,
    scrollbar_width: Cell<f32>,
    probes: Cell<u32>,
}

impl StaticGeometry {
    pub fn new(scrollbar_width: f32) -> Self {
        Self {
            scrollbar_width: Cell::new(scrollbar_width),
            ..Default::default()
        }
    }

    pub fn with_element(self, id: ElementId, metrics: ElementMetrics) -> Self {
        self.set_element(id, metrics);
        self
    }

    pub fn with_viewport(self, viewport: ViewportMetrics) -> Self {
        self.viewport.set(viewport);
        self
    }

    /// Insert or replace an element's metrics.
    pub fn set_element(&self, id: ElementId, metrics: ElementMetrics) {
        self.elements.borrow_mut().insert(id, metrics);
    }

    pub fn remove_element(&self, id: ElementId) -> bool {
        self.elements.borrow_mut().remove(&id).is_some()
    }

    pub fn set_viewport(&self, viewport: ViewportMetrics) {
        self.viewport.set(viewport);
    }

    /// How many times the scrollbar width has been probed.
    pub fn probe_count(&self) -> u32 {
        self.probes.get()
    }
}

impl GeometrySource for StaticGeometry {
    fn element_metrics(&self, element: ElementId) -> Option<ElementMetrics> {
        self.elements.borrow().get(&element).copied()
    }

    fn viewport_metrics(&self) -> ViewportMetrics {
        self.viewport.get()
    }

    fn probe_scrollbar_width(&self) -> f32 {
        self.probes.set(self.probes.get() + 1);
        self.scrollbar_width.get()
    }
}

impl<G: GeometrySource + ?Sized> GeometrySource for std::rc::Rc<G> {
    fn element_metrics(&self, element: ElementId) -> Option<ElementMetrics> {
        (**self).element_metrics(element)
    }

    fn viewport_metrics(&self) -> ViewportMetrics {
        (**self).viewport_metrics()
    }

    fn probe_scrollbar_width(&self) -> f32 {
        (**self).probe_scrollbar_width()
    }
}
