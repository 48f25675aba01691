//! Scrollbar gutter detection.
//!
//! Decides whether a pointer position falls on an element's rendered
//! scrollbar. A gutter only exists on an edge when the element actually
//! overflows in that dimension: a vertical overflow puts a bar on the right
//! edge, a horizontal overflow puts one on the bottom edge.
//!
//! ## Scrollbar Width
//!
//! The platform thickness is probed through the geometry source the first
//! time it is needed and cached for the detector's lifetime. Hosts that
//! already know it (or want gutters disabled) preset it with
//! `with_scrollbar_width`.

use crate::input::coords::{BoxSpace, CoordinateConverter};
use crate::scroll::geometry::GeometrySource;
use crate::types::{Point, Target};
use once_cell::unsync::OnceCell;
use serde::Serialize;
use tracing::{debug, trace};

/// Width of the scrollbar gutter on each edge, zero when absent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScrollbarSize {
    pub right: f32,
    pub bottom: f32,
}

impl ScrollbarSize {
    pub const NONE: ScrollbarSize = ScrollbarSize {
        right: 0.0,
        bottom: 0.0,
    };

    /// True if either edge has a gutter
    pub fn any(&self) -> bool {
        self.right > 0.0 || self.bottom > 0.0
    }

    /// Whether a box-relative position lies inside one of the gutters of a
    /// box of `width` x `height`.
    #[inline]
    pub fn contains(&self, local: Point, width: f32, height: f32) -> bool {
        (self.right > 0.0 && local.x >= width - self.right)
            || (self.bottom > 0.0 && local.y >= height - self.bottom)
    }
}

#[derive(Clone, Copy)]
enum Axis {
    Vertical,
    Horizontal,
}

/// Hit tests positions against scrollbar gutters.
pub struct ScrollRegionDetector<G: GeometrySource> {
    geometry: G,
    scrollbar_width: OnceCell<f32>,
}

impl<G: GeometrySource> ScrollRegionDetector<G> {
    /// Detector that probes the scrollbar width on first use.
    pub fn new(geometry: G) -> Self {
        Self {
            geometry,
            scrollbar_width: OnceCell::new(),
        }
    }

    /// Detector with a known scrollbar width; the geometry is never probed.
    pub fn with_scrollbar_width(geometry: G, width: f32) -> Self {
        Self {
            geometry,
            scrollbar_width: OnceCell::with_value(width.max(0.0)),
        }
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Platform scrollbar thickness in pixels.
    pub fn scrollbar_width(&self) -> f32 {
        *self.scrollbar_width.get_or_init(|| {
            let width = self.geometry.probe_scrollbar_width().max(0.0);
            debug!(width, "probed scrollbar width");
            width
        })
    }

    /// Gutter widths of `target`. Unknown elements have none.
    pub fn scrollbar_size(&self, target: Target) -> ScrollbarSize {
        let (visible, extent) = match target {
            Target::Element(id) => match self.geometry.element_metrics(id) {
                Some(metrics) => (metrics.visible, metrics.scroll_size),
                None => {
                    trace!(element = id.0, "no metrics for element");
                    return ScrollbarSize::NONE;
                }
            },
            Target::Viewport => {
                let viewport = self.geometry.viewport_metrics();
                (viewport.window, viewport.document)
            }
        };

        let width = self.scrollbar_width();
        ScrollbarSize {
            right: if extent.height > visible.height { width } else { 0.0 },
            bottom: if extent.width > visible.width { width } else { 0.0 },
        }
    }

    /// Whether the page position `page` is on one of `target`'s scrollbars.
    pub fn is_in_scroll_region(&self, target: Target, page: Point) -> bool {
        let Some(space) = self.box_space(target) else {
            return false;
        };

        let size = self.scrollbar_size(target);
        if !size.any() {
            return false;
        }

        let local = CoordinateConverter::page_to_box(page, &space);
        size.contains(local, space.size.width, space.size.height)
    }

    /// Box that positions on `target` are measured against. The viewport
    /// uses the window size offset by the page scroll position.
    pub fn box_space(&self, target: Target) -> Option<BoxSpace> {
        match target {
            Target::Element(id) => self
                .geometry
                .element_metrics(id)
                .map(|m| BoxSpace::new(m.origin, m.size)),
            Target::Viewport => {
                let viewport = self.geometry.viewport_metrics();
                Some(BoxSpace::new(viewport.scroll_offset, viewport.window))
            }
        }
    }

    // ========================================================================
    // Scroll position helpers
    // ========================================================================

    /// Pixels that can be scrolled vertically (never negative).
    pub fn scroll_top_available(&self, target: Target) -> f32 {
        self.available(target, Axis::Vertical)
    }

    /// Pixels that can be scrolled horizontally (never negative).
    pub fn scroll_left_available(&self, target: Target) -> f32 {
        self.available(target, Axis::Horizontal)
    }

    /// Vertical scroll position as a fraction from 0.0 to 1.0.
    pub fn scroll_top_fraction(&self, target: Target) -> f32 {
        self.fraction(target, Axis::Vertical)
    }

    /// Horizontal scroll position as a fraction from 0.0 to 1.0.
    pub fn scroll_left_fraction(&self, target: Target) -> f32 {
        self.fraction(target, Axis::Horizontal)
    }

    /// Scroll offset that puts `target` at `fraction` of its vertical range.
    pub fn scroll_top_for_fraction(&self, target: Target, fraction: f32) -> f32 {
        self.available(target, Axis::Vertical) * fraction.clamp(0.0, 1.0)
    }

    /// Scroll offset that puts `target` at `fraction` of its horizontal range.
    pub fn scroll_left_for_fraction(&self, target: Target, fraction: f32) -> f32 {
        self.available(target, Axis::Horizontal) * fraction.clamp(0.0, 1.0)
    }

    fn available(&self, target: Target, axis: Axis) -> f32 {
        let (visible, extent, _) = self.scroll_metrics(target);
        let diff = match axis {
            Axis::Vertical => extent.height - visible.height,
            Axis::Horizontal => extent.width - visible.width,
        };
        diff.max(0.0)
    }

    fn fraction(&self, target: Target, axis: Axis) -> f32 {
        let available = self.available(target, axis);
        if available == 0.0 {
            return 0.0;
        }
        let (_, _, offset) = self.scroll_metrics(target);
        let position = match axis {
            Axis::Vertical => offset.y,
            Axis::Horizontal => offset.x,
        };
        (position / available).clamp(0.0, 1.0)
    }

    fn scroll_metrics(&self, target: Target) -> (crate::types::Size, crate::types::Size, Point) {
        match target {
            Target::Element(id) => self
                .geometry
                .element_metrics(id)
                .map(|m| (m.visible, m.scroll_size, m.scroll_offset))
                .unwrap_or_default(),
            Target::Viewport => {
                let viewport = self.geometry.viewport_metrics();
                (viewport.window, viewport.document, viewport.scroll_offset)
            }
        }
    }
}
