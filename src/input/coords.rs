//! Coordinate conversion between page space and an element's box.

use crate::types::{Point, Size};

/// A box in page coordinates that positions can be made relative to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSpace {
    /// Page position of the box's top-left corner
    pub origin: Point,
    pub size: Size,
}

impl BoxSpace {
    #[inline]
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a page position to a position relative to `space`
    #[inline]
    pub fn page_to_box(page: Point, space: &BoxSpace) -> Point {
        page.offset_by(space.origin)
    }

    /// Convert a box-relative position back to page space
    #[inline]
    pub fn box_to_page(local: Point, space: &BoxSpace) -> Point {
        Point::new(local.x + space.origin.x, local.y + space.origin.y)
    }
}
