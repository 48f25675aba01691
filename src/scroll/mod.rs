//! Scrollbar geometry.
//!
//! - `geometry` - `GeometrySource` platform seam and `StaticGeometry`
//! - `detector` - gutter sizes, gutter hit testing, scroll fractions

mod detector;
mod geometry;

pub use detector::{ScrollRegionDetector, ScrollbarSize};
pub use geometry::{ElementMetrics, GeometrySource, StaticGeometry, ViewportMetrics};
