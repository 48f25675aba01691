//! Unit tests for scrollbar gutter detection.

use crate::helpers::{PANEL, SCROLLBAR, TestGeometryBuilder, at, panel_metrics};
use pointerkit::{ScrollRegionDetector, ScrollbarSize, Size, Target};

#[test]
fn test_right_gutter_requires_strict_vertical_overflow() {
    let cases = [(101.0, SCROLLBAR), (100.0, 0.0), (40.0, 0.0)];

    for (scroll_height, expected) in cases {
        let geometry = TestGeometryBuilder::new()
            .with_element(PANEL, panel_metrics(Size::new(200.0, scroll_height)))
            .build();
        let detector = ScrollRegionDetector::new(geometry);
        assert_eq!(
            detector.scrollbar_size(PANEL.into()).right,
            expected,
            "scroll height {scroll_height}"
        );
    }
}

#[test]
fn test_bottom_gutter_requires_strict_horizontal_overflow() {
    let cases = [(201.0, SCROLLBAR), (200.0, 0.0)];

    for (scroll_width, expected) in cases {
        let geometry = TestGeometryBuilder::new()
            .with_element(PANEL, panel_metrics(Size::new(scroll_width, 100.0)))
            .build();
        let detector = ScrollRegionDetector::new(geometry);
        assert_eq!(detector.scrollbar_size(PANEL.into()).bottom, expected);
    }
}

#[test]
fn test_both_gutters() {
    let geometry = TestGeometryBuilder::new()
        .with_panel_overflowing(true, true)
        .build();
    let detector = ScrollRegionDetector::new(geometry);

    assert_eq!(
        detector.scrollbar_size(PANEL.into()),
        ScrollbarSize { right: SCROLLBAR, bottom: SCROLLBAR }
    );
    // Panel spans (100, 50)..(300, 150).
    assert!(detector.is_in_scroll_region(PANEL.into(), at(290.0, 60.0)));
    assert!(detector.is_in_scroll_region(PANEL.into(), at(120.0, 140.0)));
    assert!(!detector.is_in_scroll_region(PANEL.into(), at(120.0, 60.0)));
}

#[test]
fn test_zero_width_disables_gutters() {
    let geometry = TestGeometryBuilder::new()
        .with_panel_overflowing(true, true)
        .build();
    let detector = ScrollRegionDetector::with_scrollbar_width(geometry, 0.0);

    assert!(!detector.scrollbar_size(PANEL.into()).any());
    assert!(!detector.is_in_scroll_region(PANEL.into(), at(299.0, 149.0)));
}

#[test]
fn test_viewport_bottom_gutter() {
    let geometry = TestGeometryBuilder::new()
        .with_viewport(Size::new(800.0, 600.0), Size::new(1600.0, 600.0), at(400.0, 0.0))
        .build();
    let detector = ScrollRegionDetector::new(geometry);

    assert_eq!(
        detector.scrollbar_size(Target::Viewport),
        ScrollbarSize { right: 0.0, bottom: SCROLLBAR }
    );
    // Page x 900 is window x 500.
    assert!(detector.is_in_scroll_region(Target::Viewport, at(900.0, 590.0)));
    assert!(!detector.is_in_scroll_region(Target::Viewport, at(900.0, 580.0)));
    assert_eq!(detector.scroll_left_fraction(Target::Viewport), 0.5);
}
