//! Assertion helpers for carousel tests.
//!
//! Positions are compared with a tolerance: offsets go through easing curves
//! and `f32` arithmetic, so exact equality only holds once settled.

use carousel_ui::{CarouselEngine, VisibleItem};

/// Panics with `msg` unless `actual` lies within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    if diff <= tolerance {
        return;
    }
    panic!("{msg}: {actual} is {diff} away from {expected} (allowed {tolerance})");
}

pub fn assert_selected(engine: &CarouselEngine, expected: i64, msg: &str) {
    let actual = engine.selected_index();
    assert_eq!(actual, expected, "{msg}: selected index is {actual}, wanted {expected}");
}

/// Asserts that the selected item sits in the horizontal center of the
/// container.
pub fn assert_centered(engine: &CarouselEngine, tolerance: f32, msg: &str) {
    let width = engine.item_geometry().width;
    let container = engine.viewport().container_width;
    let selected = engine
        .visible_items()
        .into_iter()
        .find(|item| item.is_selected)
        .map(|item| item.x);
    let Some(x) = selected else {
        panic!("{msg}: selected item is not visible");
    };
    assert_approx_eq(x, (container - width) / 2.0, tolerance, msg);
}

/// Asserts that neighbouring visible items are exactly one item pitch apart.
pub fn assert_evenly_spaced(items: &[VisibleItem], pitch: f32, tolerance: f32, msg: &str) {
    for pair in items.windows(2) {
        assert_approx_eq(
            pair[1].x - pair[0].x,
            pitch,
            tolerance,
            &format!("{msg}: slots {} and {}", pair[0].slot, pair[1].slot),
        );
    }
}

/// Asserts how many items were produced, listing their data indices on
/// failure.
pub fn assert_visible_count(items: &[VisibleItem], expected: usize, msg: &str) {
    let indices: Vec<usize> = items.iter().map(|item| item.data_index).collect();
    assert_eq!(
        indices.len(),
        expected,
        "{msg}: visible data indices {indices:?}"
    );
}
