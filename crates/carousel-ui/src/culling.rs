//! Which items are on screen, and where.
//!
//! Two placements are supported. The *strip* placement lays slots out in a
//! row at `offset + slot * full_width` and returns only the slots that touch
//! the viewport, plus one slot of overscan on each side. The *circular*
//! placement puts each data item once, at its shortest circular distance from
//! the (fractional) centered position, and produces at most
//! `ceil(container_width / full_width) + 2` items.

use carousel_core::{circular_distance_f32, offset_to_position, ItemGeometry, ViewportGeometry};
use smallvec::SmallVec;

/// One item to render this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleItem {
    /// Strip slot; equal to `data_index` outside the loop window.
    pub slot: i64,
    pub data_index: usize,
    /// Leading edge relative to the container.
    pub x: f32,
    pub scale: f32,
    pub is_selected: bool,
}

pub type VisibleItems = SmallVec<[VisibleItem; 8]>;

/// Number of items the circular placement produces for this geometry.
pub fn visible_range(item: ItemGeometry, viewport: ViewportGeometry) -> usize {
    let full = item.full_width();
    if full <= 0.0 || !viewport.is_laid_out() {
        return 0;
    }
    (viewport.container_width / full).ceil() as usize + 2
}

/// Inclusive range of strip slots that intersect the viewport, widened by
/// one slot per side.
pub fn visible_slot_range(
    render_offset: f32,
    item: ItemGeometry,
    viewport: ViewportGeometry,
) -> Option<(i64, i64)> {
    let full = item.full_width();
    if full <= 0.0 || !viewport.is_laid_out() {
        return None;
    }
    let first = ((-render_offset - item.width) / full).floor() as i64 + 1;
    let last = ((viewport.container_width - render_offset) / full).ceil() as i64 - 1;
    Some((first - 1, last.max(first) + 1))
}

/// Strip placement restricted to `slots` (`start..end`).
pub fn strip_items(
    render_offset: f32,
    item: ItemGeometry,
    viewport: ViewportGeometry,
    slots: std::ops::Range<i64>,
    mut data_index: impl FnMut(i64) -> usize,
) -> VisibleItems {
    let mut items = VisibleItems::new();
    let Some((first, last)) = visible_slot_range(render_offset, item, viewport) else {
        return items;
    };
    let full = item.full_width();
    for slot in first.max(slots.start)..=last.min(slots.end - 1) {
        items.push(VisibleItem {
            slot,
            data_index: data_index(slot),
            x: render_offset + slot as f32 * full,
            scale: 1.0,
            is_selected: false,
        });
    }
    items
}

/// Circular placement of `item_count` data items around the position that
/// `render_offset` centers.
pub fn circular_items(
    render_offset: f32,
    item: ItemGeometry,
    viewport: ViewportGeometry,
    item_count: usize,
) -> VisibleItems {
    let mut items = VisibleItems::new();
    let range = visible_range(item, viewport);
    if item_count == 0 || range == 0 {
        return items;
    }
    let full = item.full_width();
    let n = item_count as f32;
    let position = offset_to_position(
        render_offset,
        item.width,
        item.spacing,
        viewport.container_width,
    )
    .rem_euclid(n);
    let center_x = (viewport.container_width - item.width) / 2.0;

    let count = range.min(item_count) as i64;
    let base = position.round() as i64;
    let start = base - (count - 1) / 2;
    for k in 0..count {
        let data_index = carousel_core::wrap_index(start + k, item_count);
        let distance = circular_distance_f32(position, data_index as f32, item_count);
        items.push(VisibleItem {
            slot: data_index as i64,
            data_index,
            x: center_x + distance * full,
            scale: 1.0,
            is_selected: false,
        });
    }
    items.sort_by(|a, b| a.x.total_cmp(&b.x));
    items
}
