//! Page indicator layout.
//!
//! The engine does not draw the indicator. It reports where each dot goes,
//! how wide the row is, and whether the row has to scroll because it does
//! not fit between the horizontal insets.

use carousel_core::Size;
use smallvec::SmallVec;

use crate::config::{Indicator, IndicatorStyle};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorDot {
    pub index: usize,
    /// Leading edge relative to the start of the row content.
    pub x: f32,
    pub size: Size,
    pub is_selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorLayout {
    pub dots: SmallVec<[IndicatorDot; 8]>,
    /// Width of the dots plus background padding.
    pub content_width: f32,
    pub content_height: f32,
    /// Width the row occupies on screen.
    pub max_width: f32,
    /// The content is wider than the space between the insets.
    pub is_scrollable: bool,
    /// Scroll position that centers the selected dot, clamped to the content.
    pub scroll_offset: f32,
    pub top_padding: f32,
}

fn dot_size(style: &IndicatorStyle, selected: bool) -> Size {
    match *style {
        IndicatorStyle::Dots { radius, .. } => Size::new(radius * 2.0, radius * 2.0),
        IndicatorStyle::Custom { normal, selected: sel } => {
            if selected {
                sel
            } else {
                normal
            }
        }
    }
}

/// Lays out `item_count` indicator items for a container `container_width`
/// wide.
pub fn layout_indicator(
    indicator: &Indicator,
    item_count: usize,
    selected_index: usize,
    container_width: f32,
) -> IndicatorLayout {
    let padding = indicator
        .background
        .map(|background| background.padding())
        .unwrap_or_default();

    let mut dots = SmallVec::new();
    let mut cursor = padding.leading;
    let mut tallest: f32 = 0.0;
    let mut selected_center = cursor;
    for index in 0..item_count {
        let is_selected = index == selected_index;
        let size = dot_size(&indicator.style, is_selected);
        if is_selected {
            selected_center = cursor + size.width / 2.0;
        }
        dots.push(IndicatorDot {
            index,
            x: cursor,
            size,
            is_selected,
        });
        tallest = tallest.max(size.height);
        cursor += size.width + indicator.spacing;
    }
    if item_count > 0 {
        cursor -= indicator.spacing;
    }
    let content_width = cursor + padding.trailing;
    let content_height = tallest + padding.vertical();

    let available = (container_width - indicator.horizontal_inset * 2.0).max(0.0);
    let is_scrollable = content_width > available;
    let max_width = if is_scrollable { available } else { content_width };
    let scroll_offset = if is_scrollable {
        (selected_center - available / 2.0).clamp(0.0, content_width - available)
    } else {
        0.0
    };

    IndicatorLayout {
        dots,
        content_width,
        content_height,
        max_width,
        is_scrollable,
        scroll_offset,
        top_padding: indicator.top_padding,
    }
}
