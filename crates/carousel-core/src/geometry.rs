//! Item and viewport geometry.
//!
//! Everything here is a pure value computation. The strip is laid out as a
//! single row of equally sized items separated by `spacing`; the offset of the
//! row is chosen so the item at a given index sits in the horizontal center of
//! the container.

/// Width and height reported by a measurement pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Resolved size of one carousel item plus the gap that follows it.
///
/// A width of zero means the geometry is still unmeasured and the carousel
/// must not render interactive content yet.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ItemGeometry {
    pub width: f32,
    pub height: f32,
    pub spacing: f32,
}

impl ItemGeometry {
    pub const UNMEASURED: ItemGeometry = ItemGeometry {
        width: 0.0,
        height: 0.0,
        spacing: 0.0,
    };

    pub fn new(width: f32, height: f32, spacing: f32) -> Self {
        Self {
            width,
            height,
            spacing,
        }
    }

    /// Returns true once a positive width is known.
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.width.is_finite()
    }

    /// Distance between the leading edges of two neighbouring items.
    #[inline]
    pub fn full_width(&self) -> f32 {
        self.width + self.spacing
    }
}

/// Size of the container the strip is centered in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportGeometry {
    pub container_width: f32,
}

impl ViewportGeometry {
    pub fn new(container_width: f32) -> Self {
        Self { container_width }
    }

    pub fn is_laid_out(&self) -> bool {
        self.container_width > 0.0 && self.container_width.is_finite()
    }
}

#[inline]
fn positive(value: Option<f32>) -> Option<f32> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Picks the effective item width.
///
/// A fixed width wins when present, otherwise the measured width is used.
/// Returns `0.0` (unmeasured) when neither is available or when the container
/// itself has not been laid out yet, since the strip cannot be centered
/// without it.
pub fn resolve_item_width(measured: Option<f32>, fixed: Option<f32>, container_width: f32) -> f32 {
    if !(container_width.is_finite() && container_width > 0.0) {
        return 0.0;
    }
    positive(fixed).or(positive(measured)).unwrap_or(0.0)
}

/// Picks the effective item height.
///
/// With an aspect ratio (width ÷ height) the height follows the width,
/// otherwise the measured height is used as is.
pub fn resolve_item_height(measured: Option<f32>, width: f32, ratio: Option<f32>) -> f32 {
    match positive(ratio) {
        Some(ratio) if width > 0.0 => width / ratio,
        _ => positive(measured).unwrap_or(0.0),
    }
}

/// Strip offset that centers the item at `index` inside the container.
///
/// `-(width + spacing) * index + (container_width - width) / 2`
#[inline]
pub fn compute_offset(index: f32, width: f32, spacing: f32, container_width: f32) -> f32 {
    -(width + spacing) * index + (container_width - width) / 2.0
}

/// Inverse of [`compute_offset`]: the fractional strip position that is
/// centered for a given strip offset.
#[inline]
pub fn offset_to_position(offset: f32, width: f32, spacing: f32, container_width: f32) -> f32 {
    let full = width + spacing;
    if full <= 0.0 {
        return 0.0;
    }
    ((container_width - width) / 2.0 - offset) / full
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_width_wins_over_measured() {
        assert_eq!(resolve_item_width(Some(250.0), Some(300.0), 400.0), 300.0);
    }

    #[test]
    fn measured_width_used_without_fixed() {
        assert_eq!(resolve_item_width(Some(250.0), None, 400.0), 250.0);
        assert_eq!(resolve_item_width(Some(250.0), Some(0.0), 400.0), 250.0);
    }

    #[test]
    fn unmeasured_resolves_to_zero() {
        assert_eq!(resolve_item_width(None, None, 400.0), 0.0);
        assert_eq!(resolve_item_width(Some(-3.0), None, 400.0), 0.0);
        assert_eq!(resolve_item_width(Some(250.0), Some(300.0), 0.0), 0.0);
    }

    #[test]
    fn height_follows_ratio() {
        assert_eq!(resolve_item_height(Some(50.0), 320.0, Some(16.0 / 9.0)), 180.0);
        assert_eq!(resolve_item_height(Some(50.0), 320.0, None), 50.0);
    }

    #[test]
    fn offset_centers_selected_item() {
        // 300 wide item in a 400 wide container leaves 50 on each side.
        assert_eq!(compute_offset(0.0, 300.0, 16.0, 400.0), 50.0);
        assert_eq!(compute_offset(2.0, 300.0, 16.0, 400.0), 50.0 - 2.0 * 316.0);
    }

    #[test]
    fn offset_position_round_trip() {
        let offset = compute_offset(3.25, 300.0, 16.0, 400.0);
        let position = offset_to_position(offset, 300.0, 16.0, 400.0);
        assert!((position - 3.25).abs() < 1e-4, "got {position}");
    }

    #[test]
    fn full_width_includes_spacing() {
        let geometry = ItemGeometry::new(300.0, 200.0, 16.0);
        assert!(geometry.is_measured());
        assert_eq!(geometry.full_width(), 316.0);
        assert!(!ItemGeometry::UNMEASURED.is_measured());
    }
}
