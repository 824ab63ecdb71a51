//! Carousel configuration.
//!
//! A [`CarouselConfig`] is built once and handed to the engine constructor.
//! Shared look-and-feel lives in [`CarouselStyle`], a set of optional
//! overrides that can be layered (`child.merged_with(&parent)`) before being
//! applied to a config. Nothing is looked up implicitly.

use std::time::Duration;

use carousel_animation::AnimationSpec;
use carousel_core::Size;
use thiserror::Error;

/// Default gap between neighbouring items.
pub const DEFAULT_ITEM_SPACING: f32 = 16.0;
/// Default indicator top padding and horizontal inset.
pub const DEFAULT_INDICATOR_PADDING: f32 = 16.0;
/// Default radius of an indicator dot.
pub const DEFAULT_INDICATOR_RADIUS: f32 = 4.0;
/// Default gap between indicator dots.
pub const DEFAULT_INDICATOR_SPACING: f32 = 8.0;
/// Default scale of items that are not selected.
pub const DEFAULT_UNSELECTED_SCALE: f32 = 0.8;
/// Default auto-play interval.
pub const DEFAULT_AUTO_PLAY_INTERVAL: Duration = Duration::from_secs(3);
/// Default pause after a user interaction before auto-play resumes.
pub const DEFAULT_INTERACTION_COOLDOWN: Duration = Duration::from_secs(2);
/// Default number of data segments in the loop window.
pub const DEFAULT_LOOP_SEGMENTS: usize = 3;
/// Largest data set that `LoopRendering::Auto` renders through the window.
pub const DEFAULT_MAX_WINDOWED_ITEMS: usize = 6;

/// Invalid configuration detected at construction time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("item aspect ratio must be positive, got {0}")]
    InvalidRatio(f32),
    #[error("item spacing must be non-negative, got {0}")]
    NegativeSpacing(f32),
    #[error("fixed item width must be positive, got {0}")]
    InvalidFixedWidth(f32),
    #[error("auto-play interval must be non-zero")]
    ZeroAutoPlayInterval,
    #[error("unselected scale must be in (0, 1], got {0}")]
    InvalidUnselectedScale(f32),
    #[error("loop window needs at least 3 segments, got {0}")]
    TooFewLoopSegments(usize),
}

/// RGBA color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const GRAY: Color = Color(0.56, 0.56, 0.58, 1.0);
    pub const BLUE: Color = Color(0.0, 0.48, 1.0, 1.0);
    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);

    pub fn with_alpha(self, alpha: f32) -> Self {
        Color(self.0, self.1, self.2, alpha)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub leading: f32,
    pub bottom: f32,
    pub trailing: f32,
}

impl EdgeInsets {
    /// Padding around indicator dots inside a background.
    pub const INDICATOR: EdgeInsets = EdgeInsets {
        top: 8.0,
        leading: 12.0,
        bottom: 8.0,
        trailing: 12.0,
    };

    pub const fn new(top: f32, leading: f32, bottom: f32, trailing: f32) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.leading + self.trailing
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// How the item width is determined.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum WidthMode {
    /// Every item has this width.
    Fixed(f32),
    /// The width of the first rendered item is used.
    #[default]
    Measured,
    /// Items are as wide as the container.
    FillContainer,
}

/// Item dimensions and spacing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemLayout {
    pub width: WidthMode,
    /// Width ÷ height. When set the item height follows the resolved width.
    pub ratio: Option<f32>,
    pub spacing: f32,
}

impl Default for ItemLayout {
    fn default() -> Self {
        Self {
            width: WidthMode::Measured,
            ratio: None,
            spacing: DEFAULT_ITEM_SPACING,
        }
    }
}

impl ItemLayout {
    pub fn fixed(width: f32) -> Self {
        Self {
            width: WidthMode::Fixed(width),
            ..Self::default()
        }
    }

    pub fn fill_container() -> Self {
        Self {
            width: WidthMode::FillContainer,
            ..Self::default()
        }
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_ratio(mut self, ratio: f32) -> Self {
        self.ratio = Some(ratio);
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let WidthMode::Fixed(width) = self.width {
            if !(width.is_finite() && width > 0.0) {
                return Err(ConfigError::InvalidFixedWidth(width));
            }
        }
        if let Some(ratio) = self.ratio {
            if !(ratio.is_finite() && ratio > 0.0) {
                return Err(ConfigError::InvalidRatio(ratio));
            }
        }
        if self.spacing.is_nan() || self.spacing < 0.0 {
            return Err(ConfigError::NegativeSpacing(self.spacing));
        }
        Ok(())
    }
}

/// Scale applied to items that are not selected, animated on selection
/// changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleAnimation {
    pub unselected_scale: f32,
    pub animation: AnimationSpec,
}

impl Default for ScaleAnimation {
    fn default() -> Self {
        Self {
            unselected_scale: DEFAULT_UNSELECTED_SCALE,
            animation: AnimationSpec::ease_in_out(Duration::from_millis(300)),
        }
    }
}

impl ScaleAnimation {
    pub fn new(unselected_scale: f32, duration: Duration) -> Self {
        Self {
            unselected_scale,
            animation: AnimationSpec::ease_in_out(duration),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AutoPlayDirection {
    #[default]
    Forward,
    Backward,
}

impl AutoPlayDirection {
    /// Index delta of one advance in this direction.
    pub fn delta(self) -> i64 {
        match self {
            AutoPlayDirection::Forward => 1,
            AutoPlayDirection::Backward => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoPlay {
    pub interval: Duration,
    pub direction: AutoPlayDirection,
}

impl Default for AutoPlay {
    fn default() -> Self {
        Self {
            interval: DEFAULT_AUTO_PLAY_INTERVAL,
            direction: AutoPlayDirection::Forward,
        }
    }
}

impl AutoPlay {
    pub fn new(interval: Duration, direction: AutoPlayDirection) -> Self {
        Self {
            interval,
            direction,
        }
    }
}

/// Appearance of the indicator items.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IndicatorStyle {
    /// Filled circles.
    Dots {
        normal: Color,
        selected: Color,
        radius: f32,
    },
    /// Host-drawn indicator nodes; only their sizes matter for layout.
    Custom { normal: Size, selected: Size },
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        IndicatorStyle::Dots {
            normal: Color::GRAY,
            selected: Color::BLUE,
            radius: DEFAULT_INDICATOR_RADIUS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IndicatorBackground {
    Capsule {
        color: Color,
        padding: EdgeInsets,
    },
    Rounded {
        color: Color,
        padding: EdgeInsets,
        corner_radius: f32,
    },
}

impl IndicatorBackground {
    pub fn capsule() -> Self {
        IndicatorBackground::Capsule {
            color: Color::BLACK.with_alpha(0.1),
            padding: EdgeInsets::INDICATOR,
        }
    }

    pub fn rounded() -> Self {
        IndicatorBackground::Rounded {
            color: Color::BLACK.with_alpha(0.1),
            padding: EdgeInsets::INDICATOR,
            corner_radius: 8.0,
        }
    }

    pub fn padding(&self) -> EdgeInsets {
        match self {
            IndicatorBackground::Capsule { padding, .. }
            | IndicatorBackground::Rounded { padding, .. } => *padding,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            IndicatorBackground::Capsule { color, .. }
            | IndicatorBackground::Rounded { color, .. } => *color,
        }
    }
}

/// Page indicator shown below the strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Indicator {
    pub style: IndicatorStyle,
    pub top_padding: f32,
    pub horizontal_inset: f32,
    pub spacing: f32,
    pub background: Option<IndicatorBackground>,
}

impl Default for Indicator {
    fn default() -> Self {
        Self {
            style: IndicatorStyle::default(),
            top_padding: DEFAULT_INDICATOR_PADDING,
            horizontal_inset: DEFAULT_INDICATOR_PADDING,
            spacing: DEFAULT_INDICATOR_SPACING,
            background: None,
        }
    }
}

impl Indicator {
    pub fn dots(normal: Color, selected: Color) -> Self {
        Self {
            style: IndicatorStyle::Dots {
                normal,
                selected,
                radius: DEFAULT_INDICATOR_RADIUS,
            },
            ..Self::default()
        }
    }

    pub fn custom(normal: Size, selected: Size) -> Self {
        Self {
            style: IndicatorStyle::Custom { normal, selected },
            ..Self::default()
        }
    }

    pub fn with_background(mut self, background: IndicatorBackground) -> Self {
        self.background = Some(background);
        self
    }
}

/// How a looping carousel places its items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopRendering {
    /// Repeated data segments laid out as one long strip.
    Windowed,
    /// Each data item placed once, at its circular distance from the
    /// selection.
    Circular,
    /// Windowed up to `max_windowed_items` items, circular above.
    Auto { max_windowed_items: usize },
}

impl Default for LoopRendering {
    fn default() -> Self {
        LoopRendering::Auto {
            max_windowed_items: DEFAULT_MAX_WINDOWED_ITEMS,
        }
    }
}

impl LoopRendering {
    /// Whether `item_count` items use circular placement.
    pub fn uses_circular(self, item_count: usize) -> bool {
        match self {
            LoopRendering::Windowed => false,
            LoopRendering::Circular => true,
            LoopRendering::Auto { max_windowed_items } => item_count > max_windowed_items,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    pub item_layout: ItemLayout,
    pub initial_index: i64,
    pub loop_enabled: bool,
    pub loop_segments: usize,
    pub loop_rendering: LoopRendering,
    pub scale_animation: Option<ScaleAnimation>,
    pub auto_play: Option<AutoPlay>,
    pub indicator: Option<Indicator>,
    pub interaction_cooldown: Duration,
    pub settle_animation: AnimationSpec,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_layout: ItemLayout::default(),
            initial_index: 0,
            loop_enabled: false,
            loop_segments: DEFAULT_LOOP_SEGMENTS,
            loop_rendering: LoopRendering::default(),
            scale_animation: None,
            auto_play: None,
            indicator: None,
            interaction_cooldown: DEFAULT_INTERACTION_COOLDOWN,
            settle_animation: AnimationSpec::ease_out(carousel_foundation::SETTLE_DURATION),
        }
    }
}

impl CarouselConfig {
    pub fn new(item_layout: ItemLayout) -> Self {
        Self {
            item_layout,
            ..Self::default()
        }
    }

    pub fn with_initial_index(mut self, index: i64) -> Self {
        self.initial_index = index;
        self
    }

    pub fn infinite_loop(mut self) -> Self {
        self.loop_enabled = true;
        self
    }

    pub fn with_loop_segments(mut self, segments: usize) -> Self {
        self.loop_segments = segments;
        self
    }

    pub fn with_loop_rendering(mut self, rendering: LoopRendering) -> Self {
        self.loop_rendering = rendering;
        self
    }

    pub fn scale_animation(mut self, scale: ScaleAnimation) -> Self {
        self.scale_animation = Some(scale);
        self
    }

    pub fn auto_play(mut self, auto_play: AutoPlay) -> Self {
        self.auto_play = Some(auto_play);
        self
    }

    pub fn indicator(mut self, indicator: Indicator) -> Self {
        self.indicator = Some(indicator);
        self
    }

    pub fn with_interaction_cooldown(mut self, cooldown: Duration) -> Self {
        self.interaction_cooldown = cooldown;
        self
    }

    pub fn with_settle_animation(mut self, spec: AnimationSpec) -> Self {
        self.settle_animation = spec;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.item_layout.validate()?;
        if let Some(auto_play) = &self.auto_play {
            if auto_play.interval.is_zero() {
                return Err(ConfigError::ZeroAutoPlayInterval);
            }
        }
        if let Some(scale) = &self.scale_animation {
            let s = scale.unselected_scale;
            if !(s > 0.0 && s <= 1.0) {
                return Err(ConfigError::InvalidUnselectedScale(s));
            }
        }
        if self.loop_segments < DEFAULT_LOOP_SEGMENTS {
            return Err(ConfigError::TooFewLoopSegments(self.loop_segments));
        }
        Ok(())
    }
}

/// Optional overrides shared by a group of carousels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CarouselStyle {
    pub indicator: Option<Indicator>,
    pub scale_animation: Option<ScaleAnimation>,
    pub loop_enabled: Option<bool>,
    pub auto_play: Option<AutoPlay>,
}

impl CarouselStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indicator(mut self, indicator: Indicator) -> Self {
        self.indicator = Some(indicator);
        self
    }

    pub fn scale_animation(mut self, scale: ScaleAnimation) -> Self {
        self.scale_animation = Some(scale);
        self
    }

    pub fn infinite_loop(mut self) -> Self {
        self.loop_enabled = Some(true);
        self
    }

    pub fn auto_play(mut self, auto_play: AutoPlay) -> Self {
        self.auto_play = Some(auto_play);
        self
    }

    /// Fills every override this style leaves unset from `parent`.
    pub fn merged_with(&self, parent: &CarouselStyle) -> CarouselStyle {
        CarouselStyle {
            indicator: self.indicator.or(parent.indicator),
            scale_animation: self.scale_animation.or(parent.scale_animation),
            loop_enabled: self.loop_enabled.or(parent.loop_enabled),
            auto_play: self.auto_play.or(parent.auto_play),
        }
    }

    /// Writes the overrides that are set into `config`.
    pub fn apply_to(&self, mut config: CarouselConfig) -> CarouselConfig {
        if let Some(indicator) = self.indicator {
            config.indicator = Some(indicator);
        }
        if let Some(scale) = self.scale_animation {
            config.scale_animation = Some(scale);
        }
        if let Some(loop_enabled) = self.loop_enabled {
            config.loop_enabled = loop_enabled;
        }
        if let Some(auto_play) = self.auto_play {
            config.auto_play = Some(auto_play);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = CarouselConfig::default();
        assert_eq!(config.item_layout.spacing, 16.0);
        assert_eq!(config.loop_segments, 3);
        assert_eq!(config.interaction_cooldown, Duration::from_secs(2));
        assert_eq!(config.settle_animation.duration, Duration::from_millis(300));
        assert_eq!(AutoPlay::default().interval, Duration::from_secs(3));
        assert_eq!(ScaleAnimation::default().unselected_scale, 0.8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_invalid_layouts() {
        let zero_ratio = CarouselConfig::new(ItemLayout::default().with_ratio(0.0));
        assert_eq!(zero_ratio.validate(), Err(ConfigError::InvalidRatio(0.0)));

        let negative_spacing = CarouselConfig::new(ItemLayout::fixed(300.0).with_spacing(-1.0));
        assert_eq!(
            negative_spacing.validate(),
            Err(ConfigError::NegativeSpacing(-1.0))
        );

        let nan_spacing = CarouselConfig::new(ItemLayout::fixed(300.0).with_spacing(f32::NAN));
        assert!(matches!(
            nan_spacing.validate(),
            Err(ConfigError::NegativeSpacing(_))
        ));

        let zero_width = CarouselConfig::new(ItemLayout::fixed(0.0));
        assert_eq!(
            zero_width.validate(),
            Err(ConfigError::InvalidFixedWidth(0.0))
        );
    }

    #[test]
    fn rejects_invalid_behaviour_settings() {
        let config = CarouselConfig::default().auto_play(AutoPlay::new(
            Duration::ZERO,
            AutoPlayDirection::Forward,
        ));
        assert_eq!(config.validate(), Err(ConfigError::ZeroAutoPlayInterval));

        let config = CarouselConfig::default()
            .scale_animation(ScaleAnimation::new(1.5, Duration::from_millis(300)));
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidUnselectedScale(1.5))
        );

        let config = CarouselConfig::default().with_loop_segments(2);
        assert_eq!(config.validate(), Err(ConfigError::TooFewLoopSegments(2)));
    }

    #[test]
    fn child_style_overrides_parent() {
        let parent = CarouselStyle::new()
            .indicator(Indicator::default())
            .scale_animation(ScaleAnimation::default());
        let child = CarouselStyle::new()
            .scale_animation(ScaleAnimation::new(0.5, Duration::from_millis(100)))
            .infinite_loop();

        let merged = child.merged_with(&parent);
        assert_eq!(merged.indicator, Some(Indicator::default()));
        assert_eq!(merged.scale_animation.map(|s| s.unselected_scale), Some(0.5));
        assert_eq!(merged.loop_enabled, Some(true));
        assert_eq!(merged.auto_play, None);

        let config = merged.apply_to(CarouselConfig::default());
        assert!(config.loop_enabled);
        assert!(config.indicator.is_some());
        assert!(config.auto_play.is_none());
    }

    #[test]
    fn auto_loop_rendering_switches_on_item_count() {
        let auto = LoopRendering::default();
        assert!(!auto.uses_circular(6));
        assert!(auto.uses_circular(7));
        assert!(!LoopRendering::Windowed.uses_circular(100));
        assert!(LoopRendering::Circular.uses_circular(2));
    }

    #[test]
    fn background_accessors() {
        let bg = IndicatorBackground::rounded();
        assert_eq!(bg.padding(), EdgeInsets::INDICATOR);
        assert_eq!(bg.color(), Color::BLACK.with_alpha(0.1));
        assert_eq!(EdgeInsets::INDICATOR.horizontal(), 24.0);
    }
}
