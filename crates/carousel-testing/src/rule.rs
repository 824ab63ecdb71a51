//! Headless test harness around [`CarouselEngine`].

use std::cell::Cell;
use std::time::Duration;

use carousel_core::{FrameClock, Size};
use carousel_ui::{CarouselConfig, CarouselEngine, CarouselEvent, ConfigError, MeasureReport};

/// Time between two frames driven by the rule.
pub const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, thiserror::Error)]
pub enum TestRuleError {
    #[error("invalid carousel configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("carousel still animating after {frames} frames")]
    NotIdle { frames: usize },
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) -> Duration {
        let now = self.now.get() + by;
        self.now.set(now);
        now
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl FrameClock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Drives a carousel engine frame by frame on a manual clock.
///
/// ```
/// use carousel_core::Size;
/// use carousel_testing::CarouselTestRule;
/// use carousel_ui::{CarouselConfig, ItemLayout};
///
/// let mut rule = CarouselTestRule::new(CarouselConfig::new(ItemLayout::fixed(300.0)), 4).unwrap();
/// rule.mount_with_container(Size::new(400.0, 300.0));
/// rule.swipe(-120.0);
/// rule.wait_for_idle().unwrap();
/// assert_eq!(rule.engine().selected_index(), 1);
/// ```
pub struct CarouselTestRule {
    engine: CarouselEngine,
    clock: ManualClock,
    events: Vec<CarouselEvent>,
}

impl CarouselTestRule {
    pub fn new(config: CarouselConfig, item_count: usize) -> Result<Self, TestRuleError> {
        Ok(Self {
            engine: CarouselEngine::new(config, item_count)?,
            clock: ManualClock::new(),
            events: Vec::new(),
        })
    }

    pub fn engine(&self) -> &CarouselEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut CarouselEngine {
        &mut self.engine
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Mounts and reports the container size.
    pub fn mount_with_container(&mut self, container: Size) {
        self.engine.mount(self.clock.now());
        self.engine
            .on_geometry_measured(MeasureReport::Container(container));
    }

    /// Mounts and reports both the container and the first item size.
    pub fn mount_with_geometry(&mut self, item: Size, container: Size) {
        self.mount_with_container(container);
        self.engine.on_geometry_measured(MeasureReport::Item(item));
    }

    /// Advances the clock by `by` and runs one frame.
    pub fn advance_by(&mut self, by: Duration) -> bool {
        let now = self.clock.advance(by);
        let animating = self.engine.advance_frame(now);
        self.collect_events();
        animating
    }

    /// Runs frames of [`FRAME`] until `total` has elapsed.
    pub fn advance_frames_for(&mut self, total: Duration) {
        let target = self.clock.now() + total;
        while self.clock.now() + FRAME < target {
            self.advance_by(FRAME);
        }
        let remaining = target.saturating_sub(self.clock.now());
        self.advance_by(remaining);
    }

    /// Runs frames until nothing animates any more.
    pub fn wait_for_idle(&mut self) -> Result<(), TestRuleError> {
        self.wait_for_idle_within(600)
    }

    pub fn wait_for_idle_within(&mut self, max_frames: usize) -> Result<(), TestRuleError> {
        for _ in 0..max_frames {
            if !self.advance_by(FRAME) {
                return Ok(());
            }
        }
        Err(TestRuleError::NotIdle { frames: max_frames })
    }

    /// A drag that moves through `steps` evenly spaced changes to
    /// `translation_x` and ends there, one frame per change.
    pub fn drag(&mut self, translation_x: f32, steps: usize) {
        let steps = steps.max(1);
        for step in 1..=steps {
            let tx = translation_x * step as f32 / steps as f32;
            self.engine.on_drag_changed(tx);
            self.advance_by(FRAME);
        }
        self.engine.on_drag_ended(translation_x);
        self.collect_events();
    }

    /// A quick drag: one change and an immediate release.
    pub fn swipe(&mut self, translation_x: f32) {
        self.drag(translation_x, 1);
    }

    /// Rendered x of the first visible item showing `data_index`.
    pub fn rendered_x(&self, data_index: usize) -> Option<f32> {
        self.engine
            .visible_items()
            .iter()
            .find(|item| item.data_index == data_index)
            .map(|item| item.x)
    }

    /// Every event seen since the last call.
    pub fn take_events(&mut self) -> Vec<CarouselEvent> {
        self.collect_events();
        std::mem::take(&mut self.events)
    }

    /// Selection changes seen since the last [`CarouselTestRule::take_events`].
    pub fn selection_changes(&mut self) -> Vec<(i64, i64)> {
        self.collect_events();
        self.events
            .iter()
            .filter_map(|event| match event {
                CarouselEvent::SelectionChanged { previous, current } => {
                    Some((*previous, *current))
                }
                _ => None,
            })
            .collect()
    }

    fn collect_events(&mut self) {
        self.events.extend(self.engine.take_events());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_ui::ItemLayout;

    #[test]
    fn manual_clock_moves_on_demand() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
        assert_eq!(clock.advance(FRAME), FRAME);
        clock.set(Duration::from_secs(1));
        assert_eq!(clock.now(), Duration::from_secs(1));
    }

    #[test]
    fn advance_frames_for_lands_exactly() {
        let mut rule =
            CarouselTestRule::new(CarouselConfig::new(ItemLayout::fixed(300.0)), 3).unwrap();
        rule.mount_with_container(Size::new(400.0, 300.0));
        rule.advance_frames_for(Duration::from_millis(1000));
        assert_eq!(rule.now(), Duration::from_millis(1000));
    }

    #[test]
    fn config_errors_surface() {
        let result = CarouselTestRule::new(CarouselConfig::new(ItemLayout::fixed(0.0)), 3);
        assert!(matches!(result, Err(TestRuleError::Config(_))));
    }
}
