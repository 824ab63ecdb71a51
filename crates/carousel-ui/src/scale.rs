//! Scale-on-select animation.

use std::time::Duration;

use carousel_animation::Tween;
use rustc_hash::FxHashMap;

use crate::config::ScaleAnimation;

/// Per-item scale tweens keyed by data index.
///
/// Items without a running tween rest at `1.0` when selected and at the
/// configured unselected scale otherwise.
#[derive(Clone, Debug, Default)]
pub struct ItemScales {
    config: Option<ScaleAnimation>,
    selected: usize,
    tweens: FxHashMap<usize, Tween>,
}

impl ItemScales {
    pub fn new(config: Option<ScaleAnimation>, selected: usize) -> Self {
        Self {
            config,
            selected,
            tweens: FxHashMap::default(),
        }
    }

    fn resting(&self, data_index: usize) -> f32 {
        match &self.config {
            Some(config) if data_index != self.selected => config.unselected_scale,
            _ => 1.0,
        }
    }

    /// Scale of `data_index` at `now`.
    pub fn scale_of(&self, data_index: usize, now: Duration) -> f32 {
        match self.tweens.get(&data_index) {
            Some(tween) => tween.sample(now),
            None => self.resting(data_index),
        }
    }

    /// Starts the shrink of `previous` and the growth of `current`.
    pub fn on_selection_changed(&mut self, now: Duration, previous: usize, current: usize) {
        let Some(config) = self.config else {
            self.selected = current;
            return;
        };
        if previous == current {
            return;
        }
        let from_previous = self.scale_of(previous, now);
        let from_current = self.scale_of(current, now);
        self.selected = current;
        self.tweens.insert(
            previous,
            Tween::new(from_previous, config.unselected_scale, now, config.animation),
        );
        self.tweens
            .insert(current, Tween::new(from_current, 1.0, now, config.animation));
    }

    /// Jumps to the resting scales, for example after a data change.
    pub fn reset(&mut self, selected: usize) {
        self.selected = selected;
        self.tweens.clear();
    }

    /// Drops finished tweens; returns true while any is still running.
    pub fn prune(&mut self, now: Duration) -> bool {
        self.tweens.retain(|_, tween| !tween.is_finished(now));
        !self.tweens.is_empty()
    }
}
