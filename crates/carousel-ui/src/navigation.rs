//! Selected-index state machine and the animated strip offset.
//!
//! Every trigger (a committed drag, an auto-play advance, a programmatic
//! write) ends up in [`Navigator::move_by`] or
//! [`Navigator::set_selected_index`]. Both update the selection right away
//! and point the single in-flight [`Tween`] at the analytic offset of the new
//! strip position; a trigger that arrives mid-animation retargets the tween
//! from wherever it currently is, so the last write wins.
//!
//! In loop mode the strip position is the loop window's centered slot and the
//! selection is its wrapped data index. Window rebiases are applied to the
//! tween and the committed offset in the same call, with no animation.

use std::time::Duration;

use carousel_animation::{AnimationSpec, Tween};
use carousel_core::{clamp_index, compute_offset, wrap_index, ItemGeometry, ViewportGeometry};

use crate::loop_window::LoopWindow;

/// Observable navigation state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CarouselState {
    pub selected_index: i64,
    pub drag_offset: f32,
    pub committed_offset: f32,
    pub item_count: usize,
    pub is_dragging: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationPhase {
    Settled,
    Animating,
}

/// What a navigation call changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationOutcome {
    pub previous: i64,
    pub current: i64,
    /// Loop window rebias, in slots.
    pub shift: Option<i64>,
}

impl NavigationOutcome {
    pub fn selection_changed(&self) -> bool {
        self.previous != self.current
    }
}

#[derive(Clone, Debug)]
pub struct Navigator {
    state: CarouselState,
    loop_window: Option<LoopWindow>,
    loop_segments: usize,
    item: ItemGeometry,
    viewport: ViewportGeometry,
    tween: Option<Tween>,
    settle: AnimationSpec,
}

impl Navigator {
    /// Creates a navigator; `initial_index` is validated like any external
    /// write.
    pub fn new(
        item_count: usize,
        initial_index: i64,
        loop_enabled: bool,
        loop_segments: usize,
        settle: AnimationSpec,
    ) -> Self {
        let selected_index = validate_index(initial_index, item_count, loop_enabled);
        let loop_window = loop_enabled
            .then(|| LoopWindow::new(item_count, loop_segments, selected_index as usize));
        Self {
            state: CarouselState {
                selected_index,
                item_count,
                ..CarouselState::default()
            },
            loop_window,
            loop_segments,
            item: ItemGeometry::UNMEASURED,
            viewport: ViewportGeometry::default(),
            tween: None,
            settle,
        }
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn selected_index(&self) -> i64 {
        self.state.selected_index
    }

    pub fn item_count(&self) -> usize {
        self.state.item_count
    }

    pub fn is_loop(&self) -> bool {
        self.loop_window.is_some()
    }

    pub fn loop_window(&self) -> Option<&LoopWindow> {
        self.loop_window.as_ref()
    }

    pub fn item_geometry(&self) -> ItemGeometry {
        self.item
    }

    pub fn viewport(&self) -> ViewportGeometry {
        self.viewport
    }

    pub fn has_geometry(&self) -> bool {
        self.item.is_measured() && self.viewport.is_laid_out()
    }

    pub fn phase(&self) -> NavigationPhase {
        if self.tween.is_some() {
            NavigationPhase::Animating
        } else {
            NavigationPhase::Settled
        }
    }

    /// Slot of the strip that is (or will be, once settled) centered.
    pub fn strip_position(&self) -> i64 {
        match &self.loop_window {
            Some(window) => window.centered_position(),
            None => self.state.selected_index,
        }
    }

    /// Offset that centers `position` for the current geometry.
    pub fn analytic_offset(&self, position: f32) -> f32 {
        if !self.has_geometry() {
            return 0.0;
        }
        compute_offset(
            position,
            self.item.width,
            self.item.spacing,
            self.viewport.container_width,
        )
    }

    /// Current strip offset including the live drag.
    pub fn render_offset(&self) -> f32 {
        self.state.committed_offset + self.state.drag_offset
    }

    pub fn set_drag(&mut self, offset: f32, dragging: bool) {
        self.state.drag_offset = offset;
        self.state.is_dragging = dragging;
    }

    /// Folds the live drag into the committed offset so the settle animation
    /// starts where the finger let go.
    pub fn release_drag(&mut self) {
        self.tween = None;
        self.state.committed_offset += self.state.drag_offset;
        self.state.drag_offset = 0.0;
        self.state.is_dragging = false;
    }

    /// Installs new geometry and snaps the strip to it without animating.
    pub fn set_geometry(&mut self, item: ItemGeometry, viewport: ViewportGeometry) {
        if item == self.item && viewport == self.viewport {
            return;
        }
        log::debug!(
            "geometry: item {:.1}x{:.1} spacing {:.1}, container {:.1}",
            item.width,
            item.height,
            item.spacing,
            viewport.container_width
        );
        self.item = item;
        self.viewport = viewport;
        self.snap();
    }

    /// Moves the selection by `delta` items.
    ///
    /// Finite carousels clamp to the ends; looping ones wrap through the
    /// loop window.
    pub fn move_by(&mut self, now: Duration, delta: i64) -> NavigationOutcome {
        let previous = self.state.selected_index;
        if self.state.item_count == 0 {
            return NavigationOutcome {
                previous,
                current: previous,
                shift: None,
            };
        }

        let shift = match self.loop_window.as_mut() {
            Some(window) => {
                let step = window.move_by(delta);
                self.state.selected_index = window.logical_index() as i64;
                step.shift
            }
            None => {
                self.state.selected_index =
                    clamp_index(previous.saturating_add(delta), self.state.item_count);
                None
            }
        };
        if let Some(shift) = shift {
            self.apply_shift(shift);
        }
        self.animate_to_position(now);

        NavigationOutcome {
            previous,
            current: self.state.selected_index,
            shift,
        }
    }

    /// External index write: out-of-range values are corrected with a
    /// warning, loop mode travels the shortest way round.
    pub fn set_selected_index(
        &mut self,
        now: Duration,
        index: i64,
        animated: bool,
    ) -> NavigationOutcome {
        let previous = self.state.selected_index;
        let target = validate_index(index, self.state.item_count, self.is_loop());

        let shift = match self.loop_window.as_mut() {
            Some(window) => {
                let step = window.jump_to(target as usize);
                self.state.selected_index = window.logical_index() as i64;
                step.shift
            }
            None => {
                self.state.selected_index = target;
                None
            }
        };
        if let Some(shift) = shift {
            self.apply_shift(shift);
        }
        if animated {
            self.animate_to_position(now);
        } else {
            self.snap();
        }

        NavigationOutcome {
            previous,
            current: self.state.selected_index,
            shift,
        }
    }

    /// Replaces the data length, keeping the selection in range.
    pub fn set_item_count(&mut self, item_count: usize) -> NavigationOutcome {
        let previous = self.state.selected_index;
        self.state.item_count = item_count;
        let selected = if item_count == 0 {
            0
        } else if self.is_loop() {
            wrap_index(previous, item_count) as i64
        } else {
            clamp_index(previous, item_count)
        };
        if selected != previous {
            log::warn!(
                "selected index {previous} no longer valid for {item_count} items, using {selected}"
            );
        }
        self.state.selected_index = selected;
        if self.loop_window.is_some() {
            self.loop_window = Some(LoopWindow::new(
                item_count,
                self.loop_segments,
                selected as usize,
            ));
        }
        self.snap();
        NavigationOutcome {
            previous,
            current: selected,
            shift: None,
        }
    }

    /// Samples the tween at `now`. Returns true on the frame the animation
    /// finishes.
    pub fn tick(&mut self, now: Duration) -> bool {
        let Some(tween) = self.tween.as_ref() else {
            return false;
        };
        if !tween.is_finished(now) {
            self.state.committed_offset = tween.sample(now);
            return false;
        }
        self.tween = None;
        self.state.committed_offset = self.analytic_offset(self.strip_position() as f32);
        true
    }

    /// Drops any animation and places the strip exactly on its position.
    pub fn snap(&mut self) {
        self.tween = None;
        self.state.committed_offset = self.analytic_offset(self.strip_position() as f32);
    }

    fn animate_to_position(&mut self, now: Duration) {
        let target = self.analytic_offset(self.strip_position() as f32);
        if !self.has_geometry() || self.settle.is_instant() {
            self.tween = None;
            self.state.committed_offset = target;
            return;
        }
        match self.tween.as_mut() {
            Some(tween) => tween.retarget(now, target, self.settle),
            None => {
                if (self.state.committed_offset - target).abs() > f32::EPSILON {
                    self.tween = Some(Tween::new(
                        self.state.committed_offset,
                        target,
                        now,
                        self.settle,
                    ));
                }
            }
        }
    }

    /// Moves the strip by `shift` slots worth of offset with no animation.
    fn apply_shift(&mut self, shift: i64) {
        let delta = -(shift as f32) * self.item.full_width();
        if !self.has_geometry() {
            return;
        }
        log::debug!("loop window rebiased by {shift} slots");
        self.state.committed_offset += delta;
        if let Some(tween) = self.tween.as_mut() {
            tween.shift(delta);
        }
    }
}

/// Corrects an externally supplied index.
fn validate_index(index: i64, item_count: usize, is_loop: bool) -> i64 {
    if item_count == 0 {
        if index != 0 {
            log::warn!("cannot select index {index}: data source is empty");
        }
        return 0;
    }
    let last = item_count as i64 - 1;
    if (0..=last).contains(&index) {
        return index;
    }
    if is_loop {
        let wrapped = wrap_index(index, item_count) as i64;
        log::warn!("index {index} out of range 0..={last}, wrapping to {wrapped}");
        wrapped
    } else {
        let clamped = clamp_index(index, item_count);
        log::warn!("index {index} out of range 0..={last}, clamping to {clamped}");
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn laid_out(nav: &mut Navigator) {
        nav.set_geometry(
            ItemGeometry::new(300.0, 200.0, 16.0),
            ViewportGeometry::new(400.0),
        );
    }

    fn finite(count: usize, index: i64) -> Navigator {
        let mut nav = Navigator::new(count, index, false, 3, AnimationSpec::default());
        laid_out(&mut nav);
        nav
    }

    #[test]
    fn initial_offset_centers_selection() {
        let nav = finite(4, 1);
        assert_eq!(nav.state().committed_offset, -316.0 + 50.0);
        assert_eq!(nav.phase(), NavigationPhase::Settled);
    }

    #[test]
    fn move_clamps_in_finite_mode() {
        let mut nav = finite(4, 3);
        let outcome = nav.move_by(ms(0), 1);
        assert!(!outcome.selection_changed());
        assert_eq!(nav.selected_index(), 3);
        assert_eq!(nav.phase(), NavigationPhase::Settled);
    }

    #[test]
    fn animation_settles_exactly_on_target() {
        let mut nav = finite(4, 0);
        nav.move_by(ms(0), 1);
        assert_eq!(nav.phase(), NavigationPhase::Animating);
        assert!(!nav.tick(ms(150)));
        let mid = nav.state().committed_offset;
        assert!(mid < 50.0 && mid > -266.0);
        assert!(nav.tick(ms(300)));
        assert_eq!(nav.state().committed_offset, -266.0);
        assert_eq!(nav.phase(), NavigationPhase::Settled);
    }

    #[test]
    fn retarget_mid_flight_keeps_current_value() {
        let mut nav = finite(4, 0);
        nav.move_by(ms(0), 1);
        nav.tick(ms(100));
        let before = nav.state().committed_offset;
        nav.move_by(ms(100), 1);
        nav.tick(ms(100));
        assert!((nav.state().committed_offset - before).abs() < 1e-3);
        nav.tick(ms(400));
        assert_eq!(nav.selected_index(), 2);
        assert_eq!(nav.state().committed_offset, 50.0 - 2.0 * 316.0);
    }

    #[test]
    fn external_writes_are_corrected() {
        let mut nav = finite(4, 0);
        assert_eq!(nav.set_selected_index(ms(0), 9, false).current, 3);
        assert_eq!(nav.set_selected_index(ms(0), -2, false).current, 0);

        let mut looping = Navigator::new(4, 0, true, 3, AnimationSpec::default());
        assert_eq!(looping.set_selected_index(ms(0), 6, false).current, 2);
        assert_eq!(looping.set_selected_index(ms(0), -1, false).current, 3);

        let mut empty = Navigator::new(0, 5, false, 3, AnimationSpec::default());
        assert_eq!(empty.selected_index(), 0);
        assert_eq!(empty.set_selected_index(ms(0), 2, true).current, 0);
    }

    #[test]
    fn rebias_preserves_render_offset() {
        let mut nav = Navigator::new(5, 2, true, 3, AnimationSpec::default());
        laid_out(&mut nav);
        nav.move_by(ms(0), 1);
        nav.move_by(ms(50), 1);
        nav.tick(ms(120));
        let slot = nav.strip_position();
        let x_before = nav.render_offset() + slot as f32 * 316.0;

        let outcome = nav.move_by(ms(120), 1);
        assert_eq!(outcome.shift, Some(-5));
        let x_after = nav.render_offset() + (slot - 5) as f32 * 316.0;
        assert!((x_after - x_before).abs() < 1e-3);
    }

    #[test]
    fn huge_deltas_clamp_to_the_ends() {
        let mut nav = finite(5, 0);
        nav.move_by(ms(0), 1);
        assert_eq!(nav.move_by(ms(10), i64::MAX).current, 4);
        assert_eq!(nav.move_by(ms(20), i64::MIN).current, 0);
    }

    #[test]
    fn item_count_change_keeps_selection_valid() {
        let mut nav = finite(6, 5);
        nav.set_item_count(3);
        assert_eq!(nav.selected_index(), 2);
        nav.set_item_count(0);
        assert_eq!(nav.selected_index(), 0);
        assert_eq!(nav.move_by(ms(0), 1).current, 0);
    }

    #[test]
    fn unmeasured_geometry_snaps() {
        let mut nav = Navigator::new(4, 0, false, 3, AnimationSpec::default());
        nav.move_by(ms(0), 1);
        assert_eq!(nav.phase(), NavigationPhase::Settled);
        assert_eq!(nav.state().committed_offset, 0.0);
        laid_out(&mut nav);
        assert_eq!(nav.state().committed_offset, 50.0 - 316.0);
    }
}
