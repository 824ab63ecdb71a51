//! The carousel engine.
//!
//! [`CarouselEngine`] is the single owner of navigation state. The host
//! forwards input (drag changes, measurements) as it arrives and calls
//! [`CarouselEngine::advance_frame`] once per frame with the frame time.
//! Timers are drained and animations sampled inside that call, on the
//! caller's thread.
//!
//! # Phases
//! * `Unmounted`: constructed, or torn down. No timers run.
//! * `Measuring`: mounted, but the item width or the container width is not
//!   known yet. Input and auto-play ticks are ignored.
//! * `Interactive`: geometry is known; items render and respond to drags.

use std::time::Duration;

use carousel_core::{
    resolve_item_height, resolve_item_width, ItemGeometry, Size, TimerQueue, ViewportGeometry,
};
use carousel_foundation::{DragChange, DragContext, GestureInterpreter};

use crate::autoplay::{AutoPlayPhase, AutoPlayScheduler};
use crate::config::{AutoPlay, CarouselConfig, ConfigError, WidthMode};
use crate::culling::{circular_items, strip_items, VisibleItems};
use crate::indicator::{layout_indicator, IndicatorLayout};
use crate::navigation::{CarouselState, NavigationOutcome, NavigationPhase, Navigator};
use crate::scale::ItemScales;

/// Timer payloads owned by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineSignal {
    AutoPlayAdvance,
    AutoPlayResume,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnginePhase {
    Unmounted,
    Measuring,
    Interactive,
}

/// Something observable that happened since the last
/// [`CarouselEngine::take_events`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselEvent {
    SelectionChanged { previous: i64, current: i64 },
    /// The strip came to rest on `index`.
    Settled { index: i64 },
    /// The loop window was rebiased by `shift` slots.
    WindowShifted { shift: i64 },
    AutoPlayStateChanged(AutoPlayPhase),
    BecameInteractive,
}

/// A size reported by the host's layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MeasureReport {
    /// Size of a rendered item.
    Item(Size),
    /// Size of the carousel container.
    Container(Size),
}

type SelectionListener = Box<dyn FnMut(i64, i64)>;

pub struct CarouselEngine {
    config: CarouselConfig,
    phase: EnginePhase,
    navigator: Navigator,
    gesture: GestureInterpreter,
    auto_play: Option<AutoPlayScheduler>,
    timers: TimerQueue<EngineSignal>,
    scales: ItemScales,
    measured_item: Option<Size>,
    container: Option<Size>,
    now: Duration,
    events: Vec<CarouselEvent>,
    listener: Option<SelectionListener>,
}

impl CarouselEngine {
    pub fn new(config: CarouselConfig, item_count: usize) -> Result<Self, ConfigError> {
        config.validate()?;
        let navigator = Navigator::new(
            item_count,
            config.initial_index,
            config.loop_enabled,
            config.loop_segments,
            config.settle_animation,
        );
        let selected = navigator.selected_index() as usize;
        Ok(Self {
            phase: EnginePhase::Unmounted,
            gesture: GestureInterpreter::new(),
            auto_play: config.auto_play.map(AutoPlayScheduler::new),
            timers: TimerQueue::new(),
            scales: ItemScales::new(config.scale_animation, selected),
            measured_item: None,
            container: None,
            now: Duration::ZERO,
            events: Vec::new(),
            listener: None,
            navigator,
            config,
        })
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    pub fn state(&self) -> &CarouselState {
        self.navigator.state()
    }

    pub fn navigation_phase(&self) -> NavigationPhase {
        self.navigator.phase()
    }

    pub fn item_geometry(&self) -> ItemGeometry {
        self.navigator.item_geometry()
    }

    pub fn viewport(&self) -> ViewportGeometry {
        self.navigator.viewport()
    }

    pub fn item_count(&self) -> usize {
        self.navigator.item_count()
    }

    pub fn is_loop(&self) -> bool {
        self.navigator.is_loop()
    }

    /// Loop window centered slot, when looping.
    pub fn centered_position(&self) -> Option<i64> {
        self.navigator
            .loop_window()
            .map(|window| window.centered_position())
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    // ---------------------------------------------------------------------
    // Lifecycle
    // ---------------------------------------------------------------------

    pub fn mount(&mut self, now: Duration) {
        if self.phase != EnginePhase::Unmounted {
            return;
        }
        self.now = now;
        self.phase = EnginePhase::Measuring;
        log::debug!("carousel mounted with {} items", self.item_count());
        self.refresh_geometry();
    }

    /// Cancels every timer and drops gesture state.
    pub fn unmount(&mut self) {
        if self.phase == EnginePhase::Unmounted {
            return;
        }
        self.drive_auto_play(|scheduler, _, _| scheduler.stop());
        self.timers.cancel_all();
        self.abandon_drag();
        self.navigator.snap();
        self.phase = EnginePhase::Unmounted;
        log::debug!("carousel unmounted");
    }

    pub fn on_geometry_measured(&mut self, report: MeasureReport) {
        match report {
            MeasureReport::Item(size) => self.measured_item = Some(size),
            MeasureReport::Container(size) => self.container = Some(size),
        }
        self.refresh_geometry();
    }

    fn refresh_geometry(&mut self) {
        let container_width = self.container.map(|size| size.width).unwrap_or(0.0);
        let layout = self.config.item_layout;
        let measured_width = self.measured_item.map(|size| size.width);
        let width = match layout.width {
            WidthMode::Fixed(width) => {
                resolve_item_width(measured_width, Some(width), container_width)
            }
            WidthMode::Measured => resolve_item_width(measured_width, None, container_width),
            WidthMode::FillContainer => {
                resolve_item_width(Some(container_width), None, container_width)
            }
        };
        let height = resolve_item_height(
            self.measured_item.map(|size| size.height),
            width,
            layout.ratio,
        );
        self.navigator.set_geometry(
            ItemGeometry::new(width, height, layout.spacing),
            ViewportGeometry::new(container_width),
        );

        match self.phase {
            EnginePhase::Measuring if self.navigator.has_geometry() => {
                self.phase = EnginePhase::Interactive;
                self.events.push(CarouselEvent::BecameInteractive);
                log::debug!("carousel interactive, item width {width:.1}");
                self.drive_auto_play(|scheduler, timers, now| scheduler.start(now, timers));
            }
            EnginePhase::Interactive if !self.navigator.has_geometry() => {
                log::debug!("geometry lost, measuring again");
                self.abandon_drag();
                self.phase = EnginePhase::Measuring;
            }
            _ => {}
        }
    }

    /// Item size to request from the host: the fixed or container width
    /// when known, and the ratio-derived height.
    pub fn item_size(&self) -> Size {
        let geometry = self.navigator.item_geometry();
        Size::new(geometry.width, geometry.height)
    }

    // ---------------------------------------------------------------------
    // Input
    // ---------------------------------------------------------------------

    fn drag_context(&self) -> DragContext {
        DragContext {
            selected_index: self.navigator.selected_index(),
            item_count: self.navigator.item_count(),
            is_loop: self.navigator.is_loop(),
            item_width: self.navigator.item_geometry().width,
        }
    }

    /// Total horizontal translation since the drag began.
    pub fn on_drag_changed(&mut self, translation_x: f32) {
        if self.phase != EnginePhase::Interactive {
            return;
        }
        let change = self.gesture.on_drag_changed(translation_x, self.drag_context());
        if change == DragChange::Started {
            self.drive_auto_play(|scheduler, _, _| scheduler.begin_interaction());
        }
        if change != DragChange::Ignored {
            self.navigator
                .set_drag(self.gesture.drag_offset(), self.gesture.is_dragging());
        }
    }

    pub fn on_drag_ended(&mut self, translation_x: f32) {
        if self.phase != EnginePhase::Interactive {
            return;
        }
        let Some(commit) = self.gesture.on_drag_ended(translation_x, self.drag_context()) else {
            return;
        };
        self.navigator.release_drag();
        let outcome = self.navigator.move_by(self.now, commit.delta);
        self.apply_outcome(outcome);
        self.end_interaction();
    }

    pub fn on_drag_cancelled(&mut self) {
        if !self.gesture.on_drag_cancelled() {
            return;
        }
        self.navigator.release_drag();
        let outcome = self.navigator.move_by(self.now, 0);
        self.apply_outcome(outcome);
        self.end_interaction();
    }

    fn end_interaction(&mut self) {
        let cooldown = self.config.interaction_cooldown;
        self.drive_auto_play(|scheduler, timers, now| {
            scheduler.end_interaction(now, cooldown, timers)
        });
        if self.navigator.phase() == NavigationPhase::Settled {
            self.gesture.finish_commit();
        }
    }

    /// Drops gesture state. A drag still in progress counts as an ended
    /// interaction so the auto-play cooldown is armed.
    fn abandon_drag(&mut self) {
        let was_dragging = self.gesture.is_dragging();
        self.gesture.reset();
        self.navigator.set_drag(0.0, false);
        if was_dragging {
            log::debug!("drag abandoned");
            let cooldown = self.config.interaction_cooldown;
            self.drive_auto_play(|scheduler, timers, now| {
                scheduler.end_interaction(now, cooldown, timers)
            });
        }
    }

    // ---------------------------------------------------------------------
    // Frame
    // ---------------------------------------------------------------------

    /// Runs due timers and samples animations at `now`.
    ///
    /// Returns true while another frame is needed to finish an animation.
    pub fn advance_frame(&mut self, now: Duration) -> bool {
        self.now = self.now.max(now);
        if self.phase == EnginePhase::Unmounted {
            return false;
        }
        let now = self.now;

        for signal in self.timers.drain_due(now) {
            match signal {
                EngineSignal::AutoPlayAdvance => self.on_auto_play_tick(),
                EngineSignal::AutoPlayResume => {
                    self.drive_auto_play(|scheduler, timers, now| {
                        scheduler.on_resume_due(now, timers)
                    });
                }
            }
        }

        if self.navigator.tick(now) {
            self.gesture.finish_commit();
            self.events.push(CarouselEvent::Settled {
                index: self.navigator.selected_index(),
            });
        }
        let scaling = self.scales.prune(now);

        self.navigator.phase() == NavigationPhase::Animating || scaling
    }

    /// Earliest pending timer, so a host can sleep until then.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    fn on_auto_play_tick(&mut self) {
        if self.phase != EnginePhase::Interactive || self.gesture.is_dragging() {
            log::trace!("dropping auto-play advance in {:?}", self.phase);
            return;
        }
        let Some(direction) = self.auto_play.as_ref().map(|s| s.config().direction) else {
            return;
        };
        let count = self.navigator.item_count() as i64;
        let next = self.navigator.selected_index() + direction.delta();
        let at_boundary = count == 0 || (!self.navigator.is_loop() && !(0..count).contains(&next));

        let delta = self
            .drive_auto_play(|scheduler, _, now| scheduler.on_tick(now, at_boundary))
            .flatten();
        if let Some(delta) = delta {
            let outcome = self.navigator.move_by(self.now, delta);
            self.apply_outcome(outcome);
        }
    }

    // ---------------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------------

    pub fn selected_index(&self) -> i64 {
        self.navigator.selected_index()
    }

    /// Animates to `index`. Out-of-range values are corrected with a warning.
    pub fn set_selected_index(&mut self, index: i64) {
        let outcome = self.navigator.set_selected_index(self.now, index, true);
        self.apply_outcome(outcome);
    }

    /// Jumps to `index` without animating.
    pub fn jump_to_index(&mut self, index: i64) {
        let outcome = self.navigator.set_selected_index(self.now, index, false);
        self.apply_outcome(outcome);
    }

    pub fn next(&mut self) {
        self.scroll_by(1);
    }

    pub fn previous(&mut self) {
        self.scroll_by(-1);
    }

    pub fn scroll_by(&mut self, delta: i64) {
        let outcome = self.navigator.move_by(self.now, delta);
        self.apply_outcome(outcome);
    }

    /// Replaces the data length. The selection is kept when still valid.
    pub fn set_item_count(&mut self, item_count: usize) {
        if item_count == self.navigator.item_count() {
            return;
        }
        self.abandon_drag();
        let outcome = self.navigator.set_item_count(item_count);
        self.scales.reset(outcome.current as usize);
        self.apply_outcome(outcome);
    }

    /// Registers the callback invoked on every selection change.
    pub fn set_selection_listener(&mut self, listener: impl FnMut(i64, i64) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_selection_listener(&mut self) {
        self.listener = None;
    }

    /// Drains the event log.
    pub fn take_events(&mut self) -> Vec<CarouselEvent> {
        std::mem::take(&mut self.events)
    }

    fn apply_outcome(&mut self, outcome: NavigationOutcome) {
        if let Some(shift) = outcome.shift {
            self.events.push(CarouselEvent::WindowShifted { shift });
        }
        if !outcome.selection_changed() {
            return;
        }
        log::debug!("selection {} -> {}", outcome.previous, outcome.current);
        self.scales.on_selection_changed(
            self.now,
            outcome.previous.max(0) as usize,
            outcome.current.max(0) as usize,
        );
        self.events.push(CarouselEvent::SelectionChanged {
            previous: outcome.previous,
            current: outcome.current,
        });
        if let Some(listener) = self.listener.as_mut() {
            listener(outcome.previous, outcome.current);
        }
    }

    // ---------------------------------------------------------------------
    // Rendering
    // ---------------------------------------------------------------------

    /// On-screen x of `slot` (strip slot in loop mode, data index otherwise).
    pub fn render_offset(&self, slot: i64) -> f32 {
        self.navigator.render_offset() + slot as f32 * self.navigator.item_geometry().full_width()
    }

    /// Items to render this frame with their position, scale and selection.
    pub fn visible_items(&self) -> VisibleItems {
        if self.phase != EnginePhase::Interactive {
            return VisibleItems::new();
        }
        let offset = self.navigator.render_offset();
        let item = self.navigator.item_geometry();
        let viewport = self.navigator.viewport();
        let count = self.navigator.item_count();

        let mut items = match self.navigator.loop_window() {
            Some(_) if self.config.loop_rendering.uses_circular(count) => {
                circular_items(offset, item, viewport, count)
            }
            Some(window) => strip_items(
                offset,
                item,
                viewport,
                0..window.slot_count() as i64,
                |slot| window.data_index(slot),
            ),
            None => strip_items(offset, item, viewport, 0..count as i64, |slot| slot as usize),
        };

        let selected = self.navigator.selected_index();
        for visible in items.iter_mut() {
            visible.scale = self.scales.scale_of(visible.data_index, self.now);
            visible.is_selected = visible.data_index as i64 == selected;
        }
        items
    }

    pub fn indicator_layout(&self) -> Option<IndicatorLayout> {
        let indicator = self.config.indicator.as_ref()?;
        Some(layout_indicator(
            indicator,
            self.navigator.item_count(),
            self.navigator.selected_index().max(0) as usize,
            self.navigator.viewport().container_width,
        ))
    }

    // ---------------------------------------------------------------------
    // Auto-play
    // ---------------------------------------------------------------------

    pub fn auto_play_phase(&self) -> AutoPlayPhase {
        self.auto_play
            .as_ref()
            .map(AutoPlayScheduler::phase)
            .unwrap_or_default()
    }

    /// Enables, reconfigures or (with `None`) removes auto-play.
    pub fn set_auto_play(&mut self, auto_play: Option<AutoPlay>) {
        self.config.auto_play = auto_play;
        match auto_play {
            None => {
                self.drive_auto_play(|scheduler, _, _| scheduler.stop());
                self.auto_play = None;
            }
            Some(config) if self.auto_play.is_some() => {
                self.drive_auto_play(|scheduler, timers, now| {
                    scheduler.configure(config, now, timers)
                });
            }
            Some(config) => {
                self.auto_play = Some(AutoPlayScheduler::new(config));
                if self.phase == EnginePhase::Interactive {
                    self.start_auto_play();
                }
            }
        }
    }

    pub fn start_auto_play(&mut self) {
        if self.phase == EnginePhase::Unmounted {
            return;
        }
        self.drive_auto_play(|scheduler, timers, now| scheduler.start(now, timers));
    }

    pub fn pause_auto_play(&mut self) {
        self.drive_auto_play(|scheduler, _, _| scheduler.pause());
    }

    pub fn resume_auto_play(&mut self) {
        if self.phase == EnginePhase::Unmounted {
            return;
        }
        self.drive_auto_play(|scheduler, timers, now| scheduler.resume(now, timers));
    }

    pub fn stop_auto_play(&mut self) {
        self.drive_auto_play(|scheduler, _, _| scheduler.stop());
    }

    pub fn restart_auto_play(&mut self) {
        if self.phase == EnginePhase::Unmounted {
            return;
        }
        self.drive_auto_play(|scheduler, timers, now| scheduler.restart(now, timers));
    }

    /// Pauses auto-play for the configured cooldown.
    pub fn handle_user_interaction(&mut self) {
        let cooldown = self.config.interaction_cooldown;
        self.drive_auto_play(|scheduler, timers, now| {
            scheduler.handle_user_interaction(now, cooldown, timers)
        });
    }

    /// Runs `f` on the scheduler, recording a phase change as an event.
    fn drive_auto_play<R>(
        &mut self,
        f: impl FnOnce(&mut AutoPlayScheduler, &mut TimerQueue<EngineSignal>, Duration) -> R,
    ) -> Option<R> {
        let scheduler = self.auto_play.as_mut()?;
        let before = scheduler.phase();
        let result = f(scheduler, &mut self.timers, self.now);
        let after = scheduler.phase();
        if before != after {
            self.events.push(CarouselEvent::AutoPlayStateChanged(after));
        }
        Some(result)
    }
}

impl std::fmt::Debug for CarouselEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselEngine")
            .field("phase", &self.phase)
            .field("state", self.navigator.state())
            .field("auto_play", &self.auto_play_phase())
            .finish_non_exhaustive()
    }
}
