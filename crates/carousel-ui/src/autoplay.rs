//! Timed auto-advance.
//!
//! The scheduler owns two timers in the engine's [`TimerQueue`]: the
//! repeating advance tick and a one-shot resume armed after a user
//! interaction. It never moves the carousel itself; each tick is turned into
//! a proposed index delta that the engine hands to navigation.
//!
//! Pauses carry a reason. An interaction pause is lifted by its cooldown
//! timer, an explicit [`AutoPlayScheduler::pause`] only by
//! [`AutoPlayScheduler::resume`] or a restart.

use std::time::Duration;

use carousel_core::{TaskHandle, TimerQueue};

use crate::config::AutoPlay;
use crate::engine::EngineSignal;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AutoPlayPhase {
    #[default]
    Stopped,
    Playing,
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PauseReason {
    Explicit,
    Interaction,
}

#[derive(Debug)]
pub struct AutoPlayScheduler {
    config: AutoPlay,
    phase: AutoPlayPhase,
    pause_reason: Option<PauseReason>,
    interacting: bool,
    tick: Option<TaskHandle>,
    resume: Option<TaskHandle>,
    last_fired: Option<Duration>,
}

impl AutoPlayScheduler {
    pub fn new(config: AutoPlay) -> Self {
        Self {
            config,
            phase: AutoPlayPhase::Stopped,
            pause_reason: None,
            interacting: false,
            tick: None,
            resume: None,
            last_fired: None,
        }
    }

    pub fn config(&self) -> AutoPlay {
        self.config
    }

    pub fn phase(&self) -> AutoPlayPhase {
        self.phase
    }

    pub fn pause_reason(&self) -> Option<PauseReason> {
        self.pause_reason
    }

    pub fn is_playing(&self) -> bool {
        self.phase == AutoPlayPhase::Playing
    }

    /// Frame time of the last advance that was emitted.
    pub fn last_fired(&self) -> Option<Duration> {
        self.last_fired
    }

    /// Arms the repeating tick. A no-op while already playing.
    pub fn start(&mut self, now: Duration, timers: &mut TimerQueue<EngineSignal>) {
        if self.phase == AutoPlayPhase::Playing {
            return;
        }
        self.cancel_resume();
        self.tick = Some(timers.schedule_repeating(
            now,
            self.config.interval,
            EngineSignal::AutoPlayAdvance,
        ));
        self.phase = AutoPlayPhase::Playing;
        self.pause_reason = None;
        log::debug!(
            "auto-play started: every {:?} {:?}",
            self.config.interval,
            self.config.direction
        );
    }

    /// Pauses until [`AutoPlayScheduler::resume`], keeping the configuration.
    pub fn pause(&mut self) {
        match self.phase {
            AutoPlayPhase::Stopped => {}
            AutoPlayPhase::Playing | AutoPlayPhase::Paused => {
                self.cancel_tick();
                self.cancel_resume();
                self.phase = AutoPlayPhase::Paused;
                self.pause_reason = Some(PauseReason::Explicit);
                log::debug!("auto-play paused");
            }
        }
    }

    /// Returns a paused scheduler to playing.
    pub fn resume(&mut self, now: Duration, timers: &mut TimerQueue<EngineSignal>) {
        if self.phase == AutoPlayPhase::Paused {
            self.start(now, timers);
        }
    }

    /// Cancels both timers and forgets any interaction in progress.
    pub fn stop(&mut self) {
        self.cancel_tick();
        self.cancel_resume();
        self.interacting = false;
        if self.phase != AutoPlayPhase::Stopped {
            log::debug!("auto-play stopped");
        }
        self.phase = AutoPlayPhase::Stopped;
        self.pause_reason = None;
    }

    /// Stops and starts again, restarting the interval from `now`.
    pub fn restart(&mut self, now: Duration, timers: &mut TimerQueue<EngineSignal>) {
        self.stop();
        self.start(now, timers);
    }

    /// Replaces the interval and direction; a playing scheduler re-arms.
    pub fn configure(
        &mut self,
        config: AutoPlay,
        now: Duration,
        timers: &mut TimerQueue<EngineSignal>,
    ) {
        self.config = config;
        if self.phase == AutoPlayPhase::Playing {
            self.restart(now, timers);
        }
    }

    /// A drag started: pause for the interaction with no resume armed yet.
    pub fn begin_interaction(&mut self) {
        self.interacting = true;
        match (self.phase, self.pause_reason) {
            (AutoPlayPhase::Playing, _) => self.pause_for_interaction(),
            (AutoPlayPhase::Paused, Some(PauseReason::Interaction)) => self.cancel_resume(),
            _ => {}
        }
    }

    /// A drag ended: arm the cooldown that resumes playback.
    pub fn end_interaction(
        &mut self,
        now: Duration,
        resume_after: Duration,
        timers: &mut TimerQueue<EngineSignal>,
    ) {
        self.interacting = false;
        self.arm_resume(now, resume_after, timers);
    }

    /// A one-off interaction (such as a tap on the indicator): pause now and
    /// resume after `resume_after`. Repeated interactions re-arm the
    /// cooldown.
    pub fn handle_user_interaction(
        &mut self,
        now: Duration,
        resume_after: Duration,
        timers: &mut TimerQueue<EngineSignal>,
    ) {
        if self.phase == AutoPlayPhase::Playing {
            self.pause_for_interaction();
        }
        if !self.interacting {
            self.arm_resume(now, resume_after, timers);
        }
    }

    /// Cooldown timer fired.
    pub fn on_resume_due(&mut self, now: Duration, timers: &mut TimerQueue<EngineSignal>) {
        self.resume = None;
        if self.phase == AutoPlayPhase::Paused
            && self.pause_reason == Some(PauseReason::Interaction)
            && !self.interacting
        {
            log::debug!("auto-play resuming after interaction");
            self.start(now, timers);
        }
    }

    /// Advance tick fired. Returns the index delta to apply, or `None` when
    /// the tick is stale or the carousel cannot advance any further, in which
    /// case playback stops for good.
    pub fn on_tick(&mut self, now: Duration, at_boundary: bool) -> Option<i64> {
        if self.phase != AutoPlayPhase::Playing {
            log::trace!("dropping auto-play tick while {:?}", self.phase);
            return None;
        }
        if at_boundary {
            log::debug!("auto-play reached the last item");
            self.stop();
            return None;
        }
        self.last_fired = Some(now);
        Some(self.config.direction.delta())
    }

    fn pause_for_interaction(&mut self) {
        self.cancel_tick();
        self.phase = AutoPlayPhase::Paused;
        self.pause_reason = Some(PauseReason::Interaction);
        log::debug!("auto-play paused for interaction");
    }

    fn arm_resume(
        &mut self,
        now: Duration,
        resume_after: Duration,
        timers: &mut TimerQueue<EngineSignal>,
    ) {
        if self.phase != AutoPlayPhase::Paused
            || self.pause_reason != Some(PauseReason::Interaction)
        {
            return;
        }
        self.cancel_resume();
        self.resume = Some(timers.schedule_once(now, resume_after, EngineSignal::AutoPlayResume));
    }

    fn cancel_tick(&mut self) {
        if let Some(handle) = self.tick.take() {
            handle.cancel();
        }
    }

    fn cancel_resume(&mut self) {
        if let Some(handle) = self.resume.take() {
            handle.cancel();
        }
    }
}

impl Drop for AutoPlayScheduler {
    fn drop(&mut self) {
        self.cancel_tick();
        self.cancel_resume();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(value: u64) -> Duration {
        Duration::from_secs(value)
    }

    fn setup() -> (AutoPlayScheduler, TimerQueue<EngineSignal>) {
        (AutoPlayScheduler::new(AutoPlay::default()), TimerQueue::new())
    }

    #[test]
    fn ticks_every_interval() {
        let (mut auto, mut timers) = setup();
        auto.start(secs(0), &mut timers);
        assert!(timers.drain_due(secs(2)).is_empty());
        let due = timers.drain_due(secs(3));
        assert_eq!(due.as_slice(), &[EngineSignal::AutoPlayAdvance]);
        assert_eq!(auto.on_tick(secs(3), false), Some(1));
        assert_eq!(auto.last_fired(), Some(secs(3)));
    }

    #[test]
    fn boundary_tick_stops_permanently() {
        let (mut auto, mut timers) = setup();
        auto.start(secs(0), &mut timers);
        assert_eq!(auto.on_tick(secs(3), true), None);
        assert_eq!(auto.phase(), AutoPlayPhase::Stopped);
        assert!(timers.drain_due(secs(60)).is_empty());
    }

    #[test]
    fn explicit_pause_survives_cooldown() {
        let (mut auto, mut timers) = setup();
        auto.start(secs(0), &mut timers);
        auto.pause();
        auto.handle_user_interaction(secs(1), secs(2), &mut timers);
        assert!(timers.is_empty());
        assert_eq!(auto.pause_reason(), Some(PauseReason::Explicit));

        auto.resume(secs(5), &mut timers);
        assert!(auto.is_playing());
    }

    #[test]
    fn interaction_pauses_then_resumes() {
        let (mut auto, mut timers) = setup();
        auto.start(secs(0), &mut timers);
        auto.begin_interaction();
        assert_eq!(auto.phase(), AutoPlayPhase::Paused);
        auto.end_interaction(secs(1), secs(2), &mut timers);

        assert!(timers.drain_due(secs(2)).is_empty());
        let due = timers.drain_due(secs(3));
        assert_eq!(due.as_slice(), &[EngineSignal::AutoPlayResume]);
        auto.on_resume_due(secs(3), &mut timers);
        assert!(auto.is_playing());
    }

    #[test]
    fn repeated_interaction_rearms_cooldown() {
        let (mut auto, mut timers) = setup();
        auto.start(secs(0), &mut timers);
        auto.handle_user_interaction(secs(1), secs(2), &mut timers);
        auto.handle_user_interaction(secs(2), secs(2), &mut timers);
        assert!(timers.drain_due(secs(3)).is_empty());
        assert_eq!(timers.drain_due(secs(4)).len(), 1);
    }

    #[test]
    fn stop_forgets_an_unfinished_interaction() {
        let (mut auto, mut timers) = setup();
        auto.start(secs(0), &mut timers);
        auto.begin_interaction();
        auto.stop();
        auto.start(secs(1), &mut timers);
        auto.handle_user_interaction(secs(2), secs(2), &mut timers);
        assert_eq!(timers.next_deadline(), Some(secs(4)));

        timers.drain_due(secs(4));
        auto.on_resume_due(secs(4), &mut timers);
        assert!(auto.is_playing());
    }

    #[test]
    fn stop_cancels_everything() {
        let (mut auto, mut timers) = setup();
        auto.start(secs(0), &mut timers);
        auto.handle_user_interaction(secs(1), secs(2), &mut timers);
        auto.stop();
        assert!(timers.drain_due(secs(30)).is_empty());
        assert_eq!(auto.on_tick(secs(30), false), None);
    }

    #[test]
    fn configure_rearms_with_new_interval() {
        let (mut auto, mut timers) = setup();
        auto.start(secs(0), &mut timers);
        auto.configure(
            AutoPlay::new(secs(1), crate::config::AutoPlayDirection::Backward),
            secs(0),
            &mut timers,
        );
        let due = timers.drain_due(secs(1));
        assert_eq!(due.len(), 1);
        assert_eq!(auto.on_tick(secs(1), false), Some(-1));
    }
}
