//! Time-based tween between two values.
//!
//! Tweens are sampled against frame time supplied by the caller; they hold no
//! clock of their own. A tween can be retargeted mid-flight, in which case it
//! restarts from its current sampled value so motion stays continuous.

use std::time::Duration;

use crate::easing::Easing;

/// Duration and curve of an animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl AnimationSpec {
    /// Applies the end value on the first sample.
    pub const SNAP: AnimationSpec = AnimationSpec {
        duration: Duration::ZERO,
        easing: Easing::Linear,
    };

    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    pub const fn ease_out(duration: Duration) -> Self {
        Self::new(duration, Easing::EaseOut)
    }

    pub const fn ease_in_out(duration: Duration) -> Self {
        Self::new(duration, Easing::EaseInOut)
    }

    pub fn is_instant(&self) -> bool {
        self.duration.is_zero()
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::ease_out(Duration::from_millis(300))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started_at: Duration,
    spec: AnimationSpec,
}

impl Tween {
    pub fn new(from: f32, to: f32, now: Duration, spec: AnimationSpec) -> Self {
        Self {
            from,
            to,
            started_at: now,
            spec,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: Duration) -> f32 {
        if self.spec.is_instant() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f32() / self.spec.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }

    /// Eased value at `now`; exactly the target once finished.
    pub fn sample(&self, now: Duration) -> f32 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.spec.easing.transform(t)
    }

    /// Restarts toward `to` from the value sampled at `now`.
    pub fn retarget(&mut self, now: Duration, to: f32, spec: AnimationSpec) {
        let current = self.sample(now);
        *self = Self::new(current, to, now, spec);
    }

    /// Translates both endpoints by `delta` without touching progress, so the
    /// sampled value moves by exactly `delta` at every instant.
    pub fn shift(&mut self, delta: f32) {
        self.from += delta;
        self.to += delta;
    }
}
