//! Frame time source.
//!
//! The engine never reads the wall clock itself. Hosts pass the current frame
//! time (a [`Duration`] since the carousel was mounted) into every frame, which
//! keeps the state machine deterministic under test.

use std::time::Duration;

// Use web-time for cross-platform time support (native + WASM)
use web_time::Instant;

/// Source of monotonically increasing frame timestamps.
pub trait FrameClock {
    /// Time elapsed since the clock was created.
    fn now(&self) -> Duration;
}

/// Frame clock backed by the platform monotonic clock.
#[derive(Clone, Copy, Debug)]
pub struct SystemFrameClock {
    start_time: Instant,
}

impl SystemFrameClock {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }
}

impl Default for SystemFrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemFrameClock {
    fn now(&self) -> Duration {
        Instant::now()
            .checked_duration_since(self.start_time)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemFrameClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
