//! Headless host that drives a carousel through a scripted session.

use std::time::Duration;

use carousel_core::{FrameClock, Size, SystemFrameClock};
use carousel_ui::{Carousel, ItemRenderer, NodeMeasurer, RenderedItem};

/// Configuration for a hosted carousel session.
#[derive(Clone, Debug)]
pub struct HostSettings {
    /// Size of the carousel container in logical pixels.
    pub container: Size,
    /// Time between two frames.
    pub frame_interval: Duration,
    /// Sleep between frames and read time from the system clock instead of
    /// simulating it.
    pub realtime: bool,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            container: Size::new(400.0, 300.0),
            frame_interval: Duration::from_millis(16),
            realtime: false,
        }
    }
}

/// One action of a scripted session.
#[derive(Clone, Debug, PartialEq)]
pub enum ScriptStep {
    /// Drag to `translation_x` over `frames` frames, then release.
    Drag {
        /// Total translation at release.
        translation_x: f32,
        /// Frames the drag is spread over.
        frames: usize,
    },
    /// Let time pass, rendering frames.
    Wait(Duration),
    /// Select an index programmatically.
    Select(i64),
    /// Advance to the next item.
    Next,
    /// Go back to the previous item.
    Previous,
    /// A brief interaction that pauses auto-play for the cooldown.
    Interact,
    /// Pause auto-play until resumed.
    PauseAutoPlay,
    /// Resume paused auto-play.
    ResumeAutoPlay,
    /// Resize the container.
    Resize(Size),
}

enum FrameSource {
    Simulated(Duration),
    Realtime(SystemFrameClock),
}

impl FrameSource {
    fn now(&self) -> Duration {
        match self {
            FrameSource::Simulated(now) => *now,
            FrameSource::Realtime(clock) => clock.now(),
        }
    }

    fn step(&mut self, interval: Duration) -> Duration {
        match self {
            FrameSource::Simulated(now) => {
                *now += interval;
                *now
            }
            FrameSource::Realtime(clock) => {
                std::thread::sleep(interval);
                clock.now()
            }
        }
    }
}

/// Drives a [`Carousel`] frame by frame without a windowing system.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use carousel::prelude::*;
///
/// let mut carousel = Carousel::new(
///     vec!["a", "b", "c"],
///     CarouselConfig::new(ItemLayout::fixed(300.0)),
///     |index: usize, item: &&str| format!("{index}:{item}"),
/// )
/// .unwrap();
/// let measure = |_: &String| Size::new(300.0, 200.0);
///
/// HostLauncher::new()
///     .with_container(400.0, 300.0)
///     .run(
///         &mut carousel,
///         &measure,
///         [ScriptStep::Next, ScriptStep::Wait(Duration::from_millis(400))],
///         |_, _| {},
///     );
/// assert_eq!(carousel.engine().selected_index(), 1);
/// ```
pub struct HostLauncher {
    settings: HostSettings,
}

impl HostLauncher {
    /// Create a launcher with default settings.
    pub fn new() -> Self {
        Self {
            settings: HostSettings::default(),
        }
    }

    /// Set the container size.
    pub fn with_container(mut self, width: f32, height: f32) -> Self {
        self.settings.container = Size::new(width, height);
        self
    }

    /// Set the time between frames.
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.settings.frame_interval = interval;
        self
    }

    /// Run against the system clock, sleeping between frames.
    pub fn realtime(mut self, realtime: bool) -> Self {
        self.settings.realtime = realtime;
        self
    }

    /// Current settings.
    pub fn settings(&self) -> &HostSettings {
        &self.settings
    }

    /// Mounts `carousel`, plays `script` and unmounts it again.
    ///
    /// `on_frame` sees every rendered frame. Returns the session length.
    pub fn run<T, R, M>(
        self,
        carousel: &mut Carousel<T, R>,
        measurer: &M,
        script: impl IntoIterator<Item = ScriptStep>,
        mut on_frame: impl FnMut(Duration, &[RenderedItem<R::Node>]),
    ) -> Duration
    where
        R: ItemRenderer<T>,
        M: NodeMeasurer<R::Node>,
    {
        let settings = self.settings;
        let interval = settings.frame_interval.max(Duration::from_millis(1));
        let mut source = if settings.realtime {
            FrameSource::Realtime(SystemFrameClock::new())
        } else {
            FrameSource::Simulated(Duration::ZERO)
        };
        let mut container = settings.container;

        carousel.mount(source.now());
        carousel.layout(container, measurer);
        let frame = carousel.frame(source.now());
        on_frame(source.now(), &frame);

        for step in script {
            log::debug!("script step: {step:?}");
            match step {
                ScriptStep::Drag {
                    translation_x,
                    frames,
                } => {
                    let frames = frames.max(1);
                    for i in 1..=frames {
                        let tx = translation_x * i as f32 / frames as f32;
                        carousel.engine_mut().on_drag_changed(tx);
                        let now = source.step(interval);
                        let frame = carousel.frame(now);
                        on_frame(now, &frame);
                    }
                    carousel.engine_mut().on_drag_ended(translation_x);
                }
                ScriptStep::Wait(duration) => {
                    let end = source.now() + duration;
                    while source.now() < end {
                        let now = source.step(interval.min(end - source.now()));
                        let frame = carousel.frame(now);
                        on_frame(now, &frame);
                    }
                }
                ScriptStep::Select(index) => carousel.engine_mut().set_selected_index(index),
                ScriptStep::Next => carousel.engine_mut().next(),
                ScriptStep::Previous => carousel.engine_mut().previous(),
                ScriptStep::Interact => carousel.engine_mut().handle_user_interaction(),
                ScriptStep::PauseAutoPlay => carousel.engine_mut().pause_auto_play(),
                ScriptStep::ResumeAutoPlay => carousel.engine_mut().resume_auto_play(),
                ScriptStep::Resize(size) => {
                    container = size;
                    carousel.layout(container, measurer);
                }
            }
        }

        let end = source.now();
        carousel.unmount();
        end
    }
}

impl Default for HostLauncher {
    fn default() -> Self {
        Self::new()
    }
}
