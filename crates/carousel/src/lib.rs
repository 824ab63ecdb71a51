#![deny(missing_docs)]

//! Carousel navigation engine with minimal boilerplate.
//!
//! Depend on this crate alone: it re-exports the engine, configuration and
//! the primitives they are built on, plus a headless [`HostLauncher`] that
//! drives a [`Carousel`] through a scripted session.

mod launcher;
pub use launcher::{HostLauncher, HostSettings, ScriptStep};

/// Re-export the UI crate so hosts can depend on a single crate.
pub use carousel_ui::*;

/// Geometry, ring arithmetic, clocks and timers.
pub use carousel_core::{
    circular_distance, wrap_index, FrameClock, ItemGeometry, Size, SystemFrameClock,
    TaskHandle, TimerQueue, ViewportGeometry,
};

/// Animation primitives.
pub use carousel_animation::{AnimationSpec, Easing, Tween};

/// Gesture interpretation.
pub use carousel_foundation::{
    DragPhase, GestureInterpreter, COMMIT_THRESHOLD_FRACTION, MIN_DRAG_DISTANCE,
};

/// Convenience imports for carousel hosts.
pub mod prelude {
    pub use crate::{HostLauncher, HostSettings, ScriptStep};
    pub use carousel_animation::AnimationSpec;
    pub use carousel_core::{FrameClock, Size};
    pub use carousel_ui::{
        AutoPlay, AutoPlayDirection, Carousel, CarouselConfig, CarouselEngine, CarouselEvent,
        CarouselStyle, Indicator, IndicatorBackground, ItemLayout, ItemRenderer, NodeMeasurer,
        ScaleAnimation,
    };
}
