//! Carousel navigation engine.
//!
//! Converts drag input, timer ticks and measured geometry into a selected
//! index, an animated strip offset and, when looping, a virtual window of
//! repeated data segments. Drawing is left to the host: it supplies an
//! [`ItemRenderer`] and a [`NodeMeasurer`] and places the items that
//! [`CarouselEngine::visible_items`] reports.

pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod culling;
pub mod engine;
pub mod indicator;
pub mod loop_window;
pub mod navigation;
pub mod renderer;
pub mod scale;

pub use autoplay::{AutoPlayPhase, AutoPlayScheduler, PauseReason};
pub use carousel::{Carousel, RenderedItem};
pub use config::{
    AutoPlay, AutoPlayDirection, CarouselConfig, CarouselStyle, Color, ConfigError, EdgeInsets,
    Indicator, IndicatorBackground, IndicatorStyle, ItemLayout, LoopRendering, ScaleAnimation,
    WidthMode,
};
pub use culling::{VisibleItem, VisibleItems};
pub use engine::{CarouselEngine, CarouselEvent, EnginePhase, EngineSignal, MeasureReport};
pub use indicator::{IndicatorDot, IndicatorLayout};
pub use loop_window::{LoopStep, LoopWindow};
pub use navigation::{CarouselState, NavigationOutcome, NavigationPhase, Navigator};
pub use renderer::{ItemRenderer, NodeMeasurer};
pub use scale::ItemScales;
