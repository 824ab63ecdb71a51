//! Animation primitives for the carousel engine.

pub mod easing;
pub mod tween;

pub use easing::Easing;
pub use tween::{AnimationSpec, Tween};
