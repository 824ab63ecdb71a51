//! Core primitives for the carousel engine: geometry, ring index arithmetic,
//! frame time and cooperative timers.

pub mod clock;
pub mod geometry;
pub mod index;
pub mod timer;

pub use clock::{FrameClock, SystemFrameClock};
pub use geometry::{
    compute_offset, offset_to_position, resolve_item_height, resolve_item_width, ItemGeometry,
    Size, ViewportGeometry,
};
pub use index::{circular_distance, circular_distance_f32, clamp_index, wrap_index};
pub use timer::{TaskHandle, TaskId, TimerQueue};

pub mod prelude {
    pub use crate::clock::{FrameClock, SystemFrameClock};
    pub use crate::geometry::{ItemGeometry, Size, ViewportGeometry};
    pub use crate::index::{circular_distance, wrap_index};
    pub use crate::timer::{TaskHandle, TimerQueue};
}
