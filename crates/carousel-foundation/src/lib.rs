//! Input handling for the carousel engine.

pub mod gesture;
pub mod gesture_constants;

pub use gesture::{
    commit_delta, should_disable_drag, DragChange, DragCommit, DragContext, DragPhase,
    GestureInterpreter,
};
pub use gesture_constants::{COMMIT_THRESHOLD_FRACTION, MIN_DRAG_DISTANCE, SETTLE_DURATION};
