//! Testing utilities and harness for the carousel engine.

pub mod assertions;
pub mod fakes;
pub mod rule;

pub use fakes::{FakeNode, FixedMeasurer, RecordingRenderer};
pub use rule::{CarouselTestRule, ManualClock, TestRuleError, FRAME};

pub mod prelude {
    pub use crate::assertions;
    pub use crate::fakes::*;
    pub use crate::rule::*;
}
