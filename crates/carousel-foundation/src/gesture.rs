//! Drag gesture interpretation.
//!
//! # Overview
//! The interpreter follows a single drag through its lifecycle:
//!
//! 1. **Idle**: the first change event decides whether a drag starts. At the
//!    edges of a finite carousel a drag pointing outward is ignored entirely,
//!    so the strip never rubber-bands past the first or last item.
//! 2. **Dragging**: the live translation becomes the drag offset. No index
//!    change happens while the finger is down.
//! 3. **Committing**: on release the translation is compared against 30% of
//!    the item width and turned into an index delta of `-1`, `0` or `+1`. The
//!    phase stays here until the settle animation reports completion.
//!
//! The interpreter only proposes deltas; clamping and wraparound belong to
//! the navigation state machine.

use crate::gesture_constants::{COMMIT_THRESHOLD_FRACTION, MIN_DRAG_DISTANCE};

/// Phase of the drag lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
    Committing,
}

/// Navigation facts the interpreter needs to classify a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragContext {
    pub selected_index: i64,
    pub item_count: usize,
    pub is_loop: bool,
    pub item_width: f32,
}

/// Outcome of a drag change event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragChange {
    /// No drag is in progress and this event did not start one.
    Ignored,
    /// This event started a drag.
    Started,
    /// An ongoing drag moved (or was pinned at an edge).
    Moved,
}

/// Index change proposed when a drag is released.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragCommit {
    pub delta: i64,
    pub translation: f32,
}

/// Returns true when a drag must not move the strip.
///
/// Looping carousels never disable dragging. Finite carousels disable it when
/// there is nothing to page through, or when the drag points past the first
/// or last item by more than [`MIN_DRAG_DISTANCE`].
pub fn should_disable_drag(
    translation_x: f32,
    selected_index: i64,
    item_count: usize,
    is_loop: bool,
) -> bool {
    if is_loop {
        return false;
    }
    if item_count <= 1 {
        return true;
    }
    let last = item_count as i64 - 1;
    let toward_previous = translation_x > MIN_DRAG_DISTANCE;
    let toward_next = translation_x < -MIN_DRAG_DISTANCE;
    (selected_index <= 0 && toward_previous) || (selected_index >= last && toward_next)
}

/// Index delta for a released drag.
///
/// Swiping right (positive translation) goes to the previous item, swiping
/// left goes to the next one. Anything within the threshold stays put.
pub fn commit_delta(translation_x: f32, item_width: f32) -> i64 {
    let threshold = item_width * COMMIT_THRESHOLD_FRACTION;
    if translation_x.abs() > threshold {
        if translation_x > 0.0 {
            -1
        } else {
            1
        }
    } else {
        0
    }
}

/// Tracks one drag at a time and turns it into offsets and commits.
#[derive(Clone, Debug, Default)]
pub struct GestureInterpreter {
    phase: DragPhase,
    drag_offset: f32,
}

impl GestureInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Live offset applied on top of the committed strip offset.
    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    /// Handles a drag change carrying the total translation since touch down.
    pub fn on_drag_changed(&mut self, translation_x: f32, ctx: DragContext) -> DragChange {
        let disabled = should_disable_drag(
            translation_x,
            ctx.selected_index,
            ctx.item_count,
            ctx.is_loop,
        );

        match self.phase {
            DragPhase::Idle | DragPhase::Committing => {
                if disabled {
                    return DragChange::Ignored;
                }
                self.phase = DragPhase::Dragging;
                self.drag_offset = translation_x;
                DragChange::Started
            }
            DragPhase::Dragging => {
                // Pinned at the edge: keep tracking the gesture so its end
                // still resets cleanly, but do not move the strip outward.
                self.drag_offset = if disabled { 0.0 } else { translation_x };
                DragChange::Moved
            }
        }
    }

    /// Handles the release of a drag.
    ///
    /// Returns `None` when no drag was in progress (for example, every change
    /// event was ignored at an edge).
    pub fn on_drag_ended(&mut self, translation_x: f32, ctx: DragContext) -> Option<DragCommit> {
        if self.phase != DragPhase::Dragging {
            return None;
        }
        self.drag_offset = 0.0;
        self.phase = DragPhase::Committing;

        let delta = commit_delta(translation_x, ctx.item_width);
        log::debug!(
            "drag ended: translation {translation_x:.1}, threshold {:.1}, delta {delta}",
            ctx.item_width * COMMIT_THRESHOLD_FRACTION
        );
        Some(DragCommit {
            delta,
            translation: translation_x,
        })
    }

    /// Abandons the current drag without committing anything.
    ///
    /// Returns true when a drag was in progress.
    pub fn on_drag_cancelled(&mut self) -> bool {
        let was_dragging = self.phase == DragPhase::Dragging;
        if was_dragging {
            self.phase = DragPhase::Committing;
        }
        self.drag_offset = 0.0;
        was_dragging
    }

    /// Marks the settle animation that followed a release as complete.
    pub fn finish_commit(&mut self) {
        if self.phase == DragPhase::Committing {
            self.phase = DragPhase::Idle;
        }
    }

    /// Drops any gesture state, for example when the data source changes.
    pub fn reset(&mut self) {
        self.phase = DragPhase::Idle;
        self.drag_offset = 0.0;
    }
}
