//! Shared gesture constants.
//!
//! These values are in logical pixels (or fractions of an item) and are the
//! same for every carousel instance.

use std::time::Duration;

/// Translation below which a drag has no direction yet.
///
/// Keeps finger jitter at the first or last item from being read as an
/// attempt to drag past the edge.
pub const MIN_DRAG_DISTANCE: f32 = 10.0;

/// Fraction of the item width a drag must exceed to commit a page change.
pub const COMMIT_THRESHOLD_FRACTION: f32 = 0.3;

/// Length of the settle animation after a drag ends.
pub const SETTLE_DURATION: Duration = Duration::from_millis(300);
