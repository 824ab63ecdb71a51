//! Virtual window of repeated data segments for looping carousels.
//!
//! The strip is `K` copies of the data laid end to end, so `K * n` slots.
//! `centered_position` is the slot under the viewport center and is kept in
//! the interior `[n, (K - 1) * n)`: whenever a move would leave it, the
//! position jumps by whole segments (a *rebias*). Because slot `s` and slot
//! `s ± n` show the same element, the caller can shift its strip offset by
//! the same amount and nothing moves on screen.

use carousel_core::wrap_index;

/// Result of moving the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopStep {
    /// New centered slot.
    pub position: i64,
    /// Slots the window was rebiased by (a multiple of `n`), if any.
    pub shift: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoopWindow {
    segments: usize,
    item_count: usize,
    centered_position: i64,
}

impl LoopWindow {
    /// Builds a window centered on `selected` inside the second segment.
    pub fn new(item_count: usize, segments: usize, selected: usize) -> Self {
        let centered_position = if item_count == 0 {
            0
        } else {
            item_count as i64 + wrap_index(selected as i64, item_count) as i64
        };
        Self {
            segments: segments.max(3),
            item_count,
            centered_position,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    pub fn slot_count(&self) -> usize {
        self.segments * self.item_count
    }

    pub fn centered_position(&self) -> i64 {
        self.centered_position
    }

    /// Data index shown in the centered slot.
    pub fn logical_index(&self) -> usize {
        wrap_index(self.centered_position, self.item_count)
    }

    /// Data index shown in any slot.
    pub fn data_index(&self, slot: i64) -> usize {
        wrap_index(slot, self.item_count)
    }

    pub fn contains_slot(&self, slot: i64) -> bool {
        slot >= 0 && slot < self.slot_count() as i64
    }

    /// Moves the centered slot by `delta`.
    ///
    /// Whole laps around the ring are dropped, so the strip travels less
    /// than one segment in the requested direction. A target outside the
    /// interior is rebiased by one segment; both the old and the new slot
    /// then still lie inside the window.
    pub fn move_by(&mut self, delta: i64) -> LoopStep {
        if self.item_count == 0 {
            return LoopStep {
                position: 0,
                shift: None,
            };
        }
        let n = self.item_count as i64;
        let laps = delta / n;
        if laps != 0 {
            log::debug!("dropping {laps} full laps from a move of {delta}");
        }
        let target = self.centered_position + delta % n;

        let shift = if target >= self.interior_end() {
            -n
        } else if target < n {
            n
        } else {
            0
        };

        self.centered_position = target + shift;
        LoopStep {
            position: self.centered_position,
            shift: (shift != 0).then_some(shift),
        }
    }

    /// Moves to the slot showing `logical` along the shortest way round.
    pub fn jump_to(&mut self, logical: usize) -> LoopStep {
        let current = self.logical_index() as i64;
        let delta = carousel_core::circular_distance(current, logical as i64, self.item_count);
        self.move_by(delta)
    }

    fn interior_end(&self) -> i64 {
        (self.segments as i64 - 1) * self.item_count as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_second_segment() {
        let window = LoopWindow::new(5, 3, 2);
        assert_eq!(window.centered_position(), 7);
        assert_eq!(window.logical_index(), 2);
        assert_eq!(window.slot_count(), 15);
    }

    #[test]
    fn forward_moves_rebias_at_right_edge() {
        let mut window = LoopWindow::new(5, 3, 2);
        assert_eq!(window.move_by(1).shift, None);
        assert_eq!(window.move_by(1).shift, None);
        assert_eq!(window.centered_position(), 9);

        let step = window.move_by(1);
        assert_eq!(step.position, 5);
        assert_eq!(step.shift, Some(-5));
        assert_eq!(window.logical_index(), 0);
    }

    #[test]
    fn backward_moves_rebias_at_left_edge() {
        let mut window = LoopWindow::new(5, 3, 0);
        assert_eq!(window.centered_position(), 5);
        let step = window.move_by(-1);
        assert_eq!(step.position, 9);
        assert_eq!(step.shift, Some(5));
        assert_eq!(window.logical_index(), 4);
    }

    #[test]
    fn position_stays_interior() {
        let mut window = LoopWindow::new(4, 3, 0);
        for delta in [1, 1, -1, -1, -1, 1, 1, 1, 1, 1, -1] {
            window.move_by(delta);
            let pos = window.centered_position();
            assert!((4..8).contains(&pos), "position {pos} left the interior");
        }
    }

    #[test]
    fn whole_laps_are_dropped() {
        let mut window = LoopWindow::new(5, 3, 0);
        let step = window.move_by(12);
        assert_eq!(window.logical_index(), 2);
        assert_eq!(step, LoopStep { position: 7, shift: None });

        let step = window.move_by(-13);
        assert_eq!(window.logical_index(), 4);
        assert_eq!(step, LoopStep { position: 9, shift: Some(5) });
    }

    #[test]
    fn extreme_deltas_stay_in_the_window() {
        for delta in [i64::MAX, i64::MIN, i64::MAX - 1, i64::MIN + 1] {
            let mut window = LoopWindow::new(7, 3, 3);
            let start = window.centered_position();
            let step = window.move_by(delta);
            let pos = window.centered_position();
            assert!((7..14).contains(&pos), "position {pos} left the interior");
            assert!(window.contains_slot(start + step.shift.unwrap_or(0)));
            assert_eq!(window.logical_index(), wrap_index(3 + delta % 7, 7));
        }
    }

    #[test]
    fn jump_takes_shortest_path() {
        let mut window = LoopWindow::new(5, 3, 0);
        let step = window.jump_to(4);
        assert_eq!(window.logical_index(), 4);
        // One step backward from slot 5 lands on slot 4, rebiased to 9.
        assert_eq!(step.position, 9);
        assert_eq!(step.shift, Some(5));
    }

    #[test]
    fn single_item_ring() {
        let mut window = LoopWindow::new(1, 3, 0);
        assert_eq!(window.centered_position(), 1);
        let step = window.move_by(1);
        assert_eq!(step.position, 1);
        assert_eq!(step.shift, None);
        assert_eq!(window.logical_index(), 0);
    }

    #[test]
    fn empty_ring_is_inert() {
        let mut window = LoopWindow::new(0, 3, 3);
        assert_eq!(window.move_by(4), LoopStep { position: 0, shift: None });
        assert_eq!(window.slot_count(), 0);
    }
}
