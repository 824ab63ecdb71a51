//! Wraparound and shortest-path arithmetic on a ring of `n` items.

/// Wraps any signed index into `[0, n)`.
///
/// Returns `0` for an empty ring.
#[must_use]
pub fn wrap_index(index: i64, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    let n = item_count as i64;
    ((index % n) + n) as usize % item_count
}

/// Signed shortest distance from `current` to `target` on a ring of
/// `item_count` items.
///
/// Of the two representatives of `(target - current) mod n` the one with the
/// smaller magnitude wins; on a tie (even `n`, opposite side of the ring) the
/// positive, forward candidate is chosen.
#[must_use]
pub fn circular_distance(current: i64, target: i64, item_count: usize) -> i64 {
    if item_count == 0 {
        return 0;
    }
    let n = item_count as i64;
    let forward = (target - current).rem_euclid(n);
    let backward = forward - n;
    if forward <= -backward {
        forward
    } else {
        backward
    }
}

/// Fractional variant of [`circular_distance`] for positions that are in the
/// middle of an animation.
#[must_use]
pub fn circular_distance_f32(current: f32, target: f32, item_count: usize) -> f32 {
    if item_count == 0 {
        return 0.0;
    }
    let n = item_count as f32;
    let forward = (target - current).rem_euclid(n);
    let backward = forward - n;
    if forward <= -backward {
        forward
    } else {
        backward
    }
}

/// Clamps a signed index into `[0, n - 1]`; `0` for an empty list.
#[must_use]
pub fn clamp_index(index: i64, item_count: usize) -> i64 {
    if item_count == 0 {
        return 0;
    }
    index.clamp(0, item_count as i64 - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_handles_negative_indices() {
        assert_eq!(wrap_index(-1, 5), 4);
        assert_eq!(wrap_index(-6, 5), 4);
        assert_eq!(wrap_index(7, 5), 2);
        assert_eq!(wrap_index(3, 0), 0);
    }

    #[test]
    fn wrap_is_idempotent_and_in_range() {
        for n in 2..9usize {
            for i in -40..40i64 {
                let once = wrap_index(i, n);
                assert!(once < n);
                assert_eq!(wrap_index(once as i64, n), once);
            }
        }
    }

    #[test]
    fn circular_distance_prefers_short_path() {
        assert_eq!(circular_distance(0, 4, 5), -1);
        assert_eq!(circular_distance(4, 0, 5), 1);
        assert_eq!(circular_distance(1, 3, 5), 2);
        assert_eq!(circular_distance(2, 2, 5), 0);
    }

    #[test]
    fn circular_distance_tie_goes_forward() {
        assert_eq!(circular_distance(0, 2, 4), 2);
        assert_eq!(circular_distance(2, 0, 4), 2);
        assert_eq!(circular_distance(1, 4, 6), 3);
    }

    #[test]
    fn circular_distance_round_trip() {
        for n in 2..9usize {
            for current in -12..12i64 {
                for target in -12..12i64 {
                    let d = circular_distance(current, target, n);
                    assert!(d.unsigned_abs() as usize <= n / 2);
                    assert_eq!(wrap_index(current + d, n), wrap_index(target, n));
                }
            }
        }
    }

    #[test]
    fn fractional_distance_matches_integer() {
        assert_eq!(circular_distance_f32(0.0, 4.0, 5), -1.0);
        assert!((circular_distance_f32(4.5, 0.0, 5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn clamp_index_bounds() {
        assert_eq!(clamp_index(-3, 4), 0);
        assert_eq!(clamp_index(9, 4), 3);
        assert_eq!(clamp_index(2, 4), 2);
        assert_eq!(clamp_index(2, 0), 0);
    }
}
