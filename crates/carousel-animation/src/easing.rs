//! Easing curves.

/// Maps linear progress `t ∈ [0, 1]` onto eased progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    Linear,
    /// Quadratic ease-in.
    EaseIn,
    /// Quadratic ease-out. Used for settling after a drag.
    #[default]
    EaseOut,
    /// Quadratic ease-in-out. Used for scale transitions.
    EaseInOut,
}

impl Easing {
    pub fn transform(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert_eq!(easing.transform(0.0), 0.0);
            assert_eq!(easing.transform(1.0), 1.0);
        }
    }

    #[test]
    fn ease_out_leads_linear() {
        assert!(Easing::EaseOut.transform(0.25) > 0.25);
        assert!(Easing::EaseIn.transform(0.25) < 0.25);
        assert_eq!(Easing::EaseInOut.transform(0.5), 0.5);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(Easing::Linear.transform(1.5), 1.0);
        assert_eq!(Easing::EaseOut.transform(-0.5), 0.0);
    }
}
