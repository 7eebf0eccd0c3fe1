//! Easing curves for transition progress

use std::fmt;

/// Easing function type for animations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub const ALL: [Self; 4] =
        [Self::Linear, Self::EaseIn, Self::EaseOut, Self::EaseInOut];

    /// Apply the curve to a progress value, clamped to `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
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

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::EaseIn => write!(f, "Ease In"),
            Self::EaseOut => write!(f, "Ease Out"),
            Self::EaseInOut => write!(f, "Ease In/Out"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_pin_endpoints() {
        for easing in Easing::ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing}");
        }
    }

    #[test]
    fn ease_out_leads_linear_at_midpoint() {
        assert!(Easing::EaseOut.apply(0.5) > Easing::Linear.apply(0.5));
        assert!(Easing::EaseIn.apply(0.5) < Easing::Linear.apply(0.5));
        assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(Easing::Linear.apply(-3.0), 0.0);
        assert_eq!(Easing::EaseIn.apply(7.5), 1.0);
    }
}
