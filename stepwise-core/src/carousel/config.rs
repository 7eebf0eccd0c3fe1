//! Static configuration for a carousel instance.

use std::time::Duration;

use super::types::WrapMode;
use crate::constants::transition;
use crate::easing::Easing;

/// Static configuration for a carousel instance. These can be derived from
/// presets (insights, chips, wizard) or provided ad-hoc by callsites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// How long the transition lock is held after an accepted move.
    pub transition: Duration,
    pub wrap_mode: WrapMode,
    /// Curve used by [`crate::Carousel::eased_progress`].
    pub easing: Easing,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::insight_defaults()
    }
}

impl CarouselConfig {
    /// Defaults for the insight carousels (circular card slides).
    pub const fn insight_defaults() -> Self {
        Self {
            transition: Duration::from_millis(transition::DEFAULT_MS),
            wrap_mode: WrapMode::Circular,
            easing: Easing::EaseOut,
        }
    }

    /// Defaults for the category/filter chip row.
    pub const fn chip_defaults() -> Self {
        Self {
            transition: Duration::from_millis(transition::CHIP_MS),
            wrap_mode: WrapMode::Circular,
            easing: Easing::EaseInOut,
        }
    }

    /// Defaults for wizard-style linear card flows.
    pub const fn wizard_defaults() -> Self {
        Self {
            transition: Duration::from_millis(transition::WIZARD_MS),
            wrap_mode: WrapMode::Clamped,
            easing: Easing::EaseOut,
        }
    }

    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    pub fn with_wrap_mode(mut self, wrap_mode: WrapMode) -> Self {
        self.wrap_mode = wrap_mode;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}
