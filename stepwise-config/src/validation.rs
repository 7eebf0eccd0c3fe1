//! Guard rails applied after parsing and environment overrides.

use stepwise_core::constants::transition::{MAX_MS, MIN_MS};

use crate::error::ConfigGuardRailError;
use crate::models::StepwiseConfig;

pub fn validate(config: &StepwiseConfig) -> Result<(), ConfigGuardRailError> {
    if config.log.filter.trim().is_empty() {
        return Err(ConfigGuardRailError::EmptyLogFilter);
    }
    for (section, values) in &config.carousel {
        let Some(transition) = values.transition else {
            continue;
        };
        let ms = transition.as_millis();
        if ms < u128::from(MIN_MS) || ms > u128::from(MAX_MS) {
            return Err(ConfigGuardRailError::TransitionOutOfRange {
                section: section.clone(),
                got_ms: ms,
                min_ms: MIN_MS,
                max_ms: MAX_MS,
            });
        }
    }
    Ok(())
}
