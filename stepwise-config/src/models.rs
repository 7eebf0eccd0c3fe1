//! Configuration model deserialized from `stepwise.toml`.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;
use stepwise_core::{CarouselConfig, CarouselKey, Easing, WrapMode};

/// Section name whose values apply to every carousel.
pub const DEFAULT_SECTION: &str = "default";

/// Default tracing filter when neither config nor `RUST_LOG` set one.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StepwiseConfig {
    pub log: LogSettings,
    /// Per-carousel overrides keyed by section name (`default`, `insights`,
    /// `insight_cards`, `categories`, or any custom key name).
    pub carousel: BTreeMap<String, CarouselSection>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Optional overrides for one carousel. Unset fields fall through to the
/// `default` section and then to the built-in preset for the key.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselSection {
    #[serde(deserialize_with = "humantime_duration::deserialize")]
    pub transition: Option<Duration>,
    pub wrap: Option<WrapMode>,
    pub easing: Option<Easing>,
}

impl CarouselSection {
    fn apply(&self, mut config: CarouselConfig) -> CarouselConfig {
        if let Some(transition) = self.transition {
            config = config.with_transition(transition);
        }
        if let Some(wrap) = self.wrap {
            config = config.with_wrap_mode(wrap);
        }
        if let Some(easing) = self.easing {
            config = config.with_easing(easing);
        }
        config
    }
}

/// Built-in preset for a key before any file overrides.
pub fn preset_for(key: &CarouselKey) -> CarouselConfig {
    match key {
        CarouselKey::Categories => CarouselConfig::chip_defaults(),
        CarouselKey::Insights
        | CarouselKey::InsightCards
        | CarouselKey::Custom(_) => CarouselConfig::insight_defaults(),
    }
}

impl StepwiseConfig {
    /// Resolve the effective settings for `key`: preset, then `default`,
    /// then the key's own section.
    pub fn carousel(&self, key: &CarouselKey) -> CarouselConfig {
        self.carousel_named(key.name(), preset_for(key))
    }

    /// Resolve settings for a section name on top of `base`.
    pub fn carousel_named(
        &self,
        name: &str,
        base: CarouselConfig,
    ) -> CarouselConfig {
        let mut config = base;
        if let Some(defaults) = self.carousel.get(DEFAULT_SECTION) {
            config = defaults.apply(config);
        }
        if name != DEFAULT_SECTION
            && let Some(section) = self.carousel.get(name)
        {
            config = section.apply(config);
        }
        config
    }
}

mod humantime_duration {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|value| {
            humantime::parse_duration(&value).map_err(|err| {
                serde::de::Error::custom(format!(
                    "invalid duration '{value}': {err}"
                ))
            })
        })
        .transpose()
    }
}
