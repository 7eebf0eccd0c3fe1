//! Config loading: optional `.env`, TOML file, environment overrides,
//! validation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ConfigLoadError;
use crate::models::{CarouselSection, DEFAULT_SECTION, StepwiseConfig};
use crate::validation;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "stepwise.toml";

/// Applies one transition duration to every carousel.
pub const ENV_TRANSITION: &str = "STEPWISE_TRANSITION";
/// Replaces `log.filter`.
pub const ENV_LOG: &str = "STEPWISE_LOG";

#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit config file. Unlike the default lookup, a missing
    /// explicit file is an error.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Load this `.env` file into the process environment before reading
    /// overrides.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Load using the process environment for overrides.
    pub fn load(&self) -> Result<StepwiseConfig, ConfigLoadError> {
        if let Some(env_file) = &self.env_file {
            dotenvy::from_path(env_file)?;
            debug!(path = %env_file.display(), "loaded env file");
        }
        self.load_with_env(|key| std::env::var(key).ok())
    }

    /// Load with a caller-supplied environment lookup.
    pub fn load_with_env<F>(
        &self,
        lookup: F,
    ) -> Result<StepwiseConfig, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match &self.config_path {
            Some(path) => read_config(path)?,
            None => match read_config(Path::new(DEFAULT_CONFIG_FILE)) {
                Err(ConfigLoadError::Io { source, .. })
                    if source.kind() == ErrorKind::NotFound =>
                {
                    debug!("no {DEFAULT_CONFIG_FILE} found; using defaults");
                    StepwiseConfig::default()
                }
                other => other?,
            },
        };
        apply_env_overrides(&mut config, lookup)?;
        validation::validate(&config)?;
        info!(
            sections = config.carousel.len(),
            log = %config.log.filter,
            "configuration loaded"
        );
        Ok(config)
    }
}

fn read_config(path: &Path) -> Result<StepwiseConfig, ConfigLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn apply_env_overrides<F>(
    config: &mut StepwiseConfig,
    lookup: F,
) -> Result<(), ConfigLoadError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(ENV_TRANSITION) {
        let transition =
            humantime::parse_duration(raw.trim()).map_err(|source| {
                ConfigLoadError::InvalidDuration {
                    key: ENV_TRANSITION.to_string(),
                    value: raw.clone(),
                    source,
                }
            })?;
        config
            .carousel
            .entry(DEFAULT_SECTION.to_string())
            .or_insert_with(CarouselSection::default);
        for section in config.carousel.values_mut() {
            section.transition = Some(transition);
        }
        debug!(?transition, "transition overridden from environment");
    }
    if let Some(filter) = lookup(ENV_LOG) {
        config.log.filter = filter;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use stepwise_core::CarouselKey;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn transition_override_reaches_every_section() {
        let mut config: StepwiseConfig = toml::from_str(
            r#"
            [carousel.categories]
            transition = "250ms"
            "#,
        )
        .unwrap();
        apply_env_overrides(&mut config, env(&[(ENV_TRANSITION, "1s")]))
            .unwrap();

        for key in [CarouselKey::Categories, CarouselKey::Insights] {
            assert_eq!(
                config.carousel(&key).transition,
                Duration::from_secs(1)
            );
        }
    }

    #[test]
    fn bad_transition_override_names_the_variable() {
        let mut config = StepwiseConfig::default();
        let err =
            apply_env_overrides(&mut config, env(&[(ENV_TRANSITION, "fast")]))
                .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid duration 'fast' in STEPWISE_TRANSITION"
        );
    }

    #[test]
    fn log_override_replaces_filter() {
        let mut config = StepwiseConfig::default();
        apply_env_overrides(
            &mut config,
            env(&[(ENV_LOG, "stepwise_core=trace")]),
        )
        .unwrap();
        assert_eq!(config.log.filter, "stepwise_core=trace");
    }
}
