use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid duration '{value}' in {key}")]
    InvalidDuration {
        key: String,
        value: String,
        #[source]
        source: humantime::DurationError,
    },
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

/// A value parsed fine but falls outside what the controllers accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigGuardRailError {
    #[error(
        "carousel.{section}.transition {got_ms}ms not in {min_ms}..={max_ms}ms"
    )]
    TransitionOutOfRange {
        section: String,
        got_ms: u128,
        min_ms: u64,
        max_ms: u64,
    },
    #[error("log.filter must not be empty")]
    EmptyLogFilter,
}
