//! Configuration for stepwise controllers.
//!
//! Loads `stepwise.toml` (optionally preceded by a `.env` file), applies
//! `STEPWISE_*` environment overrides, checks guard rails, and resolves
//! per-carousel [`stepwise_core::CarouselConfig`] values. Also hosts the
//! scripted replay used by the `stepwise-replay` binary.

pub mod error;
pub mod loader;
pub mod models;
pub mod replay;
pub mod validation;

pub use error::{ConfigGuardRailError, ConfigLoadError};
pub use loader::{ConfigLoader, DEFAULT_CONFIG_FILE, ENV_LOG, ENV_TRANSITION};
pub use models::{
    CarouselSection, DEFAULT_LOG_FILTER, DEFAULT_SECTION, LogSettings,
    StepwiseConfig, preset_for,
};
pub use replay::{Outcome, ReplayLine, Step, StepParseError};
