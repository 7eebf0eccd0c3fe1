//! Error taxonomy for carousel and stepper navigation.
//!
//! Every condition here is local and recoverable. Navigation requests that are
//! merely redundant (locked, single item, already active) are not errors; they
//! are reported as [`crate::Navigation::Ignored`] instead.

use thiserror::Error;

/// Errors raised by carousel construction and explicit index navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// Requested index lies outside `[0, len - 1]`.
    #[error("index {index} is out of range for a sequence of {len} items")]
    InvalidIndex { index: usize, len: usize },
}

/// Caller-supplied input failed validation before a phase advance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Name of the offending input (e.g. `amount`).
    pub field: String,
    /// Human-readable reason, surfaced to the user unchanged.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors raised by stepper (wizard) navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepperError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("already at the last phase")]
    TerminalPhase,

    #[error("already at the first phase")]
    InitialPhase,

    /// Phase list was empty or contained duplicates.
    #[error("invalid phase sequence: {0}")]
    InvalidPhases(&'static str),
}

/// Errors surfaced by the async transition driver.
#[cfg(feature = "driver")]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// The driver task has shut down (handle cancelled or runtime gone).
    #[error("carousel driver has shut down")]
    Closed,

    #[error(transparent)]
    Carousel(#[from] CarouselError),
}

pub type CarouselResult<T> = std::result::Result<T, CarouselError>;
pub type StepperResult<T> = std::result::Result<T, StepperError>;
