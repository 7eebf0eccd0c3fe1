//! Scripted navigation against a carousel on a virtual clock.
//!
//! Steps are written the way they are typed on the command line:
//! `next`, `prev`, `goto:<i>`, `wait`, `wait:<duration>`, `len:<n>`.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use stepwise_core::{
    Carousel, CarouselSnapshot, Direction, ManualClock, Navigation,
};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
    GoTo(usize),
    /// Advance the clock past the configured transition window.
    Wait,
    WaitFor(Duration),
    SetLen(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepParseError {
    #[error(
        "unknown step '{0}' (expected next, prev, goto:<i>, wait, len:<n>)"
    )]
    Unknown(String),
    #[error("step '{step}' needs a non-negative integer, got '{value}'")]
    BadNumber { step: &'static str, value: String },
    #[error("step 'wait' has an invalid duration '{0}'")]
    BadDuration(String),
}

impl FromStr for Step {
    type Err = StepParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        let (name, arg) = match raw.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (raw, None),
        };
        match (name, arg) {
            ("next", None) => Ok(Self::Next),
            ("prev" | "previous", None) => Ok(Self::Previous),
            ("wait", None) => Ok(Self::Wait),
            ("wait", Some(value)) => humantime::parse_duration(value)
                .map(Self::WaitFor)
                .map_err(|_| StepParseError::BadDuration(value.to_string())),
            ("goto", Some(value)) => number("goto", value).map(Self::GoTo),
            ("len", Some(value)) => number("len", value).map(Self::SetLen),
            _ => Err(StepParseError::Unknown(raw.to_string())),
        }
    }
}

fn number(step: &'static str, value: &str) -> Result<usize, StepParseError> {
    value.parse().map_err(|_| StepParseError::BadNumber {
        step,
        value: value.to_string(),
    })
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => f.write_str("next"),
            Self::Previous => f.write_str("prev"),
            Self::GoTo(index) => write!(f, "goto:{index}"),
            Self::Wait => f.write_str("wait"),
            Self::WaitFor(duration) => {
                write!(f, "wait:{}", humantime::format_duration(*duration))
            }
            Self::SetLen(len) => write!(f, "len:{len}"),
        }
    }
}

/// Outcome of one replayed step.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayLine {
    pub step: Step,
    pub outcome: Outcome,
    pub snapshot: CarouselSnapshot,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Navigated(Navigation),
    Rejected(String),
    Waited(Duration),
    Resized,
}

impl fmt::Display for ReplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<10} ", self.step.to_string())?;
        match &self.outcome {
            Outcome::Navigated(Navigation::Moved(t)) => {
                write!(f, "moved to {}", t.to)?
            }
            Outcome::Navigated(Navigation::Ignored(reason)) => {
                write!(f, "ignored ({reason:?})")?
            }
            Outcome::Rejected(message) => write!(f, "rejected: {message}")?,
            Outcome::Waited(duration) => {
                write!(f, "waited {}", humantime::format_duration(*duration))?
            }
            Outcome::Resized => f.write_str("resized")?,
        }
        let snap = &self.snapshot;
        match snap.active_index {
            Some(active) => write!(f, " | active={active}")?,
            None => f.write_str(" | active=-")?,
        }
        write!(f, " len={} dir={}", snap.len, direction_label(snap.direction))?;
        if snap.is_transitioning {
            f.write_str(" locked")?;
        }
        Ok(())
    }
}

fn direction_label(direction: Direction) -> &'static str {
    match direction {
        Direction::None => "none",
        Direction::Forward => "forward",
        Direction::Backward => "backward",
    }
}

/// Apply `steps` in order, advancing the carousel's own clock for waits.
pub fn run(
    carousel: &mut Carousel<ManualClock>,
    steps: &[Step],
) -> Vec<ReplayLine> {
    steps
        .iter()
        .map(|&step| {
            let outcome = apply(carousel, step);
            debug!(%step, ?outcome, "replayed step");
            ReplayLine {
                step,
                outcome,
                snapshot: carousel.snapshot(),
            }
        })
        .collect()
}

fn apply(carousel: &mut Carousel<ManualClock>, step: Step) -> Outcome {
    match step {
        Step::Next => Outcome::Navigated(carousel.go_to_next()),
        Step::Previous => Outcome::Navigated(carousel.go_to_previous()),
        Step::GoTo(index) => match carousel.go_to_index(index) {
            Ok(nav) => Outcome::Navigated(nav),
            Err(err) => Outcome::Rejected(err.to_string()),
        },
        Step::Wait => {
            let window = carousel.config().transition;
            carousel.clock().advance(window);
            Outcome::Waited(window)
        }
        Step::WaitFor(duration) => {
            carousel.clock().advance(duration);
            Outcome::Waited(duration)
        }
        Step::SetLen(len) => {
            carousel.set_len(len);
            Outcome::Resized
        }
    }
}
