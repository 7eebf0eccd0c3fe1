//! Multi-step wizard controller
//!
//! A linear flow over named phases with a committed input carried between
//! them. Unlike the carousel, navigation is monotonic (no wrap) and an
//! advance can be rejected by validating the committed input first.

mod phase;

pub use phase::SwapPhase;

use std::fmt;

use tracing::{debug, warn};

use crate::carousel::Direction;
use crate::error::{StepperError, StepperResult, ValidationError};

#[derive(Debug, Clone)]
pub struct Stepper<P, V> {
    phases: Vec<P>,
    current: usize,
    committed: Option<V>,
    /// Direction of the most recent phase change, for slide animations
    direction: Direction,
}

impl<V> Stepper<SwapPhase, V> {
    /// `Form → Review → Done`, starting at `Form`.
    pub fn swap() -> Self {
        Self {
            phases: SwapPhase::ALL.to_vec(),
            current: 0,
            committed: None,
            direction: Direction::None,
        }
    }
}

impl<P, V> Stepper<P, V>
where
    P: Copy + Eq + fmt::Debug,
{
    /// Build a stepper over `phases`, starting at the first one.
    ///
    /// The sequence must be non-empty and free of duplicates.
    pub fn new(phases: impl IntoIterator<Item = P>) -> StepperResult<Self> {
        let phases: Vec<P> = phases.into_iter().collect();
        if phases.is_empty() {
            return Err(StepperError::InvalidPhases("no phases"));
        }
        for (i, phase) in phases.iter().enumerate() {
            if phases[..i].contains(phase) {
                return Err(StepperError::InvalidPhases("duplicate phase"));
            }
        }
        Ok(Self {
            phases,
            current: 0,
            committed: None,
            direction: Direction::None,
        })
    }

    pub fn current_phase(&self) -> P {
        self.phases[self.current]
    }

    pub fn phases(&self) -> &[P] {
        &self.phases
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.phases.len()
    }

    pub fn next_phase(&self) -> Option<P> {
        self.phases.get(self.current + 1).copied()
    }

    pub fn previous_phase(&self) -> Option<P> {
        self.current
            .checked_sub(1)
            .map(|i| self.phases[i])
    }

    /// `(current index, total phases)` for a progress indicator.
    pub fn progress(&self) -> (usize, usize) {
        (self.current, self.phases.len())
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The most recently committed input. Review reads this rather than
    /// re-deriving it from form state.
    pub fn committed_input(&self) -> Option<&V> {
        self.committed.as_ref()
    }

    /// Store `value` regardless of the current phase, returning the value it
    /// replaced.
    pub fn commit_input(&mut self, value: V) -> Option<V> {
        self.committed.replace(value)
    }

    /// Advance one phase if `validate` passes.
    ///
    /// At the last phase this fails with [`StepperError::TerminalPhase`]
    /// without running `validate`. A validation failure leaves the stepper
    /// untouched and is returned to the caller.
    pub fn advance_phase<F>(&mut self, validate: F) -> StepperResult<P>
    where
        F: FnOnce() -> Result<(), ValidationError>,
    {
        if self.is_last() {
            return Err(StepperError::TerminalPhase);
        }
        if let Err(err) = validate() {
            warn!(
                phase = ?self.current_phase(),
                %err,
                "phase advance rejected"
            );
            return Err(err.into());
        }
        self.move_to(self.current + 1, Direction::Forward);
        Ok(self.current_phase())
    }

    /// Step back one phase without re-validating committed input.
    pub fn retreat_phase(&mut self) -> StepperResult<P> {
        if self.is_first() {
            return Err(StepperError::InitialPhase);
        }
        self.move_to(self.current - 1, Direction::Backward);
        Ok(self.current_phase())
    }

    /// Return to the first phase and drop the committed input.
    pub fn reset(&mut self) {
        self.current = 0;
        self.committed = None;
        self.direction = Direction::None;
        debug!(phase = ?self.current_phase(), "stepper reset");
    }

    fn move_to(&mut self, index: usize, direction: Direction) {
        let from = self.current_phase();
        self.current = index;
        self.direction = direction;
        debug!(
            ?from,
            to = ?self.current_phase(),
            ?direction,
            "phase changed"
        );
    }
}
