//! Rendering helpers
//!
//! Pure functions of `(active index, direction, transition state)` so every
//! front-end (insight cards, chip row, wizard slides) derives its animation
//! from the same controller state instead of keeping its own.

use super::peek::Peek;
use super::types::{Direction, Transition};

/// Scale applied to chips that are neither active nor animating.
pub const IDLE_CHIP_SCALE: f32 = 0.9;

/// Where an item sits relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Previous,
    Active,
    Next,
    /// Not drawn by a three-card carousel.
    Hidden,
}

impl Slot {
    /// Slot of `index` within `peek`. With two items the other card is both
    /// previous and next; it is reported as `Next`.
    pub fn of(index: usize, peek: &Peek) -> Self {
        if index == peek.active {
            Slot::Active
        } else if peek.next == Some(index) {
            Slot::Next
        } else if peek.previous == Some(index) {
            Slot::Previous
        } else {
            Slot::Hidden
        }
    }

    /// Resting position in strides from the centre.
    pub fn rest_position(self) -> Option<f32> {
        match self {
            Slot::Previous => Some(-1.0),
            Slot::Active => Some(0.0),
            Slot::Next => Some(1.0),
            Slot::Hidden => None,
        }
    }
}

/// Horizontal offset (in the caller's units) of a card in `slot`.
///
/// While a transition animates, cards start one stride behind their resting
/// position (they slid in from the side the carousel moved away from) and
/// converge as `eased_progress` reaches `1.0`.
pub fn slide_offset(
    slot: Slot,
    direction: Direction,
    eased_progress: f32,
    stride: f32,
) -> Option<f32> {
    let rest = slot.rest_position()?;
    let remaining = 1.0 - eased_progress.clamp(0.0, 1.0);
    let lag = direction.signum() as f32 * remaining;
    Some((rest + lag) * stride)
}

/// Visual state of a chip in the category row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipEmphasis {
    /// Selected and at rest.
    Active,
    /// Becoming selected (expanding).
    Entering,
    /// Losing selection (shrinking).
    Leaving,
    Idle,
}

impl ChipEmphasis {
    pub fn of(
        index: usize,
        active: usize,
        transition: Option<&Transition>,
    ) -> Self {
        match transition {
            Some(_) if index == active => ChipEmphasis::Entering,
            None if index == active => ChipEmphasis::Active,
            Some(t) if index == t.from => ChipEmphasis::Leaving,
            _ => ChipEmphasis::Idle,
        }
    }

    /// Scale factor for the chip at `eased_progress`.
    pub fn scale(self, eased_progress: f32) -> f32 {
        let p = eased_progress.clamp(0.0, 1.0);
        let span = 1.0 - IDLE_CHIP_SCALE;
        match self {
            ChipEmphasis::Active => 1.0,
            ChipEmphasis::Entering => IDLE_CHIP_SCALE + span * p,
            ChipEmphasis::Leaving => 1.0 - span * p,
            ChipEmphasis::Idle => IDLE_CHIP_SCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::types::WrapMode;
    use std::time::Instant;

    fn peek(active: usize, len: usize) -> Peek {
        Peek::around(active, len, WrapMode::Circular).unwrap()
    }

    #[test]
    fn slots_follow_peek() {
        let p = peek(0, 4);
        assert_eq!(Slot::of(0, &p), Slot::Active);
        assert_eq!(Slot::of(1, &p), Slot::Next);
        assert_eq!(Slot::of(3, &p), Slot::Previous);
        assert_eq!(Slot::of(2, &p), Slot::Hidden);
    }

    #[test]
    fn two_item_neighbour_reports_next() {
        let p = peek(1, 2);
        assert_eq!(Slot::of(0, &p), Slot::Next);
    }

    #[test]
    fn forward_slide_starts_one_stride_right() {
        let start = slide_offset(Slot::Active, Direction::Forward, 0.0, 100.0);
        assert_eq!(start, Some(100.0));
        let done = slide_offset(Slot::Active, Direction::Forward, 1.0, 100.0);
        assert_eq!(done, Some(0.0));
    }

    #[test]
    fn backward_slide_starts_one_stride_left() {
        let start = slide_offset(Slot::Next, Direction::Backward, 0.0, 50.0);
        assert_eq!(start, Some(0.0));
        let half = slide_offset(Slot::Next, Direction::Backward, 0.5, 50.0);
        assert_eq!(half, Some(25.0));
    }

    #[test]
    fn idle_slide_rests_and_hidden_has_no_offset() {
        assert_eq!(
            slide_offset(Slot::Previous, Direction::None, 0.0, 10.0),
            Some(-10.0)
        );
        assert_eq!(
            slide_offset(Slot::Hidden, Direction::Forward, 0.3, 10.0),
            None
        );
    }

    #[test]
    fn chip_emphasis_tracks_transition() {
        let t = Transition {
            from: 1,
            to: 2,
            direction: Direction::Forward,
            deadline: Instant::now(),
        };
        assert_eq!(ChipEmphasis::of(2, 2, Some(&t)), ChipEmphasis::Entering);
        assert_eq!(ChipEmphasis::of(1, 2, Some(&t)), ChipEmphasis::Leaving);
        assert_eq!(ChipEmphasis::of(0, 2, Some(&t)), ChipEmphasis::Idle);
        assert_eq!(ChipEmphasis::of(2, 2, None), ChipEmphasis::Active);
        assert_eq!(ChipEmphasis::of(1, 2, None), ChipEmphasis::Idle);
    }

    #[test]
    fn chip_scales_meet_at_the_ends() {
        assert_eq!(ChipEmphasis::Entering.scale(0.0), IDLE_CHIP_SCALE);
        assert_eq!(ChipEmphasis::Entering.scale(1.0), 1.0);
        assert_eq!(ChipEmphasis::Leaving.scale(0.0), 1.0);
        let settled = ChipEmphasis::Leaving.scale(1.0);
        assert!((settled - IDLE_CHIP_SCALE).abs() < 1e-6);
    }
}
