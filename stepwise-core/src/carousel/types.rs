//! Shared types for the carousel module

use std::time::Instant;

/// Unique key for identifying carousels on a dashboard.
/// Using a strongly-typed key avoids brittle string matching and enables
/// scoped state per carousel instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CarouselKey {
    Insights,
    InsightCards,
    Categories,
    Custom(&'static str),
}

impl CarouselKey {
    /// Config section name for this key.
    pub fn name(&self) -> &'static str {
        match self {
            CarouselKey::Insights => "insights",
            CarouselKey::InsightCards => "insight_cards",
            CarouselKey::Categories => "categories",
            CarouselKey::Custom(name) => *name,
        }
    }
}

/// Forward/backward classification of a transition. Only used to select
/// animation styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    None,
    Forward,
    Backward,
}

impl Direction {
    /// +1 for forward, -1 for backward, 0 when idle.
    pub fn signum(self) -> i32 {
        match self {
            Direction::None => 0,
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Carousel paging and boundary behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum WrapMode {
    /// Indexing wraps with modulo arithmetic.
    #[default]
    Circular,
    /// Linear (clamped) carousel. Stepping past either end is ignored.
    Clamped,
}

/// An accepted transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    /// When the transition lock releases.
    pub deadline: Instant,
}

/// Why a navigation request was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Sequence has no items.
    Empty,
    /// Sequence has exactly one item; there is nowhere to go.
    SingleItem,
    /// A transition is still animating.
    Locked,
    /// Clamped carousel is already at the requested end.
    AtBoundary,
    /// Target equals the active index.
    AlreadyActive,
}

/// Result of a navigation request. Ignored requests never mutate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved(Transition),
    Ignored(IgnoreReason),
}

impl Navigation {
    pub fn is_moved(&self) -> bool {
        matches!(self, Navigation::Moved(_))
    }

    /// New active index, if the request was accepted.
    pub fn target(&self) -> Option<usize> {
        match self {
            Navigation::Moved(t) => Some(t.to),
            Navigation::Ignored(_) => None,
        }
    }
}
