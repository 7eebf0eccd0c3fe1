//! Controller constants
//!
//! Shared defaults for transition timing and configuration guard rails.
//! Tuning should happen here so every carousel and wizard updates
//! consistently.

/// Transition (animation window) defaults.
pub mod transition {
    use std::time::Duration;

    /// Default lock duration (ms) for carousel transitions.
    pub const DEFAULT_MS: u64 = 400;
    /// Chip rows animate a shrink/expand only, so they settle faster.
    pub const CHIP_MS: u64 = 300;
    /// Wizard card slides are the widest motion in the dashboard.
    pub const WIZARD_MS: u64 = 500;
    /// Shortest accepted transition window (ms).
    pub const MIN_MS: u64 = 1;
    /// Longest accepted transition window (ms).
    pub const MAX_MS: u64 = 10_000;
    /// Stand-in deadline offset when a configured window overflows the
    /// clock (about a century).
    pub const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 86_400);
}

/// Driver task defaults.
pub mod driver {
    /// Capacity of the command channel between a handle and its task.
    pub const COMMAND_BUFFER: usize = 32;
}
