//! Time sources for transition deadlines
//!
//! The carousel never sleeps; it stamps a deadline when a transition is
//! accepted and compares against its clock whenever it is read or mutated.
//! Swapping the clock makes time-dependent behavior deterministic in tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Trait for providing time in tests and production
pub trait Clock: Send + Sync + 'static {
    /// Get the current instant
    fn now(&self) -> Instant;
}

/// Production clock that uses real monotonic time
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that follows tokio's timer wheel, so `tokio::time::pause` and
/// `advance` move carousel deadlines too.
#[cfg(feature = "driver")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioClock;

#[cfg(feature = "driver")]
impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}

/// Virtual clock for deterministic tests and scripted replays.
///
/// Clones share the same timeline: advancing one advances all of them.
#[derive(Clone, Debug)]
pub struct ManualClock {
    base: Instant,
    /// Nanoseconds elapsed since `base`
    offset_ns: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset_ns: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Advance time by a duration
    pub fn advance(&self, duration: Duration) {
        let ns = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);
        self.offset_ns.fetch_add(ns, Ordering::SeqCst);
    }

    /// Total virtual time elapsed since creation
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.offset_ns.load(Ordering::SeqCst))
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.elapsed()
    }
}
