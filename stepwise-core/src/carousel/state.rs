//! Carousel: active index, transition lock, and direction
//!
//! The carousel is the sole authority over which item is active and whether a
//! transition is animating. A transition, once accepted, always runs to its
//! deadline; requests arriving while it is in flight are dropped, not queued.
//! The deadline is settled lazily: every read compares it against the clock,
//! and every mutation clears a lapsed transition before doing anything else.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::config::CarouselConfig;
use super::observer::{IndexObserver, ObserverFn, Observers, SubscriptionId};
use super::peek::Peek;
use super::types::{
    Direction, IgnoreReason, Navigation, Transition, WrapMode,
};
use crate::clock::{Clock, SystemClock};
use crate::constants::transition::FAR_FUTURE;
use crate::error::{CarouselError, CarouselResult};

/// Point-in-time view of a carousel, suitable for publishing to renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSnapshot {
    pub len: usize,
    pub active_index: Option<usize>,
    pub direction: Direction,
    pub is_transitioning: bool,
    /// Raw (uneased) progress of the in-flight transition, `1.0` when idle.
    pub progress: f32,
}

#[derive(Debug)]
pub struct Carousel<C: Clock = SystemClock> {
    len: usize,
    /// Meaningful only while `len > 0`
    active: usize,
    config: CarouselConfig,
    clock: C,
    in_flight: Option<Transition>,
    observers: Observers,
}

impl Carousel<SystemClock> {
    /// Create a carousel over `len` items with default (insight) settings.
    ///
    /// Fails with [`CarouselError::InvalidIndex`] when `initial_index` is out
    /// of range for a non-empty sequence. An empty sequence accepts any
    /// initial index and yields the inert empty state.
    pub fn new(len: usize, initial_index: usize) -> CarouselResult<Self> {
        Self::with_config(len, initial_index, CarouselConfig::default())
    }

    pub fn with_config(
        len: usize,
        initial_index: usize,
        config: CarouselConfig,
    ) -> CarouselResult<Self> {
        Self::with_clock(len, initial_index, config, SystemClock)
    }

    /// Start on the visual middle element (`len / 2`).
    pub fn centered(len: usize, config: CarouselConfig) -> Self {
        Self::centered_with_clock(len, config, SystemClock)
    }
}

impl<C: Clock> Carousel<C> {
    pub fn with_clock(
        len: usize,
        initial_index: usize,
        config: CarouselConfig,
        clock: C,
    ) -> CarouselResult<Self> {
        let active = if len == 0 {
            0
        } else if initial_index < len {
            initial_index
        } else {
            return Err(CarouselError::InvalidIndex {
                index: initial_index,
                len,
            });
        };
        Ok(Self {
            len,
            active,
            config,
            clock,
            in_flight: None,
            observers: Observers::default(),
        })
    }

    pub fn centered_with_clock(
        len: usize,
        config: CarouselConfig,
        clock: C,
    ) -> Self {
        Self {
            len,
            active: len / 2,
            config,
            clock,
            in_flight: None,
            observers: Observers::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Active index, or `None` for an empty sequence.
    pub fn active_index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.active)
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The transition currently holding the lock, if its window has not
    /// elapsed yet.
    pub fn transition(&self) -> Option<Transition> {
        self.transition_at(self.clock.now())
    }

    /// Deadline of the held transition even if it has already lapsed, so a
    /// timer armed late still fires and settles it.
    pub(crate) fn pending_deadline(&self) -> Option<Instant> {
        self.in_flight.map(|t| t.deadline)
    }

    fn transition_at(&self, now: Instant) -> Option<Transition> {
        self.in_flight.filter(|t| now < t.deadline)
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition().is_some()
    }

    pub fn direction(&self) -> Direction {
        self.transition()
            .map(|t| t.direction)
            .unwrap_or(Direction::None)
    }

    /// Time left before the lock releases.
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining_at(self.clock.now())
    }

    fn remaining_at(&self, now: Instant) -> Option<Duration> {
        self.transition_at(now)
            .map(|t| t.deadline.saturating_duration_since(now))
    }

    /// Raw progress of the in-flight transition in `[0, 1]`; `1.0` when idle.
    pub fn transition_progress(&self) -> f32 {
        self.progress_at(self.clock.now())
    }

    fn progress_at(&self, now: Instant) -> f32 {
        let Some(remaining) = self.remaining_at(now) else {
            return 1.0;
        };
        let total = self.config.transition.as_secs_f32();
        if total <= 0.0 {
            return 1.0;
        }
        (1.0 - remaining.as_secs_f32() / total).clamp(0.0, 1.0)
    }

    /// [`Self::transition_progress`] shaped by the configured easing curve.
    pub fn eased_progress(&self) -> f32 {
        self.config.easing.apply(self.transition_progress())
    }

    /// Previous/active/next indices for rendering; `None` when empty.
    pub fn peek(&self) -> Option<Peek> {
        Peek::around(self.active_index()?, self.len, self.config.wrap_mode)
    }

    /// All fields are read against a single clock sample.
    pub fn snapshot(&self) -> CarouselSnapshot {
        let now = self.clock.now();
        let live = self.transition_at(now);
        CarouselSnapshot {
            len: self.len,
            active_index: self.active_index(),
            direction: live.map(|t| t.direction).unwrap_or(Direction::None),
            is_transitioning: live.is_some(),
            progress: self.progress_at(now),
        }
    }

    /// Register an observer for index changes.
    pub fn subscribe(
        &mut self,
        observer: impl IndexObserver + 'static,
    ) -> SubscriptionId {
        self.subscribe_boxed(Box::new(observer))
    }

    /// [`Self::subscribe`] for an observer that is already boxed.
    pub fn subscribe_boxed(
        &mut self,
        observer: Box<dyn IndexObserver>,
    ) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    /// Register a closure for index changes.
    pub fn on_index_changed<F>(&mut self, f: F) -> SubscriptionId
    where
        F: FnMut(usize) + Send + 'static,
    {
        self.subscribe(ObserverFn(f))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Release the lock if the transition window has elapsed. Returns the
    /// transition that completed, if any.
    pub fn settle(&mut self) -> Option<Transition> {
        let t = self.in_flight?;
        if self.clock.now() < t.deadline {
            return None;
        }
        self.in_flight = None;
        trace!(to = t.to, direction = ?t.direction, "transition settled");
        Some(t)
    }

    pub fn go_to_next(&mut self) -> Navigation {
        self.step(Direction::Forward)
    }

    pub fn go_to_previous(&mut self) -> Navigation {
        self.step(Direction::Backward)
    }

    /// Jump straight to `target`.
    ///
    /// Direction is an ordinal comparison (`target > active` is forward),
    /// not the shortest way round the circle: jumping from the last item to
    /// the first animates backward. Out-of-range targets are rejected with
    /// [`CarouselError::InvalidIndex`] and leave the carousel untouched.
    pub fn go_to_index(&mut self, target: usize) -> CarouselResult<Navigation> {
        self.settle();
        if self.len == 0 {
            return Ok(self.ignore(IgnoreReason::Empty));
        }
        if target >= self.len {
            return Err(CarouselError::InvalidIndex {
                index: target,
                len: self.len,
            });
        }
        if self.in_flight.is_some() {
            return Ok(self.ignore(IgnoreReason::Locked));
        }
        if target == self.active {
            let reason = if self.len == 1 {
                IgnoreReason::SingleItem
            } else {
                IgnoreReason::AlreadyActive
            };
            return Ok(self.ignore(reason));
        }
        let direction = if target > self.active {
            Direction::Forward
        } else {
            Direction::Backward
        };
        Ok(self.begin(target, direction))
    }

    /// Replace the sequence length, keeping the active index valid.
    ///
    /// Shrinking clamps the active index to `len - 1`; this is not a
    /// transition, so observers are not notified. An in-flight transition
    /// keeps its deadline with both ends clamped, and is dropped when the
    /// sequence becomes empty.
    pub fn set_len(&mut self, len: usize) {
        if len == self.len {
            return;
        }
        let previous = self.active_index();
        self.len = len;
        if len == 0 {
            self.active = 0;
            self.in_flight = None;
        } else {
            let last = len - 1;
            self.active = self.active.min(last);
            if let Some(t) = self.in_flight.as_mut() {
                t.from = t.from.min(last);
                t.to = t.to.min(last);
            }
        }
        debug!(
            len,
            previous = ?previous,
            active = ?self.active_index(),
            "carousel length changed"
        );
    }

    fn step(&mut self, direction: Direction) -> Navigation {
        self.settle();
        match self.len {
            0 => return self.ignore(IgnoreReason::Empty),
            1 => return self.ignore(IgnoreReason::SingleItem),
            _ => {}
        }
        if self.in_flight.is_some() {
            return self.ignore(IgnoreReason::Locked);
        }
        let (len, active) = (self.len, self.active);
        let target = match (direction, self.config.wrap_mode) {
            (Direction::Forward, WrapMode::Circular) => (active + 1) % len,
            (Direction::Backward, WrapMode::Circular) => {
                (active + len - 1) % len
            }
            (Direction::Forward, WrapMode::Clamped) if active + 1 < len => {
                active + 1
            }
            (Direction::Backward, WrapMode::Clamped) if active > 0 => {
                active - 1
            }
            (Direction::None, _) => {
                return self.ignore(IgnoreReason::AlreadyActive);
            }
            _ => return self.ignore(IgnoreReason::AtBoundary),
        };
        self.begin(target, direction)
    }

    fn begin(&mut self, to: usize, direction: Direction) -> Navigation {
        let now = self.clock.now();
        let deadline = now
            .checked_add(self.config.transition)
            .or_else(|| now.checked_add(FAR_FUTURE))
            .unwrap_or(now);
        let transition = Transition {
            from: self.active,
            to,
            direction,
            deadline,
        };
        self.active = to;
        self.in_flight = Some(transition);
        debug!(
            from = transition.from,
            to,
            ?direction,
            lock_ms = self.config.transition.as_millis() as u64,
            "transition accepted"
        );
        self.observers.notify(to);
        Navigation::Moved(transition)
    }

    fn ignore(&self, reason: IgnoreReason) -> Navigation {
        trace!(?reason, active = ?self.active_index(), "navigation ignored");
        Navigation::Ignored(reason)
    }
}
