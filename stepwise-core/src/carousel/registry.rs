//! Registry for managing multiple carousel states keyed by CarouselKey

use std::collections::HashMap;

use tracing::debug;

use super::config::CarouselConfig;
use super::state::Carousel;
use super::types::CarouselKey;
use crate::clock::{Clock, SystemClock};

/// Every carousel on a dashboard, sharing one clock.
#[derive(Debug)]
pub struct CarouselRegistry<C: Clock + Clone = SystemClock> {
    states: HashMap<CarouselKey, Carousel<C>>,
    clock: C,
}

impl Default for CarouselRegistry<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselRegistry<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock + Clone> CarouselRegistry<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            states: HashMap::new(),
            clock,
        }
    }

    /// Get the carousel for `key`, creating it on the visual middle element
    /// when absent.
    ///
    /// Always brings the length up to date even if the carousel already
    /// exists, so a host view that re-mounts with fewer items never renders
    /// an out-of-range index.
    pub fn ensure(
        &mut self,
        key: CarouselKey,
        len: usize,
        config: CarouselConfig,
    ) -> &mut Carousel<C> {
        let clock = &self.clock;
        let carousel = self.states.entry(key.clone()).or_insert_with(|| {
            debug!(key = key.name(), len, "carousel registered");
            Carousel::centered_with_clock(len, config, clock.clone())
        });
        if carousel.len() != len {
            carousel.set_len(len);
        }
        carousel
    }

    pub fn get(&self, key: &CarouselKey) -> Option<&Carousel<C>> {
        self.states.get(key)
    }

    pub fn get_mut(&mut self, key: &CarouselKey) -> Option<&mut Carousel<C>> {
        self.states.get_mut(key)
    }

    /// Drop a carousel when its host view unmounts.
    pub fn remove(&mut self, key: &CarouselKey) -> Option<Carousel<C>> {
        self.states.remove(key)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn is_any_transitioning(&self) -> bool {
        self.states.values().any(|c| c.is_transitioning())
    }

    /// Settle every carousel, returning the keys whose transition completed.
    pub fn settle_all(&mut self) -> Vec<CarouselKey> {
        self.states
            .iter_mut()
            .filter_map(|(key, carousel)| {
                carousel.settle().map(|_| key.clone())
            })
            .collect()
    }
}
