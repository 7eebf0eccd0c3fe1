//! Carousel controller
//!
//! A bounded, circularly (or linearly) navigable sequence with one active
//! item. The controller is split the way its consumers use it: state and
//! navigation, observers, static configuration, peek/presentation helpers for
//! renderers, and a registry for dashboards hosting several carousels.

pub mod config;
pub mod observer;
pub mod peek;
pub mod presentation;
pub mod registry;
pub mod state;
pub mod types;

pub use config::CarouselConfig;
pub use observer::{IndexObserver, ObserverFn, SubscriptionId};
pub use peek::{Peek, PeekItems};
pub use presentation::{ChipEmphasis, Slot, slide_offset};
pub use registry::CarouselRegistry;
pub use state::{Carousel, CarouselSnapshot};
pub use types::*;
