//! Paginated selection and transition engine for dashboard carousels and
//! multi-step wizards.
//!
//! [`Carousel`] owns the active index of a circular (or clamped) item
//! sequence, the transition lock that serializes double-triggered navigation,
//! and the direction used for animation styling. [`Stepper`] drives linear
//! named-phase flows whose advances may be rejected by validation.
//!
//! ```
//! use stepwise_core::{Carousel, Direction};
//!
//! let mut insights = Carousel::new(4, 2)?;
//! insights.go_to_next();
//! assert_eq!(insights.active_index(), Some(3));
//! assert_eq!(insights.direction(), Direction::Forward);
//!
//! // Locked until the animation window elapses.
//! assert!(!insights.go_to_next().is_moved());
//! # Ok::<(), stepwise_core::CarouselError>(())
//! ```

pub mod carousel;
pub mod clock;
pub mod constants;
#[cfg(feature = "driver")]
pub mod driver;
pub mod easing;
pub mod error;
pub mod stepper;

pub use carousel::{
    Carousel, CarouselConfig, CarouselKey, CarouselRegistry, CarouselSnapshot,
    ChipEmphasis, Direction, IgnoreReason, IndexObserver, Navigation,
    ObserverFn, Peek, PeekItems, Slot, SubscriptionId, Transition, WrapMode,
    slide_offset,
};
pub use clock::{Clock, ManualClock, SystemClock};
#[cfg(feature = "driver")]
pub use clock::TokioClock;
#[cfg(feature = "driver")]
pub use driver::{CarouselHandle, spawn_carousel};
pub use easing::Easing;
#[cfg(feature = "driver")]
pub use error::DriverError;
pub use error::{
    CarouselError, CarouselResult, StepperError, StepperResult,
    ValidationError,
};
pub use stepper::{Stepper, SwapPhase};
