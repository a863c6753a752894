//! Animation driver - the fixed-rate frame loop.
//!
//! The driver owns all per-frame state and talks to the outside world only
//! through the [`ports`] traits, so the whole loop can run against fakes in
//! tests.
//!
//! Each [`Driver::step`]:
//!
//! 1. polls input and latches press edges (scale, speed, exit)
//! 2. re-queries display metrics; pauses while the grid is too small
//! 3. reallocates buffers and the projector on geometry change, else clears
//! 4. derives the rotation from elapsed time and renders
//! 5. hands the buffers to the display sink
//!
//! [`Driver::run`] repeats this with a monotonic clock and a fixed sleep.

pub mod animation;
pub mod driver;
pub mod ports;

pub use spincube_core as core;
pub use spincube_types as types;

pub use animation::{AnimationState, KeyLatch, AXIS_OFFSETS, AXIS_RATES};
pub use driver::{Driver, DriverState, FrameOutcome};
pub use ports::{DisplaySink, InputSource, MetricsSource};
