//! Terminal host layer.
//!
//! The display sink and metrics source the driver runs against in a real
//! terminal. Everything here is thin I/O; the rendering itself happens in
//! `spincube-core` and arrives as a finished [`FrameBuffers`](crate::core::FrameBuffers).
//!
//! - [`TerminalRenderer`]: scoped terminal session + diffing frame output
//! - [`TerminalMetrics`]: terminal size and glyph aspect, queried per frame

pub mod metrics;
pub mod renderer;

pub use spincube_core as core;
pub use spincube_types as types;

pub use metrics::{TerminalMetrics, FALLBACK_SIZE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
