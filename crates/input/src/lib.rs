//! Terminal input module (driver-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::LogicalKey`] and keeps a
//! held-key table that implements [`spincube_engine::InputSource`]. Edge
//! detection (press vs. hold) is left to the driver.

pub mod handler;
pub mod map;

pub use spincube_types as types;

pub use handler::KeyboardState;
pub use map::{map_key_code, map_key_event, should_quit};
