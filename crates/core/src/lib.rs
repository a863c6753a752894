//! Core rendering pipeline - pure, deterministic, and testable
//!
//! This crate turns an animation state into a grid of styled characters. It
//! has **no dependencies** on terminals, clocks or input, so every stage can be
//! unit-tested with plain values.
//!
//! # Module Structure
//!
//! - [`math`]: `Vec3` algebra and the fixed Z→X→Y rotation composition
//! - [`geometry`]: the six unit-cube faces and their `(u, v)` sampling
//! - [`metrics`]: display grid snapshots and glyph aspect derivation
//! - [`projector`]: aspect-corrected perspective projection onto the grid
//! - [`buffers`]: inverse-depth + cell buffers for one frame
//! - [`shading`]: ambient/Lambert brightness, glyph ramp, face palette
//! - [`raster`]: back-face culling and depth-tested point sampling
//! - [`config`]: tunable constants and their validation
//!
//! # Example
//!
//! ```
//! use spincube_core::{Compositor, DisplayMetrics, FrameBuffers, FrameParams, Projector, RenderConfig};
//!
//! let metrics = DisplayMetrics::new(80, 40, 2.0);
//! let projector = Projector::new(&metrics);
//! let compositor = Compositor::new(&RenderConfig::default());
//! let mut fb = FrameBuffers::new(80, 40);
//!
//! let stats = compositor.render(&FrameParams::default(), &projector, &mut fb);
//! assert_eq!(stats.faces_drawn, 1);
//! assert!(fb.occupied() > 0);
//! ```

pub mod buffers;
pub mod config;
pub mod geometry;
pub mod math;
pub mod metrics;
pub mod projector;
pub mod raster;
pub mod shading;

pub use spincube_types as types;

// Re-export commonly used types for convenience
pub use buffers::{FrameBuffers, DEPTH_CLEAR};
pub use config::{ConfigError, RenderConfig};
pub use geometry::{point_on_face, sample_axis, Face, FaceId, FACES};
pub use math::{rotate_all, Rotation, Vec3};
pub use metrics::{cell_aspect_from_pixels, DisplayMetrics};
pub use projector::Projector;
pub use raster::{Compositor, FrameParams, RenderStats};
pub use shading::{face_contrast, lambert_shade, FacePalette, GlyphRamp};
