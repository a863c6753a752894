//! Render configuration.
//!
//! Every constant of the pipeline lives here with its default. The defaults
//! are design parameters; the binary lets users override them.

use std::time::Duration;

use thiserror::Error;

use spincube_types::{RESIZE_WAIT_MS, TICK_MS};

use crate::math::Vec3;
use crate::projector::FOCAL_SCALE;

/// Glyphs from light to heavy.
pub const DEFAULT_RAMP: &str = " .,:;ox%#@";

/// Brightness floor of every lit face.
pub const DEFAULT_AMBIENT: f32 = 0.25;

/// Light from up-left-forward (normalized at use).
pub const DEFAULT_LIGHT_DIR: Vec3 = Vec3::new(-0.5, 1.0, 1.2);

/// Distance the cube is pushed along +z in front of the camera.
pub const DEFAULT_CAMERA_DISTANCE: f32 = 3.2;

/// Samples at or nearer than this depth are dropped.
pub const DEFAULT_NEAR_PLANE: f32 = 0.25;

/// Spacing of face samples in `(u, v)` parameter space.
pub const DEFAULT_SAMPLE_STEP: f32 = 0.032;

/// Finest accepted sample step; about 4M samples per face.
pub const MIN_SAMPLE_STEP: f32 = 1e-3;

/// Per-face inverse-depth bias that breaks ties along shared edges.
pub const DEFAULT_DEPTH_BIAS: f32 = 1e-5;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("ambient must be within [0, 1], got {0}")]
    Ambient(f32),
    #[error("sample step must be within [0.001, 2], got {0}")]
    SampleStep(f32),
    #[error("glyph ramp must not be empty")]
    EmptyRamp,
    #[error("near plane must be positive, got {0}")]
    NearPlane(f32),
    #[error("camera distance {distance} must be beyond the near plane {near}")]
    CameraDistance { distance: f32, near: f32 },
    #[error("light direction must be non-zero")]
    LightDirection,
    #[error("focal scale must be positive, got {0}")]
    FocalScale(f32),
    #[error("frame interval must be non-zero")]
    FrameInterval,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub ramp: String,
    pub ambient: f32,
    pub light_dir: Vec3,
    pub camera_distance: f32,
    pub near_plane: f32,
    pub sample_step: f32,
    pub depth_bias: f32,
    pub focal_scale: f32,
    pub frame_interval: Duration,
    pub resize_wait: Duration,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ramp: DEFAULT_RAMP.to_string(),
            ambient: DEFAULT_AMBIENT,
            light_dir: DEFAULT_LIGHT_DIR,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
            near_plane: DEFAULT_NEAR_PLANE,
            sample_step: DEFAULT_SAMPLE_STEP,
            depth_bias: DEFAULT_DEPTH_BIAS,
            focal_scale: FOCAL_SCALE,
            frame_interval: Duration::from_millis(TICK_MS),
            resize_wait: Duration::from_millis(RESIZE_WAIT_MS),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.ambient) {
            return Err(ConfigError::Ambient(self.ambient));
        }
        if !(self.sample_step >= MIN_SAMPLE_STEP && self.sample_step <= 2.0) {
            return Err(ConfigError::SampleStep(self.sample_step));
        }
        if self.ramp.chars().next().is_none() {
            return Err(ConfigError::EmptyRamp);
        }
        if !(self.near_plane > 0.0) {
            return Err(ConfigError::NearPlane(self.near_plane));
        }
        if !(self.camera_distance > self.near_plane) {
            return Err(ConfigError::CameraDistance {
                distance: self.camera_distance,
                near: self.near_plane,
            });
        }
        if self.light_dir.dot(self.light_dir) <= f32::EPSILON {
            return Err(ConfigError::LightDirection);
        }
        if !(self.focal_scale > 0.0) {
            return Err(ConfigError::FocalScale(self.focal_scale));
        }
        if self.frame_interval.is_zero() {
            return Err(ConfigError::FrameInterval);
        }
        Ok(())
    }
}
