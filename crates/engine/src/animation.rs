//! Per-frame animation state and key edge detection.

use std::time::Duration;

use arrayvec::ArrayVec;

use spincube_core::Rotation;
use spincube_types::{LogicalKey, MIN_CUBE_SCALE, SCALE_STEP, SPEED_STEP};

use crate::ports::InputSource;

/// Angular rate (rad/s at speed 1.0) about X, Y, Z.
pub const AXIS_RATES: [f32; 3] = [0.9, 0.7, 1.1];

/// Phase offset (rad) about X, Y, Z, so the tumble never starts axis-aligned.
pub const AXIS_OFFSETS: [f32; 3] = [0.0, 1.3, 0.7];

/// User-adjustable animation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    elapsed: Duration,
    cube_scale: f32,
    speed: f32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl AnimationState {
    /// Start with the given scale and speed, clamped to their valid ranges.
    pub fn new(cube_scale: f32, speed: f32) -> Self {
        Self {
            elapsed: Duration::ZERO,
            cube_scale: clamp_scale(cube_scale),
            speed: clamp_speed(speed),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn cube_scale(&self) -> f32 {
        self.cube_scale
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    /// Apply one key press. Returns `true` if it asks the loop to exit.
    pub fn apply(&mut self, key: LogicalKey) -> bool {
        match key {
            LogicalKey::ScaleUp => self.cube_scale = clamp_scale(self.cube_scale + SCALE_STEP),
            LogicalKey::ScaleDown => self.cube_scale = clamp_scale(self.cube_scale - SCALE_STEP),
            LogicalKey::SpeedDown => self.speed = clamp_speed(self.speed - SPEED_STEP),
            LogicalKey::SpeedUp => self.speed = clamp_speed(self.speed + SPEED_STEP),
            LogicalKey::Exit => return true,
        }
        false
    }

    /// Rotation angles `(ax, ay, az)` at the current elapsed time.
    pub fn angles(&self) -> (f32, f32, f32) {
        let t = self.elapsed.as_secs_f32() * self.speed;
        (
            t * AXIS_RATES[0] + AXIS_OFFSETS[0],
            t * AXIS_RATES[1] + AXIS_OFFSETS[1],
            t * AXIS_RATES[2] + AXIS_OFFSETS[2],
        )
    }

    pub fn rotation(&self) -> Rotation {
        let (ax, ay, az) = self.angles();
        Rotation::from_angles(ax, ay, az)
    }
}

fn clamp_scale(scale: f32) -> f32 {
    if scale.is_nan() {
        return MIN_CUBE_SCALE;
    }
    scale.max(MIN_CUBE_SCALE)
}

fn clamp_speed(speed: f32) -> f32 {
    if speed.is_nan() {
        return 0.0;
    }
    speed.max(0.0)
}

/// Turns held-key state into press events.
///
/// A key fires once when it goes from released to pressed; holding it does
/// nothing further until it is released and pressed again.
#[derive(Debug, Clone, Default)]
pub struct KeyLatch {
    prev: [bool; LogicalKey::COUNT],
}

impl KeyLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample every logical key and return the ones that were just pressed.
    pub fn update<I: InputSource + ?Sized>(
        &mut self,
        input: &I,
    ) -> ArrayVec<LogicalKey, { LogicalKey::COUNT }> {
        let mut pressed = ArrayVec::new();
        for key in LogicalKey::ALL {
            let now = input.is_pressed(key);
            let was = std::mem::replace(&mut self.prev[key.index()], now);
            if now && !was {
                pressed.push(key);
            }
        }
        pressed
    }
}
