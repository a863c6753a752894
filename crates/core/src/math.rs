//! Vector and rotation algebra.
//!
//! Everything here is a pure function of its inputs. Rotations take a
//! precomputed sine/cosine pair so a whole frame's worth of points can share
//! one set of trigonometry calls.

use std::ops::{Add, Mul};

/// Added under the square root in [`Vec3::normalize`] so a zero vector
/// normalizes to zero instead of NaN.
pub const NORMALIZE_EPSILON: f32 = 1e-9;

/// Real-valued 3D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    #[inline]
    pub fn scale(self, s: f32) -> Vec3 {
        Vec3::new(self.x * s, self.y * s, self.z * s)
    }

    #[inline]
    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn normalize(self) -> Vec3 {
        let m = (self.dot(self) + NORMALIZE_EPSILON).sqrt();
        Vec3::new(self.x / m, self.y / m, self.z / m)
    }

    /// Rotate about the X axis.
    #[inline]
    pub fn rotate_x(self, s: f32, c: f32) -> Vec3 {
        Vec3::new(self.x, c * self.y - s * self.z, s * self.y + c * self.z)
    }

    /// Rotate about the Y axis.
    #[inline]
    pub fn rotate_y(self, s: f32, c: f32) -> Vec3 {
        Vec3::new(c * self.x + s * self.z, self.y, -s * self.x + c * self.z)
    }

    /// Rotate about the Z axis.
    #[inline]
    pub fn rotate_z(self, s: f32, c: f32) -> Vec3 {
        Vec3::new(c * self.x - s * self.y, s * self.x + c * self.y, self.z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::add(self, rhs)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Vec3 {
        self.scale(rhs)
    }
}

/// Sine/cosine of the three per-frame rotation angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub sx: f32,
    pub cx: f32,
    pub sy: f32,
    pub cy: f32,
    pub sz: f32,
    pub cz: f32,
}

impl Rotation {
    pub const IDENTITY: Rotation = Rotation {
        sx: 0.0,
        cx: 1.0,
        sy: 0.0,
        cy: 1.0,
        sz: 0.0,
        cz: 1.0,
    };

    /// Precompute trigonometry for angles (radians) about X, Y and Z.
    pub fn from_angles(ax: f32, ay: f32, az: f32) -> Self {
        let (sx, cx) = ax.sin_cos();
        let (sy, cy) = ay.sin_cos();
        let (sz, cz) = az.sin_cos();
        Self {
            sx,
            cx,
            sy,
            cy,
            sz,
            cz,
        }
    }

    #[inline]
    pub fn apply(&self, v: Vec3) -> Vec3 {
        rotate_all(v, self)
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Compose the three axis rotations: Z first, then X, then Y.
///
/// The order shapes the tumble of the animation; keep it.
#[inline]
pub fn rotate_all(v: Vec3, r: &Rotation) -> Vec3 {
    v.rotate_z(r.sz, r.cz)
        .rotate_x(r.sx, r.cx)
        .rotate_y(r.sy, r.cy)
}
