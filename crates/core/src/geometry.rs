//! Unit cube faces and their parametric sampling.

use crate::math::Vec3;

/// The six cube faces, in face-index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceId {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl FaceId {
    pub const ALL: [FaceId; 6] = [
        FaceId::PosX,
        FaceId::NegX,
        FaceId::PosY,
        FaceId::NegY,
        FaceId::PosZ,
        FaceId::NegZ,
    ];

    pub const fn index(self) -> usize {
        match self {
            FaceId::PosX => 0,
            FaceId::NegX => 1,
            FaceId::PosY => 2,
            FaceId::NegY => 3,
            FaceId::PosZ => 4,
            FaceId::NegZ => 5,
        }
    }

    pub fn face(self) -> &'static Face {
        &FACES[self.index()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FaceId::PosX => "+x",
            FaceId::NegX => "-x",
            FaceId::PosY => "+y",
            FaceId::NegY => "-y",
            FaceId::PosZ => "+z",
            FaceId::NegZ => "-z",
        }
    }
}

/// One planar face of the cube: the fixed axis and which side of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// One-hot unit vector naming the fixed coordinate.
    pub axis: Vec3,
    /// `+1.0` or `-1.0`.
    pub sign: f32,
}

impl Face {
    pub const fn new(axis: Vec3, sign: f32) -> Self {
        Self { axis, sign }
    }

    /// Outward unit normal in model space.
    pub fn normal(&self) -> Vec3 {
        self.axis.normalize().scale(self.sign)
    }

    /// Point on this face for face-local `(u, v)` in `[-1, 1]²`.
    #[inline]
    pub fn point(&self, u: f32, v: f32) -> Vec3 {
        point_on_face(self, u, v)
    }
}

/// Faces indexed by [`FaceId::index`].
pub static FACES: [Face; 6] = [
    Face::new(Vec3::X, 1.0),
    Face::new(Vec3::X, -1.0),
    Face::new(Vec3::Y, 1.0),
    Face::new(Vec3::Y, -1.0),
    Face::new(Vec3::Z, 1.0),
    Face::new(Vec3::Z, -1.0),
];

/// Map face-local `(u, v)` onto the unit cube.
///
/// X faces give `(sign, u, v)`, Y faces `(u, sign, v)`, Z faces `(u, v, sign)`.
#[inline]
pub fn point_on_face(face: &Face, u: f32, v: f32) -> Vec3 {
    if face.axis.x != 0.0 {
        Vec3::new(face.sign, u, v)
    } else if face.axis.y != 0.0 {
        Vec3::new(u, face.sign, v)
    } else {
        Vec3::new(u, v, face.sign)
    }
}

/// Sample positions along one face axis: `-1, -1 + step, ...` while below `1 + step/2`.
///
/// Positions are computed from the sample index so rounding error does not
/// accumulate across the face.
pub fn sample_axis(step: f32) -> impl Iterator<Item = f32> {
    let limit = 1.0 + step * 0.5;
    let count = if step > 0.0 && step.is_finite() {
        (2.0 / step).ceil() as usize + 1
    } else {
        0
    };
    (0..count)
        .map(move |i| -1.0 + (i as f32) * step)
        .take_while(move |&u| u < limit)
}
