//! Point-sampling rasterizer and depth compositor.
//!
//! Each front-facing face is sampled on a fixed `(u, v)` grid; every sample is
//! transformed, projected and depth-tested into [`FrameBuffers`]. There is no
//! triangle setup or edge interpolation: faces are planar and the sample grid
//! is dense relative to the character grid.

use crate::buffers::FrameBuffers;
use crate::config::RenderConfig;
use crate::geometry::{sample_axis, FaceId};
use crate::math::{Rotation, Vec3};
use crate::projector::Projector;
use crate::shading::{face_contrast, lambert_shade, FacePalette, GlyphRamp};

/// Per-frame inputs that vary with the animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    pub rotation: Rotation,
    pub cube_scale: f32,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            rotation: Rotation::IDENTITY,
            cube_scale: 1.0,
        }
    }
}

/// What a render pass produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Faces that survived back-face culling.
    pub faces_drawn: u32,
    /// Samples that won the depth test.
    pub samples_written: u32,
}

/// Lighting and sampling state that is fixed for the lifetime of a config.
#[derive(Debug, Clone)]
pub struct Compositor {
    light: Vec3,
    ambient: f32,
    camera_distance: f32,
    near_plane: f32,
    depth_bias: f32,
    samples: Vec<f32>,
    ramp: GlyphRamp,
    palette: FacePalette,
}

impl Compositor {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            light: config.light_dir.normalize(),
            ambient: config.ambient,
            camera_distance: config.camera_distance,
            near_plane: config.near_plane,
            depth_bias: config.depth_bias,
            samples: sample_axis(config.sample_step).collect(),
            ramp: GlyphRamp::new(&config.ramp),
            palette: FacePalette::default(),
        }
    }

    /// Depth-test key of a sample at camera depth `z` on `face`.
    ///
    /// Higher face indices get a small bias, so on an exact tie the later face wins.
    #[inline]
    pub fn inverse_depth(&self, face: FaceId, z: f32) -> f32 {
        1.0 / z + self.depth_bias * face.index() as f32
    }

    /// Camera-space normal of `face` under `rotation`.
    pub fn face_normal(&self, face: FaceId, rotation: &Rotation) -> Vec3 {
        rotation.apply(face.face().normal())
    }

    /// Camera looks down +z, so a face is visible only if its normal has negative z.
    #[inline]
    pub fn is_front_facing(normal: Vec3) -> bool {
        normal.z < 0.0
    }

    /// Ambient + diffuse brightness of a face before the parity contrast.
    pub fn face_light(&self, normal: Vec3) -> f32 {
        lambert_shade(normal, self.light, self.ambient)
    }

    /// Faces that pass the culling test under `rotation`.
    pub fn visible_faces(&self, rotation: &Rotation) -> impl Iterator<Item = FaceId> + '_ {
        let rotation = *rotation;
        FaceId::ALL
            .into_iter()
            .filter(move |&id| Self::is_front_facing(self.face_normal(id, &rotation)))
    }

    /// Rasterize the cube into `fb`.
    ///
    /// `fb` must already be cleared and sized to the projector's grid.
    pub fn render(
        &self,
        params: &FrameParams,
        projector: &Projector,
        fb: &mut FrameBuffers,
    ) -> RenderStats {
        let mut stats = RenderStats::default();
        let rotation = &params.rotation;
        let offset = Vec3::new(0.0, 0.0, self.camera_distance);

        for id in FaceId::ALL {
            let normal = self.face_normal(id, rotation);
            if !Self::is_front_facing(normal) {
                continue;
            }
            stats.faces_drawn += 1;

            let index = id.index();
            let shade = self.face_light(normal) * face_contrast(index);
            let cell = self.palette.cell(id, self.ramp.glyph(shade));
            let face = id.face();

            for &u in &self.samples {
                for &v in &self.samples {
                    let p = rotation
                        .apply(face.point(u, v).scale(params.cube_scale))
                        .add(offset);
                    if p.z <= self.near_plane {
                        continue;
                    }
                    let Some((col, row)) = projector.to_screen(p) else {
                        continue;
                    };
                    let invz = self.inverse_depth(id, p.z);
                    if fb.plot(col, row, invz, cell) {
                        stats.samples_written += 1;
                    }
                }
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::DisplayMetrics;
    use spincube_types::Cell;

    fn setup(w: u16, h: u16) -> (Compositor, Projector, FrameBuffers) {
        let compositor = Compositor::new(&RenderConfig::default());
        let projector = Projector::new(&DisplayMetrics::new(w, h, 2.0));
        (compositor, projector, FrameBuffers::new(w, h))
    }

    #[test]
    fn identity_rotation_shows_only_the_near_face() {
        let (c, p, mut fb) = setup(80, 40);
        let visible: Vec<FaceId> = c.visible_faces(&Rotation::IDENTITY).collect();
        assert_eq!(visible, vec![FaceId::NegZ]);

        let stats = c.render(&FrameParams::default(), &p, &mut fb);
        assert_eq!(stats.faces_drawn, 1);
        assert!(stats.samples_written > 0);

        let near = FacePalette::default().style(FaceId::NegZ);
        for cell in fb.cells().iter().filter(|c| **c != Cell::BLANK) {
            assert_eq!(cell.style, near);
        }
    }

    #[test]
    fn near_face_covers_grid_center() {
        let (c, p, mut fb) = setup(80, 40);
        c.render(&FrameParams::default(), &p, &mut fb);
        let center = fb.get(40, 20).unwrap();
        assert_ne!(center, Cell::BLANK);
        assert!(fb.depth(40, 20).unwrap() > 0.0);
        // Corners stay background.
        assert_eq!(fb.get(0, 0), Some(Cell::BLANK));
        assert_eq!(fb.get(79, 39), Some(Cell::BLANK));
    }

    #[test]
    fn occupied_cells_and_depth_agree() {
        let (c, p, mut fb) = setup(80, 40);
        let params = FrameParams {
            rotation: Rotation::from_angles(0.0, 1.3, 0.7),
            cube_scale: 1.0,
        };
        c.render(&params, &p, &mut fb);
        for (cell, depth) in fb.cells().iter().zip(fb.depths()) {
            let blank = *cell == Cell::BLANK;
            let empty = *depth == crate::buffers::DEPTH_CLEAR;
            assert_eq!(blank, empty);
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let (c, p, mut a) = setup(80, 40);
        let mut b = FrameBuffers::new(80, 40);
        let params = FrameParams {
            rotation: Rotation::from_angles(0.9, 2.0, 1.8),
            cube_scale: 1.3,
        };
        c.render(&params, &p, &mut a);
        c.render(&params, &p, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn oblique_view_draws_at_most_three_faces() {
        let (c, p, mut fb) = setup(80, 40);
        let params = FrameParams {
            rotation: Rotation::from_angles(0.6, 0.8, 0.3),
            cube_scale: 1.0,
        };
        let stats = c.render(&params, &p, &mut fb);
        assert!(stats.faces_drawn >= 1 && stats.faces_drawn <= 3);
    }

    #[test]
    fn samples_inside_the_near_plane_are_dropped() {
        let (c, p, mut fb) = setup(80, 40);
        // The near face sits at z = 3.2 - 4.0 < 0.25: every sample is clipped.
        let params = FrameParams {
            rotation: Rotation::IDENTITY,
            cube_scale: 4.0,
        };
        let stats = c.render(&params, &p, &mut fb);
        assert_eq!(stats.faces_drawn, 1);
        assert_eq!(stats.samples_written, 0);
        assert_eq!(fb.occupied(), 0);
    }

    #[test]
    fn equal_depth_tie_goes_to_the_higher_face_index() {
        let (c, _, mut fb) = setup(4, 1);
        let palette = FacePalette::default();
        let z = 2.2;

        // Lower index first: the higher index overwrites it.
        fb.plot(0, 0, c.inverse_depth(FaceId::NegX, z), palette.cell(FaceId::NegX, '#'));
        fb.plot(0, 0, c.inverse_depth(FaceId::NegZ, z), palette.cell(FaceId::NegZ, '#'));
        assert_eq!(fb.get(0, 0).unwrap().style, palette.style(FaceId::NegZ));

        // Higher index first: the lower index cannot replace it.
        fb.plot(1, 0, c.inverse_depth(FaceId::PosY, z), palette.cell(FaceId::PosY, '#'));
        fb.plot(1, 0, c.inverse_depth(FaceId::PosX, z), palette.cell(FaceId::PosX, '#'));
        assert_eq!(fb.get(1, 0).unwrap().style, palette.style(FaceId::PosY));

        // A genuinely nearer sample still beats the bias.
        fb.plot(1, 0, c.inverse_depth(FaceId::PosX, z - 0.1), palette.cell(FaceId::PosX, '#'));
        assert_eq!(fb.get(1, 0).unwrap().style, palette.style(FaceId::PosX));
    }

    #[test]
    fn larger_scale_covers_more_cells() {
        let (c, p, mut small) = setup(80, 40);
        let mut large = FrameBuffers::new(80, 40);
        c.render(&FrameParams { cube_scale: 0.5, ..Default::default() }, &p, &mut small);
        c.render(&FrameParams { cube_scale: 1.0, ..Default::default() }, &p, &mut large);
        assert!(large.occupied() > small.occupied());
    }
}
