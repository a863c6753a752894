//! Integration tests for the render pipeline
//!
//! Drives the compositor directly against realistic grids and checks the
//! properties every frame must hold regardless of angle.

use spincube::core::{
    face_contrast, Compositor, DisplayMetrics, FaceId, FrameBuffers, FrameParams, Projector,
    RenderConfig, Rotation, DEPTH_CLEAR,
};
use spincube::engine::AnimationState;
use std::time::Duration;

fn render_at(w: u16, h: u16, params: &FrameParams) -> FrameBuffers {
    let metrics = DisplayMetrics::new(w, h, 2.0);
    let projector = Projector::new(&metrics);
    let compositor = Compositor::new(&RenderConfig::default());
    let mut fb = FrameBuffers::new(w, h);
    compositor.render(params, &projector, &mut fb);
    fb
}

/// Sample a spread of animation times at the default scale.
fn sample_frames() -> Vec<FrameParams> {
    (0..24)
        .map(|i| {
            let mut anim = AnimationState::new(1.0, 1.0);
            anim.set_elapsed(Duration::from_millis(i * 437));
            FrameParams {
                rotation: anim.rotation(),
                cube_scale: anim.cube_scale(),
            }
        })
        .collect()
}

#[test]
fn test_default_frame_80x40() {
    let fb = render_at(80, 40, &FrameParams::default());

    // Cube sits in the middle of the grid.
    let center = fb.get(40, 20).unwrap();
    assert_ne!(center.ch, ' ');
    assert!(fb.depth(40, 20).unwrap() > 0.0);

    // Corners stay empty.
    for (x, y) in [(0, 0), (79, 0), (0, 39), (79, 39)] {
        assert_eq!(fb.get(x, y).unwrap().ch, ' ');
        assert_eq!(fb.depth(x, y).unwrap(), DEPTH_CLEAR);
    }
}

#[test]
fn test_depth_matches_occupancy_every_frame() {
    for params in sample_frames() {
        let fb = render_at(80, 40, &params);
        for (cell, depth) in fb.cells().iter().zip(fb.depths()) {
            let written = *depth > DEPTH_CLEAR;
            assert_eq!(written, *cell != spincube::types::Cell::BLANK);
            if written {
                // Inverse depth of anything in front of the near plane.
                assert!(*depth > 0.0 && *depth < 1.0 / 0.25 + 1e-3);
            }
        }
    }
}

#[test]
fn test_at_most_three_faces_visible() {
    let compositor = Compositor::new(&RenderConfig::default());
    for params in sample_frames() {
        let visible: Vec<FaceId> = compositor.visible_faces(&params.rotation).collect();
        assert!(!visible.is_empty());
        assert!(visible.len() <= 3, "{} faces visible", visible.len());

        // Opposite faces are never both visible.
        for pair in [
            (FaceId::PosX, FaceId::NegX),
            (FaceId::PosY, FaceId::NegY),
            (FaceId::PosZ, FaceId::NegZ),
        ] {
            assert!(!(visible.contains(&pair.0) && visible.contains(&pair.1)));
        }
    }
}

#[test]
fn test_lit_faces_never_darker_than_ambient() {
    let config = RenderConfig::default();
    let compositor = Compositor::new(&config);
    for params in sample_frames() {
        for id in compositor.visible_faces(&params.rotation) {
            let n = compositor.face_normal(id, &params.rotation);
            let shade = compositor.face_light(n);
            assert!(shade >= config.ambient - 1e-6);
            assert!(shade <= 1.0 + 1e-6);
            let contrasted = shade * face_contrast(id.index());
            assert!(contrasted >= 0.8 * config.ambient - 1e-6);
        }
    }
}

#[test]
fn test_rendering_is_deterministic() {
    let params = FrameParams {
        rotation: Rotation::from_angles(0.4, 1.1, 2.3),
        cube_scale: 1.3,
    };
    let a = render_at(120, 48, &params);
    let b = render_at(120, 48, &params);
    assert_eq!(a, b);
}

#[test]
fn test_glyphs_come_from_the_ramp() {
    let ramp = RenderConfig::default().ramp;
    for params in sample_frames() {
        let fb = render_at(80, 40, &params);
        for y in 0..fb.height() {
            for ch in fb.row_text(y).chars() {
                assert!(ramp.contains(ch), "unexpected glyph {ch:?}");
            }
        }
    }
}

#[test]
fn test_wider_cells_squash_the_cube_vertically() {
    let params = FrameParams::default();
    let compositor = Compositor::new(&RenderConfig::default());

    let rows_covered = |aspect: f32| {
        let metrics = DisplayMetrics::new(80, 40, aspect);
        let mut fb = FrameBuffers::new(80, 40);
        compositor.render(&params, &Projector::new(&metrics), &mut fb);
        (0..40)
            .filter(|&y| fb.row_text(y).chars().any(|c| c != ' '))
            .count()
    };

    assert!(rows_covered(2.0) < rows_covered(1.0));
}
