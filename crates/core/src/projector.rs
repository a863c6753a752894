//! Perspective projection from camera space onto the character grid.
//!
//! The camera sits at the origin looking down +z. Because character cells are
//! taller than they are wide, the vertical focal length is the horizontal one
//! divided by the cell aspect; without that a sphere would render as an
//! ellipse.

use crate::math::Vec3;
use crate::metrics::DisplayMetrics;

/// Horizontal focal length as a fraction of the grid width.
pub const FOCAL_SCALE: f32 = 0.60;

/// Points at or behind this depth are never projected.
pub const MIN_PROJECT_Z: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    width: u16,
    height: u16,
    focal_x: f32,
    focal_y: f32,
}

impl Projector {
    pub fn new(metrics: &DisplayMetrics) -> Self {
        Self::with_focal_scale(metrics, FOCAL_SCALE)
    }

    pub fn with_focal_scale(metrics: &DisplayMetrics, focal_scale: f32) -> Self {
        let width = metrics.visible_width;
        let height = metrics.visible_height;
        let focal_x = width as f32 * focal_scale;
        let focal_y = focal_x / metrics.cell_aspect;
        Self {
            width,
            height,
            focal_x,
            focal_y,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn focal_x(&self) -> f32 {
        self.focal_x
    }

    pub fn focal_y(&self) -> f32 {
        self.focal_y
    }

    /// Project a camera-space point to `(col, row)`.
    ///
    /// Returns `None` for points at or behind [`MIN_PROJECT_Z`] and for points
    /// that land outside the grid. Rows grow downward, so +y maps to smaller rows.
    #[inline]
    pub fn to_screen(&self, p: Vec3) -> Option<(u16, u16)> {
        if p.z <= MIN_PROJECT_Z {
            return None;
        }
        let invz = 1.0 / p.z;
        let x = p.x * invz;
        let y = p.y * invz;
        let col = (x * self.focal_x + self.width as f32 * 0.5).floor();
        let row = (-y * self.focal_y + self.height as f32 * 0.5).floor();
        if col < 0.0 || row < 0.0 || col >= self.width as f32 || row >= self.height as f32 {
            return None;
        }
        Some((col as u16, row as u16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projector(w: u16, h: u16, aspect: f32) -> Projector {
        Projector::new(&DisplayMetrics::new(w, h, aspect))
    }

    #[test]
    fn focal_lengths_follow_width_and_aspect() {
        let p = projector(100, 40, 2.0);
        assert!((p.focal_x() - 60.0).abs() < 1e-4);
        assert!((p.focal_y() - 30.0).abs() < 1e-4);
    }

    #[test]
    fn on_axis_point_hits_grid_center() {
        let p = projector(80, 40, 2.0);
        assert_eq!(p.to_screen(Vec3::new(0.0, 0.0, 3.2)), Some((40, 20)));
        assert_eq!(p.to_screen(Vec3::new(0.0, 0.0, 100.0)), Some((40, 20)));
    }

    #[test]
    fn up_is_toward_smaller_rows() {
        let p = projector(80, 40, 2.0);
        let (_, row_up) = p.to_screen(Vec3::new(0.0, 0.5, 3.0)).unwrap();
        let (_, row_down) = p.to_screen(Vec3::new(0.0, -0.5, 3.0)).unwrap();
        assert!(row_up < 20);
        assert!(row_down >= 20);
        let (col_right, _) = p.to_screen(Vec3::new(0.5, 0.0, 3.0)).unwrap();
        assert!(col_right > 40);
    }

    #[test]
    fn rejects_points_behind_camera() {
        let p = projector(80, 40, 2.0);
        assert_eq!(p.to_screen(Vec3::new(0.0, 0.0, 0.0)), None);
        assert_eq!(p.to_screen(Vec3::new(0.0, 0.0, 0.001)), None);
        assert_eq!(p.to_screen(Vec3::new(0.0, 0.0, -2.0)), None);
    }

    #[test]
    fn rejects_points_off_grid() {
        let p = projector(80, 40, 2.0);
        assert_eq!(p.to_screen(Vec3::new(10.0, 0.0, 1.0)), None);
        assert_eq!(p.to_screen(Vec3::new(-10.0, 0.0, 1.0)), None);
        assert_eq!(p.to_screen(Vec3::new(0.0, 10.0, 1.0)), None);
        assert_eq!(p.to_screen(Vec3::new(0.0, -10.0, 1.0)), None);
    }

    #[test]
    fn slightly_left_of_the_grid_is_not_column_zero() {
        let p = projector(80, 40, 2.0);
        // x * focal_x + 40 = -0.5
        let x = -40.5 / p.focal_x();
        assert_eq!(p.to_screen(Vec3::new(x, 0.0, 1.0)), None);
    }

    #[test]
    fn aspect_ratio_only_changes_vertical_focal() {
        let a = projector(80, 40, 2.0);
        let b = projector(80, 40, 4.0);
        assert_eq!(a.focal_x(), b.focal_x());
        assert_eq!(a.focal_y() / a.focal_x(), 1.0 / 2.0);
        assert_eq!(b.focal_y() / b.focal_x(), 1.0 / 4.0);
    }
}
