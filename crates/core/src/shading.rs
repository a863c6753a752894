//! Brightness and color: ambient + Lambert lighting, glyph ramp, face palette.

use spincube_types::{Cell, CellStyle, Rgb};

use crate::geometry::FaceId;
use crate::math::Vec3;

/// `clamp(ambient + (1 - ambient) * max(0, n·l), 0, 1)`.
#[inline]
pub fn lambert_shade(normal: Vec3, light: Vec3, ambient: f32) -> f32 {
    let lambert = normal.dot(light).max(0.0);
    (ambient + (1.0 - ambient) * lambert).clamp(0.0, 1.0)
}

/// Brightness multiplier alternating by face parity; even faces are dimmer.
#[inline]
pub fn face_contrast(face_index: usize) -> f32 {
    0.8 + 0.4 * (face_index % 2) as f32
}

/// Ordered glyphs from light to heavy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
}

impl GlyphRamp {
    pub fn new(chars: &str) -> Self {
        Self {
            glyphs: chars.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Nearest ramp glyph for `shade`, clamped to the ramp's ends.
    pub fn glyph(&self, shade: f32) -> char {
        let Some(last) = self.glyphs.len().checked_sub(1) else {
            return ' ';
        };
        let idx = (shade * last as f32).round();
        let idx = if idx.is_nan() { 0.0 } else { idx.clamp(0.0, last as f32) };
        self.glyphs[idx as usize]
    }
}

/// Classic bright console colors, one per face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacePalette {
    styles: [CellStyle; 6],
}

impl FacePalette {
    pub const fn new(styles: [CellStyle; 6]) -> Self {
        Self { styles }
    }

    pub fn style(&self, face: FaceId) -> CellStyle {
        self.styles[face.index()]
    }

    pub fn cell(&self, face: FaceId, ch: char) -> Cell {
        self.style(face).into_cell(ch)
    }
}

impl Default for FacePalette {
    fn default() -> Self {
        // +x red, -x green, +y blue, -y yellow, +z magenta, -z cyan
        Self::new([
            CellStyle::intense(Rgb::new(255, 85, 85)),
            CellStyle::intense(Rgb::new(85, 255, 85)),
            CellStyle::intense(Rgb::new(85, 85, 255)),
            CellStyle::intense(Rgb::new(255, 255, 85)),
            CellStyle::intense(Rgb::new(255, 85, 255)),
            CellStyle::intense(Rgb::new(85, 255, 255)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shade_has_an_ambient_floor() {
        let light = Vec3::new(0.0, 0.0, -1.0);
        assert_eq!(lambert_shade(Vec3::new(0.0, 0.0, 1.0), light, 0.25), 0.25);
        assert_eq!(lambert_shade(Vec3::new(0.0, 0.0, -1.0), light, 0.25), 1.0);
        let half = lambert_shade(Vec3::new(0.0, 0.6, -0.8), light, 0.25);
        assert!((half - (0.25 + 0.75 * 0.8)).abs() < 1e-6);
    }

    #[test]
    fn contrast_alternates_by_parity() {
        assert_eq!(face_contrast(0), 0.8);
        assert!((face_contrast(1) - 1.2).abs() < 1e-6);
        assert_eq!(face_contrast(2), face_contrast(0));
        assert!(face_contrast(4) < face_contrast(5));
    }

    #[test]
    fn ramp_rounds_to_nearest_and_clamps() {
        let ramp = GlyphRamp::new(" .,:;ox%#@");
        assert_eq!(ramp.glyph(0.0), ' ');
        assert_eq!(ramp.glyph(1.0), '@');
        assert_eq!(ramp.glyph(1.2), '@');
        assert_eq!(ramp.glyph(-0.3), ' ');
        // 0.25 * 9 = 2.25 -> 2
        assert_eq!(ramp.glyph(0.25), ',');
        // 0.3 * 9 = 2.7 -> 3
        assert_eq!(ramp.glyph(0.3), ':');
        assert_eq!(ramp.glyph(f32::NAN), ' ');
    }

    #[test]
    fn ramp_handles_unicode_and_empty() {
        let ramp = GlyphRamp::new("░▒▓█");
        assert_eq!(ramp.len(), 4);
        assert_eq!(ramp.glyph(1.0), '█');
        assert_eq!(GlyphRamp::new("").glyph(0.7), ' ');
        assert!(GlyphRamp::new("").is_empty());
    }

    #[test]
    fn palette_has_six_distinct_intense_colors() {
        let palette = FacePalette::default();
        for (i, a) in FaceId::ALL.iter().enumerate() {
            assert!(palette.style(*a).bold);
            for b in FaceId::ALL.iter().skip(i + 1) {
                assert_ne!(palette.style(*a).fg, palette.style(*b).fg);
            }
        }
    }
}
