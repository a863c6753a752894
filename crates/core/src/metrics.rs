//! Display geometry snapshots.
//!
//! A [`DisplayMetrics`] value describes the visible character grid and the
//! physical shape of one glyph cell. It is re-derived every frame and replaced
//! wholesale when anything changes.

use spincube_types::{Region, DEFAULT_CELL_ASPECT, MIN_COLS, MIN_ROWS};

/// Cell aspect changes smaller than this are treated as "no change".
pub const ASPECT_EPSILON: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    pub visible_width: u16,
    pub visible_height: u16,
    pub buffer_width: u16,
    pub origin_col: u16,
    pub origin_row: u16,
    /// Physical height / width of one character cell.
    pub cell_aspect: f32,
}

impl DisplayMetrics {
    /// Metrics for a grid anchored at the top-left corner.
    pub fn new(width: u16, height: u16, cell_aspect: f32) -> Self {
        Self {
            visible_width: width,
            visible_height: height,
            buffer_width: width,
            origin_col: 0,
            origin_row: 0,
            cell_aspect: sanitize_aspect(cell_aspect),
        }
    }

    /// True when the grid size changed or the aspect moved beyond [`ASPECT_EPSILON`].
    pub fn differs_from(&self, other: &DisplayMetrics) -> bool {
        self.visible_width != other.visible_width
            || self.visible_height != other.visible_height
            || (self.cell_aspect - other.cell_aspect).abs() > ASPECT_EPSILON
    }

    /// Whether the grid meets the minimum usable size.
    pub fn is_usable(&self) -> bool {
        self.visible_width >= MIN_COLS && self.visible_height >= MIN_ROWS
    }

    pub fn region(&self) -> Region {
        Region::new(
            self.origin_col,
            self.origin_row,
            self.visible_width,
            self.visible_height,
        )
    }
}

/// Derive the glyph height/width ratio from the window's pixel and cell sizes.
///
/// Falls back to [`DEFAULT_CELL_ASPECT`] when the pixel size is unknown
/// (many terminals report zero) or the result is degenerate.
pub fn cell_aspect_from_pixels(px_width: u16, px_height: u16, cols: u16, rows: u16) -> f32 {
    if px_width == 0 || px_height == 0 || cols == 0 || rows == 0 {
        return DEFAULT_CELL_ASPECT;
    }
    let cell_w = px_width as f32 / cols as f32;
    let cell_h = px_height as f32 / rows as f32;
    sanitize_aspect(cell_h / cell_w)
}

fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        DEFAULT_CELL_ASPECT
    }
}
