//! Depth and cell buffers for one frame.

use spincube_types::Cell;

/// Inverse depth stored in empty cells; any visible sample beats it.
pub const DEPTH_CLEAR: f32 = -1e9;

/// Parallel inverse-depth and character grids, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffers {
    width: u16,
    height: u16,
    depth: Vec<f32>,
    cells: Vec<Cell>,
}

impl FrameBuffers {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            depth: vec![DEPTH_CLEAR; len],
            cells: vec![Cell::BLANK; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize and clear both buffers.
    ///
    /// This preserves the underlying allocations when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.depth.clear();
        self.depth.resize(len, DEPTH_CLEAR);
        self.cells.clear();
        self.cells.resize(len, Cell::BLANK);
    }

    /// Reset every cell to blank and every depth to [`DEPTH_CLEAR`].
    pub fn clear(&mut self) {
        self.depth.fill(DEPTH_CLEAR);
        self.cells.fill(Cell::BLANK);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn depths(&self) -> &[f32] {
        &self.depth
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn depth(&self, x: u16, y: u16) -> Option<f32> {
        self.idx(x, y).map(|i| self.depth[i])
    }

    /// Depth-tested write: stores `cell` only if `invz` is nearer than what is there.
    ///
    /// Returns whether the write happened.
    #[inline]
    pub fn plot(&mut self, x: u16, y: u16, invz: f32, cell: Cell) -> bool {
        let Some(i) = self.idx(x, y) else {
            return false;
        };
        if invz > self.depth[i] {
            self.depth[i] = invz;
            self.cells[i] = cell;
            true
        } else {
            false
        }
    }

    /// Number of cells holding a sample.
    pub fn occupied(&self) -> usize {
        self.depth.iter().filter(|&&d| d != DEPTH_CLEAR).count()
    }

    /// Row `y` as a string of glyphs; handy for debugging and tests.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y).map(|c| c.ch))
            .collect()
    }
}
