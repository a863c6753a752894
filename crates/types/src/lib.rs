//! Core types module - shared data structures and constants
//!
//! This module defines the plain data used by every other crate in the
//! workspace: logical keys, terminal cell styling, and the timing/size
//! constants of the frame loop. It has no external dependencies.
//!
//! # Frame Loop Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed frame interval (~60 FPS) |
//! | `RESIZE_WAIT_MS` | 50 | Sleep while the terminal is too small |
//! | `MIN_COLS` | 40 | Narrowest usable terminal |
//! | `MIN_ROWS` | 20 | Shortest usable terminal |
//! | `DEFAULT_CELL_ASPECT` | 2.0 | Glyph height/width when the font is unknown |
//!
//! # Examples
//!
//! ```
//! use spincube_types::{LogicalKey, Cell};
//!
//! let key = LogicalKey::ALL[LogicalKey::ScaleUp.index()];
//! assert_eq!(key, LogicalKey::ScaleUp);
//! assert_eq!(key.as_str(), "scaleUp");
//!
//! assert_eq!(Cell::default().ch, ' ');
//! ```

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u64 = 16;

/// Sleep between size checks while the terminal is below the minimum size
pub const RESIZE_WAIT_MS: u64 = 50;

/// Minimum visible columns before rendering starts
pub const MIN_COLS: u16 = 40;

/// Minimum visible rows before rendering starts
pub const MIN_ROWS: u16 = 20;

/// Height-to-width ratio assumed for one glyph when pixel sizes are unavailable.
///
/// Typical monospace console fonts are about twice as tall as they are wide.
pub const DEFAULT_CELL_ASPECT: f32 = 2.0;

/// Cube scale change per key press
pub const SCALE_STEP: f32 = 0.1;

/// Smallest cube scale reachable from the keyboard
pub const MIN_CUBE_SCALE: f32 = 0.1;

/// Rotation speed multiplier change per key press
pub const SPEED_STEP: f32 = 0.1;

/// Logical keys polled by the animation driver every frame.
///
/// The driver only reacts to press transitions, never to a key being held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    /// Grow the cube by [`SCALE_STEP`]
    ScaleUp,
    /// Shrink the cube by [`SCALE_STEP`] (floored at [`MIN_CUBE_SCALE`])
    ScaleDown,
    /// Slow the rotation by [`SPEED_STEP`] (floored at zero)
    SpeedDown,
    /// Speed the rotation up by [`SPEED_STEP`]
    SpeedUp,
    /// Leave the animation loop
    Exit,
}

impl LogicalKey {
    /// Number of logical keys.
    pub const COUNT: usize = 5;

    /// All keys in polling order.
    pub const ALL: [LogicalKey; Self::COUNT] = [
        LogicalKey::ScaleUp,
        LogicalKey::ScaleDown,
        LogicalKey::SpeedDown,
        LogicalKey::SpeedUp,
        LogicalKey::Exit,
    ];

    /// Stable index into per-key state arrays.
    pub const fn index(self) -> usize {
        match self {
            LogicalKey::ScaleUp => 0,
            LogicalKey::ScaleDown => 1,
            LogicalKey::SpeedDown => 2,
            LogicalKey::SpeedUp => 3,
            LogicalKey::Exit => 4,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalKey::ScaleUp => "scaleUp",
            LogicalKey::ScaleDown => "scaleDown",
            LogicalKey::SpeedDown => "speedDown",
            LogicalKey::SpeedUp => "speedUp",
            LogicalKey::Exit => "exit",
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
///
/// `bold` doubles as the "intensity" flag of a classic console attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const DEFAULT: CellStyle = CellStyle {
        fg: Rgb::new(220, 220, 220),
        bg: Rgb::BLACK,
        bold: false,
        dim: false,
    };

    /// Bright foreground on the black background.
    pub const fn intense(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::BLACK,
            bold: true,
            dim: false,
        }
    }

    pub const fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    /// Background cell every frame starts from.
    pub const BLANK: Cell = Cell {
        ch: ' ',
        style: CellStyle::DEFAULT,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Rectangle of the terminal that a frame is written into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub const fn new(left: u16, top: u16, width: u16, height: u16) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}
