//! Live terminal geometry.

use crossterm::terminal;
use log::debug;

use crate::core::{cell_aspect_from_pixels, DisplayMetrics};
use spincube_engine::MetricsSource;

/// Grid size assumed when the terminal cannot be queried.
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Reads the terminal's size and glyph shape on every query.
#[derive(Debug, Default)]
pub struct TerminalMetrics {
    warned_fallback: bool,
}

impl TerminalMetrics {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetricsSource for TerminalMetrics {
    fn query(&mut self) -> DisplayMetrics {
        let (cols, rows) = terminal::size().unwrap_or(FALLBACK_SIZE);
        let aspect = match terminal::window_size() {
            Ok(ws) => cell_aspect_from_pixels(ws.width, ws.height, ws.columns, ws.rows),
            Err(err) => {
                if !self.warned_fallback {
                    debug!("window pixel size unavailable ({err}); assuming default glyph aspect");
                    self.warned_fallback = true;
                }
                cell_aspect_from_pixels(0, 0, cols, rows)
            }
        };
        DisplayMetrics::new(cols, rows, aspect)
    }
}
