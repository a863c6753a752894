//! TerminalRenderer: flushes frame buffers to a real terminal.
//!
//! The renderer owns the terminal session. Creating it switches to raw mode,
//! the alternate screen and a hidden cursor; dropping it restores all of that
//! on every exit path. Frames after the first are sent as changed runs only.

use std::io::{self, Write};

use anyhow::Result;
use log::debug;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::core::FrameBuffers;
use crate::types::{Cell, CellStyle, Region, Rgb};
use spincube_engine::DisplaySink;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<(Region, Vec<Cell>)>,
    buf: Vec<u8>,
    active: bool,
    keyboard_enhanced: bool,
}

impl TerminalRenderer {
    /// Take over the terminal.
    ///
    /// If any setup step fails the terminal is restored before returning the error.
    pub fn enter() -> Result<Self> {
        let mut this = Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            active: false,
            keyboard_enhanced: false,
        };
        if let Err(err) = this.setup() {
            let _ = this.exit();
            return Err(err);
        }
        Ok(this)
    }

    fn setup(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        self.keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
        debug!("keyboard enhancement supported: {}", self.keyboard_enhanced);

        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        if self.keyboard_enhanced {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        self.buf.clear();
        if self.keyboard_enhanced {
            self.buf.queue(PopKeyboardEnhancementFlags)?;
        }
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        let flushed = self.flush_buf();
        terminal::disable_raw_mode()?;
        flushed
    }

    /// Draw a frame, diffing against the previously presented one.
    pub fn draw(&mut self, region: Region, frame: &FrameBuffers) -> Result<()> {
        self.buf.clear();
        let can_diff = matches!(
            &self.last,
            Some((prev_region, prev)) if *prev_region == region && prev.len() == frame.cells().len()
        );
        match self.last.as_mut() {
            Some((_, prev)) if can_diff => {
                encode_diff_into(region, prev, frame, &mut self.buf)?;
                prev.copy_from_slice(frame.cells());
            }
            _ => {
                encode_full_into(region, frame, &mut self.buf)?;
                self.last = Some((region, frame.cells().to_vec()));
            }
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl DisplaySink for TerminalRenderer {
    fn present(&mut self, region: Region, frame: &FrameBuffers) -> Result<()> {
        self.draw(region, frame)
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Encode a full-frame redraw of `frame` at `region` into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(region: Region, frame: &FrameBuffers, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..frame.height() {
        out.queue(cursor::MoveTo(region.left, region.top + y))?;
        for x in 0..frame.width() {
            let cell = frame.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the runs of cells that changed since `prev`.
///
/// `prev` must be a row-major grid of the same size as `next`.
pub fn encode_diff_into(
    region: Region,
    prev: &[Cell],
    next: &FrameBuffers,
    out: &mut Vec<u8>,
) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(region.left + x, region.top + y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &[Cell],
    next: &FrameBuffers,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let w = next.width();
    let h = next.height();

    if prev.len() != next.cells().len() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..h {
            f(0, y, w)?;
        }
        return Ok(());
    }

    let cells = next.cells();
    for y in 0..h {
        let row = (y as usize) * (w as usize);
        let mut x = 0;
        while x < w {
            if prev[row + x as usize] == cells[row + x as usize] {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev[row + x as usize] != cells[row + x as usize] {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
