//! Terminal output - diffed flushing of frame buffers via crossterm.
//!
//! Keeps the previously flushed buffer and only emits cells that changed,
//! with minimal color/attribute state churn. A size change (or the first
//! frame) forces a full redraw.

use std::io::{self, Write};

use crossterm::style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};

use crate::error::Result;
use crate::types::{Attr, Cell, Rgba};

use super::buffer::FrameBuffer;

/// Current terminal size in cells, falling back to 80×24 when detection
/// fails (no tty).
pub fn terminal_size() -> (u16, u16) {
    terminal::size().unwrap_or((80, 24))
}

/// Map an optional color to crossterm, `None` meaning terminal default.
fn to_color(color: Option<Rgba>) -> Color {
    match color {
        Some(Rgba { r, g, b }) => Color::Rgb { r, g, b },
        None => Color::Reset,
    }
}

/// The crossterm attributes for an attr bitfield, in application order.
fn to_attributes(attrs: Attr) -> Vec<Attribute> {
    let mut result = Vec::new();
    if attrs.contains(Attr::BOLD) {
        result.push(Attribute::Bold);
    }
    if attrs.contains(Attr::DIM) {
        result.push(Attribute::Dim);
    }
    if attrs.contains(Attr::ITALIC) {
        result.push(Attribute::Italic);
    }
    if attrs.contains(Attr::UNDERLINE) {
        result.push(Attribute::Underlined);
    }
    if attrs.contains(Attr::INVERSE) {
        result.push(Attribute::Reverse);
    }
    if attrs.contains(Attr::STRIKETHROUGH) {
        result.push(Attribute::CrossedOut);
    }
    result
}

/// Diffed terminal renderer.
pub struct TermRenderer {
    out: io::Stdout,
    previous: Option<FrameBuffer>,
}

impl TermRenderer {
    pub fn new() -> Self {
        Self { out: io::stdout(), previous: None }
    }

    /// Enter the alternate screen and raw mode, hiding the cursor.
    pub fn enter_fullscreen(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.out, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(())
    }

    /// Restore the terminal.
    pub fn leave_fullscreen(&mut self) -> Result<()> {
        execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Flush a frame, emitting only cells that changed since the last
    /// flush. Returns whether anything was written.
    pub fn render(&mut self, buffer: &FrameBuffer) -> Result<bool> {
        let full_redraw = !matches!(
            &self.previous,
            Some(prev) if prev.width() == buffer.width() && prev.height() == buffer.height()
        );

        let mut changed = false;
        let mut current_fg: Option<Color> = None;
        let mut current_bg: Option<Color> = None;
        let mut current_attrs = Attr::NONE;

        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                let cell = *buffer.get(x, y).expect("cell in bounds");

                if !full_redraw {
                    let prev_cell = self.previous.as_ref().and_then(|p| p.get(x, y)).copied();
                    if prev_cell == Some(cell) {
                        continue;
                    }
                }

                changed = true;
                queue!(self.out, cursor::MoveTo(x, y))?;
                self.queue_cell(&cell, &mut current_fg, &mut current_bg, &mut current_attrs)?;
            }
        }

        if changed {
            queue!(self.out, SetAttribute(Attribute::Reset))?;
            self.out.flush()?;
        }

        self.previous = Some(buffer.clone());
        Ok(changed)
    }

    fn queue_cell(
        &mut self,
        cell: &Cell,
        current_fg: &mut Option<Color>,
        current_bg: &mut Option<Color>,
        current_attrs: &mut Attr,
    ) -> Result<()> {
        if cell.attrs != *current_attrs {
            // Attribute changes reset everything, so colors must be
            // re-established afterwards.
            queue!(self.out, SetAttribute(Attribute::Reset))?;
            for attr in to_attributes(cell.attrs) {
                queue!(self.out, SetAttribute(attr))?;
            }
            *current_attrs = cell.attrs;
            *current_fg = None;
            *current_bg = None;
        }

        let fg = to_color(cell.fg);
        if *current_fg != Some(fg) {
            queue!(self.out, SetForegroundColor(fg))?;
            *current_fg = Some(fg);
        }

        let bg = to_color(cell.bg);
        if *current_bg != Some(bg) {
            queue!(self.out, SetBackgroundColor(bg))?;
            *current_bg = Some(bg);
        }

        queue!(self.out, Print(cell.ch))?;
        Ok(())
    }
}

impl Default for TermRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_color() {
        assert_eq!(to_color(None), Color::Reset);
        assert_eq!(
            to_color(Some(Rgba::rgb(10, 20, 30))),
            Color::Rgb { r: 10, g: 20, b: 30 }
        );
    }

    #[test]
    fn test_to_attributes() {
        assert!(to_attributes(Attr::NONE).is_empty());

        let attrs = to_attributes(Attr::BOLD | Attr::UNDERLINE);
        assert_eq!(attrs, vec![Attribute::Bold, Attribute::Underlined]);
    }
}
