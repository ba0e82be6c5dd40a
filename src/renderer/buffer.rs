//! FrameBuffer - the cell grid a view hierarchy is painted into.
//!
//! A 2D grid of [`Cell`]s with flat row-major storage. Painting walks the
//! view hierarchy depth-first, resolving the parent-relative frames the
//! layout pass assigned into absolute buffer coordinates. Scroll-enabled
//! containers translate their children by the current scroll offset and
//! clip them to the container's rect; plain views do not clip.

use crate::layout::{char_width, truncate_text, wrap_text};
use crate::types::{Attr, Cell, Rect, Rgba, TextWrap};
use crate::view::View;

/// A 2D buffer of terminal cells.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self { width, height, cells: vec![Cell::default(); size] }
    }

    /// Buffer width.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height.
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer bounds.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Reset every cell to the default.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Get the cell at (x, y), if in bounds.
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Paint a view hierarchy into the buffer.
    ///
    /// The root view's frame is taken relative to the buffer origin.
    pub fn paint(&mut self, view: &View) {
        let bounds = self.bounds();
        self.paint_view(view, 0, 0, bounds);
    }

    fn paint_view(&mut self, view: &View, origin_x: i32, origin_y: i32, clip: Rect) {
        let frame = view.frame();
        let abs_x = origin_x + frame.x as i32;
        let abs_y = origin_y + frame.y as i32;
        let fg = view.foreground();
        let attrs = view.attrs();

        // Background fill
        if let Some(bg) = view.background() {
            for row in 0..frame.height as i32 {
                for col in 0..frame.width as i32 {
                    self.put(abs_x + col, abs_y + row, &clip, ' ', None, Some(bg), Attr::NONE);
                }
            }
        }

        // Border
        if view.border().is_visible() && frame.width >= 2 && frame.height >= 2 {
            self.draw_border(view, abs_x, abs_y, &clip);
        }

        // Text content, inset by border + padding
        if let Some(text) = view.text() {
            let inset = view.content_inset();
            let interior_width = frame.width.saturating_sub(inset.horizontal());
            let interior_height = frame.height.saturating_sub(inset.vertical());

            if interior_width > 0 && interior_height > 0 {
                let lines: Vec<String> = match view.text_wrap() {
                    TextWrap::Wrap => wrap_text(&text, interior_width),
                    TextWrap::NoWrap => text.split('\n').map(str::to_string).collect(),
                    TextWrap::Truncate => text
                        .split('\n')
                        .map(|line| truncate_text(line, interior_width))
                        .collect(),
                };

                let text_x = abs_x + inset.left as i32;
                let text_y = abs_y + inset.top as i32;
                for (row, line) in lines.iter().take(interior_height as usize).enumerate() {
                    self.draw_line(text_x, text_y + row as i32, &clip, line, fg, attrs);
                }
            }
        }

        // Children: scroll-enabled containers translate by the scroll
        // offset and clip to their own rect.
        let (child_clip, scroll_x, scroll_y) = if view.scroll_enabled() {
            let view_rect = clamp_rect(abs_x, abs_y, frame.width, frame.height);
            let child_clip = view_rect.and_then(|r| clip.intersect(&r)).unwrap_or_default();
            let (sx, sy) = view.scroll_offset();
            (child_clip, sx as i32, sy as i32)
        } else {
            (clip, 0, 0)
        };

        for child in view.subviews() {
            self.paint_view(&child, abs_x - scroll_x, abs_y - scroll_y, child_clip);
        }
    }

    fn draw_border(&mut self, view: &View, abs_x: i32, abs_y: i32, clip: &Rect) {
        let frame = view.frame();
        let fg = view.foreground();
        let attrs = view.attrs();
        let (h, v, tl, tr, br, bl) = view.border().chars();

        let right = abs_x + frame.width as i32 - 1;
        let bottom = abs_y + frame.height as i32 - 1;

        self.put(abs_x, abs_y, clip, tl, fg, None, attrs);
        self.put(right, abs_y, clip, tr, fg, None, attrs);
        self.put(right, bottom, clip, br, fg, None, attrs);
        self.put(abs_x, bottom, clip, bl, fg, None, attrs);

        for col in (abs_x + 1)..right {
            self.put(col, abs_y, clip, h, fg, None, attrs);
            self.put(col, bottom, clip, h, fg, None, attrs);
        }
        for row in (abs_y + 1)..bottom {
            self.put(abs_x, row, clip, v, fg, None, attrs);
            self.put(right, row, clip, v, fg, None, attrs);
        }
    }

    fn draw_line(
        &mut self,
        x: i32,
        y: i32,
        clip: &Rect,
        line: &str,
        fg: Option<Rgba>,
        attrs: Attr,
    ) {
        let mut col = x;
        for ch in line.chars() {
            let width = char_width(ch);
            if width == 0 {
                continue;
            }
            self.put(col, y, clip, ch, fg, None, attrs);
            // Wide characters own their continuation cell.
            for extra in 1..width as i32 {
                self.put(col + extra, y, clip, ' ', fg, None, attrs);
            }
            col += width as i32;
        }
    }

    /// Write one cell, clipped. `None` colors leave the existing value in
    /// place so text inherits the background painted beneath it.
    fn put(
        &mut self,
        x: i32,
        y: i32,
        clip: &Rect,
        ch: char,
        fg: Option<Rgba>,
        bg: Option<Rgba>,
        attrs: Attr,
    ) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u16, y as u16);
        if !clip.contains(x, y) || x >= self.width || y >= self.height {
            return;
        }

        let index = self.index(x, y);
        let cell = &mut self.cells[index];
        cell.ch = ch;
        if fg.is_some() {
            cell.fg = fg;
        }
        if bg.is_some() {
            cell.bg = bg;
        }
        cell.attrs = attrs;
    }
}

/// A non-negative rect from possibly negative i32 coordinates, trimming
/// the parts left of / above the origin.
fn clamp_rect(x: i32, y: i32, width: u16, height: u16) -> Option<Rect> {
    let trim_x = (-x).max(0) as u16;
    let trim_y = (-y).max(0) as u16;
    if trim_x >= width || trim_y >= height {
        return None;
    }
    Some(Rect::new(
        x.max(0) as u16,
        y.max(0) as u16,
        width - trim_x,
        height - trim_y,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BorderStyle, Edges, Size};

    fn framed(view: View, frame: Rect) -> View {
        view.set_frame(frame);
        view
    }

    #[test]
    fn test_paint_background_fill() {
        let mut buffer = FrameBuffer::new(10, 4);
        let view = framed(View::plain().with_background(Rgba::BLUE), Rect::new(1, 1, 3, 2));

        buffer.paint(&view);

        assert_eq!(buffer.get(1, 1).unwrap().bg, Some(Rgba::BLUE));
        assert_eq!(buffer.get(3, 2).unwrap().bg, Some(Rgba::BLUE));
        assert_eq!(buffer.get(0, 0).unwrap().bg, None);
        assert_eq!(buffer.get(4, 1).unwrap().bg, None);
    }

    #[test]
    fn test_paint_border_glyphs() {
        let mut buffer = FrameBuffer::new(10, 5);
        let view = framed(View::plain().with_border(BorderStyle::Single), Rect::new(0, 0, 4, 3));

        buffer.paint(&view);

        assert_eq!(buffer.get(0, 0).unwrap().ch, '┌');
        assert_eq!(buffer.get(3, 0).unwrap().ch, '┐');
        assert_eq!(buffer.get(0, 2).unwrap().ch, '└');
        assert_eq!(buffer.get(3, 2).unwrap().ch, '┘');
        assert_eq!(buffer.get(1, 0).unwrap().ch, '─');
        assert_eq!(buffer.get(0, 1).unwrap().ch, '│');
    }

    #[test]
    fn test_paint_text_at_content_inset() {
        let mut buffer = FrameBuffer::new(10, 4);
        let view = framed(View::plain().with_text("hi"), Rect::new(0, 0, 6, 3));
        view.set_content_inset(Edges::uniform(1));

        buffer.paint(&view);

        assert_eq!(buffer.get(1, 1).unwrap().ch, 'h');
        assert_eq!(buffer.get(2, 1).unwrap().ch, 'i');
    }

    #[test]
    fn test_paint_child_relative_to_parent() {
        let mut buffer = FrameBuffer::new(10, 6);
        let parent = framed(View::plain(), Rect::new(2, 1, 6, 4));
        let child = framed(View::plain().with_background(Rgba::RED), Rect::new(1, 1, 2, 1));
        parent.add_subview(&child);

        buffer.paint(&parent);

        assert_eq!(buffer.get(3, 2).unwrap().bg, Some(Rgba::RED));
        assert_eq!(buffer.get(4, 2).unwrap().bg, Some(Rgba::RED));
    }

    #[test]
    fn test_scrolled_children_are_translated_and_clipped() {
        let mut buffer = FrameBuffer::new(10, 4);

        let container = framed(View::scrollable(), Rect::new(0, 0, 10, 2));
        container.set_content_size(Size::new(10, 4));
        container.set_scroll_enabled(true);
        container.set_scroll_offset_raw(0, 1);

        let top = framed(View::plain().with_background(Rgba::RED), Rect::new(0, 0, 10, 1));
        let middle = framed(View::plain().with_background(Rgba::GREEN), Rect::new(0, 1, 10, 1));
        let below = framed(View::plain().with_background(Rgba::BLUE), Rect::new(0, 2, 10, 1));
        container.add_subview(&top);
        container.add_subview(&middle);
        container.add_subview(&below);

        buffer.paint(&container);

        // Scrolled down one row: middle child lands on row 0, the next on
        // row 1, and the first child is above the viewport.
        assert_eq!(buffer.get(0, 0).unwrap().bg, Some(Rgba::GREEN));
        assert_eq!(buffer.get(0, 1).unwrap().bg, Some(Rgba::BLUE));
        // Nothing paints past the container's two rows.
        assert_eq!(buffer.get(0, 2).unwrap().bg, None);
    }

    #[test]
    fn test_text_truncation_mode() {
        let mut buffer = FrameBuffer::new(6, 1);
        let view = framed(
            View::plain().with_text("abcdefgh").with_text_wrap(TextWrap::Truncate),
            Rect::new(0, 0, 6, 1),
        );

        buffer.paint(&view);

        let row: String = (0..6).map(|x| buffer.get(x, 0).unwrap().ch).collect();
        assert_eq!(row, "abcde…");
    }
}
