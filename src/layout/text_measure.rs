//! Text measurement.
//!
//! Unicode-aware measurement of text in terminal cells. Widths come from
//! unicode-width (CJK and most emoji occupy two cells); wrapping is
//! word-based with grapheme-level hard breaks for words wider than the
//! available space.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Measure the display width of a string in terminal cells.
pub fn string_width(s: &str) -> u16 {
    UnicodeWidthStr::width(s).min(u16::MAX as usize) as u16
}

/// Display width of a single character.
pub fn char_width(c: char) -> u16 {
    UnicodeWidthChar::width(c).unwrap_or(0) as u16
}

/// Wrap text to the given width, returning the resulting lines.
///
/// Embedded newlines always break; blank source lines survive as empty
/// output lines. A single word wider than the width is hard-broken at
/// grapheme boundaries. Empty input yields no lines.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    if width == 0 {
        return text.split('\n').map(str::to_string).collect();
    }

    let mut lines = Vec::new();

    // Completed lines never keep the whitespace they broke at.
    fn flush(lines: &mut Vec<String>, current: &mut String, current_width: &mut u16) {
        let line = std::mem::take(current);
        lines.push(line.trim_end().to_string());
        *current_width = 0;
    }

    for source_line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0u16;

        for word in source_line.split_word_bounds() {
            let word_width = string_width(word);

            if current_width + word_width <= width {
                current.push_str(word);
                current_width += word_width;
                continue;
            }

            // Whitespace at the break point is consumed, not carried over.
            if word.trim().is_empty() {
                flush(&mut lines, &mut current, &mut current_width);
                continue;
            }

            if !current.is_empty() {
                flush(&mut lines, &mut current, &mut current_width);
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                // Hard-break an overlong word at grapheme boundaries.
                for grapheme in word.graphemes(true) {
                    let grapheme_width = string_width(grapheme);
                    if current_width + grapheme_width > width && !current.is_empty() {
                        flush(&mut lines, &mut current, &mut current_width);
                    }
                    current.push_str(grapheme);
                    current_width += grapheme_width;
                }
            }
        }

        lines.push(current.trim_end().to_string());
    }

    lines
}

/// Measure the height of text when wrapped to a given width.
///
/// Returns the number of lines the text would occupy: 0 for empty text,
/// at least 1 otherwise.
pub fn measure_text_height(text: &str, width: u16) -> u16 {
    wrap_text(text, width).len().min(u16::MAX as usize) as u16
}

/// Truncate text to the given width, appending `…` when anything was cut.
pub fn truncate_text(text: &str, width: u16) -> String {
    if string_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1; // reserve a cell for the ellipsis
    let mut result = String::new();
    let mut used = 0u16;

    for grapheme in text.graphemes(true) {
        let grapheme_width = string_width(grapheme);
        if used + grapheme_width > budget {
            break;
        }
        result.push_str(grapheme);
        used += grapheme_width;
    }

    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_width_ascii() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
    }

    #[test]
    fn test_string_width_cjk() {
        assert_eq!(string_width("你好"), 4);
        assert_eq!(string_width("a你b"), 4);
    }

    #[test]
    fn test_wrap_basic() {
        let lines = wrap_text("the quick brown fox", 10);
        assert_eq!(lines, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_wrap_fits_on_one_line() {
        assert_eq!(wrap_text("short", 10), vec!["short"]);
    }

    #[test]
    fn test_wrap_preserves_blank_lines() {
        let lines = wrap_text("a\n\nb", 10);
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn test_wrap_hard_breaks_long_word() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_measure_text_height() {
        assert_eq!(measure_text_height("", 10), 0);
        assert_eq!(measure_text_height("one two three four", 8), 3);
        assert_eq!(measure_text_height("line", 10), 1);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 8), "hello w…");
        assert_eq!(truncate_text("hi", 0), "");
    }
}
