//! Scroll operations with clamping.
//!
//! Scroll offsets are user state on the view; scroll bounds derive from
//! the reconciled content extent and the view's current frame. All
//! operations clamp, and all are no-ops on views that cannot scroll.

use crate::types::ContainerKind;
use crate::view::View;

/// Default scroll amount for arrow keys (lines).
pub const LINE_SCROLL: u16 = 1;

/// Default scroll amount for mouse wheel.
pub const WHEEL_SCROLL: u16 = 3;

/// Whether a view can currently scroll.
pub fn is_scrollable(view: &View) -> bool {
    matches!(view.kind(), ContainerKind::Scrollable | ContainerKind::ListManaged)
        && view.scroll_enabled()
}

/// Maximum scroll offsets: content extent minus viewport, saturating.
///
/// Returns (max_x, max_y).
pub fn max_scroll(view: &View) -> (u16, u16) {
    let content = view.content_size();
    let frame = view.frame();
    (
        content.width.saturating_sub(frame.width),
        content.height.saturating_sub(frame.height),
    )
}

/// Set the scroll offset, clamped to the valid range.
///
/// Does nothing if the view is not scrollable.
pub fn set_scroll_offset(view: &View, x: u16, y: u16) {
    if !is_scrollable(view) {
        return;
    }

    let (max_x, max_y) = max_scroll(view);
    view.set_scroll_offset_raw(x.min(max_x), y.min(max_y));
}

/// Scroll by a delta amount.
///
/// Returns `true` if the offset changed, `false` at a boundary or on a
/// non-scrollable view.
pub fn scroll_by(view: &View, delta_x: i32, delta_y: i32) -> bool {
    if !is_scrollable(view) {
        return false;
    }

    let (current_x, current_y) = view.scroll_offset();
    let (max_x, max_y) = max_scroll(view);

    let new_x = ((current_x as i32) + delta_x).clamp(0, max_x as i32) as u16;
    let new_y = ((current_y as i32) + delta_y).clamp(0, max_y as i32) as u16;

    if new_x == current_x && new_y == current_y {
        return false;
    }

    view.set_scroll_offset_raw(new_x, new_y);
    true
}

/// Scroll to the top (Y offset 0, X preserved).
pub fn scroll_to_top(view: &View) {
    let (current_x, _) = view.scroll_offset();
    set_scroll_offset(view, current_x, 0);
}

/// Scroll to the bottom (Y offset to max, X preserved).
pub fn scroll_to_bottom(view: &View) {
    let (current_x, _) = view.scroll_offset();
    let (_, max_y) = max_scroll(view);
    set_scroll_offset(view, current_x, max_y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rect, Size};

    fn scrolling_view() -> View {
        let view = View::scrollable();
        view.set_frame(Rect::new(0, 0, 20, 10));
        view.set_content_size(Size::new(20, 50));
        view.set_scroll_enabled(true);
        view
    }

    #[test]
    fn test_max_scroll() {
        let view = scrolling_view();
        assert_eq!(max_scroll(&view), (0, 40));
    }

    #[test]
    fn test_scroll_by_clamps() {
        let view = scrolling_view();

        assert!(scroll_by(&view, 0, 100));
        assert_eq!(view.scroll_offset(), (0, 40));

        assert!(scroll_by(&view, 0, -100));
        assert_eq!(view.scroll_offset(), (0, 0));
    }

    #[test]
    fn test_scroll_by_at_boundary_reports_no_movement() {
        let view = scrolling_view();
        assert!(!scroll_by(&view, 0, -1));
    }

    #[test]
    fn test_non_scrollable_is_noop() {
        let view = View::plain();
        view.set_frame(Rect::new(0, 0, 20, 10));

        assert!(!scroll_by(&view, 0, 5));
        set_scroll_offset(&view, 3, 3);
        assert_eq!(view.scroll_offset(), (0, 0));
    }

    #[test]
    fn test_scroll_to_bottom_and_top() {
        let view = scrolling_view();

        scroll_to_bottom(&view);
        assert_eq!(view.scroll_offset(), (0, 40));

        scroll_to_top(&view);
        assert_eq!(view.scroll_offset(), (0, 0));
    }
}
