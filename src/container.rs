//! Container reconciliation - post-layout content-extent recomputation.
//!
//! After a render pass assigns final frames, a scrollable container's
//! content extent is derived from its children: the smallest rectangle
//! enclosing every child frame. The extent is recomputed from scratch each
//! time, never incrementally maintained, so it is a pure function of the
//! current child frames.

use crate::types::{ContainerKind, Size};
use crate::view::View;

/// Recompute a container's scrollable content extent from its children's
/// final frames, and enable scrolling.
///
/// Only meaningful as a post-render hook: the child frames must come from
/// a completed layout pass. Dispatch is kind-based and closed:
///
/// - `Scrollable`: extent = (max child right edge, max child bottom edge);
///   an empty container gets extent (0, 0).
/// - `ListManaged`: skipped unconditionally. List containers keep their
///   own extent through incremental row accounting, and a generic
///   recomputation would fight that bookkeeping.
/// - `Plain`: skipped; plain views do not scroll.
pub(crate) fn recompute_content_extent(container: &View) {
    match container.kind() {
        ContainerKind::Scrollable => {}
        ContainerKind::Plain | ContainerKind::ListManaged => return,
    }

    let mut width = 0u16;
    let mut height = 0u16;

    for child in container.subviews() {
        let frame = child.frame();
        width = width.max(frame.right());
        height = height.max(frame.bottom());
    }

    container.set_content_size(Size::new(width, height));
    container.set_scroll_enabled(true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;

    fn child_at(frame: Rect) -> View {
        let view = View::plain();
        view.set_frame(frame);
        view
    }

    #[test]
    fn test_extent_is_union_of_child_frames() {
        let container = View::scrollable();
        container.add_subview(&child_at(Rect::new(0, 0, 50, 50)));
        container.add_subview(&child_at(Rect::new(40, 40, 30, 30)));

        recompute_content_extent(&container);

        assert_eq!(container.content_size(), Size::new(70, 70));
        assert!(container.scroll_enabled());
    }

    #[test]
    fn test_empty_container_extent_is_zero() {
        let container = View::scrollable();
        recompute_content_extent(&container);
        assert_eq!(container.content_size(), Size::ZERO);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let container = View::scrollable();
        container.add_subview(&child_at(Rect::new(5, 5, 10, 10)));

        recompute_content_extent(&container);
        let first = container.content_size();
        recompute_content_extent(&container);

        assert_eq!(container.content_size(), first);
    }

    #[test]
    fn test_list_managed_is_skipped() {
        let container = View::list_managed();
        container.set_content_size(Size::new(1, 500));
        container.add_subview(&child_at(Rect::new(0, 0, 50, 50)));

        recompute_content_extent(&container);

        // Row accounting untouched, scrolling not force-enabled.
        assert_eq!(container.content_size(), Size::new(1, 500));
        assert!(!container.scroll_enabled());
    }

    #[test]
    fn test_plain_is_skipped() {
        let container = View::plain();
        container.add_subview(&child_at(Rect::new(0, 0, 50, 50)));

        recompute_content_extent(&container);

        assert_eq!(container.content_size(), Size::ZERO);
        assert!(!container.scroll_enabled());
    }
}
