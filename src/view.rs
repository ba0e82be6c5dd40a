//! View - the backing visual element behind every style node.
//!
//! A `View` is a cheaply clonable handle (`Rc`) to one visual element in
//! the hierarchy: a frame, visual style, optional text content, and
//! subviews. Views persist across renders while the style-node tree is
//! rebuilt around them; the render pass assigns each node's solved frame to
//! its backing view as its final step.
//!
//! Views are single-threaded, matching the synchronous render model: all
//! mutation goes through `RefCell`, and handles compare by identity.

use std::cell::RefCell;
use std::rc::Rc;

use crate::types::{Attr, BorderStyle, ContainerKind, Edges, Rect, Rgba, Size, TextWrap};

/// A handle to one backing view in the hierarchy.
///
/// Clones share the same underlying view; identity comparisons use
/// [`View::ptr_eq`]. The container kind is fixed at construction and never
/// changes, so downstream dispatch (content-extent reconciliation, scroll
/// clamping) branches on it instead of probing structure at render time.
#[derive(Clone)]
pub struct View {
    inner: Rc<RefCell<ViewInner>>,
}

struct ViewInner {
    kind: ContainerKind,
    frame: Rect,
    /// Inset from the frame edge to where content (text) starts.
    /// Assigned together with the frame: border plus padding.
    content_inset: Edges,
    background: Option<Rgba>,
    foreground: Option<Rgba>,
    attrs: Attr,
    border: BorderStyle,
    text: Option<String>,
    text_wrap: TextWrap,
    subviews: Vec<View>,
    /// Scrollable extent, meaningful for Scrollable and ListManaged kinds.
    content_size: Size,
    scroll_offset: (u16, u16),
    scroll_enabled: bool,
}

impl View {
    /// Create a view of the given container kind.
    pub fn new(kind: ContainerKind) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ViewInner {
                kind,
                frame: Rect::default(),
                content_inset: Edges::ZERO,
                background: None,
                foreground: None,
                attrs: Attr::NONE,
                border: BorderStyle::None,
                text: None,
                text_wrap: TextWrap::default(),
                subviews: Vec::new(),
                content_size: Size::ZERO,
                scroll_offset: (0, 0),
                scroll_enabled: false,
            })),
        }
    }

    /// An ordinary, non-scrolling view.
    pub fn plain() -> Self {
        Self::new(ContainerKind::Plain)
    }

    /// A free-form scrollable container.
    pub fn scrollable() -> Self {
        Self::new(ContainerKind::Scrollable)
    }

    /// A list/grid container that manages its own content extent.
    pub fn list_managed() -> Self {
        Self::new(ContainerKind::ListManaged)
    }

    // =========================================================================
    // Construction-time configuration
    // =========================================================================

    /// Set the background color.
    pub fn with_background(self, color: Rgba) -> Self {
        self.inner.borrow_mut().background = Some(color);
        self
    }

    /// Set the foreground (text/border) color.
    pub fn with_foreground(self, color: Rgba) -> Self {
        self.inner.borrow_mut().foreground = Some(color);
        self
    }

    /// Set text attributes.
    pub fn with_attrs(self, attrs: Attr) -> Self {
        self.inner.borrow_mut().attrs = attrs;
        self
    }

    /// Set the border style.
    pub fn with_border(self, border: BorderStyle) -> Self {
        self.inner.borrow_mut().border = border;
        self
    }

    /// Set the text content.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.inner.borrow_mut().text = Some(text.into());
        self
    }

    /// Set the text wrap mode.
    pub fn with_text_wrap(self, wrap: TextWrap) -> Self {
        self.inner.borrow_mut().text_wrap = wrap;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The container kind, fixed at construction.
    pub fn kind(&self) -> ContainerKind {
        self.inner.borrow().kind
    }

    /// The current frame, parent-relative.
    ///
    /// Valid only between the end of a render pass and the next render of
    /// the owning component; reads outside that window see the previous
    /// pass's value.
    pub fn frame(&self) -> Rect {
        self.inner.borrow().frame
    }

    /// Assign the frame. Called by the render pass during frame
    /// application.
    pub fn set_frame(&self, frame: Rect) {
        self.inner.borrow_mut().frame = frame;
    }

    /// Inset from the frame edge to the content box (border + padding).
    pub fn content_inset(&self) -> Edges {
        self.inner.borrow().content_inset
    }

    pub(crate) fn set_content_inset(&self, inset: Edges) {
        self.inner.borrow_mut().content_inset = inset;
    }

    /// The text content, if any.
    pub fn text(&self) -> Option<String> {
        self.inner.borrow().text.clone()
    }

    /// Replace the text content.
    pub fn set_text(&self, text: impl Into<String>) {
        self.inner.borrow_mut().text = Some(text.into());
    }

    /// The text wrap mode.
    pub fn text_wrap(&self) -> TextWrap {
        self.inner.borrow().text_wrap
    }

    /// The background color, if any.
    pub fn background(&self) -> Option<Rgba> {
        self.inner.borrow().background
    }

    /// The foreground color, if any.
    pub fn foreground(&self) -> Option<Rgba> {
        self.inner.borrow().foreground
    }

    /// The text attributes.
    pub fn attrs(&self) -> Attr {
        self.inner.borrow().attrs
    }

    /// The border style.
    pub fn border(&self) -> BorderStyle {
        self.inner.borrow().border
    }

    // =========================================================================
    // Subview management
    // =========================================================================

    /// Attach a subview.
    ///
    /// Idempotent: attaching a view that is already a subview of this view
    /// is a no-op, so persistent views survive repeated mounts without
    /// duplication.
    pub fn add_subview(&self, child: &View) {
        let mut inner = self.inner.borrow_mut();
        if !inner.subviews.iter().any(|v| v.ptr_eq(child)) {
            inner.subviews.push(child.clone());
        }
    }

    /// Detach all subviews.
    ///
    /// This is the pre-render cleanup volatile components run before
    /// reconstructing their trees.
    pub fn remove_subviews(&self) {
        self.inner.borrow_mut().subviews.clear();
    }

    /// Handles to the current subviews, in attach order.
    pub fn subviews(&self) -> Vec<View> {
        self.inner.borrow().subviews.clone()
    }

    /// Number of attached subviews.
    pub fn subview_count(&self) -> usize {
        self.inner.borrow().subviews.len()
    }

    /// Whether two handles refer to the same view.
    pub fn ptr_eq(&self, other: &View) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // =========================================================================
    // Scroll state
    // =========================================================================

    /// The scrollable content extent.
    ///
    /// For `Scrollable` kinds this is assigned by the post-render
    /// reconciliation; for `ListManaged` kinds by the list's own row
    /// accounting. Always `Size::ZERO` for plain views.
    pub fn content_size(&self) -> Size {
        self.inner.borrow().content_size
    }

    pub(crate) fn set_content_size(&self, size: Size) {
        self.inner.borrow_mut().content_size = size;
    }

    /// The current scroll offset, (x, y).
    pub fn scroll_offset(&self) -> (u16, u16) {
        self.inner.borrow().scroll_offset
    }

    pub(crate) fn set_scroll_offset_raw(&self, x: u16, y: u16) {
        self.inner.borrow_mut().scroll_offset = (x, y);
    }

    /// Whether scrolling is enabled.
    pub fn scroll_enabled(&self) -> bool {
        self.inner.borrow().scroll_enabled
    }

    pub(crate) fn set_scroll_enabled(&self, enabled: bool) {
        self.inner.borrow_mut().scroll_enabled = enabled;
    }
}

impl std::fmt::Debug for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("View")
            .field("kind", &inner.kind)
            .field("frame", &inner.frame)
            .field("subviews", &inner.subviews.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_subview_idempotent() {
        let parent = View::plain();
        let child = View::plain();

        parent.add_subview(&child);
        parent.add_subview(&child);
        parent.add_subview(&child.clone());

        assert_eq!(parent.subview_count(), 1);
    }

    #[test]
    fn test_remove_subviews() {
        let parent = View::plain();
        parent.add_subview(&View::plain());
        parent.add_subview(&View::plain());
        assert_eq!(parent.subview_count(), 2);

        parent.remove_subviews();
        assert_eq!(parent.subview_count(), 0);
    }

    #[test]
    fn test_kind_fixed_at_construction() {
        assert_eq!(View::plain().kind(), ContainerKind::Plain);
        assert_eq!(View::scrollable().kind(), ContainerKind::Scrollable);
        assert_eq!(View::list_managed().kind(), ContainerKind::ListManaged);
    }

    #[test]
    fn test_clone_shares_identity() {
        let view = View::plain();
        let alias = view.clone();
        assert!(view.ptr_eq(&alias));

        alias.set_frame(Rect::new(1, 2, 3, 4));
        assert_eq!(view.frame(), Rect::new(1, 2, 3, 4));
    }

    #[test]
    fn test_text_replacement() {
        let view = View::plain().with_text("before");
        view.set_text("after");
        assert_eq!(view.text().as_deref(), Some("after"));
    }

    #[test]
    fn test_scroll_state_defaults() {
        let view = View::scrollable();
        assert_eq!(view.content_size(), Size::ZERO);
        assert_eq!(view.scroll_offset(), (0, 0));
        assert!(!view.scroll_enabled());
    }
}
