//! StyleNode - one visual element's layout intent for a single render pass.
//!
//! A style node pairs a [`FlexStyle`] with the backing [`View`] it will
//! position, plus owned children. Node trees are rebuilt from the component
//! State on every render and consumed by the layout solver, which assigns
//! each node a final, parent-relative frame.
//!
//! A node's frame is valid only between the end of the render pass that
//! solved it and the start of the next one.

use crate::types::{
    AlignContent, AlignItems, AlignSelf, Dimension, Edges, FlexDirection, FlexWrap,
    JustifyContent, Rect,
};
use crate::view::View;

// =============================================================================
// FlexStyle
// =============================================================================

/// Flex-model layout properties for one node.
///
/// Defaults follow the flexbox spec the solver implements: column
/// direction, no wrap, stretch alignment, shrink 1, everything else zero
/// or auto.
#[derive(Debug, Clone, PartialEq)]
pub struct FlexStyle {
    // Container properties
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,

    // Item properties
    pub grow: f32,
    pub shrink: f32,
    pub basis: Dimension,
    pub align_self: AlignSelf,

    // Dimensions
    pub width: Dimension,
    pub height: Dimension,
    pub min_width: Dimension,
    pub max_width: Dimension,
    pub min_height: Dimension,
    pub max_height: Dimension,

    // Spacing
    pub margin: Edges,
    pub padding: Edges,
    pub gap: u16,
}

impl Default for FlexStyle {
    fn default() -> Self {
        Self {
            direction: FlexDirection::Column,
            wrap: FlexWrap::NoWrap,
            justify_content: JustifyContent::FlexStart,
            align_items: AlignItems::Stretch,
            align_content: AlignContent::Stretch,
            grow: 0.0,
            shrink: 1.0,
            basis: Dimension::Auto,
            align_self: AlignSelf::Auto,
            width: Dimension::Auto,
            height: Dimension::Auto,
            min_width: Dimension::Auto,
            max_width: Dimension::Auto,
            min_height: Dimension::Auto,
            max_height: Dimension::Auto,
            margin: Edges::ZERO,
            padding: Edges::ZERO,
            gap: 0,
        }
    }
}

impl FlexStyle {
    /// A style with fixed cell dimensions.
    pub fn sized(width: u16, height: u16) -> Self {
        Self {
            width: Dimension::Cells(width),
            height: Dimension::Cells(height),
            ..Self::default()
        }
    }
}

// =============================================================================
// StyleNode
// =============================================================================

/// One node in the per-render layout tree.
///
/// Owns its children; no child-to-parent back references. The solved frame
/// is parent-relative, like the frames the solver reports.
#[derive(Debug)]
pub struct StyleNode {
    /// Layout intent for this node.
    pub style: FlexStyle,
    view: View,
    children: Vec<StyleNode>,
    frame: Rect,
}

impl StyleNode {
    /// Create a node positioning the given backing view.
    pub fn new(style: FlexStyle, view: View) -> Self {
        Self { style, view, children: Vec::new(), frame: Rect::default() }
    }

    /// Append a child node.
    pub fn push(&mut self, child: StyleNode) {
        self.children.push(child);
    }

    /// Builder form of [`push`](Self::push).
    pub fn with_child(mut self, child: StyleNode) -> Self {
        self.children.push(child);
        self
    }

    /// The backing view this node positions.
    pub fn view(&self) -> &View {
        &self.view
    }

    /// The child nodes, in layout order.
    pub fn children(&self) -> &[StyleNode] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [StyleNode] {
        &mut self.children
    }

    /// The solved, parent-relative frame.
    ///
    /// Stale (previous pass's value) until the next layout solve completes.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// Whether this node is a text leaf: no children and text content on
    /// the backing view. Text leaves get intrinsic sizing from the
    /// solver's measure callback.
    pub(crate) fn is_text_leaf(&self) -> bool {
        self.children.is_empty() && self.view.text().is_some()
    }
}
