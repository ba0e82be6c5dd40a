//! Bridge to the Taffy layout engine.
//!
//! Converts a StyleNode tree into Taffy styles, runs the flexbox
//! computation against a constraining size, and writes the resulting
//! frames back onto the nodes. The solver is treated as a black box: a
//! pure function of (tree shape, styles, constraining size).
//!
//! Frames written back are parent-relative, exactly as Taffy reports them;
//! resolving absolute positions is the renderer's job.

use taffy::{
    AlignContent as TaffyAlignContent, AlignItems as TaffyAlignItems,
    AlignSelf as TaffyAlignSelf, AvailableSpace, Dimension as TaffyDimension, Display,
    FlexDirection as TaffyFlexDirection, FlexWrap as TaffyFlexWrap,
    JustifyContent as TaffyJustifyContent, LengthPercentage, LengthPercentageAuto, NodeId,
    Rect as TaffyRect, Size as TaffySize, Style, TaffyTree,
};

use crate::error::Result;
use crate::node::StyleNode;
use crate::types::{
    AlignContent, AlignItems, AlignSelf, Constraint, Dimension, FlexDirection, FlexWrap,
    JustifyContent, Rect, TextWrap,
};

use super::text_measure::{string_width, wrap_text};

// =============================================================================
// Measure context for text leaves
// =============================================================================

/// Per-leaf context handed to the solver's measure callback.
struct TextContext {
    text: String,
    wrap: TextWrap,
}

// =============================================================================
// Style conversion
// =============================================================================

fn to_taffy_dimension(dim: Dimension) -> TaffyDimension {
    match dim {
        Dimension::Auto => TaffyDimension::auto(),
        Dimension::Cells(n) => TaffyDimension::length(n as f32),
        Dimension::Percent(p) => TaffyDimension::percent(p / 100.0),
    }
}

fn to_taffy_flex_direction(dir: FlexDirection) -> TaffyFlexDirection {
    match dir {
        FlexDirection::Column => TaffyFlexDirection::Column,
        FlexDirection::Row => TaffyFlexDirection::Row,
        FlexDirection::ColumnReverse => TaffyFlexDirection::ColumnReverse,
        FlexDirection::RowReverse => TaffyFlexDirection::RowReverse,
    }
}

fn to_taffy_flex_wrap(wrap: FlexWrap) -> TaffyFlexWrap {
    match wrap {
        FlexWrap::NoWrap => TaffyFlexWrap::NoWrap,
        FlexWrap::Wrap => TaffyFlexWrap::Wrap,
        FlexWrap::WrapReverse => TaffyFlexWrap::WrapReverse,
    }
}

fn to_taffy_justify_content(justify: JustifyContent) -> TaffyJustifyContent {
    match justify {
        JustifyContent::FlexStart => TaffyJustifyContent::FlexStart,
        JustifyContent::Center => TaffyJustifyContent::Center,
        JustifyContent::FlexEnd => TaffyJustifyContent::FlexEnd,
        JustifyContent::SpaceBetween => TaffyJustifyContent::SpaceBetween,
        JustifyContent::SpaceAround => TaffyJustifyContent::SpaceAround,
        JustifyContent::SpaceEvenly => TaffyJustifyContent::SpaceEvenly,
    }
}

fn to_taffy_align_items(align: AlignItems) -> TaffyAlignItems {
    match align {
        AlignItems::Stretch => TaffyAlignItems::Stretch,
        AlignItems::FlexStart => TaffyAlignItems::FlexStart,
        AlignItems::Center => TaffyAlignItems::Center,
        AlignItems::FlexEnd => TaffyAlignItems::FlexEnd,
        AlignItems::Baseline => TaffyAlignItems::Baseline,
    }
}

fn to_taffy_align_content(align: AlignContent) -> TaffyAlignContent {
    match align {
        AlignContent::Stretch => TaffyAlignContent::Stretch,
        AlignContent::FlexStart => TaffyAlignContent::FlexStart,
        AlignContent::Center => TaffyAlignContent::Center,
        AlignContent::FlexEnd => TaffyAlignContent::FlexEnd,
        AlignContent::SpaceBetween => TaffyAlignContent::SpaceBetween,
        AlignContent::SpaceAround => TaffyAlignContent::SpaceAround,
    }
}

fn to_taffy_align_self(align: AlignSelf) -> Option<TaffyAlignSelf> {
    match align {
        AlignSelf::Auto => None, // inherit from parent
        AlignSelf::Stretch => Some(TaffyAlignSelf::Stretch),
        AlignSelf::FlexStart => Some(TaffyAlignSelf::FlexStart),
        AlignSelf::Center => Some(TaffyAlignSelf::Center),
        AlignSelf::FlexEnd => Some(TaffyAlignSelf::FlexEnd),
        AlignSelf::Baseline => Some(TaffyAlignSelf::Baseline),
    }
}

/// Build a Taffy Style from one node.
///
/// Border width comes from the backing view: a visible border style
/// occupies one cell on every edge.
fn build_style(node: &StyleNode) -> Style {
    let style = &node.style;
    let border_width = if node.view().border().is_visible() { 1.0 } else { 0.0 };

    Style {
        display: Display::Flex,

        flex_direction: to_taffy_flex_direction(style.direction),
        flex_wrap: to_taffy_flex_wrap(style.wrap),
        justify_content: Some(to_taffy_justify_content(style.justify_content)),
        align_items: Some(to_taffy_align_items(style.align_items)),
        align_content: Some(to_taffy_align_content(style.align_content)),

        flex_grow: style.grow,
        flex_shrink: style.shrink,
        flex_basis: to_taffy_dimension(style.basis),
        align_self: to_taffy_align_self(style.align_self),

        size: TaffySize {
            width: to_taffy_dimension(style.width),
            height: to_taffy_dimension(style.height),
        },
        min_size: TaffySize {
            width: to_taffy_dimension(style.min_width),
            height: to_taffy_dimension(style.min_height),
        },
        max_size: TaffySize {
            width: to_taffy_dimension(style.max_width),
            height: to_taffy_dimension(style.max_height),
        },

        margin: TaffyRect {
            top: LengthPercentageAuto::length(style.margin.top as f32),
            right: LengthPercentageAuto::length(style.margin.right as f32),
            bottom: LengthPercentageAuto::length(style.margin.bottom as f32),
            left: LengthPercentageAuto::length(style.margin.left as f32),
        },

        padding: TaffyRect {
            top: LengthPercentage::length(style.padding.top as f32),
            right: LengthPercentage::length(style.padding.right as f32),
            bottom: LengthPercentage::length(style.padding.bottom as f32),
            left: LengthPercentage::length(style.padding.left as f32),
        },

        border: TaffyRect {
            top: LengthPercentage::length(border_width),
            right: LengthPercentage::length(border_width),
            bottom: LengthPercentage::length(border_width),
            left: LengthPercentage::length(border_width),
        },

        gap: TaffySize {
            width: LengthPercentage::length(style.gap as f32),
            height: LengthPercentage::length(style.gap as f32),
        },

        ..Default::default()
    }
}

// =============================================================================
// Text measurement
// =============================================================================

/// Intrinsic size of a text leaf under the given available space.
fn measure_text(
    ctx: &TextContext,
    known_dimensions: TaffySize<Option<f32>>,
    available_space: TaffySize<AvailableSpace>,
) -> TaffySize<f32> {
    if ctx.text.is_empty() {
        return TaffySize::ZERO;
    }

    let available_width = match available_space.width {
        AvailableSpace::Definite(w) => w as u16,
        AvailableSpace::MinContent => string_width(&ctx.text),
        AvailableSpace::MaxContent => u16::MAX,
    };

    // Wrap against the known width when the solver has one, otherwise the
    // available width. Non-wrapping modes only break on embedded newlines.
    let wrap_width = match ctx.wrap {
        TextWrap::Wrap => known_dimensions
            .width
            .map(|w| w as u16)
            .unwrap_or(available_width)
            .max(1),
        TextWrap::NoWrap | TextWrap::Truncate => u16::MAX,
    };

    let lines = wrap_text(&ctx.text, wrap_width);
    let text_width = lines.iter().map(|line| string_width(line)).max().unwrap_or(0);
    let text_height = lines.len() as u16;

    TaffySize {
        width: known_dimensions.width.unwrap_or(text_width as f32),
        height: known_dimensions.height.unwrap_or(text_height as f32),
    }
}

// =============================================================================
// Solve
// =============================================================================

/// Recursively create Taffy nodes for a subtree.
fn build_node(tree: &mut TaffyTree<TextContext>, node: &StyleNode) -> Result<NodeId> {
    let style = build_style(node);

    if node.is_text_leaf() {
        let ctx = TextContext {
            text: node.view().text().unwrap_or_default(),
            wrap: node.view().text_wrap(),
        };
        return Ok(tree.new_leaf_with_context(style, ctx)?);
    }

    let id = tree.new_leaf(style)?;
    for child in node.children() {
        let child_id = build_node(tree, child)?;
        tree.add_child(id, child_id)?;
    }
    Ok(id)
}

/// Recursively copy solved layouts back into node frames.
fn assign_frames(tree: &TaffyTree<TextContext>, id: NodeId, node: &mut StyleNode) -> Result<()> {
    let layout = tree.layout(id)?;
    node.set_frame(Rect {
        x: layout.location.x.round().max(0.0) as u16,
        y: layout.location.y.round().max(0.0) as u16,
        width: layout.size.width.round().max(0.0) as u16,
        height: layout.size.height.round().max(0.0) as u16,
    });

    let child_ids = tree.children(id)?;
    for (child, child_id) in node.children_mut().iter_mut().zip(child_ids) {
        assign_frames(tree, child_id, child)?;
    }
    Ok(())
}

/// Solve layout for a node tree against a constraining size.
///
/// `None` on a constraint axis means size-to-content (max-content available
/// space). On return every node in the tree carries its final,
/// parent-relative frame.
pub fn solve(root: &mut StyleNode, constraint: Constraint) -> Result<()> {
    let mut tree: TaffyTree<TextContext> = TaffyTree::new();
    let root_id = build_node(&mut tree, root)?;

    let available = TaffySize {
        width: match constraint.width {
            Some(w) => AvailableSpace::Definite(w as f32),
            None => AvailableSpace::MaxContent,
        },
        height: match constraint.height {
            Some(h) => AvailableSpace::Definite(h as f32),
            None => AvailableSpace::MaxContent,
        },
    };

    tree.compute_layout_with_measure(
        root_id,
        available,
        |known_dimensions, available_space, _node_id, context, _style| {
            if let Some(ctx) = context {
                measure_text(ctx, known_dimensions, available_space)
            } else {
                TaffySize::ZERO
            }
        },
    )?;

    assign_frames(&tree, root_id, root)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::FlexStyle;
    use crate::types::BorderStyle;
    use crate::view::View;

    #[test]
    fn test_solve_fixed_root() {
        let mut root = StyleNode::new(FlexStyle::sized(40, 10), View::plain());
        solve(&mut root, Constraint::tight(80, 24)).unwrap();

        assert_eq!(root.frame().size().width, 40);
        assert_eq!(root.frame().size().height, 10);
    }

    #[test]
    fn test_solve_column_stacks_children() {
        let mut root = StyleNode::new(FlexStyle::sized(20, 10), View::plain());
        root.push(StyleNode::new(FlexStyle::sized(20, 3), View::plain()));
        root.push(StyleNode::new(FlexStyle::sized(20, 3), View::plain()));
        solve(&mut root, Constraint::tight(80, 24)).unwrap();

        assert_eq!(root.children()[0].frame(), Rect::new(0, 0, 20, 3));
        assert_eq!(root.children()[1].frame(), Rect::new(0, 3, 20, 3));
    }

    #[test]
    fn test_solve_row_places_side_by_side() {
        let style = FlexStyle { direction: FlexDirection::Row, ..FlexStyle::sized(40, 10) };
        let mut root = StyleNode::new(style, View::plain());
        root.push(StyleNode::new(FlexStyle::sized(10, 5), View::plain()));
        root.push(StyleNode::new(FlexStyle::sized(10, 5), View::plain()));
        solve(&mut root, Constraint::tight(80, 24)).unwrap();

        assert_eq!(root.children()[0].frame().x, 0);
        assert_eq!(root.children()[1].frame().x, 10);
    }

    #[test]
    fn test_solve_flex_grow_fills() {
        let style = FlexStyle { direction: FlexDirection::Row, ..FlexStyle::sized(100, 10) };
        let mut root = StyleNode::new(style, View::plain());
        root.push(StyleNode::new(
            FlexStyle { grow: 1.0, height: Dimension::Cells(5), ..FlexStyle::default() },
            View::plain(),
        ));
        solve(&mut root, Constraint::tight(100, 24)).unwrap();

        assert_eq!(root.children()[0].frame().width, 100);
    }

    #[test]
    fn test_solve_padding_and_border_offset_children() {
        let style = FlexStyle {
            padding: crate::types::Edges { top: 1, right: 2, bottom: 1, left: 2 },
            ..FlexStyle::sized(40, 10)
        };
        let mut root = StyleNode::new(style, View::plain().with_border(BorderStyle::Single));
        root.push(StyleNode::new(FlexStyle::sized(10, 5), View::plain()));
        solve(&mut root, Constraint::tight(80, 24)).unwrap();

        // 2 padding + 1 border on the left, 1 padding + 1 border on top
        assert_eq!(root.children()[0].frame().x, 3);
        assert_eq!(root.children()[0].frame().y, 2);
    }

    #[test]
    fn test_solve_unconstrained_sizes_to_content() {
        let mut root = StyleNode::new(FlexStyle::default(), View::plain());
        root.push(StyleNode::new(FlexStyle::sized(100, 20), View::plain()));
        solve(&mut root, Constraint::NONE).unwrap();

        assert_eq!(root.frame().size().width, 100);
        assert_eq!(root.frame().size().height, 20);
    }

    #[test]
    fn test_solve_text_leaf_wraps_to_constraint() {
        let mut root = StyleNode::new(FlexStyle::default(), View::plain());
        root.push(StyleNode::new(
            FlexStyle::default(),
            View::plain().with_text("one two three four"),
        ));
        solve(&mut root, Constraint::width(8)).unwrap();

        // "one two" / "three" / "four"
        assert_eq!(root.children()[0].frame().height, 3);
    }

    #[test]
    fn test_solve_twice_is_deterministic() {
        let mut root = StyleNode::new(FlexStyle::sized(30, 8), View::plain());
        root.push(StyleNode::new(FlexStyle::sized(12, 4), View::plain()));

        solve(&mut root, Constraint::tight(80, 24)).unwrap();
        let first = (root.frame(), root.children()[0].frame());

        solve(&mut root, Constraint::tight(80, 24)).unwrap();
        assert_eq!(first, (root.frame(), root.children()[0].frame()));
    }
}
