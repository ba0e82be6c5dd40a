//! Component - declarative rendering from an immutable state snapshot.
//!
//! A [`Component`] is a function from a State value to a style-node tree.
//! A [`ComponentView`] pairs one component with its current State and a
//! persistent root view, and owns the render lifecycle:
//!
//! 1. Pre-render: volatile components discard previously created subviews
//! 2. Tree construction from the current State (pure with respect to State)
//! 3. Layout solve against the constraining size
//! 4. Frame application, root to leaf
//! 5. Post-render: scrollable roots get their content extent reconciled
//!
//! Between renders the tree is frozen: calling [`ComponentView::render`] is
//! the only way node frames change. Re-entrant renders are excluded by
//! construction, since `render` takes `&mut self`.

use crate::container;
use crate::error::Result;
use crate::layout;
use crate::node::{FlexStyle, StyleNode};
use crate::types::{Constraint, ContainerKind, Edges};
use crate::view::View;

// =============================================================================
// Component trait
// =============================================================================

/// A declarative description of a piece of UI.
///
/// `construct` must be pure with respect to the State: the same State
/// always yields a structurally equivalent tree. Styles may depend only on
/// the State, never on prior tree state.
pub trait Component {
    /// Immutable snapshot the component renders from. Value-typed:
    /// replacing it triggers a full tree rebuild on the next render.
    type State: Clone + 'static;

    /// Build the child nodes for a state snapshot.
    ///
    /// Non-volatile components should hand out the same persistent backing
    /// views every time (subview attachment is idempotent); volatile
    /// components create fresh views and rely on pre-render cleanup.
    fn construct(&self, state: &Self::State) -> Vec<StyleNode>;

    /// The component's own layout style: margins, dimensions, direction
    /// for its children.
    fn style(&self) -> FlexStyle {
        FlexStyle::default()
    }

    /// The kind of the component's root view, fixed at construction of
    /// the [`ComponentView`].
    fn root_kind(&self) -> ContainerKind {
        ContainerKind::Plain
    }

    /// Whether the component rebuilds its backing views from scratch on
    /// every render. Volatile components get their root's subviews
    /// discarded before tree construction, so stale views never
    /// accumulate across renders.
    fn volatile(&self) -> bool {
        false
    }
}

// =============================================================================
// ComponentView
// =============================================================================

/// One component instance bound to a place in a hierarchy (or serving as
/// an off-screen measurement prototype).
///
/// Identity-bearing: the root [`View`] persists across renders while the
/// node tree is rebuilt from State each pass.
pub struct ComponentView<C: Component> {
    component: C,
    state: C::State,
    root: View,
    tree: Option<StyleNode>,
}

impl<C: Component> ComponentView<C> {
    /// Create a component view with the default State.
    pub fn new(component: C) -> Self
    where
        C::State: Default,
    {
        Self::with_state(component, C::State::default())
    }

    /// Create a component view with an initial State.
    pub fn with_state(component: C, state: C::State) -> Self {
        let root = View::new(component.root_kind());
        Self { component, state, root, tree: None }
    }

    /// The current State snapshot.
    pub fn state(&self) -> &C::State {
        &self.state
    }

    /// Replace the State snapshot. Takes effect on the next render.
    pub fn set_state(&mut self, state: C::State) {
        self.state = state;
    }

    /// The persistent root view. Hosts attach this into their hierarchy.
    pub fn root(&self) -> &View {
        &self.root
    }

    /// The component's own layout style.
    pub fn style(&self) -> FlexStyle {
        self.component.style()
    }

    /// The node tree from the last render, frozen until the next one.
    pub fn tree(&self) -> Option<&StyleNode> {
        self.tree.as_ref()
    }

    /// Render the component: rebuild the node tree from the current
    /// State, solve layout against the constraint, and assign final
    /// frames to every backing view.
    pub fn render(&mut self, constraint: Constraint) -> Result<()> {
        tracing::trace!(volatile = self.component.volatile(), ?constraint, "render pass");

        // 1. Pre-render: a volatile component recreates its subviews every
        // render, so the old ones must go before construction.
        if self.component.volatile() {
            self.root.remove_subviews();
        }

        // 2. Tree construction from State.
        let mut tree = StyleNode::new(self.component.style(), self.root.clone());
        for child in self.component.construct(&self.state) {
            tree.push(child);
        }
        mount_subviews(&tree);

        // 3. Layout solve (delegated).
        layout::solve(&mut tree, constraint)?;

        // 4. Frame application, root to leaf.
        apply_frames(&tree);

        // 5. Post-render: content-extent reconciliation for scrollable
        // roots. Kind dispatch inside skips plain and list-managed views.
        container::recompute_content_extent(&self.root);

        self.tree = Some(tree);
        Ok(())
    }
}

/// Attach every node's backing view under its parent's view.
///
/// Attachment is idempotent, so persistent views survive repeated mounts
/// without duplication.
fn mount_subviews(node: &StyleNode) {
    for child in node.children() {
        node.view().add_subview(child.view());
        mount_subviews(child);
    }
}

/// Copy solved frames onto backing views, root to leaf, along with the
/// content inset (border + padding) the renderer needs to place content.
fn apply_frames(node: &StyleNode) {
    let view = node.view();
    view.set_frame(node.frame());

    let border = if view.border().is_visible() { 1 } else { 0 };
    let padding = node.style.padding;
    view.set_content_inset(Edges {
        top: padding.top + border,
        right: padding.right + border,
        bottom: padding.bottom + border,
        left: padding.left + border,
    });

    for child in node.children() {
        apply_frames(child);
    }
}

// =============================================================================
// Tests
// =============================================================================
