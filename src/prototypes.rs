//! Prototype registry - reuse-identifier sizing for list and grid cells.
//!
//! List containers need cell sizes *before* rendering cells. The registry
//! maps each reuse identifier to a single off-screen [`ComponentView`]
//! that is driven through the exact same render path as live rendering, so
//! the measured size always matches what will be drawn. There is no
//! caching by state: every measurement is a full, off-screen layout pass.
//! Correctness over throughput.
//!
//! Prototypes are never attached to the displayed hierarchy and are never
//! displayed themselves.

use std::any::Any;
use std::collections::HashMap;

use crate::component::{Component, ComponentView};
use crate::error::Result;
use crate::types::{Constraint, Size};

// =============================================================================
// Type-erased prototype
// =============================================================================

/// Object-safe surface of a `ComponentView<C>` used for measurement.
trait AnyPrototype {
    /// Assign a state snapshot; `false` if the value is not this
    /// prototype's State type.
    fn assign_state(&mut self, state: &dyn Any) -> bool;

    fn render(&mut self, constraint: Constraint) -> Result<()>;

    /// Root frame size from the last render.
    fn frame_size(&self) -> Size;

    /// The prototype's own top + bottom margins.
    fn vertical_margin(&self) -> u16;
}

impl<C: Component> AnyPrototype for ComponentView<C> {
    fn assign_state(&mut self, state: &dyn Any) -> bool {
        match state.downcast_ref::<C::State>() {
            Some(state) => {
                self.set_state(state.clone());
                true
            }
            None => false,
        }
    }

    fn render(&mut self, constraint: Constraint) -> Result<()> {
        ComponentView::render(self, constraint)
    }

    fn frame_size(&self) -> Size {
        self.root().frame().size()
    }

    fn vertical_margin(&self) -> u16 {
        self.style().margin.vertical()
    }
}

// =============================================================================
// PrototypeRegistry
// =============================================================================

/// Per-container mapping from reuse identifier to its sizing prototype.
///
/// Owned as a plain field by whichever container wrapper needs sizing (see
/// `ListView`); exactly one prototype per identifier, with re-registration
/// silently overwriting. Recreating prototypes is a normal pattern, not an
/// error.
#[derive(Default)]
pub struct PrototypeRegistry {
    prototypes: HashMap<String, Box<dyn AnyPrototype>>,
}

impl PrototypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the prototype for an identifier. Last write wins.
    pub fn register<C>(&mut self, identifier: impl Into<String>, prototype: ComponentView<C>)
    where
        C: Component + 'static,
    {
        self.prototypes.insert(identifier.into(), Box::new(prototype));
    }

    /// Whether an identifier has a registered prototype.
    pub fn contains(&self, identifier: &str) -> bool {
        self.prototypes.contains_key(identifier)
    }

    /// Number of registered identifiers.
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    /// Measure the cell size for an identifier and state at the given
    /// available width.
    ///
    /// Runs the prototype through a full off-screen render with constraint
    /// (available_width, unconstrained height), then reports the root
    /// frame size with the prototype's own top and bottom margins added to
    /// the height: callers reserving row heights need the margins
    /// included, and this inclusion is deliberate policy.
    ///
    /// Returns [`Size::ZERO`] when no prototype is registered for the
    /// identifier (unknown height; callers typically fall back to a
    /// default). Never touches the displayed hierarchy, and is safe to
    /// call repeatedly and out of order for different identifiers.
    pub fn measure(&mut self, identifier: &str, state: &dyn Any, available_width: u16) -> Size {
        let Some(prototype) = self.prototypes.get_mut(identifier) else {
            tracing::debug!(identifier, "no prototype registered, reporting zero size");
            return Size::ZERO;
        };

        if !prototype.assign_state(state) {
            tracing::debug!(identifier, "state type does not match prototype, reporting zero size");
            return Size::ZERO;
        }

        if let Err(err) = prototype.render(Constraint::width(available_width)) {
            tracing::error!(identifier, error = %err, "prototype render failed");
            return Size::ZERO;
        }

        let mut size = prototype.frame_size();
        size.height = size.height.saturating_add(prototype.vertical_margin());
        size
    }
}

impl std::fmt::Debug for PrototypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrototypeRegistry")
            .field("identifiers", &self.prototypes.keys().collect::<Vec<_>>())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{FlexStyle, StyleNode};
    use crate::types::Edges;
    use crate::view::View;

    #[derive(Clone, Default)]
    struct CellState {
        title: String,
    }

    /// One 100×20 child; the component itself carries 5 cells of vertical
    /// margin.
    struct Cell;

    impl Component for Cell {
        type State = CellState;

        fn construct(&self, state: &Self::State) -> Vec<StyleNode> {
            vec![StyleNode::new(
                FlexStyle::sized(100, 20),
                View::plain().with_text(state.title.clone()),
            )]
        }

        fn style(&self) -> FlexStyle {
            FlexStyle {
                margin: Edges { top: 5, right: 0, bottom: 5, left: 0 },
                ..FlexStyle::default()
            }
        }
    }

    /// A taller variant for overwrite tests.
    struct TallCell;

    impl Component for TallCell {
        type State = CellState;

        fn construct(&self, _state: &Self::State) -> Vec<StyleNode> {
            vec![StyleNode::new(FlexStyle::sized(100, 40), View::plain())]
        }
    }

    #[test]
    fn test_measure_includes_vertical_margins() {
        let mut registry = PrototypeRegistry::new();
        registry.register("cell", ComponentView::new(Cell));

        let state = CellState { title: "A".into() };
        let size = registry.measure("cell", &state, 200);

        // 20 content + 5 top margin + 5 bottom margin
        assert_eq!(size.height, 30);
        assert_eq!(size.width, 100);
    }

    #[test]
    fn test_measure_unregistered_returns_zero() {
        let mut registry = PrototypeRegistry::new();
        let state = CellState::default();

        assert_eq!(registry.measure("missing", &state, 200), Size::ZERO);
    }

    #[test]
    fn test_reregistration_overwrites() {
        let mut registry = PrototypeRegistry::new();
        registry.register("cell", ComponentView::new(Cell));
        registry.register("cell", ComponentView::new(TallCell));
        assert_eq!(registry.len(), 1);

        let size = registry.measure("cell", &CellState::default(), 200);
        assert_eq!(size.height, 40); // TallCell, no margins
    }

    #[test]
    fn test_measure_repeatable_and_out_of_order() {
        let mut registry = PrototypeRegistry::new();
        registry.register("cell", ComponentView::new(Cell));
        registry.register("tall", ComponentView::new(TallCell));

        let state = CellState { title: "row".into() };
        let first = registry.measure("cell", &state, 200);
        assert_eq!(registry.measure("tall", &state, 200).height, 40);
        assert_eq!(registry.measure("cell", &state, 200), first);
    }

    #[test]
    fn test_measure_state_type_mismatch_returns_zero() {
        let mut registry = PrototypeRegistry::new();
        registry.register("cell", ComponentView::new(Cell));

        let wrong_state = 42u32;
        assert_eq!(registry.measure("cell", &wrong_state, 200), Size::ZERO);
    }

    #[test]
    fn test_measure_does_not_touch_live_hierarchy() {
        use crate::types::Constraint;

        let mut live = ComponentView::with_state(Cell, CellState { title: "live".into() });
        live.render(Constraint::width(80)).unwrap();
        let live_frame = live.root().frame();
        let live_children = live.root().subview_count();

        let mut registry = PrototypeRegistry::new();
        registry.register("cell", ComponentView::new(Cell));
        registry.measure("cell", &CellState { title: "probe".into() }, 200);
        registry.measure("missing", &CellState::default(), 200);

        assert_eq!(live.root().frame(), live_frame);
        assert_eq!(live.root().subview_count(), live_children);
    }
}
