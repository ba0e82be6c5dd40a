//! ListView - host-side list adapter with prototype-driven row sizing.
//!
//! A list needs every row's height before the row is displayed. The
//! adapter owns a [`PrototypeRegistry`] as a plain field (one registry per
//! list, keyed by cell kind) and measures rows through it, caching heights
//! per row index. This is the incremental row accounting that makes the
//! backing view `ListManaged` and exempt from generic content-extent
//! reconciliation.
//!
//! Actual row display stays with the host: [`ListView::refresh_at`] is a
//! thin pass-through asking the host to redisplay one row, nothing more.

use std::any::Any;

use crate::component::{Component, ComponentView};
use crate::prototypes::PrototypeRegistry;
use crate::types::Size;
use crate::view::View;

/// The host side of a list: whatever owns the visible rows.
pub trait RowHost {
    /// Redisplay one row. Called from [`ListView::refresh_at`].
    fn redisplay_row(&mut self, index: usize);
}

/// A list container wrapper: backing view, prototype registry, and cached
/// row heights.
pub struct ListView<H: RowHost> {
    host: H,
    view: View,
    prototypes: PrototypeRegistry,
    width: u16,
    row_heights: Vec<Option<u16>>,
}

impl<H: RowHost> ListView<H> {
    /// Create a list adapter over a host, measuring rows at the given
    /// width.
    pub fn new(host: H, width: u16) -> Self {
        Self {
            host,
            view: View::list_managed(),
            prototypes: PrototypeRegistry::new(),
            width,
            row_heights: Vec::new(),
        }
    }

    /// The backing list-managed view.
    pub fn view(&self) -> &View {
        &self.view
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Register the sizing prototype for a cell kind. Last write wins.
    pub fn register_prototype<C>(&mut self, identifier: impl Into<String>, prototype: ComponentView<C>)
    where
        C: Component + 'static,
    {
        self.prototypes.register(identifier, prototype);
    }

    /// Set the number of rows, dropping cached heights past the end.
    pub fn set_row_count(&mut self, count: usize) {
        self.row_heights.resize(count, None);
        self.update_extent();
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.row_heights.len()
    }

    /// The height to reserve for a row, measuring through the prototype
    /// registry on a cache miss.
    ///
    /// Returns 0 for an unknown identifier (zero-size measurement) or an
    /// out-of-bounds index.
    pub fn measure_row(&mut self, index: usize, identifier: &str, state: &dyn Any) -> u16 {
        let Some(slot) = self.row_heights.get(index).copied() else {
            return 0;
        };
        if let Some(height) = slot {
            return height;
        }

        let height = self.prototypes.measure(identifier, state, self.width).height;
        self.row_heights[index] = Some(height);
        self.update_extent();
        height
    }

    /// Drop the cached height for one row; the next `measure_row` call
    /// runs a fresh measurement.
    pub fn invalidate_row(&mut self, index: usize) {
        if let Some(slot) = self.row_heights.get_mut(index) {
            *slot = None;
            self.update_extent();
        }
    }

    /// Ask the host to redisplay one row. Pure delegation.
    pub fn refresh_at(&mut self, index: usize) {
        self.host.redisplay_row(index);
    }

    /// Change the measurement width; all cached heights are stale and
    /// dropped.
    pub fn set_width(&mut self, width: u16) {
        if self.width != width {
            self.width = width;
            self.row_heights.iter_mut().for_each(|slot| *slot = None);
            self.update_extent();
        }
    }

    /// Total height of all measured rows.
    pub fn content_height(&self) -> u16 {
        self.row_heights
            .iter()
            .map(|slot| slot.unwrap_or(0))
            .fold(0u16, u16::saturating_add)
    }

    /// Push the current row accounting into the backing view's extent.
    fn update_extent(&self) {
        self.view.set_content_size(Size::new(self.width, self.content_height()));
        self.view.set_scroll_enabled(true);
    }
}
