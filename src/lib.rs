//! # ember-tui
//!
//! Component-based flexbox rendering for terminal UIs.
//!
//! Components describe views declaratively from an immutable State
//! snapshot. Each render pass rebuilds a style-node tree from the current
//! State, runs it through [Taffy](https://github.com/DioxusLabs/taffy) for
//! W3C-compliant flexbox computation, and assigns the resulting frames to
//! a persistent hierarchy of backing views, which the renderer paints into
//! terminal cells.
//!
//! ## Architecture
//!
//! ```text
//! State → ComponentView::render → StyleNode tree → Taffy solve
//!       → frames on backing Views → FrameBuffer paint → terminal
//! ```
//!
//! The same render path drives off-screen sizing: a [`PrototypeRegistry`]
//! maps reuse identifiers to prototype component views that are rendered
//! without ever being displayed, so measured list rows match what will
//! actually be drawn. After live renders, scrollable containers get their
//! content extent reconciled from their children's final frames.
//!
//! ## Modules
//!
//! - [`types`] - Core types (geometry, dimensions, flex enums, cells)
//! - [`component`] - The `Component` trait and `ComponentView` lifecycle
//! - [`prototypes`] - Reuse-identifier sizing for list/grid cells
//! - [`list`] - List adapter with incremental row accounting
//! - [`layout`] - Taffy bridge and text measurement
//! - [`renderer`] - Frame buffer painting and terminal output
//! - [`events`] - Typed component → host event channel
//! - [`scroll`] - Clamped scroll operations on views

pub mod component;
pub mod error;
pub mod events;
pub mod layout;
pub mod list;
pub mod node;
pub mod prototypes;
pub mod renderer;
pub mod scroll;
pub mod types;
pub mod view;

mod container;

// Re-export commonly used items
pub use types::*;

pub use component::{Component, ComponentView};
pub use error::{Error, Result};
pub use events::{channel, Events, Outlet};
pub use layout::{measure_text_height, solve, string_width, truncate_text, wrap_text};
pub use list::{ListView, RowHost};
pub use node::{FlexStyle, StyleNode};
pub use prototypes::PrototypeRegistry;
pub use renderer::{terminal_size, FrameBuffer, TermRenderer};
pub use view::View;
