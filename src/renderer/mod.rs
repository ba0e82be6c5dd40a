//! Renderer - painting view hierarchies and flushing them to a terminal.
//!
//! Two layers:
//!
//! - [`FrameBuffer`]: a cell grid a view hierarchy is painted into, with
//!   scroll translation and clipping for scroll-enabled containers
//! - [`TermRenderer`]: diffed crossterm output of frame buffers

mod buffer;
mod output;

pub use buffer::FrameBuffer;
pub use output::{terminal_size, TermRenderer};
