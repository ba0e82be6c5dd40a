//! Layout - flexbox computation for style-node trees.
//!
//! The box-model math itself is delegated to
//! [Taffy](https://github.com/DioxusLabs/taffy); this module owns the
//! protocol around it:
//!
//! 1. Converts StyleNode properties → Taffy styles
//! 2. Builds the Taffy tree from node ownership
//! 3. Provides measure callbacks for text intrinsic sizing
//! 4. Writes solved frames back onto the nodes

mod bridge;
mod text_measure;

pub use bridge::solve;
pub use text_measure::{char_width, measure_text_height, string_width, truncate_text, wrap_text};
