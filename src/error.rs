//! Error types for ember-tui.
//!
//! Only boundary operations are fallible: the box-model solver and terminal
//! I/O. Protocol-level fallbacks (an unregistered prototype identifier, for
//! one) are handled in place with zero values and a log event, never as
//! errors; see `PrototypeRegistry::measure`.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The box-model solver rejected the node tree.
    #[error("layout solve failed: {0}")]
    Layout(#[from] taffy::TaffyError),

    /// Terminal output failed.
    #[error("terminal i/o: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("terminal i/o"));
    }
}
