//! Error handling for Paperboard.
//!
//! The engine itself is total over `(state, event) -> state`: mutating an
//! absent layer, moving a pointer with no active gesture, or deleting with
//! no selection are all silent no-ops. Errors only arise at the media
//! import boundary, where real I/O is involved.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Media import error type
///
/// Represents failures while probing and placing imported media. A failed
/// import never leaves a partially-specified layer behind: the pending
/// layer is discarded and the error is returned to the caller.
#[derive(Error, Debug)]
pub enum ImportError {
    /// File extension / content is not a supported media kind
    #[error("Unsupported media file: {path}")]
    UnsupportedMedia {
        /// The offending file path.
        path: String,
    },

    /// Natural dimension probe failed
    #[error("Failed to probe dimensions of {path}: {reason}")]
    ProbeFailed {
        /// The file being probed.
        path: String,
        /// Why the probe failed.
        reason: String,
    },

    /// Probe produced a degenerate size (zero width or height)
    #[error("Media {path} has degenerate dimensions {width}x{height}")]
    DegenerateDimensions {
        /// The file being probed.
        path: String,
        /// Reported pixel width.
        width: u32,
        /// Reported pixel height.
        height: u32,
    },
}

/// Main error type for Paperboard
///
/// A unified error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Media import error
    #[error(transparent)]
    Import(#[from] ImportError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an import error
    pub fn is_import_error(&self) -> bool {
        matches!(self, Error::Import(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
