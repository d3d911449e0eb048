use alloc::collections::TryReserveError;
use core::fmt;

use thiserror::Error;

/// Failures reported by [`TextBuffer`](crate::TextBuffer) operations.
///
/// Every fallible operation leaves the buffer in its prior, still-valid state
/// when it fails; no variant indicates partial corruption.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The backing store could not be grown or allocated.
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// A formatting implementation reported an error during
    /// [`append_format`](crate::TextBuffer::append_format).
    #[error("formatting failed")]
    Format(#[from] fmt::Error),

    /// The file given to [`read_file`](crate::TextBuffer::read_file) does not
    /// exist.
    #[cfg(feature = "std")]
    #[error("file not found: {path:?}")]
    FileNotFound {
        /// The path that was opened.
        path: std::path::PathBuf,
        /// The underlying `NotFound` error.
        source: std::io::Error,
    },

    /// The file given to [`read_file`](crate::TextBuffer::read_file) could not
    /// be read.
    #[cfg(feature = "std")]
    #[error("i/o error reading {path:?}: {source}")]
    Io {
        /// The path that was read.
        path: std::path::PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
