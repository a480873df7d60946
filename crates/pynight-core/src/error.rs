//! Error types for the demo library
//!
//! Not much can go wrong here:
//! - a file that is missing or unreadable during the scoped read
//! - a checked index outside the bounds of a [`SequenceWrapper`](crate::SequenceWrapper)
//! - a configuration file that does not parse
//! - the demo's output stream going away

use std::path::PathBuf;

/// Main error type for the demo library
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// File does not exist
    #[error("file not found: {}", .path.display())]
    NotFound {
        /// Path that was opened
        path: PathBuf,
    },

    /// Any other IO failure while opening or reading
    #[error("io error reading {}: {source}", .path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Checked sequence access outside `0..len`
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Length at the time of the access
        len: usize,
    },

    /// Configuration could not be parsed
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Writing demo output failed
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

impl DemoError {
    /// Classify an IO error for `path`
    ///
    /// `NotFound` gets its own variant; everything else stays an [`DemoError::Io`].
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Create out-of-range error
    #[inline]
    #[must_use]
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Whether this is the missing-file condition
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for demo operations
pub type DemoResult<T> = Result<T, DemoError>;
