//! I/O error types
//!
//! Provides a unified error type for all volume I/O operations.

use thiserror::Error;

/// Error type for volume I/O operations.
///
/// Wraps standard I/O errors, structurally invalid input and
/// core-library errors.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input ended before every voxel was read
    #[error("truncated volume data: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    /// An error from the core library (e.g. invalid dimensions)
    #[error("core error: {0}")]
    Core(#[from] voxlabel_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
