//! Error types for voxlabel-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// voxlabel-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid volume dimensions
    #[error("invalid volume dimensions: {x}x{y}x{z}")]
    InvalidDimension { x: usize, y: usize, z: usize },

    /// Voxel coordinate or slice index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Raw data length does not match the requested dimensions
    #[error("data length {actual} doesn't match {x}x{y}x{z} = {expected}")]
    DataLengthMismatch {
        x: usize,
        y: usize,
        z: usize,
        expected: usize,
        actual: usize,
    },

    /// Incompatible volume sizes
    #[error("incompatible volume sizes: {0} vs {1}")]
    IncompatibleSizes(crate::Dims, crate::Dims),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for voxlabel-core operations
pub type Result<T> = std::result::Result<T, Error>;
