//! Error types for voxlabel-region

use thiserror::Error;
use voxlabel_core::Label;

/// Errors that can occur during labeling operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] voxlabel_core::Error),

    /// The index stack could not grow beyond its current capacity
    #[error("index stack exhausted: could not grow beyond {capacity} entries")]
    StackExhausted { capacity: usize },

    /// Invalid seed position
    #[error("invalid seed position: ({i}, {j}, {k})")]
    InvalidSeed { i: usize, j: usize, k: usize },

    /// Z-range outside the volume or reversed
    #[error("invalid z-range {start}..{end} for depth {depth}")]
    InvalidRange {
        start: usize,
        end: usize,
        depth: usize,
    },

    /// Splitting plane outside the volume
    #[error("invalid splitting plane {plane} for depth {depth}")]
    InvalidPlane { plane: usize, depth: usize },

    /// The next label of a sequence does not fit in the label type
    #[error("label overflow: component {index} of sequence start {start}, step {step}")]
    LabelOverflow {
        start: Label,
        step: Label,
        index: usize,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for labeling operations
pub type RegionResult<T> = Result<T, RegionError>;
