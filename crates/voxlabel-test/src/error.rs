//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to load a test volume
    #[error("failed to load volume '{path}': {message}")]
    VolumeLoad { path: String, message: String },

    /// Failed to build a fixture volume
    #[error("failed to build fixture: {0}")]
    Fixture(#[from] voxlabel_core::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
