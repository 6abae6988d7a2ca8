//! Error types for pixlab operations

use thiserror::Error;

/// Result type for pixlab operations
pub type LabResult<T> = Result<T, LabError>;

/// Errors that can occur while loading images or running experiments
#[derive(Error, Debug)]
pub enum LabError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}
