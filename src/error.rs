//! Crate-level error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IrisError {
    #[error("Model has no classes")]
    EmptyModel,

    #[error("Expected {expected} features, got {got}")]
    FeatureDimension { expected: usize, got: usize },

    #[error("Class index {index} out of range for {classes} known labels")]
    ClassOutOfRange { index: usize, classes: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IrisError>;
