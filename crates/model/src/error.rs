//! Error types for the factor decomposition pipeline.

use fondra_dataset::DatasetError;
use fondra_math::MathError;

/// Errors that can occur running the factor decomposition pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Math error.
    #[error("math error: {0}")]
    Math(#[from] MathError),

    /// Dataset error.
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Too few rows for the requested split or fit.
    #[error("insufficient data: need at least {required} rows, got {actual}")]
    InsufficientData {
        /// Required number of rows.
        required: usize,
        /// Actual number of rows.
        actual: usize,
    },

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Transform applied before fitting.
    #[error("model has not been fitted")]
    NotFitted,

    /// Dimension mismatch between pipeline stages.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
}
