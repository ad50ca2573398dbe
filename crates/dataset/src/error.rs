//! Error types for dataset assembly.

/// Errors that can occur assembling or reading a factor dataset.
///
/// Dataset failures are fatal to an analysis session: no partial dataset
/// is usable for regression.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// No input series were provided.
    #[error("no input series provided")]
    NoInputs,

    /// Missing required column.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// No feature column matches the requested region.
    #[error("no factor column matches region {0}")]
    NoRegionFeatures(String),

    /// A stored date key does not map back to a calendar date.
    #[error("invalid date key: {0}")]
    InvalidDate(i32),

    /// Polars error.
    #[error("data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}
