//! Error types for metric computation.

use fondra_math::MathError;
use fondra_primitives::SeriesError;

/// Errors that can occur computing a metric.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Too few observations for the metric.
    #[error("insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Required number of observations.
        required: usize,
        /// Actual number of observations.
        actual: usize,
    },

    /// Two series required to share index-for-index correspondence do not.
    #[error("series are not aligned: {0}")]
    Alignment(String),

    /// Zero-variance denominator.
    #[error("degenerate variance: {0}")]
    DegenerateVariance(String),

    /// A requested window has no data.
    #[error("no data in window {0}")]
    MissingWindowData(String),

    /// Math error.
    #[error("math error: {0}")]
    Math(#[from] MathError),

    /// Series construction error.
    #[error("series error: {0}")]
    Series(#[from] SeriesError),
}

impl MetricsError {
    /// Whether a caller can skip this metric and keep going.
    ///
    /// Per-window degeneracies are local; alignment and construction
    /// failures indicate a broken input set.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InsufficientData { .. }
                | Self::DegenerateVariance(_)
                | Self::MissingWindowData(_)
        )
    }
}
