//! Error types for mathematical operations.

/// Errors that can occur during mathematical operations.
#[derive(Debug, thiserror::Error)]
pub enum MathError {
    /// Empty data.
    #[error("empty data provided")]
    EmptyData,

    /// Too few observations for the requested statistic.
    #[error("insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Required number of observations.
        required: usize,
        /// Actual number of observations.
        actual: usize,
    },

    /// Dimension mismatch.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Actual dimension.
        actual: usize,
    },

    /// Linear algebra error.
    #[error("linear algebra error: {0}")]
    LinearAlgebra(String),

    /// Numerical instability (NaN, Inf, non-convergence).
    #[error("numerical instability: {0}")]
    NumericalInstability(String),

    /// Transform applied before fitting.
    #[error("transform has not been fitted")]
    NotFitted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MathError::InsufficientData { required: 2, actual: 1 };
        assert!(err.to_string().contains('2') && err.to_string().contains('1'));

        let err = MathError::DimensionMismatch { expected: 10, actual: 5 };
        assert!(err.to_string().contains("10") && err.to_string().contains('5'));
    }
}
