//! Linear regression on component scores.

use fondra_math::ols;
use ndarray::{Array1, Array2};

use crate::ModelError;

/// Ordinary least squares regression estimator.
#[derive(Debug, Clone, Default)]
pub struct LinearRegression;

/// Fitted regression coefficients.
#[derive(Debug, Clone)]
pub struct RegressionFit {
    /// Slope per predictor column.
    pub coefficients: Array1<f64>,
    /// Intercept.
    pub intercept: f64,
    /// In-sample R-squared.
    pub r_squared: f64,
}

impl LinearRegression {
    /// Fit targets on predictor columns with an intercept.
    ///
    /// # Errors
    /// Returns `ModelError` for mismatched or degenerate inputs.
    pub fn fit(x: &Array2<f64>, y: &Array1<f64>) -> Result<RegressionFit, ModelError> {
        let result = ols(y, x)?;
        Ok(RegressionFit {
            coefficients: result.coefficients,
            intercept: result.intercept,
            r_squared: result.r_squared,
        })
    }
}

impl RegressionFit {
    /// Predicted targets for a predictor matrix.
    ///
    /// # Errors
    /// Returns `ModelError::DimensionMismatch` for the wrong width.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, ModelError> {
        if x.ncols() != self.coefficients.len() {
            return Err(ModelError::DimensionMismatch(format!(
                "expected {} predictors, got {}",
                self.coefficients.len(),
                x.ncols()
            )));
        }
        Ok(x.dot(&self.coefficients) + self.intercept)
    }
}
