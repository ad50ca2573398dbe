//! Ordinary least squares regression.

use ndarray::{Array1, Array2};

use crate::MathError;

/// Result of an ordinary least squares regression with intercept.
#[derive(Debug, Clone)]
pub struct OlsResult {
    /// Estimated slope coefficients, one per predictor column.
    pub coefficients: Array1<f64>,
    /// Estimated intercept.
    pub intercept: f64,
    /// Residuals.
    pub residuals: Array1<f64>,
    /// R-squared.
    pub r_squared: f64,
}

/// Ordinary least squares regression of `y` on the columns of `x`, with
/// an intercept term.
///
/// Solves the normal equations for the augmented design `[1 | x]` using
/// Gaussian elimination with partial pivoting.
///
/// # Arguments
/// * `y` - Response vector (n,)
/// * `x` - Predictor matrix (n x p)
///
/// # Returns
/// OLS result with intercept, slopes, residuals and R-squared.
///
/// # Errors
/// Returns an error if dimensions mismatch, the data is empty, or the
/// normal equations are singular.
pub fn ols(y: &Array1<f64>, x: &Array2<f64>) -> Result<OlsResult, MathError> {
    let n = y.len();
    let p = x.ncols();

    if x.nrows() != n {
        return Err(MathError::DimensionMismatch { expected: n, actual: x.nrows() });
    }
    if n == 0 {
        return Err(MathError::EmptyData);
    }
    if n <= p {
        return Err(MathError::InsufficientData { required: p + 1, actual: n });
    }

    // Augmented design with an intercept column
    let mut design = Array2::ones((n, p + 1));
    for i in 0..n {
        for j in 0..p {
            design[[i, j + 1]] = x[[i, j]];
        }
    }

    let xtx = design.t().dot(&design);
    let xty = design.t().dot(y);
    let beta = solve_linear_system(&xtx, &xty)?;

    let fitted = design.dot(&beta);
    let residuals = y - &fitted;

    let y_mean = y.mean().unwrap_or(0.0);
    let ss_tot: f64 = y.iter().map(|yi| (yi - y_mean).powi(2)).sum();
    let ss_res: f64 = residuals.iter().map(|r| r.powi(2)).sum();
    let r_squared = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 0.0 };

    let intercept = beta[0];
    let coefficients = beta.slice(ndarray::s![1..]).to_owned();

    Ok(OlsResult { coefficients, intercept, residuals, r_squared })
}

/// Solve a linear system Ax = b using Gaussian elimination with partial
/// pivoting.
fn solve_linear_system(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>, MathError> {
    let n = a.nrows();
    if n == 0 {
        return Err(MathError::EmptyData);
    }
    if a.ncols() != n {
        return Err(MathError::LinearAlgebra("matrix must be square".to_string()));
    }
    if b.len() != n {
        return Err(MathError::DimensionMismatch { expected: n, actual: b.len() });
    }

    // Augmented matrix [A | b]
    let mut aug = Array2::zeros((n, n + 1));
    for i in 0..n {
        for j in 0..n {
            aug[[i, j]] = a[[i, j]];
        }
        aug[[i, n]] = b[i];
    }

    for col in 0..n {
        // Partial pivot
        let mut max_row = col;
        let mut max_val = aug[[col, col]].abs();
        for row in (col + 1)..n {
            if aug[[row, col]].abs() > max_val {
                max_val = aug[[row, col]].abs();
                max_row = row;
            }
        }

        if max_val < 1e-14 {
            return Err(MathError::LinearAlgebra(
                "matrix is singular or nearly singular".to_string(),
            ));
        }

        if max_row != col {
            for j in 0..=n {
                let tmp = aug[[col, j]];
                aug[[col, j]] = aug[[max_row, j]];
                aug[[max_row, j]] = tmp;
            }
        }

        for row in (col + 1)..n {
            let factor = aug[[row, col]] / aug[[col, col]];
            for j in col..=n {
                aug[[row, j]] -= factor * aug[[col, j]];
            }
        }
    }

    // Back substitution
    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let mut sum = aug[[i, n]];
        for j in (i + 1)..n {
            sum -= aug[[i, j]] * x[j];
        }
        x[i] = sum / aug[[i, i]];
    }

    Ok(x)
}
