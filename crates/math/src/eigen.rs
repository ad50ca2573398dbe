//! Symmetric eigendecomposition.

use ndarray::{Array1, Array2};

use crate::MathError;

const MAX_SWEEPS: usize = 64;

/// Eigendecomposition of a symmetric matrix.
///
/// Eigenpairs are sorted by descending eigenvalue; `eigenvectors` holds
/// one unit-length eigenvector per column, in the same order.
#[derive(Debug, Clone)]
pub struct SymmetricEigen {
    /// Eigenvalues, descending.
    pub eigenvalues: Array1<f64>,
    /// Eigenvectors, one per column, matching `eigenvalues` order.
    pub eigenvectors: Array2<f64>,
}

/// Eigendecomposition of a symmetric matrix via cyclic Jacobi rotations.
///
/// Adequate for the small feature-covariance matrices this workspace
/// produces (a handful of factors per region).
///
/// # Arguments
/// * `a` - Symmetric matrix (p x p)
///
/// # Returns
/// Eigenpairs sorted by descending eigenvalue.
///
/// # Errors
/// Returns an error if the matrix is empty, non-square, asymmetric, or
/// the sweep fails to converge.
pub fn symmetric_eigen(a: &Array2<f64>) -> Result<SymmetricEigen, MathError> {
    let n = a.nrows();
    if n == 0 {
        return Err(MathError::EmptyData);
    }
    if a.ncols() != n {
        return Err(MathError::LinearAlgebra("matrix must be square".to_string()));
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if (a[[i, j]] - a[[j, i]]).abs() > 1e-8 * (1.0 + a[[i, j]].abs()) {
                return Err(MathError::LinearAlgebra("matrix must be symmetric".to_string()));
            }
        }
    }

    let mut m = a.clone();
    let mut v: Array2<f64> = Array2::eye(n);
    let tol = 1e-14 * frobenius(a).max(1.0);

    let mut converged = false;
    for _ in 0..MAX_SWEEPS {
        if off_diagonal_norm(&m) <= tol {
            converged = true;
            break;
        }

        for p in 0..n.saturating_sub(1) {
            for q in (p + 1)..n {
                let apq = m[[p, q]];
                if apq.abs() <= tol {
                    continue;
                }

                // Classic Jacobi rotation angle
                let theta = (m[[q, q]] - m[[p, p]]) / (2.0 * apq);
                let t = if theta >= 0.0 {
                    1.0 / (theta + (theta * theta + 1.0).sqrt())
                } else {
                    -1.0 / (-theta + (theta * theta + 1.0).sqrt())
                };
                let c = 1.0 / (t * t + 1.0).sqrt();
                let s = t * c;

                rotate(&mut m, p, q, c, s);
                for k in 0..n {
                    let vkp = v[[k, p]];
                    let vkq = v[[k, q]];
                    v[[k, p]] = c * vkp - s * vkq;
                    v[[k, q]] = s * vkp + c * vkq;
                }
            }
        }
    }

    if !converged && off_diagonal_norm(&m) > tol {
        return Err(MathError::NumericalInstability(
            "jacobi sweep did not converge".to_string(),
        ));
    }

    // Sort eigenpairs by descending eigenvalue
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| m[[j, j]].partial_cmp(&m[[i, i]]).unwrap_or(std::cmp::Ordering::Equal));

    let eigenvalues = Array1::from_iter(order.iter().map(|&i| m[[i, i]]));
    let mut eigenvectors = Array2::zeros((n, n));
    for (dst, &src) in order.iter().enumerate() {
        for k in 0..n {
            eigenvectors[[k, dst]] = v[[k, src]];
        }
    }

    Ok(SymmetricEigen { eigenvalues, eigenvectors })
}

/// Apply the two-sided rotation in the (p, q) plane.
fn rotate(m: &mut Array2<f64>, p: usize, q: usize, c: f64, s: f64) {
    let n = m.nrows();
    for k in 0..n {
        let mkp = m[[k, p]];
        let mkq = m[[k, q]];
        m[[k, p]] = c * mkp - s * mkq;
        m[[k, q]] = s * mkp + c * mkq;
    }
    for k in 0..n {
        let mpk = m[[p, k]];
        let mqk = m[[q, k]];
        m[[p, k]] = c * mpk - s * mqk;
        m[[q, k]] = s * mpk + c * mqk;
    }
}

fn frobenius(m: &Array2<f64>) -> f64 {
    m.iter().map(|x| x * x).sum::<f64>().sqrt()
}

fn off_diagonal_norm(m: &Array2<f64>) -> f64 {
    let n = m.nrows();
    let mut sum = 0.0;
    for i in 0..n {
        for j in 0..n {
            if i != j {
                sum += m[[i, j]] * m[[i, j]];
            }
        }
    }
    sum.sqrt()
}
