//! Principal component analysis.

use fondra_math::symmetric_eigen;
use fondra_traits::FeatureTransform;
use ndarray::{Array1, Array2, Axis};

use crate::ModelError;

/// Principal component analysis over a feature matrix.
///
/// Fitting eigendecomposes the sample covariance of the (centered)
/// training features and keeps the top components by explained variance.
/// Component signs are normalized so the largest-magnitude loading of
/// each component is positive, making fits deterministic.
#[derive(Debug, Clone)]
pub struct Pca {
    n_components: usize,
    fitted: Option<PcaFit>,
}

#[derive(Debug, Clone)]
struct PcaFit {
    means: Array1<f64>,
    /// Component loadings, one component per row (k x p).
    components: Array2<f64>,
    explained_variance_ratio: Array1<f64>,
}

impl Pca {
    /// Create an unfitted PCA keeping `n_components` components.
    #[must_use]
    pub const fn new(n_components: usize) -> Self {
        Self { n_components, fitted: None }
    }

    /// Number of components retained.
    #[must_use]
    pub const fn n_components(&self) -> usize {
        self.n_components
    }

    /// Component loading matrix (k x p), one row per component, if fitted.
    #[must_use]
    pub fn components(&self) -> Option<&Array2<f64>> {
        self.fitted.as_ref().map(|f| &f.components)
    }

    /// Fraction of total variance captured by each retained component,
    /// descending, if fitted. Each entry lies in [0, 1] and the entries
    /// sum to at most 1.
    #[must_use]
    pub fn explained_variance_ratio(&self) -> Option<&Array1<f64>> {
        self.fitted.as_ref().map(|f| &f.explained_variance_ratio)
    }
}

impl Default for Pca {
    fn default() -> Self {
        Self::new(2)
    }
}

impl FeatureTransform for Pca {
    type Error = ModelError;

    fn fit(&mut self, x: &Array2<f64>) -> Result<(), ModelError> {
        let n = x.nrows();
        let p = x.ncols();

        if self.n_components == 0 {
            return Err(ModelError::InvalidConfig(
                "n_components must be at least 1".to_string(),
            ));
        }
        if p < self.n_components {
            return Err(ModelError::InvalidConfig(format!(
                "{} features cannot yield {} components",
                p, self.n_components
            )));
        }
        if n < 2 {
            return Err(ModelError::InsufficientData { required: 2, actual: n });
        }

        let means = x.mean_axis(Axis(0))
            .ok_or(ModelError::InsufficientData { required: 2, actual: 0 })?;
        let centered = x - &means.clone().insert_axis(Axis(0));

        // Sample covariance of the centered features
        let covariance = centered.t().dot(&centered) / (n as f64 - 1.0);
        let eigen = symmetric_eigen(&covariance)?;

        // Covariance eigenvalues are nonnegative up to roundoff
        let eigenvalues = eigen.eigenvalues.mapv(|v| v.max(0.0));
        let total: f64 = eigenvalues.sum();

        let mut components = Array2::zeros((self.n_components, p));
        for k in 0..self.n_components {
            let column = eigen.eigenvectors.column(k);

            // Deterministic sign: largest-magnitude loading positive
            let dominant = column
                .iter()
                .fold(0.0_f64, |acc, &v| if v.abs() > acc.abs() { v } else { acc });
            let sign = if dominant < 0.0 { -1.0 } else { 1.0 };

            for j in 0..p {
                components[[k, j]] = sign * column[j];
            }
        }

        let explained_variance_ratio = if total > 0.0 {
            Array1::from_iter((0..self.n_components).map(|k| eigenvalues[k] / total))
        } else {
            Array1::zeros(self.n_components)
        };

        self.fitted = Some(PcaFit { means, components, explained_variance_ratio });
        Ok(())
    }

    fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>, ModelError> {
        let Some(fitted) = &self.fitted else {
            return Err(ModelError::NotFitted);
        };
        if x.ncols() != fitted.means.len() {
            return Err(ModelError::DimensionMismatch(format!(
                "expected {} features, got {}",
                fitted.means.len(),
                x.ncols()
            )));
        }

        let centered = x - &fitted.means.clone().insert_axis(Axis(0));
        Ok(centered.dot(&fitted.components.t()))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;

    /// Rows spread along the diagonal, with slight off-diagonal noise.
    fn sample() -> Array2<f64> {
        array![
            [2.0, 1.9],
            [-1.5, -1.6],
            [0.5, 0.45],
            [-0.5, -0.55],
            [1.0, 1.1],
            [-1.5, -1.3],
        ]
    }

    #[test]
    fn variance_ratios_are_ordered_and_bounded() {
        let mut pca = Pca::new(2);
        pca.fit(&sample()).unwrap();

        let ratio = pca.explained_variance_ratio().unwrap();
        assert!(ratio[0] >= ratio[1]);
        assert!(ratio.iter().all(|r| (0.0..=1.0).contains(r)));
        assert!(ratio.sum() <= 1.0 + 1e-12);
    }

    #[test]
    fn first_component_captures_diagonal() {
        let mut pca = Pca::new(2);
        pca.fit(&sample()).unwrap();

        // Data lies near the y = x diagonal, so the first component
        // loads both features near 1/sqrt(2)
        let components = pca.components().unwrap();
        let inv_sqrt2 = 1.0 / 2.0_f64.sqrt();
        assert_relative_eq!(components[[0, 0]].abs(), inv_sqrt2, epsilon = 0.05);
        assert_relative_eq!(components[[0, 1]].abs(), inv_sqrt2, epsilon = 0.05);

        let ratio = pca.explained_variance_ratio().unwrap();
        assert!(ratio[0] > 0.95);
    }

    #[test]
    fn fit_is_deterministic() {
        let mut a = Pca::new(2);
        let mut b = Pca::new(2);
        a.fit(&sample()).unwrap();
        b.fit(&sample()).unwrap();
        assert_eq!(a.components().unwrap(), b.components().unwrap());
    }

    #[test]
    fn transform_projects_with_train_mean() {
        let mut pca = Pca::new(1);
        let train = sample();
        pca.fit(&train).unwrap();

        let scores = pca.transform(&train).unwrap();
        assert_eq!(scores.shape(), &[6, 1]);

        // Projection of centered training data has zero mean
        let mean: f64 = scores.column(0).sum() / 6.0;
        assert_relative_eq!(mean, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn too_many_components_rejected() {
        let mut pca = Pca::new(3);
        assert!(matches!(
            pca.fit(&sample()),
            Err(ModelError::InvalidConfig(_))
        ));
    }

    #[test]
    fn transform_before_fit_rejected() {
        let pca = Pca::new(2);
        assert!(pca.transform(&sample()).is_err());
    }

    #[test]
    fn width_mismatch_rejected() {
        let mut pca = Pca::new(1);
        pca.fit(&sample()).unwrap();
        assert!(matches!(
            pca.transform(&array![[1.0, 2.0, 3.0]]),
            Err(ModelError::DimensionMismatch(_))
        ));
    }
}
