//! Feature transformation trait definition.

use ndarray::Array2;

/// Fit/transform seam over feature matrices.
///
/// The contract mirrors the train/test discipline of the analysis
/// pipeline: `fit` learns parameters from the training rows only, and the
/// same fitted transform is then applied to both splits. Nothing from a
/// later `transform` call leaks back into the fitted state.
pub trait FeatureTransform: Send + Sync {
    /// Error type produced by fitting or applying the transform.
    type Error;

    /// Learn transform parameters from a training matrix (rows are
    /// observations, columns are features).
    ///
    /// # Errors
    /// Returns `Self::Error` if the matrix is unusable (e.g. empty).
    fn fit(&mut self, x: &Array2<f64>) -> Result<(), Self::Error>;

    /// Apply the fitted transform to a matrix with the same column layout.
    ///
    /// # Errors
    /// Returns `Self::Error` if called before `fit` or on a matrix whose
    /// width differs from the fitted one.
    fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>, Self::Error>;

    /// Fit on a matrix and transform it in one step.
    ///
    /// # Errors
    /// Propagates errors from `fit` and `transform`.
    fn fit_transform(&mut self, x: &Array2<f64>) -> Result<Array2<f64>, Self::Error> {
        self.fit(x)?;
        self.transform(x)
    }
}
