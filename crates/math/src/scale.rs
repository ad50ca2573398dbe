//! Feature standardization.

use fondra_traits::FeatureTransform;
use ndarray::{Array1, Array2, Axis};

use crate::MathError;

/// Column-wise standardizer: subtract the fitted mean, divide by the
/// fitted sample standard deviation.
///
/// Fitting happens on training rows only; the same (mean, std) pair is
/// applied to every later matrix, so no test statistics leak into the
/// training transform. Zero-variance columns are centered but left
/// unscaled.
#[derive(Debug, Clone, Default)]
pub struct StandardScaler {
    fitted: Option<Fitted>,
}

#[derive(Debug, Clone)]
struct Fitted {
    means: Array1<f64>,
    scales: Array1<f64>,
}

impl StandardScaler {
    /// Create an unfitted scaler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fitted per-column means, if fitted.
    #[must_use]
    pub fn means(&self) -> Option<&Array1<f64>> {
        self.fitted.as_ref().map(|f| &f.means)
    }

    /// Fitted per-column scales, if fitted.
    #[must_use]
    pub fn scales(&self) -> Option<&Array1<f64>> {
        self.fitted.as_ref().map(|f| &f.scales)
    }
}

impl FeatureTransform for StandardScaler {
    type Error = MathError;

    fn fit(&mut self, x: &Array2<f64>) -> Result<(), MathError> {
        let n = x.nrows();
        if n < 2 {
            return Err(MathError::InsufficientData { required: 2, actual: n });
        }

        let means = x.mean_axis(Axis(0)).ok_or(MathError::EmptyData)?;
        let mut scales = Array1::ones(x.ncols());
        for (j, col) in x.axis_iter(Axis(1)).enumerate() {
            let m = means[j];
            let ss: f64 = col.iter().map(|v| (v - m).powi(2)).sum();
            let std = (ss / (n as f64 - 1.0)).sqrt();
            if std > 0.0 {
                scales[j] = std;
            }
        }

        self.fitted = Some(Fitted { means, scales });
        Ok(())
    }

    fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>, MathError> {
        let Some(fitted) = &self.fitted else {
            return Err(MathError::NotFitted);
        };
        if x.ncols() != fitted.means.len() {
            return Err(MathError::DimensionMismatch {
                expected: fitted.means.len(),
                actual: x.ncols(),
            });
        }

        let mut out = x.clone();
        for (j, mut col) in out.axis_iter_mut(Axis(1)).enumerate() {
            let m = fitted.means[j];
            let s = fitted.scales[j];
            col.mapv_inplace(|v| (v - m) / s);
        }
        Ok(out)
    }
}
