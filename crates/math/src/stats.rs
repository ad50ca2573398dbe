//! Sample statistics.
//!
//! The whole workspace uses the sample convention (ddof = 1) so that beta,
//! covariance and variance stay dimensionally consistent.

use ndarray::Array1;

use crate::MathError;

/// Arithmetic mean.
///
/// # Errors
/// Returns `MathError::EmptyData` for an empty array.
pub fn mean(data: &Array1<f64>) -> Result<f64, MathError> {
    data.mean().ok_or(MathError::EmptyData)
}

/// Sample variance (ddof = 1).
///
/// # Errors
/// Returns `MathError::InsufficientData` for fewer than 2 observations.
pub fn sample_variance(data: &Array1<f64>) -> Result<f64, MathError> {
    let n = data.len();
    if n < 2 {
        return Err(MathError::InsufficientData { required: 2, actual: n });
    }
    let m = data.mean().unwrap_or(0.0);
    let ss: f64 = data.iter().map(|x| (x - m).powi(2)).sum();
    Ok(ss / (n as f64 - 1.0))
}

/// Sample standard deviation (ddof = 1).
///
/// # Errors
/// Returns `MathError::InsufficientData` for fewer than 2 observations.
pub fn sample_std(data: &Array1<f64>) -> Result<f64, MathError> {
    sample_variance(data).map(f64::sqrt)
}

/// Sample covariance between two equal-length arrays (ddof = 1).
///
/// # Errors
/// Returns `MathError::DimensionMismatch` for unequal lengths and
/// `MathError::InsufficientData` for fewer than 2 observations.
pub fn sample_covariance(a: &Array1<f64>, b: &Array1<f64>) -> Result<f64, MathError> {
    if a.len() != b.len() {
        return Err(MathError::DimensionMismatch { expected: a.len(), actual: b.len() });
    }
    let n = a.len();
    if n < 2 {
        return Err(MathError::InsufficientData { required: 2, actual: n });
    }
    let ma = a.mean().unwrap_or(0.0);
    let mb = b.mean().unwrap_or(0.0);
    let cross: f64 = a.iter().zip(b.iter()).map(|(x, y)| (x - ma) * (y - mb)).sum();
    Ok(cross / (n as f64 - 1.0))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;
    use rstest::rstest;

    use super::*;

    #[test]
    fn mean_basic() {
        assert_relative_eq!(mean(&array![1.0, 2.0, 3.0]).unwrap(), 2.0);

        let empty: Array1<f64> = array![];
        assert!(matches!(mean(&empty), Err(MathError::EmptyData)));
    }

    #[test]
    fn variance_matches_hand_computation() {
        // var([1,2,3,4,5]) with ddof=1 is 2.5
        let data = array![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(sample_variance(&data).unwrap(), 2.5, epsilon = 1e-12);
        assert_relative_eq!(sample_std(&data).unwrap(), 2.5_f64.sqrt(), epsilon = 1e-12);
    }

    #[rstest]
    #[case(array![])]
    #[case(array![1.0])]
    fn variance_requires_two_observations(#[case] data: Array1<f64>) {
        assert!(matches!(
            sample_variance(&data),
            Err(MathError::InsufficientData { required: 2, .. })
        ));
    }

    #[test]
    fn covariance_of_self_is_variance() {
        let data = array![0.5, -1.0, 2.0, 0.25, 1.5];
        assert_relative_eq!(
            sample_covariance(&data, &data).unwrap(),
            sample_variance(&data).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn covariance_length_mismatch() {
        let result = sample_covariance(&array![1.0, 2.0], &array![1.0]);
        assert!(matches!(result, Err(MathError::DimensionMismatch { expected: 2, actual: 1 })));
    }

    #[test]
    fn covariance_sign() {
        let a = array![1.0, 2.0, 3.0];
        let b = array![3.0, 2.0, 1.0];
        assert!(sample_covariance(&a, &b).unwrap() < 0.0);
    }
}
