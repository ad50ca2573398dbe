//! Seeded train/test splitting.

use ndarray::{Array1, Array2, Axis};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::ModelError;

/// Row partition of a feature matrix and target vector.
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    /// Training features.
    pub x_train: Array2<f64>,
    /// Held-out features.
    pub x_test: Array2<f64>,
    /// Training targets.
    pub y_train: Array1<f64>,
    /// Held-out targets.
    pub y_test: Array1<f64>,
}

/// Shuffle rows with a seeded generator and split them into train and
/// test partitions.
///
/// The shuffle treats rows as i.i.d., which ignores the temporal ordering
/// of daily returns; a time-aware split would hold out the most recent
/// rows instead. This matches the reference pipeline and is a known
/// methodological limitation, not an accident.
///
/// # Arguments
/// * `x` - Feature matrix (n x p)
/// * `y` - Target vector (n,)
/// * `test_fraction` - Fraction of rows held out, in (0, 1)
/// * `seed` - Seed for the shuffle; equal seeds give equal splits
///
/// # Errors
/// Returns `ModelError::InvalidConfig` for a fraction outside (0, 1),
/// a dimension mismatch for unequal row counts, or
/// `ModelError::InsufficientData` when either partition would be empty.
pub fn train_test_split(
    x: &Array2<f64>,
    y: &Array1<f64>,
    test_fraction: f64,
    seed: u64,
) -> Result<TrainTestSplit, ModelError> {
    let n = x.nrows();
    if y.len() != n {
        return Err(ModelError::DimensionMismatch(format!(
            "{} feature rows vs {} targets",
            n,
            y.len()
        )));
    }
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(ModelError::InvalidConfig(
            "test_fraction must be in (0, 1)".to_string(),
        ));
    }

    let n_test = ((n as f64) * test_fraction).ceil() as usize;
    let n_train = n - n_test;
    if n_train == 0 || n_test == 0 {
        return Err(ModelError::InsufficientData { required: 2, actual: n });
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let (test_idx, train_idx) = indices.split_at(n_test);

    Ok(TrainTestSplit {
        x_train: x.select(Axis(0), train_idx),
        x_test: x.select(Axis(0), test_idx),
        y_train: train_idx.iter().map(|&i| y[i]).collect(),
        y_test: test_idx.iter().map(|&i| y[i]).collect(),
    })
}
