//! The factor decomposition pipeline.

use fondra_dataset::FactorDataset;
use fondra_math::StandardScaler;
use fondra_primitives::Region;
use fondra_traits::FeatureTransform;
use ndarray::{Array1, Array2};

use crate::{LinearRegression, ModelError, Pca, RegressionFit, train_test_split};

/// Configuration for the factor decomposition pipeline.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Number of principal components retained.
    pub n_components: usize,
    /// Fraction of rows held out for the test partition.
    pub test_fraction: f64,
    /// Seed for the shuffle split.
    pub seed: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { n_components: 2, test_fraction: 0.2, seed: 0 }
    }
}

/// The factor decomposition pipeline: split, standardize, project,
/// regress.
///
/// Runs as a fixed sequence of immutable stages over an assembled
/// [`FactorDataset`]: the region-tagged feature columns are split 80/20
/// with a seeded shuffle, standardized with statistics fitted on the
/// training rows only, projected onto the top principal components, and
/// the training targets are regressed on the training scores. The
/// completed regression is part of the terminal stage even though
/// rendering only consumes the held-out scores.
#[derive(Debug, Clone)]
pub struct FactorAnalysis {
    config: AnalysisConfig,
}

/// Everything the terminal pipeline stage exposes.
#[derive(Debug, Clone)]
pub struct FactorAnalysisReport {
    /// Held-out component scores (n_test x k).
    pub test_scores: Array2<f64>,
    /// Held-out target returns (n_test,).
    pub test_targets: Array1<f64>,
    /// Component loadings (k x p), one row per component.
    pub loadings: Array2<f64>,
    /// Names of the original feature columns, matching loading columns.
    pub feature_names: Vec<String>,
    /// Fraction of variance captured per component, descending.
    pub explained_variance_ratio: Array1<f64>,
    /// Regression of training targets on training component scores.
    pub regression: RegressionFit,
}

impl FactorAnalysis {
    /// Create a pipeline with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::default())
    }

    /// Create a pipeline with a custom configuration.
    #[must_use]
    pub const fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run the pipeline for a fund region over an assembled dataset.
    ///
    /// # Errors
    /// Returns `ModelError` if no feature columns match the region, the
    /// joined dataset is too small to split, or a numeric stage fails.
    pub fn run(
        &self,
        dataset: &FactorDataset,
        region: Region,
    ) -> Result<FactorAnalysisReport, ModelError> {
        let (features, feature_names) = dataset.region_features(region)?;
        let targets = dataset.target()?;

        let split =
            train_test_split(&features, &targets, self.config.test_fraction, self.config.seed)?;

        let mut scaler = StandardScaler::new();
        let train_scaled = scaler.fit_transform(&split.x_train)?;
        let test_scaled = scaler.transform(&split.x_test)?;

        let mut pca = Pca::new(self.config.n_components);
        let train_scores = pca.fit_transform(&train_scaled)?;
        let test_scores = pca.transform(&test_scaled)?;

        let regression = LinearRegression::fit(&train_scores, &split.y_train)?;

        let loadings = pca.components().cloned().ok_or(ModelError::NotFitted)?;
        let explained_variance_ratio =
            pca.explained_variance_ratio().cloned().ok_or(ModelError::NotFitted)?;

        Ok(FactorAnalysisReport {
            test_scores,
            test_targets: split.y_test,
            loadings,
            feature_names,
            explained_variance_ratio,
            regression,
        })
    }
}

impl Default for FactorAnalysis {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use fondra_primitives::{Date, TimeSeries};
    use ndarray::Array1;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;

    fn series(start: Date, values: Vec<f64>) -> TimeSeries {
        let dates =
            (0..values.len()).map(|i| start + chrono::Duration::days(i as i64)).collect();
        TimeSeries::new(dates, Array1::from_vec(values)).unwrap()
    }

    /// A 60-row dataset where the fund loads on two US factors.
    fn sample_dataset() -> FactorDataset {
        let start = Date::from_ymd_opt(2023, 1, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let n = 60;
        let mkt: Vec<f64> = (0..n).map(|_| rng.r#gen::<f64>() * 2.0 - 1.0).collect();
        let smb: Vec<f64> = (0..n).map(|_| rng.r#gen::<f64>() * 1.0 - 0.5).collect();
        let mkt_global: Vec<f64> = (0..n).map(|_| rng.r#gen::<f64>() * 2.0 - 1.0).collect();
        let fund: Vec<f64> = (0..n)
            .map(|i| 1.2 * mkt[i] + 0.4 * smb[i] + rng.r#gen::<f64>() * 0.1)
            .collect();
        let rf = vec![0.01; n];

        FactorDataset::build(
            ("Fund", &series(start, fund)),
            &[
                ("MKT US", &series(start, mkt)),
                ("SMB US", &series(start, smb)),
                ("MKT Global", &series(start, mkt_global)),
            ],
            ("Risk Free Rate", &series(start, rf)),
        )
        .unwrap()
    }

    #[test]
    fn pipeline_produces_report_shape() {
        let dataset = sample_dataset();
        let report = FactorAnalysis::new().run(&dataset, Region::Us).unwrap();

        assert_eq!(report.feature_names, vec!["MKT US".to_string(), "SMB US".to_string()]);
        assert_eq!(report.test_scores.ncols(), 2);
        assert_eq!(report.test_scores.nrows(), report.test_targets.len());
        assert_eq!(report.loadings.shape(), &[2, 2]);
        assert_eq!(report.explained_variance_ratio.len(), 2);
        assert_eq!(report.regression.coefficients.len(), 2);
    }

    #[test]
    fn variance_ratios_descend() {
        let dataset = sample_dataset();
        let report = FactorAnalysis::new().run(&dataset, Region::Us).unwrap();

        let ratio = &report.explained_variance_ratio;
        assert!(ratio[0] >= ratio[1]);
        assert!(ratio.sum() <= 1.0 + 1e-12);
        assert!(ratio.iter().all(|r| (0.0..=1.0).contains(r)));
    }

    #[test]
    fn pipeline_is_reproducible() {
        let dataset = sample_dataset();
        let pipeline = FactorAnalysis::new();

        let a = pipeline.run(&dataset, Region::Us).unwrap();
        let b = pipeline.run(&dataset, Region::Us).unwrap();
        assert_eq!(a.test_scores, b.test_scores);
        assert_eq!(a.test_targets, b.test_targets);
        assert_eq!(a.loadings, b.loadings);
    }

    #[test]
    fn global_region_selects_global_columns() {
        let dataset = sample_dataset();
        let config = AnalysisConfig { n_components: 1, ..AnalysisConfig::default() };
        let report =
            FactorAnalysis::with_config(config).run(&dataset, Region::Global).unwrap();

        assert_eq!(report.feature_names, vec!["MKT Global".to_string()]);
        assert_eq!(report.loadings.shape(), &[1, 1]);
    }

    #[test]
    fn seed_changes_partition() {
        let dataset = sample_dataset();
        let a = FactorAnalysis::new().run(&dataset, Region::Us).unwrap();
        let b = FactorAnalysis::with_config(AnalysisConfig {
            seed: 99,
            ..AnalysisConfig::default()
        })
        .run(&dataset, Region::Us)
        .unwrap();

        assert_ne!(a.test_targets, b.test_targets);
    }
}
