#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fondra/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod split;
pub use split::{TrainTestSplit, train_test_split};

mod pca;
pub use pca::Pca;

mod regression;
pub use regression::{LinearRegression, RegressionFit};

mod pipeline;
pub use pipeline::{AnalysisConfig, FactorAnalysis, FactorAnalysisReport};

mod error;
pub use error::ModelError;

/// Re-export commonly used types.
pub mod prelude {
    pub use fondra_traits::FeatureTransform;

    pub use super::{AnalysisConfig, FactorAnalysis, FactorAnalysisReport, ModelError};
}
