#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fondra/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod stats;
pub use stats::{mean, sample_covariance, sample_std, sample_variance};

mod linalg;
pub use linalg::{OlsResult, ols};

mod eigen;
pub use eigen::{SymmetricEigen, symmetric_eigen};

mod scale;
pub use scale::StandardScaler;

mod error;
pub use error::MathError;
