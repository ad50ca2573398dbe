#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fondra/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod asset;
pub use asset::FinancialAsset;

mod store;
pub use store::{MemorySeriesStore, SeriesStore};

mod transform;
pub use transform::FeatureTransform;
