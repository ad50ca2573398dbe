#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fondra/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod fund;
pub use fund::Fund;

mod benchmark;
pub use benchmark::Benchmark;

mod factor;
pub use factor::{FactorLeg, FactorSeries, RiskFree};

mod rebase;
pub use rebase::rebase_100;
