#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fondra/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod name;
pub use name::AssetName;

mod series;
pub use series::{SeriesError, TimeSeries};

mod region;
pub use region::Region;

mod window;
pub use window::{WindowSpec, WindowStart};

/// Re-export common date type.
pub type Date = chrono::NaiveDate;

/// Trading days per year used for every annualization in the workspace.
///
/// Fixed by convention; leap years and non-equity calendars are out of scope.
pub const TRADING_DAYS_PER_YEAR: usize = 252;
