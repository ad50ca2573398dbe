#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fondra/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod returns;
pub use returns::{cumulative_returns, daily_returns};

mod risk;
pub use risk::{
    alpha, beta, covariance, downside_volatility, excess_returns, max_drawdown,
    relative_max_drawdown, tracking_error, volatility,
};

mod performance;
pub use performance::{
    annualized_return, cumulative_return_over_window, sharpe_ratio, sortino_ratio,
};

mod window;
pub use window::window_filter;

mod summary;
pub use summary::{FundReport, WindowSummary, percent_string};

mod error;
pub use error::MetricsError;
