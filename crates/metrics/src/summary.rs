//! Per-window metric summaries for display.
//!
//! This is the shape handed to the dashboard collaborator: a small fixed
//! set of named scalars per window, each individually optional. A metric
//! that cannot be computed for a window (too little history, no negative
//! returns, constant benchmark) renders as unavailable; it never aborts
//! the other metrics or windows.

use std::fmt;

use fondra_primitives::{TimeSeries, WindowSpec};

use crate::{
    alpha, annualized_return, beta, cumulative_returns, max_drawdown, sharpe_ratio,
    sortino_ratio, tracking_error, volatility, window_filter,
};

/// Format a percent quantity with two decimals, e.g. `"12.34%"`.
#[must_use]
pub fn percent_string(percent: f64) -> String {
    format!("{percent:.2}%")
}

fn fmt_opt_percent(f: &mut fmt::Formatter<'_>, label: &str, value: Option<f64>) -> fmt::Result {
    match value {
        Some(v) => writeln!(f, "  {label:<18} {:>10}", percent_string(v)),
        None => writeln!(f, "  {label:<18} {:>10}", "n/a"),
    }
}

fn fmt_opt_ratio(f: &mut fmt::Formatter<'_>, label: &str, value: Option<f64>) -> fmt::Result {
    match value {
        Some(v) => writeln!(f, "  {label:<18} {v:>10.2}"),
        None => writeln!(f, "  {label:<18} {:>10}", "n/a"),
    }
}

/// Metrics for one analysis window, each individually optional.
#[derive(Debug, Clone)]
pub struct WindowSummary {
    /// Window label (e.g. "YTD", "1Y").
    pub window: String,
    /// Total compounded return over the window, percent.
    pub cumulative_return: Option<f64>,
    /// Annualized return, fraction.
    pub annualized_return: Option<f64>,
    /// Annualized volatility, percent.
    pub volatility: Option<f64>,
    /// Sharpe ratio.
    pub sharpe: Option<f64>,
    /// Sortino ratio.
    pub sortino: Option<f64>,
    /// Beta against the benchmark.
    pub beta: Option<f64>,
    /// Alpha against the benchmark, percent per day.
    pub alpha: Option<f64>,
    /// Maximum drawdown, fraction.
    pub max_drawdown: Option<f64>,
    /// Annualized tracking error, percent.
    pub tracking_error: Option<f64>,
}

impl WindowSummary {
    /// Compute every metric for one window over pre-derived return series.
    ///
    /// The three inputs are filtered to the resolved window and aligned to
    /// their common dates; each metric then computes independently, with
    /// failures recorded as `None`.
    #[must_use]
    pub fn compute(
        window: &WindowSpec,
        fund_returns: &TimeSeries,
        benchmark_returns: &TimeSeries,
        risk_free: &TimeSeries,
    ) -> Self {
        let mut summary = Self::empty(window.label());

        let Some((start, end)) = window.resolve(fund_returns) else {
            return summary;
        };

        let fund = window_filter(fund_returns, start, end);
        let bench = window_filter(benchmark_returns, start, end);
        let rf = window_filter(risk_free, start, end);

        // Three-way date intersection, pairing values index-for-index
        let (fund_fb, bench_fb) = fund.align(&bench);
        let (fund_all, rf_all) = fund_fb.align(&rf);
        let (bench_all, _) = bench_fb.align(&fund_all);

        if fund_all.is_empty() {
            return summary;
        }

        let cumulative = cumulative_returns(&fund_all).ok();

        summary.cumulative_return =
            cumulative.as_ref().and_then(TimeSeries::last_value);
        summary.annualized_return = annualized_return(&fund_all).ok();
        summary.volatility = volatility(&fund_all).ok();
        summary.sharpe = sharpe_ratio(&fund_all, &rf_all).ok();
        summary.sortino = sortino_ratio(&fund_all, &rf_all).ok();
        summary.beta = beta(&fund_all, &bench_all, &rf_all).ok();
        summary.alpha = alpha(&fund_all, &bench_all, &rf_all).ok();
        summary.max_drawdown = cumulative.as_ref().and_then(|c| max_drawdown(c).ok());
        summary.tracking_error = tracking_error(&fund_all, &bench_all).ok();

        summary
    }

    fn empty(label: &str) -> Self {
        Self {
            window: label.to_string(),
            cumulative_return: None,
            annualized_return: None,
            volatility: None,
            sharpe: None,
            sortino: None,
            beta: None,
            alpha: None,
            max_drawdown: None,
            tracking_error: None,
        }
    }

    /// Whether any metric was computable for this window.
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.cumulative_return.is_some()
            || self.annualized_return.is_some()
            || self.volatility.is_some()
    }
}

impl fmt::Display for WindowSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.window)?;
        fmt_opt_percent(f, "Return", self.cumulative_return)?;
        fmt_opt_percent(f, "Annualized", self.annualized_return.map(|r| r * 100.0))?;
        fmt_opt_percent(f, "Volatility", self.volatility)?;
        fmt_opt_ratio(f, "Sharpe", self.sharpe)?;
        fmt_opt_ratio(f, "Sortino", self.sortino)?;
        fmt_opt_ratio(f, "Beta", self.beta)?;
        fmt_opt_percent(f, "Alpha", self.alpha)?;
        fmt_opt_percent(f, "Max drawdown", self.max_drawdown.map(|d| d * 100.0))?;
        fmt_opt_percent(f, "Tracking error", self.tracking_error)
    }
}

/// Window summaries for one fund against one benchmark.
#[derive(Debug, Clone)]
pub struct FundReport {
    /// Fund name.
    pub fund: String,
    /// One summary per requested window, in request order.
    pub windows: Vec<WindowSummary>,
}

impl FundReport {
    /// Compute summaries for every requested window.
    ///
    /// Windows resolve independently; a window with no usable data still
    /// appears in the report, with every metric unavailable.
    #[must_use]
    pub fn compute(
        fund: impl Into<String>,
        windows: &[WindowSpec],
        fund_returns: &TimeSeries,
        benchmark_returns: &TimeSeries,
        risk_free: &TimeSeries,
    ) -> Self {
        let windows = windows
            .iter()
            .map(|w| WindowSummary::compute(w, fund_returns, benchmark_returns, risk_free))
            .collect();
        Self { fund: fund.into(), windows }
    }
}

impl fmt::Display for FundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.fund)?;
        for summary in &self.windows {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use fondra_primitives::{Date, WindowStart};
    use ndarray::Array1;

    use super::*;

    fn series(values: Vec<f64>) -> TimeSeries {
        let start = Date::from_ymd_opt(2024, 1, 1).unwrap();
        let dates =
            (0..values.len()).map(|i| start + chrono::Duration::days(i as i64)).collect();
        TimeSeries::new(dates, Array1::from_vec(values)).unwrap()
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(percent_string(12.3419), "12.34%");
        assert_eq!(percent_string(-3.5), "-3.50%");
    }

    #[test]
    fn summary_computes_available_metrics() {
        let fund = series(vec![1.0, -0.5, 2.0, 0.25, -1.5, 0.75]);
        let bench = series(vec![0.8, -0.4, 1.5, 0.3, -1.2, 0.6]);
        let rf = series(vec![0.0; 6]);

        let window = WindowSpec::new("all", WindowStart::TradingDays(6));
        let summary = WindowSummary::compute(&window, &fund, &bench, &rf);

        assert!(summary.has_data());
        assert!(summary.sharpe.is_some());
        assert!(summary.beta.is_some());
        assert!(summary.max_drawdown.is_some());
    }

    #[test]
    fn degenerate_metric_is_none_not_fatal() {
        // All-positive fund returns: Sortino unavailable, the rest compute
        let fund = series(vec![1.0, 0.5, 2.0, 0.25, 1.5]);
        let bench = series(vec![0.8, -0.4, 1.5, 0.3, -1.2]);
        let rf = series(vec![0.0; 5]);

        let window = WindowSpec::new("all", WindowStart::TradingDays(5));
        let summary = WindowSummary::compute(&window, &fund, &bench, &rf);

        assert!(summary.sortino.is_none());
        assert!(summary.sharpe.is_some());
        assert!(summary.cumulative_return.is_some());
    }

    #[test]
    fn empty_window_reports_unavailable() {
        let fund = series(vec![1.0, 2.0]);
        let bench = series(vec![1.0, 2.0]);
        let rf = series(vec![0.0, 0.0]);

        let future = Date::from_ymd_opt(2030, 1, 1).unwrap();
        let window = WindowSpec::new("future", WindowStart::Absolute(future));
        let summary = WindowSummary::compute(&window, &fund, &bench, &rf);

        assert!(!summary.has_data());
        assert!(summary.to_string().contains("n/a"));
    }

    #[test]
    fn report_isolates_windows() {
        let fund = series(vec![1.0, -0.5, 2.0, 0.25, -1.5, 0.75]);
        let bench = series(vec![0.8, -0.4, 1.5, 0.3, -1.2, 0.6]);
        let rf = series(vec![0.0; 6]);

        let future = Date::from_ymd_opt(2030, 1, 1).unwrap();
        let windows = vec![
            WindowSpec::new("empty", WindowStart::Absolute(future)),
            WindowSpec::new("all", WindowStart::TradingDays(6)),
        ];

        let report = FundReport::compute("Fund", &windows, &fund, &bench, &rf);
        assert_eq!(report.windows.len(), 2);
        assert!(!report.windows[0].has_data());
        assert!(report.windows[1].has_data());
    }

    #[test]
    fn summary_cumulative_matches_direct_computation() {
        let fund = series(vec![10.0, 10.0]);
        let bench = series(vec![0.0, 0.0]);
        let rf = series(vec![0.0, 0.0]);

        let window = WindowSpec::new("all", WindowStart::TradingDays(2));
        let summary = WindowSummary::compute(&window, &fund, &bench, &rf);
        assert_relative_eq!(summary.cumulative_return.unwrap(), 21.0, epsilon = 1e-9);
    }
}
