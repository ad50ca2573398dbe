//! Risk metrics over aligned return series.
//!
//! Every function here expects its series pre-aligned over a common date
//! range (same dates, same length); alignment is enforced and violations
//! surface as `MetricsError::Alignment`. Upstream, `window_filter` and
//! the dataset joins are responsible for producing aligned inputs.

use fondra_math::{mean, sample_covariance, sample_std, sample_variance};
use fondra_primitives::{TRADING_DAYS_PER_YEAR, TimeSeries};
use ndarray::Array1;

use crate::MetricsError;

fn annualize() -> f64 {
    (TRADING_DAYS_PER_YEAR as f64).sqrt()
}

fn ensure_aligned(a: &TimeSeries, b: &TimeSeries) -> Result<(), MetricsError> {
    if a.len() != b.len() {
        return Err(MetricsError::Alignment(format!(
            "lengths differ: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    if a.dates() != b.dates() {
        return Err(MetricsError::Alignment("dates differ".to_string()));
    }
    Ok(())
}

/// Annualized volatility: sample standard deviation times sqrt(252).
///
/// # Errors
/// Returns `MetricsError::InsufficientData` for fewer than 2 observations.
pub fn volatility(returns: &TimeSeries) -> Result<f64, MetricsError> {
    if returns.len() < 2 {
        return Err(MetricsError::InsufficientData { required: 2, actual: returns.len() });
    }
    Ok(sample_std(returns.values())? * annualize())
}

/// Annualized downside volatility: sample standard deviation over the
/// negative returns only.
///
/// # Errors
/// Returns `MetricsError::DegenerateVariance` when fewer than 2 returns
/// are negative; the sample deviation is undefined on that subset.
pub fn downside_volatility(returns: &TimeSeries) -> Result<f64, MetricsError> {
    let negative: Array1<f64> =
        returns.values().iter().copied().filter(|r| *r < 0.0).collect();
    if negative.len() < 2 {
        return Err(MetricsError::DegenerateVariance(format!(
            "{} negative returns, need at least 2",
            negative.len()
        )));
    }
    Ok(sample_std(&negative)? * annualize())
}

/// Elementwise excess returns over the risk-free rate.
///
/// # Errors
/// Returns `MetricsError::Alignment` if the two series are not aligned
/// index-for-index.
pub fn excess_returns(
    returns: &TimeSeries,
    risk_free: &TimeSeries,
) -> Result<TimeSeries, MetricsError> {
    ensure_aligned(returns, risk_free)?;
    Ok(returns.with_values(returns.values() - risk_free.values())?)
}

/// Beta of a fund against a benchmark.
///
/// Computed as `cov(fund_excess, bench_excess) / var(bench_excess)` with
/// both series expressed as excess over the risk-free rate, sample
/// convention on covariance and variance alike.
///
/// # Errors
/// Returns alignment errors for mismatched inputs and
/// `MetricsError::DegenerateVariance` for a constant benchmark.
pub fn beta(
    fund_returns: &TimeSeries,
    benchmark_returns: &TimeSeries,
    risk_free: &TimeSeries,
) -> Result<f64, MetricsError> {
    let fund_excess = excess_returns(fund_returns, risk_free)?;
    let bench_excess = excess_returns(benchmark_returns, risk_free)?;
    ensure_aligned(&fund_excess, &bench_excess)?;

    let var = sample_variance(bench_excess.values())?;
    if var <= f64::EPSILON {
        return Err(MetricsError::DegenerateVariance(
            "benchmark excess returns have zero variance".to_string(),
        ));
    }

    Ok(sample_covariance(fund_excess.values(), bench_excess.values())? / var)
}

/// Alpha of a fund against a benchmark:
/// `mean(fund_excess) - beta * mean(bench_excess)`.
///
/// # Errors
/// Propagates alignment and degenerate-variance errors from [`beta`].
pub fn alpha(
    fund_returns: &TimeSeries,
    benchmark_returns: &TimeSeries,
    risk_free: &TimeSeries,
) -> Result<f64, MetricsError> {
    let b = beta(fund_returns, benchmark_returns, risk_free)?;
    let fund_excess = excess_returns(fund_returns, risk_free)?;
    let bench_excess = excess_returns(benchmark_returns, risk_free)?;
    Ok(mean(fund_excess.values())? - b * mean(bench_excess.values())?)
}

/// Maximum drawdown of a cumulative percent return series, as a fraction.
///
/// Operates on the wealth index `1 + cum/100`:
/// `min_i (wealth[i] / running_max(wealth[0..=i]) - 1)`. Zero for a
/// monotonically non-decreasing series; -1 means total loss.
///
/// # Errors
/// Returns `MetricsError::InsufficientData` for an empty series.
pub fn max_drawdown(cumulative: &TimeSeries) -> Result<f64, MetricsError> {
    if cumulative.is_empty() {
        return Err(MetricsError::InsufficientData { required: 1, actual: 0 });
    }

    let mut peak = f64::NEG_INFINITY;
    let mut worst: f64 = 0.0;
    for cum in cumulative.values() {
        let wealth = 1.0 + cum / 100.0;
        peak = peak.max(wealth);
        worst = worst.min(wealth / peak - 1.0);
    }
    Ok(worst)
}

/// Maximum drawdown of a fund relative to a benchmark, as a fraction.
///
/// `min_i (fund_wealth[i] / bench_wealth[i] - 1)` over the date
/// intersection of the two cumulative series.
///
/// # Errors
/// Returns `MetricsError::InsufficientData` if the intersection is empty.
pub fn relative_max_drawdown(
    fund_cumulative: &TimeSeries,
    benchmark_cumulative: &TimeSeries,
) -> Result<f64, MetricsError> {
    let (fund, bench) = fund_cumulative.align(benchmark_cumulative);
    if fund.is_empty() {
        return Err(MetricsError::InsufficientData { required: 1, actual: 0 });
    }

    let mut worst = f64::INFINITY;
    for (f, b) in fund.values().iter().zip(bench.values()) {
        let ratio = (1.0 + f / 100.0) / (1.0 + b / 100.0);
        worst = worst.min(ratio - 1.0);
    }
    Ok(worst)
}

/// Annualized tracking error: standard deviation of the return
/// difference, times sqrt(252).
///
/// # Errors
/// Returns alignment errors for mismatched inputs.
pub fn tracking_error(
    fund_returns: &TimeSeries,
    benchmark_returns: &TimeSeries,
) -> Result<f64, MetricsError> {
    ensure_aligned(fund_returns, benchmark_returns)?;
    let diff = fund_returns.values() - benchmark_returns.values();
    Ok(sample_std(&diff)? * annualize())
}

/// Sample covariance between two aligned series.
///
/// # Errors
/// Returns alignment errors for mismatched inputs.
pub fn covariance(a: &TimeSeries, b: &TimeSeries) -> Result<f64, MetricsError> {
    ensure_aligned(a, b)?;
    Ok(sample_covariance(a.values(), b.values())?)
}
