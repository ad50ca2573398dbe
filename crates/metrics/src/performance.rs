//! Performance metrics.

use fondra_math::mean;
use fondra_primitives::{TRADING_DAYS_PER_YEAR, TimeSeries, WindowSpec};

use crate::{
    MetricsError, cumulative_returns, downside_volatility, excess_returns, volatility,
    window_filter,
};

/// Annualized return of a percent return series, as a fraction:
/// `(1 + mean(r/100))^252 - 1`.
///
/// # Errors
/// Returns `MetricsError` for an empty series.
pub fn annualized_return(returns: &TimeSeries) -> Result<f64, MetricsError> {
    let daily_mean = mean(returns.values())? / 100.0;
    Ok((1.0 + daily_mean).powi(TRADING_DAYS_PER_YEAR as i32) - 1.0)
}

/// Sharpe ratio: `mean(excess) / volatility * sqrt(252)`.
///
/// # Errors
/// Returns alignment errors for mismatched inputs and
/// `MetricsError::DegenerateVariance` for a constant return series.
pub fn sharpe_ratio(
    returns: &TimeSeries,
    risk_free: &TimeSeries,
) -> Result<f64, MetricsError> {
    let excess = excess_returns(returns, risk_free)?;
    let vol = volatility(returns)?;
    if vol <= f64::EPSILON {
        return Err(MetricsError::DegenerateVariance(
            "return series has zero volatility".to_string(),
        ));
    }
    Ok(mean(excess.values())? / vol * (TRADING_DAYS_PER_YEAR as f64).sqrt())
}

/// Sortino ratio: Sharpe numerator over downside volatility.
///
/// # Errors
/// Returns alignment errors for mismatched inputs and
/// `MetricsError::DegenerateVariance` when downside volatility is
/// undefined or zero.
pub fn sortino_ratio(
    returns: &TimeSeries,
    risk_free: &TimeSeries,
) -> Result<f64, MetricsError> {
    let excess = excess_returns(returns, risk_free)?;
    let downside = downside_volatility(returns)?;
    if downside <= f64::EPSILON {
        return Err(MetricsError::DegenerateVariance(
            "downside volatility is zero".to_string(),
        ));
    }
    Ok(mean(excess.values())? / downside * (TRADING_DAYS_PER_YEAR as f64).sqrt())
}

/// Total compounded return over a window, in percent.
///
/// Resolves the window against the return series, filters inclusively,
/// compounds over the slice, and reports the final cumulative value.
///
/// # Errors
/// Returns `MetricsError::MissingWindowData` when the resolved window
/// contains no observations.
pub fn cumulative_return_over_window(
    returns: &TimeSeries,
    window: &WindowSpec,
) -> Result<f64, MetricsError> {
    let Some((start, end)) = window.resolve(returns) else {
        return Err(MetricsError::MissingWindowData(window.label().to_string()));
    };

    let slice = window_filter(returns, start, end);
    if slice.is_empty() {
        return Err(MetricsError::MissingWindowData(window.label().to_string()));
    }

    let cum = cumulative_returns(&slice)?;
    cum.last_value().ok_or_else(|| {
        MetricsError::MissingWindowData(window.label().to_string())
    })
}
