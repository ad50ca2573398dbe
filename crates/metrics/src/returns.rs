//! Daily and cumulative return computation.

use fondra_primitives::TimeSeries;
use ndarray::Array1;

use crate::MetricsError;

/// Daily simple returns of a price/NAV series, in percent.
///
/// `return[i] = (value[i] - value[i-1]) / value[i-1] * 100`; the first
/// input row has no prior value and is dropped, so the output has length
/// n - 1 and starts at the second input date.
///
/// # Errors
/// Returns `MetricsError::InsufficientData` for fewer than 2 observations,
/// or a series error if a zero price makes a return non-finite.
pub fn daily_returns(prices: &TimeSeries) -> Result<TimeSeries, MetricsError> {
    let n = prices.len();
    if n < 2 {
        return Err(MetricsError::InsufficientData { required: 2, actual: n });
    }

    let values = prices.values();
    let returns =
        Array1::from_iter((1..n).map(|i| (values[i] - values[i - 1]) / values[i - 1] * 100.0));
    let dates = prices.dates()[1..].to_vec();

    Ok(TimeSeries::new(dates, returns)?)
}

/// Cumulative compounded returns of a percent return series.
///
/// `cum[i] = (prod_{k<=i}(1 + r[k]/100) - 1) * 100`, so `cum[0]` equals
/// the first return. Compounding, not summation.
///
/// # Errors
/// Returns a series error if compounding overflows to a non-finite value.
pub fn cumulative_returns(returns: &TimeSeries) -> Result<TimeSeries, MetricsError> {
    let mut growth = 1.0;
    let cumulative = Array1::from_iter(returns.values().iter().map(|r| {
        growth *= 1.0 + r / 100.0;
        (growth - 1.0) * 100.0
    }));

    Ok(returns.with_values(cumulative)?)
}
