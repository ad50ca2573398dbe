//! Base-100 rebasing for comparison charts.

use fondra_metrics::MetricsError;
use fondra_primitives::TimeSeries;
use ndarray::Array1;

/// Rebase a percent return series to a base-100 growth index.
///
/// `index[i] = 100 * prod_{k<=i}(1 + r[k]/100)`. Two assets rebased over
/// the same window plot on a common scale regardless of their price
/// levels.
///
/// # Errors
/// Returns a series error if compounding produces a non-finite value.
pub fn rebase_100(returns: &TimeSeries) -> Result<TimeSeries, MetricsError> {
    let mut growth = 1.0;
    let index = Array1::from_iter(returns.values().iter().map(|r| {
        growth *= 1.0 + r / 100.0;
        growth * 100.0
    }));
    Ok(returns.with_values(index)?)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use fondra_primitives::Date;
    use ndarray::array;

    use super::*;

    #[test]
    fn rebase_compounds_from_100() {
        let start = Date::from_ymd_opt(2024, 1, 1).unwrap();
        let dates = (0..3).map(|i| start + chrono::Duration::days(i)).collect();
        let returns = TimeSeries::new(dates, array![10.0, -10.0, 5.0]).unwrap();

        let index = rebase_100(&returns).unwrap();
        assert_relative_eq!(index.values()[0], 110.0, epsilon = 1e-9);
        assert_relative_eq!(index.values()[1], 99.0, epsilon = 1e-9);
        assert_relative_eq!(index.values()[2], 103.95, epsilon = 1e-9);
    }
}
