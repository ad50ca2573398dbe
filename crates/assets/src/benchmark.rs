//! Benchmark asset.

use fondra_metrics::{MetricsError, cumulative_returns, daily_returns};
use fondra_primitives::{AssetName, TimeSeries};
use fondra_traits::FinancialAsset;

/// A benchmark index: a price series with the same derived-series
/// lifecycle as a fund, minus the region tag.
#[derive(Debug, Clone)]
pub struct Benchmark {
    name: AssetName,
    prices: TimeSeries,
    returns: TimeSeries,
    cumulative: TimeSeries,
}

impl Benchmark {
    /// Build a benchmark from a cleaned price series.
    ///
    /// # Errors
    /// Returns `MetricsError::InsufficientData` for fewer than 2 price
    /// observations.
    pub fn new(
        name: impl Into<AssetName>,
        prices: TimeSeries,
    ) -> Result<Self, MetricsError> {
        let returns = daily_returns(&prices)?;
        let cumulative = cumulative_returns(&returns)?;
        Ok(Self { name: name.into(), prices, returns, cumulative })
    }

    /// The price series the benchmark was built from.
    #[must_use]
    pub const fn prices(&self) -> &TimeSeries {
        &self.prices
    }
}

impl FinancialAsset for Benchmark {
    fn name(&self) -> &AssetName {
        &self.name
    }

    fn returns(&self) -> &TimeSeries {
        &self.returns
    }

    fn cumulative_returns(&self) -> &TimeSeries {
        &self.cumulative
    }
}

#[cfg(test)]
mod tests {
    use fondra_primitives::Date;
    use ndarray::array;

    use super::*;

    #[test]
    fn benchmark_derives_returns() {
        let start = Date::from_ymd_opt(2024, 1, 1).unwrap();
        let dates = (0..4).map(|i| start + chrono::Duration::days(i)).collect();
        let prices = TimeSeries::new(dates, array![50.0, 51.0, 49.5, 52.0]).unwrap();

        let bench = Benchmark::new("SPX", prices).unwrap();
        assert_eq!(bench.name().as_str(), "SPX");
        assert_eq!(bench.returns().len(), 3);
        assert_eq!(bench.cumulative_returns().len(), 3);
    }
}
