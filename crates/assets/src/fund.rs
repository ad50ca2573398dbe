//! Investment fund asset.

use fondra_metrics::{MetricsError, cumulative_returns, daily_returns};
use fondra_primitives::{AssetName, Region, TimeSeries};
use fondra_traits::FinancialAsset;

/// An investment fund: a NAV series tagged with the region that selects
/// its factor columns downstream.
///
/// Daily and cumulative returns are derived once at construction and
/// immutable for the life of the object.
#[derive(Debug, Clone)]
pub struct Fund {
    name: AssetName,
    region: Region,
    nav: TimeSeries,
    returns: TimeSeries,
    cumulative: TimeSeries,
}

impl Fund {
    /// Build a fund from a cleaned NAV series.
    ///
    /// # Errors
    /// Returns `MetricsError::InsufficientData` for fewer than 2 NAV
    /// observations.
    pub fn new(
        name: impl Into<AssetName>,
        region: Region,
        nav: TimeSeries,
    ) -> Result<Self, MetricsError> {
        let returns = daily_returns(&nav)?;
        let cumulative = cumulative_returns(&returns)?;
        Ok(Self { name: name.into(), region, nav, returns, cumulative })
    }

    /// Region tag used for factor column selection.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// The NAV series the fund was built from.
    #[must_use]
    pub const fn nav(&self) -> &TimeSeries {
        &self.nav
    }
}

impl FinancialAsset for Fund {
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
    use approx::assert_relative_eq;
    use fondra_primitives::Date;
    use ndarray::array;

    use super::*;

    fn nav() -> TimeSeries {
        let start = Date::from_ymd_opt(2024, 1, 1).unwrap();
        let dates = (0..3).map(|i| start + chrono::Duration::days(i)).collect();
        TimeSeries::new(dates, array![100.0, 110.0, 99.0]).unwrap()
    }

    #[test]
    fn fund_derives_returns_at_construction() {
        let fund = Fund::new("AQR Large Cap Multi-Style", Region::Us, nav()).unwrap();

        assert_eq!(fund.returns().len(), 2);
        assert_relative_eq!(fund.returns().values()[0], 10.0, epsilon = 1e-10);
        assert_relative_eq!(fund.cumulative_returns().values()[1], -1.0, epsilon = 1e-9);
        assert_eq!(fund.region(), Region::Us);
    }

    #[test]
    fn fund_rejects_single_observation() {
        let start = Date::from_ymd_opt(2024, 1, 1).unwrap();
        let nav = TimeSeries::new(vec![start], array![100.0]).unwrap();
        assert!(Fund::new("F", Region::Global, nav).is_err());
    }
}
