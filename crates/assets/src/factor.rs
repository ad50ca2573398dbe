//! Factor and risk-free rate assets.

use fondra_metrics::{MetricsError, cumulative_returns};
use fondra_primitives::{AssetName, Region, TimeSeries};
use fondra_traits::FinancialAsset;

/// One regional leg of a factor: the factor's return series for a single
/// region, already in percent.
///
/// Its column name (`"<factor> <region>"`, e.g. `"MKT US"`) is how the
/// leg appears in joined datasets and how region feature selection finds
/// it.
#[derive(Debug, Clone)]
pub struct FactorLeg {
    column: AssetName,
    region: Region,
    returns: TimeSeries,
    cumulative: TimeSeries,
}

impl FactorLeg {
    fn new(factor: &str, region: Region, returns: TimeSeries) -> Result<Self, MetricsError> {
        let cumulative = cumulative_returns(&returns)?;
        Ok(Self {
            column: AssetName::new(format!("{factor} {region}")),
            region,
            returns,
            cumulative,
        })
    }

    /// Region this leg covers.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }
}

impl FinancialAsset for FactorLeg {
    fn name(&self) -> &AssetName {
        &self.column
    }

    fn returns(&self) -> &TimeSeries {
        &self.returns
    }

    fn cumulative_returns(&self) -> &TimeSeries {
        &self.cumulative
    }
}

/// A systematic return driver with one sub-series per region.
///
/// Factor values arrive from ingestion as percent returns; the factor
/// splits them into regional legs at construction and never mutates
/// afterward.
#[derive(Debug, Clone)]
pub struct FactorSeries {
    name: AssetName,
    legs: Vec<FactorLeg>,
}

impl FactorSeries {
    /// Build a factor from its per-region return series.
    ///
    /// # Errors
    /// Propagates series errors from derived-series construction.
    pub fn new(
        name: impl Into<AssetName>,
        regions: Vec<(Region, TimeSeries)>,
    ) -> Result<Self, MetricsError> {
        let name = name.into();
        let legs = regions
            .into_iter()
            .map(|(region, series)| FactorLeg::new(name.as_str(), region, series))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { name, legs })
    }

    /// Factor name (without a region suffix).
    #[must_use]
    pub const fn name(&self) -> &AssetName {
        &self.name
    }

    /// All regional legs.
    #[must_use]
    pub fn legs(&self) -> &[FactorLeg] {
        &self.legs
    }

    /// The leg for a specific region, if present.
    #[must_use]
    pub fn leg(&self, region: Region) -> Option<&FactorLeg> {
        self.legs.iter().find(|l| l.region == region)
    }
}

/// The risk-free rate series, in percent per day.
#[derive(Debug, Clone)]
pub struct RiskFree {
    name: AssetName,
    series: TimeSeries,
}

impl RiskFree {
    /// Wrap a cleaned risk-free rate series.
    pub fn new(name: impl Into<AssetName>, series: TimeSeries) -> Self {
        Self { name: name.into(), series }
    }

    /// Name of the rate series.
    #[must_use]
    pub const fn name(&self) -> &AssetName {
        &self.name
    }

    /// The rate series.
    #[must_use]
    pub const fn series(&self) -> &TimeSeries {
        &self.series
    }
}
