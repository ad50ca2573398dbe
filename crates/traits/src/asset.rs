//! Financial asset trait definition.

use fondra_primitives::{AssetName, TimeSeries};

/// Capability set shared by every priced asset in an analysis session.
///
/// Funds, benchmarks and factor legs all expose the same pair of derived
/// series. Implementations compute both once at construction and hand out
/// references thereafter; nothing is recomputed or mutated for the life of
/// the object.
pub trait FinancialAsset {
    /// Name of the asset.
    fn name(&self) -> &AssetName;

    /// Daily returns, in percent.
    fn returns(&self) -> &TimeSeries;

    /// Cumulative compounded returns, in percent.
    fn cumulative_returns(&self) -> &TimeSeries;
}
