//! Inclusive date-range filtering.

use fondra_primitives::{Date, TimeSeries};

/// Sub-series with `start <= date <= end`, inclusive on both ends.
///
/// An empty result is a value, never an error: inverted bounds or a range
/// with no observations simply yield an empty series, and callers decide
/// whether the metric they wanted is computable on it.
#[must_use]
pub fn window_filter(series: &TimeSeries, start: Date, end: Date) -> TimeSeries {
    series.between(start, end)
}
