//! Date-indexed series type.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::Date;

/// Errors that can occur constructing a series.
#[derive(Debug, thiserror::Error)]
pub enum SeriesError {
    /// Dates and values have different lengths.
    #[error("length mismatch: {dates} dates, {values} values")]
    LengthMismatch {
        /// Number of dates.
        dates: usize,
        /// Number of values.
        values: usize,
    },

    /// Dates are not strictly increasing.
    #[error("dates not strictly increasing at index {0}")]
    UnsortedDates(usize),

    /// A value is NaN or infinite.
    #[error("non-finite value at index {0}")]
    NonFinite(usize),
}

/// An ordered, date-indexed numeric series.
///
/// Invariants, enforced at construction: dates are strictly increasing
/// (no duplicates) and every value is finite. A `TimeSeries` is immutable;
/// each transformation downstream produces a new series.
///
/// Return series carry values in percent (fractional change x 100), the
/// convention shared by every consumer in the workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    dates: Vec<Date>,
    #[serde(skip)]
    values: Array1<f64>,
}

impl TimeSeries {
    /// Create a new series from parallel date and value sequences.
    ///
    /// # Errors
    /// Returns `SeriesError` if lengths differ, dates are not strictly
    /// increasing, or any value is NaN/infinite.
    pub fn new(dates: Vec<Date>, values: Array1<f64>) -> Result<Self, SeriesError> {
        if dates.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                dates: dates.len(),
                values: values.len(),
            });
        }

        for i in 1..dates.len() {
            if dates[i] <= dates[i - 1] {
                return Err(SeriesError::UnsortedDates(i));
            }
        }

        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(SeriesError::NonFinite(i));
        }

        Ok(Self { dates, values })
    }

    /// Create a series from (date, value) pairs.
    ///
    /// # Errors
    /// Same validation as [`TimeSeries::new`].
    pub fn from_pairs(pairs: Vec<(Date, f64)>) -> Result<Self, SeriesError> {
        let (dates, values): (Vec<Date>, Vec<f64>) = pairs.into_iter().unzip();
        Self::new(dates, Array1::from_vec(values))
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The date index.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// The values.
    #[must_use]
    pub const fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// First date, if any.
    #[must_use]
    pub fn first_date(&self) -> Option<Date> {
        self.dates.first().copied()
    }

    /// Last date, if any.
    #[must_use]
    pub fn last_date(&self) -> Option<Date> {
        self.dates.last().copied()
    }

    /// Last value, if any.
    #[must_use]
    pub fn last_value(&self) -> Option<f64> {
        (!self.is_empty()).then(|| self.values[self.len() - 1])
    }

    /// Observation at position `i`.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<(Date, f64)> {
        (i < self.len()).then(|| (self.dates[i], self.values[i]))
    }

    /// Value on a specific date, if present.
    #[must_use]
    pub fn value_on(&self, date: Date) -> Option<f64> {
        self.dates.binary_search(&date).ok().map(|i| self.values[i])
    }

    /// Iterate over (date, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }

    /// Sub-series with `start <= date <= end`, inclusive on both ends.
    ///
    /// An empty result is a value, never an error; callers decide whether
    /// a metric is computable on it.
    #[must_use]
    pub fn between(&self, start: Date, end: Date) -> Self {
        let lo = self.dates.partition_point(|d| *d < start);
        let hi = self.dates.partition_point(|d| *d <= end);
        if lo >= hi {
            return Self { dates: Vec::new(), values: Array1::zeros(0) };
        }
        Self {
            dates: self.dates[lo..hi].to_vec(),
            values: self.values.slice(ndarray::s![lo..hi]).to_owned(),
        }
    }

    /// Sub-series of the trailing `n` observations (all of them if fewer).
    #[must_use]
    pub fn tail(&self, n: usize) -> Self {
        let lo = self.len().saturating_sub(n);
        Self {
            dates: self.dates[lo..].to_vec(),
            values: self.values.slice(ndarray::s![lo..]).to_owned(),
        }
    }

    /// Pair of sub-series restricted to the dates present in both inputs.
    ///
    /// Two-pointer intersection over the sorted date indexes; the result
    /// preserves chronological order and pairs values index-for-index.
    #[must_use]
    pub fn align(&self, other: &Self) -> (Self, Self) {
        let mut dates = Vec::new();
        let mut left = Vec::new();
        let mut right = Vec::new();

        let (mut i, mut j) = (0, 0);
        while i < self.len() && j < other.len() {
            match self.dates[i].cmp(&other.dates[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dates.push(self.dates[i]);
                    left.push(self.values[i]);
                    right.push(other.values[j]);
                    i += 1;
                    j += 1;
                }
            }
        }

        (
            Self { dates: dates.clone(), values: Array1::from_vec(left) },
            Self { dates, values: Array1::from_vec(right) },
        )
    }

    /// New series reusing this series' dates with replacement values.
    ///
    /// # Errors
    /// Same validation as [`TimeSeries::new`].
    pub fn with_values(&self, values: Array1<f64>) -> Result<Self, SeriesError> {
        Self::new(self.dates.clone(), values)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> TimeSeries {
        TimeSeries::new(
            vec![date(2024, 1, 2), date(2024, 1, 3), date(2024, 1, 4), date(2024, 1, 5)],
            array![100.0, 101.0, 99.5, 102.0],
        )
        .unwrap()
    }

    #[test]
    fn rejects_unsorted_dates() {
        let result =
            TimeSeries::new(vec![date(2024, 1, 3), date(2024, 1, 2)], array![1.0, 2.0]);
        assert!(matches!(result, Err(SeriesError::UnsortedDates(1))));
    }

    #[test]
    fn rejects_duplicate_dates() {
        let result =
            TimeSeries::new(vec![date(2024, 1, 2), date(2024, 1, 2)], array![1.0, 2.0]);
        assert!(matches!(result, Err(SeriesError::UnsortedDates(1))));
    }

    #[test]
    fn rejects_non_finite() {
        let result =
            TimeSeries::new(vec![date(2024, 1, 2), date(2024, 1, 3)], array![1.0, f64::NAN]);
        assert!(matches!(result, Err(SeriesError::NonFinite(1))));
    }

    #[test]
    fn rejects_length_mismatch() {
        let result = TimeSeries::new(vec![date(2024, 1, 2)], array![1.0, 2.0]);
        assert!(matches!(result, Err(SeriesError::LengthMismatch { dates: 1, values: 2 })));
    }

    #[test]
    fn between_is_inclusive() {
        let s = sample();
        let sub = s.between(date(2024, 1, 3), date(2024, 1, 5));
        assert_eq!(sub.len(), 3);
        assert_eq!(sub.first_date(), Some(date(2024, 1, 3)));
        assert_eq!(sub.last_date(), Some(date(2024, 1, 5)));
    }

    #[test]
    fn between_inverted_bounds_is_empty() {
        let s = sample();
        assert!(s.between(date(2024, 1, 5), date(2024, 1, 3)).is_empty());
        assert!(s.between(date(2025, 1, 1), date(2025, 2, 1)).is_empty());
    }

    #[test]
    fn align_keeps_common_dates_only() {
        let a = sample();
        let b = TimeSeries::new(
            vec![date(2024, 1, 3), date(2024, 1, 5), date(2024, 1, 8)],
            array![50.0, 51.0, 52.0],
        )
        .unwrap();

        let (left, right) = a.align(&b);
        assert_eq!(left.dates(), right.dates());
        assert_eq!(left.dates(), &[date(2024, 1, 3), date(2024, 1, 5)]);
        assert_relative_eq!(left.values()[0], 101.0);
        assert_relative_eq!(right.values()[1], 51.0);
        assert!(left.len() <= a.len().min(b.len()));
    }

    #[test]
    fn tail_clamps_to_length() {
        let s = sample();
        assert_eq!(s.tail(2).len(), 2);
        assert_eq!(s.tail(100).len(), 4);
    }

    #[test]
    fn value_on_exact_date() {
        let s = sample();
        assert_eq!(s.value_on(date(2024, 1, 4)), Some(99.5));
        assert_eq!(s.value_on(date(2024, 1, 6)), None);
    }
}
