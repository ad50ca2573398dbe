//! Analysis window specifications.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::{Date, TRADING_DAYS_PER_YEAR, TimeSeries};

/// Where a window begins, relative to the series it is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowStart {
    /// A literal calendar date.
    Absolute(Date),
    /// `n` trading-day rows back from the end of the series.
    TradingDays(usize),
    /// January 1st of the series' final year.
    YearToDate,
}

/// A named analysis window.
///
/// The end of every window is implicitly the last available date of the
/// series it is resolved against; only the start varies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    label: String,
    start: WindowStart,
}

impl WindowSpec {
    /// Create a window with an explicit start.
    pub fn new(label: impl Into<String>, start: WindowStart) -> Self {
        Self { label: label.into(), start }
    }

    /// Year-to-date window.
    #[must_use]
    pub fn ytd() -> Self {
        Self::new("YTD", WindowStart::YearToDate)
    }

    /// Trailing one-year window (252 trading-day rows).
    #[must_use]
    pub fn one_year() -> Self {
        Self::new("1Y", WindowStart::TradingDays(TRADING_DAYS_PER_YEAR))
    }

    /// Trailing three-year window.
    #[must_use]
    pub fn three_years() -> Self {
        Self::new("3Y", WindowStart::TradingDays(3 * TRADING_DAYS_PER_YEAR))
    }

    /// Trailing five-year window.
    #[must_use]
    pub fn five_years() -> Self {
        Self::new("5Y", WindowStart::TradingDays(5 * TRADING_DAYS_PER_YEAR))
    }

    /// Display label for the window.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The start rule.
    #[must_use]
    pub const fn start(&self) -> WindowStart {
        self.start
    }

    /// Resolve against a series into concrete inclusive `(start, end)` bounds.
    ///
    /// Trading-day lookbacks longer than the available history clamp to
    /// the earliest row rather than failing; the caller can detect the
    /// shortfall by comparing the resolved start with its expectation.
    /// Returns `None` for an empty series.
    #[must_use]
    pub fn resolve(&self, series: &TimeSeries) -> Option<(Date, Date)> {
        let end = series.last_date()?;
        let start = match self.start {
            WindowStart::Absolute(date) => date,
            WindowStart::TradingDays(n) => {
                let idx = series.len().saturating_sub(n);
                series.dates()[idx.min(series.len() - 1)]
            }
            WindowStart::YearToDate => Date::from_ymd_opt(end.year(), 1, 1)?,
        };
        Some((start, end))
    }
}
