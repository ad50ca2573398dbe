//! Regional tagging for funds and factor sub-series.

use serde::{Deserialize, Serialize};

/// Region tag attached to a fund, selecting which regional sub-series of
/// each factor enters its factor dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// United States.
    Us,
    /// Global (all regions).
    Global,
}

impl Region {
    /// The tag as it appears in dataset column names.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Global => "Global",
        }
    }

    /// Whether a dataset column belongs to this region.
    ///
    /// Feature selection is a substring match on the column name, e.g.
    /// `"MKT US"` matches [`Region::Us`].
    #[must_use]
    pub fn matches_column(&self, column: &str) -> bool {
        column.contains(self.as_str())
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
