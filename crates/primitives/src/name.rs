//! Asset naming.

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Name identifying a fund, benchmark, or factor.
///
/// Doubles as the column header for the asset's values in joined datasets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Into, Serialize, Deserialize)]
pub struct AssetName(pub String);

impl AssetName {
    /// Create a new asset name.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
