//! Series cache collaborator seam.

use std::collections::HashMap;

use fondra_primitives::TimeSeries;

/// Read-through cache of cleaned series, keyed by asset name.
///
/// The analytics core never performs its own I/O or file-existence
/// checks; whoever owns ingestion injects a store and the core treats it
/// as opaque. Implementations may be backed by memory, disk, or nothing.
pub trait SeriesStore {
    /// Look up a cached series.
    fn get(&self, key: &str) -> Option<&TimeSeries>;

    /// Cache a series under a key, replacing any previous entry.
    fn put(&mut self, key: &str, series: TimeSeries);

    /// Whether a key is present.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// In-memory store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemorySeriesStore {
    entries: HashMap<String, TimeSeries>,
}

impl MemorySeriesStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SeriesStore for MemorySeriesStore {
    fn get(&self, key: &str) -> Option<&TimeSeries> {
        self.entries.get(key)
    }

    fn put(&mut self, key: &str, series: TimeSeries) {
        self.entries.insert(key.to_string(), series);
    }
}
