use std::collections::BTreeMap;

use reqwest::StatusCode;

/// Per-run tally of store responses, keyed by HTTP status code
///
/// Updates for unchanged and changed articles are tallied in separate maps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Store responses for articles whose hash was unchanged
    pub unchanged: BTreeMap<u16, u32>,
    /// Store responses for articles whose hash changed
    pub changed: BTreeMap<u16, u32>,
}

impl SweepStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a store response on the unchanged path
    pub fn record_unchanged(&mut self, status: StatusCode) {
        *self.unchanged.entry(status.as_u16()).or_insert(0) += 1;
    }

    /// Count a store response on the changed path
    pub fn record_changed(&mut self, status: StatusCode) {
        *self.changed.entry(status.as_u16()).or_insert(0) += 1;
    }

    /// Total number of store updates issued during the run
    pub fn total_updates(&self) -> u32 {
        self.unchanged.values().sum::<u32>() + self.changed.values().sum::<u32>()
    }
}
