use serde::{Deserialize, Serialize};

/// Read-only aggregate view over both tiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Entries in the persistent tier.
    pub total_entries: usize,
    /// Entries currently resident in the memory tier.
    pub memory_entries: usize,
    /// Percentage of entries ever read at least once. This is a proxy over
    /// historical entries, not a true per-request hit/miss ratio.
    pub hit_rate: f64,
    pub average_access_count: f64,
}
