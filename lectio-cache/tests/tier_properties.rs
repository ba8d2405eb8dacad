//! Property tests for the memory tier's pruning invariants.

use chrono::{Duration, Utc};
use proptest::prelude::*;
use serde_json::json;

use lectio_cache::MemoryTier;
use lectio_core::models::CacheEntry;

proptest! {
    /// The tier never holds more than its capacity after an insert.
    #[test]
    fn tier_never_exceeds_capacity(priorities in prop::collection::vec(1u8..=10, 1..200)) {
        let mut tier = MemoryTier::new(50, 0.8);
        for (i, priority) in priorities.iter().enumerate() {
            tier.insert(
                CacheEntry::new(format!("k{i}"), json!(i)).with_priority(*priority),
            );
            prop_assert!(tier.len() <= 50);
        }
    }

    /// A unique maximum-priority entry survives any flood of lower-priority
    /// inserts.
    #[test]
    fn unique_max_priority_entry_survives(
        low_priorities in prop::collection::vec(1u8..=8, 51..120),
    ) {
        let mut tier = MemoryTier::new(50, 0.8);
        let start = Utc::now() - Duration::hours(1);

        let mut pinned = CacheEntry::new("pinned", json!("vip")).with_priority(10);
        pinned.last_accessed = start;
        tier.insert(pinned);

        for (i, priority) in low_priorities.iter().enumerate() {
            let mut entry = CacheEntry::new(format!("k{i}"), json!(i)).with_priority(*priority);
            entry.last_accessed = start + Duration::seconds(i as i64 + 1);
            tier.insert(entry);
        }

        prop_assert!(tier.contains("pinned"));
    }

    /// Pruning keeps entries that dominate on (priority, recency): every
    /// retained entry must not be strictly dominated by a dropped one.
    #[test]
    fn prune_drops_only_the_weakest_tail(count in 51usize..150) {
        let mut tier = MemoryTier::new(50, 0.8);
        let start = Utc::now() - Duration::hours(2);

        for i in 0..count {
            let priority = (i % 10 + 1) as u8;
            let mut entry = CacheEntry::new(format!("k{i}"), json!(i)).with_priority(priority);
            entry.last_accessed = start + Duration::seconds(i as i64);
            tier.insert(entry);
        }

        // Entries with priority 10 were inserted throughout; the last one
        // inserted at each priority level beats earlier same-priority ones,
        // so the newest priority-10 entry must always be resident.
        let newest_top = (0..count).rev().find(|i| i % 10 + 1 == 10).unwrap();
        let newest_top_key = format!("k{newest_top}");
        prop_assert!(tier.contains(&newest_top_key));
    }
}
