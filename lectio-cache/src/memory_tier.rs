//! Bounded in-process entry map with priority-weighted LRU pruning.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use lectio_core::models::CacheEntry;

/// The in-memory tier. Mutated only by the coordinator.
///
/// Pruning is priority-weighted LRU, not pure LRU: priority is the primary
/// sort key, so a high-priority prefetched entry outlives a low-priority
/// one regardless of access recency.
pub struct MemoryTier {
    entries: HashMap<String, CacheEntry>,
    capacity: usize,
    retain_ratio: f64,
}

impl MemoryTier {
    pub fn new(capacity: usize, retain_ratio: f64) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity + 1),
            capacity,
            retain_ratio,
        }
    }

    /// Insert or replace; prunes when the tier grows past capacity.
    pub fn insert(&mut self, entry: CacheEntry) {
        self.entries.insert(entry.key.clone(), entry);
        if self.entries.len() > self.capacity {
            self.prune();
        }
    }

    /// Non-expired lookup. Expired entries are treated as absent but left
    /// in place; authoritative deletion belongs to the coordinator.
    pub fn get(&self, key: &str, now: DateTime<Utc>) -> Option<&CacheEntry> {
        self.entries.get(key).filter(|e| !e.is_expired(now))
    }

    /// Mutable variant of [`get`](Self::get), for counter updates.
    pub fn get_mut(&mut self, key: &str, now: DateTime<Utc>) -> Option<&mut CacheEntry> {
        self.entries.get_mut(key).filter(|e| !e.is_expired(now))
    }

    pub fn remove(&mut self, key: &str) -> Option<CacheEntry> {
        self.entries.remove(key)
    }

    /// Drop expired entries. Returns how many were removed.
    pub fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, e| !e.is_expired(now));
        before - self.entries.len()
    }

    /// Keep only the top `floor(capacity * retain_ratio)` entries ranked by
    /// `(priority desc, last_accessed desc)`, dropping the low-priority,
    /// least-recently-used tail.
    fn prune(&mut self) {
        let retain = (self.capacity as f64 * self.retain_ratio).floor() as usize;
        if self.entries.len() <= retain {
            return;
        }

        let mut ranked: Vec<CacheEntry> = self.entries.drain().map(|(_, e)| e).collect();
        ranked.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then(b.last_accessed.cmp(&a.last_accessed))
        });
        ranked.truncate(retain);

        self.entries = ranked.into_iter().map(|e| (e.key.clone(), e)).collect();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}
