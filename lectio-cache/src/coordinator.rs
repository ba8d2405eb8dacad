//! CacheCoordinator — the public two-tier façade.

use std::sync::Mutex;

use chrono::{Duration, Utc};
use tracing::{debug, warn};

use lectio_core::config::CacheConfig;
use lectio_core::errors::{LectioError, LectioResult};
use lectio_core::models::{CacheEntry, CacheStats};
use lectio_core::traits::IEntryStore;

use crate::memory_tier::MemoryTier;

/// Reads check the memory tier first and fall back to the persistent
/// store, promoting hits. Writes land in memory first, then go durable.
///
/// Same-key operations must be serialized by the caller; the internal
/// mutex protects map integrity only, not read-modify-write ordering
/// across tiers.
pub struct CacheCoordinator<S: IEntryStore> {
    store: S,
    memory: Mutex<MemoryTier>,
    config: CacheConfig,
}

impl<S: IEntryStore> CacheCoordinator<S> {
    pub fn new(store: S, config: CacheConfig) -> Self {
        let memory = MemoryTier::new(config.max_memory_entries, config.retain_ratio);
        Self {
            store,
            memory: Mutex::new(memory),
            config,
        }
    }

    /// Access the underlying persistent store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write with the default TTL and priority.
    pub fn set(&self, key: &str, value: serde_json::Value) -> LectioResult<()> {
        self.set_with(
            key,
            value,
            Duration::seconds(self.config.default_ttl_secs),
            self.config.default_priority,
        )
    }

    /// Write with explicit TTL and priority.
    ///
    /// The memory tier is written first; if the durable write then fails,
    /// the value stays readable in memory and the error propagates.
    pub fn set_with(
        &self,
        key: &str,
        value: serde_json::Value,
        ttl: Duration,
        priority: u8,
    ) -> LectioResult<()> {
        validate_key(key)?;
        let entry = CacheEntry::new(key, value)
            .with_ttl(ttl)
            .with_priority(priority);

        self.memory_lock()?.insert(entry.clone());
        self.store.put_entry(&entry)
    }

    /// Two-tier read. Memory hits bump access counters; persistent hits are
    /// promoted into memory; expired persistent entries are deleted
    /// authoritatively. A total miss returns `None` without side effects.
    pub fn get(&self, key: &str) -> LectioResult<Option<serde_json::Value>> {
        validate_key(key)?;
        let now = Utc::now();

        // Fast path: memory tier.
        let memory_hit = {
            let mut memory = self.memory_lock()?;
            let hit = match memory.get_mut(key, now) {
                Some(entry) => {
                    entry.touch(now);
                    Some(entry.clone())
                }
                None => None,
            };
            if hit.is_none() {
                // Lazily purge an expired resident copy; the persistent
                // copy is handled below.
                memory.remove(key);
            }
            hit
        };
        if let Some(entry) = memory_hit {
            // Counter write-back keeps the tiers eventually consistent;
            // losing it degrades stats, not correctness.
            if let Err(err) = self.store.put_entry(&entry) {
                warn!(key, %err, "access counter write-back failed");
            }
            return Ok(Some(entry.value));
        }

        // Slow path: persistent tier.
        match self.store.get_entry(key)? {
            Some(mut entry) => {
                if entry.is_expired(now) {
                    self.store.delete_entry(key)?;
                    return Ok(None);
                }
                entry.touch(now);
                self.memory_lock()?.insert(entry.clone());
                if let Err(err) = self.store.put_entry(&entry) {
                    warn!(key, %err, "access counter write-back failed");
                }
                debug!(key, "promoted persistent hit into memory tier");
                Ok(Some(entry.value))
            }
            None => Ok(None),
        }
    }

    /// Remove a key from both tiers. Idempotent.
    pub fn delete(&self, key: &str) -> LectioResult<()> {
        validate_key(key)?;
        self.memory_lock()?.remove(key);
        self.store.delete_entry(key)
    }

    /// Bulk-expire both tiers. Returns the number of persistent rows
    /// removed (the authoritative count). Intended to run opportunistically
    /// rather than on a timer.
    pub fn cleanup(&self) -> LectioResult<usize> {
        let now = Utc::now();
        let removed = self.store.delete_expired(now)?;
        let purged = self.memory_lock()?.purge_expired(now);
        debug!(removed, purged, "cleanup pass complete");
        Ok(removed)
    }

    /// Empty both tiers unconditionally.
    pub fn clear_all(&self) -> LectioResult<()> {
        self.memory_lock()?.clear();
        self.store.clear_entries()
    }

    /// Aggregate view over both tiers. The hit rate is a proxy: the share
    /// of entries ever read at least once, not a per-request ratio.
    pub fn stats(&self) -> LectioResult<CacheStats> {
        let total_entries = self.store.count_entries()?;
        let accessed = self.store.count_accessed_entries()?;
        let hit_rate = if total_entries == 0 {
            0.0
        } else {
            accessed as f64 / total_entries as f64 * 100.0
        };

        Ok(CacheStats {
            total_entries,
            memory_entries: self.memory_lock()?.len(),
            hit_rate,
            average_access_count: self.store.average_access_count()?,
        })
    }

    fn memory_lock(&self) -> LectioResult<std::sync::MutexGuard<'_, MemoryTier>> {
        self.memory.lock().map_err(|_| {
            LectioError::Store(lectio_core::errors::StoreError::Unavailable {
                message: "memory tier mutex poisoned".into(),
            })
        })
    }
}

fn validate_key(key: &str) -> LectioResult<()> {
    if key.trim().is_empty() {
        return Err(LectioError::InvalidKey {
            reason: "key must not be empty".into(),
        });
    }
    Ok(())
}
