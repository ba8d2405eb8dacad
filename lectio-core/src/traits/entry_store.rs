use chrono::{DateTime, Utc};

use crate::errors::LectioResult;
use crate::models::CacheEntry;

/// Durable key-value storage for cache entries: the persistent tier.
///
/// The persistent tier is the single source of durable truth; the memory
/// tier can be discarded and rebuilt from it at any time.
pub trait IEntryStore: Send + Sync {
    /// Insert or replace an entry. Replacing keeps the new entry's counters.
    fn put_entry(&self, entry: &CacheEntry) -> LectioResult<()>;

    fn get_entry(&self, key: &str) -> LectioResult<Option<CacheEntry>>;

    /// Remove an entry. Removing an absent key is not an error.
    fn delete_entry(&self, key: &str) -> LectioResult<()>;

    /// Bulk-delete every entry whose TTL has elapsed as of `now`.
    /// Returns the number of rows removed.
    fn delete_expired(&self, now: DateTime<Utc>) -> LectioResult<usize>;

    // --- Aggregation (powers CacheStats) ---
    fn count_entries(&self) -> LectioResult<usize>;
    fn count_accessed_entries(&self) -> LectioResult<usize>;
    fn average_access_count(&self) -> LectioResult<f64>;

    /// Remove every entry unconditionally.
    fn clear_entries(&self) -> LectioResult<()>;
}

/// Forwarding impl so one store handle can back several components.
impl<T: IEntryStore + ?Sized> IEntryStore for std::sync::Arc<T> {
    fn put_entry(&self, entry: &CacheEntry) -> LectioResult<()> {
        (**self).put_entry(entry)
    }
    fn get_entry(&self, key: &str) -> LectioResult<Option<CacheEntry>> {
        (**self).get_entry(key)
    }
    fn delete_entry(&self, key: &str) -> LectioResult<()> {
        (**self).delete_entry(key)
    }
    fn delete_expired(&self, now: DateTime<Utc>) -> LectioResult<usize> {
        (**self).delete_expired(now)
    }
    fn count_entries(&self) -> LectioResult<usize> {
        (**self).count_entries()
    }
    fn count_accessed_entries(&self) -> LectioResult<usize> {
        (**self).count_accessed_entries()
    }
    fn average_access_count(&self) -> LectioResult<f64> {
        (**self).average_access_count()
    }
    fn clear_entries(&self) -> LectioResult<()> {
        (**self).clear_entries()
    }
}
