use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PRIORITY, DEFAULT_TTL_SECS, MAX_PRIORITY, MIN_PRIORITY};

/// One cached record, in either tier.
///
/// The payload is an opaque JSON value; the cache is content-agnostic.
/// `access_count` and `last_accessed` are bumped on every successful read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub key: String,
    pub value: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub ttl_seconds: i64,
    /// Eviction weight, 1..=10. Higher survives pruning longer.
    pub priority: u8,
    pub access_count: u64,
    pub last_accessed: DateTime<Utc>,
}

impl CacheEntry {
    /// Create an entry with the default TTL (1 hour) and priority (5).
    pub fn new(key: impl Into<String>, value: serde_json::Value) -> Self {
        let now = Utc::now();
        Self {
            key: key.into(),
            value,
            created_at: now,
            ttl_seconds: DEFAULT_TTL_SECS,
            priority: DEFAULT_PRIORITY,
            access_count: 0,
            last_accessed: now,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl_seconds = ttl.num_seconds();
        self
    }

    /// Set the eviction priority, clamped to 1..=10.
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority.clamp(MIN_PRIORITY, MAX_PRIORITY);
        self
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + Duration::seconds(self.ttl_seconds)
    }

    /// An entry is expired iff `now - created_at > ttl`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at()
    }

    /// Record a successful read.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.access_count += 1;
        self.last_accessed = now;
    }
}
