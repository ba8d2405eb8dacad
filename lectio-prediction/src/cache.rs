//! Memoizes the analyzed pattern between events.
//!
//! Uses `moka::sync::Cache` with a short TTL. Invalidated whenever a new
//! access event lands, so a cached pattern never outlives its window by
//! more than the TTL. Tracks hits/misses.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use moka::sync::Cache;

use lectio_core::models::ReadingPattern;

/// TTL for a memoized pattern.
const PATTERN_TTL: Duration = Duration::from_secs(300); // 5 minutes

/// Single logical slot; capacity is nominal.
const MAX_ENTRIES: u64 = 4;

const PATTERN_KEY: &str = "current";

/// Pattern memo with hit/miss tracking.
pub struct PatternCache {
    cache: Cache<String, ReadingPattern>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PatternCache {
    pub fn new() -> Self {
        let cache = Cache::builder()
            .max_capacity(MAX_ENTRIES)
            .time_to_live(PATTERN_TTL)
            .build();
        Self {
            cache,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// The memoized pattern, if still valid.
    pub fn get(&self) -> Option<ReadingPattern> {
        match self.cache.get(PATTERN_KEY) {
            Some(pattern) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(pattern)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    pub fn insert(&self, pattern: ReadingPattern) {
        self.cache.insert(PATTERN_KEY.to_string(), pattern);
    }

    /// Drop the memo (e.g. a new event changed the window).
    pub fn invalidate(&self) {
        self.cache.invalidate(PATTERN_KEY);
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new()
    }
}
