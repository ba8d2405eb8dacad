//! Runtime configuration for the cache tiers and the prediction pipeline.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::models::ContentId;

/// Cache tier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Memory tier capacity; inserting beyond it triggers a prune.
    pub max_memory_entries: usize,
    /// Fraction of capacity kept by a prune pass.
    pub retain_ratio: f64,
    /// TTL applied when `set` is called without one (seconds).
    pub default_ttl_secs: i64,
    /// Priority applied when `set` is called without one.
    pub default_priority: u8,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_memory_entries: constants::MEMORY_TIER_CAPACITY,
            retain_ratio: constants::MEMORY_TIER_RETAIN_RATIO,
            default_ttl_secs: constants::DEFAULT_TTL_SECS,
            default_priority: constants::DEFAULT_PRIORITY,
        }
    }
}

/// Pattern analysis and prefetch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Rolling window consulted by the analyzer (days).
    pub analysis_window_days: i64,
    /// Maximum events consulted per analysis.
    pub analysis_event_limit: usize,
    /// Minimum confidence that triggers a prefetch.
    pub prefetch_threshold: f64,
    /// TTL applied to prefetched entries (seconds).
    pub prefetch_ttl_secs: i64,
    /// Priority applied to prefetched entries.
    pub prefetch_priority: u8,
    /// Curated content warmed by `warmup_cache`, independent of prediction.
    pub warmup_content: Vec<ContentId>,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            analysis_window_days: constants::ANALYSIS_WINDOW_DAYS,
            analysis_event_limit: constants::ANALYSIS_EVENT_LIMIT,
            prefetch_threshold: constants::PREFETCH_CONFIDENCE_THRESHOLD,
            prefetch_ttl_secs: constants::PREFETCH_TTL_SECS,
            prefetch_priority: constants::PREFETCH_PRIORITY,
            warmup_content: Vec::new(),
        }
    }
}
