/// Lectio system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of entries held by the memory tier before pruning.
pub const MEMORY_TIER_CAPACITY: usize = 50;

/// Fraction of capacity retained by a prune pass.
pub const MEMORY_TIER_RETAIN_RATIO: f64 = 0.8;

/// Default entry time-to-live (1 hour).
pub const DEFAULT_TTL_SECS: i64 = 3600;

/// Default entry priority. Valid priorities are 1..=10.
pub const DEFAULT_PRIORITY: u8 = 5;

/// Minimum and maximum entry priority.
pub const MIN_PRIORITY: u8 = 1;
pub const MAX_PRIORITY: u8 = 10;

/// TTL for prefetched entries (2 hours).
pub const PREFETCH_TTL_SECS: i64 = 7200;

/// Priority assigned to prefetched entries.
pub const PREFETCH_PRIORITY: u8 = 8;

/// Minimum prediction confidence that triggers a prefetch.
pub const PREFETCH_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Rolling window consulted by the pattern analyzer (days).
pub const ANALYSIS_WINDOW_DAYS: i64 = 30;

/// Maximum number of events consulted per analysis.
pub const ANALYSIS_EVENT_LIMIT: usize = 100;

/// Adjacency ratio above which a history classifies as sequential.
pub const SEQUENTIAL_RATIO: f64 = 0.7;

/// Adjacency ratio above which a history classifies as mixed.
pub const MIXED_RATIO: f64 = 0.3;

/// Session duration assumed when an event carries none (minutes).
pub const DEFAULT_SESSION_MINUTES: f64 = 5.0;

/// Items-per-session assumed when an event carries none.
pub const DEFAULT_ITEMS_PER_SESSION: f64 = 10.0;

/// Preferred hour assumed when there is no history.
pub const DEFAULT_PREFERRED_HOUR: u32 = 9;

/// Number of frequent content ids kept in a reading pattern.
pub const COMMON_CONTENT_LIMIT: usize = 5;

/// Confidence assigned per sequence classification.
pub const CONFIDENCE_SEQUENTIAL: f64 = 0.9;
pub const CONFIDENCE_MIXED: f64 = 0.6;
pub const CONFIDENCE_RANDOM: f64 = 0.4;
