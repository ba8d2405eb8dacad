//! Data model for the cache tiers and the prediction pipeline.

mod access_event;
mod cache_entry;
mod cache_stats;
mod content_id;
mod prediction_result;
mod reading_pattern;

pub use access_event::AccessEvent;
pub use cache_entry::CacheEntry;
pub use cache_stats::CacheStats;
pub use content_id::ContentId;
pub use prediction_result::PredictionResult;
pub use reading_pattern::{ReadingPattern, SequenceKind};
