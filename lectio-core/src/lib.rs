//! # lectio-core
//!
//! Foundation crate for the lectio predictive cache engine.
//! Defines all models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{CacheConfig, PredictionConfig};
pub use errors::{LectioError, LectioResult};
pub use models::{
    AccessEvent, CacheEntry, CacheStats, ContentId, PredictionResult, ReadingPattern, SequenceKind,
};
pub use traits::{IContentStore, IEntryStore, IEventStore};
