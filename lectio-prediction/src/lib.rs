//! # lectio-prediction
//!
//! Infers a reader's consumption pattern from the access event log and
//! warms the cache with the content most likely to be requested next.
//!
//! ## Pipeline
//!
//! | Stage | Output |
//! |-------|--------|
//! | Pattern analysis | `ReadingPattern` over a rolling event window |
//! | Prediction | `PredictionResult` from a deterministic rule table |
//! | Prefetch | Predicted sections cached at elevated priority |
//!
//! Prediction is a fixed rule table keyed on the sequence classification,
//! not a learned model: reproducibility and testability are the trade-off.

pub mod analyzer;
pub mod cache;
pub mod engine;
pub mod prefetch;

pub use analyzer::PatternAnalyzer;
pub use cache::PatternCache;
pub use engine::PredictionEngine;
pub use prefetch::{section_key, PrefetchOrchestrator};
