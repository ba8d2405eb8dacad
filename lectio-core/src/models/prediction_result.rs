use serde::{Deserialize, Serialize};

use super::ContentId;

/// Result of predicting the next likely read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// The single most likely next content.
    pub next_content: ContentId,
    /// Certainty in the guess, 0.0-1.0.
    pub confidence: f64,
    /// Up to two additional candidates worth prefetching.
    pub related_content: Vec<ContentId>,
}
