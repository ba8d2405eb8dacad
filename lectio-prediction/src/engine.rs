//! Deterministic rule-table prediction over a `ReadingPattern`.

use lectio_core::constants::{CONFIDENCE_MIXED, CONFIDENCE_RANDOM, CONFIDENCE_SEQUENTIAL};
use lectio_core::models::{ContentId, PredictionResult, ReadingPattern, SequenceKind};

/// Maps a pattern to the next likely content. No hidden state, no
/// randomness: identical patterns always yield identical predictions.
pub struct PredictionEngine;

impl PredictionEngine {
    /// Returns `None` only when the pattern carries neither a last content
    /// nor any common content — there is nothing to anchor a guess to.
    pub fn predict(pattern: &ReadingPattern) -> Option<PredictionResult> {
        match pattern.sequence {
            SequenceKind::Sequential => Self::sequential(pattern),
            SequenceKind::Mixed => Self::mixed(pattern),
            SequenceKind::Random => Self::random(pattern),
        }
    }

    /// Consecutive reader: the next section, then the two after it.
    fn sequential(pattern: &ReadingPattern) -> Option<PredictionResult> {
        match &pattern.last_content {
            Some(last) => Some(PredictionResult {
                next_content: last.offset(1),
                confidence: CONFIDENCE_SEQUENTIAL,
                related_content: vec![last.offset(2), last.offset(3)],
            }),
            None => Self::from_common(pattern, CONFIDENCE_SEQUENTIAL),
        }
    }

    /// Blended reader: the next section, plus openings of other frequently
    /// read collections.
    fn mixed(pattern: &ReadingPattern) -> Option<PredictionResult> {
        let Some(last) = &pattern.last_content else {
            return Self::from_common(pattern, CONFIDENCE_MIXED);
        };
        let related = pattern
            .common_content
            .iter()
            .filter(|c| c.collection != last.collection)
            .take(2)
            .map(|c| c.at_section(1))
            .collect();
        Some(PredictionResult {
            next_content: last.offset(1),
            confidence: CONFIDENCE_MIXED,
            related_content: related,
        })
    }

    /// Scattered reader: favorite collections from the start; with no
    /// favorites, fall back to continuing the last read at low confidence.
    fn random(pattern: &ReadingPattern) -> Option<PredictionResult> {
        if pattern.common_content.is_empty() {
            let last = pattern.last_content.as_ref()?;
            return Some(PredictionResult {
                next_content: last.offset(1),
                confidence: CONFIDENCE_RANDOM,
                related_content: Vec::new(),
            });
        }
        Self::from_common(pattern, CONFIDENCE_RANDOM)
    }

    /// Anchor on the most frequent content: its opening section first,
    /// then the openings of the next two favorites.
    fn from_common(pattern: &ReadingPattern, confidence: f64) -> Option<PredictionResult> {
        let first = pattern.common_content.first()?;
        let related: Vec<ContentId> = pattern
            .common_content
            .iter()
            .skip(1)
            .take(2)
            .map(|c| c.at_section(1))
            .collect();
        Some(PredictionResult {
            next_content: first.at_section(1),
            confidence,
            related_content: related,
        })
    }
}
