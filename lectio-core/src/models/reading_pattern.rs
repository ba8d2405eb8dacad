use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ITEMS_PER_SESSION, DEFAULT_PREFERRED_HOUR, DEFAULT_SESSION_MINUTES,
};

use super::ContentId;

/// How a reader moves through content, derived from adjacent-event analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceKind {
    /// Mostly consecutive sections of the same collection.
    Sequential,
    /// A blend of consecutive and scattered reads.
    Mixed,
    /// Little to no adjacency between consecutive reads.
    Random,
}

/// Summary of a reader's recent consumption, recomputed per analysis call.
/// Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingPattern {
    /// Top-5 content ids by access frequency, most frequent first.
    pub common_content: Vec<ContentId>,
    pub average_session_minutes: f64,
    /// Hour bucket (0-23) with the most recorded events.
    pub preferred_hour: u32,
    pub average_items_per_session: f64,
    /// Content of the most recent event, if any history exists.
    pub last_content: Option<ContentId>,
    pub sequence: SequenceKind,
}

impl Default for ReadingPattern {
    /// The neutral pattern returned for an empty history. Downstream
    /// prediction must accept it without failing.
    fn default() -> Self {
        Self {
            common_content: Vec::new(),
            average_session_minutes: DEFAULT_SESSION_MINUTES,
            preferred_hour: DEFAULT_PREFERRED_HOUR,
            average_items_per_session: DEFAULT_ITEMS_PER_SESSION,
            last_content: None,
            sequence: SequenceKind::Sequential,
        }
    }
}
