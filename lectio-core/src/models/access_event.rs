use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::ContentId;

/// One recorded content read. Append-only; never mutated after recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessEvent {
    pub collection_id: String,
    pub section_id: u32,
    pub timestamp: DateTime<Utc>,
    /// Session length in minutes, when the caller measured one.
    pub duration_minutes: Option<f64>,
    /// Items consumed during the session, when the caller counted them.
    pub items_consumed: Option<u32>,
}

impl AccessEvent {
    pub fn new(collection_id: impl Into<String>, section_id: u32) -> Self {
        Self {
            collection_id: collection_id.into(),
            section_id,
            timestamp: Utc::now(),
            duration_minutes: None,
            items_consumed: None,
        }
    }

    pub fn with_duration(mut self, minutes: f64) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    pub fn with_items(mut self, items: u32) -> Self {
        self.items_consumed = Some(items);
        self
    }

    pub fn content_id(&self) -> ContentId {
        ContentId::new(self.collection_id.clone(), self.section_id)
    }

    /// Hour bucket (0-23), derived from the timestamp.
    pub fn hour_of_day(&self) -> u32 {
        self.timestamp.hour()
    }
}
