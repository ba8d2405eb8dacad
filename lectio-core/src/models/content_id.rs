use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one unit of prefetchable content: a section within a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId {
    pub collection: String,
    pub section: u32,
}

impl ContentId {
    pub fn new(collection: impl Into<String>, section: u32) -> Self {
        Self {
            collection: collection.into(),
            section,
        }
    }

    /// Same collection, `delta` sections ahead.
    pub fn offset(&self, delta: u32) -> Self {
        Self {
            collection: self.collection.clone(),
            section: self.section + delta,
        }
    }

    /// Same collection, fixed section.
    pub fn at_section(&self, section: u32) -> Self {
        Self {
            collection: self.collection.clone(),
            section,
        }
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.collection, self.section)
    }
}
