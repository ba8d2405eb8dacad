use chrono::{DateTime, Utc};

use crate::errors::LectioResult;
use crate::models::AccessEvent;

/// Append-only log of content reads, consumed by the pattern analyzer.
pub trait IEventStore: Send + Sync {
    fn append_event(&self, event: &AccessEvent) -> LectioResult<()>;

    /// The most recent events at or after `since`, newest first,
    /// capped at `limit`.
    fn query_recent(&self, limit: usize, since: DateTime<Utc>) -> LectioResult<Vec<AccessEvent>>;
}

/// Forwarding impl so one store handle can back several components.
impl<T: IEventStore + ?Sized> IEventStore for std::sync::Arc<T> {
    fn append_event(&self, event: &AccessEvent) -> LectioResult<()> {
        (**self).append_event(event)
    }
    fn query_recent(&self, limit: usize, since: DateTime<Utc>) -> LectioResult<Vec<AccessEvent>> {
        (**self).query_recent(limit, since)
    }
}
