//! Append and windowed query over the access_events log.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use lectio_core::errors::LectioResult;
use lectio_core::models::AccessEvent;

use crate::to_storage_err;

use super::entry_ops::parse_timestamp;

pub fn append_event(conn: &Connection, event: &AccessEvent) -> LectioResult<()> {
    conn.execute(
        "INSERT INTO access_events (
            collection_id, section_id, timestamp, duration_minutes, items_consumed
        ) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            event.collection_id,
            event.section_id,
            event.timestamp.to_rfc3339(),
            event.duration_minutes,
            event.items_consumed,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// The most recent events at or after `since`, newest first, capped at `limit`.
pub fn query_recent(
    conn: &Connection,
    limit: usize,
    since: DateTime<Utc>,
) -> LectioResult<Vec<AccessEvent>> {
    let mut stmt = conn
        .prepare(
            "SELECT collection_id, section_id, timestamp, duration_minutes, items_consumed
             FROM access_events
             WHERE timestamp >= ?1
             ORDER BY timestamp DESC, id DESC
             LIMIT ?2",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![since.to_rfc3339(), limit as i64], |row| {
            let timestamp: String = row.get(2)?;
            Ok(AccessEvent {
                collection_id: row.get(0)?,
                section_id: row.get(1)?,
                timestamp: parse_timestamp(&timestamp, 2)?,
                duration_minutes: row.get(3)?,
                items_consumed: row.get(4)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut events = Vec::new();
    for row in rows {
        events.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(events)
}
