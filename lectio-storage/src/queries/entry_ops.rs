//! Upsert, get, delete, bulk expiry, and aggregation over cache_entries.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use lectio_core::errors::LectioResult;
use lectio_core::models::CacheEntry;

use crate::to_storage_err;

/// Insert or replace an entry. The stored row always reflects the caller's
/// counters, so a replace also serves as a counter write-back.
pub fn upsert_entry(conn: &Connection, entry: &CacheEntry) -> LectioResult<()> {
    let value_json =
        serde_json::to_string(&entry.value).map_err(|e| to_storage_err(e.to_string()))?;

    conn.execute(
        "INSERT OR REPLACE INTO cache_entries (
            key, value, created_at, ttl_seconds, priority, access_count, last_accessed
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            entry.key,
            value_json,
            entry.created_at.to_rfc3339(),
            entry.ttl_seconds,
            entry.priority,
            entry.access_count,
            entry.last_accessed.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_entry(conn: &Connection, key: &str) -> LectioResult<Option<CacheEntry>> {
    conn.query_row(
        "SELECT key, value, created_at, ttl_seconds, priority, access_count, last_accessed
         FROM cache_entries WHERE key = ?1",
        params![key],
        entry_from_row,
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn delete_entry(conn: &Connection, key: &str) -> LectioResult<()> {
    conn.execute("DELETE FROM cache_entries WHERE key = ?1", params![key])
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Bulk-delete entries whose TTL elapsed before `now`. Returns rows removed.
pub fn delete_expired(conn: &Connection, now: DateTime<Utc>) -> LectioResult<usize> {
    conn.execute(
        "DELETE FROM cache_entries
         WHERE julianday(created_at) + ttl_seconds / 86400.0 < julianday(?1)",
        params![now.to_rfc3339()],
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn count_entries(conn: &Connection) -> LectioResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM cache_entries", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

pub fn count_accessed_entries(conn: &Connection) -> LectioResult<usize> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM cache_entries WHERE access_count > 0",
            [],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

pub fn average_access_count(conn: &Connection) -> LectioResult<f64> {
    conn.query_row(
        "SELECT COALESCE(AVG(access_count), 0.0) FROM cache_entries",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn clear_entries(conn: &Connection) -> LectioResult<()> {
    conn.execute("DELETE FROM cache_entries", [])
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<CacheEntry> {
    let value_json: String = row.get(1)?;
    let created_at: String = row.get(2)?;
    let last_accessed: String = row.get(6)?;

    Ok(CacheEntry {
        key: row.get(0)?,
        value: serde_json::from_str(&value_json).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
        })?,
        created_at: parse_timestamp(&created_at, 2)?,
        ttl_seconds: row.get(3)?,
        priority: row.get(4)?,
        access_count: row.get(5)?,
        last_accessed: parse_timestamp(&last_accessed, 6)?,
    })
}

pub(crate) fn parse_timestamp(raw: &str, column: usize) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                column,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}
