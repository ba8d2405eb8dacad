//! Schema migrations tracked via `PRAGMA user_version`.

use rusqlite::Connection;

use lectio_core::errors::{LectioError, LectioResult, StoreError};

use crate::to_storage_err;

/// Current schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Bring the database up to the current schema version.
pub fn run_migrations(conn: &Connection) -> LectioResult<()> {
    let version = current_version(conn)?;
    if version < 1 {
        v001_initial(conn).map_err(|e| {
            LectioError::Store(StoreError::MigrationFailed {
                version: 1,
                reason: e.to_string(),
            })
        })?;
        set_version(conn, 1)?;
    }
    Ok(())
}

fn current_version(conn: &Connection) -> LectioResult<u32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

fn set_version(conn: &Connection, version: u32) -> LectioResult<()> {
    conn.pragma_update(None, "user_version", version)
        .map_err(|e| to_storage_err(e.to_string()))
}

/// v001: cache_entries (persistent tier) and access_events (event log).
fn v001_initial(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS cache_entries (
            key           TEXT PRIMARY KEY,
            value         TEXT NOT NULL,
            created_at    TEXT NOT NULL,
            ttl_seconds   INTEGER NOT NULL,
            priority      INTEGER NOT NULL DEFAULT 5,
            access_count  INTEGER NOT NULL DEFAULT 0,
            last_accessed TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_created ON cache_entries(created_at);

        CREATE TABLE IF NOT EXISTS access_events (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            collection_id    TEXT NOT NULL,
            section_id       INTEGER NOT NULL,
            timestamp        TEXT NOT NULL,
            duration_minutes REAL,
            items_consumed   INTEGER
        );

        CREATE INDEX IF NOT EXISTS idx_events_timestamp ON access_events(timestamp);
        ",
    )
}
