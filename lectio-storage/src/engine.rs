//! StorageEngine — owns the SQLite connection, implements IEntryStore +
//! IEventStore, applies pragmas and migrations at open.

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use tracing::debug;

use lectio_core::errors::LectioResult;
use lectio_core::models::{AccessEvent, CacheEntry};
use lectio_core::traits::{IEntryStore, IEventStore};

use crate::{migrations, pragmas, queries, to_storage_err};

/// The durable store behind the cache: persistent tier + event log.
///
/// Opening is the fail-fast half of the lifecycle: pragmas and migrations
/// run here, and every later call is stateless against the handle. The
/// single connection is serialized behind a mutex, matching the engine's
/// single-caller model.
pub struct StorageEngine {
    conn: Mutex<Connection>,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> LectioResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        Self::initialize(conn)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> LectioResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> LectioResult<Self> {
        pragmas::apply_pragmas(&conn)?;
        migrations::run_migrations(&conn)?;
        debug!(version = migrations::SCHEMA_VERSION, "storage engine open");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Truncate the WAL. Intended for opportunistic maintenance windows.
    pub fn checkpoint(&self) -> LectioResult<()> {
        self.with_conn(pragmas::wal_checkpoint)
    }

    fn with_conn<F, T>(&self, f: F) -> LectioResult<T>
    where
        F: FnOnce(&Connection) -> LectioResult<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|_| to_storage_err("connection mutex poisoned"))?;
        f(&conn)
    }
}

impl IEntryStore for StorageEngine {
    fn put_entry(&self, entry: &CacheEntry) -> LectioResult<()> {
        self.with_conn(|conn| queries::entry_ops::upsert_entry(conn, entry))
    }

    fn get_entry(&self, key: &str) -> LectioResult<Option<CacheEntry>> {
        self.with_conn(|conn| queries::entry_ops::get_entry(conn, key))
    }

    fn delete_entry(&self, key: &str) -> LectioResult<()> {
        self.with_conn(|conn| queries::entry_ops::delete_entry(conn, key))
    }

    fn delete_expired(&self, now: DateTime<Utc>) -> LectioResult<usize> {
        let removed = self.with_conn(|conn| queries::entry_ops::delete_expired(conn, now))?;
        if removed > 0 {
            debug!(removed, "expired entries removed from persistent tier");
        }
        Ok(removed)
    }

    fn count_entries(&self) -> LectioResult<usize> {
        self.with_conn(queries::entry_ops::count_entries)
    }

    fn count_accessed_entries(&self) -> LectioResult<usize> {
        self.with_conn(queries::entry_ops::count_accessed_entries)
    }

    fn average_access_count(&self) -> LectioResult<f64> {
        self.with_conn(queries::entry_ops::average_access_count)
    }

    fn clear_entries(&self) -> LectioResult<()> {
        self.with_conn(queries::entry_ops::clear_entries)
    }
}

impl IEventStore for StorageEngine {
    fn append_event(&self, event: &AccessEvent) -> LectioResult<()> {
        self.with_conn(|conn| queries::event_ops::append_event(conn, event))
    }

    fn query_recent(&self, limit: usize, since: DateTime<Utc>) -> LectioResult<Vec<AccessEvent>> {
        self.with_conn(|conn| queries::event_ops::query_recent(conn, limit, since))
    }
}
