//! File-backed tests: state must survive a close/reopen cycle.

use serde_json::json;

use lectio_core::models::{AccessEvent, CacheEntry};
use lectio_core::traits::{IEntryStore, IEventStore};
use lectio_storage::StorageEngine;

#[test]
fn entries_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lectio.db");

    {
        let store = StorageEngine::open(&path).unwrap();
        store
            .put_entry(&CacheEntry::new("persisted", json!("value")))
            .unwrap();
    }

    let store = StorageEngine::open(&path).unwrap();
    let loaded = store.get_entry("persisted").unwrap().unwrap();
    assert_eq!(loaded.value, json!("value"));
}

#[test]
fn events_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lectio.db");

    {
        let store = StorageEngine::open(&path).unwrap();
        store.append_event(&AccessEvent::new("essays", 7)).unwrap();
    }

    let store = StorageEngine::open(&path).unwrap();
    let events = store
        .query_recent(10, chrono::Utc::now() - chrono::Duration::hours(1))
        .unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].collection_id, "essays");
}

#[test]
fn reopen_is_idempotent_across_migrations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lectio.db");

    for _ in 0..3 {
        let store = StorageEngine::open(&path).unwrap();
        store.checkpoint().unwrap();
    }
}
