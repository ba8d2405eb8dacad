//! # lectio-storage
//!
//! SQLite persistence layer: the persistent cache tier (`cache_entries`)
//! and the append-only access event log (`access_events`), exposed through
//! the `IEntryStore` and `IEventStore` traits from lectio-core.

pub mod engine;
pub mod migrations;
pub mod pragmas;
pub mod queries;

pub use engine::StorageEngine;

use lectio_core::errors::{LectioError, StoreError};

/// Wrap a low-level SQLite failure into the workspace error type.
pub(crate) fn to_storage_err(message: impl Into<String>) -> LectioError {
    LectioError::Store(StoreError::Sqlite {
        message: message.into(),
    })
}
