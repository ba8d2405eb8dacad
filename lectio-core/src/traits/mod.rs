//! Collaborator contracts consumed by the cache and prediction crates.

mod content_store;
mod entry_store;
mod event_store;

pub use content_store::IContentStore;
pub use entry_store::IEntryStore;
pub use event_store::IEventStore;
