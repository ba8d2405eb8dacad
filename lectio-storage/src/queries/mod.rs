//! Row-level SQL for the two tables.

pub mod entry_ops;
pub mod event_ops;
