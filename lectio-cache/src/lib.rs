//! # lectio-cache
//!
//! The two-tier cache: a bounded in-memory tier with priority-weighted LRU
//! eviction, coordinated over any `IEntryStore` as the durability path.
//!
//! | Tier | Role |
//! |------|------|
//! | Memory | Fast path; non-authoritative accelerator, bounded at 50 entries |
//! | Persistent | Source of durable truth; survives restarts |
//!
//! Reads check memory first, then promote persistent hits. Writes land in
//! memory first so a failed durable write never loses the value.

pub mod coordinator;
pub mod memory_tier;

pub use coordinator::CacheCoordinator;
pub use memory_tier::MemoryTier;
