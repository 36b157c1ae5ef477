//! Persistent store boundary for sanitized records.
//!
//! The store contract is intentionally small: lookup by
//! `(kind, resource_id)`, atomic insert-if-absent, paginated listing, and
//! per-kind delete. Two implementations are provided: an in-memory store
//! for tests and bounded jobs, and an NDJSON-file store that persists one
//! file per record kind under a data directory.

mod memory;
mod ndjson;
mod store;
mod table;

pub use memory::MemoryStore;
pub use ndjson::NdjsonStore;
pub use store::{InsertOutcome, RecordStore};
