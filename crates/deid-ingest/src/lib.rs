//! Ingestion orchestration.
//!
//! The orchestrator pulls raw record batches per kind from a
//! [`BatchSource`], maps each record through the shared
//! [`deid_map::MappingEngine`], and upserts the sanitized result into a
//! [`deid_store::RecordStore`] keyed by `resource_id`. Re-running an
//! ingestion is idempotent: existing records are returned unchanged, so a
//! partially-completed run is a recoverable state, not a failure.

mod ingestor;
mod source;

pub use ingestor::{IngestOptions, Ingestor};
pub use source::{BatchSource, ExportFolderSource, RawBatches};
