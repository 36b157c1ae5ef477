//! Data model shared across the de-identification pipeline.
//!
//! This crate defines the fixed catalogue of clinical record kinds, the
//! sanitized record shape produced by the mapping engine, the per-kind
//! ingestion report, and the shared error type.

mod error;
mod kind;
mod record;
mod report;

pub use error::{DeidError, Result};
pub use kind::RecordKind;
pub use record::{FieldValue, SanitizedRecord};
pub use report::{IngestionReport, KindCounts};
