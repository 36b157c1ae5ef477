//! The ingestion orchestrator.

use std::sync::Arc;

use deid_map::MappingEngine;
use deid_model::{DeidError, IngestionReport, RecordKind, Result};
use deid_store::RecordStore;
use tracing::{info, info_span, warn};

use crate::source::{BatchSource, RawBatches};

/// Ingestion policy switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngestOptions {
    /// Delete all existing records (reverse dependency order) before
    /// ingesting.
    pub clear_existing: bool,
    /// Abort the whole run on the first store failure instead of
    /// counting the record as skipped and continuing. The default favors
    /// maximal ingestion; re-running is idempotent either way.
    pub fail_fast: bool,
}

/// Orchestrates one ingestion pass: per kind, per record, map and upsert.
pub struct Ingestor {
    engine: MappingEngine,
    store: Arc<dyn RecordStore>,
}

impl Ingestor {
    pub fn new(engine: MappingEngine, store: Arc<dyn RecordStore>) -> Self {
        Self { engine, store }
    }

    pub fn engine(&self) -> &MappingEngine {
        &self.engine
    }

    /// Fetch batches from `source` and ingest them. A source failure is
    /// fatal; nothing is cleared or written in that case.
    pub fn run(&self, source: &dyn BatchSource, options: IngestOptions) -> Result<IngestionReport> {
        let batches = source.fetch()?;
        self.ingest(&batches, options)
    }

    /// Ingest pre-fetched batches, kind by kind in dependency order.
    ///
    /// Each record's transform-then-upsert is the unit of atomicity:
    /// aborting between records leaves no partial per-record state, and
    /// already-written records stay written.
    pub fn ingest(&self, batches: &RawBatches, options: IngestOptions) -> Result<IngestionReport> {
        if options.clear_existing {
            let removed = self.store.clear_all()?;
            info!(removed, "cleared existing records before ingestion");
        }

        let mut report = IngestionReport::default();
        for kind in RecordKind::INGESTION_ORDER {
            let Some(batch) = batches.get(&kind).filter(|batch| !batch.is_empty()) else {
                continue;
            };
            report.kinds_with_input.push(kind);

            let span = info_span!("ingest_kind", kind = %kind, records = batch.len());
            let _guard = span.enter();
            for raw in batch {
                self.ingest_record(kind, raw, options, &mut report)?;
            }
            let counts = report.counts_for(kind);
            info!(
                created = counts.created,
                existing = counts.existing,
                skipped = counts.skipped,
                "kind ingested"
            );
        }
        Ok(report)
    }

    fn ingest_record(
        &self,
        kind: RecordKind,
        raw: &serde_json::Value,
        options: IngestOptions,
        report: &mut IngestionReport,
    ) -> Result<()> {
        let record = match self.engine.apply(kind, raw) {
            Ok(record) => record,
            Err(DeidError::MissingResourceId) => {
                warn!(kind = %kind, "skipping raw record without an id");
                report.record_skipped(kind);
                return Ok(());
            }
            Err(error) => return Err(error),
        };

        match self.store.insert_if_absent(record) {
            Ok(outcome) if outcome.is_inserted() => report.record_created(kind),
            Ok(_) => report.record_existing(kind),
            Err(error) if options.fail_fast => return Err(error),
            Err(error) => {
                warn!(kind = %kind, %error, "store rejected record, counting as skipped");
                report.record_skipped(kind);
            }
        }
        Ok(())
    }
}
