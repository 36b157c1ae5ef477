//! Orchestrator tests: idempotency, counts, clear-and-reingest, error
//! policy, and the non-reversibility fixture.

use std::io::Write;
use std::sync::Arc;

use deid_ingest::{BatchSource, ExportFolderSource, IngestOptions, Ingestor, RawBatches};
use deid_map::MappingEngine;
use deid_model::{DeidError, RecordKind, Result, SanitizedRecord};
use deid_store::{InsertOutcome, MemoryStore, RecordStore};
use serde_json::json;

fn sample_batches() -> RawBatches {
    let mut batches = RawBatches::new();
    batches.insert(
        RecordKind::Patient,
        vec![json!({
            "resourceType": "Patient",
            "id": "patient-1",
            "name": [{"use": "official", "family": "Doe", "given": ["John"]}],
            "identifier": [{"system": "http://hl7.org/fhir/sid/us-ssn", "value": "999-12-3456"}],
            "gender": "male",
            "birthDate": "1990-01-15",
            "address": [{"line": ["12 Main Street"], "city": "Boston", "state": "MA", "postalCode": "02101"}],
            "telecom": [{"system": "phone", "value": "555-1234"}]
        })],
    );
    batches.insert(
        RecordKind::Encounter,
        vec![json!({
            "resourceType": "Encounter",
            "id": "enc-1",
            "subject": {"reference": "Patient/patient-1"},
            "status": "finished",
            "period": {"start": "2023-01-10T08:00:00Z", "end": "2023-01-15T16:00:00Z"}
        })],
    );
    batches.insert(
        RecordKind::DiagnosticReport,
        vec![json!({
            "resourceType": "DiagnosticReport",
            "id": "report-1",
            "subject": {"reference": "Patient/patient-1"},
            "encounter": {"reference": "Encounter/enc-1"},
            "status": "final",
            "code": {"coding": [{"code": "58410-2"}]},
            "conclusion": "Patient shows signs of anemia"
        })],
    );
    batches
}

fn ingestor(store: Arc<dyn RecordStore>) -> Ingestor {
    Ingestor::new(MappingEngine::with_seed(42), store)
}

#[test]
fn ingestion_reports_per_kind_counts() {
    let store = Arc::new(MemoryStore::new());
    let report = ingestor(store.clone())
        .ingest(&sample_batches(), IngestOptions::default())
        .unwrap();

    assert_eq!(report.counts_for(RecordKind::Patient).created, 1);
    assert_eq!(report.counts_for(RecordKind::Encounter).created, 1);
    assert_eq!(report.counts_for(RecordKind::DiagnosticReport).created, 1);
    assert_eq!(report.total_created(), 3);
    assert_eq!(
        report.kinds_with_input,
        vec![
            RecordKind::Patient,
            RecordKind::Encounter,
            RecordKind::DiagnosticReport
        ]
    );
}

#[test]
fn reingestion_is_idempotent() {
    let store = Arc::new(MemoryStore::new());
    let ingestor = ingestor(store.clone());
    ingestor
        .ingest(&sample_batches(), IngestOptions::default())
        .unwrap();
    let first = store.get(RecordKind::Patient, "patient-1").unwrap().unwrap();

    let second_report = ingestor
        .ingest(&sample_batches(), IngestOptions::default())
        .unwrap();
    assert_eq!(second_report.total_created(), 0);
    assert_eq!(second_report.counts_for(RecordKind::Patient).existing, 1);
    assert_eq!(store.count(RecordKind::Patient).unwrap(), 1);

    // The stored record is returned unchanged, not rewritten.
    let after = store.get(RecordKind::Patient, "patient-1").unwrap().unwrap();
    assert_eq!(after, first);
}

#[test]
fn clear_existing_resets_the_store_first() {
    let store = Arc::new(MemoryStore::new());
    let ingestor = ingestor(store.clone());
    ingestor
        .ingest(&sample_batches(), IngestOptions::default())
        .unwrap();

    let report = ingestor
        .ingest(
            &sample_batches(),
            IngestOptions {
                clear_existing: true,
                ..IngestOptions::default()
            },
        )
        .unwrap();
    assert_eq!(report.total_created(), 3);
    assert_eq!(store.count(RecordKind::Patient).unwrap(), 1);
}

#[test]
fn no_original_pii_reaches_the_store() {
    let store = Arc::new(MemoryStore::new());
    ingestor(store.clone())
        .ingest(&sample_batches(), IngestOptions::default())
        .unwrap();

    let fixtures = [
        "999-12-3456",
        "John",
        "Doe",
        "12 Main Street",
        "555-1234",
        "anemia",
    ];
    for kind in RecordKind::INGESTION_ORDER {
        for record in store.list(kind, 0, usize::MAX).unwrap() {
            let payload = serde_json::to_string(&record).unwrap();
            for fixture in fixtures {
                assert!(
                    !payload.contains(fixture),
                    "{fixture:?} leaked into persisted {kind} record: {payload}"
                );
            }
        }
    }
}

#[test]
fn records_without_id_are_skipped_not_fatal() {
    let store = Arc::new(MemoryStore::new());
    let mut batches = RawBatches::new();
    batches.insert(
        RecordKind::Patient,
        vec![
            json!({"resourceType": "Patient", "gender": "female"}),
            json!({"resourceType": "Patient", "id": "patient-2"}),
        ],
    );
    let report = ingestor(store)
        .ingest(&batches, IngestOptions::default())
        .unwrap();
    assert_eq!(report.counts_for(RecordKind::Patient).created, 1);
    assert_eq!(report.counts_for(RecordKind::Patient).skipped, 1);
}

/// Store stub that rejects every write.
struct RejectingStore;

impl RecordStore for RejectingStore {
    fn insert_if_absent(&self, _record: SanitizedRecord) -> Result<InsertOutcome> {
        Err(DeidError::Store("disk full".into()))
    }
    fn get(&self, _kind: RecordKind, _id: &str) -> Result<Option<SanitizedRecord>> {
        Ok(None)
    }
    fn list(&self, _kind: RecordKind, _offset: usize, _limit: usize) -> Result<Vec<SanitizedRecord>> {
        Ok(Vec::new())
    }
    fn count(&self, _kind: RecordKind) -> Result<usize> {
        Ok(0)
    }
    fn clear_kind(&self, _kind: RecordKind) -> Result<usize> {
        Ok(0)
    }
}

#[test]
fn store_failures_are_counted_as_skipped_by_default() {
    let report = ingestor(Arc::new(RejectingStore))
        .ingest(&sample_batches(), IngestOptions::default())
        .unwrap();
    assert_eq!(report.total_created(), 0);
    assert_eq!(report.total_skipped(), 3);
}

#[test]
fn fail_fast_aborts_on_first_store_failure() {
    let result = ingestor(Arc::new(RejectingStore)).ingest(
        &sample_batches(),
        IngestOptions {
            fail_fast: true,
            ..IngestOptions::default()
        },
    );
    assert!(matches!(result, Err(DeidError::Store(_))));
}

/// Source stub standing in for an unavailable upstream.
struct FailingSource;

impl BatchSource for FailingSource {
    fn fetch(&self) -> Result<RawBatches> {
        Err(DeidError::Source("upstream unavailable".into()))
    }
}

#[test]
fn source_failure_is_fatal_and_writes_nothing() {
    let store = Arc::new(MemoryStore::new());
    let result = ingestor(store.clone()).run(
        &FailingSource,
        IngestOptions {
            clear_existing: true,
            ..IngestOptions::default()
        },
    );
    assert!(matches!(result, Err(DeidError::Source(_))));
    assert_eq!(store.count(RecordKind::Patient).unwrap(), 0);
}

#[test]
fn export_folder_source_groups_files_by_kind_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let write = |name: &str, lines: &[serde_json::Value]| {
        let mut file = std::fs::File::create(dir.path().join(name)).unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
    };
    write(
        "Patient.000.ndjson",
        &[json!({"resourceType": "Patient", "id": "p-1"})],
    );
    write(
        "Patient.001.ndjson",
        &[json!({"resourceType": "Patient", "id": "p-2"})],
    );
    write(
        "PractitionerRole.000.ndjson",
        &[json!({"resourceType": "PractitionerRole", "id": "r-1"})],
    );
    write("CarePlan.000.ndjson", &[json!({"id": "ignored"})]);

    let batches = ExportFolderSource::new(dir.path()).fetch().unwrap();
    assert_eq!(batches.get(&RecordKind::Patient).map(Vec::len), Some(2));
    assert_eq!(
        batches.get(&RecordKind::PractitionerRole).map(Vec::len),
        Some(1)
    );
    assert_eq!(batches.len(), 2);
}
