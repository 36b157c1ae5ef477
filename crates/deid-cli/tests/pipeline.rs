//! Full pipeline test: export folder in, NDJSON store out.

use std::io::Write;
use std::sync::Arc;

use deid_ingest::{ExportFolderSource, IngestOptions, Ingestor};
use deid_map::MappingEngine;
use deid_model::RecordKind;
use deid_store::{NdjsonStore, RecordStore};
use serde_json::json;

fn write_export_folder(dir: &std::path::Path) {
    let write = |name: &str, lines: &[serde_json::Value]| {
        let mut file = std::fs::File::create(dir.join(name)).unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
    };
    write(
        "Patient.000.ndjson",
        &[json!({
            "resourceType": "Patient",
            "id": "patient-1",
            "name": [{"use": "official", "family": "Doe", "given": ["John"]}],
            "gender": "male",
            "birthDate": "1990-01-15",
            "address": [{"line": ["12 Main Street"], "city": "Boston", "state": "MA", "postalCode": "02101"}]
        })],
    );
    write(
        "Encounter.000.ndjson",
        &[json!({
            "resourceType": "Encounter",
            "id": "enc-1",
            "subject": {"reference": "Patient/patient-1"},
            "status": "finished",
            "period": {"start": "2023-01-10T08:00:00Z", "end": "2023-01-15T16:00:00Z"}
        })],
    );
}

#[test]
fn export_folder_to_persistent_store() {
    let export = tempfile::tempdir().unwrap();
    let data = tempfile::tempdir().unwrap();
    write_export_folder(export.path());

    let report = {
        let store = Arc::new(NdjsonStore::open(data.path()).unwrap());
        let ingestor = Ingestor::new(MappingEngine::new(), store);
        let source = ExportFolderSource::new(export.path());
        ingestor.run(&source, IngestOptions::default()).unwrap()
    };
    assert_eq!(report.counts_for(RecordKind::Patient).created, 1);
    assert_eq!(report.counts_for(RecordKind::Encounter).created, 1);
    assert_eq!(report.total_skipped(), 0);

    // A fresh store over the same directory sees the sanitized records,
    // and none of the original identifying values.
    let reopened = NdjsonStore::open(data.path()).unwrap();
    let patient = reopened
        .get(RecordKind::Patient, "patient-1")
        .unwrap()
        .expect("patient persisted");
    assert_eq!(patient.text("state"), Some("MA"));
    assert_ne!(patient.text("postal_code"), Some("02101"));
    let payload = serde_json::to_string(&patient).unwrap();
    for original in ["John", "Doe", "12 Main Street"] {
        assert!(!payload.contains(original), "{original:?} leaked: {payload}");
    }

    let encounter = reopened
        .get(RecordKind::Encounter, "enc-1")
        .unwrap()
        .expect("encounter persisted");
    assert_eq!(
        encounter
            .field("length_of_stay_days")
            .and_then(deid_model::FieldValue::as_integer),
        Some(5)
    );

    // Re-running against the same data directory is a no-op.
    let report = {
        let store = Arc::new(NdjsonStore::open(data.path()).unwrap());
        let ingestor = Ingestor::new(MappingEngine::new(), store);
        let source = ExportFolderSource::new(export.path());
        ingestor.run(&source, IngestOptions::default()).unwrap()
    };
    assert_eq!(report.total_created(), 0);
    assert_eq!(report.counts_for(RecordKind::Patient).existing, 1);
}
