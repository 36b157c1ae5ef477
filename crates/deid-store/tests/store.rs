//! Store contract tests, run against both implementations.

use deid_model::{FieldValue, RecordKind, SanitizedRecord};
use deid_store::{InsertOutcome, MemoryStore, NdjsonStore, RecordStore};

fn record(kind: RecordKind, id: &str) -> SanitizedRecord {
    let mut record = SanitizedRecord::new(kind, id);
    record.set("status", Some(FieldValue::Text("final".into())));
    record
}

fn assert_contract(store: &dyn RecordStore) {
    // First write wins.
    let outcome = store
        .insert_if_absent(record(RecordKind::Patient, "p-1"))
        .unwrap();
    assert!(outcome.is_inserted());

    // Re-insert is a no-op returning the existing record unchanged.
    let mut altered = record(RecordKind::Patient, "p-1");
    altered.set("status", Some(FieldValue::Text("amended".into())));
    match store.insert_if_absent(altered).unwrap() {
        InsertOutcome::Existing(existing) => {
            assert_eq!(existing.text("status"), Some("final"));
        }
        InsertOutcome::Inserted => panic!("duplicate resource_id was inserted"),
    }
    assert_eq!(store.count(RecordKind::Patient).unwrap(), 1);

    // resource_id uniqueness is per kind.
    assert!(
        store
            .insert_if_absent(record(RecordKind::Encounter, "p-1"))
            .unwrap()
            .is_inserted()
    );

    // Pagination in first-write order.
    for n in 2..=6 {
        store
            .insert_if_absent(record(RecordKind::Patient, &format!("p-{n}")))
            .unwrap();
    }
    let page = store.list(RecordKind::Patient, 2, 2).unwrap();
    let ids: Vec<&str> = page.iter().map(|r| r.resource_id.as_str()).collect();
    assert_eq!(ids, ["p-3", "p-4"]);

    // Per-kind clear.
    assert_eq!(store.clear_kind(RecordKind::Patient).unwrap(), 6);
    assert_eq!(store.count(RecordKind::Patient).unwrap(), 0);
    assert_eq!(store.count(RecordKind::Encounter).unwrap(), 1);

    // clear_all covers the remaining kinds.
    assert_eq!(store.clear_all().unwrap(), 1);
    assert_eq!(store.count(RecordKind::Encounter).unwrap(), 0);
}

#[test]
fn memory_store_contract() {
    assert_contract(&MemoryStore::new());
}

#[test]
fn ndjson_store_contract() {
    let dir = tempfile::tempdir().unwrap();
    let store = NdjsonStore::open(dir.path()).unwrap();
    assert_contract(&store);
}

#[test]
fn ndjson_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = NdjsonStore::open(dir.path()).unwrap();
        store
            .insert_if_absent(record(RecordKind::Patient, "p-1"))
            .unwrap();
        store
            .insert_if_absent(record(RecordKind::Condition, "c-1"))
            .unwrap();
    }

    let reopened = NdjsonStore::open(dir.path()).unwrap();
    assert_eq!(reopened.count(RecordKind::Patient).unwrap(), 1);
    let loaded = reopened
        .get(RecordKind::Condition, "c-1")
        .unwrap()
        .expect("condition survives reopen");
    assert_eq!(loaded.text("status"), Some("final"));

    // Idempotency also holds across restarts.
    assert!(matches!(
        reopened
            .insert_if_absent(record(RecordKind::Patient, "p-1"))
            .unwrap(),
        InsertOutcome::Existing(_)
    ));
}

#[test]
fn concurrent_inserts_of_same_id_write_once() {
    use std::sync::Arc;

    let store = Arc::new(MemoryStore::new());
    let mut handles = Vec::new();
    for _ in 0..8 {
        let store = Arc::clone(&store);
        handles.push(std::thread::spawn(move || {
            store
                .insert_if_absent(record(RecordKind::Patient, "race"))
                .unwrap()
                .is_inserted()
        }));
    }
    let inserted: usize = handles
        .into_iter()
        .map(|handle| usize::from(handle.join().unwrap()))
        .sum();
    assert_eq!(inserted, 1);
    assert_eq!(store.count(RecordKind::Patient).unwrap(), 1);
}
