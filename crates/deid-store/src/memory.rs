use std::collections::HashMap;
use std::sync::RwLock;

use deid_model::{RecordKind, Result, SanitizedRecord};

use crate::store::{InsertOutcome, RecordStore};
use crate::table::KindTable;

/// In-memory store for tests and bounded batch jobs.
///
/// The whole map sits behind one `RwLock`; `insert_if_absent` runs the
/// check and the write under a single write guard, so the idempotency
/// invariant holds under concurrent ingestion of the same `resource_id`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<RecordKind, KindTable>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn insert_if_absent(&self, record: SanitizedRecord) -> Result<InsertOutcome> {
        let mut tables = self
            .tables
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let table = tables.entry(record.kind).or_default();
        match table.insert_if_absent(record) {
            Some(existing) => Ok(InsertOutcome::Existing(existing.clone())),
            None => Ok(InsertOutcome::Inserted),
        }
    }

    fn get(&self, kind: RecordKind, resource_id: &str) -> Result<Option<SanitizedRecord>> {
        let tables = self
            .tables
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(tables
            .get(&kind)
            .and_then(|table| table.get(resource_id))
            .cloned())
    }

    fn list(&self, kind: RecordKind, offset: usize, limit: usize) -> Result<Vec<SanitizedRecord>> {
        let tables = self
            .tables
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(tables
            .get(&kind)
            .map(|table| table.page(offset, limit))
            .unwrap_or_default())
    }

    fn count(&self, kind: RecordKind) -> Result<usize> {
        let tables = self
            .tables
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(tables.get(&kind).map(KindTable::len).unwrap_or_default())
    }

    fn clear_kind(&self, kind: RecordKind) -> Result<usize> {
        let mut tables = self
            .tables
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(tables.remove(&kind).map(|table| table.len()).unwrap_or(0))
    }
}
