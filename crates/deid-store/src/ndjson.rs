use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use deid_model::{RecordKind, Result, SanitizedRecord};
use tracing::{debug, warn};

use crate::store::{InsertOutcome, RecordStore};
use crate::table::KindTable;

/// NDJSON-file store: one `<Kind>.ndjson` file per record kind under a
/// data directory, one sanitized record per line in first-write order.
///
/// Records are append-only, which matches the store contract: a record is
/// written once and never updated. The file is appended before the
/// in-memory index is updated, all under one lock, so a failed write
/// leaves neither side changed and the per-record atomicity unit holds.
#[derive(Debug)]
pub struct NdjsonStore {
    data_dir: PathBuf,
    tables: Mutex<HashMap<RecordKind, KindTable>>,
}

impl NdjsonStore {
    /// Open a store rooted at `data_dir`, creating the directory if
    /// needed and loading any existing per-kind files.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;

        let mut tables = HashMap::new();
        for kind in RecordKind::INGESTION_ORDER {
            let path = kind_path(&data_dir, kind);
            if !path.exists() {
                continue;
            }
            let table = load_kind_file(&path, kind)?;
            debug!(kind = %kind, records = table.len(), "loaded store file");
            tables.insert(kind, table);
        }
        Ok(Self {
            data_dir,
            tables: Mutex::new(tables),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl RecordStore for NdjsonStore {
    fn insert_if_absent(&self, record: SanitizedRecord) -> Result<InsertOutcome> {
        let mut tables = self
            .tables
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let table = tables.entry(record.kind).or_default();
        if let Some(existing) = table.get(&record.resource_id) {
            return Ok(InsertOutcome::Existing(existing.clone()));
        }

        let line = serde_json::to_string(&record)?;
        let path = kind_path(&self.data_dir, record.kind);
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{line}")?;

        table.insert_if_absent(record);
        Ok(InsertOutcome::Inserted)
    }

    fn get(&self, kind: RecordKind, resource_id: &str) -> Result<Option<SanitizedRecord>> {
        let tables = self
            .tables
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(tables
            .get(&kind)
            .and_then(|table| table.get(resource_id))
            .cloned())
    }

    fn list(&self, kind: RecordKind, offset: usize, limit: usize) -> Result<Vec<SanitizedRecord>> {
        let tables = self
            .tables
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(tables
            .get(&kind)
            .map(|table| table.page(offset, limit))
            .unwrap_or_default())
    }

    fn count(&self, kind: RecordKind) -> Result<usize> {
        let tables = self
            .tables
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(tables.get(&kind).map(KindTable::len).unwrap_or_default())
    }

    fn clear_kind(&self, kind: RecordKind) -> Result<usize> {
        let mut tables = self
            .tables
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let removed = tables.remove(&kind).map(|table| table.len()).unwrap_or(0);
        let path = kind_path(&self.data_dir, kind);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(removed)
    }
}

fn kind_path(data_dir: &Path, kind: RecordKind) -> PathBuf {
    data_dir.join(format!("{}.ndjson", kind.as_str()))
}

fn load_kind_file(path: &Path, kind: RecordKind) -> Result<KindTable> {
    let mut table = KindTable::default();
    let reader = BufReader::new(File::open(path)?);
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: SanitizedRecord = serde_json::from_str(&line)?;
        if record.kind != kind {
            warn!(
                expected = %kind,
                found = %record.kind,
                "skipping record of unexpected kind in store file"
            );
            continue;
        }
        table.insert_if_absent(record);
    }
    Ok(table)
}
