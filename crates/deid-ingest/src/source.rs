//! Upstream batch source boundary.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use deid_model::{DeidError, RecordKind, Result};
use serde_json::Value;
use tracing::{debug, warn};

/// Raw record batches keyed by record kind, as delivered by the upstream
/// bulk export.
pub type RawBatches = BTreeMap<RecordKind, Vec<Value>>;

/// Supplier of raw record batches.
///
/// How the batches were transported or decoded is the collaborator's
/// concern; the pipeline only requires that each raw record expose a
/// resource-type discriminator and an `id`. A fetch failure is fatal to
/// the current ingestion invocation.
pub trait BatchSource {
    fn fetch(&self) -> Result<RawBatches>;
}

/// Batch source reading a bulk-export directory of NDJSON files.
///
/// Files are matched to record kinds by name prefix, as in the upstream
/// export manifest convention (`Patient.000.ndjson`,
/// `PractitionerRole.000.ndjson`, ...). The longest matching kind name
/// wins, so role files are not swallowed by the practitioner prefix.
/// Files matching no kind are ignored.
#[derive(Debug, Clone)]
pub struct ExportFolderSource {
    folder: PathBuf,
}

impl ExportFolderSource {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }
}

impl BatchSource for ExportFolderSource {
    fn fetch(&self) -> Result<RawBatches> {
        let entries = fs::read_dir(&self.folder).map_err(|error| {
            DeidError::Source(format!(
                "cannot read export folder {}: {error}",
                self.folder.display()
            ))
        })?;

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|error| DeidError::Source(error.to_string()))?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("ndjson") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut batches = RawBatches::new();
        for path in paths {
            let Some(kind) = kind_for_file(&path) else {
                debug!(file = %path.display(), "no record kind matches file name");
                continue;
            };
            let records = read_ndjson(&path)?;
            debug!(kind = %kind, file = %path.display(), records = records.len(), "fetched batch file");
            batches.entry(kind).or_default().extend(records);
        }
        Ok(batches)
    }
}

/// Match a file name to a record kind by prefix, longest kind name first.
fn kind_for_file(path: &std::path::Path) -> Option<RecordKind> {
    let stem = path.file_stem()?.to_str()?;
    let mut kinds = RecordKind::INGESTION_ORDER;
    kinds.sort_by_key(|kind| std::cmp::Reverse(kind.as_str().len()));
    kinds
        .into_iter()
        .find(|kind| stem.starts_with(kind.as_str()))
}

fn read_ndjson(path: &std::path::Path) -> Result<Vec<Value>> {
    let reader = BufReader::new(File::open(path).map_err(|error| {
        DeidError::Source(format!("cannot open {}: {error}", path.display()))
    })?);

    let mut records = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(|error| DeidError::Source(error.to_string()))?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(&line) {
            Ok(value) => records.push(value),
            Err(error) => {
                // A corrupt line is a transport defect; the batch file as
                // delivered is unusable.
                warn!(file = %path.display(), line = line_no + 1, %error, "unparseable export line");
                return Err(DeidError::Source(format!(
                    "{}:{}: {error}",
                    path.display(),
                    line_no + 1
                )));
            }
        }
    }
    Ok(records)
}
