use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::kind::RecordKind;

/// Outcome counts for one record kind within an ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCounts {
    /// Records newly written by this run.
    pub created: usize,
    /// Records already present (idempotent no-ops).
    pub existing: usize,
    /// Records skipped because the store rejected the write.
    pub skipped: usize,
}

/// Per-kind result of one ingestion invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionReport {
    pub counts: BTreeMap<RecordKind, KindCounts>,
    /// Kinds that had at least one raw record in the input batches.
    pub kinds_with_input: Vec<RecordKind>,
}

impl IngestionReport {
    pub fn counts_for(&self, kind: RecordKind) -> KindCounts {
        self.counts.get(&kind).copied().unwrap_or_default()
    }

    pub fn record_created(&mut self, kind: RecordKind) {
        self.counts.entry(kind).or_default().created += 1;
    }

    pub fn record_existing(&mut self, kind: RecordKind) {
        self.counts.entry(kind).or_default().existing += 1;
    }

    pub fn record_skipped(&mut self, kind: RecordKind) {
        self.counts.entry(kind).or_default().skipped += 1;
    }

    pub fn total_created(&self) -> usize {
        self.counts.values().map(|counts| counts.created).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.counts.values().map(|counts| counts.skipped).sum()
    }
}
