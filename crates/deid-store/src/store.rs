use deid_model::{RecordKind, Result, SanitizedRecord};

/// Result of a conditional insert.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertOutcome {
    /// The record was written; this is its first ingestion.
    Inserted,
    /// A record with this `resource_id` already exists; the stored record
    /// is returned unchanged and nothing was written.
    Existing(SanitizedRecord),
}

impl InsertOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted)
    }
}

/// Storage contract for sanitized records.
///
/// `insert_if_absent` must behave as a single atomic conditional insert:
/// two concurrent ingestions of the same `resource_id` must resolve to one
/// `Inserted` and one `Existing`, never two writes.
pub trait RecordStore: Send + Sync {
    fn insert_if_absent(&self, record: SanitizedRecord) -> Result<InsertOutcome>;

    fn get(&self, kind: RecordKind, resource_id: &str) -> Result<Option<SanitizedRecord>>;

    /// Records of one kind in first-write order, `offset`/`limit` paged.
    fn list(&self, kind: RecordKind, offset: usize, limit: usize) -> Result<Vec<SanitizedRecord>>;

    fn count(&self, kind: RecordKind) -> Result<usize>;

    /// Delete all records of one kind, returning how many were removed.
    fn clear_kind(&self, kind: RecordKind) -> Result<usize>;

    /// Delete every kind, in reverse dependency order so referencing
    /// kinds go before the kinds they point at.
    fn clear_all(&self) -> Result<usize> {
        let mut total = 0;
        for kind in RecordKind::deletion_order() {
            total += self.clear_kind(kind)?;
        }
        Ok(total)
    }
}
