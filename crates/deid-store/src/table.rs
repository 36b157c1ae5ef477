use std::collections::HashMap;

use deid_model::SanitizedRecord;

/// Insertion-ordered record table for one kind.
#[derive(Debug, Default)]
pub(crate) struct KindTable {
    order: Vec<String>,
    records: HashMap<String, SanitizedRecord>,
}

impl KindTable {
    pub(crate) fn get(&self, resource_id: &str) -> Option<&SanitizedRecord> {
        self.records.get(resource_id)
    }

    /// Insert unless present; returns the existing record on conflict.
    pub(crate) fn insert_if_absent(
        &mut self,
        record: SanitizedRecord,
    ) -> Option<&SanitizedRecord> {
        if self.records.contains_key(&record.resource_id) {
            return self.records.get(&record.resource_id);
        }
        self.order.push(record.resource_id.clone());
        self.records.insert(record.resource_id.clone(), record);
        None
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn page(&self, offset: usize, limit: usize) -> Vec<SanitizedRecord> {
        self.order
            .iter()
            .skip(offset)
            .take(limit)
            .filter_map(|id| self.records.get(id).cloned())
            .collect()
    }
}
