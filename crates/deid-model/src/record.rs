use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::kind::RecordKind;

/// A single sanitized field value.
///
/// Tagged on serialization so date and text values survive a store
/// round-trip without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            FieldValue::DateTime(value) => Some(*value),
            _ => None,
        }
    }
}

/// A de-identified record as persisted by the store.
///
/// `resource_id` is the external identifier supplied by the source and the
/// idempotency key: a record is written once, at first ingestion, and never
/// updated afterwards. The optional patient/encounter references point at
/// other sanitized records by their `resource_id` and may dangle.
///
/// Every value in `fields` has already passed through the field
/// classification; serializing the whole record therefore yields the audit
/// payload without any further scrubbing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SanitizedRecord {
    pub kind: RecordKind,
    pub resource_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encounter_resource_id: Option<String>,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
    pub created_at: DateTime<Utc>,
}

impl SanitizedRecord {
    pub fn new(kind: RecordKind, resource_id: impl Into<String>) -> Self {
        Self {
            kind,
            resource_id: resource_id.into(),
            patient_resource_id: None,
            encounter_resource_id: None,
            fields: BTreeMap::new(),
            created_at: Utc::now(),
        }
    }

    /// Insert a field value under `name`, ignoring absent values.
    pub fn set(&mut self, name: &str, value: Option<FieldValue>) {
        if let Some(value) = value {
            self.fields.insert(name.to_string(), value);
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(FieldValue::as_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_value_round_trips_through_json() {
        let mut record = SanitizedRecord::new(RecordKind::Patient, "p-1");
        record.set("given_name", Some(FieldValue::Text("Alice".into())));
        record.set(
            "birth_date",
            Some(FieldValue::Date(
                NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
            )),
        );
        record.set("absent", None);

        let json = serde_json::to_string(&record).unwrap();
        let back: SanitizedRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        assert!(back.field("absent").is_none());
        assert_eq!(
            back.field("birth_date").and_then(FieldValue::as_date),
            NaiveDate::from_ymd_opt(1990, 1, 15)
        );
    }
}
