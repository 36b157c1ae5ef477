//! The shared engine that applies a [`crate::KindRule`] to a raw
//! document.

use deid_model::{DeidError, FieldValue, RecordKind, Result, SanitizedRecord};
use deid_transform::{
    Pseudonymizer, fingerprint, parse_date, parse_instant, redact_free_text, shift_date,
    shift_datetime,
};
use serde_json::Value;
use tracing::debug;

use crate::path::FieldPath;
use crate::rule::{
    DerivedRule, RefRule, ShiftKeySource, TransformClass, ValueKind, parse_reference,
};
use crate::rules::rule_for;

/// Applies per-kind mapping rules through one shared pseudonymization
/// scope.
///
/// The engine is `Sync`: the pseudonymizer serializes its own cache
/// access, so record transformations may run concurrently against a
/// single instance. Consistency of pseudonymized values is scoped to the
/// engine's lifetime.
#[derive(Debug, Default)]
pub struct MappingEngine {
    pseudonymizer: Pseudonymizer,
}

impl MappingEngine {
    pub fn new() -> Self {
        Self {
            pseudonymizer: Pseudonymizer::new(),
        }
    }

    /// Seeded engine for reproducible tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            pseudonymizer: Pseudonymizer::with_seed(seed),
        }
    }

    pub fn pseudonymizer(&self) -> &Pseudonymizer {
        &self.pseudonymizer
    }

    /// Sanitize one raw document of the given kind.
    ///
    /// The only fatal condition is a missing `id`: every other malformed
    /// or missing field resolves to an absent value and the record is
    /// still produced.
    pub fn apply(&self, kind: RecordKind, raw: &Value) -> Result<SanitizedRecord> {
        let rule = rule_for(kind);
        let resource_id = raw
            .get("id")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(DeidError::MissingResourceId)?;

        let mut record = SanitizedRecord::new(kind, resource_id);
        record.patient_resource_id = resolve_ref(rule.patient_ref.as_ref(), raw);
        record.encounter_resource_id = resolve_ref(rule.encounter_ref.as_ref(), raw);

        let shift_key = match rule.shift_key {
            ShiftKeySource::OwnResourceId => resource_id.to_string(),
            ShiftKeySource::PatientReference => {
                record.patient_resource_id.clone().unwrap_or_default()
            }
        };

        // Derived fields use the pre-shift instants.
        for derived in &rule.derived {
            let DerivedRule::DaysBetween { name, start, end } = derived;
            let value = days_between(
                start.resolve_str(raw).and_then(parse_instant),
                end.resolve_str(raw).and_then(parse_instant),
            );
            record.set(name, value.map(FieldValue::Integer));
        }

        for field in &rule.fields {
            let value = self.transform(field.class, &field.path, raw, &shift_key);
            record.set(field.name, value);
        }

        debug!(
            kind = %kind,
            resource_id = %fingerprint(resource_id),
            fields = record.fields.len(),
            "sanitized record"
        );
        Ok(record)
    }

    fn transform(
        &self,
        class: TransformClass,
        path: &FieldPath,
        raw: &Value,
        shift_key: &str,
    ) -> Option<FieldValue> {
        match class {
            TransformClass::PassThrough(kind) | TransformClass::Keep(kind) => {
                coerce(path.resolve(raw)?, kind)
            }
            TransformClass::PseudonymizeConsistent(category) => self
                .pseudonymizer
                .consistent(category, path.resolve_str(raw)?)
                .map(FieldValue::Text),
            TransformClass::PseudonymizeIndependent(category) => self
                .pseudonymizer
                .independent(category, path.resolve_str(raw)?)
                .map(FieldValue::Text),
            TransformClass::ShiftDateTime => {
                let instant = path.resolve_str(raw).and_then(parse_instant);
                shift_datetime(instant, shift_key).map(FieldValue::DateTime)
            }
            TransformClass::ShiftDate => {
                let date = path.resolve_str(raw).and_then(parse_date);
                shift_date(date, shift_key).map(FieldValue::Date)
            }
            TransformClass::Redact => redact_free_text(path.resolve_str(raw)?)
                .map(|sentinel| FieldValue::Text(sentinel.to_string())),
        }
    }
}

fn resolve_ref(rule: Option<&RefRule>, raw: &Value) -> Option<String> {
    let rule = rule?;
    parse_reference(rule.path.resolve_str(raw)?)
}

fn coerce(value: &Value, kind: ValueKind) -> Option<FieldValue> {
    match kind {
        ValueKind::Text => value
            .as_str()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(|text| FieldValue::Text(text.to_string())),
        ValueKind::Integer => value.as_i64().map(FieldValue::Integer),
        ValueKind::Float => value.as_f64().map(FieldValue::Float),
        ValueKind::Boolean => value.as_bool().map(FieldValue::Boolean),
    }
}

fn days_between(
    start: Option<chrono::NaiveDateTime>,
    end: Option<chrono::NaiveDateTime>,
) -> Option<i64> {
    Some((end? - start?).num_days())
}
