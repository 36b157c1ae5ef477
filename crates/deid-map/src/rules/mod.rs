//! Per-kind mapping rule tables.
//!
//! One module per record kind, each returning the declarative [`KindRule`]
//! for that kind. The tables are the single place where source field
//! paths meet their transform class; the engine in [`crate::engine`] is
//! the only code that interprets them.
//!
//! | Kind | Notable rules |
//! |------|---------------|
//! | Patient | official-name preference, dropped government identifiers |
//! | Encounter | pre-shift length-of-stay derivation |
//! | DiagnosticReport | redacted conclusion, dropped attachment payloads |
//! | DocumentReference | redacted description, dropped attachment data |
//! | Practitioner | NPI retained as linking key |
//! | PractitionerRole | identifier-style practitioner/organization links |
//! | Organization | NPI retained, facility name replaced |

mod allergy_intolerance;
mod condition;
mod diagnostic_report;
mod document_reference;
mod encounter;
mod immunization;
mod medication_request;
mod observation;
mod organization;
mod patient;
mod practitioner;
mod practitioner_role;
mod procedure;

use deid_model::RecordKind;

use crate::path::FieldPath;
use crate::rule::{KindRule, TransformClass, ValueKind};

/// The declarative mapping rule for a record kind.
pub fn rule_for(kind: RecordKind) -> KindRule {
    match kind {
        RecordKind::Patient => patient::rule(),
        RecordKind::Encounter => encounter::rule(),
        RecordKind::Condition => condition::rule(),
        RecordKind::Observation => observation::rule(),
        RecordKind::MedicationRequest => medication_request::rule(),
        RecordKind::Procedure => procedure::rule(),
        RecordKind::DiagnosticReport => diagnostic_report::rule(),
        RecordKind::DocumentReference => document_reference::rule(),
        RecordKind::AllergyIntolerance => allergy_intolerance::rule(),
        RecordKind::Immunization => immunization::rule(),
        RecordKind::Practitioner => practitioner::rule(),
        RecordKind::PractitionerRole => practitioner_role::rule(),
        RecordKind::Organization => organization::rule(),
    }
}

pub(super) const TEXT: TransformClass = TransformClass::PassThrough(ValueKind::Text);
pub(super) const FLOAT: TransformClass = TransformClass::PassThrough(ValueKind::Float);
pub(super) const BOOLEAN: TransformClass = TransformClass::PassThrough(ValueKind::Boolean);
pub(super) const KEEP_TEXT: TransformClass = TransformClass::Keep(ValueKind::Text);
pub(super) const KEEP_BOOLEAN: TransformClass = TransformClass::Keep(ValueKind::Boolean);

pub(super) fn path() -> FieldPath {
    FieldPath::root()
}

/// `<field>.coding[0].<leaf>`: the first coding entry of a codeable
/// concept.
pub(super) fn coding(field: &'static str, leaf: &'static str) -> FieldPath {
    path().key(field).key("coding").first().key(leaf)
}

/// `<field>[0].coding[0].<leaf>`: first coding of the first concept in a
/// codeable-concept array.
pub(super) fn coding_in_list(field: &'static str, leaf: &'static str) -> FieldPath {
    path().key(field).first().key("coding").first().key(leaf)
}

/// Telecom entry value selected by system tag (`phone`, `email`).
pub(super) fn telecom(system: &'static str) -> FieldPath {
    path()
        .key("telecom")
        .match_tagged("system", system)
        .key("value")
}
