//! DiagnosticReport mapping rule.
//!
//! The `presentedForm` attachments carry base64-encoded clinical notes;
//! they are dropped outright and never extracted.

use deid_model::RecordKind;

use super::{TEXT, coding, coding_in_list, path};
use crate::rule::{KindRule, RefRule, TransformClass};

pub(super) fn rule() -> KindRule {
    KindRule::new(RecordKind::DiagnosticReport)
        .patient_ref(RefRule::reference(path().key("subject").key("reference")))
        .encounter_ref(RefRule::reference(path().key("encounter").key("reference")))
        .field("status", path().key("status"), TEXT)
        .field("category", coding_in_list("category", "code"), TEXT)
        .field("code", coding("code", "code"), TEXT)
        .field("display", coding("code", "display"), TEXT)
        .field(
            "conclusion",
            path().key("conclusion"),
            TransformClass::Redact,
        )
        .field(
            "effective_date",
            path().key("effectiveDateTime"),
            TransformClass::ShiftDateTime,
        )
        .field(
            "issued_date",
            path().key("issued"),
            TransformClass::ShiftDateTime,
        )
}
