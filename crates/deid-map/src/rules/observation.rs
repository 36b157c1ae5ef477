//! Observation mapping rule.

use deid_model::RecordKind;

use super::{FLOAT, TEXT, coding, coding_in_list, path};
use crate::rule::{KindRule, RefRule, TransformClass};

pub(super) fn rule() -> KindRule {
    KindRule::new(RecordKind::Observation)
        .patient_ref(RefRule::reference(path().key("subject").key("reference")))
        .encounter_ref(RefRule::reference(path().key("encounter").key("reference")))
        .field("status", path().key("status"), TEXT)
        .field("category", coding_in_list("category", "code"), TEXT)
        .field("code", coding("code", "code"), TEXT)
        .field("display", coding("code", "display"), TEXT)
        .field(
            "value_quantity",
            path().key("valueQuantity").key("value"),
            FLOAT,
        )
        .field("value_unit", path().key("valueQuantity").key("unit"), TEXT)
        .field("value_string", path().key("valueString"), TEXT)
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
