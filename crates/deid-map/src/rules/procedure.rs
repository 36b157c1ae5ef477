//! Procedure mapping rule.

use deid_model::RecordKind;
use deid_transform::ConsistentCategory;

use super::{TEXT, coding, path};
use crate::rule::{KindRule, RefRule, TransformClass};

pub(super) fn rule() -> KindRule {
    KindRule::new(RecordKind::Procedure)
        .patient_ref(RefRule::reference(path().key("subject").key("reference")))
        .encounter_ref(RefRule::reference(path().key("encounter").key("reference")))
        .field("status", path().key("status"), TEXT)
        .field("code", coding("code", "code"), TEXT)
        .field("display", coding("code", "display"), TEXT)
        .field("category", coding("category", "code"), TEXT)
        .field(
            "performer_display",
            path()
                .key("performer")
                .first()
                .key("actor")
                .key("display"),
            TransformClass::PseudonymizeConsistent(ConsistentCategory::ProviderName),
        )
        .field(
            "performed_date",
            path().key("performedPeriod").key("start"),
            TransformClass::ShiftDateTime,
        )
}
