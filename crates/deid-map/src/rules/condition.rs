//! Condition mapping rule.

use deid_model::RecordKind;

use super::{TEXT, coding, coding_in_list, path};
use crate::rule::{KindRule, RefRule, TransformClass};

pub(super) fn rule() -> KindRule {
    KindRule::new(RecordKind::Condition)
        .patient_ref(RefRule::reference(path().key("subject").key("reference")))
        .encounter_ref(RefRule::reference(path().key("encounter").key("reference")))
        .field("code", coding("code", "code"), TEXT)
        .field("display", coding("code", "display"), TEXT)
        .field("clinical_status", coding("clinicalStatus", "code"), TEXT)
        .field(
            "verification_status",
            coding("verificationStatus", "code"),
            TEXT,
        )
        .field("category", coding_in_list("category", "code"), TEXT)
        .field(
            "onset_date",
            path().key("onsetDateTime"),
            TransformClass::ShiftDateTime,
        )
        .field(
            "recorded_date",
            path().key("recordedDate"),
            TransformClass::ShiftDateTime,
        )
}
