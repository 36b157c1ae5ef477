//! MedicationRequest mapping rule.

use deid_model::RecordKind;
use deid_transform::ConsistentCategory;

use super::{TEXT, coding, path};
use crate::rule::{KindRule, RefRule, TransformClass};

pub(super) fn rule() -> KindRule {
    KindRule::new(RecordKind::MedicationRequest)
        .patient_ref(RefRule::reference(path().key("subject").key("reference")))
        .encounter_ref(RefRule::reference(path().key("encounter").key("reference")))
        .field("status", path().key("status"), TEXT)
        .field("intent", path().key("intent"), TEXT)
        .field(
            "medication_code",
            coding("medicationCodeableConcept", "code"),
            TEXT,
        )
        .field(
            "medication_display",
            coding("medicationCodeableConcept", "display"),
            TEXT,
        )
        .field(
            "dosage_text",
            path().key("dosageInstruction").first().key("text"),
            TEXT,
        )
        .field(
            "requester_display",
            path().key("requester").key("display"),
            TransformClass::PseudonymizeConsistent(ConsistentCategory::ProviderName),
        )
        .field(
            "authored_on",
            path().key("authoredOn"),
            TransformClass::ShiftDateTime,
        )
}
