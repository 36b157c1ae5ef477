//! AllergyIntolerance mapping rule.

use deid_model::RecordKind;
use deid_transform::ConsistentCategory;

use super::{TEXT, coding, path};
use crate::rule::{KindRule, RefRule, TransformClass};

pub(super) fn rule() -> KindRule {
    KindRule::new(RecordKind::AllergyIntolerance)
        .patient_ref(RefRule::reference(path().key("patient").key("reference")))
        .encounter_ref(RefRule::reference(path().key("encounter").key("reference")))
        .field("clinical_status", coding("clinicalStatus", "code"), TEXT)
        .field(
            "verification_status",
            coding("verificationStatus", "code"),
            TEXT,
        )
        .field("type", path().key("type"), TEXT)
        // Category is a plain string array here, not a codeable concept.
        .field("category", path().key("category").first(), TEXT)
        .field("criticality", path().key("criticality"), TEXT)
        .field("code", coding("code", "code"), TEXT)
        .field("display", coding("code", "display"), TEXT)
        .field(
            "recorder_display",
            path().key("recorder").key("display"),
            TransformClass::PseudonymizeConsistent(ConsistentCategory::ProviderName),
        )
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
