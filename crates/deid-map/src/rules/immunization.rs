//! Immunization mapping rule.

use deid_model::RecordKind;
use deid_transform::{ConsistentCategory, IndependentCategory};

use super::{BOOLEAN, TEXT, coding, path};
use crate::rule::{KindRule, RefRule, TransformClass};

pub(super) fn rule() -> KindRule {
    KindRule::new(RecordKind::Immunization)
        .patient_ref(RefRule::reference(path().key("patient").key("reference")))
        .encounter_ref(RefRule::reference(path().key("encounter").key("reference")))
        .field("status", path().key("status"), TEXT)
        .field("status_reason_code", coding("statusReason", "code"), TEXT)
        .field("vaccine_code", coding("vaccineCode", "code"), TEXT)
        .field("vaccine_display", coding("vaccineCode", "display"), TEXT)
        .field("primary_source", path().key("primarySource"), BOOLEAN)
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
            "location_display",
            path().key("location").key("display"),
            TransformClass::PseudonymizeIndependent(IndependentCategory::Facility),
        )
        .field("lot_number", path().key("lotNumber"), TEXT)
        .field(
            "occurrence_date",
            path().key("occurrenceDateTime"),
            TransformClass::ShiftDateTime,
        )
        .field(
            "recorded_date",
            path().key("recorded"),
            TransformClass::ShiftDateTime,
        )
}
