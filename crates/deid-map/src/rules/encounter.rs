//! Encounter mapping rule.

use deid_model::RecordKind;
use deid_transform::IndependentCategory;

use super::{TEXT, coding_in_list, path};
use crate::rule::{DerivedRule, KindRule, RefRule, TransformClass};

pub(super) fn rule() -> KindRule {
    KindRule::new(RecordKind::Encounter)
        .patient_ref(RefRule::reference(path().key("subject").key("reference")))
        .field("status", path().key("status"), TEXT)
        .field("class_code", path().key("class").key("code"), TEXT)
        .field("type_code", coding_in_list("type", "code"), TEXT)
        .field(
            "start_date",
            path().key("period").key("start"),
            TransformClass::ShiftDateTime,
        )
        .field(
            "end_date",
            path().key("period").key("end"),
            TransformClass::ShiftDateTime,
        )
        .field(
            "location_name",
            path()
                .key("location")
                .first()
                .key("location")
                .key("display"),
            TransformClass::PseudonymizeIndependent(IndependentCategory::Facility),
        )
        // Length of stay derives from the pre-shift period; both
        // endpoints shift by the same offset, so the persisted duration
        // matches the shifted pair.
        .derive(DerivedRule::DaysBetween {
            name: "length_of_stay_days",
            start: path().key("period").key("start"),
            end: path().key("period").key("end"),
        })
}
