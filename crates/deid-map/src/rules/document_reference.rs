//! DocumentReference mapping rule.
//!
//! `content.attachment.data` carries base64-encoded note text; it is
//! dropped and never extracted.

use deid_model::RecordKind;
use deid_transform::{ConsistentCategory, IndependentCategory};

use super::{TEXT, coding, coding_in_list, path};
use crate::rule::{KindRule, RefRule, TransformClass};

pub(super) fn rule() -> KindRule {
    KindRule::new(RecordKind::DocumentReference)
        .patient_ref(RefRule::reference(path().key("subject").key("reference")))
        .encounter_ref(RefRule::reference(
            path()
                .key("context")
                .key("encounter")
                .first()
                .key("reference"),
        ))
        .field("status", path().key("status"), TEXT)
        .field("doc_status", path().key("docStatus"), TEXT)
        .field("type_code", coding("type", "code"), TEXT)
        .field("type_display", coding("type", "display"), TEXT)
        .field("category_code", coding_in_list("category", "code"), TEXT)
        .field(
            "description",
            path().key("description"),
            TransformClass::Redact,
        )
        .field(
            "author_display",
            path().key("author").first().key("display"),
            TransformClass::PseudonymizeConsistent(ConsistentCategory::ProviderName),
        )
        .field(
            "custodian_display",
            path().key("custodian").key("display"),
            TransformClass::PseudonymizeIndependent(IndependentCategory::Facility),
        )
        .field(
            "created_date",
            path().key("date"),
            TransformClass::ShiftDateTime,
        )
}
