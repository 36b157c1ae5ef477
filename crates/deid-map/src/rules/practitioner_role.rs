//! PractitionerRole mapping rule.
//!
//! Role records link practitioners to organizations and locations through
//! embedded identifiers rather than `"Kind/id"` reference strings; those
//! identifiers are professional linking keys and are kept verbatim.

use deid_model::RecordKind;
use deid_transform::ConsistentCategory;

use super::{BOOLEAN, TEXT, coding_in_list, path, telecom};
use crate::rule::{KindRule, TransformClass};

pub(super) fn rule() -> KindRule {
    KindRule::new(RecordKind::PractitionerRole)
        .field(
            "practitioner_resource_id",
            path()
                .key("practitioner")
                .key("identifier")
                .key("value"),
            TEXT,
        )
        .field(
            "organization_resource_id",
            path()
                .key("organization")
                .key("identifier")
                .key("value"),
            TEXT,
        )
        .field(
            "location_resource_id",
            path()
                .key("location")
                .first()
                .key("identifier")
                .key("value"),
            TEXT,
        )
        .field("active", path().key("active"), BOOLEAN)
        .field("role_code", coding_in_list("code", "code"), TEXT)
        .field("role_display", coding_in_list("code", "display"), TEXT)
        .field("specialty_code", coding_in_list("specialty", "code"), TEXT)
        .field(
            "specialty_display",
            coding_in_list("specialty", "display"),
            TEXT,
        )
        .field(
            "phone",
            telecom("phone"),
            TransformClass::PseudonymizeConsistent(ConsistentCategory::Phone),
        )
        .field(
            "email",
            telecom("email"),
            TransformClass::PseudonymizeConsistent(ConsistentCategory::Email),
        )
}
