//! Organization mapping rule.

use deid_model::RecordKind;
use deid_transform::{ConsistentCategory, IndependentCategory};

use super::{BOOLEAN, KEEP_TEXT, TEXT, coding_in_list, path, telecom};
use crate::rule::{KindRule, TransformClass};

const NPI_SYSTEM: &str = "http://hl7.org/fhir/sid/us-npi";

pub(super) fn rule() -> KindRule {
    let address = || path().key("address").first();

    KindRule::new(RecordKind::Organization)
        .field(
            "name",
            path().key("name"),
            TransformClass::PseudonymizeIndependent(IndependentCategory::Facility),
        )
        .field("active", path().key("active"), BOOLEAN)
        .field("type_code", coding_in_list("type", "code"), TEXT)
        .field("type_display", coding_in_list("type", "display"), TEXT)
        .field(
            "npi",
            path()
                .key("identifier")
                .match_tagged("system", NPI_SYSTEM)
                .key("value"),
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
        .field(
            "address_line",
            address().key("line").first(),
            TransformClass::PseudonymizeConsistent(ConsistentCategory::Address),
        )
        .field(
            "city",
            address().key("city"),
            TransformClass::PseudonymizeIndependent(IndependentCategory::City),
        )
        .field("state", address().key("state"), KEEP_TEXT)
        .field(
            "postal_code",
            address().key("postalCode"),
            TransformClass::PseudonymizeIndependent(IndependentCategory::PostalCode),
        )
}
