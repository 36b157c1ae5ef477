//! Practitioner mapping rule.
//!
//! The NPI is a professional identifier, not patient PII; it is retained
//! verbatim as the linking key that joins practitioner, role, and
//! organization records.

use deid_model::RecordKind;
use deid_transform::{ConsistentCategory, IndependentCategory};

use super::{KEEP_BOOLEAN, KEEP_TEXT, TEXT, path, telecom};
use crate::rule::{KindRule, TransformClass};

const NPI_SYSTEM: &str = "http://hl7.org/fhir/sid/us-npi";

pub(super) fn rule() -> KindRule {
    let name = || path().key("name").first();
    let address = || path().key("address").first();

    KindRule::new(RecordKind::Practitioner)
        .shift_by_own_id()
        .field(
            "given_name",
            name().key("given").first(),
            TransformClass::PseudonymizeConsistent(ConsistentCategory::GivenName),
        )
        .field(
            "family_name",
            name().key("family"),
            TransformClass::PseudonymizeConsistent(ConsistentCategory::FamilyName),
        )
        .field("prefix", name().key("prefix").first(), KEEP_TEXT)
        .field("gender", path().key("gender"), KEEP_TEXT)
        .field(
            "birth_date",
            path().key("birthDate"),
            TransformClass::ShiftDate,
        )
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
        .field("active", path().key("active"), KEEP_BOOLEAN)
}
