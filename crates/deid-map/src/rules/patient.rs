//! Patient mapping rule.
//!
//! Government identifiers (SSN, driver's license, passport) live in the
//! source `identifier` array and are direct identifiers: they have no
//! rule here and are never extracted, in any form.

use deid_model::RecordKind;
use deid_transform::{ConsistentCategory, IndependentCategory};

use super::{KEEP_TEXT, path, telecom};
use crate::rule::{KindRule, TransformClass};

pub(super) fn rule() -> KindRule {
    let official_name = || path().key("name").prefer_tagged("use", "official");
    let address = || path().key("address").first();

    KindRule::new(RecordKind::Patient)
        .shift_by_own_id()
        .field(
            "given_name",
            official_name().key("given").first(),
            TransformClass::PseudonymizeConsistent(ConsistentCategory::GivenName),
        )
        .field(
            "family_name",
            official_name().key("family"),
            TransformClass::PseudonymizeConsistent(ConsistentCategory::FamilyName),
        )
        .field(
            "birth_date",
            path().key("birthDate"),
            TransformClass::ShiftDate,
        )
        .field("gender", path().key("gender"), KEEP_TEXT)
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
