//! Deterministic per-patient date shifting.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use sha2::{Digest, Sha256};

/// Day offset for a patient key, in `[-365, 365]` inclusive.
///
/// The offset is a pure function of the key: the first eight bytes of the
/// key's SHA-256 digest, reduced modulo 731 and centered on zero. Using a
/// cryptographic digest instead of a language-default hasher keeps the
/// offset reproducible across processes and implementations.
pub fn offset_days(patient_key: &str) -> i64 {
    let digest = Sha256::digest(patient_key.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    (u64::from_be_bytes(prefix) % 731) as i64 - 365
}

/// Shift an instant by the patient's offset, preserving time-of-day.
/// Absent input yields absent output.
pub fn shift_datetime(instant: Option<NaiveDateTime>, patient_key: &str) -> Option<NaiveDateTime> {
    instant.map(|value| value + Duration::days(offset_days(patient_key)))
}

/// Shift a plain date by the patient's offset.
pub fn shift_date(date: Option<NaiveDate>, patient_key: &str) -> Option<NaiveDate> {
    date.map(|value| value + Duration::days(offset_days(patient_key)))
}
