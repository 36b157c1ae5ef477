//! Deterministic transform engine for clinical record de-identification.
//!
//! Four families of operations, used by every mapping rule:
//!
//! - consistent pseudonymization: the same `(category, original)` pair
//!   always yields the same synthetic value within one engine instance,
//!   and no mapping from synthetic back to original is ever stored;
//! - independent pseudonymization: a fresh synthetic value per occurrence
//!   for low-risk fields (cities, postal codes, facility names);
//! - deterministic date-shift: a per-patient day offset derived from a
//!   SHA-256 digest of the patient key, preserving intervals within one
//!   patient's timeline while destroying absolute calendar alignment;
//! - free-text redaction: a fixed sentinel, never partial scrubbing.
//!
//! All operations are total over their domain: malformed-but-present input
//! is the caller's concern, and absent/empty input uniformly yields absent
//! output.

mod dates;
mod fingerprint;
mod generate;
mod pseudonym;
mod redact;
mod shift;

pub use dates::{parse_date, parse_instant};
pub use fingerprint::fingerprint;
pub use generate::SyntheticGenerator;
pub use pseudonym::{ConsistentCategory, IndependentCategory, Pseudonymizer};
pub use redact::{REDACTION_SENTINEL, redact_free_text};
pub use shift::{offset_days, shift_date, shift_datetime};
