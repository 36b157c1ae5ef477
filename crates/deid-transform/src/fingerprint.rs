//! Non-reversing value fingerprints for log output.

use sha2::{Digest, Sha256};

/// Short hex digest of a value, safe to log in place of the value itself.
///
/// Log lines must never carry raw or partially-transformed identifiers;
/// a fingerprint still lets two log entries be correlated by value
/// identity.
pub fn fingerprint(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    hex::encode(&digest[..6])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_and_short() {
        assert_eq!(fingerprint("John"), fingerprint("John"));
        assert_ne!(fingerprint("John"), fingerprint("Jane"));
        assert_eq!(fingerprint("John").len(), 12);
    }
}
