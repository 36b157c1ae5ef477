//! Consistent and independent pseudonymization.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::trace;

use crate::fingerprint::fingerprint;
use crate::generate::SyntheticGenerator;

/// Categories whose replacements are consistent for repeated originals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsistentCategory {
    GivenName,
    FamilyName,
    ProviderName,
    Address,
    Phone,
    Email,
}

impl ConsistentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsistentCategory::GivenName => "given-name",
            ConsistentCategory::FamilyName => "family-name",
            ConsistentCategory::ProviderName => "provider-name",
            ConsistentCategory::Address => "address",
            ConsistentCategory::Phone => "phone",
            ConsistentCategory::Email => "email",
        }
    }
}

/// Categories replaced independently on every occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndependentCategory {
    City,
    PostalCode,
    Facility,
}

/// Pseudonymization component with a per-instance consistency scope.
///
/// The consistent-value cache is keyed by `(category, original)` and
/// populated lazily on first sight; it never stores a mapping from
/// synthetic back to original, and it does not survive the instance. The
/// cache and the generator share one lock so that two concurrent
/// first-sight lookups of the same original cannot race into different
/// synthetic values.
#[derive(Debug)]
pub struct Pseudonymizer {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    generator: SyntheticGenerator,
    cache: HashMap<(ConsistentCategory, String), String>,
}

impl Pseudonymizer {
    pub fn new() -> Self {
        Self::with_generator(SyntheticGenerator::new())
    }

    /// Seeded construction for reproducible tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_generator(SyntheticGenerator::with_seed(seed))
    }

    fn with_generator(generator: SyntheticGenerator) -> Self {
        Self {
            inner: Mutex::new(Inner {
                generator,
                cache: HashMap::new(),
            }),
        }
    }

    /// Consistent replacement: the same `(category, original)` pair always
    /// yields the same synthetic value within this instance. Empty input
    /// yields `None`; a value is never invented for missing data.
    pub fn consistent(&self, category: ConsistentCategory, original: &str) -> Option<String> {
        if original.trim().is_empty() {
            return None;
        }
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let Inner { generator, cache } = &mut *inner;
        let value = cache
            .entry((category, original.to_string()))
            .or_insert_with(|| {
                trace!(
                    category = category.as_str(),
                    original = %fingerprint(original),
                    "allocating synthetic value"
                );
                match category {
                    ConsistentCategory::GivenName => generator.given_name(),
                    ConsistentCategory::FamilyName => generator.family_name(),
                    ConsistentCategory::ProviderName => generator.provider_name(),
                    ConsistentCategory::Address => generator.street_address(),
                    ConsistentCategory::Phone => generator.phone_number(),
                    ConsistentCategory::Email => generator.email(),
                }
            });
        Some(value.clone())
    }

    /// Independent replacement: no cache, every occurrence may differ.
    pub fn independent(&self, category: IndependentCategory, original: &str) -> Option<String> {
        if original.trim().is_empty() {
            return None;
        }
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let value = match category {
            IndependentCategory::City => inner.generator.city(),
            IndependentCategory::PostalCode => inner.generator.postal_code(),
            IndependentCategory::Facility => inner.generator.facility_name(),
        };
        Some(value)
    }

    /// Number of cached consistent mappings, for observability and tests.
    pub fn cached_mappings(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .cache
            .len()
    }
}

impl Default for Pseudonymizer {
    fn default() -> Self {
        Self::new()
    }
}
