//! Synthetic replacement value generation.
//!
//! Values are drawn from curated word lists so they read as plausible
//! names, addresses, and contact details without any relationship to the
//! originals they replace. There is no uniqueness guarantee; consistency
//! for repeated originals is the pseudonymizer's job, not the generator's.

use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng};

const GIVEN_NAMES: &[&str] = &[
    "Aaron", "Beatriz", "Carmen", "Declan", "Elena", "Felix", "Greta", "Hassan", "Ingrid", "Jonas",
    "Katrin", "Lucia", "Marcus", "Nadia", "Oscar", "Priya", "Quentin", "Rosa", "Stefan", "Tamara",
    "Ulrich", "Vera", "Wesley", "Yusuf",
];

const FAMILY_NAMES: &[&str] = &[
    "Ashford", "Bellamy", "Calloway", "Draper", "Easton", "Fairbanks", "Granger", "Holloway",
    "Ivers", "Jennings", "Kessler", "Lockhart", "Mercer", "Norwood", "Okafor", "Pemberton",
    "Quimby", "Radcliffe", "Sutton", "Thorne", "Underhill", "Vance", "Whitfield", "Yates",
];

const STREET_NAMES: &[&str] = &[
    "Alder", "Birchwood", "Cedar Hill", "Dunmore", "Elmhurst", "Foxglove", "Greenfield",
    "Harborview", "Ironwood", "Juniper", "Kingsley", "Larkspur", "Maplecrest", "Northgate",
    "Oakridge", "Pinehurst",
];

const STREET_SUFFIXES: &[&str] = &["Street", "Avenue", "Lane", "Drive", "Court", "Road"];

const CITIES: &[&str] = &[
    "Ashton", "Brookfield", "Clearwater", "Dunwich", "Eastvale", "Fairmont", "Glenridge",
    "Harwick", "Kentbury", "Lakemoor", "Millbrook", "Northfield", "Oakdale", "Pinecrest",
    "Riverton", "Stonehaven", "Thornbury", "Westfall",
];

const EMAIL_DOMAINS: &[&str] = &[
    "example.com",
    "example.org",
    "example.net",
    "mail.example.com",
];

const FACILITY_SUFFIXES: &[&str] = &[
    "Medical Center",
    "General Hospital",
    "Community Clinic",
    "Regional Hospital",
    "Health Center",
    "Memorial Hospital",
];

/// Pseudo-random generator for synthetic replacement values.
///
/// Seedable for reproducible tests; production callers use OS entropy.
#[derive(Debug)]
pub struct SyntheticGenerator {
    rng: StdRng,
}

impl SyntheticGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, list: &[&'static str]) -> &'static str {
        list[self.rng.random_range(0..list.len())]
    }

    fn digits(&mut self, count: u32) -> String {
        let upper = 10u64.pow(count);
        format!(
            "{:0width$}",
            self.rng.random_range(0..upper),
            width = count as usize
        )
    }

    pub fn given_name(&mut self) -> String {
        self.pick(GIVEN_NAMES).to_string()
    }

    pub fn family_name(&mut self) -> String {
        self.pick(FAMILY_NAMES).to_string()
    }

    /// Full provider name, e.g. `Dr. Elena Mercer`.
    pub fn provider_name(&mut self) -> String {
        format!("Dr. {} {}", self.pick(GIVEN_NAMES), self.pick(FAMILY_NAMES))
    }

    pub fn street_address(&mut self) -> String {
        let number = self.rng.random_range(100..9999);
        format!(
            "{} {} {}",
            number,
            self.pick(STREET_NAMES),
            self.pick(STREET_SUFFIXES)
        )
    }

    pub fn city(&mut self) -> String {
        self.pick(CITIES).to_string()
    }

    pub fn postal_code(&mut self) -> String {
        self.digits(5)
    }

    pub fn phone_number(&mut self) -> String {
        format!("555-{}", self.digits(4))
    }

    pub fn email(&mut self) -> String {
        let local = format!(
            "{}.{}{}",
            self.pick(GIVEN_NAMES).to_ascii_lowercase(),
            self.pick(FAMILY_NAMES).to_ascii_lowercase(),
            self.digits(2)
        );
        format!("{}@{}", local, self.pick(EMAIL_DOMAINS))
    }

    /// Compound facility name, e.g. `Millbrook Medical Center`.
    pub fn facility_name(&mut self) -> String {
        format!("{} {}", self.pick(CITIES), self.pick(FACILITY_SUFFIXES))
    }
}

impl Default for SyntheticGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generator_is_reproducible() {
        let mut a = SyntheticGenerator::with_seed(7);
        let mut b = SyntheticGenerator::with_seed(7);
        assert_eq!(a.given_name(), b.given_name());
        assert_eq!(a.street_address(), b.street_address());
        assert_eq!(a.email(), b.email());
    }

    #[test]
    fn facility_name_is_compound() {
        let mut generator = SyntheticGenerator::with_seed(1);
        let name = generator.facility_name();
        assert!(name.split_whitespace().count() >= 2, "got {name}");
    }

    #[test]
    fn postal_code_is_five_digits() {
        let mut generator = SyntheticGenerator::with_seed(3);
        for _ in 0..32 {
            let code = generator.postal_code();
            assert_eq!(code.len(), 5);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
