use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DeidError;

/// The fixed catalogue of clinical record kinds handled by the pipeline.
///
/// Each variant corresponds to one upstream resource type. The set is
/// closed: batches for any other resource type are not ingested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecordKind {
    Patient,
    Encounter,
    Condition,
    Observation,
    MedicationRequest,
    Procedure,
    DiagnosticReport,
    DocumentReference,
    AllergyIntolerance,
    Immunization,
    Practitioner,
    PractitionerRole,
    Organization,
}

impl RecordKind {
    /// Ingestion order: patient and provider/organization kinds first, so
    /// records that reference them land after their targets. Reference
    /// enforcement is not required (dangling references are accepted), but
    /// the order keeps stores with foreign keys happy.
    pub const INGESTION_ORDER: [RecordKind; 13] = [
        RecordKind::Patient,
        RecordKind::Practitioner,
        RecordKind::Organization,
        RecordKind::PractitionerRole,
        RecordKind::Encounter,
        RecordKind::Condition,
        RecordKind::Observation,
        RecordKind::MedicationRequest,
        RecordKind::Procedure,
        RecordKind::DiagnosticReport,
        RecordKind::DocumentReference,
        RecordKind::AllergyIntolerance,
        RecordKind::Immunization,
    ];

    /// Deletion order for clear operations: the reverse of
    /// [`Self::INGESTION_ORDER`], so referencing kinds are removed before
    /// the kinds they point at.
    pub fn deletion_order() -> impl Iterator<Item = RecordKind> {
        Self::INGESTION_ORDER.into_iter().rev()
    }

    /// The upstream `resourceType` discriminator string for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Patient => "Patient",
            RecordKind::Encounter => "Encounter",
            RecordKind::Condition => "Condition",
            RecordKind::Observation => "Observation",
            RecordKind::MedicationRequest => "MedicationRequest",
            RecordKind::Procedure => "Procedure",
            RecordKind::DiagnosticReport => "DiagnosticReport",
            RecordKind::DocumentReference => "DocumentReference",
            RecordKind::AllergyIntolerance => "AllergyIntolerance",
            RecordKind::Immunization => "Immunization",
            RecordKind::Practitioner => "Practitioner",
            RecordKind::PractitionerRole => "PractitionerRole",
            RecordKind::Organization => "Organization",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = DeidError;

    /// Parse a resource type name into a `RecordKind`.
    /// Accepts the canonical CamelCase form case-insensitively, with or
    /// without hyphens (e.g. `medication-request`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "").to_ascii_lowercase();
        let kind = Self::INGESTION_ORDER
            .into_iter()
            .find(|kind| kind.as_str().to_ascii_lowercase() == normalized);
        kind.ok_or_else(|| DeidError::UnknownKind(s.to_string()))
    }
}
