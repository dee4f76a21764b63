//! Resource structs, one per FHIR resource type the bundle carries.
//!
//! [`Resource`] is the tagged union used for bundle entries and contained
//! resources; the tag serializes as `resourceType`.

mod administrative;
mod clinical;
mod genomics;
mod provenance;

pub use administrative::{Organization, Patient, Practitioner, PractitionerRole};
pub use clinical::{
    Condition, ConditionEvidence, DiagnosticReport, DiagnosticRequest, Specimen,
    SpecimenCollection,
};
pub use genomics::{
    Observation, ObservationRelated, ReferenceSeq, Sequence, SequenceVariant, StructureVariant,
    VariantBoundary,
};
pub use provenance::{Provenance, ProvenanceAgent, Signature};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resourceType")]
pub enum Resource {
    Organization(Organization),
    Practitioner(Practitioner),
    Patient(Patient),
    DiagnosticReport(DiagnosticReport),
    Condition(Condition),
    DiagnosticRequest(DiagnosticRequest),
    Specimen(Specimen),
    Observation(Observation),
    Sequence(Sequence),
    Provenance(Provenance),
}

impl Resource {
    #[must_use]
    pub const fn resource_type(&self) -> &'static str {
        match self {
            Self::Organization(_) => "Organization",
            Self::Practitioner(_) => "Practitioner",
            Self::Patient(_) => "Patient",
            Self::DiagnosticReport(_) => "DiagnosticReport",
            Self::Condition(_) => "Condition",
            Self::DiagnosticRequest(_) => "DiagnosticRequest",
            Self::Specimen(_) => "Specimen",
            Self::Observation(_) => "Observation",
            Self::Sequence(_) => "Sequence",
            Self::Provenance(_) => "Provenance",
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Organization(r) => &r.id,
            Self::Practitioner(r) => &r.id,
            Self::Patient(r) => &r.id,
            Self::DiagnosticReport(r) => &r.id,
            Self::Condition(r) => &r.id,
            Self::DiagnosticRequest(r) => &r.id,
            Self::Specimen(r) => &r.id,
            Self::Observation(r) => &r.id,
            Self::Sequence(r) => &r.id,
            Self::Provenance(r) => &r.id,
        }
    }
}
