use serde::{Deserialize, Serialize};

use super::Resource;
use crate::datatypes::{Annotation, CodeableConcept, Narrative, Reference};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticReport {
    pub id: String,
    pub text: Narrative,
    pub status: String,
    pub code: CodeableConcept,
    pub category: CodeableConcept,
    pub effective_date_time: String,
    pub subject: Reference,
    pub performer: Vec<Reference>,
    pub conclusion: String,
    pub specimen: Vec<Reference>,
    pub result: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contained: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub id: String,
    pub text: Narrative,
    pub verification_status: String,
    pub category: Vec<CodeableConcept>,
    pub severity: CodeableConcept,
    pub code: CodeableConcept,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body_site: Vec<CodeableConcept>,
    pub evidence: Vec<ConditionEvidence>,
    pub subject: Reference,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionEvidence {
    pub detail: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRequest {
    pub id: String,
    pub status: String,
    pub intent: String,
    pub note: String,
    pub reason_reference: Vec<Reference>,
    pub requester: Reference,
    pub subject: Reference,
    pub performer: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specimen {
    pub id: String,
    pub status: String,
    #[serde(rename = "type")]
    pub type_: CodeableConcept,
    pub collection: SpecimenCollection,
    pub received_time: String,
    pub request: Vec<Reference>,
    pub note: Vec<Annotation>,
    pub subject: Reference,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecimenCollection {
    pub collector: Reference,
    pub collected_date_time: String,
    pub body_site: CodeableConcept,
}
