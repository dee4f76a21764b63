use serde::{Deserialize, Serialize};

use crate::datatypes::{CodeableConcept, Extension, Narrative, Reference};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub id: String,
    pub text: Narrative,
    pub status: String,
    pub category: Vec<CodeableConcept>,
    pub extension: Vec<Extension>,
    pub performer: Vec<Reference>,
    pub subject: Reference,
    pub effective_date_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specimen: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<ObservationRelated>,
}

/// One `related` entry; untyped links omit `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationRelated {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    pub target: Reference,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sequence {
    pub id: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub reference_seq: ReferenceSeq,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variant: Vec<SequenceVariant>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub structure_variant: Vec<StructureVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_coverage: Option<u32>,
    pub specimen: Reference,
    pub patient: Reference,
    pub performer: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSeq {
    pub chromosome: CodeableConcept,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceVariant {
    pub start: u64,
    pub end: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_allele: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_allele: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureVariant {
    pub precision_of_boundaries: String,
    #[serde(rename = "reportedaCGHRatio")]
    pub reported_acgh_ratio: String,
    pub length: u64,
    pub outer: VariantBoundary,
    pub inner: VariantBoundary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantBoundary {
    pub start: u64,
    pub end: u64,
}
