use serde::{Deserialize, Serialize};

use crate::datatypes::{Coding, Reference};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    pub id: String,
    pub target: Vec<Reference>,
    /// ISO 8601 sign-off time.
    pub recorded: String,
    pub activity: Coding,
    pub signature: Vec<Signature>,
    pub agent: Vec<ProvenanceAgent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    #[serde(rename = "type")]
    pub type_: Vec<Coding>,
    pub when: String,
    pub who_reference: Reference,
    pub on_behalf_of_reference: Reference,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvenanceAgent {
    pub role: Coding,
    pub who_reference: Reference,
    pub on_behalf_of_reference: Reference,
}
