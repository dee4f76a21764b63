use serde::{Deserialize, Serialize};

use crate::datatypes::{
    Address, CodeableConcept, Coding, ContactPoint, HumanName, Identifier, Narrative, Reference,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub text: Narrative,
    pub identifier: Vec<Identifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub telecom: Vec<ContactPoint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Practitioner {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,
    pub name: Vec<HumanName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub role: Vec<PractitionerRole>,
}

impl Practitioner {
    /// Display text of the first name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.first().map_or("", |n| n.text.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PractitionerRole {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<Reference>,
    pub code: CodeableConcept,
}

impl PractitionerRole {
    pub fn snomed(code: &str, text: &str, organization: Option<Reference>) -> Self {
        Self {
            organization,
            code: CodeableConcept::coded(Coding::new("http://snomed.info/sct", code)).with_text(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub text: Narrative,
    pub identifier: Vec<Identifier>,
    pub name: Vec<HumanName>,
    pub gender: String,
    pub birth_date: String,
    pub deceased_boolean: bool,
}

impl Patient {
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.first().map_or("", |n| n.text.as_str())
    }
}
