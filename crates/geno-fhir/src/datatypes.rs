//! FHIR general-purpose data types, limited to the fields the converter
//! fills in. Optional fields are omitted from the JSON when unset.

use serde::{Deserialize, Serialize};

pub const FOUNDATION_MEDICINE_ID: &str = "FM";
pub const FOUNDATION_MEDICINE_NAME: &str = "Foundation Medicine";

/// A literal reference such as `Observation/TRF091836v1-trial-1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl Reference {
    pub fn to(resource_type: &str, id: &str) -> Self {
        Self {
            reference: format!("{resource_type}/{id}"),
            display: None,
        }
    }

    #[must_use]
    pub fn display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    /// The performing laboratory.
    pub fn foundation_medicine() -> Self {
        Self::to("Organization", FOUNDATION_MEDICINE_ID).display(FOUNDATION_MEDICINE_NAME)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl Coding {
    pub fn new(system: &str, code: &str) -> Self {
        Self {
            system: Some(system.to_string()),
            code: Some(code.to_string()),
            display: None,
        }
    }

    #[must_use]
    pub fn display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeableConcept {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coding: Vec<Coding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl CodeableConcept {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            coding: Vec::new(),
            text: Some(text.into()),
        }
    }

    pub fn coded(coding: Coding) -> Self {
        Self {
            coding: vec![coding],
            text: None,
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
    pub use_: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigner: Option<Assigner>,
}

/// Display-only reference to the organisation that issued an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assigner {
    pub display: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanName {
    #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
    pub use_: Option<String>,
    pub text: String,
    pub family: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub given: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prefix: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPoint {
    pub system: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub line: Vec<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// Human-readable summary block; the converter emits it empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub status: String,
    pub div: String,
}

impl Narrative {
    pub fn generated() -> Self {
        Self {
            status: "generated".to_string(),
            div: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub author_string: String,
    pub time: String,
    pub text: String,
}

/// A profile extension carrying one `value[x]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    pub url: String,
    #[serde(flatten)]
    pub value: ExtensionValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtensionValue {
    ValueCodeableConcept(CodeableConcept),
    ValueReference(Reference),
    ValueDecimal(f64),
}

const EXTENSION_BASE: &str = "http://hl7.org/fhir/StructureDefinition/";

impl Extension {
    /// `observation-genetics*` style extension with a text concept.
    pub fn text(name: &str, text: impl Into<String>) -> Self {
        Self::concept(name, CodeableConcept::text(text))
    }

    pub fn concept(name: &str, concept: CodeableConcept) -> Self {
        Self {
            url: format!("{EXTENSION_BASE}{name}"),
            value: ExtensionValue::ValueCodeableConcept(concept),
        }
    }

    pub fn reference(name: &str, reference: Reference) -> Self {
        Self {
            url: format!("{EXTENSION_BASE}{name}"),
            value: ExtensionValue::ValueReference(reference),
        }
    }

    pub fn decimal(name: &str, value: f64) -> Self {
        Self {
            url: format!("{EXTENSION_BASE}{name}"),
            value: ExtensionValue::ValueDecimal(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn extension_flattens_value_choice() {
        let ext = Extension::text("observation-geneticsGene", "KRAS");
        assert_eq!(
            serde_json::to_value(&ext).unwrap(),
            json!({
                "url": "http://hl7.org/fhir/StructureDefinition/observation-geneticsGene",
                "valueCodeableConcept": { "text": "KRAS" }
            })
        );
    }

    #[test]
    fn reference_omits_missing_display() {
        let reference = Reference::to("Patient", "55512345FM");
        assert_eq!(
            serde_json::to_value(&reference).unwrap(),
            json!({ "reference": "Patient/55512345FM" })
        );
    }
}
