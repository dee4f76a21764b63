use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const PUBMED_BASE_URL: &str = "https://www.ncbi.nlm.nih.gov/pubmed/";

/// A PubMed citation attached to an alteration or therapy.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LiteratureReference {
    pub pubmed_id: String,
}

impl LiteratureReference {
    pub fn new(pubmed_id: impl Into<String>) -> Self {
        Self {
            pubmed_id: pubmed_id.into(),
        }
    }

    #[must_use]
    pub fn url(&self) -> String {
        format!("{PUBMED_BASE_URL}{}", self.pubmed_id)
    }
}
