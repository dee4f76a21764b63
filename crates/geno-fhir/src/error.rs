//! Bundle construction error types for geno-fhir.

/// Errors that can occur while mapping a report and its findings to FHIR.
#[derive(Debug, thiserror::Error)]
pub enum FhirError {
    /// A signature names someone outside the sign-off roster.
    #[error("Unknown report signer '{0}'")]
    UnknownSigner(String),

    #[error("Unrecognised timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        source: chrono::ParseError,
    },

    /// An edge points at a slot the graph does not contain.
    #[error("Related edge from '{from}' targets missing slot {slot}")]
    DanglingEdge { from: String, slot: usize },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
