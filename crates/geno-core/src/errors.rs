//! Cross-cutting error types for genofhir.
//!
//! Domain-specific errors (`ReportError`, `GraphError`, `FhirError`) are defined
//! in their respective crates. The binary converges them with `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any genofhir crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (unknown tag, malformed identifier).
    #[error("Validation error: {0}")]
    Validation(String),
}
