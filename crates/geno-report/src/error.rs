//! Report error types for geno-report.

/// Errors that can occur while reading a report into its section tree.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Report contains no root element")]
    EmptyDocument,

    #[error("Element <{0}> is never closed")]
    UnclosedElement(String),

    /// A required sub-element or attribute is absent.
    #[error("Missing required field '{field}' in <{section}>")]
    MissingField { section: String, field: String },

    /// A field is present but cannot be interpreted.
    #[error("Invalid value for '{field}' in <{section}>: {reason}")]
    InvalidValue {
        section: String,
        field: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    pub(crate) fn missing(section: &str, field: &str) -> Self {
        Self::MissingField {
            section: section.to_string(),
            field: field.to_string(),
        }
    }

    pub(crate) fn invalid(section: &str, field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            section: section.to_string(),
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
