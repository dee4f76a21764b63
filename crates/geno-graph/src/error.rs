//! Graph build error types for geno-graph.

use geno_core::errors::CoreError;

/// Errors that abort a finding-graph build. No partial graph is returned.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A trial names a gene that has no alteration in this report.
    #[error("Trial '{trial}' targets gene '{gene}', which has no alteration in this report")]
    CrossReference { gene: String, trial: String },

    /// The number of created findings disagrees with the report's summary.
    #[error("Report declares {declared} findings but {created} were created")]
    Consistency { declared: usize, created: usize },

    #[error(transparent)]
    Core(#[from] CoreError),
}
