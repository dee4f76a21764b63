//! # geno-report
//!
//! Reads FoundationOne XML results reports for genofhir.
//!
//! Parsing happens in two steps:
//! - [`XmlElement`]: an owned element tree built from a `quick-xml` event
//!   stream, navigated by local element name in document order
//! - [`FoundationReport`]: a typed view over the tree with the gene,
//!   therapy, trial, summary, demographic, and variant sections
//!
//! Required fields that are absent surface as [`ReportError::MissingField`];
//! nothing is defaulted silently.

mod demographics;
pub mod error;
mod report;
mod sections;
pub mod tree;
mod variants;

pub use demographics::{PatientInfo, SampleInfo, SignOff};
pub use error::ReportError;
pub use report::FoundationReport;
pub use sections::{AlterationSection, GeneSection, SummaryCounts, TherapyEntry, TrialSection};
pub use tree::XmlElement;
pub use variants::{CopyNumberEntry, ShortVariantEntry, VariantReport};
