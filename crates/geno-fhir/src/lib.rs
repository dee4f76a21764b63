//! # geno-fhir
//!
//! FHIR DSTU3 output for genofhir.
//!
//! Maps a parsed [`geno_report::FoundationReport`] and its
//! [`geno_graph::FindingGraph`] to a collection [`Bundle`]:
//! - administrative records (laboratory, ordering facility, physicians,
//!   patient) from the demographic block
//! - the diagnostic report, condition, request, and specimen
//! - one observation per finding and per variant, with variant sequences
//! - a provenance record for the sign-off
//!
//! Resources are plain serde structs; [`to_json`] renders the bundle.

mod bundle;
pub mod datatypes;
pub mod error;
pub mod observations;
pub mod parties;
pub mod records;
pub mod resources;
mod signers;
mod signoff;
mod time;

pub use bundle::{Bundle, BundleEntry, build_bundle, to_json};
pub use error::FhirError;
pub use resources::Resource;
pub use signers::signer_practitioner;
pub use signoff::provenance;
pub use time::normalize_timestamp;
