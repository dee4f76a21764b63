//! Entity structs for the records produced from one genomic report.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the
//! finding graph can be dumped and schema-checked.

mod finding;
mod link;
mod literature;
mod variant;

pub use finding::{Finding, FindingDetail};
pub use link::{RelatedEdge, SlotIndex};
pub use literature::LiteratureReference;
pub use variant::{Alleles, CopyNumberAlteration, ShortVariant, VariantDetail, VariantFinding};
