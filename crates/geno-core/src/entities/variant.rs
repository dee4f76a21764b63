use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{DnaChangeType, FindingKind};

/// A short variant or copy-number alteration from the report's variant section.
///
/// These are produced outside the cross-reference graph: they carry no related
/// edges and are not part of the declared finding count.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct VariantFinding {
    /// `<reportId>-short-variant-<n>` or `<reportId>-copy-number-alt-<n>`.
    pub id: String,
    /// Id of the companion sequence record (`<id>-seq`).
    pub sequence_id: String,
    pub ordinal: u32,
    pub gene: String,
    pub chromosome: String,
    pub detail: VariantDetail,
}

impl VariantFinding {
    #[must_use]
    pub const fn kind(&self) -> FindingKind {
        match self.detail {
            VariantDetail::Short(_) => FindingKind::ShortVariant,
            VariantDetail::CopyNumber(_) => FindingKind::CopyNumberAlteration,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VariantDetail {
    Short(ShortVariant),
    CopyNumber(CopyNumberAlteration),
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ShortVariant {
    pub transcript: String,
    pub cds_effect: String,
    pub protein_effect: String,
    pub functional_effect: String,
    pub allele_fraction: f64,
    pub depth: u32,
    pub position: u64,
    pub change_type: DnaChangeType,
    /// `None` when the CDS effect could not be split into alleles.
    pub alleles: Option<Alleles>,
}

/// Reference/observed alleles; `_` marks an empty side of an indel.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Alleles {
    pub reference: String,
    pub observed: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CopyNumberAlteration {
    pub copy_number: String,
    pub alteration_type: String,
    pub status: String,
    pub ratio: String,
    pub start: u64,
    pub end: u64,
}

impl CopyNumberAlteration {
    #[must_use]
    pub const fn length(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }
}
