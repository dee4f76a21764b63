//! Finding kinds, relations, and source-field classifications.
//!
//! All enums serialize in the form used by the identifier scheme or the
//! interchange format. Classification helpers are heuristics over raw report
//! text, not biological classifiers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// FindingKind
// ---------------------------------------------------------------------------

/// The kind of a finding record.
///
/// The first three kinds are produced by the cross-reference graph. Short
/// variants and copy-number alterations come from the sibling variant
/// extractor and share only the identifier scheme.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    GeneAlteration,
    Therapy,
    ClinicalTrial,
    ShortVariant,
    CopyNumberAlteration,
}

impl FindingKind {
    /// Tag embedded in identifiers: `<reportId>-<tag>-<ordinal>`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::GeneAlteration => "gene-alt",
            Self::Therapy => "therapy",
            Self::ClinicalTrial => "trial",
            Self::ShortVariant => "short-variant",
            Self::CopyNumberAlteration => "copy-number-alt",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GeneAlteration => "gene_alteration",
            Self::Therapy => "therapy",
            Self::ClinicalTrial => "clinical_trial",
            Self::ShortVariant => "short_variant",
            Self::CopyNumberAlteration => "copy_number_alteration",
        }
    }

    /// All kinds, in identifier-table order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::GeneAlteration,
            Self::Therapy,
            Self::ClinicalTrial,
            Self::ShortVariant,
            Self::CopyNumberAlteration,
        ]
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FindingKind {
    type Err = CoreError;

    /// Accepts either the snake-case name or the identifier tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s || kind.tag() == s)
            .ok_or_else(|| CoreError::Validation(format!("unknown finding kind '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// RelationKind
// ---------------------------------------------------------------------------

/// Typed relationship on a related edge. Untyped edges carry `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum RelationKind {
    /// The target is evidence or justification for the source finding.
    DerivedFrom,
}

impl RelationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DerivedFrom => "derived-from",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AlterationChange
// ---------------------------------------------------------------------------

/// How an alteration's change descriptor is tagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum AlterationChange {
    AminoAcidChange,
    SequenceVariantType,
}

impl AlterationChange {
    /// Any descriptor containing a digit is treated as amino-acid notation
    /// (`V600E`); everything else (`Deletion`, `loss`) is a variant type.
    #[must_use]
    pub fn classify(descriptor: &str) -> Self {
        if descriptor.chars().any(|c| c.is_ascii_digit()) {
            Self::AminoAcidChange
        } else {
            Self::SequenceVariantType
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AminoAcidChange => "amino-acid-change",
            Self::SequenceVariantType => "sequence-variant-type",
        }
    }
}

impl fmt::Display for AlterationChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TherapyEffect
// ---------------------------------------------------------------------------

/// Clinical effect of a therapy, as taken from its first occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TherapyEffect {
    Sensitizing,
    Resistive,
}

impl TherapyEffect {
    /// `sensitizing` in any case is sensitizing; every other value is resistive.
    #[must_use]
    pub fn from_effect(effect: &str) -> Self {
        if effect.eq_ignore_ascii_case("sensitizing") {
            Self::Sensitizing
        } else {
            Self::Resistive
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sensitizing => "sensitizing",
            Self::Resistive => "resistive",
        }
    }
}

impl fmt::Display for TherapyEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DnaChangeType
// ---------------------------------------------------------------------------

/// DNA-level change type of a short variant, read from its CDS effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DnaChangeType {
    Substitution,
    Deletion,
    Insertion,
    Other,
}

impl DnaChangeType {
    /// `>`/`<` wins over `del`, which wins over `ins` (so `delins` is a deletion).
    #[must_use]
    pub fn classify(cds_effect: &str) -> Self {
        if cds_effect.contains('>') || cds_effect.contains('<') {
            Self::Substitution
        } else if cds_effect.contains("del") {
            Self::Deletion
        } else if cds_effect.contains("ins") {
            Self::Insertion
        } else {
            Self::Other
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Substitution => "substitution",
            Self::Deletion => "deletion",
            Self::Insertion => "insertion",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for DnaChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
