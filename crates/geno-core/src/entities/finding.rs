use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{LiteratureReference, RelatedEdge, SlotIndex};
use crate::enums::{AlterationChange, FindingKind, TherapyEffect};

/// One alteration, therapy, or clinical-trial record in the finding graph.
///
/// Everything except `related` is fixed when the graph builder creates the
/// record. `related` grows while later sections link to this finding and is
/// frozen once the build finishes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Finding {
    /// Position in the document's finding sequence.
    pub slot: SlotIndex,
    /// `<reportId>-<kind-tag>-<ordinal>`.
    pub id: String,
    /// 1-based rank among findings of the same kind.
    pub ordinal: u32,
    /// Short summary used when other findings link here.
    pub display: String,
    /// Long-form description (therapies and trials only).
    pub narrative: Option<String>,
    /// Free-text rationale (therapies) or note (trials), verbatim from the report.
    pub comment: Option<String>,
    pub detail: FindingDetail,
    #[serde(default)]
    pub references: Vec<LiteratureReference>,
    #[serde(default)]
    pub related: Vec<RelatedEdge>,
}

impl Finding {
    #[must_use]
    pub const fn kind(&self) -> FindingKind {
        self.detail.kind()
    }
}

/// Kind-specific payload of a [`Finding`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FindingDetail {
    GeneAlteration {
        gene: String,
        alteration: String,
        change: AlterationChange,
        interpretation: String,
    },
    Therapy {
        name: String,
        effect: TherapyEffect,
        fda_approved: String,
    },
    ClinicalTrial {
        title: String,
        gene: String,
        nct_id: String,
    },
}

impl FindingDetail {
    #[must_use]
    pub const fn kind(&self) -> FindingKind {
        match self {
            Self::GeneAlteration { .. } => FindingKind::GeneAlteration,
            Self::Therapy { .. } => FindingKind::Therapy,
            Self::ClinicalTrial { .. } => FindingKind::ClinicalTrial,
        }
    }
}
