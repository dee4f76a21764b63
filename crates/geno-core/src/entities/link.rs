use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::RelationKind;

/// Stable handle of a finding during the build: its position in the shared
/// finding sequence. Assigned once, dense, never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct SlotIndex(pub usize);

impl SlotIndex {
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed "related" link from one finding to another.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RelatedEdge {
    /// `None` for untyped links.
    pub relation: Option<RelationKind>,
    pub target: SlotIndex,
    /// Text shown with the reference to the target.
    pub display: String,
}
