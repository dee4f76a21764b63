//! Order-based identifier assignment.
//!
//! Every finding id has the form `<reportId>-<kind-tag>-<ordinal>`, where the
//! ordinal is the 1-based count of creations of that kind in this document.
//! Ordinals depend only on creation order, never on map iteration order, so
//! rebuilding an unchanged document reproduces every id.

use std::collections::BTreeMap;

use crate::enums::FindingKind;

/// Format a finding id from its parts.
#[must_use]
pub fn finding_id(report_id: &str, kind: FindingKind, ordinal: u32) -> String {
    format!("{report_id}-{}-{ordinal}", kind.tag())
}

/// Hands out per-kind ordinals for one document.
#[derive(Debug, Clone)]
pub struct IdentifierAssigner {
    report_id: String,
    counts: BTreeMap<FindingKind, u32>,
}

impl IdentifierAssigner {
    #[must_use]
    pub fn new(report_id: impl Into<String>) -> Self {
        Self {
            report_id: report_id.into(),
            counts: BTreeMap::new(),
        }
    }

    /// Claim the next ordinal for `kind` and return it with the formatted id.
    pub fn assign(&mut self, kind: FindingKind) -> (u32, String) {
        let count = self.counts.entry(kind).or_insert(0);
        *count += 1;
        let ordinal = *count;
        (ordinal, self.format(kind, ordinal))
    }

    /// Format the id for an ordinal without claiming it.
    #[must_use]
    pub fn format(&self, kind: FindingKind, ordinal: u32) -> String {
        finding_id(&self.report_id, kind, ordinal)
    }

    #[must_use]
    pub fn report_id(&self) -> &str {
        &self.report_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_are_independent_per_kind() {
        let mut ids = IdentifierAssigner::new("TRF091836v1");

        assert_eq!(
            ids.assign(FindingKind::GeneAlteration),
            (1, "TRF091836v1-gene-alt-1".to_string())
        );
        assert_eq!(
            ids.assign(FindingKind::Therapy),
            (1, "TRF091836v1-therapy-1".to_string())
        );
        assert_eq!(
            ids.assign(FindingKind::Therapy),
            (2, "TRF091836v1-therapy-2".to_string())
        );
        assert_eq!(
            ids.assign(FindingKind::GeneAlteration),
            (2, "TRF091836v1-gene-alt-2".to_string())
        );
        assert_eq!(ids.assign(FindingKind::ClinicalTrial).0, 1);
    }

    #[test]
    fn format_does_not_claim() {
        let mut ids = IdentifierAssigner::new("R1");
        assert_eq!(ids.format(FindingKind::ClinicalTrial, 3), "R1-trial-3");
        assert_eq!(ids.assign(FindingKind::ClinicalTrial).0, 1);
    }
}
