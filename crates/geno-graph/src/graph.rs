use serde::Serialize;

use geno_core::entities::{Finding, SlotIndex, VariantFinding};
use geno_core::enums::FindingKind;

/// The frozen result of one build: findings in slot order, plus the
/// sequencing variants extracted beside them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindingGraph {
    report_id: String,
    findings: Vec<Finding>,
    variants: Vec<VariantFinding>,
}

impl FindingGraph {
    pub(crate) const fn new(report_id: String, findings: Vec<Finding>) -> Self {
        Self {
            report_id,
            findings,
            variants: Vec::new(),
        }
    }

    pub(crate) fn with_variants(mut self, variants: Vec<VariantFinding>) -> Self {
        self.variants = variants;
        self
    }

    #[must_use]
    pub fn report_id(&self) -> &str {
        &self.report_id
    }

    /// Findings indexed by slot.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    #[must_use]
    pub fn variants(&self) -> &[VariantFinding] {
        &self.variants
    }

    #[must_use]
    pub fn get(&self, slot: SlotIndex) -> Option<&Finding> {
        self.findings.get(slot.get())
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Finding> {
        self.findings.iter().find(|f| f.id == id)
    }

    #[must_use]
    pub fn count(&self, kind: FindingKind) -> usize {
        self.findings.iter().filter(|f| f.kind() == kind).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Id of the finding an edge points at.
    #[must_use]
    pub fn target_id(&self, target: SlotIndex) -> Option<&str> {
        self.get(target).map(|f| f.id.as_str())
    }
}
