//! Owner of the shared finding sequence for one document.
//!
//! The builder is the only place findings are created. Slots are handed out
//! in creation order and the next free slot is always the sequence length,
//! so slots are dense and never reused. Extractors hold `&mut GraphBuilder`
//! and never touch the sequence directly.

use std::collections::HashMap;

use geno_core::entities::{Finding, FindingDetail, LiteratureReference, RelatedEdge, SlotIndex};
use geno_core::enums::{FindingKind, RelationKind};
use geno_core::errors::CoreError;
use geno_core::ids::IdentifierAssigner;

use crate::graph::FindingGraph;

/// Fields of a finding that are fixed at creation time.
#[derive(Debug, Clone)]
pub struct NewFinding {
    pub detail: FindingDetail,
    pub display: String,
    pub narrative: Option<String>,
    pub comment: Option<String>,
    pub references: Vec<LiteratureReference>,
}

impl NewFinding {
    pub fn new(detail: FindingDetail, display: impl Into<String>) -> Self {
        Self {
            detail,
            display: display.into(),
            narrative: None,
            comment: None,
            references: Vec::new(),
        }
    }

    #[must_use]
    pub fn narrative(mut self, narrative: impl Into<String>) -> Self {
        self.narrative = Some(narrative.into());
        self
    }

    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn references<I, S>(mut self, pubmed_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.references = pubmed_ids.into_iter().map(LiteratureReference::new).collect();
        self
    }
}

/// Per-gene entry in the side table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneEntry {
    /// 1-based position of the gene among all genes in the document.
    pub id_number: u32,
    /// Slot of the gene's alteration finding.
    pub tracker: SlotIndex,
}

#[derive(Debug)]
pub struct GraphBuilder {
    findings: Vec<Finding>,
    ids: IdentifierAssigner,
    slots_by_id: HashMap<String, SlotIndex>,
    therapies: HashMap<String, SlotIndex>,
    trials: HashMap<String, SlotIndex>,
    genes: HashMap<String, GeneEntry>,
    genes_seen: u32,
}

impl GraphBuilder {
    #[must_use]
    pub fn new(report_id: impl Into<String>) -> Self {
        Self {
            findings: Vec::new(),
            ids: IdentifierAssigner::new(report_id),
            slots_by_id: HashMap::new(),
            therapies: HashMap::new(),
            trials: HashMap::new(),
            genes: HashMap::new(),
            genes_seen: 0,
        }
    }

    #[must_use]
    pub fn report_id(&self) -> &str {
        self.ids.report_id()
    }

    /// Create a finding at the next free slot and assign its id.
    pub fn create_finding(&mut self, new: NewFinding) -> SlotIndex {
        let slot = SlotIndex(self.findings.len());
        let (ordinal, id) = self.ids.assign(new.detail.kind());

        tracing::trace!(%slot, %id, "created finding");
        self.slots_by_id.insert(id.clone(), slot);
        self.findings.push(Finding {
            slot,
            id,
            ordinal,
            display: new.display,
            narrative: new.narrative,
            comment: new.comment,
            detail: new.detail,
            references: new.references,
            related: Vec::new(),
        });
        slot
    }

    /// Append a related edge `from -> to`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if either slot has not been created.
    pub fn relate(
        &mut self,
        from: SlotIndex,
        to: SlotIndex,
        relation: Option<RelationKind>,
        display: impl Into<String>,
    ) -> Result<(), CoreError> {
        if to.get() >= self.findings.len() {
            return Err(slot_not_found(to));
        }
        let source = self
            .findings
            .get_mut(from.get())
            .ok_or_else(|| slot_not_found(from))?;
        source.related.push(RelatedEdge {
            relation,
            target: to,
            display: display.into(),
        });
        Ok(())
    }

    /// Display text of an existing finding.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if the slot has not been created.
    pub fn display_of(&self, slot: SlotIndex) -> Result<String, CoreError> {
        self.findings
            .get(slot.get())
            .map(|f| f.display.clone())
            .ok_or_else(|| slot_not_found(slot))
    }

    #[must_use]
    pub fn therapy_slot(&self, name: &str) -> Option<SlotIndex> {
        self.therapies.get(name).copied()
    }

    pub fn remember_therapy(&mut self, name: &str, slot: SlotIndex) {
        self.therapies.insert(name.to_string(), slot);
    }

    #[must_use]
    pub fn trial_slot(&self, title: &str) -> Option<SlotIndex> {
        self.trials.get(title).copied()
    }

    pub fn remember_trial(&mut self, title: &str, slot: SlotIndex) {
        self.trials.insert(title.to_string(), slot);
    }

    /// Record a gene's alteration slot under the gene's next position number.
    /// A repeated gene name replaces the earlier entry.
    pub fn register_gene(&mut self, name: &str, tracker: SlotIndex) -> GeneEntry {
        self.genes_seen += 1;
        let entry = GeneEntry {
            id_number: self.genes_seen,
            tracker,
        };
        if let Some(previous) = self.genes.insert(name.to_string(), entry) {
            tracing::warn!(
                gene = name,
                previous = previous.id_number,
                current = entry.id_number,
                "gene listed more than once; trials will link to the later alteration"
            );
        }
        entry
    }

    #[must_use]
    pub fn gene(&self, name: &str) -> Option<GeneEntry> {
        self.genes.get(name).copied()
    }

    /// Resolve `<reportId>-gene-alt-<id_number>` to its slot.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no alteration has that id.
    pub fn alteration_slot(&self, id_number: u32) -> Result<SlotIndex, CoreError> {
        let id = self.ids.format(FindingKind::GeneAlteration, id_number);
        self.slots_by_id
            .get(&id)
            .copied()
            .ok_or(CoreError::NotFound {
                entity_type: FindingKind::GeneAlteration.as_str().to_string(),
                id,
            })
    }

    /// Number of findings created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Freeze the sequence.
    #[must_use]
    pub fn finish(self) -> FindingGraph {
        FindingGraph::new(self.ids.report_id().to_string(), self.findings)
    }
}

fn slot_not_found(slot: SlotIndex) -> CoreError {
    CoreError::NotFound {
        entity_type: "finding slot".to_string(),
        id: slot.to_string(),
    }
}
