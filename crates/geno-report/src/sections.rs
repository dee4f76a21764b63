//! Genomic sections: genes with their alteration and therapies, clinical
//! trials, and the document-level summary counters.

use serde::Serialize;

use crate::error::ReportError;
use crate::tree::XmlElement;

/// Document-level counters from `<Summaries>`.
///
/// Their sum is the number of findings the report declares; the graph
/// builder checks it after the build rather than trusting it up front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryCounts {
    pub alterations: u32,
    pub sensitizing_therapies: u32,
    pub resistive_therapies: u32,
    pub clinical_trials: u32,
}

impl SummaryCounts {
    pub(crate) fn from_element(summary: &XmlElement) -> Result<Self, ReportError> {
        Ok(Self {
            alterations: parse_count(summary, "alterationCount")?,
            sensitizing_therapies: parse_count(summary, "sensitizingCount")?,
            resistive_therapies: parse_count(summary, "resistiveCount")?,
            clinical_trials: parse_count(summary, "clinicalTrialCount")?,
        })
    }

    /// Total number of findings declared by the report.
    #[must_use]
    pub const fn declared_total(&self) -> usize {
        self.alterations as usize
            + self.sensitizing_therapies as usize
            + self.resistive_therapies as usize
            + self.clinical_trials as usize
    }
}

fn parse_count(summary: &XmlElement, attr: &str) -> Result<u32, ReportError> {
    let raw = summary.require_attr(attr)?;
    raw.trim()
        .parse()
        .map_err(|_| ReportError::invalid(&summary.name, attr, format!("'{raw}' is not a count")))
}

/// One `<Gene>` entry: its alteration and the therapies listed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneSection {
    pub name: String,
    pub alteration: AlterationSection,
    pub therapies: Vec<TherapyEntry>,
}

impl GeneSection {
    /// # Errors
    ///
    /// Returns [`ReportError::MissingField`] if the gene name, alteration, or
    /// any therapy field is absent.
    pub fn from_element(gene: &XmlElement) -> Result<Self, ReportError> {
        let name = gene.require_child_text("Name")?;
        let alteration = AlterationSection::from_element(gene.require_descendant("Alteration")?)?;
        let therapies = gene
            .descendants("Therapy")
            .into_iter()
            .map(TherapyEntry::from_element)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name,
            alteration,
            therapies,
        })
    }
}

/// The alteration reported for a gene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlterationSection {
    /// Change descriptor, e.g. `G12D` or `loss`.
    pub name: String,
    pub interpretation: String,
    /// PubMed ids listed directly under the alteration.
    pub references: Vec<String>,
}

impl AlterationSection {
    fn from_element(alteration: &XmlElement) -> Result<Self, ReportError> {
        Ok(Self {
            name: alteration.require_child_text("Name")?,
            interpretation: alteration.require_child_verbatim("Interpretation")?,
            references: alteration
                .child("ReferenceLinks")
                .map(reference_ids)
                .unwrap_or_default(),
        })
    }
}

/// A therapy listed under a gene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TherapyEntry {
    pub name: String,
    /// Raw effect field (`sensitizing`, `resistance`, ...).
    pub effect: String,
    pub fda_approved: String,
    pub rationale: String,
    pub references: Vec<String>,
}

impl TherapyEntry {
    fn from_element(therapy: &XmlElement) -> Result<Self, ReportError> {
        Ok(Self {
            name: therapy.require_child_text("Name")?,
            effect: therapy.require_child_text("Effect")?,
            fda_approved: therapy.require_child_text("FDAApproved")?,
            rationale: therapy.require_child_verbatim("Rationale")?,
            references: reference_ids(therapy),
        })
    }
}

/// A document-level `<Trial>` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialSection {
    pub title: String,
    /// Name of the gene whose alteration suggested this trial.
    pub gene: String,
    pub study_phase: String,
    pub target: String,
    pub locations: String,
    pub nct_id: String,
    pub note: String,
}

impl TrialSection {
    /// # Errors
    ///
    /// Returns [`ReportError::MissingField`] if any trial field is absent.
    pub fn from_element(trial: &XmlElement) -> Result<Self, ReportError> {
        Ok(Self {
            title: trial.require_child_text("Title")?,
            gene: trial.require_child_text("Gene")?,
            study_phase: trial.require_child_text("StudyPhase")?,
            target: trial.require_child_text("Target")?,
            locations: trial.require_child_text("Locations")?,
            nct_id: trial.require_child_text("NCTID")?,
            note: trial.require_child_verbatim("Note")?,
        })
    }
}

/// PubMed ids of every `<ReferenceLink referenceId="...">` under `scope`.
fn reference_ids(scope: &XmlElement) -> Vec<String> {
    scope
        .descendants("ReferenceLink")
        .into_iter()
        .filter_map(|link| {
            let id = link.attr("referenceId");
            if id.is_none() {
                tracing::debug!(section = %scope.name, "skipping reference link without referenceId");
            }
            id.map(str::to_string)
        })
        .collect()
}
