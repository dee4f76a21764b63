//! Typed view over a whole FoundationOne results report.

use std::path::Path;

use serde::Serialize;

use crate::demographics::{PatientInfo, SampleInfo, SignOff};
use crate::error::ReportError;
use crate::sections::{GeneSection, SummaryCounts, TrialSection};
use crate::tree::XmlElement;
use crate::variants::VariantReport;

/// Every section the converter reads, in document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoundationReport {
    pub report_id: String,
    pub version: String,
    pub test_type: String,
    pub application_statement: String,
    pub patient: PatientInfo,
    pub sample: SampleInfo,
    pub summary: SummaryCounts,
    pub genes: Vec<GeneSection>,
    pub trials: Vec<TrialSection>,
    pub sign_off: SignOff,
    pub variant_report: Option<VariantReport>,
}

impl FoundationReport {
    /// Parse report XML into the typed view.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Xml`] for malformed XML,
    /// [`ReportError::MissingField`] when a required element or attribute is
    /// absent, and [`ReportError::InvalidValue`] for unparsable counts or
    /// positions.
    pub fn from_xml(xml: &str) -> Result<Self, ReportError> {
        let root = XmlElement::parse(xml)?;
        Self::from_tree(&root)
    }

    /// Read and parse a report file.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`Self::from_xml`].
    pub fn from_path(path: &Path) -> Result<Self, ReportError> {
        let xml = std::fs::read_to_string(path)?;
        Self::from_xml(&xml)
    }

    /// Build the typed view from an already parsed tree.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_xml`], minus XML syntax errors.
    pub fn from_tree(root: &XmlElement) -> Result<Self, ReportError> {
        let genes = root
            .require_descendant("Genes")?
            .children_named("Gene")
            .map(GeneSection::from_element)
            .collect::<Result<Vec<_>, _>>()?;
        let trials = root
            .descendants("Trial")
            .into_iter()
            .map(TrialSection::from_element)
            .collect::<Result<Vec<_>, _>>()?;

        let pmi = root.descendant("PMI").unwrap_or(root);
        let signatures = root.descendant("Signatures").unwrap_or(root);
        let variant_report = root
            .descendant("variant-report")
            .map(VariantReport::from_element)
            .transpose()?;

        let report = Self {
            report_id: root.require_text("ReportId")?,
            version: root.require_text("Version")?,
            test_type: root.require_text("TestType")?,
            application_statement: application_statement(root),
            patient: PatientInfo::from_element(pmi)?,
            sample: SampleInfo::from_element(root)?,
            summary: SummaryCounts::from_element(root.require_descendant("Summaries")?)?,
            genes,
            trials,
            sign_off: SignOff::from_element(signatures)?,
            variant_report,
        };

        tracing::debug!(
            report_id = %report.diagnostic_report_id(),
            genes = report.genes.len(),
            trials = report.trials.len(),
            "parsed report"
        );
        Ok(report)
    }

    /// `<ReportId>v<Version>`, the prefix of every finding id.
    #[must_use]
    pub fn diagnostic_report_id(&self) -> String {
        format!("{}v{}", self.report_id, self.version)
    }

    /// Sum of the four summary counters.
    #[must_use]
    pub const fn declared_finding_count(&self) -> usize {
        self.summary.declared_total()
    }
}

fn application_statement(root: &XmlElement) -> String {
    root.descendant("ApplicationSetting")
        .and_then(|setting| setting.descendant("Value"))
        .map(|value| value.text.trim().to_string())
        .unwrap_or_default()
}
