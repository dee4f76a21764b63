//! Runs the extractors in fixed order against one builder.

use geno_report::{FoundationReport, GeneSection, TrialSection};

use crate::alterations::extract_alterations;
use crate::builder::GraphBuilder;
use crate::error::GraphError;
use crate::graph::FindingGraph;
use crate::trials::link_trials;
use crate::variants::extract_variants;

/// Build the finding graph for one document: alterations (each followed by
/// its therapies), then trials.
///
/// `declared` is checked against the number of created findings only after
/// both passes.
///
/// # Errors
///
/// Returns [`GraphError::CrossReference`] for a trial whose gene has no
/// alteration, and [`GraphError::Consistency`] if the created count differs
/// from `declared`.
pub fn assemble(
    report_id: &str,
    genes: &[GeneSection],
    trials: &[TrialSection],
    declared: usize,
) -> Result<FindingGraph, GraphError> {
    tracing::debug!(report_id, genes = genes.len(), trials = trials.len(), "building finding graph");

    let mut builder = GraphBuilder::new(report_id);
    extract_alterations(&mut builder, genes)?;
    link_trials(&mut builder, trials)?;

    let created = builder.len();
    if created != declared {
        return Err(GraphError::Consistency { declared, created });
    }

    tracing::debug!(report_id, findings = created, "finding graph complete");
    Ok(builder.finish())
}

/// Build the finding graph for a parsed report, then attach its sequencing
/// variants.
///
/// # Errors
///
/// Same as [`assemble`].
pub fn from_report(report: &FoundationReport) -> Result<FindingGraph, GraphError> {
    let report_id = report.diagnostic_report_id();
    let graph = assemble(
        &report_id,
        &report.genes,
        &report.trials,
        report.declared_finding_count(),
    )?;

    let variants = report
        .variant_report
        .as_ref()
        .map(|block| extract_variants(&report_id, block))
        .unwrap_or_default();
    Ok(graph.with_variants(variants))
}
