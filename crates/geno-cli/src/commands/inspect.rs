use anyhow::Context;
use geno_core::entities::Finding;
use geno_core::enums::FindingKind;
use geno_graph::{FindingGraph, from_report};
use geno_report::FoundationReport;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InspectArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RelatedSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    relation: Option<&'static str>,
    target: String,
    display: String,
}

#[derive(Debug, Serialize)]
struct FindingSummary {
    id: String,
    kind: &'static str,
    display: String,
    related: Vec<RelatedSummary>,
}

#[derive(Debug, Serialize)]
struct InspectResponse {
    report_id: String,
    declared: usize,
    findings: Vec<FindingSummary>,
    variants: Vec<String>,
}

/// Handle `genofhir inspect`.
pub fn handle(args: &InspectArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = FoundationReport::from_path(&args.file)
        .with_context(|| format!("failed to read report {}", args.file.display()))?;
    let graph = from_report(&report)
        .with_context(|| format!("failed to build finding graph for {}", args.file.display()))?;

    output(
        &summarize(&graph, report.declared_finding_count(), args.kind),
        flags.format,
    )
}

fn summarize(graph: &FindingGraph, declared: usize, kind: Option<FindingKind>) -> InspectResponse {
    InspectResponse {
        report_id: graph.report_id().to_string(),
        declared,
        findings: graph
            .findings()
            .iter()
            .filter(|finding| kind.is_none_or(|kind| finding.kind() == kind))
            .map(|finding| finding_summary(graph, finding))
            .collect(),
        variants: graph.variants().iter().map(|v| v.id.clone()).collect(),
    }
}

fn finding_summary(graph: &FindingGraph, finding: &Finding) -> FindingSummary {
    FindingSummary {
        id: finding.id.clone(),
        kind: finding.kind().as_str(),
        display: finding.display.clone(),
        related: finding
            .related
            .iter()
            .map(|edge| RelatedSummary {
                relation: edge.relation.map(|r| r.as_str()),
                target: format!(
                    "Observation/{}",
                    graph.target_id(edge.target).unwrap_or_default()
                ),
                display: edge.display.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const REPORT_XML: &str =
        include_str!("../../../geno-report/tests/fixtures/foundation_report.xml");

    #[test]
    fn summary_lists_findings_with_observation_targets() {
        let report = FoundationReport::from_xml(REPORT_XML).unwrap();
        let graph = from_report(&report).unwrap();
        let summary = summarize(&graph, report.declared_finding_count(), None);

        assert_eq!(summary.report_id, "TRF091836v1");
        assert_eq!(summary.declared, 8);
        assert_eq!(summary.findings.len(), 8);
        assert_eq!(summary.variants.len(), 3);

        let first = &summary.findings[0];
        assert_eq!(first.kind, "gene_alteration");
        let targets: Vec<_> = first.related.iter().map(|r| r.target.as_str()).collect();
        assert_eq!(
            targets,
            vec![
                "Observation/TRF091836v1-therapy-1",
                "Observation/TRF091836v1-therapy-2",
                "Observation/TRF091836v1-trial-1",
            ]
        );

        let therapy = &summary.findings[1];
        assert!(therapy.related.iter().all(|r| r.relation == Some("derived-from")));
    }

    #[test]
    fn kind_filter_keeps_matching_findings() {
        let report = FoundationReport::from_xml(REPORT_XML).unwrap();
        let graph = from_report(&report).unwrap();
        let kind: FindingKind = "trial".parse().unwrap();
        let summary = summarize(&graph, report.declared_finding_count(), Some(kind));

        let ids: Vec<_> = summary.findings.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["TRF091836v1-trial-1", "TRF091836v1-trial-2"]);
        assert_eq!(summary.declared, 8);
    }
}
