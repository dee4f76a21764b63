//! Structural properties of the finding graph.

use geno_core::entities::{Finding, FindingDetail, SlotIndex};
use geno_core::enums::{AlterationChange, FindingKind, RelationKind, TherapyEffect};
use geno_graph::{FindingGraph, GraphError, assemble, from_report};
use geno_report::{AlterationSection, FoundationReport, GeneSection, TherapyEntry, TrialSection};
use pretty_assertions::assert_eq;
use rstest::rstest;

const REPORT_XML: &str = include_str!("../../geno-report/tests/fixtures/foundation_report.xml");

fn gene(name: &str, alteration: &str, therapies: Vec<TherapyEntry>) -> GeneSection {
    GeneSection {
        name: name.into(),
        alteration: AlterationSection {
            name: alteration.into(),
            interpretation: format!("{name} interpretation"),
            references: Vec::new(),
        },
        therapies,
    }
}

fn therapy(name: &str, effect: &str) -> TherapyEntry {
    TherapyEntry {
        name: name.into(),
        effect: effect.into(),
        fda_approved: "true".into(),
        rationale: format!("{name} rationale"),
        references: Vec::new(),
    }
}

fn trial(title: &str, gene: &str) -> TrialSection {
    TrialSection {
        title: title.into(),
        gene: gene.into(),
        study_phase: "PHASE 2".into(),
        target: "MEK".into(),
        locations: "Boston, MA".into(),
        nct_id: "NCT00000001".into(),
        note: String::new(),
    }
}

fn fixture_graph() -> FindingGraph {
    let report = FoundationReport::from_xml(REPORT_XML).unwrap();
    from_report(&report).unwrap()
}

/// `(target slot, relation)` pairs of a finding's edges.
fn edges(finding: &Finding) -> Vec<(usize, Option<RelationKind>)> {
    finding
        .related
        .iter()
        .map(|e| (e.target.get(), e.relation))
        .collect()
}

fn inbound_untyped(graph: &FindingGraph, target: SlotIndex) -> usize {
    graph
        .findings()
        .iter()
        .flat_map(|f| &f.related)
        .filter(|e| e.target == target && e.relation.is_none())
        .count()
}

#[test]
fn shared_therapy_and_trial_scenario() {
    let genes = vec![
        gene("GeneA", "V600E", vec![therapy("T1", "sensitizing")]),
        gene("GeneB", "Deletion", vec![therapy("T1", "resistance")]),
    ];
    let trials = vec![trial("Trial1", "GeneB")];

    let graph = assemble("R1", &genes, &trials, 4).unwrap();

    assert_eq!(graph.count(FindingKind::GeneAlteration), 2);
    assert_eq!(graph.count(FindingKind::Therapy), 1);
    assert_eq!(graph.count(FindingKind::ClinicalTrial), 1);

    let t1 = graph.find("R1-therapy-1").unwrap();
    assert!(matches!(
        t1.detail,
        FindingDetail::Therapy {
            effect: TherapyEffect::Sensitizing,
            ..
        }
    ));
    assert_eq!(inbound_untyped(&graph, t1.slot), 2);
    assert_eq!(
        t1.related
            .iter()
            .filter(|e| e.relation == Some(RelationKind::DerivedFrom))
            .count(),
        2
    );

    let trial1 = graph.find("R1-trial-1").unwrap();
    let back = &trial1.related[0];
    assert_eq!(back.relation, Some(RelationKind::DerivedFrom));
    assert_eq!(graph.target_id(back.target), Some("R1-gene-alt-2"));
    assert_eq!(back.display, "Mutation in GeneB");
}

#[test]
fn fixture_slots_and_edges() {
    let graph = fixture_graph();

    let ids: Vec<_> = graph.findings().iter().map(|f| f.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "TRF091836v1-gene-alt-1",
            "TRF091836v1-therapy-1",
            "TRF091836v1-therapy-2",
            "TRF091836v1-gene-alt-2",
            "TRF091836v1-therapy-3",
            "TRF091836v1-gene-alt-3",
            "TRF091836v1-trial-1",
            "TRF091836v1-trial-2",
        ]
    );

    let df = Some(RelationKind::DerivedFrom);
    let expected: Vec<Vec<(usize, Option<RelationKind>)>> = vec![
        vec![(1, None), (2, None), (6, None)],
        vec![(0, df), (3, df)],
        vec![(0, df)],
        vec![(4, None), (1, None), (7, None), (6, None)],
        vec![(3, df)],
        vec![],
        vec![(0, df), (3, df)],
        vec![(3, df)],
    ];
    let actual: Vec<_> = graph.findings().iter().map(edges).collect();
    assert_eq!(actual, expected);
}

#[test]
fn fixture_texts() {
    let graph = fixture_graph();

    let kras = graph.get(SlotIndex(0)).unwrap();
    assert_eq!(kras.display, "A genomic alteration in KRAS");
    assert_eq!(kras.references[0].url(), "https://www.ncbi.nlm.nih.gov/pubmed/20147967");

    let cetuximab = graph.get(SlotIndex(2)).unwrap();
    assert_eq!(
        cetuximab.display,
        "Cetuximab is a therapy associated with a lack of response."
    );
    assert_eq!(
        cetuximab.comment.as_deref(),
        Some("KRAS activating mutations predict lack of response to anti-EGFR antibodies.")
    );

    let trial = graph.get(SlotIndex(6)).unwrap();
    assert_eq!(
        trial.narrative.as_deref(),
        Some(
            "A clinical trial option suggested as a result of the genomic alterations found in \
             patient. The title of the trial is Trametinib in KRAS-mutant tumors. This is a \
             PHASE 2 clinical trial study. It targets MEK. The locations this clinical trial is \
             available in are: Boston, MA; Houston, TX. The NCT ID for this trial is: NCT01234567"
        )
    );
    assert_eq!(trial.related[1].display, "Mutation in CDKN2A");
    assert_eq!(
        graph.get(SlotIndex(3)).unwrap().related[2].display,
        "A clinical trial suggested as a result of the genomic alteration"
    );
}

#[test]
fn slots_are_dense_and_match_declared_count() {
    let report = FoundationReport::from_xml(REPORT_XML).unwrap();
    let graph = from_report(&report).unwrap();

    assert_eq!(graph.len(), report.declared_finding_count());
    for (position, finding) in graph.findings().iter().enumerate() {
        assert_eq!(finding.slot, SlotIndex(position));
    }
}

#[test]
fn every_link_has_a_reverse_edge() {
    let graph = fixture_graph();

    for finding in graph.findings() {
        for edge in finding.related.iter().filter(|e| e.relation.is_none()) {
            let target = graph.get(edge.target).unwrap();
            assert!(
                target.related.iter().any(|back| back.target == finding.slot
                    && back.relation == Some(RelationKind::DerivedFrom)),
                "{} -> {} has no derived-from edge back",
                finding.id,
                target.id
            );
        }
    }
}

#[test]
fn rebuilding_yields_identical_graph() {
    assert_eq!(fixture_graph(), fixture_graph());
}

#[test]
fn fixture_variants_are_attached() {
    let graph = fixture_graph();
    let ids: Vec<_> = graph.variants().iter().map(|v| v.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "TRF091836v1-short-variant-1",
            "TRF091836v1-short-variant-2",
            "TRF091836v1-copy-number-alt-1",
        ]
    );
}

#[test]
fn trial_shared_by_three_genes_points_back_at_each() {
    let genes = vec![
        gene("GeneA", "V600E", Vec::new()),
        gene("GeneB", "G12D", Vec::new()),
        gene("GeneC", "loss", Vec::new()),
    ];
    let trials = vec![
        trial("Basket", "GeneA"),
        trial("Basket", "GeneB"),
        trial("Basket", "GeneC"),
    ];

    let graph = assemble("R1", &genes, &trials, 4).unwrap();
    let basket = graph.find("R1-trial-1").unwrap();

    let back: Vec<_> = basket
        .related
        .iter()
        .map(|e| graph.target_id(e.target).unwrap())
        .collect();
    assert_eq!(back, vec!["R1-gene-alt-1", "R1-gene-alt-2", "R1-gene-alt-3"]);
    assert_eq!(inbound_untyped(&graph, basket.slot), 3);
}

#[test]
fn repeated_gene_name_links_trial_to_later_alteration() {
    let genes = vec![
        gene("EGFR", "L858R", Vec::new()),
        gene("KRAS", "G12D", Vec::new()),
        gene("EGFR", "T790M", Vec::new()),
    ];
    let trials = vec![trial("Osimertinib study", "EGFR")];

    let graph = assemble("R", &genes, &trials, 4).unwrap();
    let findings = graph.findings();

    assert_eq!(findings[3].id, "R-trial-1");
    assert_eq!(edges(&findings[3]), vec![(2, Some(RelationKind::DerivedFrom))]);
    assert_eq!(edges(&findings[2]), vec![(3, None)]);
    assert!(findings[0].related.is_empty());
}

#[test]
fn trial_for_unknown_gene_is_cross_reference_error() {
    let genes = vec![gene("GeneA", "V600E", Vec::new())];
    let trials = vec![trial("Orphan", "GeneZ")];

    let err = assemble("R1", &genes, &trials, 2).unwrap_err();
    assert!(matches!(
        err,
        GraphError::CrossReference { ref gene, ref trial } if gene == "GeneZ" && trial == "Orphan"
    ));
}

#[test]
fn declared_count_mismatch_is_consistency_error() {
    let genes = vec![gene("GeneA", "V600E", vec![therapy("T1", "sensitizing")])];

    let err = assemble("R1", &genes, &[], 3).unwrap_err();
    assert!(matches!(
        err,
        GraphError::Consistency {
            declared: 3,
            created: 2
        }
    ));
}

#[rstest]
#[case("V600E", AlterationChange::AminoAcidChange)]
#[case("Deletion", AlterationChange::SequenceVariantType)]
fn alteration_change_is_classified(#[case] descriptor: &str, #[case] expected: AlterationChange) {
    let graph = assemble("R1", &[gene("GeneA", descriptor, Vec::new())], &[], 1).unwrap();
    let FindingDetail::GeneAlteration { change, .. } = &graph.findings()[0].detail else {
        panic!("first finding should be an alteration");
    };
    assert_eq!(*change, expected);
}
