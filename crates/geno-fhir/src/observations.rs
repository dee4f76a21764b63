//! Observations for findings and variants, plus the variants' sequences.
//!
//! Every finding becomes one observation whose id is the finding id; each
//! related edge becomes a `related` entry pointing at `Observation/<id>`.

use geno_core::entities::{Finding, FindingDetail, VariantDetail, VariantFinding};
use geno_core::enums::AlterationChange;
use geno_graph::FindingGraph;

use crate::datatypes::{CodeableConcept, Coding, Extension, Narrative, Reference};
use crate::error::FhirError;
use crate::resources::{
    Observation, ObservationRelated, ReferenceSeq, Sequence, SequenceVariant, StructureVariant,
    VariantBoundary,
};

const VARIANT_SEQUENCE_DISPLAY: &str = "A short variant from a Foundation Medicine variant-report";

/// References shared by every observation of one report.
#[derive(Debug, Clone)]
pub struct ObservationContext {
    pub subject: Reference,
    pub specimen: Reference,
    pub effective_date_time: String,
    pub nucleic_acid_type: String,
}

impl ObservationContext {
    fn observation(&self, id: &str) -> Observation {
        Observation {
            id: id.to_string(),
            text: Narrative::generated(),
            status: "final".to_string(),
            category: vec![
                CodeableConcept::coded(Coding::new(
                    "http://hl7.org/fhir/observation-category",
                    "laboratory",
                ))
                .with_text("Laboratory result generated by Foundation Medicine"),
            ],
            extension: Vec::new(),
            performer: vec![Reference::foundation_medicine()],
            subject: self.subject.clone(),
            effective_date_time: self.effective_date_time.clone(),
            specimen: None,
            value_string: None,
            comment: None,
            related: Vec::new(),
        }
    }
}

/// One observation per finding, in slot order.
///
/// # Errors
///
/// Returns [`FhirError::DanglingEdge`] if an edge targets a slot outside
/// the graph.
pub fn finding_observations(
    graph: &FindingGraph,
    context: &ObservationContext,
) -> Result<Vec<Observation>, FhirError> {
    graph
        .findings()
        .iter()
        .map(|finding| finding_observation(graph, finding, context))
        .collect()
}

fn finding_observation(
    graph: &FindingGraph,
    finding: &Finding,
    context: &ObservationContext,
) -> Result<Observation, FhirError> {
    let mut observation = context.observation(&finding.id);

    if let FindingDetail::GeneAlteration {
        gene,
        alteration,
        change,
        interpretation,
    } = &finding.detail
    {
        observation.extension.push(gene_extension(gene));
        let change_extension = match change {
            AlterationChange::AminoAcidChange => "observation-geneticsAminoAcidChangeName",
            AlterationChange::SequenceVariantType => "observation-geneticsDNASequenceVariantType",
        };
        observation.extension.push(Extension::text(change_extension, alteration));
        observation
            .extension
            .push(Extension::text("observation-geneticsInterpretation", interpretation));
        observation.specimen = Some(context.specimen.clone());
    }

    observation.extension.extend(
        finding
            .references
            .iter()
            .map(|r| Extension::text("observation-relatedPubMedArtifact", r.url())),
    );
    observation.value_string.clone_from(&finding.narrative);
    observation.comment.clone_from(&finding.comment);

    for edge in &finding.related {
        let target = graph
            .target_id(edge.target)
            .ok_or_else(|| FhirError::DanglingEdge {
                from: finding.id.clone(),
                slot: edge.target.get(),
            })?;
        observation.related.push(ObservationRelated {
            type_: edge.relation.map(|r| r.as_str().to_string()),
            target: Reference::to("Observation", target).display(&edge.display),
        });
    }
    Ok(observation)
}

fn gene_extension(gene: &str) -> Extension {
    Extension::concept(
        "observation-geneticsGene",
        CodeableConcept {
            coding: vec![Coding {
                system: Some("http://www.genenames.org".to_string()),
                code: None,
                display: Some(gene.to_string()),
            }],
            text: Some(gene.to_string()),
        },
    )
}

/// Observation and sequence for one variant.
#[must_use]
pub fn variant_records(variant: &VariantFinding, context: &ObservationContext) -> (Observation, Sequence) {
    let mut observation = context.observation(&variant.id);
    observation.specimen = Some(context.specimen.clone());
    let sequence_ref = Extension::reference(
        "observation-geneticsSequence",
        Reference::to("Sequence", &variant.sequence_id).display(VARIANT_SEQUENCE_DISPLAY),
    );

    let mut sequence = Sequence {
        id: variant.sequence_id.clone(),
        type_: context.nucleic_acid_type.clone(),
        reference_seq: ReferenceSeq {
            chromosome: CodeableConcept::text(&variant.chromosome),
        },
        variant: Vec::new(),
        structure_variant: Vec::new(),
        read_coverage: None,
        specimen: context.specimen.clone(),
        patient: context.subject.clone(),
        performer: vec![Reference::foundation_medicine()],
    };

    match &variant.detail {
        VariantDetail::Short(short) => {
            observation.extension.extend([
                Extension::text(
                    "observation-geneticsTranscriptReferenceSequenceId",
                    &short.transcript,
                ),
                Extension::decimal("observation-geneticsAllelicFrequency", short.allele_fraction),
                Extension::text("observation-geneticsGene", &variant.gene),
                Extension::text("observation-geneticsAminoAcidChange", &short.protein_effect),
                Extension::text("observation-geneticsAminoAcidChangeType", &short.functional_effect),
                Extension::text("observation-geneticsDNASequenceVariantName", &short.cds_effect),
                Extension::text(
                    "observation-geneticsDNASequenceVariantType",
                    short.change_type.as_str(),
                ),
                sequence_ref,
            ]);

            sequence.read_coverage = Some(short.depth);
            sequence.variant.push(SequenceVariant {
                start: short.position,
                end: short.position,
                observed_allele: short.alleles.as_ref().map(|a| a.observed.clone()),
                reference_allele: short.alleles.as_ref().map(|a| a.reference.clone()),
            });
        }
        VariantDetail::CopyNumber(cna) => {
            observation.extension.extend([
                Extension::text("observation-geneticsGene", &variant.gene),
                sequence_ref,
                Extension::text(
                    "observation-geneticsCopyNumberEvent",
                    format!("Copy number: {}", cna.copy_number),
                ),
                Extension::text("observation-geneticsDNASequenceVariantType", &cna.alteration_type),
            ]);

            let boundary = VariantBoundary {
                start: cna.start,
                end: cna.end,
            };
            sequence.structure_variant.push(StructureVariant {
                precision_of_boundaries: format!("{} structural variant", cna.status),
                reported_acgh_ratio: cna.ratio.clone(),
                length: cna.length(),
                outer: boundary,
                inner: boundary,
            });
        }
    }

    (observation, sequence)
}
