//! Sequencing-level variant findings.
//!
//! Short variants and copy-number alterations have their own identifier
//! sequences and no related edges. They are extracted after the
//! cross-reference graph and do not count toward the declared total.

use geno_core::entities::{
    Alleles, CopyNumberAlteration, ShortVariant, VariantDetail, VariantFinding,
};
use geno_core::enums::{DnaChangeType, FindingKind};
use geno_core::ids::IdentifierAssigner;
use geno_report::{CopyNumberEntry, ShortVariantEntry, VariantReport};

/// Short variants first, then copy-number alterations, each in document order.
#[must_use]
pub fn extract_variants(report_id: &str, block: &VariantReport) -> Vec<VariantFinding> {
    let mut ids = IdentifierAssigner::new(report_id);

    let short = block
        .short_variants
        .iter()
        .map(|entry| short_variant(&mut ids, entry))
        .collect::<Vec<_>>();
    let copy_number = block
        .copy_number_alterations
        .iter()
        .map(|entry| copy_number_alteration(&mut ids, entry));

    short.into_iter().chain(copy_number).collect()
}

fn short_variant(ids: &mut IdentifierAssigner, entry: &ShortVariantEntry) -> VariantFinding {
    let (ordinal, id) = ids.assign(FindingKind::ShortVariant);
    VariantFinding {
        sequence_id: format!("{id}-seq"),
        id,
        ordinal,
        gene: entry.gene.clone(),
        chromosome: entry.chromosome.clone(),
        detail: VariantDetail::Short(ShortVariant {
            transcript: entry.transcript.clone(),
            cds_effect: entry.cds_effect.clone(),
            protein_effect: entry.protein_effect.clone(),
            functional_effect: entry.functional_effect.clone(),
            allele_fraction: entry.allele_fraction,
            depth: entry.depth,
            position: entry.position,
            change_type: DnaChangeType::classify(&entry.cds_effect),
            alleles: split_alleles(&entry.cds_effect),
        }),
    }
}

fn copy_number_alteration(ids: &mut IdentifierAssigner, entry: &CopyNumberEntry) -> VariantFinding {
    let (ordinal, id) = ids.assign(FindingKind::CopyNumberAlteration);
    VariantFinding {
        sequence_id: format!("{id}-seq"),
        id,
        ordinal,
        gene: entry.gene.clone(),
        chromosome: entry.chromosome.clone(),
        detail: VariantDetail::CopyNumber(CopyNumberAlteration {
            copy_number: entry.copy_number.clone(),
            alteration_type: entry.alteration_type.clone(),
            status: entry.status.clone(),
            ratio: entry.ratio.clone(),
            start: entry.start,
            end: entry.end,
        }),
    }
}

/// Reference and observed alleles from a CDS effect such as `35G>A`,
/// `2310_2311insGGT`, or `2236_2250delGAATTAAGA`.
///
/// Positions and lowercase markers are dropped first. Returns `None` when
/// the remaining text has no allele on the side that carries one.
#[must_use]
pub fn split_alleles(cds_effect: &str) -> Option<Alleles> {
    let bases: String = cds_effect
        .chars()
        .filter(|c| !c.is_ascii_digit() && !c.is_lowercase())
        .collect();

    let (reference, observed) = if cds_effect.contains('>') {
        bases.split_once('>')?
    } else if cds_effect.contains('<') {
        bases.split_once('<')?
    } else if cds_effect.contains("ins") {
        ("_", bases.split_once('_')?.1)
    } else if cds_effect.contains("del") {
        (bases.split_once('_')?.1, "_")
    } else {
        return None;
    };

    if reference.is_empty() || observed.is_empty() {
        return None;
    }
    Some(Alleles {
        reference: reference.to_string(),
        observed: observed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("35G>A", "G", "A")]
    #[case("1799T<A", "T", "A")]
    #[case("2310_2311insGGT", "_", "GGT")]
    #[case("2236_2250delGAATTAAGAGAAGCA", "GAATTAAGAGAAGCA", "_")]
    fn alleles_from_cds_effect(#[case] cds: &str, #[case] reference: &str, #[case] observed: &str) {
        assert_eq!(
            split_alleles(cds),
            Some(Alleles {
                reference: reference.into(),
                observed: observed.into(),
            })
        );
    }

    #[rstest]
    #[case("2236_2250del15")]
    #[case("del")]
    #[case("splice")]
    fn unsplittable_cds_effect_has_no_alleles(#[case] cds: &str) {
        assert_eq!(split_alleles(cds), None);
    }

    #[test]
    fn variant_ids_are_numbered_per_kind() {
        let block = VariantReport {
            tissue_of_origin: None,
            nucleic_acid_type: "DNA".into(),
            short_variants: vec![ShortVariantEntry {
                gene: "KRAS".into(),
                transcript: "NM_004985".into(),
                cds_effect: "35G>A".into(),
                protein_effect: "G12D".into(),
                functional_effect: "missense".into(),
                allele_fraction: 0.34,
                depth: 512,
                chromosome: "chr12".into(),
                position: 25_398_284,
            }],
            copy_number_alterations: vec![CopyNumberEntry {
                gene: "CDKN2A".into(),
                copy_number: "0".into(),
                alteration_type: "loss".into(),
                status: "known".into(),
                ratio: "0.2".into(),
                chromosome: "chr9".into(),
                start: 21_968_178,
                end: 21_995_301,
            }],
        };

        let variants = extract_variants("R1", &block);
        let ids: Vec<_> = variants
            .iter()
            .map(|v| (v.id.as_str(), v.sequence_id.as_str()))
            .collect();
        assert_eq!(
            ids,
            vec![
                ("R1-short-variant-1", "R1-short-variant-1-seq"),
                ("R1-copy-number-alt-1", "R1-copy-number-alt-1-seq"),
            ]
        );
        assert_eq!(variants[0].kind(), FindingKind::ShortVariant);
    }
}
