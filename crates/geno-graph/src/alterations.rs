//! One alteration finding per gene section.

use geno_core::entities::FindingDetail;
use geno_core::enums::AlterationChange;
use geno_report::GeneSection;

use crate::builder::{GraphBuilder, NewFinding};
use crate::error::GraphError;
use crate::therapies::link_therapies;

/// Walk the gene sections in document order. Each gene gets an alteration
/// finding, a side-table entry, and then its therapies, before the next gene
/// is visited.
///
/// # Errors
///
/// Propagates edge errors from [`link_therapies`].
pub fn extract_alterations(
    builder: &mut GraphBuilder,
    genes: &[GeneSection],
) -> Result<(), GraphError> {
    for gene in genes {
        let alteration = &gene.alteration;
        let new = NewFinding::new(
            FindingDetail::GeneAlteration {
                gene: gene.name.clone(),
                alteration: alteration.name.clone(),
                change: AlterationChange::classify(&alteration.name),
                interpretation: alteration.interpretation.clone(),
            },
            format!("A genomic alteration in {}", gene.name),
        )
        .references(alteration.references.iter().cloned());

        let origin = builder.create_finding(new);
        builder.register_gene(&gene.name, origin);
        link_therapies(builder, origin, &gene.name, &gene.therapies)?;
    }
    Ok(())
}
