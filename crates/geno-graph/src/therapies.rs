//! Therapy findings, deduplicated by name across the whole document.

use geno_core::entities::{FindingDetail, SlotIndex};
use geno_core::enums::{RelationKind, TherapyEffect};
use geno_report::TherapyEntry;

use crate::builder::{GraphBuilder, NewFinding};
use crate::error::GraphError;

/// Link each therapy to the alteration at `origin`.
///
/// A therapy name seen earlier in the document reuses its finding and only
/// gains edges; the effect and rationale of the repeat are ignored.
///
/// # Errors
///
/// Returns [`GraphError::Core`] if `origin` is not a created slot.
pub fn link_therapies(
    builder: &mut GraphBuilder,
    origin: SlotIndex,
    gene: &str,
    therapies: &[TherapyEntry],
) -> Result<(), GraphError> {
    let mutation = format!("Mutation in {gene}");

    for therapy in therapies {
        if let Some(existing) = builder.therapy_slot(&therapy.name) {
            tracing::debug!(therapy = %therapy.name, gene, "reusing therapy finding");
            let display = builder.display_of(existing)?;
            builder.relate(origin, existing, None, display)?;
            builder.relate(existing, origin, Some(RelationKind::DerivedFrom), &mutation)?;
            continue;
        }

        let effect = TherapyEffect::from_effect(&therapy.effect);
        let display = therapy_display(&therapy.name, effect);
        let new = NewFinding::new(
            FindingDetail::Therapy {
                name: therapy.name.clone(),
                effect,
                fda_approved: therapy.fda_approved.clone(),
            },
            display.clone(),
        )
        .narrative(therapy_narrative(&display, effect, gene, &therapy.fda_approved))
        .comment(therapy.rationale.clone())
        .references(therapy.references.iter().cloned());

        let slot = builder.create_finding(new);
        builder.remember_therapy(&therapy.name, slot);
        builder.relate(slot, origin, Some(RelationKind::DerivedFrom), &mutation)?;
        builder.relate(origin, slot, None, display)?;
    }
    Ok(())
}

fn therapy_display(name: &str, effect: TherapyEffect) -> String {
    match effect {
        TherapyEffect::Sensitizing => {
            format!("{name} is a therapy associated with potential clinical benefit")
        }
        TherapyEffect::Resistive => {
            format!("{name} is a therapy associated with a lack of response.")
        }
    }
}

fn therapy_narrative(display: &str, effect: TherapyEffect, gene: &str, fda_approved: &str) -> String {
    // Resistive displays already end in a period.
    let separator = match effect {
        TherapyEffect::Sensitizing => ". ",
        TherapyEffect::Resistive => " ",
    };
    format!(
        "{display}{separator}This therapy was observed as a potential treatment for the patient \
         due to their mutation in {gene}. FDA Approved: {fda_approved}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resistive_narrative_has_single_period() {
        let display = therapy_display("Cetuximab", TherapyEffect::Resistive);
        assert_eq!(
            therapy_narrative(&display, TherapyEffect::Resistive, "KRAS", "true"),
            "Cetuximab is a therapy associated with a lack of response. This therapy was \
             observed as a potential treatment for the patient due to their mutation in KRAS. \
             FDA Approved: true"
        );
    }

    #[test]
    fn sensitizing_narrative_adds_period() {
        let display = therapy_display("Trametinib", TherapyEffect::Sensitizing);
        assert_eq!(
            therapy_narrative(&display, TherapyEffect::Sensitizing, "KRAS", "false"),
            "Trametinib is a therapy associated with potential clinical benefit. This therapy \
             was observed as a potential treatment for the patient due to their mutation in \
             KRAS. FDA Approved: false"
        );
    }
}
