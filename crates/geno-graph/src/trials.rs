//! Clinical-trial findings, deduplicated by title.

use geno_core::entities::FindingDetail;
use geno_core::enums::RelationKind;
use geno_report::TrialSection;

use crate::builder::{GraphBuilder, NewFinding};
use crate::error::GraphError;

const TRIAL_DISPLAY: &str =
    "A clinical trial option suggested as a result of the genomic alterations found in patient";
const TRIAL_LINK_DISPLAY: &str = "A clinical trial suggested as a result of the genomic alteration";

/// Link each trial to the alteration of the gene it targets. Must run after
/// every gene has been registered.
///
/// The back-edge target is recomputed from the current entry's gene, so a
/// title shared by several genes points back at each of them in turn.
///
/// # Errors
///
/// Returns [`GraphError::CrossReference`] if a trial names a gene without an
/// alteration, and [`GraphError::Core`] if the recomputed alteration id does
/// not resolve.
pub fn link_trials(builder: &mut GraphBuilder, trials: &[TrialSection]) -> Result<(), GraphError> {
    for trial in trials {
        let gene = builder
            .gene(&trial.gene)
            .ok_or_else(|| GraphError::CrossReference {
                gene: trial.gene.clone(),
                trial: trial.title.clone(),
            })?;
        let alteration = builder.alteration_slot(gene.id_number)?;
        let mutation = format!("Mutation in {}", trial.gene);

        if let Some(existing) = builder.trial_slot(&trial.title) {
            tracing::debug!(trial = %trial.title, gene = %trial.gene, "reusing trial finding");
            builder.relate(gene.tracker, existing, None, TRIAL_LINK_DISPLAY)?;
            builder.relate(existing, alteration, Some(RelationKind::DerivedFrom), mutation)?;
            continue;
        }

        let new = NewFinding::new(
            FindingDetail::ClinicalTrial {
                title: trial.title.clone(),
                gene: trial.gene.clone(),
                nct_id: trial.nct_id.clone(),
            },
            TRIAL_DISPLAY,
        )
        .narrative(trial_narrative(trial))
        .comment(trial.note.clone());

        let slot = builder.create_finding(new);
        builder.remember_trial(&trial.title, slot);
        builder.relate(slot, alteration, Some(RelationKind::DerivedFrom), mutation)?;
        builder.relate(gene.tracker, slot, None, TRIAL_LINK_DISPLAY)?;
    }
    Ok(())
}

fn trial_narrative(trial: &TrialSection) -> String {
    format!(
        "{TRIAL_DISPLAY}. The title of the trial is {}. This is a {} clinical trial study. \
         It targets {}. The locations this clinical trial is available in are: {}. \
         The NCT ID for this trial is: {}",
        trial.title, trial.study_phase, trial.target, trial.locations, trial.nct_id
    )
}
