//! Bundle assembly and JSON rendering.

use serde::{Deserialize, Serialize};

use geno_graph::FindingGraph;
use geno_report::FoundationReport;

use crate::datatypes::Reference;
use crate::error::FhirError;
use crate::observations::{ObservationContext, finding_observations, variant_records};
use crate::parties;
use crate::records;
use crate::resources::Resource;
use crate::signoff::provenance;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(rename = "resourceType")]
    pub resource_type: String,
    pub id: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub entry: Vec<BundleEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleEntry {
    pub resource: Resource,
}

impl Bundle {
    #[must_use]
    pub fn collection(id: impl Into<String>) -> Self {
        Self {
            resource_type: "Bundle".to_string(),
            id: id.into(),
            type_: "collection".to_string(),
            entry: Vec::new(),
        }
    }

    pub fn push(&mut self, resource: Resource) {
        self.entry.push(BundleEntry { resource });
    }

    /// Entries of one resource type, in bundle order.
    pub fn resources_of<'a>(
        &'a self,
        resource_type: &'a str,
    ) -> impl Iterator<Item = &'a Resource> + 'a {
        self.entry
            .iter()
            .map(|e| &e.resource)
            .filter(move |r| r.resource_type() == resource_type)
    }
}

/// Map a parsed report and its finding graph to a collection bundle
/// `FoundationMedicine-<reportId>`.
///
/// Entry order: laboratory, ordering facility, ordering physician, patient,
/// pathologist, diagnostic report, condition, request, specimen,
/// provenance, signers, sequences, observations.
///
/// # Errors
///
/// Returns [`FhirError::UnknownSigner`] or [`FhirError::Timestamp`] from the
/// sign-off, and [`FhirError::DanglingEdge`] for a malformed graph.
pub fn build_bundle(report: &FoundationReport, graph: &FindingGraph) -> Result<Bundle, FhirError> {
    let report_id = report.diagnostic_report_id();

    let laboratory = parties::foundation_medicine();
    let facility = parties::ordering_facility(&report.patient);
    let physician = parties::ordering_physician(&report.patient, &facility);
    let patient = parties::patient(&report.patient);
    let pathologist = parties::pathologist(&report.patient, &patient);
    let subject = records::patient_reference(&patient);

    let mut diagnostic_report = records::diagnostic_report(report, &subject);
    let condition = records::condition(report, &patient, &diagnostic_report);
    let request = records::diagnostic_request(&diagnostic_report, &condition, &physician, &patient);
    let specimen = records::specimen(report, &pathologist, &request, &patient);

    let context = ObservationContext {
        subject,
        specimen: records::specimen_reference(&specimen),
        effective_date_time: diagnostic_report.effective_date_time.clone(),
        nucleic_acid_type: report
            .variant_report
            .as_ref()
            .map(|v| v.nucleic_acid_type.clone())
            .unwrap_or_default(),
    };

    let mut observations = finding_observations(graph, &context)?;
    let mut sequences = Vec::new();
    for variant in graph.variants() {
        let (observation, sequence) = variant_records(variant, &context);
        observations.push(observation);
        sequences.push(sequence);
    }

    let displays = graph
        .findings()
        .iter()
        .map(|f| Some(f.display.as_str()))
        .chain(graph.variants().iter().map(|_| None));
    let results: Vec<Reference> = observations
        .iter()
        .zip(displays)
        .map(|(observation, display)| {
            let reference = Reference::to("Observation", &observation.id);
            match display {
                Some(display) => reference.display(display),
                None => reference,
            }
        })
        .collect();

    let contained = observations.iter().cloned().map(Resource::Observation).collect();
    records::attach_results(&mut diagnostic_report, results.clone(), contained, &specimen);

    let mut targets = vec![
        Reference::to("DiagnosticReport", &diagnostic_report.id)
            .display(diagnostic_report.code.text.clone().unwrap_or_default()),
    ];
    targets.extend(results);
    let (provenance, signers) = provenance(&report_id, &report.sign_off, targets)?;

    let mut bundle = Bundle::collection(format!("FoundationMedicine-{report_id}"));
    bundle.push(Resource::Organization(laboratory));
    bundle.push(Resource::Organization(facility));
    bundle.push(Resource::Practitioner(physician));
    bundle.push(Resource::Patient(patient));
    bundle.push(Resource::Practitioner(pathologist));
    bundle.push(Resource::DiagnosticReport(diagnostic_report));
    bundle.push(Resource::Condition(condition));
    bundle.push(Resource::DiagnosticRequest(request));
    bundle.push(Resource::Specimen(specimen));
    bundle.push(Resource::Provenance(provenance));
    for signer in signers {
        bundle.push(Resource::Practitioner(signer));
    }
    for sequence in sequences {
        bundle.push(Resource::Sequence(sequence));
    }
    for observation in observations {
        bundle.push(Resource::Observation(observation));
    }

    tracing::debug!(bundle = %bundle.id, entries = bundle.entry.len(), "assembled bundle");
    Ok(bundle)
}

/// Render a bundle as JSON.
///
/// # Errors
///
/// Returns [`FhirError::Json`] if serialization fails.
pub fn to_json(bundle: &Bundle, pretty: bool) -> Result<String, FhirError> {
    let json = if pretty {
        serde_json::to_string_pretty(bundle)?
    } else {
        serde_json::to_string(bundle)?
    };
    Ok(json)
}
