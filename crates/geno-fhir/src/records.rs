//! Report-level records: diagnostic report, condition, request, specimen.

use geno_report::FoundationReport;

use crate::datatypes::{Annotation, CodeableConcept, Coding, Narrative, Reference};
use crate::resources::{
    Condition, ConditionEvidence, DiagnosticReport, DiagnosticRequest, Patient, Practitioner,
    Resource, Specimen, SpecimenCollection,
};

/// Diagnostic report without results; [`attach_results`] fills those in
/// once every observation exists.
#[must_use]
pub fn diagnostic_report(report: &FoundationReport, subject: &Reference) -> DiagnosticReport {
    let summary = &report.summary;
    let conclusion = format!(
        "Patient results: {} genomic alterations | {} therapies associated with potential \
         clinical benefit | {} therapies associated with lack of response | {} clinical trials. {}",
        summary.alterations,
        summary.sensitizing_therapies,
        summary.resistive_therapies,
        summary.clinical_trials,
        report.application_statement
    );

    DiagnosticReport {
        id: report.diagnostic_report_id(),
        text: Narrative::generated(),
        status: "partial".to_string(),
        code: CodeableConcept::text("FoundationOne"),
        category: CodeableConcept::text(format!("{} test by Foundation Medicine", report.test_type)),
        effective_date_time: report.patient.collection_date.clone(),
        subject: subject.clone(),
        performer: vec![Reference::foundation_medicine()],
        conclusion,
        specimen: Vec::new(),
        result: Vec::new(),
        contained: Vec::new(),
    }
}

/// Point the report at its observations and specimen and embed copies of
/// them as contained resources.
pub fn attach_results(
    report: &mut DiagnosticReport,
    results: Vec<Reference>,
    contained: Vec<Resource>,
    specimen: &Specimen,
) {
    report.result = results;
    report.specimen = vec![specimen_reference(specimen)];
    report.contained = contained;
    report.contained.push(Resource::Specimen(specimen.clone()));
}

#[must_use]
pub fn condition(
    report: &FoundationReport,
    patient: &Patient,
    diagnostic_report: &DiagnosticReport,
) -> Condition {
    let body_site = report
        .variant_report
        .as_ref()
        .and_then(|v| v.tissue_of_origin.as_deref())
        .map(|tissue| CodeableConcept::text(tissue.to_lowercase()))
        .into_iter()
        .collect();

    Condition {
        id: format!("{}-cond-1", patient.id),
        text: Narrative::generated(),
        verification_status: "confirmed".to_string(),
        category: vec![CodeableConcept::coded(Coding::new(
            "http://hl7.org/fhir/condition-category",
            "encounter-diagnosis",
        ))],
        severity: CodeableConcept::coded(
            Coding::new("http://snomed.info/sct", "24484000").display("Severe"),
        ),
        code: CodeableConcept::text(&report.patient.submitted_diagnosis),
        body_site,
        evidence: vec![ConditionEvidence {
            detail: vec![
                Reference::to("DiagnosticReport", &diagnostic_report.id).display(format!(
                    "A {} test performed on {} by Foundation Medicine",
                    report.test_type, report.patient.collection_date
                )),
            ],
        }],
        subject: patient_reference(patient),
    }
}

#[must_use]
pub fn diagnostic_request(
    diagnostic_report: &DiagnosticReport,
    condition: &Condition,
    requester: &Practitioner,
    patient: &Patient,
) -> DiagnosticRequest {
    let performed = diagnostic_report.category.text.as_deref().unwrap_or_default();
    DiagnosticRequest {
        id: format!("{}-request-1", diagnostic_report.id),
        status: "completed".to_string(),
        intent: "order".to_string(),
        note: format!("This is a request for a {performed}"),
        reason_reference: vec![
            Reference::to("Condition", &condition.id)
                .display(condition.code.text.clone().unwrap_or_default()),
        ],
        requester: Reference::to("Practitioner", &requester.id).display(requester.display_name()),
        subject: patient_reference(patient),
        performer: vec![Reference::foundation_medicine()],
    }
}

#[must_use]
pub fn specimen(
    report: &FoundationReport,
    collector: &Practitioner,
    request: &DiagnosticRequest,
    patient: &Patient,
) -> Specimen {
    let info = &report.patient;
    Specimen {
        id: report.sample.sample_id.clone(),
        status: "available".to_string(),
        type_: CodeableConcept::text(format!(
            "{} from {}",
            report.sample.spec_format, info.specimen_site
        )),
        collection: SpecimenCollection {
            collector: Reference::to("Practitioner", &collector.id)
                .display(collector.display_name()),
            collected_date_time: info.collection_date.clone(),
            body_site: CodeableConcept::text(&info.specimen_site),
        },
        received_time: info.received_date.clone(),
        request: vec![Reference::to("DiagnosticRequest", &request.id).display(&request.note)],
        note: vec![Annotation {
            author_string: "Foundation Medicine".to_string(),
            time: info.collection_date.clone(),
            text: report.application_statement.clone(),
        }],
        subject: patient_reference(patient),
    }
}

#[must_use]
pub fn patient_reference(patient: &Patient) -> Reference {
    Reference::to("Patient", &patient.id).display(patient.display_name())
}

#[must_use]
pub fn specimen_reference(specimen: &Specimen) -> Reference {
    let display = specimen.type_.text.clone().unwrap_or_default();
    Reference::to("Specimen", &specimen.id).display(display)
}
