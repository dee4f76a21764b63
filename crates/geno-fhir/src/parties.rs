//! Organizations, practitioners, and the patient.

use geno_report::PatientInfo;

use crate::datatypes::{
    Address, Assigner, CodeableConcept, Coding, ContactPoint, FOUNDATION_MEDICINE_ID,
    FOUNDATION_MEDICINE_NAME, HumanName, Identifier, Narrative, Reference,
};
use crate::resources::{Organization, Patient, Practitioner, PractitionerRole};

const PHYSICIAN_ROLE: (&str, &str) = ("309295000", "Physician");
const PATHOLOGIST_ROLE: (&str, &str) = ("81464008", "Pathologist");

/// The performing laboratory.
#[must_use]
pub fn foundation_medicine() -> Organization {
    Organization {
        id: FOUNDATION_MEDICINE_ID.to_string(),
        text: Narrative::generated(),
        identifier: vec![Identifier {
            use_: Some("official".to_string()),
            type_: Some(CodeableConcept::text("CLIA identification number")),
            system: Some("https://wwwn.cdc.gov/clia/Resources/LabSearch.aspx".to_string()),
            value: "22D2027531".to_string(),
            assigner: None,
        }],
        active: Some(true),
        type_: Some(
            CodeableConcept::coded(
                Coding::new("http://hl7.org/fhir/ValueSet/organization-type", "prov")
                    .display("Genomic healthcare provider"),
            )
            .with_text("Genomic healthcare provider"),
        ),
        name: FOUNDATION_MEDICINE_NAME.to_string(),
        telecom: vec![
            contact("phone", "(+1) 617-418-2200"),
            contact("fax", "(+1) 617-418-2290"),
            contact("email", "client.services@foundationmedicine.com"),
        ],
        address: vec![Address {
            line: vec!["150 Second Street".to_string()],
            city: "Cambridge".to_string(),
            state: "MA".to_string(),
            postal_code: "02141".to_string(),
            country: "USA".to_string(),
        }],
    }
}

fn contact(system: &str, value: &str) -> ContactPoint {
    ContactPoint {
        system: system.to_string(),
        value: value.to_string(),
    }
}

/// The ordering facility, id `<MedFacilID>FM`.
#[must_use]
pub fn ordering_facility(patient: &PatientInfo) -> Organization {
    Organization {
        id: format!("{}FM", patient.facility_id),
        text: Narrative::generated(),
        identifier: vec![Identifier {
            value: patient.facility_id.clone(),
            ..Identifier::default()
        }],
        active: None,
        type_: None,
        name: patient.facility_name.clone(),
        telecom: Vec::new(),
        address: Vec::new(),
    }
}

#[must_use]
pub fn ordering_physician(patient: &PatientInfo, facility: &Organization) -> Practitioner {
    let organization = Reference::to("Organization", &facility.id).display(&facility.name);
    practitioner(
        format!("{}FM", patient.ordering_md_id),
        &patient.ordering_md,
        PHYSICIAN_ROLE,
        Some(organization),
    )
}

/// The pathologist has no id of its own in the report, so one is derived
/// from the patient's.
#[must_use]
pub fn pathologist(patient: &PatientInfo, patient_resource: &Patient) -> Practitioner {
    practitioner(
        format!("{}patho1", patient_resource.id),
        &patient.pathologist,
        PATHOLOGIST_ROLE,
        None,
    )
}

fn practitioner(
    id: String,
    written_name: &str,
    (code, text): (&str, &str),
    organization: Option<Reference>,
) -> Practitioner {
    Practitioner {
        id,
        text: Some(Narrative::generated()),
        name: vec![physician_name(written_name)],
        gender: None,
        role: vec![PractitionerRole::snomed(code, text, organization)],
    }
}

/// Parse `Family, Given Given` into a name with an `M.D.` prefix.
///
/// A name without a comma is taken as the family name alone.
#[must_use]
pub fn physician_name(written: &str) -> HumanName {
    let (family, given) = match written.split_once(',') {
        Some((family, given)) => (
            family.trim().to_string(),
            given.split_whitespace().map(str::to_string).collect::<Vec<_>>(),
        ),
        None => (written.trim().to_string(), Vec::new()),
    };
    let prefix = vec!["M.D.".to_string()];

    let mut text = given.join(" ");
    if !text.is_empty() {
        text.push(' ');
    }
    text.push_str(&family);
    text.push_str(", ");
    text.push_str(&prefix.join(", "));

    HumanName {
        use_: None,
        text,
        family,
        given,
        prefix,
    }
}

/// Patient `<MRN>FM` with a medical-record identifier.
#[must_use]
pub fn patient(info: &PatientInfo) -> Patient {
    Patient {
        id: format!("{}FM", info.mrn),
        text: Narrative::generated(),
        identifier: vec![Identifier {
            use_: Some("usual".to_string()),
            type_: Some(CodeableConcept::coded(Coding::new(
                "http://hl7.org/fhir/v2/0203",
                "MR",
            ))),
            system: None,
            value: info.mrn.clone(),
            assigner: Some(Assigner {
                display: info.facility_name.clone(),
            }),
        }],
        name: vec![HumanName {
            use_: Some("official".to_string()),
            text: format!("{} {}", info.first_name, info.last_name),
            family: info.last_name.clone(),
            given: vec![info.first_name.clone()],
            prefix: Vec::new(),
        }],
        gender: info.gender.to_lowercase(),
        birth_date: info.birth_date.clone(),
        deceased_boolean: false,
    }
}
