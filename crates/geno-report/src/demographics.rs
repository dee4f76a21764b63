//! Patient, sample, and sign-off blocks.

use serde::Serialize;

use crate::error::ReportError;
use crate::tree::XmlElement;

/// Patient and ordering details from the `<PMI>` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientInfo {
    pub mrn: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub birth_date: String,
    pub submitted_diagnosis: String,
    /// Ordering physician as written, usually `Family, Given`.
    pub ordering_md: String,
    pub ordering_md_id: String,
    pub pathologist: String,
    pub facility_name: String,
    pub facility_id: String,
    pub specimen_site: String,
    pub collection_date: String,
    pub received_date: String,
}

impl PatientInfo {
    pub(crate) fn from_element(scope: &XmlElement) -> Result<Self, ReportError> {
        Ok(Self {
            mrn: scope.require_text("MRN")?,
            first_name: scope.require_text("FirstName")?,
            last_name: scope.require_text("LastName")?,
            gender: scope.require_text("Gender")?,
            birth_date: scope.require_text("DOB")?,
            submitted_diagnosis: scope.require_text("SubmittedDiagnosis")?,
            ordering_md: scope.require_text("OrderingMD")?,
            ordering_md_id: scope.require_text("OrderingMDId")?,
            pathologist: scope.require_text("Pathologist")?,
            facility_name: scope.require_text("MedFacilName")?,
            facility_id: scope.require_text("MedFacilID")?,
            specimen_site: scope.require_text("SpecSite")?,
            collection_date: scope.require_text("CollDate")?,
            received_date: scope.require_text("ReceivedDate")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleInfo {
    pub sample_id: String,
    pub spec_format: String,
}

impl SampleInfo {
    pub(crate) fn from_element(scope: &XmlElement) -> Result<Self, ReportError> {
        Ok(Self {
            sample_id: scope.require_text("SampleId")?,
            spec_format: scope.require_text("SpecFormat")?,
        })
    }
}

/// The signature block that closes the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignOff {
    /// Sign-off time as written, e.g. `2017-02-03 15:31:10`.
    pub server_time: String,
    pub operator: String,
    /// `Name, Credentials | Name, Credentials, Title` list.
    pub text: String,
}

impl SignOff {
    pub(crate) fn from_element(scope: &XmlElement) -> Result<Self, ReportError> {
        Ok(Self {
            server_time: scope.require_text("ServerTime")?,
            operator: scope.require_text("OpName")?,
            text: scope.require_text("Text")?,
        })
    }

    /// Distinct signer names: the operator first, then each `|`-separated
    /// entry of the signature text up to its first comma.
    #[must_use]
    pub fn signers(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        let listed = self
            .text
            .split('|')
            .map(|entry| entry.split(',').next().unwrap_or_default());
        for name in std::iter::once(self.operator.as_str()).chain(listed) {
            let name = name.trim();
            if !name.is_empty() && !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }
}
