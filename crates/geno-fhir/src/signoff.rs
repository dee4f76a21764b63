//! Provenance record for the report's sign-off.

use geno_report::SignOff;

use crate::datatypes::{Coding, Reference};
use crate::error::FhirError;
use crate::resources::{Practitioner, Provenance, ProvenanceAgent, Signature};
use crate::signers::signer_practitioner;
use crate::time::normalize_timestamp;

/// Provenance `<reportId>-provenance-1` over `targets`, signed by every
/// distinct signer. Returns the signers' practitioner resources alongside.
///
/// # Errors
///
/// Returns [`FhirError::UnknownSigner`] for a signer outside the roster and
/// [`FhirError::Timestamp`] for an unreadable sign-off time.
pub fn provenance(
    report_id: &str,
    sign_off: &SignOff,
    targets: Vec<Reference>,
) -> Result<(Provenance, Vec<Practitioner>), FhirError> {
    let recorded = normalize_timestamp(&sign_off.server_time)?;
    let signers = sign_off
        .signers()
        .iter()
        .map(|name| signer_practitioner(name))
        .collect::<Result<Vec<_>, _>>()?;

    let signature = signers
        .iter()
        .map(|signer| Signature {
            type_: vec![
                Coding::new(
                    "http://hl7.org/fhir/ValueSet/signature-type",
                    "1.2.840.10065.1.12.1.6",
                )
                .display("Validation Signature"),
            ],
            when: recorded.clone(),
            who_reference: signer_reference(signer),
            on_behalf_of_reference: Reference::foundation_medicine(),
        })
        .collect();
    let agent = signers
        .iter()
        .map(|signer| ProvenanceAgent {
            role: Coding::new("http://hl7.org/fhir/ValueSet/provenance-agent-role", "attester")
                .display("Foundation Medicine Medical Doctor that signed off on the report."),
            who_reference: signer_reference(signer),
            on_behalf_of_reference: Reference::foundation_medicine(),
        })
        .collect();

    let provenance = Provenance {
        id: format!("{report_id}-provenance-1"),
        target: targets,
        recorded,
        activity: Coding::new("http://hl7.org/fhir/v3/DocumentCompletion", "LA")
            .display("legally authenticated"),
        signature,
        agent,
    };
    Ok((provenance, signers))
}

fn signer_reference(signer: &Practitioner) -> Reference {
    Reference::to("Practitioner", &signer.id).display(signer.display_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sign_off(operator: &str, text: &str) -> SignOff {
        SignOff {
            server_time: "2017-02-03 15:31:10".into(),
            operator: operator.into(),
            text: text.into(),
        }
    }

    #[test]
    fn one_signature_and_agent_per_distinct_signer() {
        let (provenance, signers) = provenance(
            "R1",
            &sign_off(
                "Jo-Anne Vergilio",
                "Jo-Anne Vergilio, M.D. | Jeffrey S. Ross, M.D., Medical Director",
            ),
            vec![Reference::to("DiagnosticReport", "R1")],
        )
        .unwrap();

        assert_eq!(provenance.id, "R1-provenance-1");
        assert_eq!(provenance.recorded, "2017-02-03T15:31:10");
        let who: Vec<_> = provenance
            .signature
            .iter()
            .map(|s| s.who_reference.reference.as_str())
            .collect();
        assert_eq!(who, vec!["Practitioner/Vergilio-FM", "Practitioner/Ross-FM"]);
        assert_eq!(provenance.agent.len(), 2);
        assert_eq!(signers.len(), 2);
    }

    #[test]
    fn unknown_signer_fails() {
        let err = provenance("R1", &sign_off("Jane Unknown", ""), Vec::new()).unwrap_err();
        assert!(matches!(err, FhirError::UnknownSigner(ref name) if name == "Jane Unknown"));
    }
}
