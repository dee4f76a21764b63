//! Foundation Medicine sign-off roster.
//!
//! Report signatures carry names only; the roster maps each known signer
//! to a stable practitioner id and structured name.

use crate::datatypes::HumanName;
use crate::error::FhirError;
use crate::resources::Practitioner;

struct SignerProfile {
    name: &'static str,
    id: &'static str,
    family: &'static str,
    given: &'static [&'static str],
    prefix: &'static [&'static str],
    gender: &'static str,
}

const ROSTER: &[SignerProfile] = &[
    SignerProfile {
        name: "Jo-Anne Vergilio",
        id: "Vergilio-FM",
        family: "Vergilio",
        given: &["Jo-Anne"],
        prefix: &["M.D."],
        gender: "female",
    },
    SignerProfile {
        name: "Jeffrey S. Ross",
        id: "Ross-FM",
        family: "Ross",
        given: &["Jeffrey", "S."],
        prefix: &["M.D.", "Medical Director"],
        gender: "male",
    },
    SignerProfile {
        name: "Shakti Ramkissoon",
        id: "Ramkissoon-FM",
        family: "Ramkissoon",
        given: &["Shakti"],
        prefix: &["M.D."],
        gender: "male",
    },
];

/// Practitioner resource for a named signer.
///
/// # Errors
///
/// Returns [`FhirError::UnknownSigner`] if the name is not on the roster.
pub fn signer_practitioner(name: &str) -> Result<Practitioner, FhirError> {
    let profile = ROSTER
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| FhirError::UnknownSigner(name.to_string()))?;

    Ok(Practitioner {
        id: profile.id.to_string(),
        text: None,
        name: vec![HumanName {
            use_: Some("official".to_string()),
            text: profile.name.to_string(),
            family: profile.family.to_string(),
            given: profile.given.iter().map(ToString::to_string).collect(),
            prefix: profile.prefix.iter().map(ToString::to_string).collect(),
        }],
        gender: Some(profile.gender.to_string()),
        role: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_signer_resolves() {
        let ross = signer_practitioner("Jeffrey S. Ross").unwrap();
        assert_eq!(ross.id, "Ross-FM");
        assert_eq!(ross.name[0].prefix, vec!["M.D.", "Medical Director"]);
    }

    #[test]
    fn unknown_signer_is_an_error() {
        assert!(matches!(
            signer_practitioner("Gregory House"),
            Err(FhirError::UnknownSigner(ref name)) if name == "Gregory House"
        ));
    }
}
