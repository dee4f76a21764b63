use chrono::NaiveDateTime;

use crate::error::FhirError;

const REPORT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Normalise a report timestamp (`2017-02-03 15:31:10`) to ISO 8601
/// (`2017-02-03T15:31:10`). Values already in ISO form pass through.
///
/// # Errors
///
/// Returns [`FhirError::Timestamp`] if the value matches neither format.
pub fn normalize_timestamp(value: &str) -> Result<String, FhirError> {
    let trimmed = value.trim();
    NaiveDateTime::parse_from_str(trimmed, REPORT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, ISO_FORMAT))
        .map(|parsed| parsed.format(ISO_FORMAT).to_string())
        .map_err(|source| FhirError::Timestamp {
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2017-02-03 15:31:10", "2017-02-03T15:31:10")]
    #[case("2017-02-03T15:31:10", "2017-02-03T15:31:10")]
    #[case(" 2017-02-03 15:31:10\n", "2017-02-03T15:31:10")]
    fn normalizes_report_timestamps(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_timestamp(raw).unwrap(), expected);
    }

    #[test]
    fn rejects_free_text() {
        assert!(matches!(
            normalize_timestamp("Feb 3rd"),
            Err(FhirError::Timestamp { .. })
        ));
    }
}
