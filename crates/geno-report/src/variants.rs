//! The `<variant-report>` block: sequencing-level short variants and
//! copy-number alterations.
//!
//! Positions are parsed here so callers see typed coordinates; a malformed
//! position is an [`ReportError::InvalidValue`] on the owning element.

use serde::Serialize;

use crate::error::ReportError;
use crate::tree::XmlElement;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantReport {
    pub tissue_of_origin: Option<String>,
    /// `nucleic-acid-type` of the first sample, e.g. `DNA`.
    pub nucleic_acid_type: String,
    pub short_variants: Vec<ShortVariantEntry>,
    pub copy_number_alterations: Vec<CopyNumberEntry>,
}

impl VariantReport {
    /// # Errors
    ///
    /// Returns [`ReportError::MissingField`] for absent attributes and
    /// [`ReportError::InvalidValue`] for unparsable numbers or positions.
    pub fn from_element(block: &XmlElement) -> Result<Self, ReportError> {
        let nucleic_acid_type = block
            .require_descendant("sample")?
            .require_attr("nucleic-acid-type")?
            .to_string();

        let short_variants = block
            .descendants("short-variant")
            .into_iter()
            .map(ShortVariantEntry::from_element)
            .collect::<Result<Vec<_>, _>>()?;
        let copy_number_alterations = block
            .descendants("copy-number-alteration")
            .into_iter()
            .map(CopyNumberEntry::from_element)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            tissue_of_origin: block.attr("tissue-of-origin").map(str::to_string),
            nucleic_acid_type,
            short_variants,
            copy_number_alterations,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortVariantEntry {
    pub gene: String,
    pub transcript: String,
    /// CDS-level change, e.g. `35G>A`.
    pub cds_effect: String,
    pub protein_effect: String,
    pub functional_effect: String,
    pub allele_fraction: f64,
    pub depth: u32,
    pub chromosome: String,
    pub position: u64,
}

impl ShortVariantEntry {
    fn from_element(el: &XmlElement) -> Result<Self, ReportError> {
        let (chromosome, coords) = split_position(el)?;
        let position = parse_number(el, "position", coords)?;

        Ok(Self {
            gene: el.require_attr("gene")?.to_string(),
            transcript: el.require_attr("transcript")?.to_string(),
            cds_effect: el.require_attr("cds-effect")?.to_string(),
            protein_effect: el.require_attr("protein-effect")?.to_string(),
            functional_effect: el.require_attr("functional-effect")?.to_string(),
            allele_fraction: parse_number(el, "allele-fraction", el.require_attr("allele-fraction")?)?,
            depth: parse_number(el, "depth", el.require_attr("depth")?)?,
            chromosome,
            position,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyNumberEntry {
    pub gene: String,
    pub copy_number: String,
    /// `amplification`, `loss`, ...
    pub alteration_type: String,
    pub status: String,
    pub ratio: String,
    pub chromosome: String,
    pub start: u64,
    pub end: u64,
}

impl CopyNumberEntry {
    fn from_element(el: &XmlElement) -> Result<Self, ReportError> {
        let (chromosome, coords) = split_position(el)?;
        let (start, end) = coords.split_once('-').ok_or_else(|| {
            ReportError::invalid(&el.name, "position", format!("'{coords}' is not a start-end span"))
        })?;

        Ok(Self {
            gene: el.require_attr("gene")?.to_string(),
            copy_number: el.require_attr("copy-number")?.to_string(),
            alteration_type: el.require_attr("type")?.to_string(),
            status: el.require_attr("status")?.to_string(),
            ratio: el.require_attr("ratio")?.to_string(),
            chromosome,
            start: parse_number(el, "position", start)?,
            end: parse_number(el, "position", end)?,
        })
    }
}

/// Split `chr12:25398284` into the chromosome and the coordinate text.
fn split_position(el: &XmlElement) -> Result<(String, &str), ReportError> {
    let raw = el.require_attr("position")?;
    let (chromosome, coords) = raw.split_once(':').ok_or_else(|| {
        ReportError::invalid(&el.name, "position", format!("'{raw}' has no chromosome prefix"))
    })?;
    Ok((chromosome.to_string(), coords))
}

fn parse_number<T: std::str::FromStr>(
    el: &XmlElement,
    field: &str,
    raw: &str,
) -> Result<T, ReportError> {
    raw.trim()
        .parse()
        .map_err(|_| ReportError::invalid(&el.name, field, format!("'{raw}' is not a number")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn block(inner: &str) -> XmlElement {
        XmlElement::parse(&format!(
            r#"<variant-report tissue-of-origin="Lung">
                 <samples><sample nucleic-acid-type="DNA"/></samples>
                 {inner}
               </variant-report>"#
        ))
        .unwrap()
    }

    #[test]
    fn parses_short_variant_coordinates() {
        let report = VariantReport::from_element(&block(
            r#"<short-variants>
                 <short-variant gene="KRAS" transcript="NM_004985" cds-effect="35G&gt;A"
                   protein-effect="G12D" functional-effect="missense" allele-fraction="0.34"
                   depth="512" position="chr12:25398284"/>
               </short-variants>"#,
        ))
        .unwrap();

        assert_eq!(report.tissue_of_origin.as_deref(), Some("Lung"));
        assert_eq!(report.nucleic_acid_type, "DNA");
        let sv = &report.short_variants[0];
        assert_eq!(sv.cds_effect, "35G>A");
        assert_eq!(sv.chromosome, "chr12");
        assert_eq!(sv.position, 25_398_284);
        assert_eq!(sv.depth, 512);
        assert!((sv.allele_fraction - 0.34).abs() < f64::EPSILON);
    }

    #[test]
    fn parses_copy_number_span() {
        let report = VariantReport::from_element(&block(
            r#"<copy-number-alterations>
                 <copy-number-alteration gene="CDKN2A" copy-number="0" type="loss"
                   status="known" ratio="0.2" position="chr9:21968178-21995301"/>
               </copy-number-alterations>"#,
        ))
        .unwrap();

        let cna = &report.copy_number_alterations[0];
        assert_eq!(cna.chromosome, "chr9");
        assert_eq!((cna.start, cna.end), (21_968_178, 21_995_301));
    }

    #[test]
    fn malformed_span_is_invalid_value() {
        let err = VariantReport::from_element(&block(
            r#"<copy-number-alteration gene="MYC" copy-number="8" type="amplification"
                 status="known" ratio="2.5" position="chr8:128748847"/>"#,
        ))
        .unwrap_err();
        assert!(matches!(
            err,
            ReportError::InvalidValue { ref section, ref field, .. }
                if section == "copy-number-alteration" && field == "position"
        ));
    }

    #[test]
    fn position_without_chromosome_is_invalid_value() {
        let err = VariantReport::from_element(&block(
            r#"<short-variant gene="KRAS" transcript="NM_004985" cds-effect="35G&gt;A"
                 protein-effect="G12D" functional-effect="missense" allele-fraction="0.34"
                 depth="512" position="25398284"/>"#,
        ))
        .unwrap_err();
        assert!(matches!(err, ReportError::InvalidValue { .. }));
    }
}
