//! Regulatory facts from the templated filing sentence.
//!
//! ```text
//! <BRAND> - New Molecular Entity. Approved by FDA on <date>. Manufacturer: <mfr>.
//! BLA/NDA Number: <id>. Current Regulatory Status: <status>.
//! ```

use pharmaprofile_shared::placeholders::{NOT_AVAILABLE, UNKNOWN};
use pharmaprofile_shared::{Identifiers, SourceBundle};

use crate::text::marker_value;

const APPROVAL_MARKER: &str = "Approved by FDA on";
const MANUFACTURER_MARKER: &str = "Manufacturer:";
const BLA_NDA_MARKER: &str = "BLA/NDA Number:";
const STATUS_MARKER: &str = "Current Regulatory Status:";
const NME_MARKER: &str = "New Molecular Entity";

/// Facts parsed out of the regulatory filing text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegulatoryFacts {
    pub approval_date: String,
    pub manufacturer: String,
    pub bla_nda: String,
    pub status: String,
    pub approval_type: String,
}

/// Split the filing sentence on its literal markers. Missing facts become `"Unknown"`.
pub fn extract_regulatory(text: &str) -> RegulatoryFacts {
    let field = |marker: &str| marker_value(text, marker).unwrap_or_else(|| UNKNOWN.to_string());

    RegulatoryFacts {
        approval_date: field(APPROVAL_MARKER),
        manufacturer: field(MANUFACTURER_MARKER),
        bla_nda: field(BLA_NDA_MARKER),
        status: field(STATUS_MARKER),
        approval_type: if text.contains(NME_MARKER) {
            NME_MARKER.to_string()
        } else {
            "Approved Drug".to_string()
        },
    }
}

/// Assemble the identifier block for an asset.
///
/// Brand and formula come from document metadata (filing first, then label);
/// the brand falls back to the upper-cased asset name.
pub fn extract_identifiers(
    asset_name: &str,
    bundle: &SourceBundle,
    facts: &RegulatoryFacts,
) -> Identifiers {
    let meta = |key: &str| {
        [&bundle.fda_purple_book, &bundle.daily_med]
            .into_iter()
            .flatten()
            .find_map(|doc| doc.meta(key))
            .map(str::to_string)
    };

    Identifiers {
        brand_name: meta("brand_name").unwrap_or_else(|| asset_name.to_uppercase()),
        generic_name: asset_name.to_lowercase(),
        approval_date: facts.approval_date.clone(),
        manufacturer: facts.manufacturer.clone(),
        bla_nda: facts.bla_nda.clone(),
        chemical_formula: meta("chemical_formula").unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharmaprofile_shared::Document;

    const TESTDRUGX: &str = "TESTDRUGX - New Molecular Entity. Approved by FDA on 2020-01-01. \
        Manufacturer: Acme. BLA/NDA Number: 123456. Current Regulatory Status: Approved.";

    #[test]
    fn templated_sentence_parses() {
        let facts = extract_regulatory(TESTDRUGX);
        assert_eq!(facts.approval_date, "2020-01-01");
        assert_eq!(facts.manufacturer, "Acme");
        assert_eq!(facts.bla_nda, "123456");
        assert_eq!(facts.status, "Approved");
        assert_eq!(facts.approval_type, "New Molecular Entity");
    }

    #[test]
    fn empty_text_yields_unknowns() {
        let facts = extract_regulatory("");
        assert_eq!(facts.approval_date, "Unknown");
        assert_eq!(facts.manufacturer, "Unknown");
        assert_eq!(facts.bla_nda, "Unknown");
        assert_eq!(facts.status, "Unknown");
        assert_eq!(facts.approval_type, "Approved Drug");
    }

    #[test]
    fn partial_sentence_keeps_found_markers() {
        let facts = extract_regulatory("Manufacturer: Globex Ltd");
        assert_eq!(facts.manufacturer, "Globex Ltd");
        assert_eq!(facts.approval_date, "Unknown");
    }

    #[test]
    fn identifiers_use_metadata_then_fallbacks() {
        let bundle = SourceBundle {
            fda_purple_book: Some(Document::new("FDA", TESTDRUGX).with_meta("brand_name", "TDX")),
            ..SourceBundle::default()
        };
        let facts = extract_regulatory(TESTDRUGX);
        let ids = extract_identifiers("TestDrugX", &bundle, &facts);
        assert_eq!(ids.brand_name, "TDX");
        assert_eq!(ids.generic_name, "testdrugx");
        assert_eq!(ids.chemical_formula, "Not Available");
        assert_eq!(ids.manufacturer, "Acme");
    }

    #[test]
    fn brand_defaults_to_uppercase_asset() {
        let ids = extract_identifiers("zuranolone", &SourceBundle::default(), &extract_regulatory(""));
        assert_eq!(ids.brand_name, "ZURANOLONE");
    }
}
