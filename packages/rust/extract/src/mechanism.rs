//! Mechanism of action and metabolism facts.

use tracing::debug;

use pharmaprofile_shared::Document;
use pharmaprofile_shared::placeholders::MECHANISM_UNAVAILABLE;

use crate::text::{after_marker_ci, first_sentence, is_unavailable};

const MECHANISM_MARKER: &str = "mechanism of action:";

const MECHANISM_TERMS: &[&str] = &[
    "mechanism",
    "pharmacology",
    "receptor",
    "binding",
    "agonist",
    "antagonist",
];

/// Mechanism from the label marker, else from literature sentences.
pub fn extract_mechanism(label_text: &str, literature: &[Document]) -> String {
    from_label(label_text)
        .or_else(|| from_literature(literature))
        .unwrap_or_else(|| MECHANISM_UNAVAILABLE.to_string())
}

/// First sentence after `Mechanism of Action:`, period re-appended.
fn from_label(text: &str) -> Option<String> {
    let rest = after_marker_ci(text, MECHANISM_MARKER)?;
    let sentence = first_sentence(rest).trim();
    if sentence.is_empty() || is_unavailable(sentence) {
        return None;
    }
    Some(format!("{sentence}."))
}

/// Matching sentences of the first article that has any.
fn from_literature(literature: &[Document]) -> Option<String> {
    literature.iter().find_map(|doc| {
        let sentences: Vec<&str> = doc
            .text
            .split('.')
            .map(str::trim)
            .filter(|s| !s.is_empty() && mentions_any(s, MECHANISM_TERMS))
            .collect();

        if sentences.is_empty() {
            return None;
        }
        debug!(pmid = ?doc.pmid, sentences = sentences.len(), "mechanism from literature");
        Some(format!("{}.", sentences.join(". ")))
    })
}

/// Metabolizing enzymes named by the first article that discusses metabolism.
///
/// Returns `CYP3A4` before `CYP2D6`; empty when no article names either.
pub fn extract_metabolism(literature: &[Document]) -> Vec<String> {
    literature
        .iter()
        .find_map(|doc| {
            let lowered = doc.text.to_lowercase();
            if !(lowered.contains("metabolized") || lowered.contains("cyp")) {
                return None;
            }
            let enzymes: Vec<String> = [("3a4", "CYP3A4"), ("2d6", "CYP2D6")]
                .into_iter()
                .filter(|(needle, _)| lowered.contains(needle))
                .map(|(_, name)| name.to_string())
                .collect();
            (!enzymes.is_empty()).then_some(enzymes)
        })
        .unwrap_or_default()
}

fn mentions_any(text: &str, terms: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    terms.iter().any(|t| lowered.contains(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(text: &str) -> Document {
        Document::new("PubMed", text)
    }

    #[test]
    fn label_marker_first_sentence() {
        let text = "X is indicated for y. Mechanism of Action: A D2 partial agonist. Second sentence.";
        assert_eq!(extract_mechanism(text, &[]), "A D2 partial agonist.");
    }

    #[test]
    fn label_marker_keeps_decimal_affinities() {
        let text = "Mechanism of Action: Binds D2 with Ki 0.3 nM. More.";
        assert_eq!(extract_mechanism(text, &[]), "Binds D2 with Ki 0.3 nM.");
    }

    #[test]
    fn sentence_ending_in_number_stops_at_its_period() {
        let text = "Mechanism of Action: Binds 5-HT1A with Ki of 1. \
            Other unrelated sentence about 5-HT2A antagonist.";
        assert_eq!(extract_mechanism(text, &[]), "Binds 5-HT1A with Ki of 1.");
    }

    #[test]
    fn sentinel_falls_through_to_literature() {
        let text = "Mechanism of Action: Mechanism of action not available.";
        let lit = [
            article("Unrelated abstract. Nothing here."),
            article("Drug X is studied. It is a 5-HT1A receptor agonist. Binding is strong. Done."),
        ];
        assert_eq!(
            extract_mechanism(text, &lit),
            "It is a 5-HT1A receptor agonist. Binding is strong."
        );
    }

    #[test]
    fn nothing_found_yields_placeholder() {
        assert_eq!(extract_mechanism("", &[]), MECHANISM_UNAVAILABLE);
        assert_eq!(
            extract_mechanism("Plain label.", &[article("No relevant terms.")]),
            MECHANISM_UNAVAILABLE
        );
    }

    #[test]
    fn metabolism_both_enzymes() {
        let lit = [article("It is metabolized by CYP2D6 and CYP3A4.")];
        assert_eq!(extract_metabolism(&lit), vec!["CYP3A4", "CYP2D6"]);
    }

    #[test]
    fn metabolism_single_enzyme() {
        let lit = [article("Primarily metabolized via 2D6.")];
        assert_eq!(extract_metabolism(&lit), vec!["CYP2D6"]);
    }

    #[test]
    fn metabolism_skips_articles_without_enzymes() {
        let lit = [
            article("Extensively metabolized in the liver."),
            article("CYP3A4 inhibitors raise exposure."),
        ];
        assert_eq!(extract_metabolism(&lit), vec!["CYP3A4"]);
    }

    #[test]
    fn metabolism_requires_metabolism_context() {
        let lit = [article("Trial 3A4 enrolled adults.")];
        assert!(extract_metabolism(&lit).is_empty());
    }
}
