//! Drug class from label wording, first match wins.

use pharmaprofile_shared::placeholders::DEFAULT_DRUG_CLASS;
use pharmaprofile_shared::{KeywordRule, first_match};

const DRUG_CLASS_RULES: &[KeywordRule] = &[
    KeywordRule::all("Atypical Antipsychotic", &["antipsychotic", "atypical"]),
    KeywordRule::any("Antipsychotic", &["antipsychotic"]),
    KeywordRule::any("Antidepressant", &["antidepressant"]),
    KeywordRule::any("Anxiolytic", &["anxiolytic"]),
    KeywordRule::any("Sedative-Hypnotic", &["hypnotic", "sedative"]),
    KeywordRule::any("Mood Stabilizer", &["mood stabilizer"]),
    KeywordRule::any("Stimulant", &["stimulant"]),
    KeywordRule::any("Anticonvulsant", &["anticonvulsant", "antiepileptic"]),
    KeywordRule::any("Antimicrobial", &["antimicrobial", "antibiotic"]),
    KeywordRule::any("Antiviral", &["antiviral"]),
    KeywordRule::any("Antifungal", &["antifungal"]),
    KeywordRule::any("Antihypertensive", &["antihypertensive"]),
    KeywordRule::any("Antineoplastic", &["antineoplastic", "anticancer"]),
    KeywordRule::any("Anti-inflammatory", &["anti-inflammatory"]),
    KeywordRule::any("Analgesic", &["analgesic", "pain"]),
    KeywordRule::any("Antihistamine", &["antihistamine"]),
    KeywordRule::any("Bronchodilator", &["bronchodilator"]),
];

/// Classify label text; `"Pharmaceutical Agent"` when nothing matches.
pub fn classify_drug_class(label_text: &str) -> String {
    first_match(DRUG_CLASS_RULES, &label_text.to_lowercase())
        .unwrap_or(DEFAULT_DRUG_CLASS)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atypical_antipsychotic_wins_over_plain() {
        assert_eq!(
            classify_drug_class("An ATYPICAL antipsychotic and antidepressant adjunct"),
            "Atypical Antipsychotic"
        );
        assert_eq!(classify_drug_class("a typical antipsychotic"), "Antipsychotic");
    }

    #[test]
    fn earlier_class_takes_precedence() {
        assert_eq!(
            classify_drug_class("An anxiolytic with sedative properties"),
            "Anxiolytic"
        );
        assert_eq!(classify_drug_class("sedative and analgesic"), "Sedative-Hypnotic");
    }

    #[test]
    fn alternates_map_to_same_class() {
        assert_eq!(classify_drug_class("an antiepileptic drug"), "Anticonvulsant");
        assert_eq!(classify_drug_class("used for neuropathic pain"), "Analgesic");
    }

    #[test]
    fn default_class() {
        assert_eq!(classify_drug_class(""), "Pharmaceutical Agent");
        assert_eq!(classify_drug_class("a novel agent"), "Pharmaceutical Agent");
    }
}
