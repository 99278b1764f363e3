//! Per-trial facts: name, phase, population, results, safety.

use std::sync::LazyLock;

use regex::Regex;

use pharmaprofile_shared::placeholders::{RESULTS_UNAVAILABLE, SAFETY_UNAVAILABLE, UNKNOWN};
use pharmaprofile_shared::{ClinicalEvidence, Document};

use crate::text::find_ci;

static PHASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)phase (\d+)").expect("valid regex"));

static POPULATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bin\s+([^.]+)").expect("valid regex"));

static RESULTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Results: ([^.]+)").expect("valid regex"));

static SAFETY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Safety: ([^.]+)").expect("valid regex"));

/// Scanned in order when no explicit `Safety:` label exists.
const ADVERSE_TERMS: &[&str] = &["adverse", "reaction", "side effect", "tolerability"];

/// Summaries for every trial document; one placeholder entry when there are none.
pub fn extract_clinical_evidence(trials: &[Document]) -> Vec<ClinicalEvidence> {
    if trials.is_empty() {
        return vec![ClinicalEvidence::placeholder()];
    }
    trials
        .iter()
        .enumerate()
        .map(|(i, doc)| extract_trial(doc, i))
        .collect()
}

/// Summarize one trial document. `index` numbers anonymous trials from 1.
pub fn extract_trial(doc: &Document, index: usize) -> ClinicalEvidence {
    let text = doc.text.as_str();
    let trial_id = doc
        .trial_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .or_else(|| doc.meta("trial_id"))
        .map(str::to_string)
        .unwrap_or_else(|| format!("Unknown-{}", index + 1));

    ClinicalEvidence {
        trial_name: format!("Study {trial_id}"),
        phase: phase(text).unwrap_or_else(|| UNKNOWN.to_string()),
        population: population(text).unwrap_or_else(|| UNKNOWN.to_string()),
        key_results: capture(&RESULTS_RE, text).unwrap_or_else(|| RESULTS_UNAVAILABLE.to_string()),
        safety: capture(&SAFETY_RE, text)
            .or_else(|| adverse_clause(text))
            .unwrap_or_else(|| SAFETY_UNAVAILABLE.to_string()),
    }
}

fn phase(text: &str) -> Option<String> {
    PHASE_RE
        .captures(text)
        .map(|caps| format!("Phase {}", &caps[1]))
}

/// The clause after the first standalone `in`, for texts describing a study.
fn population(text: &str) -> Option<String> {
    if find_ci(text, "study").is_none() {
        return None;
    }
    capture(&POPULATION_RE, text)
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Quote whatever follows the first adverse-event term, up to the period.
fn adverse_clause(text: &str) -> Option<String> {
    ADVERSE_TERMS.iter().find_map(|term| {
        let pos = find_ci(text, term)?;
        let clause = text[pos + term.len()..]
            .split('.')
            .next()
            .unwrap_or_default()
            .trim();
        (!clause.is_empty()).then(|| format!("Adverse effects may include: {clause}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharmaprofile_shared::placeholders::{NO_TRIAL_INFORMATION, NO_SAFETY_DATA};

    #[test]
    fn full_trial_text() {
        let doc = Document::new(
            "ClinicalTrials.gov",
            "Phase 3 study of drug X in adults with schizophrenia. \
             Results: PANSS improved versus placebo. Safety: Akathisia and weight gain.",
        )
        .with_trial_id("NCT01396421");

        let ev = extract_trial(&doc, 0);
        assert_eq!(ev.trial_name, "Study NCT01396421");
        assert_eq!(ev.phase, "Phase 3");
        assert_eq!(ev.population, "adults with schizophrenia");
        assert_eq!(ev.key_results, "PANSS improved versus placebo");
        assert_eq!(ev.safety, "Akathisia and weight gain");
    }

    #[test]
    fn missing_markers_use_fallbacks() {
        let doc = Document::new("CT", "An open-label extension.");
        let ev = extract_trial(&doc, 1);
        assert_eq!(ev.trial_name, "Study Unknown-2");
        assert_eq!(ev.phase, "Unknown");
        assert_eq!(ev.population, "Unknown");
        assert_eq!(ev.key_results, "Results not available");
        assert_eq!(ev.safety, "Safety information not available");
    }

    #[test]
    fn population_requires_study_mention() {
        let doc = Document::new("CT", "Enrolled in 2019 across sites.");
        assert_eq!(extract_trial(&doc, 0).population, "Unknown");
    }

    #[test]
    fn population_ignores_in_inside_words() {
        let doc = Document::new("CT", "A maintenance study in elderly patients.");
        assert_eq!(extract_trial(&doc, 0).population, "elderly patients");
    }

    #[test]
    fn safety_falls_back_to_adverse_terms() {
        let doc = Document::new("CT", "Well tolerated; adverse reactions included nausea. End.");
        assert_eq!(
            extract_trial(&doc, 0).safety,
            "Adverse effects may include: reactions included nausea"
        );
    }

    #[test]
    fn trial_id_from_metadata() {
        let doc = Document::new("CT", "Phase 2").with_meta("trial_id", "NCT999");
        assert_eq!(extract_trial(&doc, 0).trial_name, "Study NCT999");
    }

    #[test]
    fn no_trials_yields_placeholder_entry() {
        let evidence = extract_clinical_evidence(&[]);
        assert_eq!(evidence.len(), 1);
        assert_eq!(evidence[0].trial_name, NO_TRIAL_INFORMATION);
        assert_eq!(evidence[0].safety, NO_SAFETY_DATA);
    }
}
