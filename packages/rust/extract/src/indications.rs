//! Indication extraction from label text.
//!
//! Three strategies, each tried only when the previous one found nothing:
//! the `indicated for` clause, `treatment of` style phrases, and finally the
//! label's first sentence.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use pharmaprofile_shared::placeholders::INDICATION_UNAVAILABLE;

use crate::text::{after_marker_ci, clean_item, first_sentence, is_unavailable};

static ENUMERATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)\d+\.(?:\s+|$)|•\s*|\*\s*").expect("valid regex"));

static PHRASE_RES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)treatment of ([^.;:]+)").expect("valid regex"),
        Regex::new(r"(?i)management of ([^.;:]+)").expect("valid regex"),
        Regex::new(r"(?i)therapy for ([^.;:]+)").expect("valid regex"),
    ]
});

/// Extract the indication list. Never empty.
pub fn extract_indications(label_text: &str) -> Vec<String> {
    if let Some(found) = from_indicated_for(label_text) {
        debug!(count = found.len(), "indications from 'indicated for' clause");
        return found;
    }
    if let Some(found) = from_phrases(label_text) {
        debug!(count = found.len(), "indications from treatment phrases");
        return found;
    }
    if let Some(found) = from_first_sentence(label_text) {
        debug!("indication taken from first label sentence");
        return vec![found];
    }
    vec![INDICATION_UNAVAILABLE.to_string()]
}

/// The clause after `indicated for`, split on enumeration markers.
fn from_indicated_for(text: &str) -> Option<Vec<String>> {
    let rest = after_marker_ci(text, "indicated for")?;
    let clause = first_sentence(rest);
    if is_unavailable(clause) {
        return None;
    }

    let items: Vec<String> = ENUMERATION_RE
        .split(clause)
        .map(clean_item)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();

    (!items.is_empty()).then_some(items)
}

/// Every `treatment of` / `management of` / `therapy for` object, de-duplicated.
fn from_phrases(text: &str) -> Option<Vec<String>> {
    let mut items: Vec<String> = Vec::new();
    for re in PHRASE_RES.iter() {
        for caps in re.captures_iter(text) {
            let item = caps[1].trim();
            if !item.is_empty() && !items.iter().any(|i| i == item) {
                items.push(item.to_string());
            }
        }
    }
    (!items.is_empty()).then_some(items)
}

fn from_first_sentence(text: &str) -> Option<String> {
    let sentence = text.split('.').next().unwrap_or_default().trim();
    if sentence.is_empty() || is_unavailable(sentence) {
        return None;
    }
    Some(format!("Based on label: {sentence}"))
}
