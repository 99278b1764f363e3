//! Gap-filling merge of a primary bundle with a supplemental one.
//!
//! Primary data always wins. Supplemental data only fills what is absent:
//! empty slots are taken wholesale, and label clauses that carry a
//! "not available" sentinel are spliced in place.

use std::ops::Range;

use tracing::{debug, instrument};

use pharmaprofile_extract::text::find_ci;
use pharmaprofile_shared::{Document, SourceBundle};

const INDICATIONS_MARKER: &str = "indicated for:";
const MECHANISM_MARKER: &str = "Mechanism of Action:";

const INDICATION_SENTINELS: &[&str] = &["indications not available"];
const MECHANISM_SENTINELS: &[&str] = &["mechanism of action not available", "mechanism not available"];

/// Merge `supplemental` into `primary`.
///
/// `merge_bundles(x, x) == x`, and an empty bundle is an identity on either side.
#[instrument(skip_all)]
pub fn merge_bundles(primary: &SourceBundle, supplemental: &SourceBundle) -> SourceBundle {
    SourceBundle {
        fda_purple_book: merge_document(&primary.fda_purple_book, &supplemental.fda_purple_book),
        daily_med: merge_document(&primary.daily_med, &supplemental.daily_med),
        clinical_trials: merge_sequence(&primary.clinical_trials, &supplemental.clinical_trials),
        pubmed: merge_sequence(&primary.pubmed, &supplemental.pubmed),
    }
}

fn merge_sequence(primary: &[Document], supplemental: &[Document]) -> Vec<Document> {
    if primary.is_empty() {
        supplemental.to_vec()
    } else {
        primary.to_vec()
    }
}

fn merge_document(primary: &Option<Document>, supplemental: &Option<Document>) -> Option<Document> {
    match (primary, supplemental) {
        (None, supp) => supp.clone(),
        (Some(doc), None) => Some(doc.clone()),
        (Some(doc), Some(supp)) => {
            let mut merged = doc.clone();
            merged.text = splice_label_clauses(&doc.text, &supp.text);
            Some(merged)
        }
    }
}

/// Replace sentinel indication/mechanism clauses in `primary` with the
/// matching clauses from `supplemental`. Everything else stays verbatim.
pub fn splice_label_clauses(primary: &str, supplemental: &str) -> String {
    let mut text = primary.to_string();

    // Mechanism first: it sits after the indications clause, so its range
    // stays valid while the earlier clause is still untouched.
    if let Some(replacement) = fill_clause(&text, supplemental, mechanism_clause, MECHANISM_SENTINELS) {
        debug!("filling mechanism clause from supplement");
        text = replacement;
    }
    if let Some(replacement) =
        fill_clause(&text, supplemental, indications_clause, INDICATION_SENTINELS)
    {
        debug!("filling indications clause from supplement");
        text = replacement;
    }
    text
}

fn fill_clause(
    primary: &str,
    supplemental: &str,
    locate: fn(&str) -> Option<Range<usize>>,
    sentinels: &[&str],
) -> Option<String> {
    let range = locate(primary)?;
    if !is_sentinel(&primary[range.clone()], sentinels) {
        return None;
    }
    let supp_range = locate(supplemental)?;
    let replacement = supplemental[supp_range].trim();
    if replacement.is_empty() || is_sentinel(replacement, sentinels) {
        return None;
    }

    let clause = &primary[range.clone()];
    let lead = clause.len() - clause.trim_start().len();
    let trail = clause.len() - clause.trim_end().len();
    let core = range.start + lead..range.end - trail;

    let mut out = String::with_capacity(primary.len() + replacement.len());
    out.push_str(&primary[..core.start]);
    out.push_str(replacement);
    out.push_str(&primary[core.end..]);
    Some(out)
}

fn is_sentinel(clause: &str, sentinels: &[&str]) -> bool {
    sentinels.iter().any(|s| find_ci(clause, s).is_some())
}

/// Byte range between `indicated for:` and `Mechanism of Action:` (or end).
fn indications_clause(text: &str) -> Option<Range<usize>> {
    let start = find_ci(text, INDICATIONS_MARKER)? + INDICATIONS_MARKER.len();
    let end = find_ci(&text[start..], MECHANISM_MARKER).map_or(text.len(), |pos| start + pos);
    Some(start..end)
}

/// Byte range after `Mechanism of Action:` to the end of the text.
fn mechanism_clause(text: &str) -> Option<Range<usize>> {
    let start = find_ci(text, MECHANISM_MARKER)? + MECHANISM_MARKER.len();
    Some(start..text.len())
}
