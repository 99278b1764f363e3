//! Marker and sentence helpers shared by the extractors and the merger.
//!
//! All markers are ASCII, so byte offsets returned here always fall on
//! char boundaries of the searched text.

/// Case-insensitive substring search for an ASCII needle.
pub fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    let (h, n) = (haystack.as_bytes(), needle.as_bytes());
    if n.is_empty() {
        return Some(0);
    }
    if n.len() > h.len() {
        return None;
    }
    (0..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

/// Text following the first case-insensitive occurrence of `marker`.
pub fn after_marker_ci<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    find_ci(text, marker).map(|pos| &text[pos + marker.len()..])
}

/// Text following `marker` up to the next period, trimmed.
///
/// Mirrors splitting a templated sentence on its literal label.
pub fn marker_value(text: &str, marker: &str) -> Option<String> {
    let (_, rest) = text.split_once(marker)?;
    let value = rest.split('.').next().unwrap_or_default().trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Byte offset of the first period that ends a sentence.
///
/// `N.` is an enumeration marker only while it continues a list: `1.` must
/// open the clause (or follow a colon) and each later marker must be the next
/// index. A period followed by anything but whitespace (`0.5`) is never a
/// boundary.
pub fn sentence_end(text: &str) -> Option<usize> {
    let mut next_index: Option<u64> = None;
    for (i, ch) in text.char_indices() {
        if ch != '.' {
            continue;
        }
        let at_break = text[i + 1..].chars().next().is_none_or(char::is_whitespace);
        if !at_break {
            continue;
        }
        let token = text[..i].rsplit(char::is_whitespace).next().unwrap_or_default();
        let index = (!token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
            .then(|| token.parse::<u64>().ok())
            .flatten();
        let continues_list = match (index, next_index) {
            (Some(n), Some(expected)) => n == expected,
            (Some(1), None) => opens_clause(&text[..i - token.len()]),
            _ => false,
        };
        if !continues_list {
            return Some(i);
        }
        next_index = index.map(|n| n + 1);
    }
    None
}

fn opens_clause(before: &str) -> bool {
    let before = before.trim_end();
    before.is_empty() || before.ends_with(':')
}

/// Text up to the first sentence boundary (or the whole text).
pub fn first_sentence(text: &str) -> &str {
    &text[..sentence_end(text).unwrap_or(text.len())]
}

/// True for upstream sentinels such as "Indications not available."
pub fn is_unavailable(clause: &str) -> bool {
    find_ci(clause, "not available").is_some()
}

/// Strip an enumeration or list remnant down to its content.
pub fn clean_item(item: &str) -> &str {
    item.trim()
        .trim_matches(|c: char| matches!(c, ',' | ';' | ':'))
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_ci_ignores_ascii_case() {
        assert_eq!(find_ci("The Mechanism of Action:", "mechanism of action:"), Some(4));
        assert_eq!(find_ci("abc", "abcd"), None);
        assert_eq!(find_ci("μ-opioid Indicated For x", "indicated for"), Some(10));
    }

    #[test]
    fn marker_value_stops_at_period() {
        let text = "X. Manufacturer: Acme Corp. BLA/NDA Number: 1.";
        assert_eq!(marker_value(text, "Manufacturer:").as_deref(), Some("Acme Corp"));
        assert_eq!(marker_value(text, "Missing:"), None);
    }

    #[test]
    fn marker_value_rejects_blank() {
        assert_eq!(marker_value("Manufacturer: . next", "Manufacturer:"), None);
    }

    #[test]
    fn sentence_end_skips_enumeration_and_decimals() {
        let text = "1. Adults with 0.5 mg doses 2. Children. Next";
        let end = sentence_end(text).expect("boundary");
        assert_eq!(&text[..end], "1. Adults with 0.5 mg doses 2. Children");
    }

    #[test]
    fn trailing_number_ends_sentence() {
        let text = "schizophrenia in adults since 2015. Mechanism of Action: x.";
        assert_eq!(first_sentence(text), "schizophrenia in adults since 2015");
        assert_eq!(first_sentence(" Binds 5-HT1A with Ki of 1. Other."), " Binds 5-HT1A with Ki of 1");
    }

    #[test]
    fn out_of_sequence_marker_ends_list() {
        assert_eq!(first_sentence(": 1. Gout 2. Pain 4. Next"), ": 1. Gout 2. Pain 4");
        assert_eq!(first_sentence("3. Gout. Next"), "3");
    }

    #[test]
    fn sentence_end_at_text_end() {
        assert_eq!(sentence_end("Done."), Some(4));
        assert_eq!(sentence_end("no period"), None);
    }

    #[test]
    fn first_sentence_without_period_is_whole_text() {
        assert_eq!(first_sentence("only clause"), "only clause");
    }

    #[test]
    fn unavailable_sentinels() {
        assert!(is_unavailable("Indications not available"));
        assert!(is_unavailable("Mechanism of action NOT AVAILABLE."));
        assert!(!is_unavailable("Treatment of schizophrenia"));
    }

    #[test]
    fn clean_item_strips_separators() {
        assert_eq!(clean_item(" : schizophrenia; "), "schizophrenia");
    }
}
