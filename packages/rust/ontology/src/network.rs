//! Fixed-layout semantic network tree.
//!
//! ```text
//! [drug]─┬─[is_a]→[Atypical Antipsychotic]
//!        ├─[acts_on]→[Dopamine D2 Receptor]
//!        ├─[treats]→[Schizophrenia]
//!        └─[regulated_by]→[FDA]
//! ```

use pharmaprofile_shared::{AssetProfile, all_matches};

use crate::tables::{MAX_NETWORK_INDICATIONS, MAX_NETWORK_TARGETS, NETWORK_TARGETS};

/// Render the network for a profile. The result has no trailing newline.
pub fn build_semantic_network(profile: &AssetProfile) -> String {
    render_tree(&format!("[{}]", profile.asset_name), &branches(profile))
}

/// Branch labels in layout order. Never empty: the terminal branch is always present.
fn branches(profile: &AssetProfile) -> Vec<String> {
    let mut out = Vec::new();

    let drug_class = profile.approval_status.drug_class.trim();
    if !drug_class.is_empty() {
        out.push(edge("is_a", drug_class));
    }

    let mechanism = profile.known_mechanism().to_lowercase();
    let targets: Vec<String> = all_matches(NETWORK_TARGETS, &mechanism)
        .take(MAX_NETWORK_TARGETS)
        .map(|receptor| edge("acts_on", receptor))
        .collect();
    if targets.is_empty() {
        out.push(edge("has_mechanism", "Pharmacological Action"));
    } else {
        out.extend(targets);
    }

    out.extend(
        profile
            .known_indications()
            .take(MAX_NETWORK_INDICATIONS)
            .map(|indication| edge("treats", strip_parenthetical(indication))),
    );

    if profile.metabolism.is_empty() {
        out.push(edge("regulated_by", "FDA"));
    } else {
        out.extend(
            profile
                .metabolism
                .iter()
                .map(|enzyme| edge("metabolized_by", enzyme)),
        );
    }

    out
}

fn edge(predicate: &str, object: &str) -> String {
    format!("[{predicate}]→[{object}]")
}

/// Text before the first `(`, trimmed.
pub(crate) fn strip_parenthetical(text: &str) -> &str {
    text.split('(').next().unwrap_or_default().trim()
}

/// Lay branches out under `root`, aligning continuations with the `┬` column.
fn render_tree(root: &str, branches: &[String]) -> String {
    let Some((first, rest)) = branches.split_first() else {
        return root.to_string();
    };
    if rest.is_empty() {
        return format!("{root}───{first}");
    }

    let indent = " ".repeat(root.chars().count() + 1);
    let mut lines = vec![format!("{root}─┬─{first}")];
    let last = rest.len() - 1;
    for (i, branch) in rest.iter().enumerate() {
        let glyph = if i == last { "└─" } else { "├─" };
        lines.push(format!("{indent}{glyph}{branch}"));
    }
    lines.join("\n")
}
