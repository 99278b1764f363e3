//! Markdown rendering of asset profiles.
//!
//! [`render_report`] lays a profile out in a fixed section order, then runs
//! a cleanup pipeline that normalizes blank lines and trailing whitespace
//! outside fenced blocks.

mod cleanup;

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

use pharmaprofile_shared::{AssetProfile, Classifications, RelationType, Relationship};

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Render the full report for `profile`, embedding `diagram` under
/// `### Visualization`.
///
/// Never fails: empty fields are omitted and empty lists render as nothing.
#[instrument(skip_all, fields(asset = %profile.asset_name))]
pub fn render_report(profile: &AssetProfile, diagram: &str) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {} Asset Profile\n\n", inline(&profile.asset_name)));

    let ids = &profile.identifiers;
    md.push_str("## Identifiers\n\n");
    field(&mut md, "Brand Name", &ids.brand_name);
    field(&mut md, "Generic Name", &ids.generic_name);
    field(&mut md, "Approval Date", &ids.approval_date);
    field(&mut md, "Manufacturer", &ids.manufacturer);
    field(&mut md, "BLA/NDA Number", &ids.bla_nda);
    field(&mut md, "Chemical Formula", &ids.chemical_formula);
    md.push('\n');

    let status = &profile.approval_status;
    md.push_str("## Approval Status\n\n");
    field(&mut md, "Status", &status.status);
    field(&mut md, "Drug Class", &status.drug_class);
    field(&mut md, "Type", &status.approval_type);
    md.push('\n');

    md.push_str("## Indications & Usage\n\n");
    for indication in &profile.indications {
        bullet(&mut md, indication);
    }
    md.push('\n');

    md.push_str("## Mechanism of Action\n\n");
    let mechanism = inline(&profile.mechanism_of_action);
    if !mechanism.is_empty() {
        md.push_str(&format!("{mechanism}\n\n"));
    }

    md.push_str("## Clinical Evidence Summary\n\n");
    for evidence in &profile.clinical_evidence {
        md.push_str(&format!("### {}\n\n", inline(&evidence.trial_name)));
        field(&mut md, "Phase", &evidence.phase);
        field(&mut md, "Population", &evidence.population);
        field(&mut md, "Key Results", &evidence.key_results);
        field(&mut md, "Safety", &evidence.safety);
        md.push('\n');
    }

    md.push_str("## Drug Ontology\n\n### Visualization\n\n");
    fenced(&mut md, diagram);

    md.push_str("## Classification Hierarchy\n\n");
    classification_sections(&mut md, &profile.ontology.classifications);

    md.push_str("## Ontological Relationships\n\n");
    for (kind, group) in group_relationships(&profile.ontology.relationships) {
        md.push_str(&format!("### {}\n\n", kind.title()));
        for rel in group {
            md.push_str(&format!(
                "- {} → {}\n",
                inline(&rel.subject),
                inline(&rel.object)
            ));
        }
        md.push('\n');
    }

    md.push_str("## Semantic Network\n\n");
    fenced(&mut md, &profile.ontology.semantic_network);

    let cleaned = cleanup::run_pipeline(&md);
    debug!(len = cleaned.len(), "report rendered");
    cleaned
}

fn classification_sections(md: &mut String, classes: &Classifications) {
    let pharm = &classes.pharmaceutical;
    md.push_str("### Pharmaceutical Classification\n\n");
    field(md, "Class", &pharm.class);
    field(md, "Subclass", &pharm.subclass);
    field(md, "Family", &pharm.family);
    field(md, "Subfamily", &pharm.subfamily);
    field(md, "Type", &pharm.drug_type);
    field(md, "Agent", &pharm.agent);
    md.push('\n');

    let pharmacological = &classes.pharmacological;
    md.push_str("### Pharmacological Classification\n\n");
    field(md, "Primary Mechanism", &pharmacological.primary_mechanism);
    md.push_str("- **Targets:**\n");
    for t in &pharmacological.targets {
        md.push_str(&format!(
            "  - {} ({}): {}\n",
            inline(&t.receptor),
            inline(&t.family),
            inline(&t.activity)
        ));
    }
    md.push('\n');

    md.push_str("### Therapeutic Classification\n\n");
    for area in &classes.therapeutic {
        md.push_str(&format!("- **{}:**\n", inline(&area.area)));
        for indication in &area.indications {
            md.push_str(&format!("  - {}\n", inline(indication)));
        }
    }
    md.push('\n');

    let chem = &classes.chemical;
    md.push_str("### Chemical Classification\n\n");
    field(md, "Structure Type", &chem.structure_type);
    field(md, "Chemical Class", &chem.chemical_class);
    field(md, "Formula", &chem.formula);
    md.push_str("- **Related Compounds:**\n");
    for c in &chem.related_compounds {
        md.push_str(&format!(
            "  - {} ({})\n",
            inline(&c.name),
            inline(&c.relation_type)
        ));
    }
    md.push('\n');
}

/// Group relationships by type, in order of first appearance.
pub fn group_relationships(rels: &[Relationship]) -> Vec<(RelationType, Vec<&Relationship>)> {
    let mut groups: Vec<(RelationType, Vec<&Relationship>)> = Vec::new();
    for rel in rels {
        match groups.iter_mut().find(|(kind, _)| *kind == rel.kind) {
            Some((_, group)) => group.push(rel),
            None => groups.push((rel.kind, vec![rel])),
        }
    }
    groups
}

// ---------------------------------------------------------------------------
// Inline helpers
// ---------------------------------------------------------------------------

/// Collapse whitespace so a value stays on one line, and escape a leading
/// character that would otherwise open a block.
fn inline(value: &str) -> String {
    static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
    static ORDERED_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^(\d{1,9})([.)])( |$)").expect("valid regex"));

    let collapsed = WS_RE.replace_all(value.trim(), " ");
    if let Some(caps) = ORDERED_RE.captures(&collapsed) {
        return format!("{}\\{}{}", &caps[1], &caps[2], &collapsed[caps[1].len() + 1..]);
    }
    match collapsed.chars().next() {
        Some(c @ ('#' | '>' | '-' | '+' | '*' | '=' | '|' | '`' | '~' | '<')) => {
            format!("\\{c}{}", &collapsed[1..])
        }
        _ => collapsed.into_owned(),
    }
}

/// `- **Label:** value`, skipped when the value is empty.
fn field(md: &mut String, label: &str, value: &str) {
    let value = inline(value);
    if !value.is_empty() {
        md.push_str(&format!("- **{label}:** {value}\n"));
    }
}

fn bullet(md: &mut String, value: &str) {
    let value = inline(value);
    if !value.is_empty() {
        md.push_str(&format!("- {value}\n"));
    }
}

/// Fenced block whose fence outruns any backtick run in `body`.
fn fenced(md: &mut String, body: &str) {
    let longest = body
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest.max(2) + 1);
    md.push_str(&format!("{fence}\n{}\n{fence}\n\n", body.trim_end_matches('\n')));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pharmaprofile_shared::{ClinicalEvidence, Target, TherapeuticArea};

    fn profile() -> AssetProfile {
        let mut p = AssetProfile {
            asset_name: "brexpiprazole".into(),
            indications: vec!["Schizophrenia".into(), "Major depression".into()],
            mechanism_of_action: "Partial agonist at D2.".into(),
            clinical_evidence: vec![
                ClinicalEvidence {
                    trial_name: "Study NCT1".into(),
                    phase: "Phase 3".into(),
                    ..ClinicalEvidence::default()
                },
                ClinicalEvidence {
                    trial_name: "Study NCT2".into(),
                    safety: "Nausea".into(),
                    ..ClinicalEvidence::default()
                },
            ],
            ..AssetProfile::default()
        };
        p.identifiers.brand_name = "REXULTI".into();
        p.ontology.classifications.pharmacological.targets = vec![Target {
            receptor: "D2".into(),
            family: "Dopamine Receptors".into(),
            activity: "Partial agonist".into(),
        }];
        p.ontology.classifications.therapeutic = vec![TherapeuticArea {
            area: "Psychiatric Disorders".into(),
            indications: vec!["Schizophrenia".into()],
        }];
        p.ontology.relationships = vec![
            Relationship::new(RelationType::IsA, "brexpiprazole", "Atypical Antipsychotic"),
            Relationship::new(RelationType::Treats, "brexpiprazole", "Schizophrenia"),
            Relationship::new(RelationType::RegulatedBy, "brexpiprazole", "FDA"),
            Relationship::new(RelationType::Treats, "brexpiprazole", "Major depression"),
        ];
        p.ontology.semantic_network = "[brexpiprazole]───[regulated_by]→[FDA]".into();
        p
    }

    fn count_lines(md: &str, prefix: &str) -> usize {
        md.lines().filter(|l| l.starts_with(prefix)).count()
    }

    #[test]
    fn sections_in_order() {
        let md = render_report(&profile(), "DIAGRAM");
        let order = [
            "# brexpiprazole Asset Profile",
            "## Identifiers",
            "## Approval Status",
            "## Indications & Usage",
            "## Mechanism of Action",
            "## Clinical Evidence Summary",
            "## Drug Ontology",
            "### Visualization",
            "## Classification Hierarchy",
            "### Pharmaceutical Classification",
            "### Pharmacological Classification",
            "### Therapeutic Classification",
            "### Chemical Classification",
            "## Ontological Relationships",
            "## Semantic Network",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|h| md.find(&format!("{h}\n")).unwrap_or_else(|| panic!("missing {h}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn one_block_per_trial_and_relation_type() {
        let md = render_report(&profile(), "DIAGRAM");
        assert!(md.contains("### Study NCT1\n"));
        assert!(md.contains("### Study NCT2\n"));
        // Is A, Treats, Regulated By
        assert!(md.contains("### Is A\n\n- brexpiprazole → Atypical Antipsychotic\n"));
        assert!(md.contains(
            "### Treats\n\n- brexpiprazole → Schizophrenia\n- brexpiprazole → Major depression\n"
        ));
        assert_eq!(count_lines(&md, "### "), 2 + 1 + 4 + 3);
    }

    #[test]
    fn empty_fields_are_omitted() {
        let md = render_report(&profile(), "");
        assert!(md.contains("- **Brand Name:** REXULTI\n"));
        assert!(!md.contains("**Generic Name:**"));
        assert!(!md.contains("**Population:**"));
        assert!(md.contains("- **Safety:** Nausea\n"));
    }

    #[test]
    fn diagram_and_network_fenced_verbatim() {
        let diagram = "  +---+  \n  | x |  ";
        let md = render_report(&profile(), diagram);
        assert!(md.contains("```\n  +---+  \n  | x |  \n```\n"));
        assert!(md.contains("```\n[brexpiprazole]───[regulated_by]→[FDA]\n```\n"));
    }

    #[test]
    fn multiline_values_cannot_open_blocks() {
        let mut p = profile();
        p.mechanism_of_action = "Line one\n\n# Injected heading\n- item".into();
        p.indications = vec!["# heading-like".into()];
        let md = render_report(&p, "");
        assert!(md.contains("Line one # Injected heading - item\n"));
        assert!(md.contains("- \\# heading-like\n"));
        assert_eq!(count_lines(&md, "# "), 1);
    }

    #[test]
    fn fence_and_html_openers_are_escaped() {
        for (raw, escaped) in [
            ("~~~ binds D2.", "\\~~~ binds D2."),
            ("``` binds D2.", "\\``` binds D2."),
            ("<div>binds D2</div>", "\\<div>binds D2</div>"),
        ] {
            let mut p = profile();
            p.mechanism_of_action = raw.into();
            let md = render_report(&p, "");
            assert!(md.contains(&format!("## Mechanism of Action\n\n{escaped}\n")), "{raw}");
        }
    }

    #[test]
    fn ordered_list_markers_are_escaped() {
        let mut p = profile();
        p.indications = vec!["1. Schizophrenia".into(), "2) Bipolar I".into(), "3.5 mg dose".into()];
        let md = render_report(&p, "");
        assert!(md.contains("- 1\\. Schizophrenia\n"));
        assert!(md.contains("- 2\\) Bipolar I\n"));
        assert!(md.contains("- 3.5 mg dose\n"));
    }

    #[test]
    fn output_is_clean() {
        let md = render_report(&AssetProfile::default(), "");
        assert!(md.ends_with('\n'));
        assert!(!md.ends_with("\n\n"));
        assert!(!md.contains("\n\n\n"));
        assert!(md.lines().all(|l| l == l.trim_end()));
    }

    #[test]
    fn backticks_in_diagram_extend_fence() {
        let md = render_report(&profile(), "a ``` b");
        assert!(md.contains("````\na ``` b\n````\n"));
    }

    #[test]
    fn grouping_keeps_first_appearance_order() {
        let p = profile();
        let groups = group_relationships(&p.ontology.relationships);
        let kinds: Vec<RelationType> = groups.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            kinds,
            [RelationType::IsA, RelationType::Treats, RelationType::RegulatedBy]
        );
        assert_eq!(groups[1].1.len(), 2);
    }
}
