//! Boxed overview diagram of an ontology.

use pharmaprofile_shared::{OntologyGraph, RelationType};

use crate::network::strip_parenthetical;

const BOX_INNER: usize = 19;
const PLAIN_CELL: usize = BOX_INNER - 2;
const BULLET_CELL: usize = BOX_INNER - 4;
const GAP: &str = "   ";
/// Columns of the three box centers.
const CENTERS: [usize; 3] = [10, 34, 58];
const ROWS: usize = 3;

/// Render the six-box overview for `drug_name`.
///
/// `metabolism` lists the metabolizing enzymes; the box falls back to a
/// generic label when it is empty. Cells are truncated and padded by character, so multi-byte text keeps
/// the box edges aligned.
pub fn visualize_ontology(drug_name: &str, graph: &OntologyGraph, metabolism: &[String]) -> String {
    let classes = &graph.classifications;

    let indications: Vec<String> = classes
        .therapeutic
        .iter()
        .flat_map(|area| area.indications.iter())
        .map(|i| strip_parenthetical(i).to_string())
        .take(ROWS)
        .collect();

    let targets: Vec<String> = classes
        .pharmacological
        .targets
        .iter()
        .take(ROWS)
        .map(|t| {
            let act: String = t.activity.chars().take(3).collect();
            format!("{} ({act})", t.receptor)
        })
        .collect();

    let side_effects: Vec<String> = graph
        .relationships
        .iter()
        .filter(|r| r.kind == RelationType::HasAdverseEffect)
        .map(|r| r.object.clone())
        .take(ROWS)
        .collect();

    let enzymes: Vec<String> = metabolism.iter().take(ROWS).cloned().collect();

    let structure = non_empty(&classes.chemical.structure_type);
    let family = non_empty(&classes.pharmaceutical.family);

    let mut lines = Vec::new();
    let header = format!("+------{drug_name}------+");
    let offset = CENTERS[1].saturating_sub(header.chars().count() / 2);
    lines.push(format!("{}{header}", " ".repeat(offset)));
    lines.push(connectors(&[CENTERS[1]]));
    lines.push(rail());
    lines.push(connectors(&CENTERS));

    // Upper row
    lines.push(row([edge('v'), edge('v'), edge('v')]));
    lines.push(row([title("Drug Class"), title("Indications"), title("Mechanism")]));
    for i in 0..ROWS {
        let first = if i == 0 { plain(family) } else { blank() };
        lines.push(row([first, bullet(&indications, i), bullet(&targets, i)]));
    }
    lines.push(row([edge('+'), edge('+'), edge('+')]));
    lines.push(connectors(&CENTERS));

    // Lower row
    lines.push(row([edge('v'), edge('v'), edge('v')]));
    lines.push(row([
        title("Chemical Family"),
        title("Side Effects"),
        title("Metabolism"),
    ]));
    lines.push(row([
        plain(structure),
        bullet_or(&side_effects, 0, "Various"),
        bullet_or(&enzymes, 0, "CYP Enzymes"),
    ]));
    for i in 1..ROWS {
        lines.push(row([blank(), bullet(&side_effects, i), bullet(&enzymes, i)]));
    }
    lines.push(row([edge('-'), edge('-'), edge('-')]));

    lines.join("\n")
}

fn non_empty(value: &str) -> &str {
    match value.trim() {
        "" => "N/A",
        v => v,
    }
}

fn fit(text: &str, width: usize) -> String {
    let cut: String = text.chars().take(width).collect();
    format!("{cut:<width$}")
}

fn title(label: &str) -> String {
    let width = BOX_INNER;
    format!("|{label:^width$}|")
}

fn plain(text: &str) -> String {
    format!("| {} |", fit(text, PLAIN_CELL))
}

fn blank() -> String {
    format!("|{}|", " ".repeat(BOX_INNER))
}

/// Bullet row `index`; the first row shows `N/A` for an empty list.
fn bullet(items: &[String], index: usize) -> String {
    bullet_or(items, index, "N/A")
}

fn bullet_or(items: &[String], index: usize, fallback: &str) -> String {
    match items.get(index) {
        Some(item) => format!("| • {} |", fit(item, BULLET_CELL)),
        None if index == 0 => format!("| • {} |", fit(fallback, BULLET_CELL)),
        None => blank(),
    }
}

/// Box top or bottom edge with `mid` at the center column.
fn edge(mid: char) -> String {
    let half = "-".repeat(BOX_INNER / 2);
    format!("+{half}{mid}{half}+")
}

fn row(cells: [String; 3]) -> String {
    cells.join(GAP)
}

/// The horizontal rail joining the three box centers.
fn rail() -> String {
    let mut line = " ".repeat(CENTERS[0]);
    line.push('+');
    for pair in CENTERS.windows(2) {
        line.push_str(&"-".repeat(pair[1] - pair[0] - 1));
        line.push('+');
    }
    line
}

fn connectors(columns: &[usize]) -> String {
    let mut line = String::new();
    for &col in columns {
        line.push_str(&" ".repeat(col - line.chars().count()));
        line.push('|');
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharmaprofile_shared::{Relationship, Target, TherapeuticArea};

    fn graph() -> OntologyGraph {
        let mut g = OntologyGraph::default();
        g.classifications.pharmaceutical.family = "Antipsychotics".into();
        g.classifications.chemical.structure_type = "Quinolinone Derivative".into();
        g.classifications.therapeutic = vec![
            TherapeuticArea {
                area: "Psychiatric Disorders".into(),
                indications: vec!["Schizophrenia".into(), "Major depressive disorder (MDD)".into()],
            },
            TherapeuticArea {
                area: "Neurological Disorders".into(),
                indications: vec!["Agitation with dementia".into(), "Migraine".into()],
            },
        ];
        g.classifications.pharmacological.targets = vec![Target {
            receptor: "D2".into(),
            family: "Dopamine Receptors".into(),
            activity: "Partial agonist".into(),
        }];
        g.relationships = vec![Relationship::new(
            RelationType::HasAdverseEffect,
            "x",
            "Akathisia",
        )];
        g
    }

    #[test]
    fn boxes_stay_aligned() {
        let art = visualize_ontology("brexpiprazole", &graph(), &[]);
        let box_lines: Vec<&str> = art.lines().filter(|l| !l.starts_with(' ')).collect();
        assert_eq!(box_lines.len(), 12);
        for line in &box_lines {
            assert_eq!(line.chars().count(), 69, "misaligned: {line:?}");
        }
    }

    #[test]
    fn cells_filled_from_graph() {
        let art = visualize_ontology("brexpiprazole", &graph(), &[]);
        assert!(art.contains("+------brexpiprazole------+"));
        assert!(art.contains("| Antipsychotics    |"));
        assert!(art.contains("• Schizophrenia  "));
        assert!(art.contains("• Major depressiv |"));
        assert!(art.contains("• Agitation with  |"));
        assert!(!art.contains("Migraine"));
        assert!(art.contains("• D2 (Par)"));
        assert!(art.contains("• Akathisia"));
        assert!(art.contains("| Quinolinone Deriv |"));
    }

    #[test]
    fn empty_graph_uses_fallbacks() {
        let art = visualize_ontology("zx", &OntologyGraph::default(), &[]);
        assert!(art.contains("| N/A               |"));
        assert!(art.contains("• N/A"));
        assert!(art.contains("• Various"));
        assert!(art.contains("• CYP Enzymes"));
    }

    #[test]
    fn metabolism_box_lists_enzymes() {
        let enzymes = ["CYP3A4".to_string(), "CYP2D6".to_string()];
        let art = visualize_ontology("brexpiprazole", &graph(), &enzymes);
        assert!(!art.contains("CYP Enzymes"));

        let rows: Vec<&str> = art.lines().collect();
        let title = rows.iter().position(|l| l.contains("Metabolism")).unwrap();
        assert!(rows[title + 1].ends_with("| • CYP3A4          |"));
        assert!(rows[title + 2].ends_with("| • CYP2D6          |"));
        assert!(rows.iter().all(|l| l.starts_with(' ') || l.chars().count() == 69));
    }
}
