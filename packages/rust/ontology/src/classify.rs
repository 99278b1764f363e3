//! Classification hierarchy: pharmaceutical, pharmacological, therapeutic, chemical.

use pharmaprofile_shared::placeholders::{NOT_AVAILABLE, NOT_SPECIFIED};
use pharmaprofile_shared::{
    AssetProfile, ChemicalClass, Classifications, PharmaceuticalClass, PharmacologicalClass,
    RelatedCompound, Target, TherapeuticArea, capitalize, first_match,
};

use crate::tables::{
    ACTIVITY_TYPES, ANALOG_RULES, CHEMICAL_FAMILIES, DRUG_TYPE_RULES, MAX_RELATED_COMPOUNDS,
    NAME_OVERRIDES, NOVEL_AGENT, OTHER_CONDITIONS, PLACEHOLDER_ANALOGS, RECEPTORS,
    SUFFIX_FAMILIES, THERAPEUTIC_RULES, TRANSPORTERS, UNKNOWN_ACTIVITY,
};

/// Build every classification branch from a profile.
pub fn build_classifications(profile: &AssetProfile) -> Classifications {
    let mechanism = profile.known_mechanism();
    let therapeutic = classify_therapeutic_areas(profile.known_indications());
    let formula = match profile.identifiers.chemical_formula.trim() {
        "" => NOT_AVAILABLE,
        formula => formula,
    };

    Classifications {
        pharmaceutical: classify_pharmaceutical(
            &profile.asset_name,
            &profile.approval_status.drug_class,
            mechanism,
        ),
        pharmacological: PharmacologicalClass {
            primary_mechanism: "Receptor Modulator".into(),
            targets: extract_targets(mechanism),
        },
        chemical: classify_chemical(&profile.asset_name, mechanism, formula, &therapeutic),
        therapeutic,
    }
}

// ---------------------------------------------------------------------------
// Pharmaceutical
// ---------------------------------------------------------------------------

pub fn classify_pharmaceutical(
    asset_name: &str,
    drug_class: &str,
    mechanism: &str,
) -> PharmaceuticalClass {
    let class_lower = drug_class.to_lowercase();

    PharmaceuticalClass {
        class: "Central Nervous System Agents".into(),
        subclass: "Psychotropic Agents".into(),
        family: if class_lower.contains("antipsychotic") {
            "Antipsychotics".into()
        } else {
            "Psychotherapeutic Agents".into()
        },
        subfamily: if class_lower.contains("atypical") {
            "Atypical (Second-Generation) Antipsychotics".into()
        } else {
            String::new()
        },
        drug_type: classify_drug_type(mechanism),
        agent: asset_name.to_string(),
    }
}

/// Drug type from mechanism wording; combined serotonin-dopamine action wins.
pub fn classify_drug_type(mechanism: &str) -> String {
    first_match(DRUG_TYPE_RULES, &mechanism.to_lowercase())
        .unwrap_or(NOVEL_AGENT)
        .to_string()
}

// ---------------------------------------------------------------------------
// Pharmacological
// ---------------------------------------------------------------------------

/// Receptors named anywhere in the mechanism text.
///
/// Activity is the first activity keyword found anywhere in the text, so in a
/// sentence covering several receptors they all share one activity. `agonist`
/// is checked first and also matches inside `antagonist`.
pub fn extract_targets(mechanism: &str) -> Vec<Target> {
    let lowered = mechanism.to_lowercase();
    let activity = ACTIVITY_TYPES
        .iter()
        .find(|a| lowered.contains(*a))
        .map(|a| capitalize(a))
        .unwrap_or_else(|| UNKNOWN_ACTIVITY.to_string());

    let targets: Vec<Target> = RECEPTORS
        .iter()
        .filter(|entry| {
            entry
                .terms()
                .iter()
                .any(|term| lowered.contains(&term.to_lowercase()))
        })
        .map(|entry| Target {
            receptor: entry.receptor.to_string(),
            family: format!("{} Receptors", capitalize(entry.ligand)),
            activity: activity.clone(),
        })
        .collect();

    if !targets.is_empty() || !lowered.contains("reuptake inhibitor") {
        return targets;
    }

    TRANSPORTERS
        .iter()
        .filter(|t| t.terms.iter().any(|term| lowered.contains(term)))
        .map(|t| Target {
            receptor: t.receptor.to_string(),
            family: t.family.to_string(),
            activity: "Inhibitor".to_string(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Therapeutic
// ---------------------------------------------------------------------------

/// Bucket each indication into its first matching area, keeping area order.
pub fn classify_therapeutic_areas<'a>(
    indications: impl IntoIterator<Item = &'a str>,
) -> Vec<TherapeuticArea> {
    let other = THERAPEUTIC_RULES.len();
    let mut buckets: Vec<Vec<String>> = vec![Vec::new(); other + 1];

    for indication in indications {
        let lowered = indication.to_lowercase();
        let slot = THERAPEUTIC_RULES
            .iter()
            .position(|rule| rule.matches(&lowered))
            .unwrap_or(other);
        buckets[slot].push(indication.to_string());
    }

    THERAPEUTIC_RULES
        .iter()
        .map(|rule| rule.label)
        .chain(std::iter::once(OTHER_CONDITIONS))
        .zip(buckets)
        .filter(|(_, indications)| !indications.is_empty())
        .map(|(area, indications)| TherapeuticArea {
            area: area.to_string(),
            indications,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Chemical
// ---------------------------------------------------------------------------

pub fn classify_chemical(
    drug_name: &str,
    mechanism: &str,
    formula: &str,
    areas: &[TherapeuticArea],
) -> ChemicalClass {
    let name = drug_name.to_lowercase();
    let mech = mechanism.to_lowercase();

    let (structure_type, chemical_class, mut related): (&str, &str, Vec<RelatedCompound>) =
        if let Some(o) = NAME_OVERRIDES.iter().find(|o| name.contains(o.name)) {
            let related = o.related.iter().map(|(n, rel)| compound(n, rel)).collect();
            (o.structure_type, o.chemical_class, related)
        } else if let Some(family) = CHEMICAL_FAMILIES.iter().find(|f| {
            name.contains(f.key) || mech.contains(f.key) || f.members.iter().any(|m| name.contains(m))
        }) {
            let related = family
                .members
                .iter()
                .filter(|m| **m != name)
                .map(|m| compound(m, "structural analog"))
                .collect();
            (family.structure_type, family.chemical_class, related)
        } else {
            (NOT_SPECIFIED, NOT_SPECIFIED, Vec::new())
        };

    if related.is_empty() {
        related = related_by_name(&name, areas);
    }
    related.truncate(MAX_RELATED_COMPOUNDS);

    ChemicalClass {
        structure_type: structure_type.to_string(),
        chemical_class: chemical_class.to_string(),
        formula: formula.to_string(),
        related_compounds: related,
    }
}

/// Analogs by name suffix, then by name fragment or therapeutic area.
fn related_by_name(name: &str, areas: &[TherapeuticArea]) -> Vec<RelatedCompound> {
    let same_class = SUFFIX_FAMILIES
        .iter()
        .filter(|(suffix, _)| name.contains(suffix))
        .map(|(_, drugs)| {
            drugs
                .iter()
                .filter(|d| **d != name)
                .map(|d| compound(d, "same class"))
                .collect::<Vec<_>>()
        })
        .find(|related| !related.is_empty());
    if let Some(related) = same_class {
        return related;
    }

    let by_name = ANALOG_RULES
        .iter()
        .find(|rule| rule.name_terms.iter().any(|t| name.contains(t)));
    let by_area = || {
        ANALOG_RULES
            .iter()
            .find(|rule| rule.area.is_some_and(|area| areas.iter().any(|a| a.area == area)))
    };

    match by_name.or_else(by_area) {
        Some(rule) => rule
            .analogs
            .iter()
            .map(|a| compound(a, "functional analog"))
            .collect(),
        None => PLACEHOLDER_ANALOGS
            .iter()
            .map(|a| compound(a, "potential analog"))
            .collect(),
    }
}

fn compound(name: &str, relation_type: &str) -> RelatedCompound {
    RelatedCompound {
        name: name.to_string(),
        relation_type: relation_type.to_string(),
    }
}
