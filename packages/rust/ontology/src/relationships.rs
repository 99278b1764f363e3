//! Subject-predicate-object triples derived from a profile.

use pharmaprofile_shared::placeholders::{DEFAULT_DRUG_CLASS, UNKNOWN, UNKNOWN_MANUFACTURER};
use pharmaprofile_shared::{AssetProfile, RelationType, Relationship, all_matches, title_case};

use crate::tables::{ADVERSE_EFFECTS, MECHANISM_RULES, TARGET_TERMS};

/// Every triple for the profile, in emission order.
///
/// The first three triples (`is_a`, `manufactured_by`, `regulated_by`) are
/// always present.
pub fn build_relationships(profile: &AssetProfile) -> Vec<Relationship> {
    let drug = profile.asset_name.as_str();
    let mechanism = profile.known_mechanism().to_lowercase();

    let mut out = vec![
        Relationship::new(
            RelationType::IsA,
            drug,
            or_default(&profile.approval_status.drug_class, DEFAULT_DRUG_CLASS),
        ),
        Relationship::new(
            RelationType::ManufacturedBy,
            drug,
            or_default(&profile.identifiers.manufacturer, UNKNOWN_MANUFACTURER),
        ),
        Relationship::new(RelationType::RegulatedBy, drug, "FDA"),
    ];

    out.extend(
        profile
            .known_indications()
            .map(|indication| Relationship::new(RelationType::Treats, drug, indication)),
    );

    // One triple per matching term; "dopamine" and "d2" both yield D2.
    out.extend(
        TARGET_TERMS
            .iter()
            .filter(|(term, _)| mechanism.contains(term))
            .map(|(_, receptor)| Relationship::new(RelationType::HasTarget, drug, *receptor)),
    );

    out.extend(
        all_matches(MECHANISM_RULES, &mechanism)
            .map(|label| Relationship::new(RelationType::HasMechanism, drug, label)),
    );

    out.extend(
        adverse_effects(profile)
            .into_iter()
            .map(|effect| Relationship::new(RelationType::HasAdverseEffect, drug, effect)),
    );

    out
}

/// Adverse-effect terms found in any safety field, in vocabulary order.
fn adverse_effects(profile: &AssetProfile) -> Vec<String> {
    let safety: Vec<String> = profile
        .clinical_evidence
        .iter()
        .map(|ev| ev.safety.to_lowercase())
        .collect();

    ADVERSE_EFFECTS
        .iter()
        .filter(|effect| safety.iter().any(|s| s.contains(*effect)))
        .map(|effect| title_case(effect))
        .collect()
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    match value.trim() {
        "" | UNKNOWN => fallback,
        v => v,
    }
}
