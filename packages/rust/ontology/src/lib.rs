//! Drug ontology construction.
//!
//! Turns an [`AssetProfile`] into an [`OntologyGraph`]: a classification
//! hierarchy, relationship triples, and a semantic network diagram. The graph
//! is a pure function of the profile's fields.

pub mod classify;
pub mod network;
pub mod relationships;
pub mod tables;
pub mod visualize;

use tracing::{debug, instrument};

use pharmaprofile_shared::{AssetProfile, OntologyGraph};

pub use classify::build_classifications;
pub use network::build_semantic_network;
pub use relationships::build_relationships;
pub use visualize::visualize_ontology;

/// Build the complete ontology for a profile.
///
/// The profile's own `ontology` field is ignored.
#[instrument(skip_all, fields(drug = %profile.asset_name))]
pub fn build_ontology(profile: &AssetProfile) -> OntologyGraph {
    let classifications = build_classifications(profile);
    let relationships = build_relationships(profile);
    let semantic_network = build_semantic_network(profile);

    debug!(
        targets = classifications.pharmacological.targets.len(),
        areas = classifications.therapeutic.len(),
        related = classifications.chemical.related_compounds.len(),
        relationships = relationships.len(),
        "ontology built"
    );

    OntologyGraph {
        drug_name: profile.asset_name.clone(),
        brand_name: profile.identifiers.brand_name.clone(),
        classifications,
        relationships,
        semantic_network,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharmaprofile_shared::RelationType;

    #[test]
    fn graph_is_reproducible_and_ignores_existing_ontology() {
        let mut profile = AssetProfile {
            asset_name: "brexpiprazole".into(),
            indications: vec!["Schizophrenia".into()],
            mechanism_of_action: "Partial agonist at D2 receptors.".into(),
            ..AssetProfile::default()
        };
        profile.identifiers.brand_name = "REXULTI".into();

        let first = build_ontology(&profile);
        profile.ontology = first.clone();
        let second = build_ontology(&profile);

        assert_eq!(first, second);
        assert_eq!(first.brand_name, "REXULTI");
        assert_eq!(first.count_of(RelationType::IsA), 1);
        assert_eq!(first.count_of(RelationType::ManufacturedBy), 1);
        assert_eq!(first.count_of(RelationType::RegulatedBy), 1);
    }

    #[test]
    fn serializes_with_snake_case_relation_types() {
        let profile = AssetProfile {
            asset_name: "x".into(),
            ..AssetProfile::default()
        };
        let json = serde_json::to_value(build_ontology(&profile)).unwrap();
        assert_eq!(json["relationships"][0]["type"], "is_a");
        assert_eq!(json["relationships"][2]["type"], "regulated_by");
    }
}
