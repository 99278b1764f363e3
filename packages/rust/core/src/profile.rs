//! Asset profile generation: bundle in, fully populated profile out.

use tracing::{info, instrument};

use pharmaprofile_extract::{
    classify_drug_class, extract_clinical_evidence, extract_identifiers, extract_indications,
    extract_mechanism, extract_metabolism, extract_regulatory,
};
use pharmaprofile_ontology::build_ontology;
use pharmaprofile_shared::{ApprovalStatus, AssetProfile, Document, SourceBundle};

/// Build the profile for `asset_name` from whatever the bundle holds.
///
/// Total: every missing fact becomes its named placeholder, and the
/// ontology is derived from the finished profile fields.
#[instrument(skip_all, fields(asset = %asset_name))]
pub fn generate_asset_profile(asset_name: &str, bundle: &SourceBundle) -> AssetProfile {
    let regulatory_text = text_of(&bundle.fda_purple_book);
    let label_text = text_of(&bundle.daily_med);

    let facts = extract_regulatory(regulatory_text);
    let identifiers = extract_identifiers(asset_name, bundle, &facts);

    let mut profile = AssetProfile {
        asset_name: asset_name.to_string(),
        identifiers,
        approval_status: ApprovalStatus {
            status: facts.status,
            drug_class: classify_drug_class(label_text),
            approval_type: facts.approval_type,
        },
        indications: extract_indications(label_text),
        mechanism_of_action: extract_mechanism(label_text, &bundle.pubmed),
        clinical_evidence: extract_clinical_evidence(&bundle.clinical_trials),
        metabolism: extract_metabolism(&bundle.pubmed),
        ontology: Default::default(),
    };
    profile.ontology = build_ontology(&profile);

    info!(
        indications = profile.indications.len(),
        trials = profile.clinical_evidence.len(),
        relationships = profile.ontology.relationships.len(),
        "asset profile generated"
    );

    profile
}

fn text_of(doc: &Option<Document>) -> &str {
    doc.as_ref().map_or("", |d| d.text.as_str())
}
