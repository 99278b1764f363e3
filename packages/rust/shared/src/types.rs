//! Core domain types: source bundles in, asset profiles and ontologies out.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{PharmaProfileError, Result};
use crate::placeholders;

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// A single retrieved text record (regulatory filing, label, trial, abstract).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Name of the upstream source (e.g. `FDA Purple Book`, `PubMed`).
    #[serde(default)]
    pub source: String,
    /// Free text body.
    #[serde(default)]
    pub text: String,
    /// Flat string metadata (`drug_name`, `brand_name`, `publication_year`, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    /// Registry identifier for clinical trial documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_id: Option<String>,
    /// PubMed identifier for literature documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pmid: Option<String>,
}

impl Document {
    /// Create a document with a source name and body text.
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// Builder-style metadata insertion.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Builder-style trial identifier.
    pub fn with_trial_id(mut self, id: impl Into<String>) -> Self {
        self.trial_id = Some(id.into());
        self
    }

    /// Builder-style PubMed identifier.
    pub fn with_pmid(mut self, id: impl Into<String>) -> Self {
        self.pmid = Some(id.into());
        self
    }

    /// Look up a metadata value, ignoring blank entries.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// True when the document carries no data at all.
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
            && self.text.is_empty()
            && self.metadata.is_empty()
            && self.trial_id.is_none()
            && self.pmid.is_none()
    }

    /// Lenient conversion from arbitrary JSON.
    ///
    /// Non-object values and objects without any usable field yield `None`.
    /// Scalar metadata values are stringified; nested values are dropped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        let metadata = obj
            .get("metadata")
            .and_then(Value::as_object)
            .map(|m| {
                m.iter()
                    .filter_map(|(k, v)| scalar_to_string(v).map(|s| (k.clone(), s)))
                    .collect()
            })
            .unwrap_or_default();

        let doc = Self {
            source: obj.get("source").and_then(scalar_to_string).unwrap_or_default(),
            text: obj.get("text").and_then(scalar_to_string).unwrap_or_default(),
            metadata,
            trial_id: obj.get("trial_id").and_then(scalar_to_string),
            pmid: obj.get("pmid").and_then(scalar_to_string),
        };

        (!doc.is_empty()).then_some(doc)
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// SourceBundle
// ---------------------------------------------------------------------------

/// Everything retrieved for one asset query.
///
/// Deserialization is lenient: shape mismatches load as missing data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceBundle {
    /// Regulatory filing summary.
    pub fda_purple_book: Option<Document>,
    /// Structured product label.
    pub daily_med: Option<Document>,
    /// Trial registry records.
    pub clinical_trials: Vec<Document>,
    /// Literature abstracts.
    pub pubmed: Vec<Document>,
}

impl SourceBundle {
    /// Build a bundle from any JSON value. Never fails.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            tracing::debug!("bundle is not a JSON object, treating as empty");
            return Self::default();
        };

        let single = |key: &str| obj.get(key).and_then(Document::from_value);
        let many = |key: &str| {
            obj.get(key)
                .and_then(Value::as_array)
                .map(|items| items.iter().filter_map(Document::from_value).collect())
                .unwrap_or_default()
        };

        Self {
            fda_purple_book: single("fda_purple_book"),
            daily_med: single("daily_med"),
            clinical_trials: many("clinical_trials"),
            pubmed: many("pubmed"),
        }
    }

    /// Parse bundle JSON text. Fails only on malformed JSON syntax.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| PharmaProfileError::parse(format!("invalid bundle JSON: {e}")))?;
        Ok(Self::from_value(&value))
    }

    /// True when no source produced any data.
    pub fn is_empty(&self) -> bool {
        self.fda_purple_book.is_none()
            && self.daily_med.is_none()
            && self.clinical_trials.is_empty()
            && self.pubmed.is_empty()
    }

    /// Best guess at the asset name from regulatory or label metadata.
    pub fn asset_name_hint(&self) -> Option<&str> {
        [&self.fda_purple_book, &self.daily_med]
            .into_iter()
            .flatten()
            .find_map(|doc| doc.meta("drug_name"))
    }
}

impl<'de> Deserialize<'de> for SourceBundle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

// ---------------------------------------------------------------------------
// AssetProfile
// ---------------------------------------------------------------------------

/// Names and registry identifiers of the asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifiers {
    pub brand_name: String,
    pub generic_name: String,
    pub approval_date: String,
    pub manufacturer: String,
    pub bla_nda: String,
    pub chemical_formula: String,
}

/// Regulatory status and high-level class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalStatus {
    pub status: String,
    pub drug_class: String,
    #[serde(rename = "type")]
    pub approval_type: String,
}

/// Summary of a single clinical study.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalEvidence {
    pub trial_name: String,
    pub phase: String,
    pub population: String,
    pub key_results: String,
    pub safety: String,
}

impl ClinicalEvidence {
    /// The entry substituted when no trial data exists.
    pub fn placeholder() -> Self {
        Self {
            trial_name: placeholders::NO_TRIAL_INFORMATION.into(),
            phase: placeholders::UNKNOWN.into(),
            population: placeholders::UNKNOWN.into(),
            key_results: placeholders::NO_RESULTS_DATA.into(),
            safety: placeholders::NO_SAFETY_DATA.into(),
        }
    }
}

/// The structured profile of one pharmaceutical asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetProfile {
    pub asset_name: String,
    pub identifiers: Identifiers,
    pub approval_status: ApprovalStatus,
    /// Never empty; holds the indication placeholder when nothing was found.
    pub indications: Vec<String>,
    pub mechanism_of_action: String,
    /// Never empty; holds [`ClinicalEvidence::placeholder`] when no trials exist.
    pub clinical_evidence: Vec<ClinicalEvidence>,
    /// Metabolizing enzymes named in the literature (e.g. `CYP3A4`).
    #[serde(default)]
    pub metabolism: Vec<String>,
    pub ontology: OntologyGraph,
}

impl AssetProfile {
    /// Indications that are real facts rather than the placeholder.
    pub fn known_indications(&self) -> impl Iterator<Item = &str> {
        self.indications
            .iter()
            .map(String::as_str)
            .filter(|i| *i != placeholders::INDICATION_UNAVAILABLE)
    }

    /// Mechanism text, or `""` when only the placeholder is present.
    pub fn known_mechanism(&self) -> &str {
        if self.mechanism_of_action == placeholders::MECHANISM_UNAVAILABLE {
            ""
        } else {
            &self.mechanism_of_action
        }
    }
}

// ---------------------------------------------------------------------------
// OntologyGraph
// ---------------------------------------------------------------------------

/// Classification hierarchy, relationship triples, and network diagram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyGraph {
    pub drug_name: String,
    pub brand_name: String,
    pub classifications: Classifications,
    pub relationships: Vec<Relationship>,
    pub semantic_network: String,
}

impl OntologyGraph {
    /// Count relationships of one type.
    pub fn count_of(&self, kind: RelationType) -> usize {
        self.relationships.iter().filter(|r| r.kind == kind).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classifications {
    pub pharmaceutical: PharmaceuticalClass,
    pub pharmacological: PharmacologicalClass,
    /// Ordered by the fixed category order; empty categories omitted.
    pub therapeutic: Vec<TherapeuticArea>,
    pub chemical: ChemicalClass,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PharmaceuticalClass {
    pub class: String,
    pub subclass: String,
    pub family: String,
    pub subfamily: String,
    #[serde(rename = "type")]
    pub drug_type: String,
    pub agent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PharmacologicalClass {
    pub primary_mechanism: String,
    pub targets: Vec<Target>,
}

/// A receptor or transporter the asset acts on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub receptor: String,
    pub family: String,
    pub activity: String,
}

/// One therapeutic category and the indications bucketed into it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TherapeuticArea {
    pub area: String,
    pub indications: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChemicalClass {
    pub structure_type: String,
    pub chemical_class: String,
    pub formula: String,
    pub related_compounds: Vec<RelatedCompound>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedCompound {
    pub name: String,
    pub relation_type: String,
}

// ---------------------------------------------------------------------------
// Relationship
// ---------------------------------------------------------------------------

/// Kinds of subject-predicate-object triples in the ontology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    IsA,
    ManufacturedBy,
    RegulatedBy,
    Treats,
    HasTarget,
    HasMechanism,
    HasAdverseEffect,
}

impl RelationType {
    /// Wire name, e.g. `has_target`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IsA => "is_a",
            Self::ManufacturedBy => "manufactured_by",
            Self::RegulatedBy => "regulated_by",
            Self::Treats => "treats",
            Self::HasTarget => "has_target",
            Self::HasMechanism => "has_mechanism",
            Self::HasAdverseEffect => "has_adverse_effect",
        }
    }

    /// Human-readable heading, e.g. `Has Target`.
    pub fn title(&self) -> String {
        self.as_str()
            .split('_')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for RelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ontology triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(rename = "type")]
    pub kind: RelationType,
    pub subject: String,
    pub object: String,
}

impl Relationship {
    pub fn new(kind: RelationType, subject: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            kind,
            subject: subject.into(),
            object: object.into(),
        }
    }
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Capitalize every whitespace-separated word.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_path(name: &str) -> std::path::PathBuf {
        std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures/bundles")
            .join(name)
    }

    #[test]
    fn bundle_from_empty_object() {
        let bundle = SourceBundle::from_json_str("{}").expect("parse");
        assert!(bundle.is_empty());
    }

    #[test]
    fn bundle_rejects_malformed_json() {
        let err = SourceBundle::from_json_str("{\"daily_med\": ").unwrap_err();
        assert!(err.to_string().contains("invalid bundle JSON"));

        let json = std::fs::read_to_string(fixture_path("malformed.json")).expect("read fixture");
        let err = SourceBundle::from_json_str(&json).unwrap_err();
        assert!(matches!(err, crate::PharmaProfileError::Parse { .. }));
    }

    #[test]
    fn bundle_tolerates_shape_mismatches() {
        let json = r#"{
            "fda_purple_book": {},
            "daily_med": "not an object",
            "clinical_trials": [42, {"text": "Phase 3 study", "trial_id": 12345}, null],
            "pubmed": {"oops": true}
        }"#;
        let bundle = SourceBundle::from_json_str(json).expect("parse");
        assert!(bundle.fda_purple_book.is_none());
        assert!(bundle.daily_med.is_none());
        assert_eq!(bundle.clinical_trials.len(), 1);
        assert_eq!(bundle.clinical_trials[0].trial_id.as_deref(), Some("12345"));
        assert!(bundle.pubmed.is_empty());
    }

    #[test]
    fn metadata_scalars_are_stringified() {
        let json = r#"{"pubmed": [{"text": "x", "metadata": {"publication_year": 2021, "tags": ["a"], "open": true}}]}"#;
        let bundle = SourceBundle::from_json_str(json).expect("parse");
        let doc = &bundle.pubmed[0];
        assert_eq!(doc.meta("publication_year"), Some("2021"));
        assert_eq!(doc.meta("open"), Some("true"));
        assert!(doc.meta("tags").is_none());
    }

    #[test]
    fn asset_name_hint_prefers_regulatory_metadata() {
        let bundle = SourceBundle {
            fda_purple_book: Some(Document::new("FDA", "x").with_meta("drug_name", "REXULTI")),
            daily_med: Some(Document::new("DailyMed", "y").with_meta("drug_name", "other")),
            ..SourceBundle::default()
        };
        assert_eq!(bundle.asset_name_hint(), Some("REXULTI"));
    }

    #[test]
    fn bundle_serde_roundtrip_is_stable() {
        let bundle = SourceBundle {
            daily_med: Some(Document::new("DailyMed", "label text").with_meta("brand_name", "X")),
            pubmed: vec![Document::new("PubMed", "abstract").with_pmid("99")],
            ..SourceBundle::default()
        };
        let json = serde_json::to_string(&bundle).expect("serialize");
        let parsed: SourceBundle = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, bundle);
    }

    #[test]
    fn full_fixture_loads() {
        let json = std::fs::read_to_string(fixture_path("brexpiprazole.json")).expect("read fixture");
        let bundle = SourceBundle::from_json_str(&json).expect("parse fixture");
        assert!(bundle.fda_purple_book.is_some());
        assert!(bundle.daily_med.is_some());
        assert_eq!(bundle.clinical_trials.len(), 2);
        assert_eq!(bundle.pubmed.len(), 2);
    }

    #[test]
    fn relation_type_titles() {
        assert_eq!(RelationType::IsA.title(), "Is A");
        assert_eq!(RelationType::HasAdverseEffect.title(), "Has Adverse Effect");
        assert_eq!(RelationType::ManufacturedBy.to_string(), "manufactured_by");
    }

    #[test]
    fn relationship_serializes_snake_case_type() {
        let rel = Relationship::new(RelationType::HasTarget, "drug", "Dopamine D2 Receptor");
        let json = serde_json::to_value(&rel).expect("serialize");
        assert_eq!(json["type"], "has_target");
    }

    #[test]
    fn capitalize_handles_unicode_and_empty() {
        assert_eq!(capitalize("weight gain"), "Weight gain");
        assert_eq!(title_case("weight gain"), "Weight Gain");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("μ-OPIOID"), "Μ-opioid");
    }

    #[test]
    fn known_indications_skip_placeholder() {
        let profile = AssetProfile {
            indications: vec![placeholders::INDICATION_UNAVAILABLE.into()],
            mechanism_of_action: placeholders::MECHANISM_UNAVAILABLE.into(),
            ..AssetProfile::default()
        };
        assert_eq!(profile.known_indications().count(), 0);
        assert_eq!(profile.known_mechanism(), "");
    }
}
