//! Shared types, error model, and configuration for PharmaProfile.
//!
//! This crate is the foundation depended on by all other PharmaProfile crates.
//! It provides:
//! - [`PharmaProfileError`]: the unified error type
//! - Domain types ([`SourceBundle`], [`AssetProfile`], [`OntologyGraph`], [`Relationship`])
//! - Placeholder constants and [`KeywordRule`] precedence tables
//! - Configuration ([`AppConfig`], [`RunConfig`], config loading)

pub mod config;
pub mod error;
pub mod placeholders;
pub mod rules;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, MergeConfig, RunConfig, config_dir, config_file_path, expand_home,
    init_config, load_config, load_config_from,
};
pub use error::{PharmaProfileError, Result};
pub use rules::{KeywordRule, all_matches, first_match};
pub use types::{
    ApprovalStatus, AssetProfile, ChemicalClass, Classifications, ClinicalEvidence, Document,
    Identifiers, OntologyGraph, PharmaceuticalClass, PharmacologicalClass, RelatedCompound,
    RelationType, Relationship, SourceBundle, Target, TherapeuticArea, capitalize, title_case,
};
