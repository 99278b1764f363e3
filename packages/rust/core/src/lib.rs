//! Core pipeline orchestration and domain logic for PharmaProfile.
//!
//! This crate ties together bundle merging, fact extraction, ontology
//! construction, and report rendering into end-to-end workflows
//! (e.g., [`run_profile`]), and assembles the output directory.

pub mod assembler;
pub mod merge;
pub mod pipeline;
pub mod profile;

pub use assembler::{AssembleResult, ProfileManifest, assemble, validate_output};
pub use merge::merge_bundles;
pub use pipeline::{
    ProfileCache, ProfileOutput, ProgressReporter, SilentProgress, bundle_fingerprint, run_profile,
};
pub use profile::generate_asset_profile;
