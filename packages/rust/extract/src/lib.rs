//! Fact extraction from regulatory, label, trial, and literature text.
//!
//! Every extractor is total: when a fact cannot be found it returns the named
//! placeholder from [`pharmaprofile_shared::placeholders`] instead of failing.

pub mod drug_class;
pub mod indications;
pub mod mechanism;
pub mod regulatory;
pub mod text;
pub mod trials;

pub use drug_class::classify_drug_class;
pub use indications::extract_indications;
pub use mechanism::{extract_mechanism, extract_metabolism};
pub use regulatory::{RegulatoryFacts, extract_identifiers, extract_regulatory};
pub use trials::{extract_clinical_evidence, extract_trial};
