//! Named fallback values substituted when a fact cannot be extracted.

pub const UNKNOWN: &str = "Unknown";
pub const NOT_AVAILABLE: &str = "Not Available";
pub const NOT_SPECIFIED: &str = "Not Specified";

pub const INDICATION_UNAVAILABLE: &str = "Indication information not available";
pub const MECHANISM_UNAVAILABLE: &str = "Mechanism of action information not available";

pub const DEFAULT_DRUG_CLASS: &str = "Pharmaceutical Agent";
pub const UNKNOWN_MANUFACTURER: &str = "Unknown Manufacturer";

pub const RESULTS_UNAVAILABLE: &str = "Results not available";
pub const SAFETY_UNAVAILABLE: &str = "Safety information not available";

pub const NO_TRIAL_INFORMATION: &str = "No specific trial information available";
pub const NO_RESULTS_DATA: &str = "No results data available";
pub const NO_SAFETY_DATA: &str = "No safety data available";
