//! End-to-end profile pipeline: bundle → merge → profile → diagram → report.

use std::collections::HashMap;
use std::time::Instant;

use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, info, instrument};

use pharmaprofile_markdown::render_report;
use pharmaprofile_ontology::visualize_ontology;
use pharmaprofile_shared::{AssetProfile, Result, SourceBundle};

use crate::merge::merge_bundles;
use crate::profile::generate_asset_profile;

/// Everything produced for one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileOutput {
    pub profile: AssetProfile,
    /// Boxed overview diagram embedded in the report.
    pub visualization: String,
    /// Rendered Markdown report.
    pub report: String,
    /// Hex SHA-256 of the asset name and merged bundle.
    pub fingerprint: String,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called when the pipeline completes.
    fn done(&self, output: &ProfileOutput);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn done(&self, _output: &ProfileOutput) {}
}

/// Hex SHA-256 over the asset name and the bundle's canonical JSON.
///
/// Metadata maps are ordered, so equal bundles always hash equally.
pub fn bundle_fingerprint(asset_name: &str, bundle: &SourceBundle) -> Result<String> {
    let json = serde_json::to_vec(bundle)?;
    let mut hasher = Sha256::new();
    hasher.update(asset_name.as_bytes());
    hasher.update([0u8]);
    hasher.update(&json);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Run the full pipeline for one asset.
///
/// 1. Merge the supplemental bundle, when given
/// 2. Extract facts and build the ontology
/// 3. Draw the overview diagram
/// 4. Render the Markdown report
#[instrument(skip_all, fields(asset = %asset_name, supplemented = supplemental.is_some()))]
pub fn run_profile(
    asset_name: &str,
    bundle: &SourceBundle,
    supplemental: Option<&SourceBundle>,
    progress: &dyn ProgressReporter,
) -> Result<ProfileOutput> {
    let merged = merge_phase(bundle, supplemental, progress);
    let fingerprint = bundle_fingerprint(asset_name, &merged)?;
    Ok(build_output(asset_name, &merged, fingerprint, progress))
}

fn merge_phase(
    bundle: &SourceBundle,
    supplemental: Option<&SourceBundle>,
    progress: &dyn ProgressReporter,
) -> SourceBundle {
    match supplemental {
        Some(supp) => {
            progress.phase("Merging supplemental data");
            merge_bundles(bundle, supp)
        }
        None => bundle.clone(),
    }
}

fn build_output(
    asset_name: &str,
    bundle: &SourceBundle,
    fingerprint: String,
    progress: &dyn ProgressReporter,
) -> ProfileOutput {
    let start = Instant::now();

    progress.phase("Extracting facts");
    let profile = generate_asset_profile(asset_name, bundle);

    progress.phase("Drawing ontology");
    let visualization = visualize_ontology(asset_name, &profile.ontology, &profile.metabolism);

    progress.phase("Rendering report");
    let report = render_report(&profile, &visualization);

    let output = ProfileOutput {
        profile,
        visualization,
        report,
        fingerprint,
    };
    progress.done(&output);

    info!(
        fingerprint = %output.fingerprint,
        report_len = output.report.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "profile pipeline complete"
    );

    output
}

// ---------------------------------------------------------------------------
// Memoization
// ---------------------------------------------------------------------------

/// Memoizes pipeline outputs by bundle fingerprint.
#[derive(Debug, Default)]
pub struct ProfileCache {
    entries: HashMap<String, ProfileOutput>,
    hits: usize,
    misses: usize,
}

impl ProfileCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Like [`run_profile`], reusing an earlier output for an identical
    /// asset name and merged bundle.
    pub fn run(
        &mut self,
        asset_name: &str,
        bundle: &SourceBundle,
        supplemental: Option<&SourceBundle>,
        progress: &dyn ProgressReporter,
    ) -> Result<ProfileOutput> {
        let merged = merge_phase(bundle, supplemental, progress);
        let fingerprint = bundle_fingerprint(asset_name, &merged)?;

        if let Some(hit) = self.entries.get(&fingerprint) {
            self.hits += 1;
            debug!(%fingerprint, "profile cache hit");
            progress.done(hit);
            return Ok(hit.clone());
        }

        self.misses += 1;
        debug!(%fingerprint, "profile cache miss");
        let output = build_output(asset_name, &merged, fingerprint.clone(), progress);
        self.entries.insert(fingerprint, output.clone());
        Ok(output)
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
