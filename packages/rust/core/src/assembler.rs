//! Profile directory assembler.
//!
//! Takes a finished [`ProfileOutput`] and writes the per-asset output
//! directory to disk.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info, instrument};

use pharmaprofile_shared::{AssetProfile, PharmaProfileError, RelationType, Result, RunConfig};

use crate::pipeline::ProfileOutput;

/// Version of the `manifest.json` layout.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

const REPORT_FILE: &str = "report.md";
const PROFILE_FILE: &str = "profile.json";
const MANIFEST_FILE: &str = "manifest.json";

/// Metadata for a single written file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub filename: String,
    pub sha256: String,
    pub size_bytes: usize,
}

/// Contents of `manifest.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileManifest {
    pub schema_version: u32,
    pub asset_name: String,
    pub fingerprint: String,
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
    pub trial_count: usize,
    pub relationship_count: usize,
    pub files: Vec<FileMeta>,
}

/// Output from a successful assembly.
#[derive(Debug, Clone)]
pub struct AssembleResult {
    /// Directory holding the asset's files.
    pub dir: PathBuf,
    /// Every file written except the manifest itself.
    pub files: Vec<FileMeta>,
    /// The manifest, when one was written.
    pub manifest: Option<ProfileManifest>,
}

/// Write one asset's output directory.
///
/// Creates the following layout:
/// ```text
/// <output_root>/<asset-slug>/
/// ├── report.md
/// ├── profile.json    (optional)
/// └── manifest.json   (optional)
/// ```
///
/// Every file is written atomically (temp file, then rename), so re-running
/// over an existing directory replaces it file by file.
#[instrument(skip_all, fields(asset = %output.profile.asset_name))]
pub fn assemble(config: &RunConfig, output: &ProfileOutput) -> Result<AssembleResult> {
    let dir = config.output_root.join(slugify(&output.profile.asset_name));
    std::fs::create_dir_all(&dir).map_err(|e| PharmaProfileError::io(&dir, e))?;

    info!(path = %dir.display(), "assembling profile directory");

    let mut files = vec![write_atomic(&dir, REPORT_FILE, output.report.as_bytes())?];

    if config.write_profile_json {
        let json = serde_json::to_string_pretty(&output.profile)?;
        files.push(write_atomic(&dir, PROFILE_FILE, json.as_bytes())?);
    }

    let manifest = if config.write_manifest {
        let manifest = build_manifest(output, files.clone());
        let json = serde_json::to_string_pretty(&manifest)?;
        write_atomic(&dir, MANIFEST_FILE, json.as_bytes())?;
        Some(manifest)
    } else {
        None
    };

    info!(
        files = files.len(),
        manifest = manifest.is_some(),
        path = %dir.display(),
        "profile assembly complete"
    );

    Ok(AssembleResult {
        dir,
        files,
        manifest,
    })
}

/// Verify that an asset directory is well-formed.
///
/// `report.md` is required. When present, `manifest.json` must carry the
/// current schema version and checksums matching the files on disk, and
/// `profile.json` must parse as a profile.
pub fn validate_output(dir: &Path) -> Result<()> {
    let report_path = dir.join(REPORT_FILE);
    if !report_path.exists() {
        return Err(PharmaProfileError::validation("missing report.md"));
    }

    let profile_path = dir.join(PROFILE_FILE);
    if profile_path.exists() {
        let content = read(&profile_path)?;
        serde_json::from_str::<AssetProfile>(&content).map_err(|e| {
            PharmaProfileError::validation(format!("invalid profile.json: {e}"))
        })?;
    }

    let manifest_path = dir.join(MANIFEST_FILE);
    if !manifest_path.exists() {
        debug!(path = %dir.display(), "no manifest, skipping checksum validation");
        return Ok(());
    }

    let manifest: ProfileManifest = serde_json::from_str(&read(&manifest_path)?)
        .map_err(|e| PharmaProfileError::validation(format!("invalid manifest.json: {e}")))?;

    if manifest.schema_version != CURRENT_SCHEMA_VERSION {
        return Err(PharmaProfileError::validation(format!(
            "unsupported schema_version: {} (expected {})",
            manifest.schema_version, CURRENT_SCHEMA_VERSION
        )));
    }

    for file in &manifest.files {
        let path = dir.join(&file.filename);
        let bytes = std::fs::read(&path).map_err(|e| PharmaProfileError::io(&path, e))?;
        if sha256_hex(&bytes) != file.sha256 {
            return Err(PharmaProfileError::validation(format!(
                "checksum mismatch for {}",
                file.filename
            )));
        }
    }

    Ok(())
}

/// Directory name for an asset: lower-case alphanumerics joined by `-`.
pub fn slugify(asset_name: &str) -> String {
    let slug = asset_name
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "asset".to_string()
    } else {
        slug
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn build_manifest(output: &ProfileOutput, files: Vec<FileMeta>) -> ProfileManifest {
    let profile = &output.profile;
    ProfileManifest {
        schema_version: CURRENT_SCHEMA_VERSION,
        asset_name: profile.asset_name.clone(),
        fingerprint: output.fingerprint.clone(),
        generated_at: Utc::now(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        trial_count: trial_count(profile),
        relationship_count: profile.ontology.relationships.len(),
        files,
    }
}

/// Trials actually found, not counting the placeholder entry.
fn trial_count(profile: &AssetProfile) -> usize {
    let placeholder = pharmaprofile_shared::ClinicalEvidence::placeholder();
    profile
        .clinical_evidence
        .iter()
        .filter(|ev| **ev != placeholder)
        .count()
}

/// Write `content` to `dir/filename` via a temp file and rename.
fn write_atomic(dir: &Path, filename: &str, content: &[u8]) -> Result<FileMeta> {
    let target = dir.join(filename);
    let temp = dir.join(format!(".{filename}.tmp"));

    // Write to temp file first
    std::fs::write(&temp, content).map_err(|e| PharmaProfileError::io(&temp, e))?;

    // Atomic rename
    std::fs::rename(&temp, &target).map_err(|e| PharmaProfileError::io(&target, e))?;

    debug!(file = %filename, size = content.len(), "wrote file");

    Ok(FileMeta {
        filename: filename.to_string(),
        sha256: sha256_hex(content),
        size_bytes: content.len(),
    })
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| PharmaProfileError::io(path, e))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
