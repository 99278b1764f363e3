//! Application configuration for PharmaProfile.
//!
//! User config lives at `~/.pharmaprofile/pharmaprofile.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PharmaProfileError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "pharmaprofile.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".pharmaprofile";

// ---------------------------------------------------------------------------
// Config structs (matching pharmaprofile.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Supplemental bundle lookup.
    #[serde(default)]
    pub merge: MergeConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Root directory that receives one sub-directory per profiled asset.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Also write the structured profile as `profile.json`.
    #[serde(default = "default_true")]
    pub write_profile_json: bool,

    /// Also write `manifest.json` with checksums.
    #[serde(default = "default_true")]
    pub write_manifest: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            write_profile_json: true,
            write_manifest: true,
        }
    }
}

fn default_output_dir() -> String {
    "profiles".into()
}
fn default_true() -> bool {
    true
}

/// `[merge]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Directory searched for `<asset>.json` supplemental bundles. Empty disables lookup.
    #[serde(default)]
    pub supplemental_dir: String,
}

// ---------------------------------------------------------------------------
// Run config (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime output configuration, merged from config file + CLI flags.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Root directory for profile output.
    pub output_root: PathBuf,
    /// Write `profile.json` next to the report.
    pub write_profile_json: bool,
    /// Write `manifest.json` next to the report.
    pub write_manifest: bool,
    /// Directory holding supplemental bundles, if configured.
    pub supplemental_dir: Option<PathBuf>,
}

impl From<&AppConfig> for RunConfig {
    fn from(config: &AppConfig) -> Self {
        let supplemental = config.merge.supplemental_dir.trim();
        Self {
            output_root: expand_home(&config.defaults.output_dir),
            write_profile_json: config.defaults.write_profile_json,
            write_manifest: config.defaults.write_manifest,
            supplemental_dir: (!supplemental.is_empty()).then(|| expand_home(supplemental)),
        }
    }
}

impl RunConfig {
    /// Path of the supplemental bundle for an asset, when one exists on disk.
    pub fn supplemental_for(&self, asset_name: &str) -> Option<PathBuf> {
        let dir = self.supplemental_dir.as_ref()?;
        let path = dir.join(format!("{}.json", asset_name.to_lowercase()));
        path.exists().then_some(path)
    }
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.pharmaprofile/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| PharmaProfileError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.pharmaprofile/pharmaprofile.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| PharmaProfileError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        PharmaProfileError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| PharmaProfileError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| PharmaProfileError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| PharmaProfileError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("output_dir"));
        assert!(toml_str.contains("supplemental_dir"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.defaults.output_dir, "profiles");
        assert!(parsed.defaults.write_manifest);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[defaults]
write_manifest = false
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.defaults.output_dir, "profiles");
        assert!(config.defaults.write_profile_json);
        assert!(!config.defaults.write_manifest);
        assert!(config.merge.supplemental_dir.is_empty());
    }

    #[test]
    fn run_config_from_app_config() {
        let mut app = AppConfig::default();
        app.defaults.output_dir = "/tmp/pp-out".into();
        let run = RunConfig::from(&app);
        assert_eq!(run.output_root, PathBuf::from("/tmp/pp-out"));
        assert!(run.supplemental_dir.is_none());

        app.merge.supplemental_dir = "/tmp/pp-supp".into();
        let run = RunConfig::from(&app);
        assert_eq!(run.supplemental_dir, Some(PathBuf::from("/tmp/pp-supp")));
    }

    #[test]
    fn load_config_from_reports_bad_toml() {
        let path = std::env::temp_dir().join("pp-config-test-bad.toml");
        std::fs::write(&path, "[defaults\noutput_dir = 1").expect("write temp config");
        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn expand_home_leaves_plain_paths() {
        assert_eq!(expand_home("out/profiles"), PathBuf::from("out/profiles"));
    }
}
