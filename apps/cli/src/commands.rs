//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use pharmaprofile_core::{
    ProfileCache, ProfileOutput, ProgressReporter, assemble, merge_bundles, validate_output,
};
use pharmaprofile_shared::{AppConfig, RunConfig, SourceBundle, init_config, load_config};
use tracing::{info, warn};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// PharmaProfile: structured asset profiles from pharmaceutical source data.
#[derive(Parser)]
#[command(
    name = "pharmaprofile",
    version,
    about = "Build drug asset profiles, ontologies, and Markdown reports from source bundles.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Build a profile and report for each source bundle.
    Profile {
        /// Source bundle JSON file(s).
        #[arg(required = true)]
        bundles: Vec<PathBuf>,

        /// Asset name (defaults to the bundle's drug name, then the file stem).
        #[arg(short, long)]
        name: Option<String>,

        /// Supplemental bundle merged into every input.
        #[arg(short, long)]
        supplement: Option<PathBuf>,

        /// Output root directory (overrides the config file).
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Print the report to stdout instead of writing files.
        #[arg(long)]
        stdout: bool,
    },

    /// Merge a supplemental bundle into a primary one and print the result.
    Merge {
        /// Primary bundle JSON file.
        primary: PathBuf,

        /// Supplemental bundle JSON file.
        supplemental: PathBuf,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "pharmaprofile=info",
        1 => "pharmaprofile=debug",
        _ => "pharmaprofile=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Profile {
            bundles,
            name,
            supplement,
            out,
            stdout,
        } => cmd_profile(
            &bundles,
            name.as_deref(),
            supplement.as_deref(),
            out.as_deref(),
            stdout,
        ),
        Command::Merge {
            primary,
            supplemental,
        } => cmd_merge(&primary, &supplemental),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_profile(
    bundles: &[PathBuf],
    name: Option<&str>,
    supplement: Option<&Path>,
    out: Option<&Path>,
    stdout: bool,
) -> Result<()> {
    let config = load_config()?;
    let mut run_config = RunConfig::from(&config);
    if let Some(dir) = out {
        run_config.output_root = dir.to_path_buf();
    }

    let shared_supplement = supplement.map(load_bundle).transpose()?;
    let mut cache = ProfileCache::new();
    let mut written = 0usize;

    for path in bundles {
        let bundle = match load_bundle(path) {
            Ok(bundle) => bundle,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable bundle");
                continue;
            }
        };

        let asset_name = resolve_asset_name(name, &bundle, path);
        let supplemental = match &shared_supplement {
            Some(supp) => Some(supp.clone()),
            None => configured_supplement(&run_config, &asset_name),
        };

        info!(
            asset = %asset_name,
            bundle = %path.display(),
            supplemented = supplemental.is_some(),
            "profiling asset"
        );

        let reporter = CliProgress::new();
        let output = cache.run(&asset_name, &bundle, supplemental.as_ref(), &reporter)?;

        if stdout {
            print!("{}", output.report);
            continue;
        }

        let result = assemble(&run_config, &output)?;
        validate_output(&result.dir)?;
        written += 1;

        let profile = &output.profile;
        println!();
        println!("  Profile written for {asset_name}");
        println!("  Brand:         {}", profile.identifiers.brand_name);
        println!("  Class:         {}", profile.approval_status.drug_class);
        println!("  Indications:   {}", profile.indications.len());
        println!("  Relationships: {}", profile.ontology.relationships.len());
        println!("  Path:          {}", result.dir.display());
    }

    if written > 0 {
        println!();
    }
    info!(
        written,
        cache_hits = cache.hits(),
        cache_misses = cache.misses(),
        "profile run finished"
    );

    if cache.is_empty() {
        return Err(eyre!("no bundle could be profiled"));
    }
    Ok(())
}

fn cmd_merge(primary: &Path, supplemental: &Path) -> Result<()> {
    let merged = merge_bundles(&load_bundle(primary)?, &load_bundle(supplemental)?);
    println!("{}", serde_json::to_string_pretty(&merged)?);
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_bundle(path: &Path) -> Result<SourceBundle> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| eyre!("cannot read bundle {}: {e}", path.display()))?;
    Ok(SourceBundle::from_json_str(&json)?)
}

/// `--name`, then the bundle's drug name metadata, then the file stem.
fn resolve_asset_name(flag: Option<&str>, bundle: &SourceBundle, path: &Path) -> String {
    flag.map(str::trim)
        .filter(|n| !n.is_empty())
        .or_else(|| bundle.asset_name_hint().map(str::trim).filter(|n| !n.is_empty()))
        .map(String::from)
        .unwrap_or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "asset".to_string())
        })
}

fn configured_supplement(config: &RunConfig, asset_name: &str) -> Option<SourceBundle> {
    let path = config.supplemental_for(asset_name)?;
    match load_bundle(&path) {
        Ok(bundle) => Some(bundle),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable supplement");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn done(&self, _output: &ProfileOutput) {
        self.spinner.finish_and_clear();
    }
}
