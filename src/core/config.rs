//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.terra/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::client::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TerraConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
    pub reset_page_on_search: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub fields: Option<Vec<String>>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FILE: &str = "terra.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    /// `None` means wait forever.
    pub timeout: Option<Duration>,
    pub fields: Vec<String>,
    pub log_level: log::LevelFilter,
    pub log_file: PathBuf,
    pub reset_page_on_search: bool,
    /// Problems found while resolving, logged once the logger is up.
    pub warnings: Vec<String>,
}

/// Values that came from the command line. `None` = flag not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub reset_page_on_search: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Where the file config came from.
///
/// Config is read before the file logger exists (the logger's path and level
/// are settings), so loading reports what happened instead of logging it.
/// `main` logs the report once the logger is up.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigOrigin {
    Loaded(PathBuf),
    Generated(PathBuf),
    GenerateFailed { path: PathBuf, reason: String },
    NoHomeDir,
}

impl ConfigOrigin {
    pub fn log(&self) {
        match self {
            ConfigOrigin::Loaded(path) => info!("Loaded config from {}", path.display()),
            ConfigOrigin::Generated(path) => {
                info!("No config file found, generated default at {}", path.display())
            }
            ConfigOrigin::GenerateFailed { path, reason } => {
                warn!("Failed to write default config to {}: {}", path.display(), reason)
            }
            ConfigOrigin::NoHomeDir => {
                warn!("Could not determine home directory, using default config")
            }
        }
    }
}

/// Returns the path to `~/.terra/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".terra").join("config.toml"))
}

/// Load config from `~/.terra/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TerraConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<(TerraConfig, ConfigOrigin), ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok((TerraConfig::default(), ConfigOrigin::NoHomeDir)),
    }
}

pub fn load_config_from(path: &Path) -> Result<(TerraConfig, ConfigOrigin), ConfigError> {
    if !path.exists() {
        let origin = match generate_default_config(path) {
            Ok(()) => ConfigOrigin::Generated(path.to_path_buf()),
            Err(e) => ConfigOrigin::GenerateFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        };
        return Ok((TerraConfig::default(), origin));
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TerraConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    Ok((config, ConfigOrigin::Loaded(path.to_path_buf())))
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# terra configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"
# log_file = "terra.log"
# reset_page_on_search = false       # Jump back to page 1 when the search changes

# [api]
# base_url = "https://restcountries.com/v3.1"   # Or set TERRA_BASE_URL env var
# timeout_secs = 30                  # Omit to wait indefinitely
# fields = ["name", "cca2", "population", "area", "capital", "currencies"]
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TerraConfig, cli: &CliOverrides) -> ResolvedConfig {
    let mut warnings = Vec::new();

    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("TERRA_BASE_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Log level: env → config → default
    let log_level = std::env::var("TERRA_LOG_LEVEL")
        .ok()
        .or_else(|| config.general.log_level.clone())
        .map(|s| {
            parse_level(&s).unwrap_or_else(|| {
                warnings.push(format!(
                    "Unknown log level '{s}', using {DEFAULT_LOG_LEVEL}"
                ));
                log::LevelFilter::Info
            })
        })
        .unwrap_or(log::LevelFilter::Info);

    ResolvedConfig {
        base_url,
        timeout: config.api.timeout_secs.map(Duration::from_secs),
        fields: config.api.fields.clone().unwrap_or_default(),
        log_level,
        log_file: PathBuf::from(
            config
                .general
                .log_file
                .as_deref()
                .unwrap_or(DEFAULT_LOG_FILE),
        ),
        reset_page_on_search: cli.reset_page_on_search
            || config.general.reset_page_on_search.unwrap_or(false),
        warnings,
    }
}

/// Parses a level name, case-insensitively.
fn parse_level(s: &str) -> Option<log::LevelFilter> {
    s.parse().ok()
}
