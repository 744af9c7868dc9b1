//! # Configuration
//!
//! Centralizes settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI argument.
//!
//! Config lives at `~/.nolearn/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NolearnConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_file: Option<String>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TASK_FILE: &str = "tasks.json";
pub const DEFAULT_LOG_FILE: &str = "nolearn.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub task_file: PathBuf,
    /// `None` when no home directory is available; logging is then disabled.
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
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

/// Returns `~/.nolearn/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".nolearn"))
}

/// Returns the path to `~/.nolearn/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.nolearn/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NolearnConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<NolearnConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(NolearnConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(NolearnConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: NolearnConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Nolearn Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → command-line argument.

# [general]
# default_file = "tasks.json"     # Or set NOLEARN_FILE; relative to the working directory
# log_file = "nolearn.log"        # Relative to ~/.nolearn/
# log_level = "info"              # "off", "error", "warn", "info", "debug", "trace"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_file` is the positional command-line argument (None = not given).
pub fn resolve(config: &NolearnConfig, cli_file: Option<&Path>) -> ResolvedConfig {
    resolve_with(config, cli_file, config_dir().as_deref(), |key| std::env::var_os(key))
}

/// `resolve` with the environment and `~/.nolearn/` supplied by the caller.
pub fn resolve_with<E>(
    config: &NolearnConfig,
    cli_file: Option<&Path>,
    config_dir: Option<&Path>,
    env: E,
) -> ResolvedConfig
where
    E: Fn(&str) -> Option<OsString>,
{
    // Task file: CLI → env → config → default
    let task_file = cli_file
        .map(Path::to_path_buf)
        .or_else(|| env("NOLEARN_FILE").map(PathBuf::from))
        .or_else(|| config.general.default_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TASK_FILE));

    // Log level: env → config → default
    let log_level = env("NOLEARN_LOG_LEVEL")
        .and_then(|level| level.into_string().ok())
        .or_else(|| config.general.log_level.clone())
        .and_then(|level| parse_level(&level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config_dir.map(|dir| {
        dir.join(
            config
                .general
                .log_file
                .as_deref()
                .unwrap_or(DEFAULT_LOG_FILE),
        )
    });

    ResolvedConfig {
        task_file,
        log_file,
        log_level,
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.parse() {
        Ok(filter) => Some(filter),
        Err(_) => {
            warn!("Unknown log level '{}', using {}", level, DEFAULT_LOG_LEVEL);
            None
        }
    }
}
