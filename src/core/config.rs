//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.quizdeck/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuizConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub deck_path: Option<String>,
    pub default_category: Option<String>,
    pub feedback_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DECK_PATH: &str = "flashcards.json";
pub const DEFAULT_FEEDBACK_DELAY_MS: u64 = 2000;
pub const DEFAULT_LOG_FILE: &str = "quizdeck.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub deck_path: PathBuf,
    pub category: Option<String>,
    pub feedback_delay_ms: u64,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub deck_path: Option<PathBuf>,
    pub category: Option<String>,
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

/// Returns the path to `~/.quizdeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".quizdeck").join("config.toml"))
}

/// Load config from `~/.quizdeck/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `QuizConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<QuizConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(QuizConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<QuizConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(QuizConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: QuizConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# quizdeck configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# deck_path = "flashcards.json"      # Or set QUIZDECK_DECK, or pass --deck
# default_category = "Capitals"      # Start straight into this category
# feedback_delay_ms = 2000           # Or set QUIZDECK_FEEDBACK_DELAY_MS

# [logging]
# level = "debug"                    # "off", "error", "warn", "info", "debug", "trace"
# file = "quizdeck.log"
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
pub fn resolve(config: &QuizConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Deck: CLI → env → config → default
    let deck_path = cli
        .deck_path
        .clone()
        .or_else(|| std::env::var("QUIZDECK_DECK").ok().map(PathBuf::from))
        .or_else(|| config.general.deck_path.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DECK_PATH));

    // Category: CLI → config
    let category = cli
        .category
        .clone()
        .or_else(|| config.general.default_category.clone());

    // Feedback delay: env → config → default
    let feedback_delay_ms = std::env::var("QUIZDECK_FEEDBACK_DELAY_MS")
        .ok()
        .and_then(|v| match v.parse::<u64>() {
            Ok(ms) => Some(ms),
            Err(e) => {
                warn!("Ignoring QUIZDECK_FEEDBACK_DELAY_MS={:?}: {}", v, e);
                None
            }
        })
        .or(config.general.feedback_delay_ms)
        .unwrap_or(DEFAULT_FEEDBACK_DELAY_MS);

    let log_level = config
        .logging
        .level
        .as_deref()
        .and_then(|level| LevelFilter::from_str(level).ok())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .logging
        .file
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        deck_path,
        category,
        feedback_delay_ms,
        log_level,
        log_file,
    }
}
