//! # Terminal Configuration
//!
//! Settings loaded once at startup and read-only afterwards.
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     FOODEXPRESS_STORE_NAME=FOODEXPRESS                                 │
//! │     FOODEXPRESS_TAX_RATE=19                                            │
//! │     FOODEXPRESS_PREP_DELAY_MS=900                                      │
//! │     FOODEXPRESS_LOG=warn                                               │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $FOODEXPRESS_CONFIG, or                                            │
//! │     ~/.config/foodexpress-terminal/terminal.toml (Linux)               │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! store_name = "FOODEXPRESS"
//! tax_rate = 19.0        # percent
//! prep_delay_ms = 900
//! log_filter = "warn"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use foodexpress_core::validation::validate_tax_rate_bps;
use foodexpress_core::{TaxRate, DEFAULT_TAX_RATE};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Env var naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "FOODEXPRESS_CONFIG";

const STORE_NAME_ENV: &str = "FOODEXPRESS_STORE_NAME";
const TAX_RATE_ENV: &str = "FOODEXPRESS_TAX_RATE";
const PREP_DELAY_ENV: &str = "FOODEXPRESS_PREP_DELAY_MS";
const LOG_ENV: &str = "FOODEXPRESS_LOG";

/// Simulated kitchen time before an order is ready.
pub const DEFAULT_PREP_DELAY: Duration = Duration::from_millis(900);

/// Filter used when neither `RUST_LOG` nor `FOODEXPRESS_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// =============================================================================
// Errors
// =============================================================================

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

// =============================================================================
// File Layer
// =============================================================================

/// Shape of `terminal.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub store_name: Option<String>,
    /// Percentage, e.g. `19.0`.
    pub tax_rate: Option<f64>,
    pub prep_delay_ms: Option<u64>,
    pub log_filter: Option<String>,
}

impl ConfigFile {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }
}

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Resolved terminal settings.
#[derive(Debug, Clone)]
pub struct TerminalConfig {
    /// Shown in the banner: `===SISTEMA <store_name>===`.
    pub store_name: String,
    pub tax_rate: TaxRate,
    pub prep_delay: Duration,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        TerminalConfig {
            store_name: "FOODEXPRESS".to_string(),
            tax_rate: DEFAULT_TAX_RATE,
            prep_delay: DEFAULT_PREP_DELAY,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl TerminalConfig {
    /// Loads defaults, then the config file, then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let file = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Some(ConfigFile::read(Path::new(&path))?),
            None => match default_config_path() {
                Some(path) if path.exists() => Some(ConfigFile::read(&path)?),
                _ => None,
            },
        };

        Self::from_sources(file, |key| std::env::var(key).ok())
    }

    /// Layers `file` and then `env` over the defaults.
    pub fn from_sources<F>(file: Option<ConfigFile>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = TerminalConfig::default();

        if let Some(file) = file {
            if let Some(name) = file.store_name {
                config.store_name = name;
            }
            if let Some(rate) = file.tax_rate {
                config.tax_rate = parse_tax_rate(rate, "tax_rate")?;
            }
            if let Some(ms) = file.prep_delay_ms {
                config.prep_delay = Duration::from_millis(ms);
            }
            if let Some(filter) = file.log_filter {
                config.log_filter = filter;
            }
        }

        if let Some(name) = env(STORE_NAME_ENV) {
            config.store_name = name;
        }

        if let Some(raw) = env(TAX_RATE_ENV) {
            let rate = raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidValue(TAX_RATE_ENV.to_string()))?;
            config.tax_rate = parse_tax_rate(rate, TAX_RATE_ENV)?;
        }

        if let Some(raw) = env(PREP_DELAY_ENV) {
            let ms = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue(PREP_DELAY_ENV.to_string()))?;
            config.prep_delay = Duration::from_millis(ms);
        }

        if let Some(filter) = env(LOG_ENV) {
            config.log_filter = filter;
        }

        debug!(?config, "Configuration resolved");
        Ok(config)
    }
}

fn parse_tax_rate(percentage: f64, field: &str) -> Result<TaxRate, ConfigError> {
    if !percentage.is_finite() || percentage < 0.0 {
        return Err(ConfigError::InvalidValue(field.to_string()));
    }

    let rate = TaxRate::from_percentage(percentage);
    validate_tax_rate_bps(rate.bps())
        .map_err(|_| ConfigError::InvalidValue(field.to_string()))?;
    Ok(rate)
}

/// Platform config location of `terminal.toml`.
fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("cl", "foodexpress", "terminal")
        .map(|dirs| dirs.config_dir().join("terminal.toml"))
}

// =============================================================================
// Unit Tests
// =============================================================================
