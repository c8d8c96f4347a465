//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`INVGEN_OUTPUT__INVENTORY=hosts.yaml`, ...)
//! 3. Config file (`--config FILE`, else [`AppConfig::config_path`] if present)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use invgen_core::domain::DEFAULT_PLAYBOOK_FILE;

use crate::error::{CliError, CliResult};

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "INVGEN";

/// `INVGEN_<SECTION>__<KEY>` environment source.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Log file settings.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Inventory path used when `--output` is not given.
    pub inventory: PathBuf,
    /// Where the playbook is written.
    pub playbook: PathBuf,
    pub no_color: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write the rotating log file at all.
    pub enabled: bool,
    pub file: PathBuf,
    /// Size at which the log file is rotated.
    pub max_bytes: u64,
    /// Number of rotated files kept (`inventory.log.1` ..).
    pub max_files: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            inventory: PathBuf::from("inventory.yaml"),
            playbook: PathBuf::from(DEFAULT_PLAYBOOK_FILE),
            no_color: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: PathBuf::from("inventory.log"),
            max_bytes: 10_000_000,
            max_files: 50,
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `config_file` must exist; the default location is used
    /// only if it does.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        let file = match config_file {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::from(Self::config_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        Self::build(file, environment())
    }

    fn build(file: File<config::FileSourceFile, FileFormat>, env: Environment) -> CliResult<Self> {
        Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .map_err(|e| CliError::ConfigError {
                message: e.to_string(),
                source: Some(Box::new(e)),
            })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.invgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "invgen", "invgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".invgen.toml"))
    }
}
