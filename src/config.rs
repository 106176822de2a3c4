use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::spelling::{CatalogSource, FieldSet, SpellConfig};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub spelling: SpellConfig,
    pub logging: LoggingConfig,
    pub tui: TuiConfig,
}

/// Catalog files feeding the vocabulary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// CSV exports, read in order and unioned.
    pub sources: Vec<PathBuf>,
    /// Columns taken from every source.
    pub field_set: FieldSet,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Input poll interval in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 100 }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter for the log file, overridden by `RUST_LOG`.
    pub level: String,
    /// Filter for CLI output on stderr.
    pub stderr_level: String,
    /// Override the default log directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            stderr_level: "warn".to_string(),
            log_dir: None,
        }
    }
}

impl CatalogConfig {
    pub fn catalog_sources(&self) -> Vec<CatalogSource> {
        self.sources
            .iter()
            .map(|path| CatalogSource::new(path, self.field_set))
            .collect()
    }
}

/// Where the active configuration came from.
///
/// Config is read before the log subscriber exists, so loading records the
/// outcome here and the caller logs it once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    File(PathBuf),
    Missing(PathBuf),
    Invalid { path: PathBuf, error: String },
}

impl ConfigOrigin {
    pub fn log(&self) {
        match self {
            ConfigOrigin::File(path) => log::info!("Loaded config from {}", path.display()),
            ConfigOrigin::Missing(path) => {
                log::debug!("No config file at {}; using defaults", path.display())
            }
            ConfigOrigin::Invalid { path, error } => log::warn!(
                "Failed to parse config at {}: {}; using defaults",
                path.display(),
                error
            ),
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/catalog-speller/config.toml`.
    /// Falls back to `Default` if the file is missing or unparseable.
    pub fn load() -> (Self, ConfigOrigin) {
        Self::load_or_default(&Self::config_path())
    }

    fn load_or_default(path: &Path) -> (Self, ConfigOrigin) {
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => (config, ConfigOrigin::File(path.to_path_buf())),
                Err(e) => (
                    Self::default(),
                    ConfigOrigin::Invalid {
                        path: path.to_path_buf(),
                        error: format!("{e:#}"),
                    },
                ),
            },
            Err(_) => (Self::default(), ConfigOrigin::Missing(path.to_path_buf())),
        }
    }

    /// Load an explicitly requested file. Unlike [`AppConfig::load`], any
    /// failure is an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.spelling.validate()?;
        Ok(config)
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("catalog-speller").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
