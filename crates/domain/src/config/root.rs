use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::ingest::IngestConfig;
use super::logging::LoggingConfig;
use super::output::OutputConfig;
use crate::ingest::{MalformedLinePolicy, MAX_BATCH_SIZE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub ingest: IngestConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub batch_size: Option<usize>,
    pub output_dir: Option<PathBuf>,
    pub malformed_lines: Option<MalformedLinePolicy>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from an optional TOML file, then apply CLI overrides.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(Path::new(path))?,
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(batch_size) = overrides.batch_size {
            self.ingest.batch_size = batch_size;
        }
        if let Some(dir) = overrides.output_dir {
            self.output.directory = dir;
        }
        if let Some(policy) = overrides.malformed_lines {
            self.ingest.malformed_lines = policy;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ingest.batch_size == 0 || self.ingest.batch_size > MAX_BATCH_SIZE {
            return Err(ConfigError::Validation(format!(
                "batch_size must be between 1 and {}, got {}",
                MAX_BATCH_SIZE, self.ingest.batch_size
            )));
        }

        let extension = self.output.extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(ConfigError::Validation(
                "output extension cannot be empty".to_string(),
            ));
        }

        if !LoggingConfig::is_valid_level(&self.logging.level) {
            return Err(ConfigError::Validation(format!(
                "unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Store extension without a leading dot.
    pub fn store_extension(&self) -> &str {
        self.output.extension.trim_start_matches('.')
    }
}
