//! Config loading, validation, and override operations.

use super::model::Config;
use super::types::RowErrorPolicy;
use crate::cli::Cli;
use crate::error::{GenError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(GenError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            GenError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| GenError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Build the effective config for a CLI invocation.
    ///
    /// Starts from the `--config` file (or defaults) and applies flag overrides.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_overrides(cli)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of file or default values.
    pub fn apply_overrides(&mut self, cli: &Cli) -> Result<()> {
        if let Some(policy) = &cli.on_row_error {
            self.on_row_error = RowErrorPolicy::from_str(policy).ok_or_else(|| {
                GenError::UserError(format!(
                    "invalid --on-row-error '{}': expected 'skip' or 'abort'",
                    policy
                ))
            })?;
        }
        if let Some(ext) = &cli.default_extension {
            self.default_extension = ext.clone();
        }
        if let Some(delimiter) = cli.delimiter {
            self.delimiter = delimiter;
        }
        Ok(())
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `default_extension` must be non-empty, without leading dot or path separators
    /// - `delimiter` must be a single ASCII byte that is not a quote or line break
    pub fn validate(&self) -> Result<()> {
        let ext = &self.default_extension;
        if ext.is_empty() {
            return Err(GenError::UserError(
                "config validation failed: default_extension must be non-empty".to_string(),
            ));
        }
        if ext.starts_with('.') {
            return Err(GenError::UserError(format!(
                "config validation failed: default_extension must not have a leading dot (found '{}'). Use '{}' instead.",
                ext,
                ext.trim_start_matches('.')
            )));
        }
        if ext.contains(['/', '\\']) {
            return Err(GenError::UserError(format!(
                "config validation failed: default_extension '{}' must not contain path separators",
                ext
            )));
        }

        if !self.delimiter.is_ascii() || matches!(self.delimiter, '"' | '\n' | '\r') {
            return Err(GenError::UserError(format!(
                "config validation failed: delimiter {:?} must be a single ASCII character other than a quote or line break",
                self.delimiter
            )));
        }

        Ok(())
    }

    /// The delimiter as the byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> u8 {
        // validate() guarantees an ASCII delimiter.
        self.delimiter as u8
    }
}
