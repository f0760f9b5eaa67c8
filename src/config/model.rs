//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Settings for a generation run.
///
/// Mirrors the optional `--config` YAML file. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether a failing row stops the run or is skipped.
    #[serde(default)]
    pub on_row_error: RowErrorPolicy,

    /// Extension (without leading dot) appended to dot-less filenames.
    #[serde(default = "default_extension")]
    pub default_extension: String,

    /// CSV field delimiter.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            on_row_error: RowErrorPolicy::default(),
            default_extension: default_extension(),
            delimiter: default_delimiter(),
        }
    }
}
