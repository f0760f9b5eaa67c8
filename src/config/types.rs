//! Configuration types and defaults for gen-config.

use serde::{Deserialize, Serialize};

/// What to do when a single row cannot be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RowErrorPolicy {
    /// Report the row and continue with the next one (default).
    #[default]
    Skip,
    /// Report the row and stop the run.
    Abort,
}

impl RowErrorPolicy {
    /// Parse a row error policy from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "skip" => Some(Self::Skip),
            "abort" => Some(Self::Abort),
            _ => None,
        }
    }
}

/// Extension appended to filenames without a `.`.
pub fn default_extension() -> String {
    "txt".to_string()
}

pub fn default_delimiter() -> char {
    ','
}
