//! Error types for the gen-config CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which input file an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Template,
    Csv,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Template => write!(f, "Template"),
            InputKind::Csv => write!(f, "Input CSV"),
        }
    }
}

/// Main error type for gen-config operations.
///
/// Each variant maps to an exit code in [`exit_codes`].
#[derive(Error, Debug)]
pub enum GenError {
    /// Invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// The template or CSV path does not exist.
    #[error("{kind} file not found at {}", path.display())]
    MissingFile { kind: InputKind, path: PathBuf },

    /// The template or CSV path exists but could not be read.
    #[error("failed to read {} file '{}': {source}", kind.to_string().to_lowercase(), path.display())]
    Unreadable {
        kind: InputKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV data could not be parsed.
    #[error("failed to parse CSV '{}': {message}", path.display())]
    Csv { path: PathBuf, message: String },

    /// A row's first column cannot be used as an output filename.
    #[error("Could not determine filename from CSV row {row}: {reason}")]
    FilenameDerivation { row: usize, reason: String },

    /// Creating the output directory or writing a file failed.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rows were skipped under the `skip` policy.
    #[error("{failed} of {total} row(s) could not be generated")]
    RowsFailed { failed: usize, total: usize },
}

impl GenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GenError::UserError(_) => exit_codes::USER_ERROR,
            GenError::MissingFile { .. } => exit_codes::INPUT_FAILURE,
            GenError::Unreadable { .. } => exit_codes::INPUT_FAILURE,
            GenError::Csv { .. } => exit_codes::INPUT_FAILURE,
            GenError::FilenameDerivation { .. } => exit_codes::INPUT_FAILURE,
            GenError::Write { .. } => exit_codes::WRITE_FAILURE,
            GenError::RowsFailed { .. } => exit_codes::PARTIAL_FAILURE,
        }
    }
}

/// Result type alias for gen-config operations.
pub type Result<T> = std::result::Result<T, GenError>;
