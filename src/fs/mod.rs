//! Filesystem helpers for writing generated files.
//!
//! Writes are plain create-or-truncate; an existing file at the target path
//! is overwritten without warning.

use crate::error::{GenError, Result};
use std::fs;
use std::path::Path;

/// Create a directory and any missing parents.
///
/// Succeeds if the directory already exists.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    fs::create_dir_all(path).map_err(|e| GenError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), "output directory ready");
    Ok(())
}

/// Write text to a file, replacing any existing content.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    fs::write(path, content).map_err(|e| GenError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
