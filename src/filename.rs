//! Output filename derivation.

use crate::error::{GenError, Result};
use crate::rows::Row;

/// Derive the output filename from the row's first column.
///
/// The value must be usable as a single path component. If it contains no
/// `.`, `.{default_extension}` is appended.
pub fn derive_filename(row: &Row, default_extension: &str) -> Result<String> {
    let value = row.first().ok_or_else(|| GenError::FilenameDerivation {
        row: row.number,
        reason: "row has no columns".to_string(),
    })?;

    if value.is_empty() {
        return Err(GenError::FilenameDerivation {
            row: row.number,
            reason: "first column is empty".to_string(),
        });
    }

    if value == "." || value == ".." || value.contains(['/', '\\', '\0']) {
        return Err(GenError::FilenameDerivation {
            row: row.number,
            reason: format!("'{}' is not a valid file name", value),
        });
    }

    if value.contains('.') {
        Ok(value.to_string())
    } else {
        Ok(format!("{}.{}", value, default_extension))
    }
}
