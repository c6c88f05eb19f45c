//! Parser layer for reading delimited tables

mod csv;

use std::path::Path;

use crate::error::{CompareError, Result};
use crate::model::TableRole;

pub use self::csv::CsvParser;

/// Fail with `FileNotFound` unless `path` is a regular file
pub fn require_file(role: TableRole, path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CompareError::file_not_found(role, path))
    }
}
