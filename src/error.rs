//! Error types for table comparison

use std::path::PathBuf;

use thiserror::Error;

use crate::model::TableRole;

pub type Result<T> = std::result::Result<T, CompareError>;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("{role} file {} does not exist. Check path and try again.", .path.display())]
    FileNotFound { role: TableRole, path: PathBuf },

    #[error(
        "Test file number of rows ({test}) does not match truth file number of rows ({truth})"
    )]
    RowCountMismatch { truth: usize, test: usize },

    #[error(
        "{role} file has inconsistent numbers of columns. Found {found} on line {line}, expected {expected}"
    )]
    InconsistentColumns {
        role: TableRole,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error(
        "Test file number of columns ({test}) does not match truth file number of columns ({truth})"
    )]
    ColumnCountMismatch { truth: usize, test: usize },

    #[error("{role} file row {row}, column {column}: '{value}' is not an integer")]
    Parse {
        role: TableRole,
        row: usize,
        column: usize,
        value: String,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CompareError {
    pub fn file_not_found(role: TableRole, path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound {
            role,
            path: path.into(),
        }
    }

    pub fn parse(role: TableRole, row: usize, column: usize, value: impl Into<String>) -> Self {
        Self::Parse {
            role,
            row,
            column,
            value: value.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_counts() {
        let err = CompareError::ColumnCountMismatch { truth: 3, test: 4 };
        let msg = err.to_string();
        assert!(msg.contains("(4)"));
        assert!(msg.contains("(3)"));
    }

    #[test]
    fn test_file_not_found_names_path() {
        let err = CompareError::file_not_found(TableRole::Truth, "data/missing.csv");
        assert_eq!(
            err.to_string(),
            "Truth file data/missing.csv does not exist. Check path and try again."
        );
    }

    #[test]
    fn test_io_error_names_path() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = CompareError::io("data/locked.csv", source);
        assert_eq!(err.to_string(), "Failed to open data/locked.csv: denied");
    }

    #[test]
    fn test_parse_error_context() {
        let err = CompareError::parse(TableRole::Test, 2, 1, "abc");
        assert_eq!(
            err.to_string(),
            "Test file row 2, column 1: 'abc' is not an integer"
        );
    }
}
