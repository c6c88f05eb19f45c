//! Structural validation run before any values are compared

use crate::error::{CompareError, Result};
use crate::model::{Dimensions, Table, TableRole};

/// Check that both tables have the same physical line count
pub fn validate_row_count(truth: &Table, test: &Table) -> Result<usize> {
    if truth.line_count != test.line_count {
        return Err(CompareError::RowCountMismatch {
            truth: truth.line_count,
            test: test.line_count,
        });
    }
    Ok(truth.line_count)
}

/// Check that each table is rectangular and that both share a column count.
///
/// The truth table is scanned fully before the test table.
pub fn validate_column_count(truth: &Table, test: &Table) -> Result<usize> {
    let truth_columns = consistent_column_count(truth, TableRole::Truth)?;
    let test_columns = consistent_column_count(test, TableRole::Test)?;

    if truth_columns != test_columns {
        return Err(CompareError::ColumnCountMismatch {
            truth: truth_columns,
            test: test_columns,
        });
    }
    Ok(truth_columns)
}

/// Run both checks, columns first, and return the shared shape
pub fn validate(truth: &Table, test: &Table) -> Result<Dimensions> {
    let columns = validate_column_count(truth, test)?;
    let rows = validate_row_count(truth, test)?;
    log::debug!("Validated dimensions: {} rows x {} columns", rows, columns);
    Ok(Dimensions::new(rows, columns))
}

/// Width of the first non-blank record; any record of another width, blank lines
/// included, is an error reported at its starting line.
fn consistent_column_count(table: &Table, role: TableRole) -> Result<usize> {
    let expected = table.column_count();

    match table.rows.iter().find(|row| row.len() != expected) {
        Some(row) => Err(CompareError::InconsistentColumns {
            role,
            line: row.source_line,
            expected,
            found: row.len(),
        }),
        None => Ok(expected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(lines: &[&str]) -> Table {
        Table::from_lines(lines).unwrap()
    }

    #[test]
    fn test_matching_dimensions() {
        let truth = table(&["1,2,3", "4,5,6"]);
        let test = table(&["1,2,3", "4,9,6"]);
        assert_eq!(validate(&truth, &test).unwrap(), Dimensions::new(2, 3));
    }

    #[test]
    fn test_row_count_mismatch() {
        let truth = table(&["1", "2", "3", "4", "5"]);
        let test = table(&["1", "2", "3", "4"]);
        let err = validate_row_count(&truth, &test).unwrap_err();
        assert!(matches!(err, CompareError::RowCountMismatch { truth: 5, test: 4 }));
    }

    #[test]
    fn test_column_count_mismatch() {
        let truth = table(&["1,2,3", "4,5,6"]);
        let test = table(&["1,2,3,4", "5,6,7,8"]);
        let err = validate_column_count(&truth, &test).unwrap_err();
        assert!(matches!(err, CompareError::ColumnCountMismatch { truth: 3, test: 4 }));
    }

    #[test]
    fn test_inconsistent_truth_reported_before_test() {
        let truth = table(&["1,2,3", "4,5"]);
        let test = table(&["1,2", "4,5,6"]);
        let err = validate_column_count(&truth, &test).unwrap_err();
        match err {
            CompareError::InconsistentColumns {
                role,
                line,
                expected,
                found,
            } => {
                assert_eq!(role, TableRole::Truth);
                assert_eq!(line, 2);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_inconsistent_test_file() {
        let truth = table(&["1,2", "3,4"]);
        let test = table(&["1,2", "3,4", "5"]);
        let err = validate_column_count(&truth, &test).unwrap_err();
        assert!(matches!(
            err,
            CompareError::InconsistentColumns {
                role: TableRole::Test,
                line: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_column_errors_precede_row_errors() {
        let truth = table(&["1,2,3", "4,5,6", "7,8,9"]);
        let test = table(&["1,2", "3,4"]);
        let err = validate(&truth, &test).unwrap_err();
        assert!(matches!(err, CompareError::ColumnCountMismatch { .. }));
    }

    #[test]
    fn test_blank_line_is_inconsistent() {
        // Same line count on both sides, so only the column check can catch it
        let truth = Table::from_reader("1,2\n\n3,4\n".as_bytes(), b',').unwrap();
        let test = table(&["1,2", "3,4", "5,6"]);
        assert_eq!(truth.line_count, test.line_count);

        let err = validate(&truth, &test).unwrap_err();
        assert!(matches!(
            err,
            CompareError::InconsistentColumns {
                role: TableRole::Truth,
                line: 2,
                expected: 2,
                found: 0,
            }
        ));
    }

    #[test]
    fn test_leading_blank_line_is_inconsistent() {
        let truth = table(&["1,2", "3,4"]);
        let test = Table::from_reader("\n1,2\n".as_bytes(), b',').unwrap();
        let err = validate(&truth, &test).unwrap_err();
        assert!(matches!(
            err,
            CompareError::InconsistentColumns {
                role: TableRole::Test,
                line: 1,
                found: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_all_blank_tables_are_consistent() {
        let truth = Table::from_reader("\n\n".as_bytes(), b',').unwrap();
        let test = Table::from_reader("\n\n".as_bytes(), b',').unwrap();
        assert_eq!(validate(&truth, &test).unwrap(), Dimensions::new(2, 0));
    }

    #[test]
    fn test_empty_tables() {
        let truth = table(&[]);
        let test = table(&[]);
        assert_eq!(validate(&truth, &test).unwrap(), Dimensions::new(0, 0));
    }
}
