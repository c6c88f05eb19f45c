//! Cell-level comparison logic

use crate::error::{CompareError, Result};
use crate::model::{CellDifference, DifferenceReport, Table, TableRole};

/// Parse a field as a base-10 integer, ignoring surrounding whitespace
pub fn parse_cell(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

/// Walk both tables in lockstep and record every cell whose integer values differ.
///
/// Pairing is strictly positional and stops at the shorter sequence. Rows whose raw
/// text is identical are skipped without parsing.
pub fn diff_tables(truth: &Table, test: &Table) -> Result<DifferenceReport> {
    let mut report = DifferenceReport::new();

    for (row_idx, (truth_row, test_row)) in truth.rows.iter().zip(&test.rows).enumerate() {
        if truth_row.cells == test_row.cells {
            continue;
        }

        for (col_idx, (truth_cell, test_cell)) in
            truth_row.cells.iter().zip(&test_row.cells).enumerate()
        {
            let truth_value = parse_cell(truth_cell).ok_or_else(|| {
                CompareError::parse(TableRole::Truth, row_idx, col_idx, truth_cell.as_str())
            })?;
            let test_value = parse_cell(test_cell).ok_or_else(|| {
                CompareError::parse(TableRole::Test, row_idx, col_idx, test_cell.as_str())
            })?;

            if truth_value != test_value {
                report.insert(row_idx, col_idx, CellDifference::new(test_value, truth_value));
            }
        }
    }

    log::debug!(
        "Found {} differing cells across {} rows",
        report.total_differences(),
        report.rows_different()
    );

    Ok(report)
}
