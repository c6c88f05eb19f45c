//! Comparison engine: validate, diff, summarize

pub mod cell_diff;
pub mod validate;

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::model::{Dimensions, DifferenceReport, Table, TableRole};
use crate::parser::{require_file, CsvParser};

pub use cell_diff::{diff_tables, parse_cell};
pub use validate::{validate, validate_column_count, validate_row_count};

/// Aggregate match statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_rows: usize,
    pub total_columns: usize,
    pub rows_different: usize,
    pub total_differences: usize,
}

impl Summary {
    pub fn new(dimensions: Dimensions, report: &DifferenceReport) -> Self {
        Self {
            total_rows: dimensions.rows,
            total_columns: dimensions.columns,
            rows_different: report.rows_different(),
            total_differences: report.total_differences(),
        }
    }

    pub fn total_values(&self) -> usize {
        self.total_rows * self.total_columns
    }

    /// Share of rows with no differing cell, as a percentage
    pub fn row_match_percent(&self) -> f64 {
        match_percent(self.total_rows, self.rows_different)
    }

    /// Share of cells that matched, as a percentage
    pub fn value_match_percent(&self) -> f64 {
        match_percent(self.total_values(), self.total_differences)
    }
}

// An empty comparison has nothing to disagree on.
fn match_percent(total: usize, different: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    total.saturating_sub(different) as f64 / total as f64 * 100.0
}

/// Result of comparing a truth table with a test table
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub dimensions: Dimensions,
    pub report: DifferenceReport,
}

impl Comparison {
    pub fn summary(&self) -> Summary {
        Summary::new(self.dimensions, &self.report)
    }
}

/// Main comparison engine
pub struct Comparator {
    config: Config,
}

impl Comparator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Compare two in-memory tables
    pub fn compare(&self, truth: &Table, test: &Table) -> Result<Comparison> {
        let dimensions = validate(truth, test)?;
        let report = diff_tables(truth, test)?;
        Ok(Comparison { dimensions, report })
    }

    /// Check, read and compare the configured files.
    ///
    /// Both paths are checked before either is opened, truth first.
    pub fn compare_files(&self) -> Result<Comparison> {
        require_file(TableRole::Truth, &self.config.truth_file)?;
        require_file(TableRole::Test, &self.config.test_file)?;

        let parser = CsvParser::from_config(&self.config);
        let truth = parser.parse(&self.config.truth_file, TableRole::Truth)?;
        let test = parser.parse(&self.config.test_file, TableRole::Test)?;

        self.compare(&truth, &test)
    }
}

/// Convenience function to compare the files named in `config`
pub fn compare_files(config: &Config) -> Result<Comparison> {
    Comparator::new(config.clone()).compare_files()
}
