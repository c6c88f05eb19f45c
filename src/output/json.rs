//! JSON output format

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::diff::{Comparison, Summary};
use crate::model::DifferenceReport;

use super::OutputFormatter;

/// Pretty-printed JSON output formatter
pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonComparisonOutput<'a> {
    truth_file: String,
    test_file: String,
    differences: &'a DifferenceReport,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    total_rows: usize,
    total_columns: usize,
    rows_different: usize,
    row_match_percent: f64,
    total_differences: usize,
    total_values: usize,
    value_match_percent: f64,
}

impl From<Summary> for JsonSummary {
    fn from(summary: Summary) -> Self {
        Self {
            total_rows: summary.total_rows,
            total_columns: summary.total_columns,
            rows_different: summary.rows_different,
            row_match_percent: round2(summary.row_match_percent()),
            total_differences: summary.total_differences,
            total_values: summary.total_values(),
            value_match_percent: round2(summary.value_match_percent()),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl OutputFormatter for JsonOutput {
    fn render(
        &self,
        comparison: &Comparison,
        truth_path: &Path,
        test_path: &Path,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let output = JsonComparisonOutput {
            truth_file: truth_path.display().to_string(),
            test_file: test_path.display().to_string(),
            differences: &comparison.report,
            summary: comparison.summary().into(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;

        Ok(())
    }
}
