//! Plain-text report

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::diff::{Comparison, Summary};
use crate::model::DifferenceReport;

use super::OutputFormatter;

const SUMMARY_TITLE: &str = "Summary:";

/// Per-row diagnostics followed by match statistics
pub struct TerminalOutput {
    show_details: bool,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self { show_details: true }
    }

    /// Toggle the per-row lines; the summary is always written
    pub fn with_details(mut self, show_details: bool) -> Self {
        self.show_details = show_details;
        self
    }

    fn write_differences(&self, report: &DifferenceReport, writer: &mut dyn Write) -> Result<()> {
        for (row, cells) in report.iter() {
            writeln!(writer, "Line {:>4}: {} difference(s)", row, cells.len())?;
            for difference in cells.values() {
                writeln!(
                    writer,
                    "  Actual: {:>3} | Truth: {:>3}",
                    difference.computed, difference.truth
                )?;
            }
        }
        Ok(())
    }

    fn write_summary(&self, summary: &Summary, writer: &mut dyn Write) -> Result<()> {
        writeln!(writer)?;
        writeln!(writer, "{}", SUMMARY_TITLE)?;
        writeln!(writer, "{}", "-".repeat(SUMMARY_TITLE.len()))?;
        writeln!(
            writer,
            "{}/{} rows are different - {:.2}% match",
            summary.rows_different,
            summary.total_rows,
            summary.row_match_percent()
        )?;
        writeln!(
            writer,
            "{}/{} values are different - {:.2}% match",
            summary.total_differences,
            summary.total_values(),
            summary.value_match_percent()
        )?;
        Ok(())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TerminalOutput {
    fn render(
        &self,
        comparison: &Comparison,
        _truth_path: &Path,
        _test_path: &Path,
        writer: &mut dyn Write,
    ) -> Result<()> {
        if self.show_details {
            self.write_differences(&comparison.report, writer)?;
        }
        self.write_summary(&comparison.summary(), writer)?;
        Ok(())
    }
}
