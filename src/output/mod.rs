//! Output formatting for comparison results

mod json;
mod terminal;

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::config::OutputFormat;
use crate::diff::Comparison;

pub use json::JsonOutput;
pub use terminal::TerminalOutput;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render a comparison to a writer
    fn render(
        &self,
        comparison: &Comparison,
        truth_path: &Path,
        test_path: &Path,
        writer: &mut dyn Write,
    ) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type
    pub fn create(format: OutputFormat, quiet: bool) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Terminal => Box::new(TerminalOutput::new().with_details(!quiet)),
            OutputFormat::Json => Box::new(JsonOutput::new()),
        }
    }
}

/// Render a comparison to stdout
pub fn render_to_stdout(
    comparison: &Comparison,
    truth_path: &Path,
    test_path: &Path,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let formatter = OutputFactory::create(format, quiet);
    let mut stdout = std::io::stdout().lock();
    formatter.render(comparison, truth_path, test_path, &mut stdout)
}
