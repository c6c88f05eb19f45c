//! Configuration handling for truthdiff

use std::path::PathBuf;

/// Output format for comparison results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

/// Configuration for a comparison run
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the ground truth file
    pub truth_file: PathBuf,
    /// Path to the computed file under test
    pub test_file: PathBuf,
    /// Output format
    pub output_format: OutputFormat,
    /// Field delimiter shared by both files
    pub delimiter: u8,
    /// Only print the summary block
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            truth_file: PathBuf::new(),
            test_file: PathBuf::new(),
            output_format: OutputFormat::default(),
            delimiter: b',',
            quiet: false,
        }
    }
}

impl Config {
    /// Create a new Config with file paths
    pub fn new(truth_file: impl Into<PathBuf>, test_file: impl Into<PathBuf>) -> Self {
        Self {
            truth_file: truth_file.into(),
            test_file: test_file.into(),
            ..Default::default()
        }
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable summary-only output
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = Config::new("truth.csv", "test.csv")
            .with_delimiter(b';')
            .with_quiet(true);
        assert_eq!(config.truth_file, PathBuf::from("truth.csv"));
        assert_eq!(config.delimiter, b';');
        assert!(config.quiet);
        assert_eq!(config.output_format, OutputFormat::Terminal);
    }
}
