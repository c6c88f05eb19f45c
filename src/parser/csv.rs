//! CSV file parser

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::config::Config;
use crate::error::{CompareError, Result};
use crate::model::{Table, TableRole};

/// Parser for delimited text files
#[derive(Debug, Clone, Copy)]
pub struct CsvParser {
    delimiter: u8,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvParser {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.delimiter)
    }

    /// Read a whole file into a Table
    pub fn parse(&self, path: &Path, role: TableRole) -> Result<Table> {
        let file = File::open(path).map_err(|e| CompareError::io(path, e))?;
        let table = Table::from_reader(BufReader::new(file), self.delimiter)
            .map_err(|e| CompareError::csv(path, e))?;

        log::debug!(
            "Read {} file {}: {} lines, {} records",
            role,
            path.display(),
            table.line_count,
            table.row_count()
        );

        Ok(table)
    }
}
