//! Table and Row data structures

use std::io::Read;

use serde::Serialize;

/// Which side of the comparison a table came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableRole {
    Truth,
    Test,
}

impl std::fmt::Display for TableRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableRole::Truth => write!(f, "Truth"),
            TableRole::Test => write!(f, "Test"),
        }
    }
}

/// Row and column counts shared by both tables once validated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }
}

/// A single record with its raw, unparsed fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Field text in column order
    pub cells: Vec<String>,
    /// Line in the source file where the record starts (1-indexed)
    pub source_line: usize,
}

impl Row {
    pub fn new(cells: Vec<String>, source_line: usize) -> Self {
        Self { cells, source_line }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A delimited table read in a single pass
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Records in file order; a blank line is kept as a row with no cells
    pub rows: Vec<Row>,
    /// Physical lines in the source, blank lines included
    pub line_count: usize,
}

impl Table {
    /// Read a table from delimited text.
    ///
    /// Line count and records come from the same buffer, so a file is only read once.
    /// `\r\n` and a lone `\r` are read as `\n`.
    pub fn from_reader<R: Read>(mut reader: R, delimiter: u8) -> Result<Self, csv::Error> {
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw)?;

        let buffer = normalize_newlines(&raw);
        let line_count = count_lines(&buffer);
        let terminated = buffer.last() == Some(&b'\n');

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(buffer.as_slice());

        // The csv reader drops blank lines, so pair each record with the line the
        // reader stopped on and recover the skipped lines from the gaps.
        let mut records = Vec::new();
        let mut record = csv::StringRecord::new();
        while csv_reader.read_record(&mut record)? {
            records.push((record.clone(), csv_reader.position().line()));
        }
        let end_line = csv_reader.position().line();

        let mut rows = Vec::new();
        let mut line = 1;
        let last = records.len();
        for (idx, (record, next_line)) in records.into_iter().enumerate() {
            let embedded: u64 = record
                .iter()
                .map(|field| field.bytes().filter(|&b| b == b'\n').count() as u64)
                .sum();
            let own = embedded + u64::from(terminated || idx + 1 < last);
            let blanks = next_line.saturating_sub(line).saturating_sub(own);

            push_blank_rows(&mut rows, line, blanks);
            line += blanks;
            rows.push(Row::new(record.iter().map(String::from).collect(), line as usize));
            line = next_line;
        }
        push_blank_rows(&mut rows, line, end_line.saturating_sub(line));

        Ok(Self { rows, line_count })
    }

    /// Build a table from in-memory lines, one record per entry
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, csv::Error> {
        let mut text = String::new();
        for line in lines {
            text.push_str(line.as_ref());
            text.push('\n');
        }
        Self::from_reader(text.as_bytes(), b',')
    }

    /// Number of records, blank lines included
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Field count of the first non-blank record, or 0 when there is none
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Row::len)
            .find(|&len| len > 0)
            .unwrap_or(0)
    }
}

fn push_blank_rows(rows: &mut Vec<Row>, first_line: u64, count: u64) {
    for line in first_line..first_line + count {
        rows.push(Row::new(Vec::new(), line as usize));
    }
}

/// Rewrite `\r\n` and lone `\r` terminators as `\n`
fn normalize_newlines(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut iter = bytes.iter().peekable();

    while let Some(&b) = iter.next() {
        if b == b'\r' {
            if iter.peek() == Some(&&b'\n') {
                iter.next();
            }
            out.push(b'\n');
        } else {
            out.push(b);
        }
    }
    out
}

/// Count physical lines: every `\n` ends a line, and trailing text without a
/// terminator is a line too.
fn count_lines(bytes: &[u8]) -> usize {
    let terminators = bytes.iter().filter(|&&b| b == b'\n').count();
    let pending = bytes.last().is_some_and(|&b| b != b'\n');
    terminators + usize::from(pending)
}
