//! Sparse record of differing cells

use indexmap::IndexMap;
use serde::Serialize;

/// The two values found at a differing cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellDifference {
    /// Value from the test table
    pub computed: i64,
    /// Value from the truth table
    pub truth: i64,
}

impl CellDifference {
    pub fn new(computed: i64, truth: i64) -> Self {
        Self { computed, truth }
    }
}

/// Row index -> column index -> differing values.
///
/// Only differing cells are stored; a row with no entry matched fully.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DifferenceReport {
    rows: IndexMap<usize, IndexMap<usize, CellDifference>>,
}

impl DifferenceReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a differing cell
    pub fn insert(&mut self, row: usize, column: usize, difference: CellDifference) {
        self.rows.entry(row).or_default().insert(column, difference);
    }

    /// Differing cells of a row, if any
    pub fn row(&self, row: usize) -> Option<&IndexMap<usize, CellDifference>> {
        self.rows.get(&row)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&CellDifference> {
        self.rows.get(&row).and_then(|cells| cells.get(&column))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows with at least one differing cell
    pub fn rows_different(&self) -> usize {
        self.rows.len()
    }

    /// Number of differing cells across all rows
    pub fn total_differences(&self) -> usize {
        self.rows.values().map(IndexMap::len).sum()
    }

    /// Rows in the order they were recorded
    pub fn iter(&self) -> impl Iterator<Item = (usize, &IndexMap<usize, CellDifference>)> {
        self.rows.iter().map(|(row, cells)| (*row, cells))
    }
}
