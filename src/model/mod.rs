//! Data model for tables and comparison results

mod report;
mod table;

pub use report::{CellDifference, DifferenceReport};
pub use table::{Dimensions, Row, Table, TableRole};
