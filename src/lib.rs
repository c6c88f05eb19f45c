//! truthdiff - Cell-by-cell comparison of integer tables
//!
//! Compares a computed CSV table against a ground-truth table: validates that both
//! share the same shape, records every cell whose integer value differs, and
//! summarises the match rate per row and per value.

pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;

pub use config::Config;
pub use diff::{compare_files, Comparator, Comparison, Summary};
pub use error::{CompareError, Result};
pub use model::{DifferenceReport, Table};
