//! Game catalog data model and cell normalization.
//!
//! This crate defines the records persisted in the catalog JSON file and the
//! text cleanup applied to spreadsheet cells before they become records. It
//! has no I/O of its own; `game-catalog-import` does the reading and writing.

pub mod clean;
pub mod types;

pub use clean::{clean_cell, normalize_name};
pub use types::*;
