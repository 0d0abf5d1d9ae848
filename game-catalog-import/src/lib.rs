//! Import CSV game lists into the catalog JSON file.
//!
//! This crate owns the whole ETL path: decoding the CSV with an encoding
//! fallback chain, loading the existing catalog, deduplicating and assigning
//! ids, and writing the merged catalog back.

pub mod csv_source;
pub mod encoding;
pub mod error;
pub mod merge;
pub mod pipeline;
pub mod progress;
pub mod store;

pub use csv_source::{CsvRow, CsvSource, Rows};
pub use encoding::{FALLBACK_ENCODINGS, TextEncoding};
pub use error::ImportError;
pub use merge::{CatalogMerge, MergeStats, RowOutcome, build_record};
pub use pipeline::{ImportOptions, ImportReport, run_import};
pub use progress::{LogProgress, MergeProgress, SilentProgress};
pub use store::{LoadedCatalog, load_catalog, write_catalog};
