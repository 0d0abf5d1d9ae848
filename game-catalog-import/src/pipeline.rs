//! End-to-end import: load catalog, read CSV, merge, write.

use std::path::PathBuf;

use crate::csv_source::CsvSource;
use crate::error::ImportError;
use crate::merge::{CatalogMerge, MergeStats};
use crate::progress::MergeProgress;
use crate::store::{load_catalog, write_catalog};

/// Options for [`run_import`].
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    pub csv_path: PathBuf,
    pub json_path: PathBuf,
    /// Encoding label tried before the fallback list.
    pub encoding: Option<String>,
    /// Explicit id for the first new record.
    pub start_id: Option<i64>,
    /// Run everything but leave the catalog file untouched.
    pub dry_run: bool,
}

/// Result of a completed import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub stats: MergeStats,
    /// Number of entries in the catalog after the merge.
    pub total: usize,
    /// Number of entries before the merge.
    pub existing: usize,
    /// Max id found in the existing catalog.
    pub max_id: i64,
    /// Id given to the first new record (whether or not any were added).
    pub first_id: i64,
    /// Encoding label that decoded the CSV.
    pub encoding: String,
    /// Whether the catalog file existed before this run.
    pub catalog_existed: bool,
    /// Whether the catalog was written (false on dry runs).
    pub written: bool,
}

impl ImportReport {
    /// Ids assigned in this run, if any.
    pub fn assigned_ids(&self) -> Option<(i64, i64)> {
        if self.stats.added == 0 {
            return None;
        }
        Some((self.first_id, self.first_id + (self.stats.added as i64 - 1)))
    }
}

/// Run a full import.
///
/// Nothing is written unless every row was read successfully; a start id
/// that does not exceed the existing max id fails before the CSV is opened.
pub fn run_import(
    options: &ImportOptions,
    progress: &dyn MergeProgress,
) -> Result<ImportReport, ImportError> {
    log::info!("[start] reading CSV: {}", options.csv_path.display());

    let loaded = load_catalog(&options.json_path)?;
    if !loaded.existed {
        log::info!(
            "[info] target JSON does not exist, it will be created: {}",
            options.json_path.display()
        );
    }
    let existing = loaded.entries.len();
    let max_id = loaded.max_id;
    let catalog_existed = loaded.existed;
    log::info!("[info] existing games: {existing}, current max id: {max_id}");

    let mut merge = CatalogMerge::new(loaded, options.start_id)?;
    log::info!("[info] first new id: {}", merge.first_id());

    let source = CsvSource::open(&options.csv_path, options.encoding.as_deref())?;
    let encoding = source.encoding().label().to_string();
    log::info!("[info] reading CSV as {encoding}");

    let stats = merge.merge_rows(source.rows(), progress)?;
    let first_id = merge.first_id();
    let entries = merge.into_entries();

    let written = if options.dry_run {
        log::info!(
            "[dry-run] not writing {} ({} new record(s))",
            options.json_path.display(),
            stats.added
        );
        false
    } else {
        write_catalog(&options.json_path, &entries)?;
        log::info!("[done] updated: {}", options.json_path.display());
        true
    };

    Ok(ImportReport {
        stats,
        total: entries.len(),
        existing,
        max_id,
        first_id,
        encoding,
        catalog_existed,
        written,
    })
}
