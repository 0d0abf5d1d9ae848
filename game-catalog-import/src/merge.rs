//! Dedup and id assignment for imported rows.
//!
//! Rows are folded into the loaded catalog in CSV order. A row is dropped if
//! its name is blank or matches (case- and whitespace-insensitively) a name
//! already in the catalog or earlier in the same CSV. Accepted rows get
//! consecutive ids starting after the catalog's max id, or at an explicit
//! start id.

use std::collections::HashSet;

use game_catalog_core::{LaunchMode, Record, clean_cell, normalize_name};
use serde_json::Value;

use crate::csv_source::CsvRow;
use crate::error::ImportError;
use crate::progress::MergeProgress;
use crate::store::LoadedCatalog;

/// Per-run counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub added: usize,
    pub skipped_duplicate: usize,
    pub skipped_invalid: usize,
}

/// What happened to a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// Appended with this id.
    Added(i64),
    /// Name already present; row dropped.
    Duplicate,
    /// Blank name; row dropped.
    Invalid,
}

/// In-memory merge state for one run.
#[derive(Debug)]
pub struct CatalogMerge {
    entries: Vec<Value>,
    existing_names: HashSet<String>,
    seen_in_csv: HashSet<String>,
    first_id: i64,
    /// `None` once `i64::MAX` has been handed out.
    next_id: Option<i64>,
    stats: MergeStats,
}

impl CatalogMerge {
    /// Start a merge on top of `loaded`.
    ///
    /// `start_id`, when given, must be greater than the catalog's max id.
    pub fn new(loaded: LoadedCatalog, start_id: Option<i64>) -> Result<Self, ImportError> {
        let first_id = match start_id {
            Some(start_id) if start_id <= loaded.max_id => {
                return Err(ImportError::InvalidStartId {
                    start_id,
                    max_id: loaded.max_id,
                });
            }
            Some(start_id) => start_id,
            None => loaded
                .max_id
                .checked_add(1)
                .ok_or(ImportError::IdOverflow {
                    last: loaded.max_id,
                })?,
        };

        Ok(Self {
            entries: loaded.entries,
            existing_names: loaded.names,
            seen_in_csv: HashSet::new(),
            first_id,
            next_id: Some(first_id),
            stats: MergeStats::default(),
        })
    }

    /// Id the first accepted row gets (or got).
    pub fn first_id(&self) -> i64 {
        self.first_id
    }

    /// Id the next accepted row will get, or `None` if the id range is
    /// exhausted.
    pub fn next_id(&self) -> Option<i64> {
        self.next_id
    }

    pub fn stats(&self) -> MergeStats {
        self.stats
    }

    /// Current catalog, existing entries first.
    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Value> {
        self.entries
    }

    /// Fold one row into the catalog.
    pub fn merge_row(
        &mut self,
        line: u64,
        row: &CsvRow,
        progress: &dyn MergeProgress,
    ) -> Result<RowOutcome, ImportError> {
        let raw_name = row.get("name");
        let key = normalize_name(raw_name);

        if key.is_empty() {
            self.stats.skipped_invalid += 1;
            progress.on_invalid(line);
            return Ok(RowOutcome::Invalid);
        }

        if self.existing_names.contains(&key) || self.seen_in_csv.contains(&key) {
            self.stats.skipped_duplicate += 1;
            progress.on_duplicate(line, raw_name.unwrap_or_default());
            return Ok(RowOutcome::Duplicate);
        }

        let id = self
            .next_id
            .ok_or(ImportError::IdOverflow { last: i64::MAX })?;
        let record = build_record(id, row);
        self.entries.push(serde_json::to_value(&record)?);
        self.seen_in_csv.insert(key);
        self.stats.added += 1;
        self.next_id = id.checked_add(1);
        progress.on_added(line, &record);

        Ok(RowOutcome::Added(record.id))
    }

    /// Fold every row in order. Stops at the first reader error.
    pub fn merge_rows<I>(
        &mut self,
        rows: I,
        progress: &dyn MergeProgress,
    ) -> Result<MergeStats, ImportError>
    where
        I: IntoIterator<Item = Result<(u64, CsvRow), ImportError>>,
    {
        for item in rows {
            let (line, row) = item?;
            self.merge_row(line, &row, progress)?;
        }
        Ok(self.stats)
    }
}

/// Build a catalog record from a CSV row, cleaning every cell.
pub fn build_record(id: i64, row: &CsvRow) -> Record {
    let cell = |column: &str| clean_cell(row.get(column));
    Record {
        id,
        name: cell("name"),
        category: cell("category"),
        thumbnail: cell("thumbnail"),
        url: cell("url"),
        description: cell("description"),
        instructions: cell("instructions"),
        launch: LaunchMode::Iframe,
    }
}
