//! Merge progress reporting.

use game_catalog_core::Record;

/// Trait for receiving per-row merge outcomes.
pub trait MergeProgress {
    /// Called after a row has been appended to the catalog.
    fn on_added(&self, line: u64, record: &Record);

    /// Called when a row's name already exists in the catalog or earlier in
    /// the same CSV. `raw_name` is the cell as read.
    fn on_duplicate(&self, line: u64, raw_name: &str);

    /// Called when a row has a blank name.
    fn on_invalid(&self, line: u64);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl MergeProgress for SilentProgress {
    fn on_added(&self, _line: u64, _record: &Record) {}
    fn on_duplicate(&self, _line: u64, _raw_name: &str) {}
    fn on_invalid(&self, _line: u64) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl MergeProgress for LogProgress {
    fn on_added(&self, _line: u64, record: &Record) {
        log::info!("[add] id={}  name={}", record.id, record.name);
    }

    fn on_duplicate(&self, line: u64, raw_name: &str) {
        log::info!("[skip] line {line}: duplicate game (by name): {raw_name}");
    }

    fn on_invalid(&self, line: u64) {
        log::warn!("[warn] line {line}: name is blank, skipped");
    }
}
