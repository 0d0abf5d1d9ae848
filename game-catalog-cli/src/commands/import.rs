use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_catalog_core::Record;
use game_catalog_import::{ImportOptions, ImportReport, MergeProgress, run_import};

use crate::cli_types::Cli;
use crate::error::CliError;
use crate::settings::{DEFAULT_CSV, DEFAULT_JSON, load_import_settings, resolve_path};

/// Import the CSV into the catalog JSON and print a summary.
pub(crate) fn run_import_command(cli: Cli) -> Result<(), CliError> {
    let settings = load_import_settings(cli.settings.as_deref())?;

    let options = ImportOptions {
        csv_path: resolve_path(cli.csv, settings.csv.as_deref(), DEFAULT_CSV),
        json_path: resolve_path(cli.json, settings.json.as_deref(), DEFAULT_JSON),
        encoding: cli.encoding.or(settings.encoding),
        start_id: cli.start_id,
        dry_run: cli.dry_run,
    };
    log::debug!("Import options: {options:?}");

    let report = run_import(&options, &CliImportProgress)?;
    print_summary(&report);
    Ok(())
}

fn print_summary(report: &ImportReport) {
    log::info!("");
    log::info!(
        "{}",
        "=== Import results ===".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("Added: {}", report.stats.added);
    log::info!("Skipped (duplicate): {}", report.stats.skipped_duplicate);
    log::info!("Skipped (invalid): {}", report.stats.skipped_invalid);
    log::info!("Final total: {}", report.total);
    if let Some((first, last)) = report.assigned_ids() {
        log::info!("New ids: {first}..={last}");
    }
    if !report.written {
        log::info!(
            "{}",
            "Dry run: catalog not written".if_supports_color(Stdout, |t| t.yellow()),
        );
    }
}

/// CLI progress reporter for row outcomes.
struct CliImportProgress;

impl MergeProgress for CliImportProgress {
    fn on_added(&self, _line: u64, record: &Record) {
        log::info!(
            "{} id={}  name={}",
            "[add]".if_supports_color(Stdout, |t| t.green()),
            record.id,
            record.name,
        );
    }

    fn on_duplicate(&self, line: u64, raw_name: &str) {
        log::info!(
            "{} line {}: duplicate game (by name): {}",
            "[skip]".if_supports_color(Stdout, |t| t.dimmed()),
            line,
            raw_name,
        );
    }

    fn on_invalid(&self, line: u64) {
        log::warn!(
            "{} line {}: name is blank, skipped",
            "[warn]".if_supports_color(Stdout, |t| t.yellow()),
            line,
        );
    }
}
