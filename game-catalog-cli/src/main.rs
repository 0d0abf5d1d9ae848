//! game-catalog CLI
//!
//! Imports game rows from a CSV sheet into the site's catalog JSON.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use clap::Parser;

use crate::cli_types::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    if let Err(e) = commands::import::run_import_command(cli) {
        // Printed directly so the failure shows even when logging is filtered.
        eprintln!("{}", e.report());
        std::process::exit(1);
    }
}
