//! Logger setup for the CLI.
//!
//! All status output goes through the `log` macros and is written to stdout.
//! `RUST_LOG` overrides the level chosen by `--quiet` / `--verbose`.

use std::io::Write;

use env_logger::{Builder, Env, Target};

pub(crate) fn init(quiet: bool, verbose: bool) {
    let level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let mut builder = Builder::from_env(Env::default().default_filter_or(level));
    builder.target(Target::Stdout);
    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }
    builder.init();
}
