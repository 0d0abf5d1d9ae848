//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "game-catalog")]
#[command(
    about = "Import games from a CSV sheet into the catalog JSON",
    long_about = "Import games from a CSV sheet into the catalog JSON.\n\n\
                  Rows are deduplicated by name (ignoring case and whitespace) against the \
                  existing catalog and each other; new games get increasing ids after the \
                  current max id."
)]
pub(crate) struct Cli {
    /// CSV file to import (default: 游戏信息表.csv)
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Catalog JSON to append to (default: assets/JSON/games.json)
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// CSV encoding to try first (e.g., utf-8, gb18030, cp936)
    #[arg(long)]
    pub encoding: Option<String>,

    /// Id for the first new game; must be greater than the current max id
    #[arg(long, allow_negative_numbers = true)]
    pub start_id: Option<i64>,

    /// Show what would be imported without writing the catalog
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Read defaults from this settings file instead of the user config
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["game-catalog"]).unwrap();
        assert!(cli.csv.is_none());
        assert!(cli.json.is_none());
        assert!(cli.start_id.is_none());
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_all_arguments() {
        let cli = Cli::try_parse_from([
            "game-catalog",
            "--csv",
            "in.csv",
            "--json",
            "out/games.json",
            "--encoding",
            "gb18030",
            "--start-id",
            "100",
            "-n",
        ])
        .unwrap();
        assert_eq!(cli.csv, Some(PathBuf::from("in.csv")));
        assert_eq!(cli.json, Some(PathBuf::from("out/games.json")));
        assert_eq!(cli.encoding.as_deref(), Some("gb18030"));
        assert_eq!(cli.start_id, Some(100));
        assert!(cli.dry_run);
    }

    #[test]
    fn test_negative_start_id_parses() {
        let cli = Cli::try_parse_from(["game-catalog", "--start-id", "-3"]).unwrap();
        assert_eq!(cli.start_id, Some(-3));
    }

    #[test]
    fn test_non_numeric_start_id_rejected() {
        assert!(Cli::try_parse_from(["game-catalog", "--start-id", "abc"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["game-catalog", "--quiet", "-v"]).is_err());
    }
}
