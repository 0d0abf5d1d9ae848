//! User settings for import defaults.
//!
//! The settings file is `~/.config/game-catalog/settings.toml` (or the path
//! given with `--settings`). Only the `[import]` table is read:
//!
//! ```toml
//! [import]
//! csv = "sheets/games.csv"
//! json = "site/assets/JSON/games.json"
//! encoding = "gb18030"
//! ```
//!
//! Each value is resolved with a priority chain: command-line flag, then
//! settings file, then the built-in default.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CliError;

pub(crate) const DEFAULT_CSV: &str = "游戏信息表.csv";
pub(crate) const DEFAULT_JSON: &str = "assets/JSON/games.json";

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    import: ImportSettings,
}

/// Defaults from the `[import]` table.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct ImportSettings {
    pub csv: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub encoding: Option<String>,
}

/// Canonical path to the settings file: `~/.config/game-catalog/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("game-catalog").join("settings.toml")
}

/// Load import defaults.
///
/// With `explicit` set the file must exist. The default location is
/// optional; a missing file yields empty settings.
pub(crate) fn load_import_settings(explicit: Option<&Path>) -> Result<ImportSettings, CliError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let p = settings_path();
            if !p.exists() {
                return Ok(ImportSettings::default());
            }
            p
        }
    };

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| CliError::config(format!("reading {}: {e}", path.display())))?;
    let settings = parse_import_settings(&contents)
        .map_err(|e| CliError::config(format!("parsing {}: {e}", path.display())))?;
    log::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}

fn parse_import_settings(contents: &str) -> Result<ImportSettings, toml::de::Error> {
    let file: SettingsFile = toml::from_str(contents)?;
    Ok(file.import)
}

/// Resolve a path: CLI override, then settings, then `default`.
pub(crate) fn resolve_path(
    cli_override: Option<PathBuf>,
    from_settings: Option<&Path>,
    default: &str,
) -> PathBuf {
    let path = cli_override
        .or_else(|| from_settings.map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from(default));
    std::path::absolute(&path).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_import_table() {
        let settings = parse_import_settings(
            r#"
[import]
csv = "sheets/games.csv"
json = "site/games.json"
encoding = "gb18030"
"#,
        )
        .unwrap();
        assert_eq!(settings.csv, Some(PathBuf::from("sheets/games.csv")));
        assert_eq!(settings.json, Some(PathBuf::from("site/games.json")));
        assert_eq!(settings.encoding.as_deref(), Some("gb18030"));
    }

    #[test]
    fn test_parse_partial_and_other_tables() {
        let settings = parse_import_settings(
            r#"
[ui]
theme = "dark"

[import]
encoding = "cp936"
"#,
        )
        .unwrap();
        assert_eq!(settings.csv, None);
        assert_eq!(settings.encoding.as_deref(), Some("cp936"));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_import_settings("").unwrap(), ImportSettings::default());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_import_settings("[import]\ncsv = 5").is_err());
        assert!(parse_import_settings("not toml at all [").is_err());
    }

    #[test]
    fn test_resolve_priority() {
        let from_settings = Path::new("from-settings.csv");

        let p = resolve_path(Some(PathBuf::from("cli.csv")), Some(from_settings), DEFAULT_CSV);
        assert!(p.ends_with("cli.csv"));
        assert!(p.is_absolute());

        let p = resolve_path(None, Some(from_settings), DEFAULT_CSV);
        assert!(p.ends_with("from-settings.csv"));

        let p = resolve_path(None, None, DEFAULT_JSON);
        assert!(p.ends_with("assets/JSON/games.json"));
    }

    #[test]
    fn test_explicit_settings_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "[import]\njson = \"out.json\"\n").unwrap();

        let settings = load_import_settings(Some(&path)).unwrap();
        assert_eq!(settings.json, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_explicit_settings_file_missing() {
        let tmp = tempfile::TempDir::new().unwrap();
        let result = load_import_settings(Some(&tmp.path().join("nope.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
