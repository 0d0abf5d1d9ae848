//! Loading and saving the catalog JSON file.
//!
//! Existing entries are kept as raw [`serde_json::Value`]s so unknown fields
//! and key order survive a run untouched.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use game_catalog_core::normalize_name;
use serde_json::Value;

use crate::error::ImportError;

/// The catalog as found on disk, plus the indexes the merge needs.
#[derive(Debug, Clone, Default)]
pub struct LoadedCatalog {
    /// Entries in file order.
    pub entries: Vec<Value>,
    /// Normalized names of every entry that has one.
    pub names: HashSet<String>,
    /// Largest well-formed integer `id`, or 0.
    pub max_id: i64,
    /// `false` when the file did not exist and will be created.
    pub existed: bool,
}

/// Load the catalog at `path`.
///
/// A missing file is an empty catalog. A file that is not JSON, or whose
/// root is not an array, is [`ImportError::CorruptCatalog`].
pub fn load_catalog(path: &Path) -> Result<LoadedCatalog, ImportError> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Ok(LoadedCatalog::default());
        }
        Err(e) => return Err(ImportError::io(path, e)),
    };

    let root: Value = serde_json::from_str(&contents)
        .map_err(|e| ImportError::corrupt(path, format!("JSON parse error: {e}")))?;
    let Value::Array(entries) = root else {
        return Err(ImportError::corrupt(path, "root element must be an array"));
    };

    let mut names = HashSet::with_capacity(entries.len());
    let mut max_id = 0i64;
    for entry in &entries {
        let Value::Object(fields) = entry else {
            continue;
        };

        if let Some(name) = fields.get("name").and_then(name_text) {
            let key = normalize_name(Some(name.as_str()));
            if !key.is_empty() {
                names.insert(key);
            }
        }

        if let Some(id) = fields.get("id").and_then(integer_id) {
            max_id = max_id.max(id);
        }
    }

    Ok(LoadedCatalog {
        entries,
        names,
        max_id,
        existed: true,
    })
}

/// Text of a `name` field. Numbers are accepted as their decimal form.
fn name_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// An `id` that is a number, or a string holding an integer.
///
/// Floats are truncated toward zero; non-finite or out-of-range values are
/// ignored.
fn integer_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64()?.trunc();
            (f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64).then_some(f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Write `entries` to `path` as a two-space indented JSON array.
///
/// The parent directory is created if needed. The document is written to a
/// sibling `.tmp` file first and renamed over the target.
pub fn write_catalog(path: &Path, entries: &[Value]) -> Result<(), ImportError> {
    let contents = serde_json::to_string_pretty(entries)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ImportError::io(parent, e))?;
    }

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    fs::write(&tmp, contents).map_err(|e| ImportError::io(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(ImportError::io(path, e));
    }
    Ok(())
}
