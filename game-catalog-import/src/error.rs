use std::path::{Path, PathBuf};

/// Errors that abort an import run.
///
/// Row-level problems (blank or duplicate names) are not errors; they are
/// reported as [`RowOutcome`](crate::RowOutcome)s and the run continues.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("CSV file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Could not decode {} with any of: {}", .path.display(), .tried.join(", "))]
    DecodeFailure { path: PathBuf, tried: Vec<String> },

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("Line {line} is not valid {encoding}")]
    RowDecode { line: u64, encoding: String },

    #[error("Missing required column(s): {}; header found: [{}]", .missing.join(", "), .header.join(", "))]
    SchemaViolation {
        missing: Vec<String>,
        header: Vec<String>,
    },

    #[error("Invalid catalog {}: {reason}", .path.display())]
    CorruptCatalog { path: PathBuf, reason: String },

    #[error("Start id {start_id} must be greater than the current max id {max_id}")]
    InvalidStartId { start_id: i64, max_id: i64 },

    #[error("No ids left to assign after {last}")]
    IdOverflow { last: i64 },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ImportError {
    pub fn corrupt(path: &Path, reason: impl Into<String>) -> Self {
        Self::CorruptCatalog {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
