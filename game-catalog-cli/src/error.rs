use thiserror::Error;

use game_catalog_import::ImportError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Import pipeline failed
    #[error("{0}")]
    Import(#[from] ImportError),

    /// Settings file could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Extra guidance printed after the error message, if any.
    pub(crate) fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::Import(ImportError::DecodeFailure { .. })
            | CliError::Import(ImportError::RowDecode { .. }) => Some(
                "try passing the encoding explicitly, e.g. --encoding gb18030 or --encoding cp936",
            ),
            CliError::Import(ImportError::UnknownEncoding(_)) => {
                Some("use an encoding label such as utf-8, utf-8-sig, gbk, gb18030 or cp936")
            }
            _ => None,
        }
    }

    /// Final message for a failed run, with the hint on its own line.
    pub(crate) fn report(&self) -> String {
        match self.hint() {
            Some(hint) => format!("[error] {self}\n[hint] {hint}"),
            None => format!("[error] {self}"),
        }
    }
}
