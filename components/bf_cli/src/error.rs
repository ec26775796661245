//! Error types for the CLI

use core_types::BfError;
use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Structural, tape or configuration error from the runtime
    #[error(transparent)]
    Bf(#[from] BfError),

    /// Program file could not be read
    #[error("could not read '{path}': {source}", path = .path.display())]
    Load {
        /// File that failed to load
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Terminal or stream I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// REPL error
    #[error("REPL error: {0}")]
    Repl(String),
}

impl CliError {
    /// True when the error came from an unbalanced `[` or `]`
    pub fn is_structural(&self) -> bool {
        matches!(self, CliError::Bf(e) if e.is_structural())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
