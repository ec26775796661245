//! Error types and error handling.
//!
//! Every fallible operation of the compiler and both interpreters reports
//! a [`BfError`]. The variants are grouped by [`ErrorKind`] so callers can
//! react to a class of failure without matching on every variant.

use crate::SourcePosition;
use thiserror::Error;

/// The kind of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unmatched loop bracket, detected before execution starts
    Structural,
    /// Head pointer moved outside the tape
    TapeOutOfRange,
    /// Reading the input boundary or writing the output boundary failed
    Io,
    /// Invalid configuration or API misuse
    Config,
}

/// An error raised while compiling or executing a program.
///
/// # Examples
///
/// ```
/// use core_types::{BfError, ErrorKind};
///
/// let error = BfError::TapeOutOfRange { head: -1, heap_size: 1 };
/// assert_eq!(error.kind(), ErrorKind::TapeOutOfRange);
/// assert_eq!(
///     error.to_string(),
///     "head pointer moved to -1, outside the tape [0, 1)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum BfError {
    /// A `[` without a matching `]`
    #[error("unmatched '[' at {position}")]
    UnmatchedLoopStart {
        /// Location of the innermost unmatched `[`
        position: SourcePosition,
    },

    /// A `]` without a matching `[`
    #[error("unmatched ']' at {position}")]
    UnmatchedLoopEnd {
        /// Location of the offending `]`
        position: SourcePosition,
    },

    /// The head pointer left `[0, heap_size)`
    #[error("head pointer moved to {head}, outside the tape [0, {heap_size})")]
    TapeOutOfRange {
        /// Position the move would have produced
        head: isize,
        /// Length of the tape
        heap_size: usize,
    },

    /// Input or output failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Heap size must be a positive number of cells
    #[error("invalid heap size {0}: the tape needs at least one cell")]
    InvalidHeapSize(usize),

    /// Compile or execute was requested before any source was loaded
    #[error("no program has been loaded")]
    NoSource,
}

impl BfError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BfError::UnmatchedLoopStart { .. } | BfError::UnmatchedLoopEnd { .. } => {
                ErrorKind::Structural
            }
            BfError::TapeOutOfRange { .. } => ErrorKind::TapeOutOfRange,
            BfError::Io(_) => ErrorKind::Io,
            BfError::InvalidHeapSize(_) | BfError::NoSource => ErrorKind::Config,
        }
    }

    /// Whether the error was detected before the program ran.
    pub fn is_structural(&self) -> bool {
        self.kind() == ErrorKind::Structural
    }
}

/// Result type for compile and execute operations
pub type BfResult<T> = Result<T, BfError>;
