//! Source buffer and source position types.
//!
//! The source buffer is the unmodified program text. The compiler and the
//! direct interpreter both address it by byte offset; [`SourcePosition`]
//! turns an offset into something a human can find in an editor.

use std::fmt;
use std::io::{self, Read};
use std::path::Path;

/// Represents a position in source code.
///
/// Used for error reporting to indicate where an unmatched bracket sits.
///
/// # Examples
///
/// ```
/// use core_types::SourcePosition;
///
/// let pos = SourcePosition {
///     line: 10,
///     column: 5,
///     offset: 150,
/// };
///
/// assert_eq!(pos.to_string(), "line 10, column 5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourcePosition {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, counted in bytes)
    pub column: u32,
    /// Byte offset from the start of the source
    pub offset: usize,
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Immutable program text.
///
/// Any byte is accepted; bytes that are not one of the eight instruction
/// symbols are comments.
///
/// # Examples
///
/// ```
/// use core_types::SourceBuffer;
///
/// let source = SourceBuffer::from_string("+[-] clear");
/// assert_eq!(source.len(), 10);
/// assert_eq!(source.as_bytes()[0], b'+');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceBuffer {
    bytes: Vec<u8>,
}

impl SourceBuffer {
    /// Wrap an owned byte vector
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Copy the bytes of a string
    pub fn from_string(source: &str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Read a whole file
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        std::fs::read(path).map(Self::from_bytes)
    }

    /// Drain a reader until end of stream
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::from_bytes(bytes))
    }

    /// The program text
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes in the program text
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the program text is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Resolve a byte offset to a line and column.
    ///
    /// Offsets past the end are clamped to the end of the buffer.
    pub fn position_of(&self, offset: usize) -> SourcePosition {
        let offset = offset.min(self.bytes.len());
        let prefix = &self.bytes[..offset];
        let line = prefix.iter().filter(|&&b| b == b'\n').count() as u32 + 1;
        let line_start = prefix
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |newline| newline + 1);

        SourcePosition {
            line,
            column: (offset - line_start) as u32 + 1,
            offset,
        }
    }
}

impl From<Vec<u8>> for SourceBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&str> for SourceBuffer {
    fn from(source: &str) -> Self {
        Self::from_string(source)
    }
}
