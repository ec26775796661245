//! Core types shared by the BF compiler and interpreters.
//!
//! This crate provides the foundational types for the runtime: the
//! immutable source buffer, source location tracking, the error taxonomy
//! and the execution configuration passed down from the CLI.
//!
//! # Overview
//!
//! - [`SourceBuffer`] - Immutable program text
//! - [`SourcePosition`] - Byte offset plus line/column of a source byte
//! - [`BfError`] - Structural, tape, I/O and configuration failures
//! - [`ErrorKind`] - Coarse classification of a [`BfError`]
//! - [`ExecutionConfig`] / [`ExecutionMode`] - Heap size and engine choice
//!
//! # Examples
//!
//! ```
//! use core_types::{BfError, ErrorKind, SourceBuffer};
//!
//! let source = SourceBuffer::from_string("+\n[");
//! let position = source.position_of(2);
//! assert_eq!((position.line, position.column), (2, 1));
//!
//! let error = BfError::UnmatchedLoopStart { position };
//! assert_eq!(error.kind(), ErrorKind::Structural);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod config;
mod error;
mod source;

pub use config::{ExecutionConfig, ExecutionMode, DEFAULT_HEAP_SIZE, EOF_SENTINEL};
pub use error::{BfError, BfResult, ErrorKind};
pub use source::{SourceBuffer, SourcePosition};
