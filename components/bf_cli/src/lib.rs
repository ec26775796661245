//! Corten BF Runtime CLI Library
//!
//! Provides the Runtime struct and supporting modules for the `corten-bf`
//! binary: argument parsing, the load/compile/execute cycle and the REPL.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod repl;
pub mod runtime;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use runtime::Runtime;
