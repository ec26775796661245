//! Interpreters for the BF runtime
//!
//! This crate provides the two execution engines and the state they share:
//! - Direct interpretation of program text with on-the-fly bracket matching
//! - Dispatch over compiled IR with precomputed jump targets
//! - A bounds-checked tape of wrapping 8-bit cells
//! - Buffered character I/O that flushes before every read
//!
//! Both engines agree on output, final tape and faults for every program.
//!
//! # Example
//!
//! ```
//! use bytecode_system::compile;
//! use core_types::SourceBuffer;
//! use interpreter::VM;
//!
//! let source = SourceBuffer::from_string("++++++[>+++++++++++<-]>-.");
//! let vm = VM::new(2).unwrap();
//!
//! let mut direct = Vec::new();
//! vm.run_direct(&source, std::io::empty(), &mut direct).unwrap();
//!
//! let mut ir = Vec::new();
//! vm.run_ir(&compile(&source).unwrap(), std::io::empty(), &mut ir).unwrap();
//!
//! assert_eq!(direct, b"A");
//! assert_eq!(direct, ir);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod direct;
pub mod dispatch;
pub mod io;
pub mod tape;
pub mod vm;

// Re-export main types at crate root
pub use context::ExecutionContext;
pub use direct::DirectInterpreter;
pub use dispatch::Dispatcher;
pub use io::ProgramIo;
pub use tape::Tape;
pub use vm::{ExecutionOutcome, VM};
