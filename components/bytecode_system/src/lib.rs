//! IR instruction set and lowering compiler for the BF runtime
//!
//! This crate provides the intermediate representation executed by the IR
//! interpreter and the compiler that produces it from program text.
//!
//! # Features
//!
//! - Closed opcode set with counted arithmetic and head movement
//! - Run-length merging of `+ - > <`
//! - `[-]` rewritten to a single zero assignment
//! - Loop brackets resolved to each other's indices at compile time
//! - Disassembly and structural verification of compiled programs
//!
//! # Example
//!
//! ```
//! use bytecode_system::{compile, Opcode};
//! use core_types::SourceBuffer;
//!
//! let program = compile(&SourceBuffer::from_string("+++[>++<-]")).unwrap();
//!
//! assert_eq!(program.opcode(0), Some(Opcode::Add(3)));
//! assert_eq!(program.opcode(1), Some(Opcode::LoopStart(6)));
//! assert_eq!(program.opcode(6), Some(Opcode::LoopEnd(1)));
//! assert!(program.verify_pairing().is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compiler;
pub mod instruction;
pub mod opcode;
pub mod program;

// Re-export main types at crate root
pub use compiler::{check_brackets, compile, CompileStats, Compiler, Symbol};
pub use instruction::Instruction;
pub use opcode::{Opcode, UNRESOLVED_TARGET};
pub use program::IrProgram;
