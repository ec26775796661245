//! IR instruction representation
//!
//! Pairs an opcode with the source offset it was lowered from.

use crate::opcode::Opcode;

/// A single IR instruction with source mapping
///
/// The offset is where the instruction, or the run it replaces, starts in
/// the source buffer. It only feeds the disassembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The opcode for this instruction
    pub opcode: Opcode,
    /// Byte offset in the source buffer
    pub offset: usize,
}

impl Instruction {
    /// Create a new instruction
    pub fn new(opcode: Opcode, offset: usize) -> Self {
        Self { opcode, offset }
    }
}
