//! IR opcodes
//!
//! Defines the instruction set executed by the IR interpreter.

use std::fmt;

/// Operand of a `LoopStart` that has not been patched yet
pub const UNRESOLVED_TARGET: usize = usize::MAX;

/// IR opcodes for tape programs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Cell arithmetic
    /// Add the repeat count to the current cell (mod 256)
    Add(usize),
    /// Subtract the repeat count from the current cell (mod 256)
    Sub(usize),
    /// Store zero in the current cell
    AssignZero,

    // Head movement
    /// Move the head right by the repeat count
    MoveRight(usize),
    /// Move the head left by the repeat count
    MoveLeft(usize),

    // I/O
    /// Write the current cell to the output
    Output,
    /// Read one byte of input into the current cell
    Input,

    // Control flow
    /// Jump to the matching `LoopEnd` if the current cell is zero
    LoopStart(usize),
    /// Jump back to the matching `LoopStart` if the current cell is non-zero
    LoopEnd(usize),
}

impl Opcode {
    /// Check if this opcode carries a repeat count
    pub fn is_counted(&self) -> bool {
        matches!(
            self,
            Opcode::Add(_) | Opcode::Sub(_) | Opcode::MoveRight(_) | Opcode::MoveLeft(_)
        )
    }

    /// Check if this opcode is a loop bracket
    pub fn is_loop_bracket(&self) -> bool {
        matches!(self, Opcode::LoopStart(_) | Opcode::LoopEnd(_))
    }

    /// Check if this opcode touches the I/O boundary
    pub fn has_side_effect(&self) -> bool {
        matches!(self, Opcode::Output | Opcode::Input)
    }

    /// The integer operand, if any
    pub fn operand(&self) -> Option<usize> {
        match *self {
            Opcode::Add(n)
            | Opcode::Sub(n)
            | Opcode::MoveRight(n)
            | Opcode::MoveLeft(n)
            | Opcode::LoopStart(n)
            | Opcode::LoopEnd(n) => Some(n),
            Opcode::AssignZero | Opcode::Output | Opcode::Input => None,
        }
    }

    /// Short uppercase name used by the disassembler
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Add(_) => "ADD",
            Opcode::Sub(_) => "SUB",
            Opcode::AssignZero => "ZERO",
            Opcode::MoveRight(_) => "MOVR",
            Opcode::MoveLeft(_) => "MOVL",
            Opcode::Output => "OUT",
            Opcode::Input => "IN",
            Opcode::LoopStart(_) => "LOOP",
            Opcode::LoopEnd(_) => "END",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Opcode::LoopStart(UNRESOLVED_TARGET) => write!(f, "{} -> ?", self.mnemonic()),
            Opcode::LoopStart(target) | Opcode::LoopEnd(target) => {
                write!(f, "{} -> {}", self.mnemonic(), target)
            }
            Opcode::Add(n) | Opcode::Sub(n) | Opcode::MoveRight(n) | Opcode::MoveLeft(n) => {
                write!(f, "{} {}", self.mnemonic(), n)
            }
            Opcode::AssignZero | Opcode::Output | Opcode::Input => f.write_str(self.mnemonic()),
        }
    }
}
