//! IR program - compiled instruction container
//!
//! Holds the lowered instruction sequence and offers disassembly and
//! structural verification.

use std::fmt::Write as _;

use crate::instruction::Instruction;
use crate::opcode::{Opcode, UNRESOLVED_TARGET};

/// A compiled IR program
///
/// Index 0 is the entry point; execution ends when the program counter
/// reaches `len()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IrProgram {
    instructions: Vec<Instruction>,
}

impl IrProgram {
    /// Create a new empty program
    pub fn new() -> Self {
        Self {
            instructions: Vec::new(),
        }
    }

    /// Create an empty program with room for `capacity` instructions
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instructions: Vec::with_capacity(capacity),
        }
    }

    /// Build a program from bare opcodes, with offsets set to the index.
    ///
    /// No structural checking is done; use [`IrProgram::verify_pairing`].
    pub fn from_opcodes(opcodes: impl IntoIterator<Item = Opcode>) -> Self {
        Self {
            instructions: opcodes
                .into_iter()
                .enumerate()
                .map(|(i, opcode)| Instruction::new(opcode, i))
                .collect(),
        }
    }

    /// Append an instruction and return its index
    pub(crate) fn emit(&mut self, opcode: Opcode, offset: usize) -> usize {
        let idx = self.instructions.len();
        self.instructions.push(Instruction::new(opcode, offset));
        idx
    }

    /// Point the `LoopStart` at `start` to `target`
    pub(crate) fn patch_loop_start(&mut self, start: usize, target: usize) {
        if let Some(inst) = self.instructions.get_mut(start) {
            debug_assert!(matches!(inst.opcode, Opcode::LoopStart(_)));
            inst.opcode = Opcode::LoopStart(target);
        }
    }

    /// Get the number of instructions
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the program has no instructions
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// All instructions, in execution order
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Opcode at `index`
    pub fn opcode(&self, index: usize) -> Option<Opcode> {
        self.instructions.get(index).map(|inst| inst.opcode)
    }

    /// Iterate over the opcodes
    pub fn opcodes(&self) -> impl Iterator<Item = Opcode> + '_ {
        self.instructions.iter().map(|inst| inst.opcode)
    }

    /// Number of `LoopStart`/`LoopEnd` pairs
    pub fn loop_count(&self) -> usize {
        self.opcodes()
            .filter(|op| matches!(op, Opcode::LoopStart(_)))
            .count()
    }

    /// Check that every loop bracket points at its partner and that loops
    /// nest properly.
    pub fn verify_pairing(&self) -> Result<(), String> {
        let mut open: Vec<usize> = Vec::new();

        for (idx, inst) in self.instructions.iter().enumerate() {
            match inst.opcode {
                Opcode::LoopStart(UNRESOLVED_TARGET) => {
                    return Err(format!("LoopStart at {} was never resolved", idx));
                }
                Opcode::LoopStart(target) => {
                    match self.opcode(target) {
                        Some(Opcode::LoopEnd(back)) if back == idx => {}
                        other => {
                            return Err(format!(
                                "LoopStart at {} targets {}, found {:?}",
                                idx, target, other
                            ))
                        }
                    }
                    open.push(idx);
                }
                Opcode::LoopEnd(target) => {
                    let start = open
                        .pop()
                        .ok_or_else(|| format!("LoopEnd at {} has no open loop", idx))?;
                    if start != target {
                        return Err(format!(
                            "LoopEnd at {} targets {}, innermost open loop is {}",
                            idx, target, start
                        ));
                    }
                }
                _ => {}
            }
        }

        match open.pop() {
            Some(idx) => Err(format!("LoopStart at {} is never closed", idx)),
            None => Ok(()),
        }
    }

    /// Render one instruction per line
    ///
    /// ```
    /// use bytecode_system::{IrProgram, Opcode};
    ///
    /// let program = IrProgram::from_opcodes([Opcode::Add(2), Opcode::Output]);
    /// assert_eq!(
    ///     program.disassemble(),
    ///     "0000  ADD 2  ; @0\n0001  OUT  ; @1\n"
    /// );
    /// ```
    pub fn disassemble(&self) -> String {
        let mut out = String::new();
        for (idx, inst) in self.instructions.iter().enumerate() {
            let _ = writeln!(out, "{:04}  {}  ; @{}", idx, inst.opcode, inst.offset);
        }
        out
    }
}
