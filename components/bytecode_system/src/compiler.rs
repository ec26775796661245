//! Lowering compiler
//!
//! Turns a source buffer into an [`IrProgram`] in a single left-to-right
//! pass. Runs of `+ - > <` collapse into one counted instruction, the
//! `[-]` idiom becomes [`Opcode::AssignZero`], and loop brackets are
//! resolved to each other's indices with an explicit stack.

use core_types::{BfError, BfResult, SourceBuffer};
use tracing::debug;

use crate::opcode::{Opcode, UNRESOLVED_TARGET};
use crate::program::IrProgram;

/// One of the eight instruction symbols of the source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `+`
    Increment,
    /// `-`
    Decrement,
    /// `>`
    Right,
    /// `<`
    Left,
    /// `.`
    Output,
    /// `,`
    Input,
    /// `[`
    LoopOpen,
    /// `]`
    LoopClose,
}

impl Symbol {
    /// Classify a source byte; anything else is a comment.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'+' => Some(Symbol::Increment),
            b'-' => Some(Symbol::Decrement),
            b'>' => Some(Symbol::Right),
            b'<' => Some(Symbol::Left),
            b'.' => Some(Symbol::Output),
            b',' => Some(Symbol::Input),
            b'[' => Some(Symbol::LoopOpen),
            b']' => Some(Symbol::LoopClose),
            _ => None,
        }
    }

    /// Counted opcode for a run of `count` copies of this symbol
    fn counted(self, count: usize) -> Option<Opcode> {
        match self {
            Symbol::Increment => Some(Opcode::Add(count)),
            Symbol::Decrement => Some(Opcode::Sub(count)),
            Symbol::Right => Some(Opcode::MoveRight(count)),
            Symbol::Left => Some(Opcode::MoveLeft(count)),
            Symbol::Output | Symbol::Input | Symbol::LoopOpen | Symbol::LoopClose => None,
        }
    }
}

/// Counters collected while lowering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileStats {
    /// Bytes in the source buffer
    pub source_len: usize,
    /// Instructions emitted
    pub instructions: usize,
    /// Runs longer than one symbol that were merged
    pub merged_runs: usize,
    /// `[-]` idioms rewritten to `AssignZero`
    pub zero_assignments: usize,
    /// Loop pairs resolved
    pub loops: usize,
}

/// Source-to-IR compiler
#[derive(Debug, Default)]
pub struct Compiler {
    stats: CompileStats,
}

impl Compiler {
    /// Create a new compiler
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters from the most recent [`Compiler::compile`] call
    pub fn stats(&self) -> CompileStats {
        self.stats
    }

    /// Lower `source` to IR.
    ///
    /// # Errors
    ///
    /// [`BfError::UnmatchedLoopEnd`] for a `]` with no open loop and
    /// [`BfError::UnmatchedLoopStart`] for the innermost `[` still open at
    /// the end of the source. No partial program is returned.
    pub fn compile(&mut self, source: &SourceBuffer) -> BfResult<IrProgram> {
        let bytes = source.as_bytes();
        let mut stats = CompileStats {
            source_len: bytes.len(),
            ..CompileStats::default()
        };
        let mut program = IrProgram::with_capacity(bytes.len() / 2);
        let mut loop_stack: Vec<usize> = Vec::new();

        let mut i = 0;
        while i < bytes.len() {
            let Some(symbol) = Symbol::from_byte(bytes[i]) else {
                i += 1;
                continue;
            };

            match symbol {
                Symbol::Increment | Symbol::Decrement | Symbol::Right | Symbol::Left => {
                    let run = run_length(bytes, i);
                    if let Some(opcode) = symbol.counted(run) {
                        program.emit(opcode, i);
                    }
                    if run > 1 {
                        stats.merged_runs += 1;
                    }
                    i += run;
                    continue;
                }
                Symbol::Output => {
                    program.emit(Opcode::Output, i);
                }
                Symbol::Input => {
                    program.emit(Opcode::Input, i);
                }
                Symbol::LoopOpen => {
                    if bytes.get(i + 1) == Some(&b'-') && bytes.get(i + 2) == Some(&b']') {
                        program.emit(Opcode::AssignZero, i);
                        stats.zero_assignments += 1;
                        i += 3;
                        continue;
                    }
                    let start = program.emit(Opcode::LoopStart(UNRESOLVED_TARGET), i);
                    loop_stack.push(start);
                }
                Symbol::LoopClose => {
                    let start = loop_stack.pop().ok_or_else(|| BfError::UnmatchedLoopEnd {
                        position: source.position_of(i),
                    })?;
                    let end = program.len();
                    program.patch_loop_start(start, end);
                    program.emit(Opcode::LoopEnd(start), i);
                    stats.loops += 1;
                }
            }
            i += 1;
        }

        if let Some(&start) = loop_stack.last() {
            let offset = program.instructions()[start].offset;
            return Err(BfError::UnmatchedLoopStart {
                position: source.position_of(offset),
            });
        }

        stats.instructions = program.len();
        self.stats = stats;
        debug!(
            source_len = stats.source_len,
            instructions = stats.instructions,
            merged_runs = stats.merged_runs,
            zero_assignments = stats.zero_assignments,
            loops = stats.loops,
            "lowering complete"
        );

        Ok(program)
    }
}

/// Lower `source` with a fresh compiler
pub fn compile(source: &SourceBuffer) -> BfResult<IrProgram> {
    Compiler::new().compile(source)
}

/// Validate bracket structure without producing IR.
///
/// Reports exactly the error [`compile`] would report for the same source.
pub fn check_brackets(source: &SourceBuffer) -> BfResult<()> {
    let mut open: Vec<usize> = Vec::new();

    for (offset, &byte) in source.as_bytes().iter().enumerate() {
        match byte {
            b'[' => open.push(offset),
            b']' => {
                if open.pop().is_none() {
                    return Err(BfError::UnmatchedLoopEnd {
                        position: source.position_of(offset),
                    });
                }
            }
            _ => {}
        }
    }

    match open.last() {
        Some(&offset) => Err(BfError::UnmatchedLoopStart {
            position: source.position_of(offset),
        }),
        None => Ok(()),
    }
}

/// Length of the run of identical bytes starting at `from`
fn run_length(bytes: &[u8], from: usize) -> usize {
    let target = bytes[from];
    bytes[from..].iter().take_while(|&&b| b == target).count()
}
