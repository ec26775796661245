//! Direct interpreter
//!
//! Walks the source bytes one at a time. Loop brackets are matched by
//! scanning the source on every traversal; nothing is precomputed.

use std::io::{Read, Write};

use bytecode_system::{check_brackets, Symbol};
use core_types::{BfError, BfResult, SourceBuffer};

use crate::context::ExecutionContext;
use crate::io::ProgramIo;

/// Interpreter over raw program text
#[derive(Debug, Clone, Copy)]
pub struct DirectInterpreter<'a> {
    source: &'a SourceBuffer,
}

impl<'a> DirectInterpreter<'a> {
    /// Create an interpreter for `source`
    pub fn new(source: &'a SourceBuffer) -> Self {
        Self { source }
    }

    /// Run the program to completion.
    ///
    /// Bracket structure is validated before the first instruction runs, so
    /// a malformed program fails with the same error the compiler reports.
    pub fn execute<R: Read, W: Write>(
        &self,
        ctx: &mut ExecutionContext,
        io: &mut ProgramIo<R, W>,
    ) -> BfResult<()> {
        check_brackets(self.source)?;
        let code = self.source.as_bytes();

        while ctx.pc < code.len() {
            let Some(symbol) = Symbol::from_byte(code[ctx.pc]) else {
                ctx.pc += 1;
                continue;
            };
            ctx.steps += 1;

            match symbol {
                Symbol::Increment => ctx.tape.add(1),
                Symbol::Decrement => ctx.tape.sub(1),
                Symbol::Right => ctx.tape.move_right(1)?,
                Symbol::Left => ctx.tape.move_left(1)?,
                Symbol::Output => io.write_byte(ctx.tape.current())?,
                Symbol::Input => {
                    let byte = io.read_byte()?;
                    ctx.tape.set(byte);
                }
                Symbol::LoopOpen => {
                    if ctx.tape.current() == 0 {
                        // Land on the matching `]`; the increment below steps past it
                        ctx.pc = self.matching_close(ctx.pc)?;
                    }
                }
                Symbol::LoopClose => {
                    if ctx.tape.current() != 0 {
                        // Resume at the matching `[` so its test runs again
                        ctx.pc = self.matching_open(ctx.pc)?;
                        continue;
                    }
                }
            }
            ctx.pc += 1;
        }

        Ok(())
    }

    /// Index of the `]` closing the `[` at `open`
    fn matching_close(&self, open: usize) -> BfResult<usize> {
        let code = self.source.as_bytes();
        let mut depth = 1usize;

        for (pc, &byte) in code.iter().enumerate().skip(open + 1) {
            match byte {
                b'[' => depth += 1,
                b']' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(pc);
                    }
                }
                _ => {}
            }
        }

        Err(BfError::UnmatchedLoopStart {
            position: self.source.position_of(open),
        })
    }

    /// Index of the `[` opening the `]` at `close`
    fn matching_open(&self, close: usize) -> BfResult<usize> {
        let code = self.source.as_bytes();
        let mut depth = 1usize;

        for pc in (0..close).rev() {
            match code[pc] {
                b']' => depth += 1,
                b'[' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(pc);
                    }
                }
                _ => {}
            }
        }

        Err(BfError::UnmatchedLoopEnd {
            position: self.source.position_of(close),
        })
    }
}
