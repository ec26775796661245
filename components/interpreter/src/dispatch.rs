//! Dispatch loop for IR execution
//!
//! Handles individual opcode execution. Loop jumps use the targets the
//! compiler resolved, so every jump is O(1).

use std::io::{Read, Write};

use bytecode_system::{IrProgram, Opcode};
use core_types::BfResult;

use crate::context::ExecutionContext;
use crate::io::ProgramIo;

/// Dispatch handler for executing a compiled program
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'a> {
    program: &'a IrProgram,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher for `program`
    pub fn new(program: &'a IrProgram) -> Self {
        Self { program }
    }

    /// Run the program until the program counter falls off the end
    pub fn execute<R: Read, W: Write>(
        &self,
        ctx: &mut ExecutionContext,
        io: &mut ProgramIo<R, W>,
    ) -> BfResult<()> {
        let code = self.program.instructions();

        while let Some(inst) = code.get(ctx.pc) {
            ctx.steps += 1;

            match inst.opcode {
                Opcode::Add(n) => ctx.tape.add(n),
                Opcode::Sub(n) => ctx.tape.sub(n),
                Opcode::AssignZero => ctx.tape.set(0),
                Opcode::MoveRight(n) => ctx.tape.move_right(n)?,
                Opcode::MoveLeft(n) => ctx.tape.move_left(n)?,
                Opcode::Output => io.write_byte(ctx.tape.current())?,
                Opcode::Input => {
                    let byte = io.read_byte()?;
                    ctx.tape.set(byte);
                }
                Opcode::LoopStart(end) => {
                    if ctx.tape.current() == 0 {
                        ctx.pc = end;
                    }
                }
                Opcode::LoopEnd(start) => {
                    // The cell is non-zero, so re-testing at `start` would fall through
                    if ctx.tape.current() != 0 {
                        ctx.pc = start;
                    }
                }
            }
            ctx.pc = ctx.pc.saturating_add(1);
        }

        Ok(())
    }
}
