//! Virtual Machine for program execution
//!
//! Main entry point for running a program in either engine.

use std::io::{Read, Write};
use std::time::{Duration, Instant};

use bytecode_system::IrProgram;
use core_types::{BfError, BfResult, ExecutionConfig, ExecutionMode, SourceBuffer};
use tracing::debug;

use crate::context::ExecutionContext;
use crate::direct::DirectInterpreter;
use crate::dispatch::Dispatcher;
use crate::io::ProgramIo;
use crate::tape::Tape;

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// Final tape contents and head position
    pub tape: Tape,
    /// Instructions executed
    pub steps: u64,
    /// Bytes read from the input
    pub bytes_read: u64,
    /// Bytes written to the output
    pub bytes_written: u64,
    /// Wall-clock time spent in the interpreter
    pub elapsed: Duration,
}

/// Virtual Machine for executing programs
///
/// The VM only holds configuration. Every call to [`VM::run_direct`] or
/// [`VM::run_ir`] builds a fresh [`ExecutionContext`], so runs never see
/// each other's tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VM {
    heap_size: usize,
}

impl VM {
    /// Create a VM with a tape of `heap_size` cells
    ///
    /// # Example
    ///
    /// ```
    /// use core_types::SourceBuffer;
    /// use interpreter::VM;
    ///
    /// let vm = VM::new(1).unwrap();
    /// let mut out = Vec::new();
    /// vm.run_direct(&SourceBuffer::from_string("+++."), std::io::empty(), &mut out)
    ///     .unwrap();
    /// assert_eq!(out, vec![3]);
    /// ```
    pub fn new(heap_size: usize) -> BfResult<Self> {
        if heap_size == 0 {
            return Err(BfError::InvalidHeapSize(heap_size));
        }
        Ok(Self { heap_size })
    }

    /// Create a VM from a validated configuration
    pub fn with_config(config: &ExecutionConfig) -> BfResult<Self> {
        Self::new(config.heap_size)
    }

    /// Tape length used for every run
    pub fn heap_size(&self) -> usize {
        self.heap_size
    }

    /// Interpret `source` directly
    pub fn run_direct<R: Read, W: Write>(
        &self,
        source: &SourceBuffer,
        input: R,
        output: W,
    ) -> BfResult<ExecutionOutcome> {
        let interpreter = DirectInterpreter::new(source);
        self.run(ExecutionMode::Direct, input, output, |ctx, io| {
            interpreter.execute(ctx, io)
        })
    }

    /// Execute a compiled program
    ///
    /// # Example
    ///
    /// ```
    /// use bytecode_system::compile;
    /// use core_types::SourceBuffer;
    /// use interpreter::VM;
    ///
    /// let program = compile(&SourceBuffer::from_string(",+.")).unwrap();
    /// let mut out = Vec::new();
    /// let outcome = VM::new(8).unwrap().run_ir(&program, &b"a"[..], &mut out).unwrap();
    /// assert_eq!(out, b"b");
    /// assert_eq!(outcome.steps, 3);
    /// ```
    pub fn run_ir<R: Read, W: Write>(
        &self,
        program: &IrProgram,
        input: R,
        output: W,
    ) -> BfResult<ExecutionOutcome> {
        let dispatcher = Dispatcher::new(program);
        self.run(ExecutionMode::Ir, input, output, |ctx, io| {
            dispatcher.execute(ctx, io)
        })
    }

    fn run<R, W, F>(
        &self,
        mode: ExecutionMode,
        input: R,
        output: W,
        engine: F,
    ) -> BfResult<ExecutionOutcome>
    where
        R: Read,
        W: Write,
        F: FnOnce(&mut ExecutionContext, &mut ProgramIo<R, W>) -> BfResult<()>,
    {
        debug!(mode = mode.name(), heap_size = self.heap_size, "execution started");

        let mut ctx = ExecutionContext::new(self.heap_size)?;
        let mut io = ProgramIo::new(input, output);
        let start = Instant::now();

        let result = engine(&mut ctx, &mut io);
        // Output produced before a fault still reaches the sink
        let flushed = io.flush();
        let elapsed = start.elapsed();

        if let Err(e) = result {
            debug!(mode = mode.name(), steps = ctx.steps, error = %e, "execution aborted");
            return Err(e);
        }
        flushed?;

        debug!(
            mode = mode.name(),
            steps = ctx.steps,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "execution finished"
        );

        Ok(ExecutionOutcome {
            steps: ctx.steps,
            bytes_read: io.bytes_read(),
            bytes_written: io.bytes_written(),
            tape: ctx.tape,
            elapsed,
        })
    }
}

impl Default for VM {
    fn default() -> Self {
        Self {
            heap_size: core_types::DEFAULT_HEAP_SIZE,
        }
    }
}
