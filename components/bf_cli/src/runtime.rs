//! Runtime orchestration for program execution
//!
//! The Runtime struct owns one load/compile/execute cycle at a time:
//! - SourceBuffer for the loaded program text
//! - Compiler for lowering to IR
//! - VM for execution in either mode
//!
//! Loading a new program discards the previous source and IR, so a
//! failure in one cycle never leaks into the next.

use crate::error::{CliError, CliResult};
use bytecode_system::{Compiler, IrProgram};
use core_types::{BfError, BfResult, ExecutionConfig, ExecutionMode, SourceBuffer};
use interpreter::{ExecutionOutcome, VM};
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{info, warn};

/// Main runtime that drives loading, lowering and execution
#[derive(Debug, Clone, Default)]
pub struct Runtime {
    /// Tape length and preferred engine
    config: ExecutionConfig,
    /// Whether to print the IR disassembly before IR execution
    print_ir: bool,
    /// Currently loaded program text
    source: Option<SourceBuffer>,
    /// IR compiled from `source` since the last load
    program: Option<IrProgram>,
}

impl Runtime {
    /// Create a new runtime instance
    ///
    /// # Arguments
    /// * `config` - Tape length and the engine used by [`Runtime::run_configured`]
    ///
    /// # Example
    /// ```
    /// use bf_cli::Runtime;
    /// use core_types::{ExecutionConfig, ExecutionMode};
    ///
    /// let config = ExecutionConfig::new(30000, ExecutionMode::Direct).unwrap();
    /// let runtime = Runtime::new(config);
    /// assert_eq!(runtime.heap_size(), 30000);
    /// ```
    pub fn new(config: ExecutionConfig) -> Self {
        Self {
            config,
            print_ir: false,
            source: None,
            program: None,
        }
    }

    /// Enable IR printing
    pub fn with_print_ir(mut self, enabled: bool) -> Self {
        self.print_ir = enabled;
        self
    }

    /// Tape length used for every execution
    pub fn heap_size(&self) -> usize {
        self.config.heap_size
    }

    /// Change the tape length
    ///
    /// # Errors
    /// Returns [`BfError::InvalidHeapSize`] for zero; the old size is kept.
    pub fn set_heap_size(&mut self, heap_size: usize) -> BfResult<()> {
        self.config = ExecutionConfig::new(heap_size, self.config.mode)?;
        Ok(())
    }

    /// Engine used by [`Runtime::run_configured`]
    pub fn mode(&self) -> ExecutionMode {
        self.config.mode
    }

    /// Change the configured engine
    pub fn set_mode(&mut self, mode: ExecutionMode) {
        self.config.mode = mode;
    }

    /// Check if IR printing is enabled
    pub fn is_print_ir_enabled(&self) -> bool {
        self.print_ir
    }

    /// Enable or disable IR printing
    pub fn set_print_ir(&mut self, enabled: bool) {
        self.print_ir = enabled;
    }

    /// The loaded program text, if any
    pub fn source(&self) -> Option<&SourceBuffer> {
        self.source.as_ref()
    }

    /// The IR compiled since the last load, if any
    pub fn program(&self) -> Option<&IrProgram> {
        self.program.as_ref()
    }

    /// Whether the loaded program has been compiled
    pub fn is_compiled(&self) -> bool {
        self.program.is_some()
    }

    /// Load a program file
    ///
    /// # Errors
    /// Returns [`CliError::Load`] if the file cannot be read. The previous
    /// program is discarded either way.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> CliResult<()> {
        let path = path.as_ref();
        self.clear();
        let source = SourceBuffer::from_file(path).map_err(|source| CliError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        self.install(source, &path.display().to_string());
        Ok(())
    }

    /// Load a program by reading `reader` to the end
    ///
    /// # Errors
    /// Returns [`CliError::Io`] if the stream fails.
    pub fn load_reader<R: Read>(&mut self, reader: R) -> CliResult<()> {
        self.clear();
        let source = SourceBuffer::from_reader(reader)?;
        self.install(source, "<stream>");
        Ok(())
    }

    /// Load program text
    pub fn load_string(&mut self, source: &str) {
        self.install(SourceBuffer::from_string(source), "<string>");
    }

    /// Load raw program bytes
    pub fn load_bytes(&mut self, bytes: impl Into<Vec<u8>>) {
        self.install(SourceBuffer::from_bytes(bytes), "<bytes>");
    }

    fn clear(&mut self) {
        self.source = None;
        self.program = None;
    }

    fn install(&mut self, source: SourceBuffer, origin: &str) {
        info!(origin, bytes = source.len(), "source loaded");
        self.source = Some(source);
        self.program = None;
    }

    /// Lower the loaded program to IR
    ///
    /// # Returns
    /// The compiled program, which stays cached until the next load
    ///
    /// # Errors
    /// Returns [`BfError::NoSource`] when nothing is loaded and a
    /// structural error for unbalanced brackets. On error no IR is kept.
    ///
    /// # Example
    /// ```
    /// use bf_cli::Runtime;
    ///
    /// let mut runtime = Runtime::default();
    /// runtime.load_string("+++[-]");
    /// assert_eq!(runtime.compile().unwrap().len(), 2);
    /// ```
    pub fn compile(&mut self) -> BfResult<&IrProgram> {
        self.program = None;
        let source = self.source.as_ref().ok_or(BfError::NoSource)?;

        let mut compiler = Compiler::new();
        let program = compiler.compile(source).map_err(|e| {
            warn!(error = %e, "compilation failed");
            e
        })?;

        Ok(self.program.insert(program))
    }

    /// Execute the loaded program on the process's stdin and stdout
    ///
    /// # Errors
    /// See [`Runtime::execute_with`].
    pub fn execute(&mut self, mode: ExecutionMode) -> CliResult<ExecutionOutcome> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.execute_with(mode, stdin.lock(), stdout.lock())
    }

    /// Execute the loaded program against explicit endpoints
    ///
    /// `Ir` mode compiles on demand when no IR is cached. After a
    /// successful run one newline is written to `output` and it is flushed.
    ///
    /// # Arguments
    /// * `mode` - Engine to run
    /// * `input` - Bytes consumed by `,`
    /// * `output` - Sink for `.`
    ///
    /// # Errors
    /// Returns `CliError` if nothing is loaded, the brackets are unbalanced,
    /// the head leaves the tape or an I/O operation fails. Output written
    /// before the fault has already been flushed to `output`.
    ///
    /// # Example
    /// ```
    /// use bf_cli::Runtime;
    /// use core_types::ExecutionMode;
    ///
    /// let mut runtime = Runtime::default();
    /// runtime.load_string(",+.");
    /// let mut out = Vec::new();
    /// runtime.execute_with(ExecutionMode::Ir, &b"a"[..], &mut out).unwrap();
    /// assert_eq!(out, b"b\n");
    /// ```
    pub fn execute_with<R: Read, W: Write>(
        &mut self,
        mode: ExecutionMode,
        input: R,
        mut output: W,
    ) -> CliResult<ExecutionOutcome> {
        let vm = VM::with_config(&self.config)?;

        let result = match mode {
            ExecutionMode::Direct => {
                let source = self.source.as_ref().ok_or(BfError::NoSource)?;
                vm.run_direct(source, input, &mut output)
            }
            ExecutionMode::Ir => {
                if self.program.is_none() {
                    self.compile()?;
                }
                let program = self.program.as_ref().ok_or(BfError::NoSource)?;
                if self.print_ir {
                    eprint!("{}", program.disassemble());
                }
                vm.run_ir(program, input, &mut output)
            }
        };

        let outcome = result.map_err(|e| {
            warn!(mode = mode.name(), error = %e, "execution failed");
            e
        })?;

        output.write_all(b"\n")?;
        output.flush()?;

        info!(
            mode = mode.name(),
            steps = outcome.steps,
            bytes_written = outcome.bytes_written,
            "program finished"
        );
        Ok(outcome)
    }

    /// Execute with the engine implied by the cycle so far
    ///
    /// Runs the IR when the program has been compiled since the last load
    /// and interprets the source directly otherwise.
    ///
    /// # Errors
    /// See [`Runtime::execute_with`].
    pub fn run(&mut self) -> CliResult<ExecutionOutcome> {
        self.execute(self.implied_mode())
    }

    /// [`Runtime::run`] against explicit endpoints
    pub fn run_with<R: Read, W: Write>(
        &mut self,
        input: R,
        output: W,
    ) -> CliResult<ExecutionOutcome> {
        self.execute_with(self.implied_mode(), input, output)
    }

    /// Compile when the configured mode asks for IR, then run
    ///
    /// This is the full cycle the CLI performs for each program.
    pub fn run_configured<R: Read, W: Write>(
        &mut self,
        input: R,
        output: W,
    ) -> CliResult<ExecutionOutcome> {
        if self.config.mode == ExecutionMode::Ir {
            self.compile()?;
        }
        self.run_with(input, output)
    }

    fn implied_mode(&self) -> ExecutionMode {
        if self.is_compiled() {
            ExecutionMode::Ir
        } else {
            ExecutionMode::Direct
        }
    }

    /// Start the REPL (Read-Eval-Print Loop)
    ///
    /// # Returns
    /// `Ok(())` when REPL exits normally
    ///
    /// # Errors
    /// Returns `CliError` if REPL encounters a fatal error
    ///
    /// # Example
    /// ```no_run
    /// use bf_cli::Runtime;
    ///
    /// let mut runtime = Runtime::default();
    /// runtime.repl().unwrap();
    /// ```
    pub fn repl(&mut self) -> CliResult<()> {
        crate::repl::run_repl(self)
    }
}
