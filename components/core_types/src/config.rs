//! Execution configuration.
//!
//! Heap size and engine choice are owned by the caller (CLI, REPL, tests)
//! and handed to the runtime as plain values.

use crate::{BfError, BfResult};

/// Tape length used when the caller does not choose one
pub const DEFAULT_HEAP_SIZE: usize = 65536;

/// Cell value stored by `,` once the input is exhausted
pub const EOF_SENTINEL: u8 = 0xFF;

/// Which engine runs the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExecutionMode {
    /// Interpret the source bytes with on-the-fly bracket matching
    Direct,
    /// Lower to IR first, then run the IR
    #[default]
    Ir,
}

impl ExecutionMode {
    /// Map an optimization level onto an engine.
    ///
    /// ```
    /// use core_types::ExecutionMode;
    ///
    /// assert_eq!(ExecutionMode::from_opt_level(0), ExecutionMode::Direct);
    /// assert_eq!(ExecutionMode::from_opt_level(1), ExecutionMode::Ir);
    /// ```
    pub fn from_opt_level(level: u8) -> Self {
        if level == 0 {
            ExecutionMode::Direct
        } else {
            ExecutionMode::Ir
        }
    }

    /// Lowercase name, as used by the REPL and in logs
    pub fn name(&self) -> &'static str {
        match self {
            ExecutionMode::Direct => "direct",
            ExecutionMode::Ir => "ir",
        }
    }
}

impl std::str::FromStr for ExecutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "direct" | "0" => Ok(ExecutionMode::Direct),
            "ir" | "1" => Ok(ExecutionMode::Ir),
            other => Err(format!("unknown execution mode '{}'", other)),
        }
    }
}

/// Validated execution parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// Number of cells on the tape
    pub heap_size: usize,
    /// Engine to run
    pub mode: ExecutionMode,
}

impl ExecutionConfig {
    /// Build a configuration, rejecting an empty tape
    pub fn new(heap_size: usize, mode: ExecutionMode) -> BfResult<Self> {
        if heap_size == 0 {
            return Err(BfError::InvalidHeapSize(heap_size));
        }
        Ok(Self { heap_size, mode })
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            heap_size: DEFAULT_HEAP_SIZE,
            mode: ExecutionMode::default(),
        }
    }
}
