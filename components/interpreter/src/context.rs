//! Execution context for VM

use core_types::BfResult;

use crate::tape::Tape;

/// Execution state of one run
///
/// Created fresh for every execution and owned by it: the tape (with its
/// head pointer), the program counter, and a count of executed
/// instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    /// Tape and head pointer
    pub tape: Tape,
    /// Index of the next byte (direct mode) or instruction (IR mode)
    pub pc: usize,
    /// Instructions executed so far
    pub steps: u64,
}

impl ExecutionContext {
    /// Create a context with a zeroed tape of `heap_size` cells
    pub fn new(heap_size: usize) -> BfResult<Self> {
        Ok(Self {
            tape: Tape::new(heap_size)?,
            pc: 0,
            steps: 0,
        })
    }
}
