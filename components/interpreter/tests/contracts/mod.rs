//! Contract tests for interpreter
//!
//! Pin the public surface consumed by the runtime and benchmark crates.

use bytecode_system::IrProgram;
use core_types::{BfResult, ExecutionConfig, ExecutionMode, SourceBuffer};
use interpreter::{ExecutionContext, ExecutionOutcome, ProgramIo, Tape, VM};
use std::io;

/// Contract: VM runs both engines over arbitrary Read/Write endpoints
#[test]
fn contract_vm_entry_points() {
    let vm = VM::with_config(&ExecutionConfig::new(16, ExecutionMode::Ir).unwrap()).unwrap();

    let direct: BfResult<ExecutionOutcome> =
        vm.run_direct(&SourceBuffer::default(), io::empty(), io::sink());
    assert!(direct.is_ok());

    let ir: BfResult<ExecutionOutcome> = vm.run_ir(&IrProgram::new(), io::empty(), io::sink());
    assert!(ir.is_ok());
}

/// Contract: the outcome hands back the final tape
#[test]
fn contract_outcome_fields() {
    let outcome = VM::new(4)
        .unwrap()
        .run_direct(&SourceBuffer::from_string("+"), io::empty(), io::sink())
        .unwrap();

    let tape: &Tape = &outcome.tape;
    assert_eq!(tape.len(), 4);
    assert_eq!(outcome.steps, 1);
    assert_eq!(outcome.bytes_read, 0);
    assert_eq!(outcome.bytes_written, 0);
}

/// Contract: execution state is constructible per call
#[test]
fn contract_execution_context() {
    let ctx = ExecutionContext::new(2).unwrap();
    assert_eq!(ctx.tape.cells(), &[0, 0]);

    let io = ProgramIo::new(io::empty(), io::sink());
    assert_eq!(io.bytes_written(), 0);
}
