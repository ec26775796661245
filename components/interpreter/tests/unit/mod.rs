//! Unit tests for interpreter components

use bytecode_system::{IrProgram, Opcode};
use core_types::{BfError, SourceBuffer, EOF_SENTINEL};
use interpreter::{DirectInterpreter, Dispatcher, ExecutionContext, ProgramIo, Tape, VM};
use std::io;

// ============================================================================
// Tape Tests
// ============================================================================

#[test]
fn test_tape_single_cell() {
    let mut tape = Tape::new(1).unwrap();
    tape.add(255);
    tape.add(1);
    assert_eq!(tape.current(), 0);
    assert!(tape.move_right(1).is_err());
    assert!(tape.move_left(1).is_err());
    assert_eq!(tape.head(), 0);
}

#[test]
fn test_tape_last_cell_reachable() {
    let mut tape = Tape::new(65536).unwrap();
    tape.move_right(65535).unwrap();
    tape.set(7);
    assert_eq!(tape.cells()[65535], 7);
    assert!(tape.move_right(1).is_err());
}

#[test]
fn test_tape_huge_move_reports_saturated_head() {
    let mut tape = Tape::new(2).unwrap();
    tape.move_right(1).unwrap();
    let err = tape.move_right(usize::MAX).unwrap_err();
    assert!(matches!(err, BfError::TapeOutOfRange { head: isize::MAX, .. }));
}

#[test]
fn test_tape_into_cells() {
    let mut tape = Tape::new(3).unwrap();
    tape.add(4);
    assert_eq!(tape.into_cells(), vec![4, 0, 0]);
}

// ============================================================================
// Direct Interpreter Tests
// ============================================================================

#[test]
fn test_direct_back_jump_retests_bracket() {
    let source = SourceBuffer::from_string("++[>+<-]");
    let mut ctx = ExecutionContext::new(2).unwrap();
    let mut io = ProgramIo::new(io::empty(), io::sink());
    DirectInterpreter::new(&source)
        .execute(&mut ctx, &mut io)
        .unwrap();

    assert_eq!(ctx.tape.cells(), &[0, 2]);
    assert_eq!(ctx.pc, source.len());
}

#[test]
fn test_direct_eof_sentinel() {
    let source = SourceBuffer::from_string(",");
    let mut ctx = ExecutionContext::new(1).unwrap();
    let mut io = ProgramIo::new(io::empty(), io::sink());
    DirectInterpreter::new(&source)
        .execute(&mut ctx, &mut io)
        .unwrap();

    assert_eq!(ctx.tape.current(), EOF_SENTINEL);
}

// ============================================================================
// Dispatcher Tests
// ============================================================================

#[test]
fn test_dispatch_eof_sentinel() {
    let program = IrProgram::from_opcodes([Opcode::Input]);
    let mut ctx = ExecutionContext::new(1).unwrap();
    let mut io = ProgramIo::new(io::empty(), io::sink());
    Dispatcher::new(&program).execute(&mut ctx, &mut io).unwrap();

    assert_eq!(ctx.tape.current(), EOF_SENTINEL);
}

#[test]
fn test_dispatch_pc_ends_at_len() {
    let program = IrProgram::from_opcodes([Opcode::Add(1), Opcode::Output]);
    let mut ctx = ExecutionContext::new(1).unwrap();
    let mut io = ProgramIo::new(io::empty(), io::sink());
    Dispatcher::new(&program).execute(&mut ctx, &mut io).unwrap();

    assert_eq!(ctx.pc, program.len());
    assert_eq!(io.bytes_written(), 1);
}

#[test]
fn test_dispatch_jump_past_end_terminates() {
    let program = IrProgram::from_opcodes([Opcode::LoopStart(usize::MAX), Opcode::Output]);
    let mut ctx = ExecutionContext::new(1).unwrap();
    let mut io = ProgramIo::new(io::empty(), io::sink());
    Dispatcher::new(&program).execute(&mut ctx, &mut io).unwrap();

    assert_eq!(io.bytes_written(), 0);
}

// ============================================================================
// VM Tests
// ============================================================================

#[test]
fn test_vm_rejects_empty_tape() {
    assert!(matches!(VM::new(0), Err(BfError::InvalidHeapSize(0))));
}

#[test]
fn test_vm_outcome_tape_head() {
    let vm = VM::new(8).unwrap();
    let outcome = vm
        .run_direct(&SourceBuffer::from_string(">>>+"), io::empty(), io::sink())
        .unwrap();
    assert_eq!(outcome.tape.head(), 3);
    assert_eq!(outcome.tape.cells()[3], 1);
}
