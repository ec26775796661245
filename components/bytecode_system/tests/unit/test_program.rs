//! Tests for IrProgram

use bytecode_system::{compile, IrProgram, Opcode};
use core_types::SourceBuffer;

#[test]
fn test_new_program_is_empty() {
    let program = IrProgram::new();
    assert!(program.is_empty());
    assert_eq!(program.len(), 0);
    assert_eq!(program.disassemble(), "");
}

#[test]
fn test_from_opcodes_sets_offsets() {
    let program = IrProgram::from_opcodes([Opcode::Input, Opcode::Output]);
    assert_eq!(program.instructions()[1].offset, 1);
    assert_eq!(program.opcode(0), Some(Opcode::Input));
    assert_eq!(program.opcode(2), None);
}

#[test]
fn test_disassemble_compiled_loop() {
    let program = compile(&SourceBuffer::from_string("+[>.<-]")).unwrap();
    let text = program.disassemble();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "0000  ADD 1  ; @0");
    assert_eq!(lines[1], "0001  LOOP -> 6  ; @1");
    assert_eq!(lines[3], "0003  OUT  ; @3");
    assert_eq!(lines[6], "0006  END -> 1  ; @6");
}

#[test]
fn test_verify_pairing_rejects_wrong_partner() {
    let program = IrProgram::from_opcodes([
        Opcode::LoopStart(1),
        Opcode::Output,
        Opcode::LoopEnd(0),
    ]);
    assert!(program.verify_pairing().is_err());
}

#[test]
fn test_verify_pairing_rejects_dangling_end() {
    let program = IrProgram::from_opcodes([Opcode::LoopEnd(0)]);
    assert!(program.verify_pairing().is_err());
}

#[test]
fn test_verify_pairing_rejects_out_of_bounds_target() {
    let program = IrProgram::from_opcodes([Opcode::LoopStart(9)]);
    assert!(program.verify_pairing().is_err());
}

#[test]
fn test_programs_compare_structurally() {
    let a = IrProgram::from_opcodes([Opcode::Add(1)]);
    let b = IrProgram::from_opcodes([Opcode::Add(1)]);
    let c = IrProgram::from_opcodes([Opcode::Add(2)]);
    assert_eq!(a, b);
    assert_ne!(a, c);
}
