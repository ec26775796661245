//! Contract compliance tests for bytecode_system
//! Verifies the public surface used by the interpreter and CLI crates

use bytecode_system::{
    check_brackets, compile, CompileStats, Compiler, Instruction, IrProgram, Opcode, Symbol,
    UNRESOLVED_TARGET,
};
use core_types::{BfResult, SourceBuffer};

/// Verify all opcode variants exist
#[test]
fn test_contract_opcode_variants() {
    // Cell arithmetic
    let _ = Opcode::Add(1);
    let _ = Opcode::Sub(1);
    let _ = Opcode::AssignZero;

    // Head movement
    let _ = Opcode::MoveRight(1);
    let _ = Opcode::MoveLeft(1);

    // I/O
    let _ = Opcode::Output;
    let _ = Opcode::Input;

    // Control flow
    let _ = Opcode::LoopStart(0);
    let _ = Opcode::LoopEnd(0);
}

/// Verify operands are exposed uniformly
#[test]
fn test_contract_operands() {
    assert_eq!(Opcode::Add(5).operand(), Some(5));
    assert_eq!(Opcode::LoopEnd(2).operand(), Some(2));
    assert_eq!(Opcode::Output.operand(), None);
    assert_eq!(Opcode::AssignZero.operand(), None);
    assert!(Opcode::Input.has_side_effect());
    assert!(!Opcode::Add(1).has_side_effect());
}

/// Verify every instruction symbol is recognized
#[test]
fn test_contract_symbols() {
    let symbols: Vec<Option<Symbol>> = b"+-><.,[]".iter().map(|&b| Symbol::from_byte(b)).collect();
    assert!(symbols.iter().all(Option::is_some));
}

/// Verify the compile entry points
#[test]
fn test_contract_compile_api() {
    let source = SourceBuffer::from_string("+[-]");
    let program: BfResult<IrProgram> = compile(&source);
    assert!(program.is_ok());

    let mut compiler = Compiler::new();
    let _ = compiler.compile(&source);
    let stats: CompileStats = compiler.stats();
    assert_eq!(stats.instructions, 2);

    assert!(check_brackets(&source).is_ok());
}

/// Verify instruction layout
#[test]
fn test_contract_instruction() {
    let inst = Instruction::new(Opcode::LoopStart(UNRESOLVED_TARGET), 4);
    assert_eq!(inst.offset, 4);
    assert_eq!(inst.opcode.operand(), Some(usize::MAX));
}
