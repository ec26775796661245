//! End-to-End Runtime Integration Tests
//!
//! Tests the complete runtime through the bf_cli Runtime API.
//! This is the highest level integration test - source text to final bytes.

use bf_cli::{CliError, Runtime};
use core_types::{BfError, ExecutionConfig, ExecutionMode};
use std::fs;

const HELLO_WORLD: &str = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";

fn runtime(heap_size: usize, mode: ExecutionMode) -> Runtime {
    Runtime::new(ExecutionConfig::new(heap_size, mode).unwrap())
}

/// Test: Hello World in both modes, followed by one newline
#[test]
fn test_e2e_hello_world() {
    for mode in [ExecutionMode::Direct, ExecutionMode::Ir] {
        let mut rt = runtime(65536, mode);
        rt.load_string(HELLO_WORLD);
        let mut out = Vec::new();
        rt.run_configured(&b""[..], &mut out).expect("Execution failed");
        assert_eq!(out, b"Hello World!\n\n", "mode {:?}", mode);
    }
}

/// Test: `+++.` on a one-cell tape
#[test]
fn test_e2e_single_cell() {
    let mut rt = runtime(1, ExecutionMode::Ir);
    rt.load_string("+++.");
    let mut out = Vec::new();
    rt.run_configured(&b""[..], &mut out).unwrap();
    assert_eq!(out, vec![0x03, b'\n']);
}

/// Test: echo one byte
#[test]
fn test_e2e_echo() {
    let mut rt = runtime(8, ExecutionMode::Direct);
    rt.load_string(",.");
    let mut out = Vec::new();
    rt.run_configured(&[0x41u8][..], &mut out).unwrap();
    assert_eq!(out, vec![0x41, b'\n']);
}

/// Test: a sequence of programs through one runtime stays independent
#[test]
fn test_e2e_program_sequence() {
    let mut rt = runtime(4, ExecutionMode::Ir);
    let mut out = Vec::new();

    let programs: [(&str, bool); 4] = [
        ("++>+++.", true),
        ("[", false),
        ("<", false),
        (".>.", true),
    ];

    for (src, should_succeed) in programs {
        rt.load_string(src);
        let result = rt.run_configured(&b""[..], &mut out);
        assert_eq!(result.is_ok(), should_succeed, "program {:?}", src);
    }

    // The last program sees a fresh, all-zero tape
    assert_eq!(out, vec![3, b'\n', 0, 0, b'\n']);
}

/// Test: structural errors surface through the runtime
#[test]
fn test_e2e_structural_errors() {
    let mut rt = runtime(8, ExecutionMode::Ir);

    rt.load_string("[");
    let err = rt.run_configured(&b""[..], &mut Vec::<u8>::new()).unwrap_err();
    assert!(matches!(err, CliError::Bf(BfError::UnmatchedLoopStart { .. })));
    assert!(!rt.is_compiled());

    rt.load_string("]");
    let err = rt.run_configured(&b""[..], &mut Vec::<u8>::new()).unwrap_err();
    assert!(matches!(err, CliError::Bf(BfError::UnmatchedLoopEnd { .. })));
}

/// Test: moving left of the origin is fatal with head -1
#[test]
fn test_e2e_left_of_origin() {
    for mode in [ExecutionMode::Direct, ExecutionMode::Ir] {
        let mut rt = runtime(1, mode);
        rt.load_string("<");
        let err = rt.run_configured(&b""[..], &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Bf(BfError::TapeOutOfRange { head: -1, heap_size: 1 })
        ));
    }
}

/// Test: loading from a file and from a stream
#[test]
fn test_e2e_load_sources() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("two.bf");
    fs::write(&path, "++.").unwrap();

    let mut rt = Runtime::default();
    rt.load_file(&path).unwrap();
    let mut out = Vec::new();
    rt.run_with(&b""[..], &mut out).unwrap();

    rt.load_reader(&b"+++."[..]).unwrap();
    rt.compile().unwrap();
    rt.run_with(&b""[..], &mut out).unwrap();

    assert_eq!(out, vec![2, b'\n', 3, b'\n']);
}

/// Test: the same loaded program runs identically in either mode
#[test]
fn test_e2e_switch_modes_on_one_load() {
    let mut rt = Runtime::default();
    rt.load_string(",[>+>++<<-]>.>.");

    let mut direct = Vec::new();
    rt.execute_with(ExecutionMode::Direct, &[7u8][..], &mut direct)
        .unwrap();
    let mut ir = Vec::new();
    rt.execute_with(ExecutionMode::Ir, &[7u8][..], &mut ir).unwrap();

    assert_eq!(direct, vec![7, 14, b'\n']);
    assert_eq!(direct, ir);
}
