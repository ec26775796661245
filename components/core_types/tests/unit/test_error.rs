//! Unit tests for BfError and ErrorKind

use core_types::{BfError, ErrorKind, SourceBuffer};

#[test]
fn test_unmatched_loop_start_message() {
    let source = SourceBuffer::from_string("++\n [");
    let error = BfError::UnmatchedLoopStart {
        position: source.position_of(4),
    };

    assert_eq!(error.to_string(), "unmatched '[' at line 2, column 2");
    assert_eq!(error.kind(), ErrorKind::Structural);
}

#[test]
fn test_tape_out_of_range_kind() {
    let error = BfError::TapeOutOfRange {
        head: 65536,
        heap_size: 65536,
    };
    assert_eq!(error.kind(), ErrorKind::TapeOutOfRange);
    assert!(error.to_string().contains("65536"));
}

#[test]
fn test_io_error_source_is_preserved() {
    use std::error::Error;

    let error = BfError::from(std::io::Error::new(
        std::io::ErrorKind::UnexpectedEof,
        "stdin closed",
    ));
    assert!(error.source().is_some());
    assert!(error.to_string().contains("stdin closed"));
}

#[test]
fn test_config_errors() {
    assert_eq!(BfError::NoSource.kind(), ErrorKind::Config);
    assert_eq!(
        BfError::InvalidHeapSize(0).to_string(),
        "invalid heap size 0: the tape needs at least one cell"
    );
}
