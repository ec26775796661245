//! Contract compliance tests for core_types
//!
//! These tests pin the public surface the compiler, interpreters and CLI
//! rely on.

use core_types::{
    BfError, BfResult, ErrorKind, ExecutionConfig, ExecutionMode, SourceBuffer, SourcePosition,
};

#[cfg(test)]
mod error_contract_tests {
    use super::*;

    fn origin() -> SourcePosition {
        SourcePosition {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Contract: every error variant maps to exactly one kind
    #[test]
    fn test_error_variants_and_kinds() {
        let cases: Vec<(BfError, ErrorKind)> = vec![
            (
                BfError::UnmatchedLoopStart { position: origin() },
                ErrorKind::Structural,
            ),
            (
                BfError::UnmatchedLoopEnd { position: origin() },
                ErrorKind::Structural,
            ),
            (
                BfError::TapeOutOfRange {
                    head: -1,
                    heap_size: 1,
                },
                ErrorKind::TapeOutOfRange,
            ),
            (
                BfError::Io(std::io::Error::other("boom")),
                ErrorKind::Io,
            ),
            (BfError::InvalidHeapSize(0), ErrorKind::Config),
            (BfError::NoSource, ErrorKind::Config),
        ];

        for (error, kind) in cases {
            assert_eq!(error.kind(), kind, "{}", error);
        }
    }

    /// Contract: BfResult is a plain Result alias
    #[test]
    fn test_result_alias() {
        let ok: BfResult<u8> = Ok(3);
        assert_eq!(ok.unwrap(), 3);
    }
}

#[cfg(test)]
mod config_contract_tests {
    use super::*;

    /// Contract: the default engine is the IR interpreter on a 64 KiB tape
    #[test]
    fn test_default_config() {
        assert_eq!(
            ExecutionConfig::default(),
            ExecutionConfig {
                heap_size: 65536,
                mode: ExecutionMode::Ir
            }
        );
    }

    /// Contract: source buffers compare by content
    #[test]
    fn test_source_buffer_equality() {
        assert_eq!(
            SourceBuffer::from_string("+"),
            SourceBuffer::from_bytes(vec![b'+'])
        );
    }
}
