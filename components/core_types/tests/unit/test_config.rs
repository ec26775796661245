//! Unit tests for ExecutionConfig and ExecutionMode

use core_types::{BfError, ExecutionConfig, ExecutionMode, DEFAULT_HEAP_SIZE, EOF_SENTINEL};

#[test]
fn test_constants() {
    assert_eq!(DEFAULT_HEAP_SIZE, 65536);
    assert_eq!(EOF_SENTINEL, 0xFF);
}

#[test]
fn test_config_new() {
    let config = ExecutionConfig::new(30000, ExecutionMode::Direct).unwrap();
    assert_eq!(config.heap_size, 30000);
    assert_eq!(config.mode, ExecutionMode::Direct);
}

#[test]
fn test_config_single_cell_is_valid() {
    assert!(ExecutionConfig::new(1, ExecutionMode::Ir).is_ok());
}

#[test]
fn test_config_empty_tape_is_invalid() {
    assert!(matches!(
        ExecutionConfig::new(0, ExecutionMode::Ir),
        Err(BfError::InvalidHeapSize(0))
    ));
}

#[test]
fn test_mode_names() {
    assert_eq!(ExecutionMode::Direct.name(), "direct");
    assert_eq!(ExecutionMode::Ir.name(), "ir");
    assert_eq!("0".parse::<ExecutionMode>(), Ok(ExecutionMode::Direct));
}
