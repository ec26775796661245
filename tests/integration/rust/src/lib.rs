//! Integration test suite for Corten BF Runtime
//!
//! This crate provides integration tests that verify components work
//! together correctly across component boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use bf_cli;
    pub use bytecode_system;
    pub use core_types;
    pub use interpreter;
}
