//! Unit tests for the bytecode system

mod test_program;
