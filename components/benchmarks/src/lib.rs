//! Benchmark infrastructure for Corten BF Runtime
//!
//! This crate provides benchmarking tools comparing the direct
//! interpreter with compile-then-dispatch execution. It includes:
//!
//! - Micro-benchmarks for the patterns the compiler rewrites
//! - A suite of classic small programs
//! - Benchmark runner with timing, mode cross-checking and result formatting
//!
//! # Examples
//!
//! ```rust,no_run
//! use benchmarks::micro;
//!
//! let results = micro::run_all();
//! for result in results {
//!     println!("{}: {:.2}ms / {:.2}ms", result.name, result.direct_ms, result.ir_ms);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classic;
pub mod micro;
pub mod runner;

pub use runner::{Benchmark, BenchmarkResult, BenchmarkSuite};
