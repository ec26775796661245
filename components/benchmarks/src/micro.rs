//! Micro-benchmarks for fundamental tape operations
//!
//! Each program stresses one pattern the lowering compiler rewrites:
//! long counted runs, clear loops, nested loops and wide pointer moves.

use crate::runner::{Benchmark, BenchmarkResult};
use bf_cli::Runtime;

/// Create all micro-benchmarks
pub fn create_benchmarks() -> Vec<Benchmark> {
    vec![
        Benchmark::new(
            "cell_wrapping",
            "4K inner loops counting a cell up through 255 to 0",
            "++++++++++++++++[>-[>+[+]<-]<-]",
        ),
        Benchmark::new(
            "nested_loops",
            "Four nested loops of 16 iterations each",
            "++++++++++++++++[>++++++++++++++++[>++++++++++++++++[>++++++++++++++++[>+<-]<-]<-]<-]",
        ),
        Benchmark::new(
            "clear_loops",
            "4K clear loops on a cell holding 255",
            "++++++++++++++++[>-[>-[-]<-]<-]",
        ),
        Benchmark::new(
            "pointer_sweep",
            "65K transfers across ten cells",
            "-[>-[>>>>>>>>>>+<<<<<<<<<<-]<-]",
        ),
        Benchmark::new(
            "counted_runs",
            "Long runs of identical commands",
            &format!(
                "{}[-]{}{}",
                "+".repeat(1000),
                ">".repeat(1000),
                "<".repeat(1000)
            ),
        ),
    ]
}

/// Run all micro-benchmarks
///
/// # Returns
/// Vector of benchmark results
pub fn run_all() -> Vec<BenchmarkResult> {
    let mut runtime = Runtime::default();
    create_benchmarks()
        .iter()
        .map(|b| b.run(&mut runtime))
        .collect()
}
