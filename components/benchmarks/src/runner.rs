//! Benchmark runner and result types
//!
//! Provides infrastructure for running each benchmark in both execution
//! modes, checking that the modes agree, and collecting results.

use bf_cli::{CliResult, Runtime};
use core_types::ExecutionMode;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// A single benchmark program
#[derive(Debug, Clone)]
pub struct Benchmark {
    /// Name of the benchmark
    pub name: String,
    /// Description of what the benchmark tests
    pub description: String,
    /// Program text to execute
    pub code: String,
    /// Bytes fed to `,`
    pub input: Vec<u8>,
}

/// Result of running a benchmark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Name of the benchmark
    pub name: String,
    /// Description of the benchmark
    pub description: String,
    /// Direct interpretation time in milliseconds
    pub direct_ms: f64,
    /// Compile plus IR execution time in milliseconds
    pub ir_ms: f64,
    /// `direct_ms / ir_ms`, when both are measurable
    pub speedup: Option<f64>,
    /// Bytes the program wrote, excluding the trailing newline
    pub output_bytes: usize,
    /// Whether both modes completed and produced the same output
    pub success: bool,
    /// Error message if failed
    pub error: Option<String>,
}

impl Benchmark {
    /// Create a benchmark that reads no input
    pub fn new(name: &str, description: &str, code: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            code: code.to_string(),
            input: Vec::new(),
        }
    }

    /// Attach input bytes
    pub fn with_input(mut self, input: Vec<u8>) -> Self {
        self.input = input;
        self
    }

    /// Run this benchmark once in each mode
    ///
    /// # Arguments
    /// * `runtime` - The runtime to use for execution
    ///
    /// # Returns
    /// A `BenchmarkResult` with timing, and a failure if either mode errors
    /// or the two outputs differ
    pub fn run(&self, runtime: &mut Runtime) -> BenchmarkResult {
        runtime.load_string(&self.code);
        let direct = self.time_mode(runtime, ExecutionMode::Direct);
        // Loading leaves no IR behind, so this includes compilation
        let ir = self.time_mode(runtime, ExecutionMode::Ir);

        match (direct, ir) {
            (Ok((direct_ms, direct_out)), Ok((ir_ms, ir_out))) => {
                let mut result = self.result(direct_ms, ir_ms);
                result.output_bytes = direct_out.len().saturating_sub(1);
                if direct_out != ir_out {
                    result.success = false;
                    result.error = Some(format!(
                        "outputs differ: direct wrote {} bytes, ir wrote {} bytes",
                        direct_out.len(),
                        ir_out.len()
                    ));
                }
                result
            }
            (Err(e), _) | (_, Err(e)) => {
                let mut result = self.result(0.0, 0.0);
                result.success = false;
                result.error = Some(e.to_string());
                result
            }
        }
    }

    /// Run this benchmark multiple times and return average
    ///
    /// # Arguments
    /// * `runtime` - The runtime to use
    /// * `iterations` - Number of times to run the benchmark
    ///
    /// # Returns
    /// A `BenchmarkResult` with averaged timing information
    pub fn run_multiple(&self, runtime: &mut Runtime, iterations: usize) -> BenchmarkResult {
        let iterations = iterations.max(1);
        let mut total_direct = 0.0;
        let mut total_ir = 0.0;
        let mut last = self.run(runtime);

        for i in 0..iterations {
            if i > 0 {
                last = self.run(runtime);
            }
            if !last.success {
                return last; // Return error immediately
            }
            total_direct += last.direct_ms;
            total_ir += last.ir_ms;
        }

        let runs = iterations as f64;
        last.direct_ms = total_direct / runs;
        last.ir_ms = total_ir / runs;
        last.speedup = speedup(last.direct_ms, last.ir_ms);
        last
    }

    fn time_mode(&self, runtime: &mut Runtime, mode: ExecutionMode) -> CliResult<(f64, Vec<u8>)> {
        let mut output = Vec::new();
        let start = Instant::now();
        runtime.execute_with(mode, self.input.as_slice(), &mut output)?;
        Ok((start.elapsed().as_secs_f64() * 1000.0, output))
    }

    fn result(&self, direct_ms: f64, ir_ms: f64) -> BenchmarkResult {
        BenchmarkResult {
            name: self.name.clone(),
            description: self.description.clone(),
            direct_ms,
            ir_ms,
            speedup: speedup(direct_ms, ir_ms),
            output_bytes: 0,
            success: true,
            error: None,
        }
    }
}

fn speedup(direct_ms: f64, ir_ms: f64) -> Option<f64> {
    (direct_ms > 0.0 && ir_ms > 0.0).then(|| direct_ms / ir_ms)
}

/// Suite of benchmarks
pub struct BenchmarkSuite {
    /// Name of the suite
    pub name: String,
    /// Benchmarks in this suite
    pub benchmarks: Vec<Benchmark>,
}

impl BenchmarkSuite {
    /// Create a new benchmark suite
    pub fn new(name: String) -> Self {
        Self {
            name,
            benchmarks: Vec::new(),
        }
    }

    /// Add a benchmark to this suite
    pub fn add(&mut self, benchmark: Benchmark) {
        self.benchmarks.push(benchmark);
    }

    /// Run all benchmarks in this suite
    ///
    /// # Arguments
    /// * `runtime` - The runtime to use
    ///
    /// # Returns
    /// Vector of results for each benchmark
    pub fn run(&self, runtime: &mut Runtime) -> Vec<BenchmarkResult> {
        self.benchmarks.iter().map(|b| b.run(runtime)).collect()
    }

    /// Run all benchmarks multiple times and average
    pub fn run_multiple(&self, runtime: &mut Runtime, iterations: usize) -> Vec<BenchmarkResult> {
        self.benchmarks
            .iter()
            .map(|b| b.run_multiple(runtime, iterations))
            .collect()
    }
}

/// Format benchmark results as a human-readable table
pub fn format_results(results: &[BenchmarkResult]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n{:<24} {:>12} {:>12} {:>9}  {:<8}\n",
        "Benchmark", "Direct (ms)", "IR (ms)", "Speedup", "Status"
    ));
    output.push_str(&format!("{}\n", "=".repeat(70)));

    for result in results {
        let status = if result.success { "✓ PASS" } else { "✗ FAIL" };
        let speedup = result
            .speedup
            .map(|s| format!("{:.2}x", s))
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "{:<24} {:>12.2} {:>12.2} {:>9}  {:<8}\n",
            result.name, result.direct_ms, result.ir_ms, speedup, status
        ));

        if let Some(error) = &result.error {
            output.push_str(&format!("  Error: {}\n", error));
        }
    }

    output
}

/// Format benchmark results as JSON
pub fn format_results_json(results: &[BenchmarkResult]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}
