//! Corten Benchmark CLI
//!
//! Command-line interface for timing programs in both execution modes.

use benchmarks::{classic, micro, runner, BenchmarkResult};
use bf_cli::Runtime;
use clap::{Parser, ValueEnum};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Corten BF Runtime Benchmark Tool
#[derive(Parser, Debug)]
#[command(name = "corten-bf-bench", version, long_about = None)]
struct Args {
    /// Suite to run
    #[arg(value_enum, default_value_t = Suite::All)]
    suite: Suite,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Runs per benchmark; reported times are averages
    #[arg(short = 'n', long, default_value_t = 1)]
    iterations: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Suite {
    Micro,
    Classic,
    All,
}

fn run_micro(iterations: usize) -> Vec<BenchmarkResult> {
    if iterations <= 1 {
        return micro::run_all();
    }
    let mut runtime = Runtime::default();
    micro::create_benchmarks()
        .iter()
        .map(|b| b.run_multiple(&mut runtime, iterations))
        .collect()
}

fn run_classic(iterations: usize) -> Vec<BenchmarkResult> {
    let mut runtime = Runtime::default();
    classic::create_suite().run_multiple(&mut runtime, iterations)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let announce = |msg: &str| {
        if !args.json {
            println!("{}", msg);
        }
    };

    let results = match args.suite {
        Suite::Micro => {
            announce("Running micro-benchmarks...\n");
            run_micro(args.iterations)
        }
        Suite::Classic => {
            announce("Running classic programs...\n");
            run_classic(args.iterations)
        }
        Suite::All => {
            announce("Running all benchmarks...\n");
            announce("=== Micro-benchmarks ===");
            let mut all_results = run_micro(args.iterations);
            announce("\n=== Classic ===");
            all_results.extend(run_classic(args.iterations));
            all_results
        }
    };

    let failed = results.iter().filter(|r| !r.success).count();

    // Output results
    if args.json {
        match runner::format_results_json(&results) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error formatting JSON: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", runner::format_results(&results));

        // Summary statistics
        let direct_total: f64 = results.iter().map(|r| r.direct_ms).sum();
        let ir_total: f64 = results.iter().map(|r| r.ir_ms).sum();

        println!("\nSummary:");
        println!("  Total benchmarks: {}", results.len());
        println!("  Successful: {}", results.len() - failed);
        println!("  Failed: {}", failed);
        println!("  Direct time: {:.2} ms", direct_total);
        println!("  IR time: {:.2} ms", ir_total);
    }

    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
