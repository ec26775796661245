//! Corten BF Runtime CLI
//!
//! Entry point for the runtime. Parses CLI arguments and delegates to the
//! Runtime for execution.

use bf_cli::{Cli, CliError, CliResult, Runtime};
use clap::Parser as ClapParser;
use std::io;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout belongs to the program being run.
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Returns `Ok(false)` when at least one of several files failed.
fn run(cli: &Cli) -> CliResult<bool> {
    let mut runtime = Runtime::new(cli.config()?).with_print_ir(cli.print_ir);

    if cli.repl {
        runtime.repl()?;
        return Ok(true);
    }

    if let Some(code) = &cli.eval {
        let start = Instant::now();
        runtime.load_string(code);
        run_loaded(&mut runtime, start, cli.time)?;
        return Ok(true);
    }

    if cli.files.is_empty() {
        let start = Instant::now();
        runtime.load_reader(io::stdin().lock())?;
        run_loaded(&mut runtime, start, cli.time)?;
        return Ok(true);
    }

    let mut all_ok = true;
    for file in &cli.files {
        let start = Instant::now();
        let result = runtime
            .load_file(file)
            .and_then(|()| run_loaded(&mut runtime, start, cli.time));
        match result {
            Ok(()) => {}
            Err(e @ CliError::Load { .. }) => {
                eprintln!("Error: {}", e);
                all_ok = false;
            }
            Err(e) => {
                eprintln!("Error: {}: {}", file.display(), e);
                all_ok = false;
            }
        }
    }
    Ok(all_ok)
}

fn run_loaded(runtime: &mut Runtime, start: Instant, time: bool) -> CliResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    runtime.run_configured(stdin.lock(), stdout.lock())?;

    if time {
        println!(
            "Execution time: {:.3} ms",
            start.elapsed().as_secs_f64() * 1000.0
        );
    }
    Ok(())
}
