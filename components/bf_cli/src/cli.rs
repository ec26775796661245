//! Command-line argument definitions

use clap::{ArgAction, Parser};
use core_types::{BfResult, ExecutionConfig, ExecutionMode, DEFAULT_HEAP_SIZE};
use std::path::PathBuf;

/// Corten BF Runtime - interpret or compile-and-run tape programs
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "corten-bf", version, long_about = None)]
pub struct Cli {
    /// Program files, executed in order (reads the program from stdin when none are given)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Execute inline program text
    #[arg(short, long, value_name = "CODE", conflicts_with = "files")]
    pub eval: Option<String>,

    /// Optimization level: 0 interprets the source directly, 1 compiles to IR first
    #[arg(short = 'O', long = "optimize", value_name = "LEVEL", default_value_t = 1)]
    pub optimize: u8,

    /// Tape length in cells
    #[arg(
        short = 'H',
        long = "heapsize",
        value_name = "HEAP_SIZE",
        default_value_t = DEFAULT_HEAP_SIZE,
        value_parser = parse_heap_size
    )]
    pub heap_size: usize,

    /// Print the execution time of each program
    #[arg(short, long)]
    pub time: bool,

    /// Print the IR disassembly to stderr before executing
    #[arg(long)]
    pub print_ir: bool,

    /// Start the interactive REPL
    #[arg(short, long, conflicts_with_all = ["files", "eval"])]
    pub repl: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Arguments for running a single file with default settings
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            files: vec![path.into()],
            eval: None,
            optimize: 1,
            heap_size: DEFAULT_HEAP_SIZE,
            time: false,
            print_ir: false,
            repl: false,
            verbose: 0,
        }
    }

    /// Engine selected by `-O`
    pub fn execution_mode(&self) -> ExecutionMode {
        ExecutionMode::from_opt_level(self.optimize)
    }

    /// Validated execution configuration
    pub fn config(&self) -> BfResult<ExecutionConfig> {
        ExecutionConfig::new(self.heap_size, self.execution_mode())
    }

    /// Default log filter for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn parse_heap_size(value: &str) -> Result<usize, String> {
    let size: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a valid cell count", value))?;
    if size == 0 {
        return Err("the tape needs at least one cell".to_string());
    }
    Ok(size)
}
