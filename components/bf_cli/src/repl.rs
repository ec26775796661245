//! REPL (Read-Eval-Print Loop) implementation
//!
//! Every entered line is an independent program. Lines that leave a `[`
//! open are joined with the following lines until the brackets balance.

use crate::error::{CliError, CliResult};
use crate::runtime::Runtime;
use core_types::ExecutionMode;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Read, Write};

/// What the loop should do after a dot-command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Keep reading input
    Continue,
    /// Leave the REPL
    Exit,
}

/// Run the interactive REPL
///
/// # Arguments
/// * `runtime` - The Runtime instance to use for execution
///
/// # Returns
/// `Ok(())` when REPL exits normally
pub fn run_repl(runtime: &mut Runtime) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Repl(format!("Failed to initialize editor: {}", e)))?;

    println!("Corten BF Runtime v{}", env!("CARGO_PKG_VERSION"));
    println!("Type a program, .help for commands or 'exit' to quit.");
    println!();

    let mut line_buffer = String::new();

    loop {
        let prompt = if line_buffer.is_empty() { "> " } else { "... " };

        match editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if line_buffer.is_empty() && is_command(trimmed) {
                    if handle_repl_command(trimmed, runtime) == CommandOutcome::Exit {
                        println!("Goodbye!");
                        break;
                    }
                    continue;
                }

                if !line_buffer.is_empty() {
                    line_buffer.push('\n');
                }
                line_buffer.push_str(&line);

                if !is_input_complete(&line_buffer) {
                    continue;
                }

                let _ = editor.add_history_entry(line_buffer.as_str());

                let stdout = io::stdout();
                if let Err(e) = evaluate(runtime, &line_buffer, io::stdin().lock(), stdout.lock())
                {
                    // The program may have left the cursor mid-line
                    println!();
                    eprintln!("Error: {}", e);
                }

                line_buffer.clear();
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C
                if line_buffer.is_empty() {
                    println!("Press Ctrl-D or type 'exit' to quit");
                } else {
                    println!("^C");
                    line_buffer.clear();
                }
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                return Err(CliError::Repl(format!("Readline error: {}", err)));
            }
        }
    }

    Ok(())
}

/// Load, optionally compile, and execute one REPL entry
///
/// # Errors
/// Returns `CliError` for structural, tape or I/O failures of the entry.
pub fn evaluate<R: Read, W: Write>(
    runtime: &mut Runtime,
    program: &str,
    input: R,
    output: W,
) -> CliResult<()> {
    runtime.load_string(program);
    runtime.run_configured(input, output)?;
    Ok(())
}

fn is_command(input: &str) -> bool {
    input.starts_with('.') || input == "exit" || input == "quit"
}

/// Handle special REPL commands
pub fn handle_repl_command(command: &str, runtime: &mut Runtime) -> CommandOutcome {
    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or("");
    let arg = parts.next();

    match (name, arg) {
        (".exit" | "exit" | "quit", _) => return CommandOutcome::Exit,
        (".help", _) => {
            println!("REPL Commands:");
            println!("  .help           - Show this help message");
            println!("  .mode [MODE]    - Show or set the engine (direct, ir)");
            println!("  .heap [CELLS]   - Show or set the tape length");
            println!("  .ir             - Toggle printing the IR before execution");
            println!("  .exit           - Exit the REPL");
            println!("  exit            - Exit the REPL");
            println!("  quit            - Exit the REPL");
        }
        (".mode", None) => println!("Execution mode: {}", runtime.mode().name()),
        (".mode", Some(value)) => match value.parse::<ExecutionMode>() {
            Ok(mode) => {
                runtime.set_mode(mode);
                println!("Execution mode: {}", mode.name());
            }
            Err(e) => println!("{}", e),
        },
        (".heap", None) => println!("Heap size: {} cells", runtime.heap_size()),
        (".heap", Some(value)) => match value.parse::<usize>() {
            Ok(size) => match runtime.set_heap_size(size) {
                Ok(()) => println!("Heap size: {} cells", size),
                Err(e) => println!("{}", e),
            },
            Err(_) => println!("'{}' is not a valid cell count", value),
        },
        (".ir", _) => {
            let enabled = !runtime.is_print_ir_enabled();
            runtime.set_print_ir(enabled);
            println!(
                "IR printing: {}",
                if enabled { "enabled" } else { "disabled" }
            );
        }
        _ => {
            println!("Unknown command: {}", command);
            println!("Type .help for available commands");
        }
    }

    CommandOutcome::Continue
}

/// Net count of `[` over `]`, ignoring every other byte
fn bracket_depth(input: &str) -> i64 {
    input.bytes().fold(0, |depth, b| match b {
        b'[' => depth + 1,
        b']' => depth - 1,
        _ => depth,
    })
}

/// Check if the input appears to be complete
///
/// An excess of `]` is also complete, so the runtime can report it.
fn is_input_complete(input: &str) -> bool {
    bracket_depth(input) <= 0
}
