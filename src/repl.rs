//! Lispy REPL (Read-Eval-Print Loop)
//!
//! Reads lines with `rustyline` (editing and history), evaluates each complete
//! input and prints the result.

use rustyline::error::ReadlineError;
use rustyline::Editor;

use crate::engine::{ExecutionPipeline, OutputSink, StdoutSink};
use crate::errors::print_error;
use crate::value::render;

const PROMPT: &str = "lispy> ";
const CONTINUATION_PROMPT: &str = "   ...> ";

/// REPL state that persists across inputs
pub struct ReplState {
    line_number: usize,
}

impl Default for ReplState {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplState {
    pub fn new() -> Self {
        Self { line_number: 1 }
    }

    /// Evaluate one complete input and emit its rendered result.
    pub fn eval_line(&mut self, input: &str, output: &mut dyn OutputSink) -> Result<(), ()> {
        let pipeline = ExecutionPipeline::new(format!("<repl:{}>", self.line_number));
        self.line_number += 1;

        match pipeline.evaluate_source(input) {
            Ok(value) => {
                output.emit(&render(&value));
                Ok(())
            }
            Err(e) => {
                print_error(e);
                Err(())
            }
        }
    }
}

/// Main REPL entry point
pub fn run_repl() {
    println!("Lispy Version {}", env!("CARGO_PKG_VERSION"));
    println!("Press Ctrl+C to exit, :help for commands");
    println!();

    let mut editor = Editor::<()>::new();
    let mut repl_state = ReplState::new();
    let mut input_buffer = String::new();
    let mut stdout = StdoutSink;

    loop {
        let prompt = if input_buffer.is_empty() {
            PROMPT
        } else {
            CONTINUATION_PROMPT
        };

        match editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim();

                if input_buffer.is_empty() && line.starts_with(':') {
                    match handle_repl_command(line) {
                        ReplCommand::Continue => continue,
                        ReplCommand::Quit => break,
                    }
                }

                if !input_buffer.is_empty() {
                    input_buffer.push(' ');
                }
                input_buffer.push_str(line);

                // An empty line forces evaluation so the parser can report
                // what is missing.
                if is_complete_expression(&input_buffer) || line.is_empty() {
                    if !input_buffer.trim().is_empty() {
                        editor.add_history_entry(input_buffer.as_str());
                        let _ = repl_state.eval_line(&input_buffer, &mut stdout);
                    }
                    input_buffer.clear();
                }
            }
            Err(ReadlineError::Interrupted) if !input_buffer.is_empty() => {
                input_buffer.clear();
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        }
    }
}

/// REPL command results
enum ReplCommand {
    Continue,
    Quit,
}

/// Handle special REPL commands that start with ':'
fn handle_repl_command(command: &str) -> ReplCommand {
    match command.to_ascii_lowercase().as_str() {
        ":help" | ":h" => {
            println!("Lispy REPL Commands:");
            println!("  :help, :h     Show this help");
            println!("  :quit, :q     Exit the REPL");
            println!();
            println!("Builtins: head tail list eval init cons len + - * / % ^ min max");
            println!("Unbalanced ( or {{ continues the input on the next line.");
            ReplCommand::Continue
        }
        ":quit" | ":q" => ReplCommand::Quit,
        _ => {
            println!("Unknown command: {command}. Type :help for available commands.");
            ReplCommand::Continue
        }
    }
}

/// An input is complete once every `(` and `{` has been closed.
///
/// Extra closers also count as complete; the parser reports them.
fn is_complete_expression(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return false;
    }

    let mut depth: i64 = 0;
    for ch in trimmed.chars() {
        match ch {
            '(' | '{' => depth += 1,
            ')' | '}' => depth -= 1,
            _ => {}
        }
    }
    depth <= 0
}
