//! Lispy CLI
//!
//! Entry point for every command-line mode. With no subcommand the binary
//! starts the REPL.

use std::{path::PathBuf, process};

use clap::{Parser, Subcommand};

use crate::{
    builtins::default_registry,
    engine::{ExecutionPipeline, OutputSink, StdoutSink},
    errors::{print_error, LispyError},
    repl::run_repl,
    test_harness::{run_all_tests, TestConfig},
    value::render,
};

// ============================================================================
// CLI ARGUMENTS
// ============================================================================

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "lispy",
    version,
    about = "An evaluator for S-expressions and Q-expressions."
)]
pub struct LispyArgs {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the interactive prompt.
    Repl,
    /// Evaluate every line of a file and print each result.
    Run {
        /// The path to the Lispy source file.
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Evaluate a single expression and print the result.
    Eval {
        /// The expression, e.g. "+ 1 2".
        #[arg(required = true)]
        expr: String,
    },
    /// Show the parse tree of an expression.
    Ast {
        #[arg(required = true)]
        expr: String,
        /// Print the tree as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Discover and run YAML test suites in a directory.
    Test {
        /// The directory containing `.yaml` suites.
        #[arg(default_value = "tests/suites")]
        path: PathBuf,
        /// Only run cases whose name contains this substring.
        #[arg(long)]
        filter: Option<String>,
    },
    /// List all builtins with their documentation.
    ListBuiltins,
}

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

/// The main entry point for the CLI.
pub fn run() {
    let args = LispyArgs::parse();

    match args.command.unwrap_or(Command::Repl) {
        Command::Repl => run_repl(),

        Command::Run { file } => {
            exit_on_error(ExecutionPipeline::run_file(&file, &mut StdoutSink));
        }

        Command::Eval { expr } => {
            let value = exit_on_error(ExecutionPipeline::new("<eval>").evaluate_source(&expr));
            StdoutSink.emit(&render(&value));
        }

        Command::Ast { expr, json } => {
            let tree = exit_on_error(ExecutionPipeline::new("<ast>").parse_source(&expr));
            if json {
                match serde_json::to_string_pretty(&tree) {
                    Ok(text) => println!("{text}"),
                    Err(e) => {
                        eprintln!("Failed to serialize parse tree: {e}");
                        process::exit(1);
                    }
                }
            } else {
                print!("{tree}");
            }
        }

        Command::Test { path, filter } => {
            let config = TestConfig {
                test_root: path.display().to_string(),
                ..TestConfig::default()
            };
            let (_, failed, _) = run_all_tests(filter.as_deref(), &config);
            if failed > 0 {
                process::exit(1);
            }
        }

        Command::ListBuiltins => {
            for (name, doc) in default_registry().list() {
                println!("{name:<6} {doc}");
            }
        }
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn exit_on_error<T>(result: Result<T, LispyError>) -> T {
    result.unwrap_or_else(|e| {
        print_error(e);
        process::exit(1);
    })
}
