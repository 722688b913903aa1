//! The execution pipeline: source text → parse tree → value tree → result.
//!
//! Hosts (REPL, CLI, test harness) go through [`ExecutionPipeline`] instead of
//! wiring the stages together themselves.

use std::fs;
use std::path::Path;

use log::trace;

use crate::errors::LispyError;
use crate::eval::evaluate;
use crate::ingest::ingest;
use crate::syntax::{parser, ParseNode};
use crate::value::{render, Value};

// ============================================================================
// OUTPUT SINKS
// ============================================================================

/// Where rendered results go, so output is injectable and testable.
pub trait OutputSink {
    fn emit(&mut self, text: &str);
}

/// Writes output to stdout for the CLI and the REPL.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Collects output into a String, one emitted line per line.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl OutputSink for OutputBuffer {
    fn emit(&mut self, text: &str) {
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(text);
    }
}

// ============================================================================
// EXECUTION PIPELINE
// ============================================================================

/// Runs Lispy source through every stage, naming it in diagnostics.
#[derive(Debug, Clone)]
pub struct ExecutionPipeline {
    pub source_name: String,
}

impl Default for ExecutionPipeline {
    fn default() -> Self {
        Self::new("<input>")
    }
}

impl ExecutionPipeline {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
        }
    }

    /// Parses one line of source.
    pub fn parse_source(&self, source: &str) -> Result<ParseNode, LispyError> {
        parser::parse(source, &self.source_name)
    }

    /// Parses, ingests and evaluates one line of source.
    pub fn evaluate_source(&self, source: &str) -> Result<Value, LispyError> {
        let tree = self.parse_source(source)?;
        let value = ingest(&tree);
        trace!("{}: evaluating {value}", self.source_name);
        Ok(evaluate(value))
    }

    /// Evaluates every non-blank line of `source` and emits each rendered
    /// result. Stops at the first line that does not parse.
    pub fn execute(&self, source: &str, output: &mut dyn OutputSink) -> Result<(), LispyError> {
        for (number, line) in source.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let pipeline = Self::new(format!("{}:{}", self.source_name, number + 1));
            let value = pipeline.evaluate_source(line)?;
            output.emit(&render(&value));
        }
        Ok(())
    }

    pub fn read_file(path: &Path) -> Result<String, LispyError> {
        fs::read_to_string(path).map_err(|e| LispyError::io(path, e))
    }

    /// Reads a file and executes it line by line.
    pub fn run_file(path: &Path, output: &mut dyn OutputSink) -> Result<(), LispyError> {
        let source = Self::read_file(path)?;
        Self::new(path.display().to_string()).execute(&source, output)
    }
}
