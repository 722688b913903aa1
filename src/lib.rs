//! Lispy: a small evaluator for S-expressions and Q-expressions.
//!
//! Source text is parsed into a tagged tree ([`syntax`]), ingested into a
//! [`Value`] tree ([`ingest`]), reduced by [`evaluate`] and printed with
//! [`render`].
//!
//! ```
//! assert_eq!(lispy::eval_str("+ 1 (* 2 3)").unwrap().to_string(), "7");
//! assert_eq!(lispy::eval_str("head {}").unwrap().to_string(), "Error: Function passed {}");
//! ```

pub use crate::engine::ExecutionPipeline;
pub use crate::errors::LispyError;
pub use crate::eval::evaluate;
pub use crate::ingest::{ingest, SyntaxNode};
pub use crate::value::{render, ErrorKind, Value};

pub mod builtins;
pub mod cli;
pub mod engine;
pub mod errors;
pub mod eval;
pub mod ingest;
pub mod repl;
pub mod syntax;
pub mod test_harness;
pub mod value;

/// Parses, ingests and evaluates one line of Lispy source.
///
/// Only syntax errors are `Err`; language errors come back as
/// `Ok(Value::Error(_))`.
pub fn eval_str(source: &str) -> Result<Value, LispyError> {
    ExecutionPipeline::default().evaluate_source(source)
}
