//! The evaluator.
//!
//! `evaluate` is a pure reduction: it consumes a value tree and returns the
//! value it reduces to. Only S-expressions do any work; everything else
//! evaluates to itself.
//!
//! ## Error propagation
//!
//! Children are evaluated strictly left to right. The first child that
//! evaluates to an `Error` becomes the result of the whole expression; the
//! remaining children are dropped unevaluated.

use log::{debug, trace};

use crate::builtins;
use crate::value::{ErrorKind, Value};

/// Reduces `value` to its final form.
pub fn evaluate(value: Value) -> Value {
    match value {
        Value::SExpr(cells) => evaluate_sexpr(cells),
        other => other,
    }
}

fn evaluate_sexpr(cells: Vec<Value>) -> Value {
    let mut evaluated = Vec::with_capacity(cells.len());
    for cell in cells {
        match evaluate(cell) {
            Value::Error(kind) => {
                debug!("short-circuit on {kind:?}");
                return Value::Error(kind);
            }
            value => evaluated.push(value),
        }
    }

    let mut expr = Value::SExpr(evaluated);

    // Empty expression is its own value.
    let Some(head) = expr.extract_at(0) else {
        return expr;
    };

    // A parenthesised single value unwraps.
    if expr.count() == 0 {
        return head;
    }

    match head {
        Value::Symbol(name) => {
            trace!("dispatch '{name}' with {} argument(s)", expr.count());
            builtins::dispatch(&name, expr)
        }
        other => {
            debug!("cannot apply {} '{other}'", other.type_name());
            Value::Error(ErrorKind::BadOp)
        }
    }
}
