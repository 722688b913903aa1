//! Argument contract checks shared by the builtins.
//!
//! Contracts are checked in a fixed order: arity, then type, then emptiness.
//! A failed check drops the whole argument container.

use log::debug;

use crate::value::{ErrorKind, Value};

/// Fails with `ArgCount` unless `args` holds exactly `expected` values.
pub fn expect_arity(args: &Value, expected: usize, name: &str) -> Result<(), ErrorKind> {
    if args.count() != expected {
        debug!("{name}: expected {expected} argument(s), got {}", args.count());
        return Err(ErrorKind::ArgCount);
    }
    Ok(())
}

/// Fails with `BadType` unless the argument at `index` is a Q-expression.
pub fn expect_qexpr(args: &Value, index: usize, name: &str) -> Result<(), ErrorKind> {
    match args.cell(index) {
        Some(Value::QExpr(_)) => Ok(()),
        Some(other) => {
            debug!("{name}: argument {index} is a {}", other.type_name());
            Err(ErrorKind::BadType)
        }
        None => Err(ErrorKind::ArgCount),
    }
}

/// Checks for a single Q-expression argument and returns it, dropping the
/// argument container.
pub fn take_single_qexpr(args: Value, name: &str) -> Result<Value, ErrorKind> {
    expect_arity(&args, 1, name)?;
    expect_qexpr(&args, 0, name)?;
    args.take_at(0).ok_or(ErrorKind::ArgCount)
}

/// Extracts every argument as a number, failing with `BadNum` on the first
/// value that is not one.
pub fn expect_numbers(args: &Value, name: &str) -> Result<Vec<i64>, ErrorKind> {
    args.cells()
        .iter()
        .map(|cell| match cell {
            Value::Number(n) => Ok(*n),
            other => {
                debug!("{name}: cannot operate on {}", other.type_name());
                Err(ErrorKind::BadNum)
            }
        })
        .collect()
}
