//! # Arithmetic Operations
//!
//! The operator family: `+`, `-`, `*`, `/`, `%`, `^`, `min`, `max`.
//!
//! Every operator folds its arguments left to right, seeded from the first.
//! All arguments must be numbers before any folding starts. Arithmetic is on
//! `i64` and wraps on overflow.

use std::fmt;
use std::str::FromStr;

use super::{helpers, Builtin, BuiltinRegistry, BuiltinResult};
use crate::value::{ErrorKind, Value};

/// An arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
    Min,
    Max,
}

impl Operator {
    pub const ALL: [Operator; 8] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Rem,
        Operator::Pow,
        Operator::Min,
        Operator::Max,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Rem => "%",
            Operator::Pow => "^",
            Operator::Min => "min",
            Operator::Max => "max",
        }
    }

    fn doc(self) -> &'static str {
        match self {
            Operator::Add => "sum of all arguments",
            Operator::Sub => "left-to-right difference; negation with one argument",
            Operator::Mul => "product of all arguments",
            Operator::Div => "left-to-right truncating division",
            Operator::Rem => "left-to-right truncating remainder",
            Operator::Pow => "left-to-right integer exponentiation",
            Operator::Min => "smallest argument",
            Operator::Max => "largest argument",
        }
    }

    /// Folds one more operand into the accumulator.
    pub fn apply(self, x: i64, y: i64) -> Result<i64, ErrorKind> {
        let result = match self {
            Operator::Add => x.wrapping_add(y),
            Operator::Sub => x.wrapping_sub(y),
            Operator::Mul => x.wrapping_mul(y),
            Operator::Div if y == 0 => return Err(ErrorKind::DivZero),
            Operator::Div => x.wrapping_div(y),
            Operator::Rem if y == 0 => return Err(ErrorKind::DivZero),
            Operator::Rem => x.wrapping_rem(y),
            Operator::Pow => power(x, y),
            Operator::Min => x.min(y),
            Operator::Max => x.max(y),
        };
        Ok(result)
    }
}

impl FromStr for Operator {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or(ErrorKind::BadOp)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// `base` multiplied by itself `exponent - 1` times.
///
/// An exponent of zero gives 1; a negative exponent leaves `base` unchanged.
fn power(base: i64, exponent: i64) -> i64 {
    if exponent == 0 {
        return 1;
    }
    if exponent < 0 {
        return base;
    }

    // Square-and-multiply; wrapping products agree with repeated wrapping
    // multiplication.
    let mut result: i64 = 1;
    let mut factor = base;
    let mut remaining = exponent as u64;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result.wrapping_mul(factor);
        }
        factor = factor.wrapping_mul(factor);
        remaining >>= 1;
    }
    result
}

/// Applies `op` across every argument in `args`.
///
/// Usage: (<op> <a> <b> ...)
///
/// Example:
///   (- 10 2 3) ; => 5
///   (- 4)      ; => -4
///   (/ 5 0)    ; => Error: Division by zero
pub fn builtin_op(op: Operator, args: Value) -> BuiltinResult {
    let operands = helpers::expect_numbers(&args, op.symbol())?;
    let (&first, rest) = operands.split_first().ok_or(ErrorKind::ArgCount)?;

    if op == Operator::Sub && rest.is_empty() {
        return Ok(Value::Number(first.wrapping_neg()));
    }

    rest.iter()
        .try_fold(first, |acc, &y| op.apply(acc, y))
        .map(Value::Number)
}

pub fn register_math_builtins(registry: &mut BuiltinRegistry) {
    for op in Operator::ALL {
        registry.register(op.symbol(), op.doc(), Builtin::Arithmetic(op));
    }
}
