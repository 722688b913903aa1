//! List operations over Q-expressions.
//!
//! Every operation checks its full contract (arity, type, emptiness where the
//! operation is undefined on `{}`) before touching its arguments.

use super::{helpers, Builtin, BuiltinRegistry, BuiltinResult};
use crate::eval::evaluate;
use crate::value::{ErrorKind, Value};

/// Returns the first element as a singleton list: (head {<a> <b> ...})
pub fn builtin_head(args: Value) -> BuiltinResult {
    let mut list = helpers::take_single_qexpr(args, "head")?;
    let first = list.extract_at(0).ok_or(ErrorKind::EmptyQExpression)?;
    Ok(Value::qexpr().append(first))
}

/// Returns every element but the first: (tail {<a> <b> ...})
pub fn builtin_tail(args: Value) -> BuiltinResult {
    let mut list = helpers::take_single_qexpr(args, "tail")?;
    list.extract_at(0).ok_or(ErrorKind::EmptyQExpression)?;
    Ok(list)
}

/// Quotes its arguments: (list <a> <b> ...) ; => {<a> <b> ...}
pub fn builtin_list(args: Value) -> BuiltinResult {
    Ok(args.into_qexpr())
}

/// Evaluates a quoted list as an expression: (eval {<op> <a> ...})
pub fn builtin_eval(args: Value) -> BuiltinResult {
    let list = helpers::take_single_qexpr(args, "eval")?;
    Ok(evaluate(list.into_sexpr()))
}

/// Returns every element but the last: (init {<a> ... <z>})
pub fn builtin_init(args: Value) -> BuiltinResult {
    let mut list = helpers::take_single_qexpr(args, "init")?;
    let last = list.count().saturating_sub(1);
    list.extract_at(last).ok_or(ErrorKind::EmptyQExpression)?;
    Ok(list)
}

/// Prepends a value to a list: (cons <a> {<b> ...}) ; => {<a> <b> ...}
pub fn builtin_cons(args: Value) -> BuiltinResult {
    helpers::expect_arity(&args, 2, "cons")?;
    helpers::expect_qexpr(&args, 1, "cons")?;

    let mut args = args;
    let head = args.extract_at(0).ok_or(ErrorKind::ArgCount)?;
    let rest = args.take_at(0).ok_or(ErrorKind::ArgCount)?;

    Ok(evaluate(rest)
        .into_cells()
        .into_iter()
        .fold(Value::qexpr().append(head), Value::append))
}

/// Counts the elements of a list: (len {<a> <b> ...})
pub fn builtin_len(args: Value) -> BuiltinResult {
    let list = helpers::take_single_qexpr(args, "len")?;
    let count = i64::try_from(list.count()).map_err(|_| ErrorKind::BadNum)?;
    Ok(Value::Number(count))
}

pub fn register_list_builtins(registry: &mut BuiltinRegistry) {
    registry.register("head", "first element of a list, as a list", Builtin::List(builtin_head));
    registry.register("tail", "list without its first element", Builtin::List(builtin_tail));
    registry.register("list", "quote the arguments as a list", Builtin::List(builtin_list));
    registry.register("eval", "evaluate a list as an expression", Builtin::List(builtin_eval));
    registry.register("init", "list without its last element", Builtin::List(builtin_init));
    registry.register("cons", "prepend a value to a list", Builtin::List(builtin_cons));
    registry.register("len", "number of elements in a list", Builtin::List(builtin_len));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: i64) -> Value {
        Value::Number(n)
    }

    fn q(ns: &[i64]) -> Value {
        ns.iter().fold(Value::qexpr(), |acc, n| acc.append(num(*n)))
    }

    fn args(cells: Vec<Value>) -> Value {
        cells.into_iter().fold(Value::sexpr(), Value::append)
    }

    #[test]
    fn test_head_is_singleton() {
        assert_eq!(builtin_head(args(vec![q(&[1, 2, 3])])), Ok(q(&[1])));
    }

    #[test]
    fn test_tail_and_init() {
        assert_eq!(builtin_tail(args(vec![q(&[1, 2, 3])])), Ok(q(&[2, 3])));
        assert_eq!(builtin_init(args(vec![q(&[1, 2, 3])])), Ok(q(&[1, 2])));
        assert_eq!(builtin_tail(args(vec![q(&[1])])), Ok(q(&[])));
    }

    #[test]
    fn test_empty_list_rejected() {
        for func in [builtin_head, builtin_tail, builtin_init] {
            assert_eq!(func(args(vec![q(&[])])), Err(ErrorKind::EmptyQExpression));
        }
    }

    #[test]
    fn test_contracts_uniform() {
        for func in [builtin_head, builtin_tail, builtin_init, builtin_eval, builtin_len] {
            assert_eq!(func(args(vec![q(&[1]), q(&[2])])), Err(ErrorKind::ArgCount));
            assert_eq!(func(args(vec![num(1)])), Err(ErrorKind::BadType));
        }
    }

    #[test]
    fn test_list_retags_arguments() {
        let quoted = builtin_list(args(vec![num(1), num(2)])).unwrap();
        assert_eq!(quoted.to_string(), "{1 2}");
    }

    #[test]
    fn test_eval_runs_quoted_expression() {
        let expr = Value::qexpr()
            .append(Value::symbol("+"))
            .append(num(1))
            .append(num(2));
        assert_eq!(builtin_eval(args(vec![expr])), Ok(num(3)));
        assert_eq!(builtin_eval(args(vec![q(&[])])), Ok(Value::sexpr()));
        assert_eq!(builtin_eval(args(vec![q(&[1, 2])])), Ok(Value::Error(ErrorKind::BadOp)));
    }

    #[test]
    fn test_cons() {
        assert_eq!(builtin_cons(args(vec![num(1), q(&[2, 3])])), Ok(q(&[1, 2, 3])));
        let nested = builtin_cons(args(vec![q(&[0]), q(&[])])).unwrap();
        assert_eq!(nested.to_string(), "{{0}}");
    }

    #[test]
    fn test_cons_contract() {
        assert_eq!(builtin_cons(args(vec![num(1)])), Err(ErrorKind::ArgCount));
        assert_eq!(builtin_cons(args(vec![num(1), num(2)])), Err(ErrorKind::BadType));
    }

    #[test]
    fn test_len() {
        assert_eq!(builtin_len(args(vec![q(&[1, 2, 3, 4])])), Ok(num(4)));
        assert_eq!(builtin_len(args(vec![q(&[])])), Ok(num(0)));
    }
}
