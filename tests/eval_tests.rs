//! End-to-end evaluation tests: source line in, rendered value out.

use lispy::{eval_str, ingest, render, syntax::ParseNode, ErrorKind, Value};

fn eval(source: &str) -> String {
    render(&eval_str(source).unwrap())
}

#[test]
fn arithmetic_folds_left_to_right() {
    assert_eq!(eval("+ 1 2 3"), "6");
    assert_eq!(eval("- 10 2 3"), "5");
    assert_eq!(eval("/ 100 10 5"), "2");
    assert_eq!(eval("* 2 (- 3)"), "-6");
    assert_eq!(eval("+ 1 (* 2 3) (- 10 4)"), "13");
}

#[test]
fn add_and_mul_commute_and_associate() {
    assert_eq!(eval("+ 1 (+ 2 3)"), eval("+ (+ 1 2) 3"));
    assert_eq!(eval("* 4 5 6"), eval("* 6 5 4"));
}

#[test]
fn extended_operators() {
    assert_eq!(eval("% 7 0"), "Error: Division by zero");
    assert_eq!(eval("% 17 5"), "2");
    assert_eq!(eval("^ 2 10"), "1024");
    assert_eq!(eval("^ 5 0"), "1");
    assert_eq!(eval("min 3 1 2"), "1");
    assert_eq!(eval("max 3 1 2"), "3");
    assert_eq!(eval("- 5"), "-5");
}

#[test]
fn truncating_division() {
    assert_eq!(eval("/ 7 2"), "3");
    assert_eq!(eval("/ -7 2"), "-3");
    assert_eq!(eval("% -7 2"), "-1");
}

#[test]
fn division_by_zero() {
    assert_eq!(eval("/ 5 0"), "Error: Division by zero");
    assert_eq!(eval("/ 5 0 1"), "Error: Division by zero");
}

#[test]
fn overflowing_literal_is_bad_number() {
    assert_eq!(eval("+ 9223372036854775808 1"), "Error: Invalid Number");
    assert_eq!(eval("-9223372036854775808"), "-9223372036854775808");
}

#[test]
fn arithmetic_overflow_wraps() {
    assert_eq!(eval("+ 9223372036854775807 1"), "-9223372036854775808");
}

#[test]
fn non_number_operand() {
    assert_eq!(eval("+ 1 {2}"), "Error: Invalid Number");
}

#[test]
fn list_operations() {
    assert_eq!(eval("head {1 2 3}"), "{1}");
    assert_eq!(eval("tail {1 2 3}"), "{2 3}");
    assert_eq!(eval("init {1 2 3}"), "{1 2}");
    assert_eq!(eval("cons 1 {2 3}"), "{1 2 3}");
    assert_eq!(eval("cons {1} {}"), "{{1}}");
    assert_eq!(eval("len {1 2 3 4}"), "4");
    assert_eq!(eval("len {}"), "0");
    assert_eq!(eval("list 1 (+ 1 1) {3}"), "{1 2 {3}}");
    assert_eq!(eval("head (list 1 2 3)"), "{1}");
}

#[test]
fn empty_list_errors() {
    for op in ["head", "tail", "init"] {
        assert_eq!(eval(&format!("{op} {{}}")), "Error: Function passed {}");
    }
}

#[test]
fn list_contracts() {
    assert_eq!(eval("head 1"), "Error: Function passed incorrect type");
    assert_eq!(eval("head {1} {2}"), "Error: Function passed too many arguments");
    assert_eq!(eval("len 1 2"), "Error: Function passed too many arguments");
    assert_eq!(eval("cons 1 2"), "Error: Function passed incorrect type");
}

#[test]
fn eval_promotes_quoted_lists() {
    assert_eq!(eval("eval {+ 1 2}"), "3");
    assert_eq!(eval("eval {head {1 2}}"), "{1}");
    assert_eq!(eval("eval (tail {1 + 2 3})"), "5");
    assert_eq!(eval("eval {}"), "()");
    assert_eq!(eval("eval (list 1 2 3)"), "Error: Invalid Operator");
}

#[test]
fn quoted_lists_are_not_evaluated() {
    assert_eq!(eval("{1 (/ 1 0)}"), "{1 (/ 1 0)}");
}

#[test]
fn unknown_or_non_symbol_operator() {
    assert_eq!(eval("foo 1 2"), "Error: Invalid Operator");
    assert_eq!(eval("1 2"), "Error: Invalid Operator");
}

#[test]
fn empty_and_single_expressions() {
    assert_eq!(eval("()"), "()");
    assert_eq!(eval(""), "()");
    assert_eq!(eval("42"), "42");
    assert_eq!(eval("(((7)))"), "7");
    assert_eq!(eval("+"), "+");
}

#[test]
fn first_error_wins() {
    assert_eq!(eval("+ 1 (/ 1 0) (head {})"), "Error: Division by zero");
    assert_eq!(eval("(head {}) (/ 1 0)"), "Error: Function passed {}");
}

#[test]
fn syntax_errors_are_host_errors() {
    assert!(eval_str("(+ 1").is_err());
    assert!(eval_str("head {1").is_err());
    assert!(eval_str(")").is_err());
}

#[test]
fn ingest_accepts_hand_built_trees() {
    let tree = ParseNode::branch(
        ">",
        vec![
            ParseNode::leaf("regex", ""),
            ParseNode::leaf("expr|symbol|regex", "len"),
            ParseNode::branch(
                "expr|qexpr",
                vec![
                    ParseNode::leaf("char", "{"),
                    ParseNode::leaf("expr|number|regex", "5"),
                    ParseNode::leaf("char", "}"),
                ],
            ),
            ParseNode::leaf("regex", ""),
        ],
    );
    assert_eq!(lispy::evaluate(ingest(&tree)), Value::Number(1));
}

#[test]
fn error_kind_messages() {
    assert_eq!(ErrorKind::DivZero.to_string(), "Error: Division by zero");
    assert_eq!(ErrorKind::BadOp.to_string(), "Error: Invalid Operator");
    assert_eq!(ErrorKind::BadNum.to_string(), "Error: Invalid Number");
}
