//! Tree ingestion: parse tree → [`Value`].
//!
//! Any parser can feed the evaluator as long as its nodes implement
//! [`SyntaxNode`]. Classification is by tag substring, so composite tags such
//! as `expr|number` work unchanged.

use log::{trace, warn};

use crate::value::{ErrorKind, Value};

/// The shape the evaluator needs from an external parse tree.
pub trait SyntaxNode {
    fn tag(&self) -> &str;
    fn content(&self) -> &str;
    fn children(&self) -> &[Self]
    where
        Self: Sized;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeClass {
    Number,
    Symbol,
    SExpr,
    QExpr,
    Unknown,
}

/// Later matches win, so `expr|sexpr` beats a stray `number` in the same tag.
fn classify(tag: &str) -> NodeClass {
    let mut class = NodeClass::Unknown;
    if tag.contains("number") {
        class = NodeClass::Number;
    }
    if tag.contains("symbol") {
        class = NodeClass::Symbol;
    }
    if tag.contains("qexpr") {
        class = NodeClass::QExpr;
    }
    if tag == crate::syntax::ROOT_TAG || tag.contains("sexpr") {
        class = NodeClass::SExpr;
    }
    class
}

fn is_delimiter(content: &str) -> bool {
    matches!(content, "(" | ")" | "{" | "}")
}

fn is_structural<N: SyntaxNode>(node: &N) -> bool {
    is_delimiter(node.content()) || node.tag() == "regex"
}

fn read_number(text: &str) -> Value {
    match text.trim().parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(e) => {
            trace!("number literal '{text}' rejected: {e}");
            Value::Error(ErrorKind::BadNum)
        }
    }
}

/// Converts a parse tree into a value tree.
///
/// Malformed or overflowing number literals become `Error(BadNum)` leaves in
/// place; ingestion itself never fails.
pub fn ingest<N: SyntaxNode>(node: &N) -> Value {
    let value = match classify(node.tag()) {
        NodeClass::Number => read_number(node.content()),
        NodeClass::Symbol => Value::symbol(node.content()),
        NodeClass::SExpr => Value::sexpr(),
        NodeClass::QExpr => Value::qexpr(),
        NodeClass::Unknown => {
            warn!("unclassifiable parse node tagged '{}'", node.tag());
            Value::Error(ErrorKind::BadType)
        }
    };

    node.children()
        .iter()
        .filter(|child| !is_structural(*child))
        .fold(value, |acc, child| acc.append(ingest(child)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::ParseNode;

    fn number(text: &str) -> ParseNode {
        ParseNode::leaf("expr|number|regex", text)
    }

    fn symbol(text: &str) -> ParseNode {
        ParseNode::leaf("expr|symbol|regex", text)
    }

    fn delim(text: &str) -> ParseNode {
        ParseNode::leaf("char", text)
    }

    #[test]
    fn test_root_becomes_sexpr() {
        let root = ParseNode::branch(
            ">",
            vec![
                ParseNode::leaf("regex", ""),
                symbol("+"),
                number("1"),
                number("2"),
                ParseNode::leaf("regex", ""),
            ],
        );
        assert_eq!(ingest(&root).to_string(), "(+ 1 2)");
    }

    #[test]
    fn test_delimiters_skipped() {
        let q = ParseNode::branch(
            "expr|qexpr|>",
            vec![delim("{"), number("1"), number("2"), delim("}")],
        );
        let s = ParseNode::branch("expr|sexpr|>", vec![delim("("), symbol("head"), q, delim(")")]);
        let value = ingest(&s);
        assert_eq!(value.to_string(), "(head {1 2})");
        assert_eq!(value.count(), 2);
    }

    #[test]
    fn test_bad_number_embeds_error() {
        let root = ParseNode::branch(">", vec![symbol("+"), number("99999999999999999999")]);
        let value = ingest(&root);
        assert_eq!(value.cell(1), Some(&Value::Error(ErrorKind::BadNum)));
    }

    #[test]
    fn test_negative_number() {
        assert_eq!(ingest(&number("-17")), Value::Number(-17));
    }

    #[test]
    fn test_unknown_tag_is_bad_type() {
        assert_eq!(
            ingest(&ParseNode::leaf("string", "\"hi\"")),
            Value::Error(ErrorKind::BadType)
        );
    }

    #[test]
    fn test_classify_priority() {
        assert_eq!(classify(">"), NodeClass::SExpr);
        assert_eq!(classify("expr|sexpr|number"), NodeClass::SExpr);
        assert_eq!(classify("qexpr|symbol"), NodeClass::QExpr);
        assert_eq!(classify("expr|number|regex"), NodeClass::Number);
    }
}
