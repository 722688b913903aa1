//! Lispy Parser
//!
//! Converts one line of source text into a [`ParseNode`] tree. The parser is
//! purely syntactic; numbers stay as text until ingestion.

use pest::{
    error::{Error, ErrorVariant, InputLocation},
    iterators::Pair,
    Parser,
};
use pest_derive::Parser;

use super::{ParseNode, ROOT_TAG};
use crate::errors::LispyError;

#[derive(Parser)]
#[grammar = "syntax/grammar.pest"]
struct LispyParser;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parse a line of Lispy source into a parse tree rooted at a `>` node.
pub fn parse(source_text: &str, source_name: &str) -> Result<ParseNode, LispyError> {
    let mut pairs = LispyParser::parse(Rule::lispy, source_text)
        .map_err(|e| convert_parse_error(e, source_text, source_name))?;

    let root = pairs.next().ok_or_else(|| {
        LispyError::parse("empty parse result", source_name, source_text, 0..0)
    })?;

    Ok(build_node(root))
}

// ============================================================================
// TREE BUILDERS
// ============================================================================

fn build_node(pair: Pair<Rule>) -> ParseNode {
    match pair.as_rule() {
        Rule::lispy => ParseNode::branch(ROOT_TAG, build_children(pair)),
        Rule::sexpr => ParseNode::branch("expr|sexpr", build_children(pair)),
        Rule::qexpr => ParseNode::branch("expr|qexpr", build_children(pair)),
        Rule::number => ParseNode::leaf("expr|number", pair.as_str()),
        Rule::symbol => ParseNode::leaf("expr|symbol", pair.as_str()),
        Rule::lparen | Rule::rparen | Rule::lbrace | Rule::rbrace => {
            ParseNode::leaf("char", pair.as_str())
        }
        Rule::EOI => ParseNode::leaf("regex", ""),
        rule => ParseNode::leaf(format!("{rule:?}"), pair.as_str()),
    }
}

fn build_children(pair: Pair<Rule>) -> Vec<ParseNode> {
    pair.into_inner().map(build_node).collect()
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

fn convert_parse_error(error: Error<Rule>, source: &str, source_name: &str) -> LispyError {
    let (start, end) = match error.location {
        InputLocation::Pos(pos) => (pos, pos),
        InputLocation::Span((start, end)) => (start, end),
    };

    let message = match &error.variant {
        ErrorVariant::ParsingError { positives, .. } if positives.contains(&Rule::rparen) => {
            "missing closing parenthesis"
        }
        ErrorVariant::ParsingError { positives, .. } if positives.contains(&Rule::rbrace) => {
            "missing closing brace"
        }
        _ => "unexpected input",
    };

    LispyError::parse(message, source_name, source, start..end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(node: &ParseNode) -> Vec<&str> {
        node.children.iter().map(|c| c.tag.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        let root = parse("", "test").unwrap();
        assert_eq!(root.tag, ">");
        assert_eq!(tags(&root), vec!["regex"]);
    }

    #[test]
    fn test_line_is_root_children() {
        let root = parse("+ 1 -2", "test").unwrap();
        assert_eq!(
            tags(&root),
            vec!["expr|symbol", "expr|number", "expr|number", "regex"]
        );
        assert_eq!(root.children[2].content, "-2");
    }

    #[test]
    fn test_delimiters_are_kept_as_chars() {
        let root = parse("{1 (x)}", "test").unwrap();
        let qexpr = &root.children[0];
        assert_eq!(qexpr.tag, "expr|qexpr");
        assert_eq!(tags(qexpr), vec!["char", "expr|number", "expr|sexpr", "char"]);
        assert_eq!(qexpr.children[0].content, "{");
        assert_eq!(qexpr.children[3].content, "}");
    }

    #[test]
    fn test_operator_symbols() {
        let root = parse("min % ^ / max", "test").unwrap();
        let contents: Vec<_> = root.children.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec!["min", "%", "^", "/", "max", ""]);
    }

    #[test]
    fn test_unmatched_paren() {
        let err = parse("(+ 1", "test").unwrap_err();
        assert!(err.to_string().contains("missing closing parenthesis"));
    }

    #[test]
    fn test_unmatched_brace() {
        let err = parse("head {1 2", "test").unwrap_err();
        assert!(err.to_string().contains("missing closing brace"));
    }

    #[test]
    fn test_stray_closer() {
        let err = parse(")", "test").unwrap_err();
        assert!(err.to_string().contains("unexpected input"));
    }

    #[test]
    fn test_display_tree() {
        let root = parse("(+ 1)", "test").unwrap();
        let printed = root.to_string();
        assert!(printed.starts_with(">\n  expr|sexpr\n    char '('\n"));
        assert!(printed.contains("    expr|symbol '+'\n"));
    }
}
