//! Syntax module for Lispy
//!
//! Holds the concrete parse tree produced by [`parser::parse`]: untyped nodes
//! of tag, literal text and children, ingested through [`SyntaxNode`].

use std::fmt;

use serde::Serialize;

use crate::ingest::SyntaxNode;

pub mod parser;

pub use parser::parse;

/// Tag of the root node of every parsed line.
pub const ROOT_TAG: &str = ">";

/// A node of the concrete parse tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseNode {
    /// Classifying string, e.g. `expr|number` or `char`.
    pub tag: String,
    /// Literal text for leaves; empty for branches.
    pub content: String,
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    pub fn leaf(tag: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            content: content.into(),
            children: Vec::new(),
        }
    }

    pub fn branch(tag: impl Into<String>, children: Vec<ParseNode>) -> Self {
        Self {
            tag: tag.into(),
            content: String::new(),
            children,
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.tag, indent = depth * 2)?;
        if !self.content.is_empty() {
            write!(f, " '{}'", self.content)?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl SyntaxNode for ParseNode {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

/// One node per line, children indented by two spaces.
impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
