//! The Lispy value model.
//!
//! Every expression, intermediate result and final answer is a [`Value`].
//! Containers own their children outright, so a tree is dropped as a whole
//! once the host has rendered it.

use std::fmt;

use thiserror::Error;

// ============================================================================
// ERROR KINDS
// ============================================================================

/// The flat taxonomy of language-level errors.
///
/// These are values, not host failures: an error produced anywhere inside an
/// expression becomes the result of that expression. The `Display` text is the
/// exact message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    #[error("Error: Division by zero")]
    DivZero,
    #[error("Error: Invalid Operator")]
    BadOp,
    #[error("Error: Invalid Number")]
    BadNum,
    #[error("Error: Function passed incorrect type")]
    BadType,
    #[error("Error: Function passed {{}}")]
    EmptyQExpression,
    #[error("Error: Function passed too many arguments")]
    ArgCount,
}

// ============================================================================
// VALUE
// ============================================================================

/// Represents a value in the Lispy evaluator.
///
/// # Examples
///
/// ```rust
/// use lispy::value::Value;
/// let list = Value::qexpr().append(Value::Number(1)).append(Value::Number(2));
/// assert_eq!(list.count(), 2);
/// assert_eq!(list.to_string(), "{1 2}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Number(i64),
    Error(ErrorKind),
    Symbol(String),
    /// An expression pending evaluation.
    SExpr(Vec<Value>),
    /// A quoted list; never evaluated implicitly.
    QExpr(Vec<Value>),
}

impl Value {
    /// An empty S-expression.
    pub fn sexpr() -> Self {
        Value::SExpr(Vec::new())
    }

    /// An empty Q-expression.
    pub fn qexpr() -> Self {
        Value::QExpr(Vec::new())
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Returns the type name of the value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Value::SExpr(_) | Value::QExpr(_))
    }

    /// Number of children. Leaves have none.
    pub fn count(&self) -> usize {
        self.cells().len()
    }

    /// The children of a container, or an empty slice for a leaf.
    pub fn cells(&self) -> &[Value] {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => cells,
            _ => &[],
        }
    }

    pub fn cell(&self, index: usize) -> Option<&Value> {
        self.cells().get(index)
    }

    fn cells_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(cells),
            _ => None,
        }
    }

    /// Consumes the value, yielding its children. Leaves yield nothing.
    pub fn into_cells(self) -> Vec<Value> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => cells,
            _ => Vec::new(),
        }
    }

    /// Appends `value` to the end of a container and returns the container.
    ///
    /// Appending to a leaf drops `value` and returns the leaf unchanged.
    pub fn append(mut self, value: Value) -> Self {
        if let Some(cells) = self.cells_mut() {
            cells.push(value);
        }
        self
    }

    /// Removes and returns the child at `index`, shifting later children left.
    ///
    /// Returns `None` for leaves and out-of-range indices.
    ///
    /// ```rust
    /// use lispy::value::Value;
    /// let mut list = Value::qexpr().append(Value::Number(1)).append(Value::Number(2));
    /// assert_eq!(list.extract_at(0), Some(Value::Number(1)));
    /// assert_eq!(list.to_string(), "{2}");
    /// ```
    pub fn extract_at(&mut self, index: usize) -> Option<Value> {
        let cells = self.cells_mut()?;
        (index < cells.len()).then(|| cells.remove(index))
    }

    /// Extracts the child at `index` and drops the rest of the container.
    pub fn take_at(mut self, index: usize) -> Option<Value> {
        self.extract_at(index)
    }

    /// Re-tags a container as a Q-expression. Leaves are returned unchanged.
    pub fn into_qexpr(self) -> Self {
        match self {
            Value::SExpr(cells) => Value::QExpr(cells),
            other => other,
        }
    }

    /// Re-tags a container as an S-expression. Leaves are returned unchanged.
    pub fn into_sexpr(self) -> Self {
        match self {
            Value::QExpr(cells) => Value::SExpr(cells),
            other => other,
        }
    }
}

impl From<ErrorKind> for Value {
    fn from(kind: ErrorKind) -> Self {
        Value::Error(kind)
    }
}

// ============================================================================
// DISPLAY
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Error(kind) => write!(f, "{kind}"),
            Value::Symbol(name) => f.write_str(name),
            Value::SExpr(cells) => write_cells(f, '(', cells, ')'),
            Value::QExpr(cells) => write_cells(f, '{', cells, '}'),
        }
    }
}

fn write_cells(f: &mut fmt::Formatter<'_>, open: char, cells: &[Value], close: char) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{cell}")?;
    }
    write!(f, "{close}")
}

/// Renders a value the way the prompt prints it (without the line break).
pub fn render(value: &Value) -> String {
    value.to_string()
}
