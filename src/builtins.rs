//! # Lispy Builtin System
//!
//! Builtins are the only operations the language has. Each one receives the
//! argument container (an S-expression whose operator has already been
//! removed) and reduces it to a value or an [`ErrorKind`].
//!
//! ## Module Structure
//!
//! - **`helpers`**: argument contract checks shared by every builtin
//! - **`math`**: the arithmetic operator family (`+`, `-`, `*`, `/`, `%`, `^`, `min`, `max`)
//! - **`list`**: Q-expression operations (`head`, `tail`, `list`, `eval`, `init`, `cons`, `len`)

use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;

use crate::value::{ErrorKind, Value};

pub mod helpers;
pub mod list;
pub mod math;

pub use math::Operator;

// ============================================================================
// CORE TYPES
// ============================================================================

/// What every builtin produces. `Err` is folded into `Value::Error` on return.
pub type BuiltinResult = Result<Value, ErrorKind>;

/// A list operation over the argument container.
pub type ListFn = fn(args: Value) -> BuiltinResult;

/// The handler behind a builtin name.
#[derive(Clone, Copy)]
pub enum Builtin {
    List(ListFn),
    Arithmetic(Operator),
}

impl Builtin {
    pub fn call(&self, args: Value) -> Value {
        let result = match self {
            Builtin::List(func) => func(args),
            Builtin::Arithmetic(op) => math::builtin_op(*op, args),
        };
        result.unwrap_or_else(Value::Error)
    }
}

/// A registered builtin and its one-line description.
#[derive(Clone, Copy)]
pub struct BuiltinEntry {
    pub builtin: Builtin,
    pub doc: &'static str,
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Registry for all builtins, inspectable at runtime.
#[derive(Default)]
pub struct BuiltinRegistry {
    entries: HashMap<String, BuiltinEntry>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, doc: &'static str, builtin: Builtin) {
        self.entries
            .insert(name.to_string(), BuiltinEntry { builtin, doc });
    }

    pub fn get(&self, name: &str) -> Option<&BuiltinEntry> {
        self.entries.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Names with their descriptions, sorted by name.
    pub fn list(&self) -> Vec<(&str, &'static str)> {
        let mut items: Vec<_> = self
            .entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.doc))
            .collect();
        items.sort_by(|a, b| a.0.cmp(b.0));
        items
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Invokes the builtin called `name`; unknown names yield `Error(BadOp)`.
    pub fn call(&self, name: &str, args: Value) -> Value {
        match self.get(name) {
            Some(entry) => entry.builtin.call(args),
            None => {
                debug!("no builtin named '{name}'");
                Value::Error(ErrorKind::BadOp)
            }
        }
    }
}

/// Registers every standard builtin with the given registry.
pub fn register_all_builtins(registry: &mut BuiltinRegistry) {
    list::register_list_builtins(registry);
    math::register_math_builtins(registry);
}

static DEFAULT_REGISTRY: Lazy<BuiltinRegistry> = Lazy::new(|| {
    let mut registry = BuiltinRegistry::new();
    register_all_builtins(&mut registry);
    registry
});

/// The process-wide registry of standard builtins.
pub fn default_registry() -> &'static BuiltinRegistry {
    &DEFAULT_REGISTRY
}

/// Applies the builtin called `name` to the argument container `args`.
pub fn dispatch(name: &str, args: Value) -> Value {
    DEFAULT_REGISTRY.call(name, args)
}
