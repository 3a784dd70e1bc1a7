use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::Value;

/// A shared, mutable handle to an [`Environment`].
///
/// Closures hold their defining environment through this handle, so a single
/// environment may be referenced by many function values at once, and an
/// environment may transitively hold closures that reference it back. That
/// cycle is a legitimate graph; nothing ever walks it destructively.
pub type EnvRef = Rc<RefCell<Environment>>;

/// A chained mapping from binding names to runtime values.
///
/// Lookup walks outward through enclosing environments until the name is
/// found or the chain is exhausted. `let` writes only to the innermost
/// environment, which is what makes inner shadowing possible.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<EnvRef>,
}

impl Environment {
    /// Creates a root environment with no enclosing scope.
    ///
    /// One root environment is created per program evaluation.
    #[must_use]
    pub fn new() -> Self {
        Self { store: HashMap::new(),
               outer: None }
    }

    /// Creates an empty environment that encloses an existing one.
    ///
    /// Used at function application: the new environment holds the call's
    /// parameter bindings and defers every other lookup to `outer`, which is
    /// the function's definition-time environment rather than the caller's.
    /// This is what makes scoping lexical.
    #[must_use]
    pub fn new_enclosed(outer: EnvRef) -> Self {
        Self { store: HashMap::new(),
               outer: Some(outer) }
    }

    /// Looks up `name`, searching enclosing environments outward.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` to `value` in this environment and returns the value.
    ///
    /// Never touches enclosing environments, even when they already bind the
    /// same name.
    pub fn set(&mut self, name: String, value: Value) -> Value {
        self.store.insert(name, value.clone());
        value
    }
}
