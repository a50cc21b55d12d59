//! Lexical scopes for evaluating Monkey programs.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::object::Object;

/// An execution environment used when evaluating Monkey source code.
///
/// Environments form a chain through their outer environment. Closures share
/// ownership of the environment they were defined in, so environments are
/// handled as `Rc<RefCell<Environment>>`.
#[derive(Default)]
pub struct Environment {
    store: HashMap<String, Object>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Creates a new, empty `Environment`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an enclosed `Environment` for use within a function call or
    /// macro expansion.
    pub fn new_enclosed(outer: Rc<RefCell<Self>>) -> Self {
        Self {
            outer: Some(outer),
            ..Self::default()
        }
    }

    /// Retrieves the object associated with an identifier name, or returns
    /// `None` if no object is associated with `name`.
    pub fn get(&self, name: &str) -> Option<Object> {
        match (self.store.get(name), &self.outer) {
            // We found a binding in this environment; no need to consult the
            // outer environment.
            (Some(obj), _) => Some(obj.clone()),
            // We did not find a binding; try the outer environment.
            (None, Some(outer)) => outer.borrow().get(name),
            // We found no binding and there is no outer environment.
            (None, None) => None,
        }
    }

    /// Binds an object in this environment with the identifier `name`. Outer
    /// environments are never modified.
    pub fn set(&mut self, name: String, obj: Object) {
        self.store.insert(name, obj);
    }
}
