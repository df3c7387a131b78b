// ABOUTME: Environment module for managing variable bindings and scopes

use crate::error::LispError;
use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent: RefCell<Option<Rc<Environment>>>,
}

impl Environment {
    /// Creates a new global environment with no parent
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: RefCell::new(None),
        })
    }

    /// Creates a new child environment with a parent
    pub fn with_parent(parent: Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: RefCell::new(Some(parent)),
        })
    }

    /// Defines a binding in THIS scope (doesn't walk parent chain)
    pub fn define(&self, name: String, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }

    /// Looks up a symbol in THIS scope and parent scopes recursively
    pub fn get(&self, name: &str) -> Result<Value, LispError> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Ok(value.clone());
        }

        if let Some(ref parent) = *self.parent.borrow() {
            return parent.get(name);
        }

        Err(LispError::UnboundName(name.to_string()))
    }

    /// Updates an existing binding, walking the parent chain to find it.
    pub fn set(&self, name: &str, value: Value) -> Result<(), LispError> {
        if self.bindings.borrow().contains_key(name) {
            self.bindings.borrow_mut().insert(name.to_string(), value);
            return Ok(());
        }

        if let Some(ref parent) = *self.parent.borrow() {
            return parent.set(name, value);
        }

        Err(LispError::UnboundName(name.to_string()))
    }

    /// Drops local bindings and detaches the parent pointer.
    ///
    /// Called when tearing down the root environment: a lambda stored in an
    /// environment holds that environment (to evaluate its body later), and
    /// the environment holds the lambda through a user binding, so the pair
    /// forms a reference cycle plain `Rc` drop can't reclaim.
    pub fn clear(&self) {
        self.bindings.borrow_mut().clear();
        *self.parent.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_get() {
        let env = Environment::new();
        env.define("x".to_string(), Value::Number(42));

        match env.get("x") {
            Ok(Value::Number(n)) => assert_eq!(n, 42),
            _ => panic!("Expected Number(42)"),
        }
    }

    #[test]
    fn test_undefined_symbol() {
        let env = Environment::new();
        assert!(env.get("undefined").is_err());
    }

    #[test]
    fn test_shadowing() {
        let parent = Environment::new();
        parent.define("x".to_string(), Value::Number(42));

        let child = Environment::with_parent(parent);
        child.define("x".to_string(), Value::Number(100));

        match child.get("x") {
            Ok(Value::Number(n)) => assert_eq!(n, 100),
            _ => panic!("Expected Number(100)"),
        }
    }

    #[test]
    fn test_parent_lookup() {
        let parent = Environment::new();
        parent.define("x".to_string(), Value::Number(42));

        let child = Environment::with_parent(parent);

        match child.get("x") {
            Ok(Value::Number(n)) => assert_eq!(n, 42),
            _ => panic!("Expected Number(42)"),
        }
    }

    #[test]
    fn test_multiple_levels() {
        let grandparent = Environment::new();
        grandparent.define("a".to_string(), Value::Number(1));

        let parent = Environment::with_parent(grandparent);
        parent.define("b".to_string(), Value::Number(2));

        let child = Environment::with_parent(parent);
        child.define("c".to_string(), Value::Number(3));

        assert!(matches!(child.get("a"), Ok(Value::Number(1))));
        assert!(matches!(child.get("b"), Ok(Value::Number(2))));
        assert!(matches!(child.get("c"), Ok(Value::Number(3))));
    }

    #[test]
    fn test_set_walks_parent_chain() {
        let parent = Environment::new();
        parent.define("x".to_string(), Value::Number(1));
        let child = Environment::with_parent(parent.clone());

        child.set("x", Value::Number(2)).unwrap();
        assert!(matches!(parent.get("x"), Ok(Value::Number(2))));
    }

    #[test]
    fn test_set_unbound_is_name_error() {
        let env = Environment::new();
        assert!(env.set("x", Value::Number(1)).is_err());
    }

    #[test]
    fn test_clear_detaches_parent_and_bindings() {
        let parent = Environment::new();
        parent.define("x".to_string(), Value::Number(1));
        let child = Environment::with_parent(parent);
        child.define("y".to_string(), Value::Number(2));

        child.clear();
        assert!(child.get("x").is_err());
        assert!(child.get("y").is_err());
    }
}
