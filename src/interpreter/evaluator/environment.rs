use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Kind, Value},
    },
};

/// A variable's current value and the kind it was defined with.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub kind:  Kind,
    pub value: Value,
}

/// Nested variable scopes, innermost last.
///
/// The outermost scope holds top-level variables and is never popped.
///
/// # Example
/// ```
/// use bsl::interpreter::{evaluator::environment::Environment, value::core::Value};
///
/// let mut env = Environment::new();
/// env.define("x", Value::Int(1), 1).unwrap();
///
/// env.push();
/// env.define("x", Value::Str("inner".into()), 2).unwrap();
/// assert_eq!(env.get("x", 3).unwrap(), &Value::Str("inner".into()));
/// env.pop();
///
/// // Decimals fit an int-pinned variable; strings do not.
/// env.assign("x", Value::Decimal(2.5), 4).unwrap();
/// assert!(env.assign("x", Value::Str("no".into()), 5).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Environment {
    scopes: Vec<HashMap<String, Binding>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![HashMap::new()] }
    }

    /// Pushes a new innermost scope.
    pub fn push(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Pops the innermost scope, keeping the outermost one.
    pub fn pop(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Drops every scope except the outermost.
    pub fn unwind(&mut self) {
        self.scopes.truncate(1);
    }

    #[must_use]
    pub const fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Binds `name` in the innermost scope, pinning it to the value's kind.
    ///
    /// # Errors
    /// `RuntimeError::AlreadyDefined` if the innermost scope already holds
    /// `name`. Outer bindings may be shadowed.
    pub fn define(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        let Some(scope) = self.scopes.last_mut() else {
            return Ok(());
        };
        if scope.contains_key(name) {
            return Err(RuntimeError::AlreadyDefined { name: name.to_string(),
                                                      line });
        }
        scope.insert(name.to_string(),
                     Binding { kind: value.kind(),
                               value });
        Ok(())
    }

    fn lookup(&self, name: &str) -> Option<&Binding> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
    }

    /// Looks `name` up from the innermost scope outwards.
    pub fn get(&self, name: &str, line: usize) -> EvalResult<&Value> {
        self.lookup(name)
            .map(|binding| &binding.value)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Replaces the value of the innermost binding of `name`.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownVariable` if no scope defines `name`.
    /// - `RuntimeError::KindMismatch` if the value's kind is not compatible
    ///   with the binding's pinned kind.
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        let binding = self.scopes
                          .iter_mut()
                          .rev()
                          .find_map(|scope| scope.get_mut(name))
                          .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                                         line })?;

        if !binding.kind.accepts(value.kind()) {
            return Err(RuntimeError::KindMismatch { name: name.to_string(),
                                                    expected: binding.kind,
                                                    found: value.kind(),
                                                    line });
        }
        binding.value = value;
        Ok(())
    }
}
