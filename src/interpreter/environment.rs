use std::collections::HashMap;

use crate::interpreter::value::Value;

/// A flat mapping from variable names to values.
///
/// Scoping works by *copying*: `let` clones the current environment and adds
/// its bindings to the copy, and a function call starts from an empty
/// environment holding only the parameters. Nothing written inside a scope is
/// ever visible outside of it.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    values: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Binds `name` to `value`, overwriting any previous binding.
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }
}
