use std::collections::HashMap;

use crate::{ast::FunctionDecl,
            error::SyntaxError,
            interpreter::evaluator::function::BUILTIN_FUNCTIONS};

/// Stores every function known to the interpreter.
///
/// The registry is consulted *during parsing* to decide whether an identifier
/// followed by `(` is a call, and *during evaluation* to resolve the body of a
/// user-defined function. Builtins are always considered registered.
///
/// A name can be registered without a body: the parser declares a function
/// before parsing its body so that the body may call the function recursively.
/// Such a provisional entry is either completed with [`define`] or removed by
/// the [`RollbackGuard`] if parsing fails.
///
/// [`define`]: FunctionRegistry::define
#[derive(Debug, Default, Clone)]
pub struct FunctionRegistry {
    functions: HashMap<String, Option<FunctionDecl>>,
}

impl FunctionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether `name` is taken, either by a builtin or by a declared
    /// function (provisional entries included).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        Self::is_builtin(name) || self.functions.contains_key(name)
    }

    /// Checks whether `name` refers to a builtin function.
    #[must_use]
    pub fn is_builtin(name: &str) -> bool {
        BUILTIN_FUNCTIONS.contains(&name)
    }

    /// Looks up the declaration of a user-defined function.
    ///
    /// Provisional entries yield `None`; a function cannot be *called* before
    /// its declaration has been committed.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FunctionDecl> {
        self.functions.get(name).and_then(Option::as_ref)
    }

    /// Registers `name` provisionally, without a body.
    ///
    /// # Errors
    /// - [`SyntaxError::FunctionRedefinition`]: The name is already taken,
    ///   including by a builtin.
    pub fn declare(&mut self, name: &str, line: usize) -> Result<(), SyntaxError> {
        if self.contains(name) {
            return Err(SyntaxError::FunctionRedefinition { name: name.to_string(),
                                                           line });
        }
        self.functions.insert(name.to_string(), None);

        Ok(())
    }

    /// Registers `name` provisionally and returns a guard that will remove the
    /// entry again unless it is disarmed.
    ///
    /// This is an RAII helper used by the parser: the provisional entry must
    /// not outlive a failed declaration, no matter which parse step fails.
    ///
    /// # Errors
    /// - [`SyntaxError::FunctionRedefinition`]: The name is already taken.
    ///
    /// # Example
    /// ```
    /// use hulk::interpreter::registry::FunctionRegistry;
    ///
    /// let mut registry = FunctionRegistry::new();
    ///
    /// {
    ///     let _guard = registry.declare_guarded("square", 1).unwrap();
    /// }
    ///
    /// assert!(!registry.contains("square"));
    /// ```
    pub fn declare_guarded(&mut self, name: &str, line: usize)
                           -> Result<RollbackGuard, SyntaxError> {
        self.declare(name, line)?;

        Ok(RollbackGuard { registry_pointer: self,
                           name:             name.to_string(),
                           armed:            true, })
    }

    /// Commits a declaration, replacing the provisional entry with its body.
    pub fn define(&mut self, decl: FunctionDecl) {
        self.functions.insert(decl.name.clone(), Some(decl));
    }

    /// Removes `name` from the registry. Builtins are unaffected.
    pub fn remove(&mut self, name: &str) {
        self.functions.remove(name);
    }
}

/// Removes a provisional registry entry on drop.
///
/// Created by [`FunctionRegistry::declare_guarded`]. Call [`disarm`] once the
/// declaration has parsed successfully to keep the entry.
///
/// [`disarm`]: RollbackGuard::disarm
pub struct RollbackGuard {
    registry_pointer: *mut FunctionRegistry,
    name:             String,
    armed:            bool,
}

impl RollbackGuard {
    /// Keeps the registry entry; the guard no longer removes it on drop.
    pub fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for RollbackGuard {
    fn drop(&mut self) {
        if self.armed {
            unsafe { (*self.registry_pointer).remove(&self.name) };
        }
    }
}
