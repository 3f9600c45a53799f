//! Type environment for lexical scoping.
//!
//! A stack of scopes, each mapping names to monomorphic types. Inner scopes
//! shadow outer ones; popping a scope forgets its bindings. The inference
//! pass opens one scope per binder (`let`, `proc`, `letrec`) and pops it on
//! the way out, so a scope never outlives the expression that introduced
//! it.
//!
//! # Example
//!
//! ```
//! use letrec_typecheck::context::TypeEnv;
//! use letrec_typecheck::types::Ty;
//! use letrec_mem::Symbol;
//!
//! let x = Symbol::new(0);
//! let mut env = TypeEnv::new();
//! env.bind(x, Ty::int());
//!
//! env.new_scope();
//! env.bind(x, Ty::bool());
//! assert_eq!(env.lookup(x), Some(&Ty::bool()));
//!
//! env.pop_scope();
//! assert_eq!(env.lookup(x), Some(&Ty::int()));
//! ```

use crate::types::Ty;
use letrec_mem::Symbol;
use std::collections::HashMap;

/// Scope stack mapping names to types.
#[derive(Debug, Clone)]
pub struct TypeEnv {
    /// Innermost scope last; never empty
    scopes: Vec<HashMap<Symbol, Ty>>,
}

impl Default for TypeEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeEnv {
    /// Creates an environment with a single, empty, outermost scope.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scopes: vec![HashMap::new()],
        }
    }

    /// Creates an environment whose outermost scope holds `bindings`.
    #[must_use]
    pub fn with_bindings(bindings: impl IntoIterator<Item = (Symbol, Ty)>) -> Self {
        Self {
            scopes: vec![bindings.into_iter().collect()],
        }
    }

    /// Opens a new innermost scope.
    pub fn new_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Drops the innermost scope. The outermost scope is never dropped.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Binds `name` in the innermost scope.
    pub fn bind(&mut self, name: Symbol, ty: Ty) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name, ty);
        }
    }

    /// Finds the nearest binding of `name`.
    #[must_use]
    pub fn lookup(&self, name: Symbol) -> Option<&Ty> {
        self.scopes.iter().rev().find_map(|scope| scope.get(&name))
    }

    /// Overwrites the nearest binding of `name`.
    ///
    /// Returns the previous type, or `None` (and changes nothing) if `name`
    /// is unbound.
    pub fn replace(&mut self, name: Symbol, ty: Ty) -> Option<Ty> {
        self.scopes
            .iter_mut()
            .rev()
            .find_map(|scope| scope.get_mut(&name))
            .map(|slot| std::mem::replace(slot, ty))
    }
}
