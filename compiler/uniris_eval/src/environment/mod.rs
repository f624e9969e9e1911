//! Chained scopes for variable lookup and assignment.
//!
//! Every block and every call gets a fresh child scope; the parent link is
//! shared, so a child keeps its whole ancestor chain alive.
//!
//! Assignment never shadows. [`Environment::set`] updates the outermost
//! ancestor that already binds the name, and only creates a binding in the
//! current scope when no ancestor has one.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::errors::{undefined_variable, EvalResult};
use crate::Value;

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// All scope allocations go through [`LocalScope::new`].
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether both handles point at the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single scope containing variable bindings.
#[derive(Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    enclosing: Option<Environment>,
}

/// Handle to a scope and, through it, its ancestor chain.
///
/// Cloning the handle shares the scope.
#[derive(Clone, Debug)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// A root scope with no parent.
    pub fn new() -> Self {
        Environment(LocalScope::new(Scope::default()))
    }

    /// A fresh empty child of `enclosing`.
    pub fn with_enclosing(enclosing: &Environment) -> Self {
        Environment(LocalScope::new(Scope {
            bindings: FxHashMap::default(),
            enclosing: Some(enclosing.clone()),
        }))
    }

    pub fn enclosing(&self) -> Option<Environment> {
        self.0.borrow().enclosing.clone()
    }

    /// Re-parent this scope. Used to hang a long-lived session scope below
    /// a freshly built root.
    pub fn set_enclosing(&self, enclosing: Option<Environment>) {
        self.0.borrow_mut().enclosing = enclosing;
    }

    /// Bind `name` in this scope, replacing any local binding.
    #[inline]
    pub fn define(&self, name: &str, value: Value) {
        self.0.borrow_mut().bindings.insert(name.to_owned(), value);
    }

    /// Look `name` up in this scope only.
    pub fn get_local(&self, name: &str) -> Option<Value> {
        self.0.borrow().bindings.get(name).cloned()
    }

    /// Look `name` up from this scope outwards.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let mut scope = self.clone();
        loop {
            if let Some(value) = scope.get_local(name) {
                return Some(value);
            }
            scope = scope.enclosing()?;
        }
    }

    /// Like [`lookup`](Self::lookup), failing with `UndefinedVariable`.
    pub fn get(&self, name: &str) -> EvalResult {
        self.lookup(name).ok_or_else(|| undefined_variable(name))
    }

    /// Assign without shadowing.
    ///
    /// Writes to the outermost ancestor that already binds `name`; if no
    /// ancestor does, binds it here. A binding in this scope alone does not
    /// stop the search, so an ancestor binding of the same name wins.
    pub fn set(&self, name: &str, value: Value) {
        let mut target = self.clone();
        let mut scope = self.enclosing();
        while let Some(current) = scope {
            if current.0.borrow().bindings.contains_key(name) {
                target = current.clone();
            }
            scope = current.enclosing();
        }
        target.define(name, value);
    }

    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.0.ptr_eq(&other.0)
    }

    /// Names bound directly in this scope, sorted.
    pub fn local_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.borrow().bindings.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
