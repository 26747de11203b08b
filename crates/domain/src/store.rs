//! Layered variable store
//!
//! Name-to-value lookup backed by three sources merged at lookup time.

use std::collections::HashMap;

/// Layered mapping from variable name to string value.
///
/// Lookup precedence, highest first:
/// 1. values set during the current run (resolved defaults included),
/// 2. bindings loaded from an explicitly requested variable file,
/// 3. the process environment.
///
/// One store is threaded by reference through every template's processing
/// pass and mutated in place, never rolled back, so a value bound while
/// processing one template is visible to every later template in the same
/// run.
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    run: HashMap<String, String>,
    file: HashMap<String, String>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks `name` up across the layers, highest precedence first.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        if let Some(value) = self.run.get(name) {
            return Some(value.clone());
        }
        if let Some(value) = self.file.get(name) {
            return Some(value.clone());
        }
        std::env::var(name).ok()
    }

    /// Binds `name` in the run layer. A later `set` for the same name wins.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.run.insert(name.into(), value.into());
    }

    /// Binds `name` in the file layer.
    pub fn bind_file(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.file.insert(name.into(), value.into());
    }

    /// Returns true when `name` resolves in any layer.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns true when `name` resolves to a non-empty value.
    ///
    /// This is the predicate default declarations are gated on: a bound but
    /// empty value does not satisfy a declaration.
    #[must_use]
    pub fn bound(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.is_empty())
    }

    /// Bindings from the non-environment layers, run layer winning, for
    /// export into a child process. The process environment itself is
    /// inherited by the child and is not duplicated here.
    #[must_use]
    pub fn exported_bindings(&self) -> HashMap<String, String> {
        let mut bindings = self.file.clone();
        bindings.extend(self.run.iter().map(|(k, v)| (k.clone(), v.clone())));
        bindings
    }
}
