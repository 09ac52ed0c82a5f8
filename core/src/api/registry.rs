//! Name to function mapping.

use std::sync::Arc;

use ecow::EcoString;
use hashbrown::HashMap;
use once_cell::sync::Lazy;
use tracing::debug;

use super::RegistryOptions;
use crate::{
    errors::EvalError,
    expression::{Call, Expression},
    function::{Function, FunctionRef},
    stdlib,
};

static STANDARD: Lazy<Registry> = Lazy::new(|| Registry::new(RegistryOptions::default(), |_| {}));

/// An immutable catalog of named functions.
pub struct Registry {
    functions: HashMap<EcoString, FunctionRef>,
}

impl Registry {
    /// Build a registry.
    ///
    /// The built-ins selected by `options` are registered first, then `init`
    /// registers host functions. A later registration replaces an earlier one
    /// with the same name, so hosts can override built-ins.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let registry = Registry::new(RegistryOptions::default(), |builder| {
    ///     builder.register("avg", Avg);
    /// });
    /// ```
    pub fn new(options: RegistryOptions, init: impl FnOnce(&mut RegistryBuilder)) -> Self {
        let mut builder = RegistryBuilder::new();
        if options.include_stdlib {
            stdlib::register_stdlib(&mut builder, &options);
        }
        init(&mut builder);

        let registry = builder.build();
        debug!(functions = registry.len(), "built function registry");
        registry
    }

    /// The process-wide registry holding every built-in, built on first use.
    pub fn standard() -> &'static Registry {
        &STANDARD
    }

    pub fn get(&self, name: &str) -> Option<FunctionRef> {
        self.functions.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(EcoString::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Build a call node to the function registered as `name`.
    pub fn call(&self, name: &str, args: Vec<Box<dyn Expression>>) -> Result<Call, EvalError> {
        let function = self
            .get(name)
            .ok_or_else(|| EvalError::UnknownFunction { name: name.into() })?;
        Call::new(function, args)
    }
}

/// Builder for constructing a [`Registry`].
///
/// Only reachable through the `init` closure of [`Registry::new`].
pub struct RegistryBuilder {
    functions: HashMap<EcoString, FunctionRef>,
}

impl RegistryBuilder {
    fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Register a function under `name`, replacing any earlier entry.
    ///
    /// Pass built-ins and other statics by reference (`&SIN`); owned values
    /// are moved into a shared handle.
    pub fn register(&mut self, name: &str, function: impl Function + 'static) -> &mut Self {
        self.functions.insert(name.into(), Arc::new(function));
        self
    }

    /// Register an existing shared handle.
    pub fn register_shared(&mut self, name: &str, function: FunctionRef) -> &mut Self {
        self.functions.insert(name.into(), function);
        self
    }

    fn build(self) -> Registry {
        Registry {
            functions: self.functions,
        }
    }
}
