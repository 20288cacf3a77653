//! Overload resolution
//!
//! A caller-supplied name goes through the engine's alias table, then the
//! registered variants of the resulting name are tried in registration
//! order. The first variant that accepts the argument types wins; there is
//! no scoring between candidates.

use crate::mapping::{FunctionMapping, NoMapping};
use crate::registry::Registry;
use crate::variant::{FunctionKind, FunctionVariant, TypeVariant};
use qplan_types::Type;
use std::sync::Arc;

/// Resolves calls against a shared registry
#[derive(Clone)]
pub struct FunctionLookup {
    registry: Arc<Registry>,
    mapping: Arc<dyn FunctionMapping>,
}

impl FunctionLookup {
    pub fn new(registry: Arc<Registry>, mapping: Arc<dyn FunctionMapping>) -> Self {
        Self { registry, mapping }
    }

    /// Create a lookup that uses names as given
    pub fn without_mapping(registry: Arc<Registry>) -> Self {
        Self::new(registry, Arc::new(NoMapping))
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn lookup_scalar(&self, name: &str, actual: &[Type]) -> Option<&FunctionVariant> {
        self.lookup(FunctionKind::Scalar, name, actual)
    }

    /// Resolve an aggregate call
    ///
    /// A single argument equal to a variant's intermediate type also selects
    /// that variant.
    pub fn lookup_aggregate(&self, name: &str, actual: &[Type]) -> Option<&FunctionVariant> {
        self.lookup(FunctionKind::Aggregate, name, actual)
    }

    pub fn lookup_window(&self, name: &str, actual: &[Type]) -> Option<&FunctionVariant> {
        self.lookup(FunctionKind::Window, name, actual)
    }

    pub fn lookup_type(&self, name: &str) -> Option<&TypeVariant> {
        self.registry.lookup_type(name)
    }

    /// Resolve a call in the given category
    pub fn lookup(&self, kind: FunctionKind, name: &str, actual: &[Type]) -> Option<&FunctionVariant> {
        let canonical = self.canonical_name(kind, name);
        let found = self
            .registry
            .variants(kind, canonical)
            .iter()
            .find(|variant| variant.matches(actual));

        if found.is_none() {
            log::trace!(
                "no {} variant of `{}` accepts ({})",
                kind,
                canonical,
                actual
                    .iter()
                    .map(Type::signature)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        found
    }

    /// Apply the alias table for `kind`
    pub fn canonical_name<'a>(&'a self, kind: FunctionKind, name: &'a str) -> &'a str {
        match self.mapping.alias(kind, name) {
            Some(alias) => {
                log::debug!("{} function `{}` resolved to `{}`", kind, name, alias);
                alias
            }
            None => name,
        }
    }
}

impl std::fmt::Debug for FunctionLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionLookup")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
