//! Function and type registry
//!
//! A registry is built once from a catalog and read-only afterwards. Share
//! it behind an `Arc` for concurrent lookups.

use crate::declaration::Declaration;
use crate::variant::{FunctionKind, FunctionVariant, TypeVariant};
use indexmap::IndexMap;
use qplan_diagnostics::Result;

/// A converted declaration, ready to insert
#[derive(Debug)]
pub(crate) enum Entry {
    Function(FunctionVariant),
    Type(TypeVariant),
}

/// Declared function variants and types, indexed by name
///
/// Variants of the same name keep their registration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    scalar: IndexMap<String, Vec<FunctionVariant>>,
    aggregate: IndexMap<String, Vec<FunctionVariant>>,
    window: IndexMap<String, Vec<FunctionVariant>>,
    types: IndexMap<String, TypeVariant>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Build a registry from declaration records
    ///
    /// Every record is decoded before anything is inserted, so a failing
    /// record yields an error and no registry.
    pub fn build<I>(declarations: I) -> Result<Self>
    where
        I: IntoIterator<Item = Declaration>,
    {
        let entries = declarations
            .into_iter()
            .map(Declaration::into_entry)
            .collect::<Result<Vec<_>>>()?;

        let mut builder = Self::builder();
        for entry in entries {
            builder.insert(entry);
        }
        Ok(builder.build())
    }

    fn category(&self, kind: FunctionKind) -> &IndexMap<String, Vec<FunctionVariant>> {
        match kind {
            FunctionKind::Scalar => &self.scalar,
            FunctionKind::Aggregate => &self.aggregate,
            FunctionKind::Window => &self.window,
        }
    }

    /// Variants registered under `name`, in registration order
    pub fn variants(&self, kind: FunctionKind, name: &str) -> &[FunctionVariant] {
        self.category(kind)
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Registered function names of one category
    pub fn names(&self, kind: FunctionKind) -> impl Iterator<Item = &str> {
        self.category(kind).keys().map(String::as_str)
    }

    /// Number of variants registered in one category
    pub fn len(&self, kind: FunctionKind) -> usize {
        self.category(kind).values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        FunctionKind::ALL.iter().all(|kind| self.category(*kind).is_empty()) && self.types.is_empty()
    }

    pub fn lookup_type(&self, name: &str) -> Option<&TypeVariant> {
        self.types.get(name)
    }

    pub fn types(&self) -> impl Iterator<Item = &TypeVariant> {
        self.types.values()
    }
}

/// Incremental registry construction
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: Registry,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a variant under its name and kind
    pub fn add_variant(&mut self, variant: FunctionVariant) -> &mut Self {
        let map = match variant.kind() {
            FunctionKind::Scalar => &mut self.registry.scalar,
            FunctionKind::Aggregate => &mut self.registry.aggregate,
            FunctionKind::Window => &mut self.registry.window,
        };
        map.entry(variant.name().to_string())
            .or_default()
            .push(variant);
        self
    }

    /// Insert a type; a later type with the same name replaces the earlier one
    pub fn add_type(&mut self, ty: TypeVariant) -> &mut Self {
        if let Some(previous) = self.registry.types.insert(ty.name.clone(), ty) {
            log::debug!(
                "type `{}` from `{}` overwritten",
                previous.name,
                previous.uri
            );
        }
        self
    }

    /// Decode and add one declaration record
    ///
    /// On error the builder is left unchanged.
    pub fn add_declaration(&mut self, declaration: Declaration) -> Result<&mut Self> {
        let entry = declaration.into_entry()?;
        Ok(self.insert(entry))
    }

    fn insert(&mut self, entry: Entry) -> &mut Self {
        match entry {
            Entry::Function(variant) => self.add_variant(variant),
            Entry::Type(ty) => self.add_type(ty),
        }
    }

    pub fn build(self) -> Registry {
        let registry = self.registry;
        log::debug!(
            "registry built: {} scalar, {} aggregate, {} window variants, {} types",
            registry.len(FunctionKind::Scalar),
            registry.len(FunctionKind::Aggregate),
            registry.len(FunctionKind::Window),
            registry.types.len()
        );
        registry
    }
}
