//! Engine name to catalog name alias tables

use crate::variant::FunctionKind;
use indexmap::IndexMap;

/// Alias tables supplied by an engine
///
/// Each category has its own table. A name without an alias is looked up
/// unchanged.
pub trait FunctionMapping: Send + Sync {
    fn scalar_alias(&self, _name: &str) -> Option<&str> {
        None
    }

    fn aggregate_alias(&self, _name: &str) -> Option<&str> {
        None
    }

    fn window_alias(&self, _name: &str) -> Option<&str> {
        None
    }

    /// Look up the alias in the table for `kind`
    fn alias(&self, kind: FunctionKind, name: &str) -> Option<&str> {
        match kind {
            FunctionKind::Scalar => self.scalar_alias(name),
            FunctionKind::Aggregate => self.aggregate_alias(name),
            FunctionKind::Window => self.window_alias(name),
        }
    }
}

/// The identity mapping
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMapping;

impl FunctionMapping for NoMapping {}

/// Alias tables held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticFunctionMapping {
    scalar: IndexMap<String, String>,
    aggregate: IndexMap<String, String>,
    window: IndexMap<String, String>,
}

impl StaticFunctionMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scalar(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.scalar.insert(from.into(), to.into());
        self
    }

    pub fn aggregate(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.aggregate.insert(from.into(), to.into());
        self
    }

    pub fn window(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.window.insert(from.into(), to.into());
        self
    }

    /// Add several scalar aliases at once
    pub fn scalars<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.scalar
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.scalar.is_empty() && self.aggregate.is_empty() && self.window.is_empty()
    }
}

impl FunctionMapping for StaticFunctionMapping {
    fn scalar_alias(&self, name: &str) -> Option<&str> {
        self.scalar.get(name).map(String::as_str)
    }

    fn aggregate_alias(&self, name: &str) -> Option<&str> {
        self.aggregate.get(name).map(String::as_str)
    }

    fn window_alias(&self, name: &str) -> Option<&str> {
        self.window.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_are_independent() {
        let mapping = StaticFunctionMapping::new()
            .scalar("plus", "add")
            .aggregate("mean", "avg");

        assert_eq!(mapping.alias(FunctionKind::Scalar, "plus"), Some("add"));
        assert_eq!(mapping.alias(FunctionKind::Aggregate, "plus"), None);
        assert_eq!(mapping.alias(FunctionKind::Aggregate, "mean"), Some("avg"));
        assert_eq!(mapping.alias(FunctionKind::Window, "mean"), None);
    }

    #[test]
    fn test_no_mapping() {
        assert_eq!(NoMapping.alias(FunctionKind::Scalar, "plus"), None);
        assert!(StaticFunctionMapping::new().is_empty());
    }

    #[test]
    fn test_bulk_scalar_aliases() {
        let mapping =
            StaticFunctionMapping::new().scalars([("minus", "subtract"), ("mod", "modulus")]);
        assert_eq!(mapping.scalar_alias("mod"), Some("modulus"));
    }
}
