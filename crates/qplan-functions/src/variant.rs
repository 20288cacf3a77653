//! Function signature model

use qplan_types::{ParameterizedType, Type};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Function category; each has its own namespace in a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionKind {
    Scalar,
    Aggregate,
    Window,
}

impl FunctionKind {
    pub const ALL: [FunctionKind; 3] = [Self::Scalar, Self::Aggregate, Self::Window];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Aggregate => "aggregate",
            Self::Window => "window",
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared argument slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FunctionArgument {
    /// Consumes one actual call argument of a matching type
    Value {
        name: Option<String>,
        #[serde(rename = "value")]
        ty: ParameterizedType,
    },
    /// A type-valued slot
    Type { name: Option<String> },
    /// One of a fixed set of option literals
    Enum {
        name: Option<String>,
        options: Vec<String>,
        required: bool,
    },
}

impl FunctionArgument {
    /// Create an unnamed value argument
    pub fn value(ty: ParameterizedType) -> Self {
        Self::Value { name: None, ty }
    }

    /// Create an unnamed enum argument
    pub fn enumeration<I, S>(options: I, required: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enum {
            name: None,
            options: options.into_iter().map(Into::into).collect(),
            required,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Value { name, .. } | Self::Type { name } | Self::Enum { name, .. } => {
                name.as_deref()
            }
        }
    }

    /// The declared pattern, if this argument consumes a value
    pub fn value_type(&self) -> Option<&ParameterizedType> {
        match self {
            Self::Value { ty, .. } => Some(ty),
            _ => None,
        }
    }
}

/// Accepted actual-argument counts for a repeating argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionVariadic {
    /// Minimum count (inclusive)
    pub min: usize,
    /// Maximum count (inclusive), unbounded if absent
    pub max: Option<usize>,
}

impl FunctionVariadic {
    pub fn new(min: usize, max: Option<usize>) -> Self {
        Self { min, max }
    }

    /// Check whether `count` actual arguments are within bounds
    pub fn accepts(&self, count: usize) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }
}

/// One declared overload of a named function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionVariant {
    name: String,
    uri: String,
    kind: FunctionKind,
    arguments: Vec<FunctionArgument>,
    return_type: ParameterizedType,
    variadic: Option<FunctionVariadic>,
    intermediate: Option<ParameterizedType>,
}

impl FunctionVariant {
    pub fn new(
        name: impl Into<String>,
        uri: impl Into<String>,
        kind: FunctionKind,
        arguments: Vec<FunctionArgument>,
        return_type: ParameterizedType,
    ) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            kind,
            arguments,
            return_type,
            variadic: None,
            intermediate: None,
        }
    }

    pub fn with_variadic(mut self, variadic: FunctionVariadic) -> Self {
        self.variadic = Some(variadic);
        self
    }

    /// Attach an accumulator type
    ///
    /// Only aggregate variants keep it; on other kinds it is dropped.
    pub fn with_intermediate(mut self, intermediate: ParameterizedType) -> Self {
        if self.kind == FunctionKind::Aggregate {
            self.intermediate = Some(intermediate);
        } else {
            log::warn!(
                "ignoring intermediate type `{}` on {} function `{}`",
                intermediate,
                self.kind,
                self.name
            );
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier of the catalog source that declared this variant
    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn kind(&self) -> FunctionKind {
        self.kind
    }

    pub fn arguments(&self) -> &[FunctionArgument] {
        &self.arguments
    }

    pub fn return_type(&self) -> &ParameterizedType {
        &self.return_type
    }

    pub fn variadic(&self) -> Option<&FunctionVariadic> {
        self.variadic.as_ref()
    }

    pub fn intermediate(&self) -> Option<&ParameterizedType> {
        self.intermediate.as_ref()
    }

    /// Patterns of the value-consuming arguments, in declaration order
    pub fn value_arguments(&self) -> impl Iterator<Item = &ParameterizedType> {
        self.arguments.iter().filter_map(FunctionArgument::value_type)
    }

    /// Render `name:arg1_arg2`, listing value arguments only
    pub fn signature(&self) -> String {
        signature(&self.name, &self.arguments)
    }

    /// Check whether this variant accepts a call with the given argument types
    pub fn matches(&self, actual: &[Type]) -> bool {
        if self.matches_arguments(actual) {
            return true;
        }
        match (&self.intermediate, actual) {
            (Some(intermediate), [single]) => ParameterizedType::from(single) == *intermediate,
            _ => false,
        }
    }

    fn matches_arguments(&self, actual: &[Type]) -> bool {
        if let Some(variadic) = &self.variadic {
            if !variadic.accepts(actual.len()) {
                return false;
            }
            return match self.value_arguments().next() {
                Some(repeated) => actual.iter().all(|ty| repeated.is_match(ty)),
                None => true,
            };
        }

        let mut patterns = self.value_arguments();
        let mut actuals = actual.iter();
        loop {
            match (patterns.next(), actuals.next()) {
                (Some(pattern), Some(ty)) if pattern.is_match(ty) => continue,
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}

impl fmt::Display for FunctionVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.signature(), self.return_type)
    }
}

/// Render a function signature from a name and its declared arguments
///
/// Value arguments contribute their pattern signature, joined with `_`
/// after a `:`. Type and enum arguments are omitted, and a function with no
/// value arguments renders as its bare name.
pub fn signature(name: &str, arguments: &[FunctionArgument]) -> String {
    let types: Vec<String> = arguments
        .iter()
        .filter_map(FunctionArgument::value_type)
        .map(ParameterizedType::signature)
        .collect();
    if types.is_empty() {
        name.to_string()
    } else {
        format!("{}:{}", name, types.join("_"))
    }
}

/// A user-defined type declared by a catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeVariant {
    pub name: String,
    pub uri: String,
}

impl TypeVariant {
    pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qplan_types::decode_parameterized;

    fn value(text: &str) -> FunctionArgument {
        FunctionArgument::value(decode_parameterized(text).unwrap())
    }

    fn scalar(name: &str, arguments: Vec<FunctionArgument>) -> FunctionVariant {
        FunctionVariant::new(
            name,
            "test",
            FunctionKind::Scalar,
            arguments,
            ParameterizedType::from(&Type::bool()),
        )
    }

    #[test]
    fn test_signature_skips_non_value_arguments() {
        let args = vec![
            FunctionArgument::enumeration(["SILENT", "SATURATE", "ERROR"], false),
            value("i8"),
            value("i8"),
        ];
        assert_eq!(signature("add", &args), "add:i8_i8");
        assert_eq!(signature("now", &[]), "now");
        assert_eq!(
            signature("cast", &[FunctionArgument::Type { name: None }]),
            "cast"
        );
    }

    #[test]
    fn test_signature_renders_patterns() {
        let variant = scalar("like", vec![value("varchar<L1>"), value("string?")]);
        assert_eq!(variant.signature(), "like:vchar<L1>_str?");
    }

    #[test]
    fn test_fixed_arity_match() {
        let variant = scalar("lt", vec![value("any1"), value("any1")]);
        assert!(variant.matches(&[Type::i8(), Type::i8()]));
        assert!(!variant.matches(&[Type::i8()]));
        assert!(!variant.matches(&[Type::i8(), Type::i8(), Type::i8()]));
    }

    #[test]
    fn test_enum_argument_consumes_no_actual() {
        let variant = scalar(
            "add",
            vec![FunctionArgument::enumeration(["SILENT"], false), value("i8"), value("i8")],
        );
        assert!(variant.matches(&[Type::i8(), Type::i8()]));
    }

    #[test]
    fn test_variadic_bounds() {
        let variant =
            scalar("and", vec![value("boolean?")]).with_variadic(FunctionVariadic::new(0, Some(2)));
        assert!(variant.matches(&[]));
        assert!(variant.matches(&[Type::bool(), Type::bool().with_nullable(true)]));
        assert!(!variant.matches(&[Type::bool(), Type::bool(), Type::bool()]));
        assert!(!variant.matches(&[Type::i32()]));
    }

    #[test]
    fn test_variadic_without_value_argument() {
        let variant = scalar("coalesce", vec![FunctionArgument::Type { name: None }])
            .with_variadic(FunctionVariadic::new(2, None));
        assert!(!variant.matches(&[Type::i32()]));
        assert!(variant.matches(&[Type::i32(), Type::string()]));
    }

    #[test]
    fn test_intermediate_dropped_on_scalar() {
        let variant = scalar("f", vec![value("i32")])
            .with_intermediate(decode_parameterized("struct<i64>").unwrap());
        assert_eq!(variant.intermediate(), None);
        assert!(!variant.matches(&[Type::structure(vec![Type::i64()])]));
    }

    #[test]
    fn test_variadic_accepts() {
        let unbounded = FunctionVariadic::new(1, None);
        assert!(!unbounded.accepts(0));
        assert!(unbounded.accepts(1000));
    }
}
