//! Declaration records handed over by a catalog loader
//!
//! Records hold the raw type strings of a declaration. Converting a record
//! into a [`FunctionVariant`] decodes every type string; the first failure
//! is reported as a declaration error naming the function and its source.

use crate::registry::Entry;
use crate::variant::{FunctionArgument, FunctionKind, FunctionVariadic, FunctionVariant, TypeVariant};
use qplan_diagnostics::{QplanError, Result};
use qplan_types::decode_parameterized;
use serde::{Deserialize, Serialize};

/// One record of a loaded catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Declaration {
    Scalar(FunctionDeclaration),
    Aggregate(FunctionDeclaration),
    Window(FunctionDeclaration),
    Type(TypeDeclaration),
}

impl Declaration {
    pub(crate) fn into_entry(self) -> Result<Entry> {
        match self {
            Self::Scalar(decl) => decl.into_variant(FunctionKind::Scalar).map(Entry::Function),
            Self::Aggregate(decl) => decl
                .into_variant(FunctionKind::Aggregate)
                .map(Entry::Function),
            Self::Window(decl) => decl.into_variant(FunctionKind::Window).map(Entry::Function),
            Self::Type(decl) => Ok(Entry::Type(TypeVariant::new(decl.name, decl.uri))),
        }
    }
}

/// A declared user-defined type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub name: String,
    #[serde(default)]
    pub uri: String,
}

/// A single function overload as declared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub args: Vec<ArgumentDeclaration>,
    /// Return expression; derivation lines may precede the result type
    #[serde(rename = "return")]
    pub return_type: String,
    #[serde(default)]
    pub variadic: Option<VariadicDeclaration>,
    /// Accumulator type, meaningful for aggregates only
    #[serde(default)]
    pub intermediate: Option<String>,
}

impl FunctionDeclaration {
    /// Decode all type strings and build the variant
    pub fn into_variant(self, kind: FunctionKind) -> Result<FunctionVariant> {
        let Self {
            name,
            uri,
            args,
            return_type,
            variadic,
            intermediate,
        } = self;
        let wrap = |err: QplanError| QplanError::declaration(name.as_str(), uri.as_str(), err);

        let arguments = args
            .into_iter()
            .map(ArgumentDeclaration::into_argument)
            .collect::<Result<Vec<_>>>()
            .map_err(wrap)?;
        let return_type = decode_parameterized(last_line(&return_type)).map_err(wrap)?;
        let intermediate = intermediate
            .as_deref()
            .map(decode_parameterized)
            .transpose()
            .map_err(wrap)?;

        let mut variant = FunctionVariant::new(name.as_str(), uri.as_str(), kind, arguments, return_type);
        if let Some(variadic) = variadic.and_then(VariadicDeclaration::into_variadic) {
            variant = variant.with_variadic(variadic);
        }
        if let Some(intermediate) = intermediate {
            variant = variant.with_intermediate(intermediate);
        }
        Ok(variant)
    }
}

/// The result type is the last non-empty line of a return expression
fn last_line(expression: &str) -> &str {
    expression
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
}

/// An argument record, distinguished by which fields it carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgumentDeclaration {
    Enum {
        options: Vec<String>,
        #[serde(default)]
        required: bool,
        #[serde(default)]
        name: Option<String>,
    },
    Value {
        value: String,
        #[serde(default)]
        name: Option<String>,
    },
    Type {
        #[serde(rename = "type")]
        type_expr: String,
        #[serde(default)]
        name: Option<String>,
    },
}

impl ArgumentDeclaration {
    pub fn into_argument(self) -> Result<FunctionArgument> {
        let argument = match self {
            Self::Enum {
                options,
                required,
                name,
            } => FunctionArgument::Enum {
                name,
                options,
                required,
            },
            Self::Value { value, name } => FunctionArgument::Value {
                name,
                ty: decode_parameterized(&value)?,
            },
            Self::Type { name, .. } => FunctionArgument::Type { name },
        };
        Ok(argument)
    }
}

/// Variadic bounds as declared; a record without `min` is not variadic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VariadicDeclaration {
    #[serde(default)]
    pub min: Option<usize>,
    #[serde(default)]
    pub max: Option<usize>,
}

impl VariadicDeclaration {
    fn into_variadic(self) -> Option<FunctionVariadic> {
        self.min.map(|min| FunctionVariadic::new(min, self.max))
    }
}

/// A whole catalog file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtensionDocument {
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub types: Vec<NamedEntry>,
    #[serde(default)]
    pub scalar_functions: Vec<FunctionGroup>,
    #[serde(default)]
    pub aggregate_functions: Vec<FunctionGroup>,
    #[serde(default)]
    pub window_functions: Vec<FunctionGroup>,
}

/// A `types` entry of a catalog file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntry {
    pub name: String,
}

/// All overloads of one function name in a catalog file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionGroup {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub impls: Vec<ImplementationDeclaration>,
}

/// One overload inside a [`FunctionGroup`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplementationDeclaration {
    #[serde(default)]
    pub args: Vec<ArgumentDeclaration>,
    #[serde(rename = "return")]
    pub return_type: String,
    #[serde(default)]
    pub variadic: Option<VariadicDeclaration>,
    #[serde(default)]
    pub intermediate: Option<String>,
}

impl ExtensionDocument {
    /// Set the source identifier used for every record of this document
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    /// Flatten into declaration records in document order
    ///
    /// Types come first, then scalar, aggregate and window overloads.
    pub fn into_declarations(self) -> Vec<Declaration> {
        let uri = self.uri;
        let mut out = Vec::new();

        out.extend(self.types.into_iter().map(|entry| {
            Declaration::Type(TypeDeclaration {
                name: entry.name,
                uri: uri.clone(),
            })
        }));

        let groups = [
            (FunctionKind::Scalar, self.scalar_functions),
            (FunctionKind::Aggregate, self.aggregate_functions),
            (FunctionKind::Window, self.window_functions),
        ];
        for (kind, groups) in groups {
            for group in groups {
                for imp in group.impls {
                    let decl = FunctionDeclaration {
                        name: group.name.clone(),
                        uri: uri.clone(),
                        args: imp.args,
                        return_type: imp.return_type,
                        variadic: imp.variadic,
                        intermediate: imp.intermediate,
                    };
                    out.push(match kind {
                        FunctionKind::Scalar => Declaration::Scalar(decl),
                        FunctionKind::Aggregate => Declaration::Aggregate(decl),
                        FunctionKind::Window => Declaration::Window(decl),
                    });
                }
            }
        }
        out
    }
}
