//! Declaration-side type patterns
//!
//! A `ParameterizedType` has the same shape as a [`Type`] but its parametric
//! leaves (length, precision, scale) and whole type positions may hold a
//! [`StringLiteral`] token instead of a resolved value.

use crate::kind::{ScalarKind, TypeKind};
use crate::type_system::Type;
use qplan_diagnostics::{QP0004, QP0005, QP0006, QplanError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bare token in a type pattern, such as `any1`, `T`, `L1` or `38`
///
/// Serialized as its text; the flags are recomputed on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct StringLiteral {
    value: String,
    wildcard: bool,
    placeholder: bool,
}

impl StringLiteral {
    /// Classify a token
    ///
    /// Tokens starting with `any` (any case) are wildcards. Tokens made only
    /// of ASCII digits are integer literals. Everything else is a placeholder.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let wildcard = value.to_ascii_lowercase().starts_with("any");
        let placeholder = !wildcard && !is_non_negative_integer(&value);
        Self {
            value,
            wildcard,
            placeholder,
        }
    }

    /// Create an integer literal token
    pub fn integer(value: u32) -> Self {
        Self {
            value: value.to_string(),
            wildcard: false,
            placeholder: false,
        }
    }

    /// The token text as written
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether this token accepts any type
    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Whether this token names an unresolved variable
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// Whether this token is a literal non-negative integer
    pub fn is_integer(&self) -> bool {
        !self.wildcard && !self.placeholder
    }

    /// The integer value, if this is an integer literal that fits in `u32`
    pub fn as_integer(&self) -> Option<u32> {
        if self.is_integer() {
            self.value.parse().ok()
        } else {
            None
        }
    }
}

impl From<String> for StringLiteral {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<StringLiteral> for String {
    fn from(literal: StringLiteral) -> Self {
        literal.value
    }
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Plain decimal digits only: no sign, no whitespace, not empty
pub(crate) fn is_non_negative_integer(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// A type pattern used on the declaration side of a function signature
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ParameterizedType {
    Scalar {
        kind: ScalarKind,
        nullable: bool,
    },
    FixedChar {
        length: StringLiteral,
        nullable: bool,
    },
    Varchar {
        length: StringLiteral,
        nullable: bool,
    },
    FixedBinary {
        length: StringLiteral,
        nullable: bool,
    },
    Decimal {
        precision: StringLiteral,
        scale: StringLiteral,
        nullable: bool,
    },
    List {
        element: Box<ParameterizedType>,
        nullable: bool,
    },
    Struct {
        children: Vec<ParameterizedType>,
        nullable: bool,
    },
    Map {
        key: Box<ParameterizedType>,
        value: Box<ParameterizedType>,
        nullable: bool,
    },
    /// A bare token standing for a whole type (`any1`, `T`)
    Literal {
        literal: StringLiteral,
        nullable: bool,
    },
}

impl ParameterizedType {
    /// Create a bare-token pattern
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal {
            literal: StringLiteral::new(value),
            nullable: false,
        }
    }

    /// The kind of the outermost node, `None` for bare tokens
    pub fn kind(&self) -> Option<TypeKind> {
        match self {
            Self::Scalar { kind, .. } => Some(kind.kind()),
            Self::FixedChar { .. } => Some(TypeKind::FixedChar),
            Self::Varchar { .. } => Some(TypeKind::Varchar),
            Self::FixedBinary { .. } => Some(TypeKind::FixedBinary),
            Self::Decimal { .. } => Some(TypeKind::Decimal),
            Self::List { .. } => Some(TypeKind::List),
            Self::Struct { .. } => Some(TypeKind::Struct),
            Self::Map { .. } => Some(TypeKind::Map),
            Self::Literal { .. } => None,
        }
    }

    /// Whether the outermost node admits nulls
    pub fn is_nullable(&self) -> bool {
        match self {
            Self::Scalar { nullable, .. }
            | Self::FixedChar { nullable, .. }
            | Self::Varchar { nullable, .. }
            | Self::FixedBinary { nullable, .. }
            | Self::Decimal { nullable, .. }
            | Self::List { nullable, .. }
            | Self::Struct { nullable, .. }
            | Self::Map { nullable, .. }
            | Self::Literal { nullable, .. } => *nullable,
        }
    }

    /// Return this pattern with the given nullability on the outermost node
    pub fn with_nullable(mut self, value: bool) -> Self {
        match &mut self {
            Self::Scalar { nullable, .. }
            | Self::FixedChar { nullable, .. }
            | Self::Varchar { nullable, .. }
            | Self::FixedBinary { nullable, .. }
            | Self::Decimal { nullable, .. }
            | Self::List { nullable, .. }
            | Self::Struct { nullable, .. }
            | Self::Map { nullable, .. }
            | Self::Literal { nullable, .. } => *nullable = value,
        }
        self
    }

    /// The token, if this pattern is a bare token
    pub fn as_literal(&self) -> Option<&StringLiteral> {
        match self {
            Self::Literal { literal, .. } => Some(literal),
            _ => None,
        }
    }

    /// Whether this pattern is a wildcard token
    pub fn is_wildcard(&self) -> bool {
        self.as_literal().is_some_and(StringLiteral::is_wildcard)
    }

    /// Render the signature, e.g. `dec<P1,S1>` or `any1`
    pub fn signature(&self) -> String {
        let mut out = match self {
            Self::Literal { literal, .. } => literal.value().to_string(),
            _ => self.kind().map(|k| k.signature()).unwrap_or_default().to_string(),
        };
        if self.is_nullable() {
            out.push('?');
        }
        let params = match self {
            Self::Scalar { .. } | Self::Literal { .. } => return out,
            Self::FixedChar { length, .. }
            | Self::Varchar { length, .. }
            | Self::FixedBinary { length, .. } => length.to_string(),
            Self::Decimal {
                precision, scale, ..
            } => format!("{},{}", precision, scale),
            Self::List { element, .. } => element.signature(),
            Self::Struct { children, .. } => children
                .iter()
                .map(ParameterizedType::signature)
                .collect::<Vec<_>>()
                .join(","),
            Self::Map { key, value, .. } => format!("{},{}", key.signature(), value.signature()),
        };
        out.push('<');
        out.push_str(&params);
        out.push('>');
        out
    }

    /// Resolve into a concrete type
    ///
    /// Fails if any leaf is not an integer literal or any position is still a
    /// bare token. `input` is the text reported in errors.
    pub(crate) fn resolve(self, input: &str) -> Result<Type> {
        let ty = match self {
            Self::Scalar { kind, nullable } => Type::Scalar { kind, nullable },
            Self::FixedChar { length, nullable } => Type::FixedChar {
                length: resolve_leaf(&length, "fixedchar length", input)?,
                nullable,
            },
            Self::Varchar { length, nullable } => Type::Varchar {
                length: resolve_leaf(&length, "varchar length", input)?,
                nullable,
            },
            Self::FixedBinary { length, nullable } => Type::FixedBinary {
                length: resolve_leaf(&length, "fixedbinary length", input)?,
                nullable,
            },
            Self::Decimal {
                precision,
                scale,
                nullable,
            } => Type::Decimal {
                precision: resolve_leaf(&precision, "decimal precision", input)?,
                scale: resolve_leaf(&scale, "decimal scale", input)?,
                nullable,
            },
            Self::List { element, nullable } => Type::List {
                element: Box::new(element.resolve(input)?),
                nullable,
            },
            Self::Struct { children, nullable } => Type::Struct {
                children: children
                    .into_iter()
                    .map(|child| child.resolve(input))
                    .collect::<Result<Vec<_>>>()?,
                nullable,
            },
            Self::Map {
                key,
                value,
                nullable,
            } => Type::Map {
                key: Box::new(key.resolve(input)?),
                value: Box::new(value.resolve(input)?),
                nullable,
            },
            Self::Literal { literal, .. } => {
                let parametric = TypeKind::from_keyword(&literal.value().to_ascii_lowercase())
                    .is_some_and(|kind| kind.is_parametric());
                return Err(if parametric {
                    QplanError::decode(
                        QP0006,
                        format!("`{}` requires type parameters", literal),
                        input,
                    )
                } else {
                    QplanError::decode(
                        QP0005,
                        format!("unresolved type parameter `{}`", literal),
                        input,
                    )
                });
            }
        };
        Ok(ty)
    }
}

fn resolve_leaf(leaf: &StringLiteral, what: &str, input: &str) -> Result<u32> {
    leaf.as_integer().ok_or_else(|| {
        QplanError::decode(
            QP0004,
            format!("{} must be a non-negative integer, found `{}`", what, leaf),
            input,
        )
    })
}

impl fmt::Display for ParameterizedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature())
    }
}

impl From<&Type> for ParameterizedType {
    fn from(ty: &Type) -> Self {
        match ty {
            Type::Scalar { kind, nullable } => Self::Scalar {
                kind: *kind,
                nullable: *nullable,
            },
            Type::FixedChar { length, nullable } => Self::FixedChar {
                length: StringLiteral::integer(*length),
                nullable: *nullable,
            },
            Type::Varchar { length, nullable } => Self::Varchar {
                length: StringLiteral::integer(*length),
                nullable: *nullable,
            },
            Type::FixedBinary { length, nullable } => Self::FixedBinary {
                length: StringLiteral::integer(*length),
                nullable: *nullable,
            },
            Type::Decimal {
                precision,
                scale,
                nullable,
            } => Self::Decimal {
                precision: StringLiteral::integer(*precision),
                scale: StringLiteral::integer(*scale),
                nullable: *nullable,
            },
            Type::List { element, nullable } => Self::List {
                element: Box::new(Self::from(element.as_ref())),
                nullable: *nullable,
            },
            Type::Struct { children, nullable } => Self::Struct {
                children: children.iter().map(Self::from).collect(),
                nullable: *nullable,
            },
            Type::Map {
                key,
                value,
                nullable,
            } => Self::Map {
                key: Box::new(Self::from(key.as_ref())),
                value: Box::new(Self::from(value.as_ref())),
                nullable: *nullable,
            },
        }
    }
}

impl From<Type> for ParameterizedType {
    fn from(ty: Type) -> Self {
        Self::from(&ty)
    }
}

impl TryFrom<ParameterizedType> for Type {
    type Error = QplanError;

    fn try_from(pattern: ParameterizedType) -> Result<Self> {
        let input = pattern.signature();
        pattern.resolve(&input)
    }
}
