//! Concrete type model
//!
//! This module defines `Type`, the fully resolved representation of a value
//! type as it appears at a call site:
//! - sixteen fixed-shape scalar kinds
//! - length-parameterized character and binary kinds
//! - decimals, lists, structs and maps
//!
//! Every node carries its own nullability. A `Type` never contains an
//! unresolved parameter; declaration-side patterns live in
//! [`ParameterizedType`](crate::ParameterizedType).

use crate::kind::{ScalarKind, TypeKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fully resolved type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Type {
    /// Fixed-shape scalar
    Scalar { kind: ScalarKind, nullable: bool },
    /// Fixed-length character string
    FixedChar { length: u32, nullable: bool },
    /// Varying-length character string
    Varchar { length: u32, nullable: bool },
    /// Fixed-length binary
    FixedBinary { length: u32, nullable: bool },
    /// Fixed-point decimal
    Decimal {
        precision: u32,
        scale: u32,
        nullable: bool,
    },
    /// Homogeneous list
    List { element: Box<Type>, nullable: bool },
    /// Ordered struct of unnamed children
    Struct { children: Vec<Type>, nullable: bool },
    /// Key/value map
    Map {
        key: Box<Type>,
        value: Box<Type>,
        nullable: bool,
    },
}

impl Type {
    // === Constructors ===

    /// Create a non-nullable scalar type
    pub fn scalar(kind: ScalarKind) -> Self {
        Self::Scalar {
            kind,
            nullable: false,
        }
    }

    pub fn bool() -> Self {
        Self::scalar(ScalarKind::Bool)
    }

    pub fn i8() -> Self {
        Self::scalar(ScalarKind::I8)
    }

    pub fn i16() -> Self {
        Self::scalar(ScalarKind::I16)
    }

    pub fn i32() -> Self {
        Self::scalar(ScalarKind::I32)
    }

    pub fn i64() -> Self {
        Self::scalar(ScalarKind::I64)
    }

    pub fn fp32() -> Self {
        Self::scalar(ScalarKind::Fp32)
    }

    pub fn fp64() -> Self {
        Self::scalar(ScalarKind::Fp64)
    }

    pub fn string() -> Self {
        Self::scalar(ScalarKind::String)
    }

    pub fn binary() -> Self {
        Self::scalar(ScalarKind::Binary)
    }

    pub fn timestamp() -> Self {
        Self::scalar(ScalarKind::Timestamp)
    }

    pub fn timestamp_tz() -> Self {
        Self::scalar(ScalarKind::TimestampTz)
    }

    pub fn date() -> Self {
        Self::scalar(ScalarKind::Date)
    }

    pub fn time() -> Self {
        Self::scalar(ScalarKind::Time)
    }

    pub fn interval_year() -> Self {
        Self::scalar(ScalarKind::IntervalYear)
    }

    pub fn interval_day() -> Self {
        Self::scalar(ScalarKind::IntervalDay)
    }

    pub fn uuid() -> Self {
        Self::scalar(ScalarKind::Uuid)
    }

    /// Create a fixed-length character type
    pub fn fixed_char(length: u32) -> Self {
        Self::FixedChar {
            length,
            nullable: false,
        }
    }

    /// Create a varying-length character type
    pub fn varchar(length: u32) -> Self {
        Self::Varchar {
            length,
            nullable: false,
        }
    }

    /// Create a fixed-length binary type
    pub fn fixed_binary(length: u32) -> Self {
        Self::FixedBinary {
            length,
            nullable: false,
        }
    }

    /// Create a decimal type
    pub fn decimal(precision: u32, scale: u32) -> Self {
        Self::Decimal {
            precision,
            scale,
            nullable: false,
        }
    }

    /// Create a list type
    pub fn list(element: Type) -> Self {
        Self::List {
            element: Box::new(element),
            nullable: false,
        }
    }

    /// Create a struct type
    pub fn structure(children: Vec<Type>) -> Self {
        Self::Struct {
            children,
            nullable: false,
        }
    }

    /// Create a map type
    pub fn map(key: Type, value: Type) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
            nullable: false,
        }
    }

    /// Return this type with the given nullability on the outermost node
    pub fn with_nullable(mut self, value: bool) -> Self {
        match &mut self {
            Self::Scalar { nullable, .. }
            | Self::FixedChar { nullable, .. }
            | Self::Varchar { nullable, .. }
            | Self::FixedBinary { nullable, .. }
            | Self::Decimal { nullable, .. }
            | Self::List { nullable, .. }
            | Self::Struct { nullable, .. }
            | Self::Map { nullable, .. } => *nullable = value,
        }
        self
    }

    // === Properties ===

    /// The kind of the outermost node
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Scalar { kind, .. } => kind.kind(),
            Self::FixedChar { .. } => TypeKind::FixedChar,
            Self::Varchar { .. } => TypeKind::Varchar,
            Self::FixedBinary { .. } => TypeKind::FixedBinary,
            Self::Decimal { .. } => TypeKind::Decimal,
            Self::List { .. } => TypeKind::List,
            Self::Struct { .. } => TypeKind::Struct,
            Self::Map { .. } => TypeKind::Map,
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
            | Self::Map { nullable, .. } => *nullable,
        }
    }

    /// Get the element type for List types
    pub fn element_type(&self) -> Option<&Type> {
        match self {
            Self::List { element, .. } => Some(element),
            _ => None,
        }
    }

    /// Get the children for Struct types
    pub fn children(&self) -> Option<&[Type]> {
        match self {
            Self::Struct { children, .. } => Some(children),
            _ => None,
        }
    }

    // === Rendering ===

    /// Render the canonical short signature, e.g. `dec<38,2>` or `list?<i32>`
    pub fn signature(&self) -> String {
        self.render(TypeKind::signature, Type::signature)
    }

    /// Render using the long keywords, e.g. `decimal<38,2>`
    pub fn type_string(&self) -> String {
        self.render(TypeKind::type_string, Type::type_string)
    }

    fn render(&self, keyword: fn(&TypeKind) -> &'static str, child: fn(&Type) -> String) -> String {
        let mut out = String::from(keyword(&self.kind()));
        if self.is_nullable() {
            out.push('?');
        }
        let params = match self {
            Self::Scalar { .. } => return out,
            Self::FixedChar { length, .. }
            | Self::Varchar { length, .. }
            | Self::FixedBinary { length, .. } => length.to_string(),
            Self::Decimal {
                precision, scale, ..
            } => format!("{},{}", precision, scale),
            Self::List { element, .. } => child(element),
            Self::Struct { children, .. } => {
                children.iter().map(child).collect::<Vec<_>>().join(",")
            }
            Self::Map { key, value, .. } => format!("{},{}", child(key), child(value)),
        };
        out.push('<');
        out.push_str(&params);
        out.push('>');
        out
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature())
    }
}
