//! Type kinds and their keyword tables

use serde::{Deserialize, Serialize};
use std::fmt;

/// The sixteen fixed-shape scalar kinds
///
/// These carry no payload beyond nullability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarKind {
    /// Boolean
    Bool,
    /// 8-bit signed integer
    I8,
    /// 16-bit signed integer
    I16,
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
    /// 32-bit IEEE float
    Fp32,
    /// 64-bit IEEE float
    Fp64,
    /// Variable-length UTF-8 string
    String,
    /// Variable-length binary
    Binary,
    /// Timestamp without time zone
    Timestamp,
    /// Timestamp with time zone
    TimestampTz,
    /// Calendar date
    Date,
    /// Time of day
    Time,
    /// Year-month interval
    IntervalYear,
    /// Day-time interval
    IntervalDay,
    /// 128-bit UUID
    Uuid,
}

impl ScalarKind {
    /// Every scalar kind, in declaration order
    pub const ALL: [ScalarKind; 16] = [
        Self::Bool,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::Fp32,
        Self::Fp64,
        Self::String,
        Self::Binary,
        Self::Timestamp,
        Self::TimestampTz,
        Self::Date,
        Self::Time,
        Self::IntervalYear,
        Self::IntervalDay,
        Self::Uuid,
    ];

    /// The general kind this scalar kind belongs to
    pub const fn kind(&self) -> TypeKind {
        match self {
            Self::Bool => TypeKind::Bool,
            Self::I8 => TypeKind::I8,
            Self::I16 => TypeKind::I16,
            Self::I32 => TypeKind::I32,
            Self::I64 => TypeKind::I64,
            Self::Fp32 => TypeKind::Fp32,
            Self::Fp64 => TypeKind::Fp64,
            Self::String => TypeKind::String,
            Self::Binary => TypeKind::Binary,
            Self::Timestamp => TypeKind::Timestamp,
            Self::TimestampTz => TypeKind::TimestampTz,
            Self::Date => TypeKind::Date,
            Self::Time => TypeKind::Time,
            Self::IntervalYear => TypeKind::IntervalYear,
            Self::IntervalDay => TypeKind::IntervalDay,
            Self::Uuid => TypeKind::Uuid,
        }
    }

    /// Short signature keyword
    pub const fn signature(&self) -> &'static str {
        self.kind().signature()
    }

    /// Look up a scalar kind by keyword (short or long form, lower-case)
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        TypeKind::from_keyword(keyword).and_then(|kind| kind.scalar())
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.signature())
    }
}

/// Every kind of type, scalar and parametric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Fp32,
    Fp64,
    String,
    Binary,
    Timestamp,
    TimestampTz,
    Date,
    Time,
    IntervalYear,
    IntervalDay,
    Uuid,
    /// Fixed-length character string
    FixedChar,
    /// Varying-length character string with a maximum length
    Varchar,
    /// Fixed-length binary
    FixedBinary,
    /// Fixed-point decimal
    Decimal,
    /// Ordered sequence of child types
    Struct,
    /// Homogeneous list
    List,
    /// Key/value map
    Map,
}

impl TypeKind {
    /// Short signature keyword, used when rendering signatures
    pub const fn signature(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Fp32 => "fp32",
            Self::Fp64 => "fp64",
            Self::String => "str",
            Self::Binary => "vbin",
            Self::Timestamp => "ts",
            Self::TimestampTz => "tstz",
            Self::Date => "date",
            Self::Time => "time",
            Self::IntervalYear => "iyear",
            Self::IntervalDay => "iday",
            Self::Uuid => "uuid",
            Self::FixedChar => "fchar",
            Self::Varchar => "vchar",
            Self::FixedBinary => "fbin",
            Self::Decimal => "dec",
            Self::Struct => "struct",
            Self::List => "list",
            Self::Map => "map",
        }
    }

    /// Long keyword, as written in catalog declarations
    pub const fn type_string(&self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Fp32 => "fp32",
            Self::Fp64 => "fp64",
            Self::String => "string",
            Self::Binary => "binary",
            Self::Timestamp => "timestamp",
            Self::TimestampTz => "timestamp_tz",
            Self::Date => "date",
            Self::Time => "time",
            Self::IntervalYear => "interval_year",
            Self::IntervalDay => "interval_day",
            Self::Uuid => "uuid",
            Self::FixedChar => "fixedchar",
            Self::Varchar => "varchar",
            Self::FixedBinary => "fixedbinary",
            Self::Decimal => "decimal",
            Self::Struct => "struct",
            Self::List => "list",
            Self::Map => "map",
        }
    }

    /// Look up a kind by keyword
    ///
    /// Accepts both the long and the short form. The keyword must already be
    /// lower-case.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let kind = match keyword {
            "bool" | "boolean" => Self::Bool,
            "i8" => Self::I8,
            "i16" => Self::I16,
            "i32" => Self::I32,
            "i64" => Self::I64,
            "fp32" => Self::Fp32,
            "fp64" => Self::Fp64,
            "str" | "string" => Self::String,
            "vbin" | "binary" => Self::Binary,
            "ts" | "timestamp" => Self::Timestamp,
            "tstz" | "timestamp_tz" => Self::TimestampTz,
            "date" => Self::Date,
            "time" => Self::Time,
            "iyear" | "interval_year" => Self::IntervalYear,
            "iday" | "interval_day" => Self::IntervalDay,
            "uuid" => Self::Uuid,
            "fchar" | "fixedchar" => Self::FixedChar,
            "vchar" | "varchar" => Self::Varchar,
            "fbin" | "fixedbinary" => Self::FixedBinary,
            "dec" | "decimal" => Self::Decimal,
            "struct" => Self::Struct,
            "list" => Self::List,
            "map" => Self::Map,
            _ => return None,
        };
        Some(kind)
    }

    /// The scalar kind, if this kind has a fixed shape
    pub const fn scalar(&self) -> Option<ScalarKind> {
        match self {
            Self::Bool => Some(ScalarKind::Bool),
            Self::I8 => Some(ScalarKind::I8),
            Self::I16 => Some(ScalarKind::I16),
            Self::I32 => Some(ScalarKind::I32),
            Self::I64 => Some(ScalarKind::I64),
            Self::Fp32 => Some(ScalarKind::Fp32),
            Self::Fp64 => Some(ScalarKind::Fp64),
            Self::String => Some(ScalarKind::String),
            Self::Binary => Some(ScalarKind::Binary),
            Self::Timestamp => Some(ScalarKind::Timestamp),
            Self::TimestampTz => Some(ScalarKind::TimestampTz),
            Self::Date => Some(ScalarKind::Date),
            Self::Time => Some(ScalarKind::Time),
            Self::IntervalYear => Some(ScalarKind::IntervalYear),
            Self::IntervalDay => Some(ScalarKind::IntervalDay),
            Self::Uuid => Some(ScalarKind::Uuid),
            Self::FixedChar
            | Self::Varchar
            | Self::FixedBinary
            | Self::Decimal
            | Self::Struct
            | Self::List
            | Self::Map => None,
        }
    }

    /// Check if this kind takes angle-bracket parameters
    pub const fn is_parametric(&self) -> bool {
        self.scalar().is_none()
    }
}

impl From<ScalarKind> for TypeKind {
    fn from(kind: ScalarKind) -> Self {
        kind.kind()
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.signature())
    }
}
