//! Type string decoder using winnow
//!
//! Grammar: `ident ['?'] ['<' item (',' item)* '>']`, keywords matched
//! case-insensitively. Decoding runs in two passes: a syntax pass builds a
//! borrowed [`RawType`] tree, then lowering dispatches on keywords and checks
//! parameter counts.

use crate::kind::TypeKind;
use crate::parameterized::{ParameterizedType, StringLiteral};
use crate::type_system::Type;
use qplan_diagnostics::{QP0001, QP0002, QP0003, QP0007, QplanError, Result, Span};
use std::str::FromStr;
use winnow::ascii::multispace0;
use winnow::combinator::{delimited, opt, separated};
use winnow::prelude::*;
use winnow::stream::LocatingSlice;
use winnow::token::take_while;

type Input<'a> = LocatingSlice<&'a str>;
type PResult<T> = winnow::ModalResult<T>;

/// Deepest accepted `<...>` nesting
pub const MAX_NESTING: usize = 128;

/// Result of [`decode`], depending on the requested mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedType {
    Concrete(Type),
    Parameterized(ParameterizedType),
}

impl DecodedType {
    pub fn into_concrete(self) -> Option<Type> {
        match self {
            Self::Concrete(ty) => Some(ty),
            Self::Parameterized(_) => None,
        }
    }

    pub fn into_parameterized(self) -> ParameterizedType {
        match self {
            Self::Concrete(ty) => ParameterizedType::from(ty),
            Self::Parameterized(pattern) => pattern,
        }
    }
}

/// Decode a type string
///
/// With `parameterized` set, leaves and type positions may hold wildcard,
/// placeholder or integer tokens. Otherwise every leaf must be a
/// non-negative integer and the result is a concrete [`Type`].
pub fn decode(text: &str, parameterized: bool) -> Result<DecodedType> {
    if parameterized {
        decode_parameterized(text).map(DecodedType::Parameterized)
    } else {
        decode_type(text).map(DecodedType::Concrete)
    }
}

/// Decode a concrete type string such as `map<i32,list<fp64>>`
pub fn decode_type(text: &str) -> Result<Type> {
    decode_parameterized(text)?.resolve(text)
}

/// Decode a declaration-side type pattern such as `decimal<P1,S1>`
pub fn decode_parameterized(text: &str) -> Result<ParameterizedType> {
    check_nesting(text)?;
    let raw = type_expr.parse(LocatingSlice::new(text)).map_err(|e| {
        QplanError::decode_at(
            QP0001,
            format!("malformed type expression at offset {}", e.offset()),
            text,
            Span::point(e.offset()),
        )
    })?;
    lower(raw, text)
}

/// Both passes recurse once per bracket level, so depth is bounded up front
fn check_nesting(text: &str) -> Result<()> {
    let mut depth = 0usize;
    for (offset, c) in text.char_indices() {
        match c {
            '<' => {
                depth += 1;
                if depth > MAX_NESTING {
                    return Err(QplanError::decode_at(
                        QP0001,
                        format!("type nesting deeper than {} levels", MAX_NESTING),
                        text,
                        Span::point(offset),
                    ));
                }
            }
            '>' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

impl FromStr for Type {
    type Err = QplanError;

    fn from_str(s: &str) -> Result<Self> {
        decode_type(s)
    }
}

impl FromStr for ParameterizedType {
    type Err = QplanError;

    fn from_str(s: &str) -> Result<Self> {
        decode_parameterized(s)
    }
}

/// Syntax tree before keyword resolution
#[derive(Debug)]
struct RawType<'a> {
    name: &'a str,
    /// Location of `name` in the input
    span: Span,
    nullable: bool,
    params: Option<Vec<RawType<'a>>>,
}

fn type_expr<'a>(input: &mut Input<'a>) -> PResult<RawType<'a>> {
    multispace0.parse_next(input)?;
    let (name, range) = take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_')
        .with_span()
        .parse_next(input)?;
    let nullable = opt('?').parse_next(input)?.is_some();
    multispace0.parse_next(input)?;
    let params: Option<Vec<RawType<'a>>> =
        opt(delimited('<', separated(0.., type_expr, ','), (multispace0, '>'))).parse_next(input)?;
    multispace0.parse_next(input)?;
    Ok(RawType {
        name,
        span: Span::from(range),
        nullable,
        params,
    })
}

fn lower(raw: RawType<'_>, input: &str) -> Result<ParameterizedType> {
    let keyword = raw.name.to_ascii_lowercase();
    let nullable = raw.nullable;
    let kind = TypeKind::from_keyword(&keyword);

    // without brackets only the scalar table applies; anything else is a token
    let Some(params) = raw.params else {
        return Ok(match kind.and_then(|kind| kind.scalar()) {
            Some(scalar) => ParameterizedType::Scalar {
                kind: scalar,
                nullable,
            },
            None => ParameterizedType::Literal {
                literal: StringLiteral::new(raw.name),
                nullable,
            },
        });
    };

    let kind = kind.ok_or_else(|| {
        QplanError::decode_at(
            QP0002,
            format!("unrecognized type `{}`", raw.name),
            input,
            raw.span,
        )
    })?;
    if kind.scalar().is_some() {
        return Err(QplanError::unsupported_parameter(
            format!("`{}` does not accept type parameters", keyword),
            input,
        ));
    }

    let args = params
        .into_iter()
        .map(|param| {
            let span = param.span;
            lower(param, input).map(|arg| (arg, span))
        })
        .collect::<Result<Vec<_>>>()?;

    let pattern = match kind {
        TypeKind::FixedChar => {
            let [length] = arity(kind, raw.span, args, input)?;
            ParameterizedType::FixedChar {
                length: leaf(length, input)?,
                nullable,
            }
        }
        TypeKind::Varchar => {
            let [length] = arity(kind, raw.span, args, input)?;
            ParameterizedType::Varchar {
                length: leaf(length, input)?,
                nullable,
            }
        }
        TypeKind::FixedBinary => {
            let [length] = arity(kind, raw.span, args, input)?;
            ParameterizedType::FixedBinary {
                length: leaf(length, input)?,
                nullable,
            }
        }
        TypeKind::Decimal => {
            let [precision, scale] = arity(kind, raw.span, args, input)?;
            ParameterizedType::Decimal {
                precision: leaf(precision, input)?,
                scale: leaf(scale, input)?,
                nullable,
            }
        }
        TypeKind::List => {
            let [(element, _)] = arity(kind, raw.span, args, input)?;
            ParameterizedType::List {
                element: Box::new(element),
                nullable,
            }
        }
        TypeKind::Map => {
            let [(key, _), (value, _)] = arity(kind, raw.span, args, input)?;
            ParameterizedType::Map {
                key: Box::new(key),
                value: Box::new(value),
                nullable,
            }
        }
        TypeKind::Struct => ParameterizedType::Struct {
            children: args.into_iter().map(|(child, _)| child).collect(),
            nullable,
        },
        // fixed-shape kinds were rejected above
        _ => {
            return Err(QplanError::unsupported_parameter(
                format!("`{}` does not accept type parameters", keyword),
                input,
            ));
        }
    };
    Ok(pattern)
}

fn arity<const N: usize, T>(kind: TypeKind, span: Span, args: Vec<T>, input: &str) -> Result<[T; N]> {
    let found = args.len();
    <[T; N]>::try_from(args).map_err(|_| {
        QplanError::decode_at(
            QP0003,
            format!(
                "`{}` takes {} parameter(s), found {}",
                kind.type_string(),
                N,
                found
            ),
            input,
            span,
        )
    })
}

/// A length, precision or scale slot only holds a bare non-nullable token
fn leaf((arg, span): (ParameterizedType, Span), input: &str) -> Result<StringLiteral> {
    match arg {
        ParameterizedType::Literal {
            literal,
            nullable: false,
        } => Ok(literal),
        other => Err(QplanError::decode_at(
            QP0007,
            format!("expected a numeric parameter, found `{}`", other),
            input,
            span,
        )),
    }
}
