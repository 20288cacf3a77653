//! Structural matching of declaration patterns against call-site types
//!
//! Matching is positional and non-unifying: a placeholder such as `T` or
//! `any1` used twice in one signature is checked independently at each use.

use crate::parameterized::{ParameterizedType, StringLiteral};
use crate::type_system::Type;

impl ParameterizedType {
    /// Check whether this pattern accepts `actual`
    pub fn is_match(&self, actual: &Type) -> bool {
        if let Self::Literal { literal, .. } = self {
            if literal.is_wildcard() {
                return true;
            }
            return self.signature() == actual.signature();
        }

        if self.kind() != Some(actual.kind()) {
            return false;
        }
        if !self.is_nullable() && actual.is_nullable() {
            return false;
        }

        match (self, actual) {
            (Self::Scalar { .. }, Type::Scalar { .. }) => true,
            (Self::FixedChar { length: p, .. }, Type::FixedChar { length: a, .. })
            | (Self::Varchar { length: p, .. }, Type::Varchar { length: a, .. })
            | (Self::FixedBinary { length: p, .. }, Type::FixedBinary { length: a, .. }) => {
                leaf_matches(p, *a)
            }
            (
                Self::Decimal {
                    precision: pp,
                    scale: ps,
                    ..
                },
                Type::Decimal {
                    precision: ap,
                    scale: as_,
                    ..
                },
            ) => leaf_matches(pp, *ap) && leaf_matches(ps, *as_),
            (Self::List { element: p, .. }, Type::List { element: a, .. }) => p.is_match(a),
            (Self::Map { key: pk, value: pv, .. }, Type::Map { key: ak, value: av, .. }) => {
                pk.is_match(ak) && pv.is_match(av)
            }
            (Self::Struct { children: p, .. }, Type::Struct { children: a, .. }) => {
                p.len() == a.len() && p.iter().zip(a).all(|(p, a)| p.is_match(a))
            }
            _ => false,
        }
    }
}

/// Leaves compare as text, so `08` never matches `8`
fn leaf_matches(pattern: &StringLiteral, actual: u32) -> bool {
    pattern.is_wildcard() || pattern.value() == actual.to_string()
}
