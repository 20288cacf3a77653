//! qplan type system
//!
//! This crate defines the engine-agnostic type model used to interpret
//! query plans and function catalogs:
//! - Concrete types (`Type`) and declaration-side patterns (`ParameterizedType`)
//! - The textual type grammar decoder
//! - Structural matching of patterns against concrete types

mod decode;
mod kind;
mod matcher;
mod parameterized;
mod type_system;

pub use decode::{DecodedType, decode, decode_parameterized, decode_type};
pub use kind::{ScalarKind, TypeKind};
pub use parameterized::{ParameterizedType, StringLiteral};
pub use type_system::Type;
