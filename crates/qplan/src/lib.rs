//! qplan: portable query plan types and function resolution
//!
//! This crate re-exports the workspace crates under one name:
//! - [`types`]: the type model, type string decoder and matcher
//! - [`functions`]: declarations, registry and overload resolution
//! - [`diagnostics`]: error codes and the shared error type
//!
//! A typical flow loads catalog records, builds a [`Registry`] once and
//! shares it through a [`FunctionLookup`]:
//!
//! ```
//! use qplan::{ExtensionDocument, FunctionLookup, Registry, StaticFunctionMapping, Type};
//! use std::sync::Arc;
//!
//! let document = ExtensionDocument {
//!     uri: "functions_boolean".to_string(),
//!     ..Default::default()
//! };
//! let registry = Registry::build(document.into_declarations())?;
//! let mapping = StaticFunctionMapping::new().scalar("plus", "add");
//! let lookup = FunctionLookup::new(Arc::new(registry), Arc::new(mapping));
//!
//! assert!(lookup.lookup_scalar("plus", &[Type::i8(), Type::i8()]).is_none());
//! # Ok::<(), qplan::QplanError>(())
//! ```

pub use qplan_diagnostics as diagnostics;
pub use qplan_functions as functions;
pub use qplan_types as types;

pub use qplan_diagnostics::{ErrorCode, QplanError, Result, Span};
pub use qplan_functions::{
    Declaration, ExtensionDocument, FunctionArgument, FunctionKind, FunctionLookup,
    FunctionMapping, FunctionVariadic, FunctionVariant, NoMapping, Registry, RegistryBuilder,
    StaticFunctionMapping, TypeVariant,
};
pub use qplan_types::{
    DecodedType, ParameterizedType, ScalarKind, StringLiteral, Type, TypeKind, decode,
    decode_parameterized, decode_type,
};
