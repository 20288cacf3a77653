//! qplan function catalog
//!
//! This crate resolves function calls against a catalog of declared
//! overloads:
//! - `FunctionVariant` and friends model one declared overload
//! - `Registry` indexes variants by name, built once per loaded catalog
//! - `FunctionMapping` translates engine-specific names into catalog names
//! - `FunctionLookup` runs first-match overload resolution
//!
//! ## Example
//!
//! ```
//! use qplan_functions::{FunctionArgument, FunctionKind, FunctionLookup, FunctionVariant, Registry};
//! use qplan_types::{ParameterizedType, Type};
//! use std::sync::Arc;
//!
//! let lt = FunctionVariant::new(
//!     "lt",
//!     "functions_comparison",
//!     FunctionKind::Scalar,
//!     vec![
//!         FunctionArgument::value(ParameterizedType::literal("any1")),
//!         FunctionArgument::value(ParameterizedType::literal("any1")),
//!     ],
//!     ParameterizedType::from(&Type::bool()),
//! );
//! let mut builder = Registry::builder();
//! builder.add_variant(lt);
//! let lookup = FunctionLookup::without_mapping(Arc::new(builder.build()));
//!
//! let found = lookup.lookup_scalar("lt", &[Type::i8(), Type::i8()]);
//! assert_eq!(found.map(|v| v.signature()), Some("lt:any1_any1".to_string()));
//! ```

mod declaration;
mod lookup;
mod mapping;
mod registry;
mod variant;

pub use declaration::{
    ArgumentDeclaration, Declaration, ExtensionDocument, FunctionDeclaration, FunctionGroup,
    ImplementationDeclaration, NamedEntry, TypeDeclaration, VariadicDeclaration,
};
pub use lookup::FunctionLookup;
pub use mapping::{FunctionMapping, NoMapping, StaticFunctionMapping};
pub use registry::{Registry, RegistryBuilder};
pub use variant::{
    FunctionArgument, FunctionKind, FunctionVariadic, FunctionVariant, TypeVariant, signature,
};
