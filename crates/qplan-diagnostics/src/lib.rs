//! qplan diagnostics and error handling
//!
//! This crate provides the error infrastructure shared by the type decoder
//! and the function registry: structured error codes, the error enum, and
//! byte spans into decoded type strings.

mod error;
mod error_code;
mod span;

pub use error::*;
pub use error_code::*;
pub use span::*;

/// Result type for qplan operations
pub type Result<T> = std::result::Result<T, QplanError>;
