//! qplan error codes following a structured numbering system
//!
//! Error code ranges:
//! - QP0001-QP0099: Decode errors (type string grammar and resolution)
//! - QP0100-QP0199: Parameter errors (parameters where none are supported)
//! - QP0200-QP0299: Declaration errors (catalog records rejected at build time)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a decode error (0001-0099)
    pub const fn is_decode_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a parameter error (0100-0199)
    pub const fn is_parameter_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a declaration error (0200-0299)
    pub const fn is_declaration_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QP{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Decode errors (0001-0099)
    map.insert(1, ErrorInfo::new("Malformed type expression")
        .with_help("Expected `name[?][<arg, ...>]`"));
    map.insert(2, ErrorInfo::new("Unrecognized type keyword"));
    map.insert(3, ErrorInfo::new("Wrong number of type parameters"));
    map.insert(4, ErrorInfo::new("Invalid numeric parameter")
        .with_help("Lengths, precisions and scales must be non-negative integers"));
    map.insert(5, ErrorInfo::new("Unresolved type parameter"));
    map.insert(6, ErrorInfo::new("Missing type parameters"));
    map.insert(7, ErrorInfo::new("Invalid type parameter"));

    // Parameter errors (0100-0199)
    map.insert(100, ErrorInfo::new("Type does not accept parameters"));

    // Declaration errors (0200-0299)
    map.insert(200, ErrorInfo::new("Invalid function declaration"));

    map
});

// Decode errors
pub const QP0001: ErrorCode = ErrorCode::new(1);
pub const QP0002: ErrorCode = ErrorCode::new(2);
pub const QP0003: ErrorCode = ErrorCode::new(3);
pub const QP0004: ErrorCode = ErrorCode::new(4);
pub const QP0005: ErrorCode = ErrorCode::new(5);
pub const QP0006: ErrorCode = ErrorCode::new(6);
pub const QP0007: ErrorCode = ErrorCode::new(7);

// Parameter errors
pub const QP0100: ErrorCode = ErrorCode::new(100);

// Declaration errors
pub const QP0200: ErrorCode = ErrorCode::new(200);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(QP0001.to_string(), "QP0001");
        assert_eq!(QP0100.to_string(), "QP0100");
    }

    #[test]
    fn test_error_categories() {
        assert!(QP0004.is_decode_error());
        assert!(!QP0004.is_parameter_error());

        assert!(QP0100.is_parameter_error());
        assert!(QP0200.is_declaration_error());
    }

    #[test]
    fn test_error_info() {
        assert_eq!(QP0002.info().description, "Unrecognized type keyword");
        assert!(QP0004.info().help.is_some());
        assert_eq!(ErrorCode::new(999).info().description, "Unknown error");
    }
}
