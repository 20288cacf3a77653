//! qplan error types

use crate::{ErrorCode, QP0100, QP0200, Span};
use thiserror::Error;

/// Main qplan error type
#[derive(Debug, Clone, Error)]
pub enum QplanError {
    /// A type string could not be decoded
    #[error("{code}: {message} in `{input}`")]
    Decode {
        code: ErrorCode,
        message: String,
        input: String,
        span: Option<Span>,
    },

    /// A type that takes no parameters was written with parameters
    #[error("{code}: {message} in `{input}`")]
    UnsupportedParameter {
        code: ErrorCode,
        message: String,
        input: String,
    },

    /// A catalog declaration was rejected while building a registry
    #[error("{code}: {message} (function `{function}` from `{uri}`)")]
    Declaration {
        code: ErrorCode,
        message: String,
        function: String,
        uri: String,
        #[source]
        source: Option<Box<QplanError>>,
    },
}

impl QplanError {
    /// Create a decode error
    pub fn decode(code: ErrorCode, message: impl Into<String>, input: impl Into<String>) -> Self {
        Self::Decode {
            code,
            message: message.into(),
            input: input.into(),
            span: None,
        }
    }

    /// Create a decode error pointing at a location in the input
    pub fn decode_at(
        code: ErrorCode,
        message: impl Into<String>,
        input: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::Decode {
            code,
            message: message.into(),
            input: input.into(),
            span: Some(span),
        }
    }

    /// Create an unsupported parameter error
    pub fn unsupported_parameter(message: impl Into<String>, input: impl Into<String>) -> Self {
        Self::UnsupportedParameter {
            code: QP0100,
            message: message.into(),
            input: input.into(),
        }
    }

    /// Wrap an error raised while decoding a declaration's type strings
    pub fn declaration(
        function: impl Into<String>,
        uri: impl Into<String>,
        source: QplanError,
    ) -> Self {
        Self::Declaration {
            code: QP0200,
            message: format!("invalid type in declaration: {}", source),
            function: function.into(),
            uri: uri.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Decode { code, .. } => *code,
            Self::UnsupportedParameter { code, .. } => *code,
            Self::Declaration { code, .. } => *code,
        }
    }

    /// Get the span if available
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Decode { span, .. } => *span,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QP0004;
    use std::error::Error as _;

    #[test]
    fn test_decode_error_display() {
        let err = QplanError::decode(QP0004, "precision must be a non-negative integer", "decimal<T,5>");

        assert_eq!(err.code(), QP0004);
        assert_eq!(
            err.to_string(),
            "QP0004: precision must be a non-negative integer in `decimal<T,5>`"
        );
    }

    #[test]
    fn test_declaration_error_keeps_source() {
        let inner = QplanError::unsupported_parameter("i32 does not accept parameters", "i32<4>");
        let err = QplanError::declaration("add", "functions_arithmetic", inner);

        assert_eq!(err.code(), QP0200);
        assert!(err.to_string().contains("`add`"));
        let source = err.source().map(|s| s.to_string()).unwrap_or_default();
        assert!(source.starts_with("QP0100"));
    }

    #[test]
    fn test_span_only_on_decode_errors() {
        let err = QplanError::decode_at(QP0004, "bad", "list<", Span::point(5));
        assert_eq!(err.span(), Some(Span::point(5)));
        assert_eq!(QplanError::unsupported_parameter("x", "y").span(), None);
    }
}
