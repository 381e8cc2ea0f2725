//! Type-safe error codes for API responses.
//!
//! Each code carries a SCREAMING_SNAKE_CASE identifier for clients, an
//! integer for logs and monitoring, and a default human-readable message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::InvalidQuery;
//! assert_eq!(code.as_str(), "INVALID_QUERY");
//! assert_eq!(code.code(), 1006);
//! ```

use serde::Serialize;
use strum::IntoStaticStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, IntoStaticStr, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000s)
    /// Request body failed `validator` rules
    ValidationError,
    /// Path segment could not be parsed
    InvalidPathParam,
    /// Request body was missing or not valid JSON for the target type
    JsonExtraction,
    /// Requested resource was not found
    NotFound,
    /// Query string could not be parsed
    InvalidQuery,
    /// Request was well-formed but its values are not acceptable
    BadRequest,
    /// No route matches the request path
    RouteNotFound,
    /// Route exists but not for this method
    MethodNotAllowed,

    // Server errors (1000s)
    /// An unexpected internal server error occurred
    InternalError,
    /// A handler panicked while processing the request
    Panic,

    // Database errors (2000s)
    /// Database connection or query error
    DatabaseError,
}

impl ErrorCode {
    /// Identifier sent to clients in the `error` field.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Integer code for logging and monitoring.
    ///
    /// - 1000-1999: client and generic server errors
    /// - 2000-2999: database errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidPathParam => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::InvalidQuery => 1006,
            Self::BadRequest => 1007,
            Self::RouteNotFound => 1008,
            Self::MethodNotAllowed => 1009,
            Self::Panic => 1011,
            Self::DatabaseError => 2003,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidPathParam => "Invalid path parameter",
            Self::JsonExtraction => "Invalid JSON request body",
            Self::NotFound => "Resource not found",
            Self::InvalidQuery => "Invalid query parameters",
            Self::BadRequest => "Bad request",
            Self::RouteNotFound => "The requested resource was not found",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            Self::InternalError => "An internal server error occurred",
            Self::Panic => "You doing operation with Null value",
            Self::DatabaseError => "A database error occurred.",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_matches_serde_representation() {
        for code in [
            ErrorCode::ValidationError,
            ErrorCode::InvalidPathParam,
            ErrorCode::InvalidQuery,
            ErrorCode::DatabaseError,
            ErrorCode::Panic,
        ] {
            let json = serde_json::to_value(code).unwrap();
            assert_eq!(json, serde_json::json!(code.as_str()));
        }
    }

    #[test]
    fn test_code_ranges() {
        assert_eq!(ErrorCode::ValidationError.code(), 1001);
        assert_eq!(ErrorCode::NotFound.code(), 1004);
        assert_eq!(ErrorCode::DatabaseError.code(), 2003);
    }

    #[test]
    fn test_panic_message() {
        assert_eq!(
            ErrorCode::Panic.default_message(),
            "You doing operation with Null value"
        );
        assert_eq!(ErrorCode::Panic.to_string(), "PANIC");
    }
}
