//! Type-safe error codes attached to error logs.
//!
//! Each code has a SCREAMING_SNAKE_CASE identifier, an integer for log
//! queries and dashboards, and the default message sent to clients.
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::NotFound;
//! assert_eq!(code.as_str(), "NOT_FOUND");
//! assert_eq!(code.code(), 1004);
//! assert_eq!(code.default_message(), "Not found");
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Malformed identifier, missing fields or otherwise unusable input
    BadRequest,

    /// Requested resource was not found
    NotFound,

    /// No authenticated caller
    Unauthorized,

    // Server errors
    /// Unexpected failure, details only in server logs
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Integer code for structured logs
    pub fn code(&self) -> i32 {
        match self {
            Self::BadRequest => 1000,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::Unauthorized => 1006,
        }
    }

    /// Message used when a handler has nothing more specific to say
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::BadRequest => "Bad request",
            Self::NotFound => "Not found",
            Self::Unauthorized => "Unauthorized",
            Self::InternalError => "Internal error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
