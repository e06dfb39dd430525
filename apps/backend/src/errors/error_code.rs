//! Error codes for the Surtidora backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the Surtidora backend API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// DNI or password missing from the login request
    MissingCredentials,
    /// Unknown DNI or wrong password (single code, no enumeration signal)
    InvalidCredentials,
    /// Authentication required (token phase, all sub-failures collapsed)
    Unauthorized,
    /// Account exists and the secret matched, but the account is not active
    InactiveAccount,

    // Request Validation
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// Record not found (generic 404 for DB-driven not-found)
    RecordNotFound,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable (retryable)
    DbUnavailable,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "MISSING_CREDENTIALS",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InactiveAccount => "INACTIVE_ACCOUNT",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::RecordNotFound => "RECORD_NOT_FOUND",
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
