//! # API Error Type
//!
//! Unified error type for UI-facing commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Maru Shop                        │
//! │                                                                   │
//! │  Frontend                     Rust Backend                        │
//! │  ────────                     ────────────                        │
//! │                                                                   │
//! │  add_to_cart('p9')                                                │
//! │         │                                                         │
//! │         ▼                                                         │
//! │  ┌────────────────────────────────────────────────────────────┐   │
//! │  │  Command Function                                          │   │
//! │  │  Result<T, ApiError>                                       │   │
//! │  │         │                                                  │   │
//! │  │         ▼                                                  │   │
//! │  │  Lookup failed? ── CoreError::ProductNotFound ── ApiError  │   │
//! │  │         │                                                  │   │
//! │  │         ▼                                                  │   │
//! │  │  Form invalid? ── ValidationError ───────────── ApiError   │   │
//! │  │         │                                                  │   │
//! │  │         ▼                                                  │   │
//! │  │  Success ────────────────────────────────────────────────► │   │
//! │  └────────────────────────────────────────────────────────────┘   │
//! │                                                                   │
//! │  The domain itself has no failure modes: out-of-stock adds and    │
//! │  unknown-id updates are silent no-ops, not errors.                │
//! └───────────────────────────────────────────────────────────────────┘
//! ```

use maru_core::{CoreError, ValidationError};
use serde::Serialize;

/// API error returned from commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: p9"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (unknown product id, unknown coupon code)
    NotFound,

    /// Form validation failed
    ValidationError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::CouponNotFound(code) => ApiError::not_found("Coupon", &code),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
