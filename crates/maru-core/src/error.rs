//! # Error Types
//!
//! Domain-specific error types for maru-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                         Error Types                               │
//! │                                                                   │
//! │  maru-core errors (this file)                                     │
//! │  ├── CoreError        - Lookup failures at the command boundary   │
//! │  └── ValidationError  - Admin form validation failures            │
//! │                                                                   │
//! │  Storefront errors (app crate)                                    │
//! │  └── ApiError         - What the frontend sees (serialized)       │
//! │                                                                   │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend          │
//! │                                                                   │
//! │  Note: the pure transitions never error. Invalid operations       │
//! │  (out-of-stock add, unknown-id update, out-of-range discount      │
//! │  removal) are absorbed as no-ops by design of the domain.         │
//! └───────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Lookup and validation failures surfaced to the UI.
///
/// These are UI affordances ("that product doesn't exist"), not core
/// failure modes; the pricing and cart math cannot fail at runtime.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id not present in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Coupon code not present in the coupon list.
    #[error("Coupon not found: {0}")]
    CouponNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Admin form validation errors.
///
/// Used for early validation at the command boundary before a record is
/// committed to a collection.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., coupon code with spaces).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("p9".to_string());
        assert_eq!(err.to_string(), "Product not found: p9");

        let err = CoreError::CouponNotFound("NOPE".to_string());
        assert_eq!(err.to_string(), "Coupon not found: NOPE");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "discount value".to_string(),
            min: 0,
            max: 100,
        };
        assert_eq!(err.to_string(), "discount value must be between 0 and 100");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "code".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
