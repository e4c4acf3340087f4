//! # Validation Module
//!
//! Input validation for the admin forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                            │
//! │                                                                   │
//! │  Layer 1: Frontend (TypeScript)                                   │
//! │  ├── Basic format checks (empty, length)                          │
//! │  └── Immediate user feedback                                      │
//! │           │                                                       │
//! │           ▼                                                       │
//! │  Layer 2: Command boundary (Rust)                                 │
//! │  └── THIS MODULE: business rule validation                        │
//! │                                                                   │
//! │  The core transitions themselves never validate: an invalid       │
//! │  operation that reaches them is absorbed as a no-op.              │
//! └───────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{Coupon, Discount, DiscountType};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a coupon code.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
/// - Only letters, numbers, hyphens, and underscores
pub fn validate_coupon_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: 50,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in currency units. Zero is allowed (free items).
pub fn validate_price_units(units: i64) -> ValidationResult<()> {
    if units < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock capacity. Zero is allowed (sold out).
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a discount tier: positive threshold, rate strictly below 100%.
pub fn validate_discount(discount: &Discount) -> ValidationResult<()> {
    if discount.quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "discount quantity".to_string(),
        });
    }

    if discount.rate.bps() >= 10_000 {
        return Err(ValidationError::OutOfRange {
            field: "discount rate".to_string(),
            min: 0,
            max: 9999,
        });
    }

    Ok(())
}

/// Validates a coupon's value against its type.
///
/// ## Rules
/// - `Amount`: non-negative
/// - `Percentage`: 0–100. Values over 100 would invert the payable total's
///   sign; they are rejected here, and the pricing engine additionally
///   floors the total at zero should one ever slip through.
pub fn validate_coupon(coupon: &Coupon) -> ValidationResult<()> {
    validate_coupon_code(&coupon.code)?;

    match coupon.discount_type {
        DiscountType::Amount => {
            if coupon.discount_value < 0 {
                return Err(ValidationError::OutOfRange {
                    field: "discount value".to_string(),
                    min: 0,
                    max: i64::MAX,
                });
            }
        }
        DiscountType::Percentage => {
            if !(0..=100).contains(&coupon.discount_value) {
                return Err(ValidationError::OutOfRange {
                    field: "discount value".to_string(),
                    min: 0,
                    max: 100,
                });
            }
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DiscountRate;

    fn coupon(discount_type: DiscountType, value: i64) -> Coupon {
        Coupon {
            name: "Coupon".into(),
            code: "CODE10".into(),
            discount_type,
            discount_value: value,
        }
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Product 1").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_coupon_code() {
        assert!(validate_coupon_code("AMOUNT5000").is_ok());
        assert!(validate_coupon_code("percent_10").is_ok());
        assert!(validate_coupon_code("NEW-10").is_ok());

        assert!(validate_coupon_code("").is_err());
        assert!(validate_coupon_code("has space").is_err());
        assert!(validate_coupon_code(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_price_and_stock() {
        assert!(validate_price_units(0).is_ok());
        assert!(validate_price_units(10_000).is_ok());
        assert!(validate_price_units(-1).is_err());

        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(20).is_ok());
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_validate_discount() {
        let ok = Discount {
            quantity: 10,
            rate: DiscountRate::from_bps(1000),
        };
        assert!(validate_discount(&ok).is_ok());

        let zero_threshold = Discount {
            quantity: 0,
            rate: DiscountRate::from_bps(1000),
        };
        assert!(validate_discount(&zero_threshold).is_err());

        let full_rate = Discount {
            quantity: 10,
            rate: DiscountRate::from_bps(10_000),
        };
        assert!(validate_discount(&full_rate).is_err());
    }

    #[test]
    fn test_validate_coupon_amount() {
        assert!(validate_coupon(&coupon(DiscountType::Amount, 5000)).is_ok());
        assert!(validate_coupon(&coupon(DiscountType::Amount, 0)).is_ok());
        assert!(validate_coupon(&coupon(DiscountType::Amount, -1)).is_err());
    }

    #[test]
    fn test_validate_coupon_percentage() {
        assert!(validate_coupon(&coupon(DiscountType::Percentage, 10)).is_ok());
        assert!(validate_coupon(&coupon(DiscountType::Percentage, 100)).is_ok());
        assert!(validate_coupon(&coupon(DiscountType::Percentage, 101)).is_err());
        assert!(validate_coupon(&coupon(DiscountType::Percentage, -5)).is_err());
    }
}
