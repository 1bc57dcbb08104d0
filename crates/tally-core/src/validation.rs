//! # Validation Module
//!
//! Configuration-time checks for catalogue entries and promotion settings.
//!
//! ## When Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  pricing.json ──► PricingConfig::from_json ──► THIS MODULE ──► Checkout │
//! │                                                   │                     │
//! │                                                   └── Err: refuse to   │
//! │                                                       open the till    │
//! │                                                                         │
//! │  Scan loop: NO validation. An unknown barcode is ignored, never fatal. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::validation::{validate_sku, validate_deal_counts};
//!
//! assert!(validate_sku("atv").is_ok());
//! assert!(validate_deal_counts(3, 2).is_ok());
//! assert!(validate_deal_counts(2, 3).is_err()); // pay for more than you take?
//! ```

use crate::error::ValidationError;
use crate::{MAX_PRICE_CENTS, MAX_PRODUCT_NAME_LENGTH, MAX_SKU_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 50 characters
/// - Only alphanumerics, hyphens, underscores
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_sku;
///
/// assert!(validate_sku("ipd").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku("ipad pro").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.chars().count() > MAX_SKU_LENGTH {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: MAX_SKU_LENGTH,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a SKU that is stored as-is (catalogue keys, promotion targets).
///
/// Same rules as [`validate_sku`], and additionally no surrounding
/// whitespace: a stored `"atv "` could never match a scanned `"atv"`.
pub fn validate_stored_sku(sku: &str) -> ValidationResult<()> {
    validate_sku(sku)?;

    if sku.trim() != sku {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must not have leading or trailing whitespace".to_string(),
        });
    }

    Ok(())
}

/// Validates a product display name: non-empty, at most 200 characters.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Zero is allowed (free items), negatives are not
/// - Must not exceed MAX_PRICE_CENTS ($10,000,000.00)
///
/// `field` names the price in the error (`"price"`, `"discounted price"`).
pub fn validate_price_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates the counts of a "buy x, pay for y" deal.
///
/// ## Rules
/// - `x` must be positive (a group of zero items is meaningless)
/// - `y` must be between 0 and `x`
///
/// ```text
///   x=3, y=2  ✅ 3 for 2
///   x=2, y=2  ✅ legal, but gives nothing away
///   x=0, y=0  ❌ x must be positive
///   x=2, y=3  ❌ y must be between 0 and 2
/// ```
pub fn validate_deal_counts(x: i64, y: i64) -> ValidationResult<()> {
    if x <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "x".to_string(),
        });
    }

    if !(0..=x).contains(&y) {
        return Err(ValidationError::OutOfRange {
            field: "y".to_string(),
            min: 0,
            max: x,
        });
    }

    Ok(())
}

/// Validates a bulk-discount quantity threshold (must be non-negative).
pub fn validate_threshold(threshold: i64) -> ValidationResult<()> {
    if threshold < 0 {
        return Err(ValidationError::OutOfRange {
            field: "threshold".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_sku() {
        assert!(validate_sku("ipd").is_ok());
        assert!(validate_sku("VGA-01").is_ok());
        assert!(validate_sku("apple_tv").is_ok());

        assert!(validate_sku("").is_err());
        assert!(validate_sku("   ").is_err());
        assert!(validate_sku("has space").is_err());
        assert!(validate_sku("a/b").is_err());
        assert!(validate_sku(&"A".repeat(51)).is_err());
        assert!(validate_sku(&"A".repeat(50)).is_ok());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Super iPad").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents("price", 0).is_ok());
        assert!(validate_price_cents("price", 54999).is_ok());

        assert!(validate_price_cents("price", MAX_PRICE_CENTS).is_ok());

        let err = validate_price_cents("discounted price", -1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "discounted price must be between 0 and 1000000000"
        );
        assert!(validate_price_cents("price", MAX_PRICE_CENTS + 1).is_err());
        assert!(validate_price_cents("price", i64::MAX).is_err());
    }

    #[test]
    fn test_validate_stored_sku() {
        assert!(validate_stored_sku("atv").is_ok());

        assert!(matches!(
            validate_stored_sku("atv "),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(validate_stored_sku(" atv").is_err());
        assert!(validate_stored_sku("").is_err());
        // the scanner-facing check still trims
        assert!(validate_sku(" atv ").is_ok());
    }

    #[test]
    fn test_validate_deal_counts() {
        assert!(validate_deal_counts(3, 2).is_ok());
        assert!(validate_deal_counts(2, 2).is_ok());
        assert!(validate_deal_counts(5, 0).is_ok());

        assert!(matches!(
            validate_deal_counts(0, 0),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(validate_deal_counts(-3, 2).is_err());
        assert!(matches!(
            validate_deal_counts(2, 3),
            Err(ValidationError::OutOfRange { max: 2, .. })
        ));
        assert!(validate_deal_counts(3, -1).is_err());
    }

    #[test]
    fn test_validate_threshold() {
        assert!(validate_threshold(0).is_ok());
        assert!(validate_threshold(4).is_ok());
        assert!(validate_threshold(-1).is_err());
    }
}
