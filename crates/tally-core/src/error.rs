//! # Error Types
//!
//! Domain error types for tally-core.
//!
//! ## Where Errors Can Happen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Configuration time (fallible)         Scan loop (infallible)           │
//! │  ─────────────────────────────         ──────────────────────           │
//! │  PricingConfig::from_json              Checkout::scan                   │
//! │  Catalogue::new                        Checkout::total                  │
//! │  Sku::new                              Promotion::apply                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ValidationError ──► CoreError                                          │
//! │                                                                         │
//! │  A till must never halt on a scan: unknown SKUs and promotions that    │
//! │  do not match are silent no-ops, not errors.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while assembling a pricing setup.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration failed a business rule (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration JSON could not be parsed.
    #[error("Invalid pricing configuration: {0}")]
    Config(#[from] serde_json::Error),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
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

    /// Invalid format (e.g., a SKU with spaces, a price with three decimals).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., the same SKU listed twice in a catalogue).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// A promotion targets a SKU the catalogue does not sell.
    ///
    /// Only raised when loading a [`PricingConfig`](crate::config::PricingConfig);
    /// a hand-built promotion for an unknown SKU is simply never triggered.
    #[error("promotion targets unknown SKU '{0}'")]
    UnknownSku(String),
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
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "sku".to_string(),
        };
        assert_eq!(err.to_string(), "sku is required");

        let err = ValidationError::OutOfRange {
            field: "y".to_string(),
            min: 0,
            max: 3,
        };
        assert_eq!(err.to_string(), "y must be between 0 and 3");

        let err = ValidationError::UnknownSku("zzz".to_string());
        assert_eq!(err.to_string(), "promotion targets unknown SKU 'zzz'");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Duplicate {
            field: "sku".to_string(),
            value: "ipd".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(
            core_err.to_string(),
            "Validation error: sku 'ipd' already exists"
        );
    }

    #[test]
    fn test_json_error_converts_to_core_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let core_err: CoreError = json_err.into();
        assert!(matches!(core_err, CoreError::Config(_)));
    }
}
