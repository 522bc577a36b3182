//! # Error Types
//!
//! Domain-specific error types for toolrent-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  toolrent-core errors (this file)                                      │
//! │  ├── InvalidParameterError - checkout preconditions that failed        │
//! │  └── ValidationError       - malformed tool catalog entries            │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                 │
//! │  └── ConfigError           - unreadable or invalid toolrent.toml       │
//! │                                                                         │
//! │  Flow: ValidationError → ConfigError → anyhow → stderr                 │
//! │        InvalidParameterError ─────────────────► stderr (exit 2)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Checkout messages are part of the public contract, keep them exact
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Invalid Parameter Error
// =============================================================================

/// A checkout precondition that did not hold.
///
/// A failed checkout never produces a partially populated agreement: the
/// record is only assembled once every check and every charge succeeded.
///
/// ## User Workflow
/// ```text
/// checkout("LADW", 0, 10, 2020-07-02)
///      │
///      ▼
/// validate_rental_days(0)
///      │
///      ▼
/// InvalidParameterError::RentalDays { requested: 0 }
///      │
///      ▼
/// CLI prints: "rental day count must be at least 1"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidParameterError {
    /// Rental day count below 1.
    #[error("rental day count must be at least 1")]
    RentalDays { requested: i64 },

    /// Discount percent outside `[0, 100]`.
    #[error("discount percent must be between 0 and 100")]
    DiscountPercent { requested: i64 },

    /// No catalog entry matches the code (case-insensitive).
    #[error("unknown tool code")]
    UnknownToolCode { code: String },

    /// The due date cannot be represented by the calendar.
    #[error("rental period exceeds the supported calendar range")]
    RentalPeriodOutOfRange { rental_days: i64 },

    /// A charge for this rental cannot be represented as [`crate::Money`].
    #[error("rental charge exceeds the supported amount range")]
    ChargeOutOfRange { tool_code: String, chargeable_days: u32 },
}

impl InvalidParameterError {
    /// Name of the input that failed, for logs and structured output.
    pub fn parameter(&self) -> &'static str {
        match self {
            InvalidParameterError::RentalDays { .. } => "rental_days",
            InvalidParameterError::DiscountPercent { .. } => "discount_percent",
            InvalidParameterError::UnknownToolCode { .. } => "tool_code",
            InvalidParameterError::RentalPeriodOutOfRange { .. } => "rental_days",
            InvalidParameterError::ChargeOutOfRange { .. } => "daily_charge",
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Tool catalog entry validation errors.
///
/// These occur when a catalog is assembled from external data (the CLI's
/// `toolrent.toml`). The shipped catalog never produces them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., too many fractional digits).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value above the accepted maximum.
    #[error("{field} must not exceed {max}")]
    TooLarge { field: String, max: String },

    /// Duplicate value (e.g., two tools sharing a code).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result of a checkout request.
pub type CheckoutResult<T> = Result<T, InvalidParameterError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_messages() {
        let err = InvalidParameterError::RentalDays { requested: 0 };
        assert_eq!(err.to_string(), "rental day count must be at least 1");

        let err = InvalidParameterError::DiscountPercent { requested: 101 };
        assert_eq!(err.to_string(), "discount percent must be between 0 and 100");

        let err = InvalidParameterError::UnknownToolCode {
            code: "NOPE".to_string(),
        };
        assert_eq!(err.to_string(), "unknown tool code");
    }

    #[test]
    fn test_parameter_names() {
        assert_eq!(
            InvalidParameterError::DiscountPercent { requested: -1 }.parameter(),
            "discount_percent"
        );
        assert_eq!(
            InvalidParameterError::RentalPeriodOutOfRange { rental_days: 1 }.parameter(),
            "rental_days"
        );
        assert_eq!(
            InvalidParameterError::ChargeOutOfRange {
                tool_code: "BIG".to_string(),
                chargeable_days: 10,
            }
            .parameter(),
            "daily_charge"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "code".to_string(),
        };
        assert_eq!(err.to_string(), "code is required");

        let err = ValidationError::Duplicate {
            field: "code".to_string(),
            value: "LADW".to_string(),
        };
        assert_eq!(err.to_string(), "code 'LADW' already exists");
    }
}
