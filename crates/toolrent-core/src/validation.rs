//! # Validation Module
//!
//! Input validation utilities for ToolRent.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI (clap)                                                   │
//! │  ├── Type validation (integers, dates)                                 │
//! │  └── Immediate usage errors                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Checkout preconditions (THIS MODULE)                         │
//! │  ├── Rental days >= 1                                                  │
//! │  └── Discount percent in 0..=100                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog entries (THIS MODULE)                                │
//! │  ├── Code, type and brand present and bounded                          │
//! │  └── Daily charge non-negative, whole cents                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use toolrent_core::validation::{validate_discount_percent, validate_rental_days};
//!
//! assert_eq!(validate_rental_days(3).unwrap(), 3);
//! assert_eq!(validate_discount_percent(10).unwrap(), 10);
//! assert!(validate_rental_days(0).is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::{InvalidParameterError, ValidationError};
use crate::money::Money;
use crate::types::ToolPolicy;
use crate::{MAX_DISCOUNT_PERCENT, MIN_RENTAL_DAYS};

/// Result type for catalog validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted tool code.
pub const MAX_TOOL_CODE_LEN: usize = 10;

/// Longest accepted tool type or brand label.
pub const MAX_LABEL_LEN: usize = 50;

/// Highest accepted daily charge: $1,000,000,000.00.
///
/// At this rate `u32::MAX` chargeable days still price within
/// [`crate::money::MAX_AMOUNT`].
pub const MAX_DAILY_CHARGE: Decimal = Decimal::from_parts(1_215_752_192, 23, 0, false, 2);

// =============================================================================
// Checkout Validators
// =============================================================================

/// Validates a rental day count and narrows it to the engine's day counter.
///
/// ## Rules
/// - Must be at least 1
/// - Must fit in `u32` (larger spans cannot reach a representable due date)
pub fn validate_rental_days(days: i64) -> Result<u32, InvalidParameterError> {
    if days < MIN_RENTAL_DAYS {
        return Err(InvalidParameterError::RentalDays { requested: days });
    }

    u32::try_from(days)
        .map_err(|_| InvalidParameterError::RentalPeriodOutOfRange { rental_days: days })
}

/// Validates a discount percent.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive
pub fn validate_discount_percent(percent: i64) -> Result<u8, InvalidParameterError> {
    match u8::try_from(percent) {
        Ok(pct) if pct <= MAX_DISCOUNT_PERCENT => Ok(pct),
        _ => Err(InvalidParameterError::DiscountPercent { requested: percent }),
    }
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a tool code.
///
/// ## Rules
/// - Must not be empty
/// - At most 10 characters
/// - Letters and digits only
///
/// ## Example
/// ```rust
/// use toolrent_core::validation::validate_tool_code;
///
/// assert!(validate_tool_code("LADW").is_ok());
/// assert!(validate_tool_code("").is_err());
/// assert!(validate_tool_code("LAD-W").is_err());
/// ```
pub fn validate_tool_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.chars().count() > MAX_TOOL_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: MAX_TOOL_CODE_LEN,
        });
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only letters and digits".to_string(),
        });
    }

    Ok(())
}

/// Validates a display label (tool type or brand).
pub fn validate_label(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_LABEL_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_LABEL_LEN,
        });
    }

    Ok(())
}

/// Validates a daily charge.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free loaner tools)
/// - At most [`MAX_DAILY_CHARGE`]
///
/// Whole-cent precision is already guaranteed by [`Money`].
pub fn validate_daily_charge(charge: Money) -> ValidationResult<()> {
    if charge.is_negative() {
        return Err(ValidationError::Negative {
            field: "daily_charge".to_string(),
        });
    }

    if charge.amount() > MAX_DAILY_CHARGE {
        return Err(ValidationError::TooLarge {
            field: "daily_charge".to_string(),
            max: MAX_DAILY_CHARGE.to_string(),
        });
    }

    Ok(())
}

/// Validates every field of a catalog entry.
pub fn validate_tool_policy(policy: &ToolPolicy) -> ValidationResult<()> {
    validate_tool_code(policy.code())?;
    validate_label("type", policy.tool_type())?;
    validate_label("brand", policy.brand())?;
    validate_daily_charge(policy.daily_charge())
}

// =============================================================================
// Unit Tests
// =============================================================================
