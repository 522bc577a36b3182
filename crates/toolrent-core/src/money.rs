//! # Money Module
//!
//! Provides the `Money` type for handling rental charges exactly.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    2.99 × 708 = 2116.9199999999996  ❌ WRONG!                           │
//! │                                                                         │
//! │  Discounts divide by 100, so integer cents would need an extra          │
//! │  rounding step before the one the agreement specifies.                  │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal, always scale 2                          │
//! │    2.99 × 708 = 2116.92 exactly                                         │
//! │    4.47 × 25 / 100 = 1.1175 → 1.12 (one half-up rounding)               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use toolrent_core::money::Money;
//!
//! let daily = Money::from_cents(199); // $1.99
//! let charge = daily.times_days(2).unwrap();     // $3.98
//! let discount = charge.percentage(10).unwrap(); // $0.398 → $0.40
//! assert_eq!(charge.checked_sub(discount).unwrap().to_string(), "$3.58");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Number of fractional digits carried by every `Money` value.
pub const MONEY_SCALE: u32 = 2;

/// Largest magnitude a `Money` value may hold: $10^24.
///
/// Every value up to this bound keeps two fractional digits inside
/// `Decimal`'s 96-bit mantissa.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_701_131_776, 466_537_709, 54_210, false, 0);

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in dollars with exactly two fractional digits.
///
/// ## Design Decisions
/// - **Decimal (base 10)**: No binary float drift, ever
/// - **Scale 2 invariant**: Every constructor rounds half-up (midpoint away
///   from zero) and pads, so `$0.4` is always stored as `0.40`
/// - **Signed**: Subtraction may go negative; the checkout never does
/// - **Bounded**: Magnitude never exceeds [`MAX_AMOUNT`]; arithmetic is
///   checked and yields `None` past it
///
/// ## Where Money is Used
/// ```text
/// ToolPolicy.daily_charge ──► × chargeable days ──► pre-discount charge
///                                                          │
///                              discount amount ◄── × pct / 100
///                                     │
///                                     ▼
///                       pre-discount − discount ──► final charge
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value, rounding half-up to two fractional digits.
    ///
    /// Returns `None` when the rounded magnitude exceeds [`MAX_AMOUNT`].
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use toolrent_core::money::{Money, MAX_AMOUNT};
    ///
    /// let amount = Money::new(Decimal::new(1495, 3)).unwrap(); // 1.495
    /// assert_eq!(amount.to_string(), "$1.50");
    /// assert!(Money::new(MAX_AMOUNT * Decimal::TEN).is_none());
    /// ```
    pub fn new(amount: Decimal) -> Option<Self> {
        let rounded = round_half_up(amount);
        if rounded.abs() > MAX_AMOUNT {
            return None;
        }
        Some(Money(rounded))
    }

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use toolrent_core::money::Money;
    ///
    /// let price = Money::from_cents(149); // $1.49
    /// assert_eq!(price.to_string(), "$1.49");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, MONEY_SCALE))
    }

    /// Returns the underlying decimal amount (always scale 2).
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub fn zero() -> Self {
        Money::from_cents(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Multiplies a daily rate by a number of days, rounded to cents.
    ///
    /// ## Example
    /// ```rust
    /// use toolrent_core::money::Money;
    ///
    /// let daily = Money::from_cents(299);
    /// assert_eq!(daily.times_days(708).unwrap().to_string(), "$2,116.92");
    /// ```
    pub fn times_days(&self, days: u32) -> Option<Money> {
        self.0.checked_mul(Decimal::from(days)).and_then(Money::new)
    }

    /// Returns `percent`% of this amount.
    ///
    /// The quotient is computed at full precision and rounded once, so
    /// `$4.47 × 25%` is `1.1175 → $1.12`.
    ///
    /// ## Example
    /// ```rust
    /// use toolrent_core::money::Money;
    ///
    /// let charge = Money::from_cents(299);
    /// assert_eq!(charge.percentage(50).unwrap().to_string(), "$1.50");
    /// ```
    pub fn percentage(&self, percent: u8) -> Option<Money> {
        self.0
            .checked_mul(Decimal::from(percent))
            .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
            .and_then(Money::new)
    }

    /// Adds two amounts, `None` past [`MAX_AMOUNT`].
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).and_then(Money::new)
    }

    /// Subtracts `other`, `None` past [`MAX_AMOUNT`].
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).and_then(Money::new)
    }
}

/// Rounds half-up to two places and pads the scale back to two.
fn round_half_up(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Formats as US currency: `$2,116.92`, `-$5.50`, `$0.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let digits = self.0.abs().to_string();
        let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "{}${}.{}", sign, grouped, cents)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Exact conversion: rejects amounts with more than two fractional digits
/// instead of silently rounding them, and amounts past [`MAX_AMOUNT`].
impl TryFrom<Decimal> for Money {
    type Error = ValidationError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        if amount.normalize().scale() > MONEY_SCALE {
            return Err(ValidationError::InvalidFormat {
                field: "amount".to_string(),
                reason: format!("must have at most {} decimal places", MONEY_SCALE),
            });
        }
        Money::new(amount).ok_or_else(|| ValidationError::TooLarge {
            field: "amount".to_string(),
            max: MAX_AMOUNT.to_string(),
        })
    }
}

/// Parses a plain decimal string such as `"1.99"`.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim()).map_err(|e| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: e.to_string(),
        })?;
        Money::try_from(amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(199);
        assert_eq!(money.amount(), dec!(1.99));
        assert_eq!(money.amount().scale(), 2);
    }

    fn money(amount: Decimal) -> Money {
        Money::new(amount).unwrap()
    }

    #[test]
    fn test_new_pads_and_rounds() {
        assert_eq!(money(dec!(3)).amount().scale(), 2);
        assert_eq!(money(dec!(0.4)).to_string(), "$0.40");
        assert_eq!(money(dec!(0.398)).amount(), dec!(0.40));
        assert_eq!(money(dec!(1.1175)).amount(), dec!(1.12));
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        // Bankers rounding would give 1.49 here
        assert_eq!(money(dec!(1.495)).amount(), dec!(1.50));
        assert_eq!(money(dec!(0.125)).amount(), dec!(0.13));
        assert_eq!(money(dec!(-0.125)).amount(), dec!(-0.13));
    }

    #[test]
    fn test_new_keeps_two_places_up_to_max() {
        let max = money(MAX_AMOUNT);
        assert_eq!(max.amount().scale(), 2);
        assert_eq!(money(-MAX_AMOUNT).amount().scale(), 2);
        assert!(Money::new(MAX_AMOUNT + dec!(0.01)).is_none());
        let widest: Decimal = "7922816251426433759354395033.5".parse().unwrap();
        assert!(Money::new(widest).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(199).to_string(), "$1.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
        assert_eq!(Money::from_cents(211692).to_string(), "$2,116.92");
        assert_eq!(Money::from_cents(123456789).to_string(), "$1,234,567.89");
        assert_eq!(Money::from_cents(99999).to_string(), "$999.99");
    }

    #[test]
    fn test_times_days() {
        let daily = Money::from_cents(299);
        assert_eq!(daily.times_days(0), Some(Money::zero()));
        assert_eq!(daily.times_days(5).unwrap().amount(), dec!(14.95));
        assert_eq!(daily.times_days(708).unwrap().amount(), dec!(2116.92));
    }

    #[test]
    fn test_times_days_past_max_is_none() {
        assert_eq!(money(MAX_AMOUNT).times_days(1), Some(money(MAX_AMOUNT)));
        assert!(money(MAX_AMOUNT).times_days(2).is_none());
        assert!(money(MAX_AMOUNT).times_days(u32::MAX).is_none());
    }

    #[test]
    fn test_percentage() {
        assert_eq!(Money::from_cents(398).percentage(10).unwrap().amount(), dec!(0.40));
        assert_eq!(Money::from_cents(447).percentage(25).unwrap().amount(), dec!(1.12));
        assert_eq!(Money::from_cents(897).percentage(0), Some(Money::zero()));
        assert_eq!(Money::from_cents(897).percentage(100).unwrap().amount(), dec!(8.97));
        assert_eq!(money(MAX_AMOUNT).percentage(100), Some(money(MAX_AMOUNT)));
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_cents(447);
        let b = Money::from_cents(112);
        assert_eq!(a.checked_sub(b).unwrap().amount(), dec!(3.35));
        assert_eq!(a.checked_add(b).unwrap().amount(), dec!(5.59));
        assert!(b.checked_sub(a).unwrap().is_negative());
        assert!(money(MAX_AMOUNT).checked_add(Money::from_cents(1)).is_none());
        assert!(money(-MAX_AMOUNT).checked_sub(Money::from_cents(1)).is_none());
    }

    #[test]
    fn test_parse_rejects_sub_cent_precision() {
        assert_eq!("1.49".parse::<Money>().unwrap(), Money::from_cents(149));
        assert_eq!("2".parse::<Money>().unwrap().to_string(), "$2.00");
        assert_eq!("1.490".parse::<Money>().unwrap(), Money::from_cents(149));
        assert!("1.499".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
    }

    #[test]
    fn test_parse_rejects_amounts_past_max() {
        assert!(matches!(
            "7922816251426433759354395033.5".parse::<Money>(),
            Err(ValidationError::TooLarge { .. })
        ));
        assert!(matches!(
            "1000000000000000000000000.01".parse::<Money>(),
            Err(ValidationError::TooLarge { .. })
        ));
        assert_eq!(
            "1000000000000000000000000".parse::<Money>().unwrap().amount(),
            MAX_AMOUNT
        );
    }

    #[test]
    fn test_serde_uses_decimal_string() {
        let json = serde_json::to_string(&Money::from_cents(40)).unwrap();
        assert_eq!(json, "\"0.40\"");

        let parsed: Money = serde_json::from_str("\"2.99\"").unwrap();
        assert_eq!(parsed, Money::from_cents(299));
        assert!(serde_json::from_str::<Money>("\"2.999\"").is_err());
    }
}
