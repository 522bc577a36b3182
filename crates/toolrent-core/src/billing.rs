//! # Billing Engine
//!
//! Turns a tool policy and rental terms into a finished [`BillingRecord`].
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Billing a Rental                                │
//! │                                                                         │
//! │  checkout date ─┐                                                       │
//! │  rental days ───┼──► days 1..=N after checkout (checkout day is free)   │
//! │                 │          │                                            │
//! │                 │          ▼                                            │
//! │                 │    classify: Holiday? ─yes─► Holiday                  │
//! │                 │          │no                                          │
//! │                 │          ▼                                            │
//! │                 │    Sat/Sun? ─yes─► Weekend, else Weekday              │
//! │                 │          │                                            │
//! │                 │          ▼                                            │
//! │  ToolPolicy ────┴──► charges_on(kind)? ──► chargeable dates             │
//! │                                                 │                       │
//! │                                                 ▼                       │
//! │       daily × days ──► pre-discount ──► × pct / 100 ──► discount        │
//! │                              │                              │           │
//! │                              └──────────── − ───────────────┘           │
//! │                                            │                            │
//! │                                            ▼                            │
//! │                                      final charge                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every monetary step rounds half-up to cents (see [`Money`]).

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;
use tracing::debug;

use crate::error::{CheckoutResult, InvalidParameterError};
use crate::holiday::{HolidayCalendar, ObservedHolidays};
use crate::money::Money;
use crate::types::{DayKind, ToolPolicy};

// =============================================================================
// Charges
// =============================================================================

/// The three monetary figures of an agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Charges {
    pub pre_discount_charge: Money,
    pub discount_amount: Money,
    pub final_charge: Money,
}

impl Charges {
    /// Prices `chargeable_days` at `daily_charge` less `discount_percent`%.
    ///
    /// `None` when a figure would exceed [`crate::money::MAX_AMOUNT`].
    ///
    /// ## Example
    /// ```rust
    /// use toolrent_core::billing::Charges;
    /// use toolrent_core::money::Money;
    ///
    /// let charges = Charges::compute(Money::from_cents(149), 3, 25).unwrap();
    /// assert_eq!(charges.pre_discount_charge.to_string(), "$4.47");
    /// assert_eq!(charges.discount_amount.to_string(), "$1.12");
    /// assert_eq!(charges.final_charge.to_string(), "$3.35");
    /// ```
    pub fn compute(
        daily_charge: Money,
        chargeable_days: u32,
        discount_percent: u8,
    ) -> Option<Self> {
        let pre_discount_charge = daily_charge.times_days(chargeable_days)?;
        let discount_amount = pre_discount_charge.percentage(discount_percent)?;
        let final_charge = pre_discount_charge.checked_sub(discount_amount)?;

        Some(Charges {
            pre_discount_charge,
            discount_amount,
            final_charge,
        })
    }
}

// =============================================================================
// Billing Record
// =============================================================================

/// A priced rental agreement.
///
/// Built in one step by [`BillingEngine::bill`] and never mutated after;
/// tool details are copied out of the policy rather than referenced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillingRecord {
    tool_code: String,
    tool_type: String,
    tool_brand: String,
    rental_days: u32,
    checkout_date: NaiveDate,
    due_date: NaiveDate,
    daily_rental_charge: Money,
    chargeable_days: u32,
    chargeable_dates: Vec<NaiveDate>,
    pre_discount_charge: Money,
    discount_percent: u8,
    discount_amount: Money,
    final_charge: Money,
}

impl BillingRecord {
    pub fn tool_code(&self) -> &str {
        &self.tool_code
    }

    pub fn tool_type(&self) -> &str {
        &self.tool_type
    }

    pub fn tool_brand(&self) -> &str {
        &self.tool_brand
    }

    pub fn rental_days(&self) -> u32 {
        self.rental_days
    }

    pub fn checkout_date(&self) -> NaiveDate {
        self.checkout_date
    }

    /// Checkout date plus the rental day count; the last day billed.
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn daily_rental_charge(&self) -> Money {
        self.daily_rental_charge
    }

    pub fn chargeable_days(&self) -> u32 {
        self.chargeable_days
    }

    /// Billed dates in chronological order.
    pub fn chargeable_dates(&self) -> &[NaiveDate] {
        &self.chargeable_dates
    }

    pub fn pre_discount_charge(&self) -> Money {
        self.pre_discount_charge
    }

    pub fn discount_percent(&self) -> u8 {
        self.discount_percent
    }

    pub fn discount_amount(&self) -> Money {
        self.discount_amount
    }

    pub fn final_charge(&self) -> Money {
        self.final_charge
    }

    pub fn charges(&self) -> Charges {
        Charges {
            pre_discount_charge: self.pre_discount_charge,
            discount_amount: self.discount_amount,
            final_charge: self.final_charge,
        }
    }
}

// =============================================================================
// Billing Engine
// =============================================================================

/// Applies a tool's charge schedule against a holiday calendar.
#[derive(Debug, Clone, Default)]
pub struct BillingEngine<C = ObservedHolidays> {
    calendar: C,
}

impl<C: HolidayCalendar> BillingEngine<C> {
    pub fn new(calendar: C) -> Self {
        BillingEngine { calendar }
    }

    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Classifies a date for billing. Holidays win over the day of week.
    pub fn classify(&self, date: NaiveDate) -> DayKind {
        if self.calendar.is_holiday(date) {
            DayKind::Holiday
        } else if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            DayKind::Weekend
        } else {
            DayKind::Weekday
        }
    }

    /// Dates in `checkout_date + 1 ..= checkout_date + rental_days` the tool
    /// is billed on, in order.
    pub fn chargeable_dates(
        &self,
        policy: &ToolPolicy,
        checkout_date: NaiveDate,
        rental_days: u32,
    ) -> Vec<NaiveDate> {
        checkout_date
            .iter_days()
            .skip(1)
            .take(rental_days as usize)
            .filter(|date| policy.charges_on(self.classify(*date)))
            .collect()
    }

    /// Prices a rental.
    ///
    /// Inputs are expected to be validated already (see
    /// [`crate::checkout::RentalService::checkout`]). What can still fail is
    /// a due date past the end of the calendar, or a charge past
    /// [`crate::money::MAX_AMOUNT`] for a policy that skipped catalog
    /// validation.
    pub fn bill(
        &self,
        policy: &ToolPolicy,
        rental_days: u32,
        checkout_date: NaiveDate,
        discount_percent: u8,
    ) -> CheckoutResult<BillingRecord> {
        let due_date = due_date(checkout_date, rental_days)?;

        let chargeable_dates = self.chargeable_dates(policy, checkout_date, rental_days);
        let chargeable_days = chargeable_dates.len() as u32;
        let charges = Charges::compute(policy.daily_charge(), chargeable_days, discount_percent)
            .ok_or_else(|| InvalidParameterError::ChargeOutOfRange {
                tool_code: policy.code().to_string(),
                chargeable_days,
            })?;

        debug!(
            tool = %policy.code(),
            rental_days,
            chargeable_days,
            final_charge = %charges.final_charge,
            "Rental billed"
        );

        Ok(BillingRecord {
            tool_code: policy.code().to_string(),
            tool_type: policy.tool_type().to_string(),
            tool_brand: policy.brand().to_string(),
            rental_days,
            checkout_date,
            due_date,
            daily_rental_charge: policy.daily_charge(),
            chargeable_days,
            chargeable_dates,
            pre_discount_charge: charges.pre_discount_charge,
            discount_percent,
            discount_amount: charges.discount_amount,
            final_charge: charges.final_charge,
        })
    }
}

/// Checkout date plus `rental_days` calendar days.
pub fn due_date(checkout_date: NaiveDate, rental_days: u32) -> CheckoutResult<NaiveDate> {
    checkout_date
        .checked_add_days(Days::new(u64::from(rental_days)))
        .ok_or(InvalidParameterError::RentalPeriodOutOfRange {
            rental_days: i64::from(rental_days),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
