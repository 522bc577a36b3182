//! # Checkout
//!
//! The caller-facing entry point: validate, look up the tool, bill.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  checkout("LADW", 3, 10, 2020-07-02)                                    │
//! │       │                                                                 │
//! │       ├── rental days < 1?        → "rental day count must be ..."      │
//! │       ├── discount not 0..=100?   → "discount percent must be ..."      │
//! │       ├── code not in catalog?    → "unknown tool code"                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BillingEngine::bill ──► BillingRecord (complete, immutable)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use tracing::debug;

use crate::billing::{BillingEngine, BillingRecord};
use crate::catalog::ToolCatalog;
use crate::error::{CheckoutResult, InvalidParameterError};
use crate::holiday::{HolidayCalendar, ObservedHolidays};
use crate::validation::{validate_discount_percent, validate_rental_days};

/// Prices checkouts against a fixed catalog and holiday calendar.
///
/// Holds no mutable state, so one instance can serve any number of
/// concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct RentalService<C = ObservedHolidays> {
    catalog: ToolCatalog,
    engine: BillingEngine<C>,
}

impl RentalService<ObservedHolidays> {
    /// Service over `catalog` using the observed US holiday calendar.
    pub fn new(catalog: ToolCatalog) -> Self {
        RentalService::with_calendar(catalog, ObservedHolidays)
    }
}

impl<C: HolidayCalendar> RentalService<C> {
    pub fn with_calendar(catalog: ToolCatalog, calendar: C) -> Self {
        RentalService {
            catalog,
            engine: BillingEngine::new(calendar),
        }
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    pub fn engine(&self) -> &BillingEngine<C> {
        &self.engine
    }

    /// Rents `tool_code` for `rental_days` days starting after
    /// `checkout_date`, less `discount_percent`%.
    ///
    /// Preconditions are checked in order (rental days, discount, tool
    /// code) and the first failure is returned; nothing is billed unless
    /// all of them hold.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use toolrent_core::{RentalService, ToolCatalog};
    ///
    /// let service = RentalService::new(ToolCatalog::standard());
    /// let date = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
    /// let record = service.checkout("LADW", 3, 10, date).unwrap();
    /// assert_eq!(record.final_charge().to_string(), "$3.58");
    ///
    /// let err = service.checkout("LADW", 0, 10, date).unwrap_err();
    /// assert_eq!(err.to_string(), "rental day count must be at least 1");
    /// ```
    pub fn checkout(
        &self,
        tool_code: &str,
        rental_days: i64,
        discount_percent: i64,
        checkout_date: NaiveDate,
    ) -> CheckoutResult<BillingRecord> {
        debug!(
            tool = %tool_code,
            rental_days,
            discount_percent,
            %checkout_date,
            "Checkout requested"
        );

        let result = self.try_checkout(tool_code, rental_days, discount_percent, checkout_date);
        if let Err(ref e) = result {
            debug!(parameter = e.parameter(), error = %e, "Checkout rejected");
        }
        result
    }

    fn try_checkout(
        &self,
        tool_code: &str,
        rental_days: i64,
        discount_percent: i64,
        checkout_date: NaiveDate,
    ) -> CheckoutResult<BillingRecord> {
        let rental_days = validate_rental_days(rental_days)?;
        let discount_percent = validate_discount_percent(discount_percent)?;

        let policy = self
            .catalog
            .find(tool_code)
            .ok_or_else(|| InvalidParameterError::UnknownToolCode {
                code: tool_code.to_string(),
            })?;

        self.engine
            .bill(policy, rental_days, checkout_date, discount_percent)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
