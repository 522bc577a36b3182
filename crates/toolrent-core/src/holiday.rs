//! # Holiday Calendar
//!
//! Observed holidays that change how a rental day is billed.
//!
//! ## Observance Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Independence Day                                                       │
//! │    July 4 on Saturday ──► observed Friday July 3                        │
//! │    July 4 on Sunday   ──► observed Monday July 5                        │
//! │    otherwise          ──► observed July 4                               │
//! │                                                                         │
//! │  Labor Day                                                              │
//! │    first Monday of September (Sep 1 ..= Sep 7)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both rules land inside the year they are computed for, so a date is a
//! holiday iff it is in the set for its own year.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeSet;

/// Source of observed holidays.
///
/// Implementations must be pure: the same year always yields the same set.
pub trait HolidayCalendar: Send + Sync {
    /// All observed holidays falling in `year`.
    fn holidays(&self, year: i32) -> BTreeSet<NaiveDate>;

    /// Whether `date` is an observed holiday.
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays(date.year()).contains(&date)
    }
}

/// The observed US calendar used for billing: Independence Day and Labor Day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObservedHolidays;

impl HolidayCalendar for ObservedHolidays {
    fn holidays(&self, year: i32) -> BTreeSet<NaiveDate> {
        [independence_day(year), labor_day(year)]
            .into_iter()
            .flatten()
            .collect()
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        let year = date.year();
        independence_day(year) == Some(date) || labor_day(year) == Some(date)
    }
}

/// Observed Independence Day for `year`.
///
/// Returns `None` only at the edges of the representable calendar.
pub fn independence_day(year: i32) -> Option<NaiveDate> {
    let nominal = NaiveDate::from_ymd_opt(year, 7, 4)?;
    match nominal.weekday() {
        Weekday::Sat => nominal.pred_opt(),
        Weekday::Sun => nominal.succ_opt(),
        _ => Some(nominal),
    }
}

/// Labor Day (first Monday in September) for `year`.
pub fn labor_day(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, 9, Weekday::Mon, 1)
}

// =============================================================================
// Unit Tests
// =============================================================================
