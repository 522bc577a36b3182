//! # Commands
//!
//! One function per subcommand. Each writes to the supplied writer so the
//! output can be captured in tests.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use toolrent_core::{
    render_agreement, BillingRecord, CheckoutResult, HolidayCalendar, ObservedHolidays,
    RentalService,
};
use tracing::info;

use crate::config::{OutputFormat, OutputSettings};

/// Exit status when the checkout itself was accepted and printed.
pub const EXIT_OK: u8 = 0;

/// Exit status when the checkout was rejected for an invalid parameter.
pub const EXIT_INVALID_PARAMETER: u8 = 2;

/// Prints the outcome of a checkout and returns the process exit status.
///
/// An accepted checkout goes to `out` as an agreement; a rejected one
/// writes only its message to `err`.
pub fn report_checkout(
    out: &mut impl Write,
    err: &mut impl Write,
    result: CheckoutResult<BillingRecord>,
    settings: &OutputSettings,
) -> Result<u8> {
    match result {
        Ok(record) => {
            print_agreement(out, &record, settings)?;
            Ok(EXIT_OK)
        }
        Err(e) => {
            writeln!(err, "{}", e)?;
            Ok(EXIT_INVALID_PARAMETER)
        }
    }
}

/// Prints a billed agreement in the configured format.
pub fn print_agreement(
    out: &mut impl Write,
    record: &BillingRecord,
    settings: &OutputSettings,
) -> Result<()> {
    match settings.format {
        OutputFormat::Text => {
            write!(out, "{}", render_agreement(record))?;
            if settings.show_chargeable_days {
                writeln!(out)?;
                writeln!(out, "Chargeable dates:")?;
                for date in record.chargeable_dates() {
                    writeln!(out, "{}", date)?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, record)
                .context("Failed to serialize agreement")?;
            writeln!(out)?;
        }
    }

    info!(
        tool = %record.tool_code(),
        final_charge = %record.final_charge(),
        "Agreement issued"
    );
    Ok(())
}

/// Lists the catalog, one tool per line.
pub fn list_tools(out: &mut impl Write, service: &RentalService) -> Result<()> {
    writeln!(
        out,
        "{:<6} {:<12} {:<10} {:>9}  {:<7} {:<7} {:<7}",
        "Code", "Type", "Brand", "Daily", "Weekday", "Weekend", "Holiday"
    )?;
    for tool in service.catalog().iter() {
        let schedule = tool.schedule();
        writeln!(
            out,
            "{:<6} {:<12} {:<10} {:>9}  {:<7} {:<7} {:<7}",
            tool.code(),
            tool.tool_type(),
            tool.brand(),
            tool.daily_charge().to_string(),
            yes_no(schedule.weekday),
            yes_no(schedule.weekend),
            yes_no(schedule.holiday),
        )?;
    }
    Ok(())
}

/// Lists the observed holidays for `year`.
pub fn list_holidays(out: &mut impl Write, year: i32) -> Result<()> {
    for date in ObservedHolidays.holidays(year) {
        writeln!(out, "{}  {}", date, date.weekday())?;
    }
    Ok(())
}

/// Parses a checkout date given as `YYYY-MM-DD` or `MM/DD/YY`.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%y"))
        .map_err(|_| format!("invalid date '{}', expected YYYY-MM-DD or MM/DD/YY", s))
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
