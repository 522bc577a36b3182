//! # Rental Agreement Rendering
//!
//! Formats a [`BillingRecord`] as the printed agreement handed to the
//! customer.
//!
//! ## Layout
//! ```text
//! Tool code: LADW
//! Tool type: Ladder
//! Tool brand: Werner
//! Rental days: 3
//! Checkout date: 07/02/20
//! Due date: 07/05/20
//! Daily rental charge: $1.99
//! Chargeable days: 2
//! Pre-discount charge: $3.98
//! Discount percent: 10%
//! Discount amount: $0.40
//! Final charge: $3.58
//! ```

use std::fmt;

use crate::billing::BillingRecord;

/// Date format used on the agreement (`MM/DD/YY`).
pub const AGREEMENT_DATE_FORMAT: &str = "%m/%d/%y";

/// Borrowing wrapper that displays a record as an agreement.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use toolrent_core::{RentalService, ToolCatalog};
/// use toolrent_core::agreement::Agreement;
///
/// let service = RentalService::new(ToolCatalog::standard());
/// let date = NaiveDate::from_ymd_opt(2015, 7, 2).unwrap();
/// let record = service.checkout("CHNS", 5, 25, date).unwrap();
///
/// let text = Agreement(&record).to_string();
/// assert!(text.contains("Final charge: $3.35"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Agreement<'a>(pub &'a BillingRecord);

impl fmt::Display for Agreement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        writeln!(f, "Tool code: {}", r.tool_code())?;
        writeln!(f, "Tool type: {}", r.tool_type())?;
        writeln!(f, "Tool brand: {}", r.tool_brand())?;
        writeln!(f, "Rental days: {}", r.rental_days())?;
        writeln!(f, "Checkout date: {}", r.checkout_date().format(AGREEMENT_DATE_FORMAT))?;
        writeln!(f, "Due date: {}", r.due_date().format(AGREEMENT_DATE_FORMAT))?;
        writeln!(f, "Daily rental charge: {}", r.daily_rental_charge())?;
        writeln!(f, "Chargeable days: {}", r.chargeable_days())?;
        writeln!(f, "Pre-discount charge: {}", r.pre_discount_charge())?;
        writeln!(f, "Discount percent: {}%", r.discount_percent())?;
        writeln!(f, "Discount amount: {}", r.discount_amount())?;
        writeln!(f, "Final charge: {}", r.final_charge())
    }
}

/// Renders the agreement text (one labeled line per field).
pub fn render_agreement(record: &BillingRecord) -> String {
    Agreement(record).to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
