//! # Domain Types
//!
//! Core domain types used throughout ToolRent.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   ToolPolicy    │   │ ChargeSchedule  │   │    DayKind      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code (LADW)    │──►│  weekday        │◄──│  Weekday        │       │
//! │  │  tool_type      │   │  weekend        │   │  Weekend        │       │
//! │  │  brand          │   │  holiday        │   │  Holiday        │       │
//! │  │  daily_charge   │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  BillingRecord lives in `billing`: only the engine may build one.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Day Kind
// =============================================================================

/// How a single calendar day is billed.
///
/// A holiday is only ever a `Holiday`, even when it falls Monday to
/// Friday: the weekday and weekend rules never see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// Monday to Friday, not a holiday.
    Weekday,
    /// Saturday or Sunday, not a holiday.
    Weekend,
    /// An observed holiday.
    Holiday,
}

impl fmt::Display for DayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DayKind::Weekday => "weekday",
            DayKind::Weekend => "weekend",
            DayKind::Holiday => "holiday",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Charge Schedule
// =============================================================================

/// Which kinds of days a tool accrues its daily charge on.
///
/// The three flags are independent; every combination is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ChargeSchedule {
    #[serde(rename = "weekday_charge")]
    pub weekday: bool,
    #[serde(rename = "weekend_charge")]
    pub weekend: bool,
    #[serde(rename = "holiday_charge")]
    pub holiday: bool,
}

impl ChargeSchedule {
    /// Creates a schedule from the weekday, weekend and holiday flags.
    #[inline]
    pub const fn new(weekday: bool, weekend: bool, holiday: bool) -> Self {
        ChargeSchedule {
            weekday,
            weekend,
            holiday,
        }
    }

    /// Whether a day of the given kind is billed.
    #[inline]
    pub const fn charges_on(&self, kind: DayKind) -> bool {
        match kind {
            DayKind::Weekday => self.weekday,
            DayKind::Weekend => self.weekend,
            DayKind::Holiday => self.holiday,
        }
    }
}

// =============================================================================
// Tool Policy
// =============================================================================

/// A rentable tool and the rules for charging it.
///
/// ## Snapshot Semantics
/// Agreements copy the fields they need out of the policy at checkout, so
/// a later catalog change never alters an issued agreement.
///
/// ## TOML Shape
/// ```toml
/// [[tools]]
/// code = "CHNS"
/// type = "Chainsaw"
/// brand = "Stihl"
/// daily_charge = "1.49"
/// weekday_charge = true
/// weekend_charge = false
/// holiday_charge = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolPolicy {
    code: String,
    #[serde(rename = "type")]
    tool_type: String,
    brand: String,
    daily_charge: Money,
    #[serde(flatten)]
    schedule: ChargeSchedule,
}

impl ToolPolicy {
    /// Creates a tool policy. Entries from untrusted sources should go
    /// through [`crate::catalog::ToolCatalog::from_policies`], which
    /// validates them.
    pub fn new(
        code: impl Into<String>,
        tool_type: impl Into<String>,
        brand: impl Into<String>,
        daily_charge: Money,
        schedule: ChargeSchedule,
    ) -> Self {
        ToolPolicy {
            code: code.into(),
            tool_type: tool_type.into(),
            brand: brand.into(),
            daily_charge,
            schedule,
        }
    }

    /// Catalog code, e.g. `LADW`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Tool category, e.g. `Ladder`.
    pub fn tool_type(&self) -> &str {
        &self.tool_type
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn daily_charge(&self) -> Money {
        self.daily_charge
    }

    pub fn schedule(&self) -> ChargeSchedule {
        self.schedule
    }

    /// Whether this tool is billed on a day of the given kind.
    #[inline]
    pub fn charges_on(&self, kind: DayKind) -> bool {
        self.schedule.charges_on(kind)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
