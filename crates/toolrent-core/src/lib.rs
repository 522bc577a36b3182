//! # toolrent-core: Pure Pricing Logic for Tool Rentals
//!
//! This crate is the **heart** of ToolRent. It contains all billing rules
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ToolRent Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    toolrent CLI (apps/cli)                      │   │
//! │  │    args ──► toolrent.toml ──► checkout ──► agreement / JSON     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ toolrent-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │ checkout │ │ billing  │ │ holiday  │ │ catalog / types  │  │   │
//! │  │   │ validate │►│ days, $  │►│ July 4,  │ │ ToolPolicy,      │  │   │
//! │  │   │ + lookup │ │ rounding │ │ Labor Day│ │ Money            │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CONFIG FILES • NO SUBSCRIBER • PURE FUNCTIONS    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ToolPolicy, ChargeSchedule, DayKind)
//! - [`money`] - Money type with exact decimal arithmetic (no floating point!)
//! - [`holiday`] - Observed holiday calendar
//! - [`billing`] - Chargeable days and charges, the BillingRecord
//! - [`catalog`] - The immutable tool catalog
//! - [`checkout`] - The caller-facing checkout operation
//! - [`agreement`] - Printed agreement rendering
//! - [`error`] - Domain error types
//! - [`validation`] - Input and catalog validation
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use toolrent_core::{RentalService, ToolCatalog};
//!
//! let service = RentalService::new(ToolCatalog::standard());
//! let checkout_date = NaiveDate::from_ymd_opt(2015, 9, 3).unwrap();
//!
//! // Labor Day (Sep 7) and the weekend are free for a jackhammer
//! let record = service.checkout("JAKD", 6, 0, checkout_date).unwrap();
//! assert_eq!(record.chargeable_days(), 3);
//! assert_eq!(record.final_charge().to_string(), "$8.97");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod agreement;
pub mod billing;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod holiday;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use agreement::{render_agreement, Agreement};
pub use billing::{BillingEngine, BillingRecord, Charges};
pub use catalog::ToolCatalog;
pub use checkout::RentalService;
pub use error::{CheckoutResult, InvalidParameterError, ValidationError};
pub use holiday::{HolidayCalendar, ObservedHolidays};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Shortest rental accepted at checkout, in days.
pub const MIN_RENTAL_DAYS: i64 = 1;

/// Largest discount accepted at checkout, in percent.
pub const MAX_DISCOUNT_PERCENT: u8 = 100;
