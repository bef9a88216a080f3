//! Core data models for the rental pricing engine.
//!
//! This module contains all the domain models used throughout the engine.

mod add_on;
mod car;
mod coverage;
mod date_range;
mod quote;
mod tariff;

pub use add_on::{ExtraItem, PricingMode};
pub use car::Car;
pub use coverage::{CarCountingRule, CoverageTier};
pub use date_range::DateRange;
pub use quote::{AddOnCharge, AuditStep, AuditTrace, AuditWarning, PriceBreakdown, Quote};
pub use tariff::RentalTariff;
