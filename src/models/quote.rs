//! Quote models for the rental pricing engine.
//!
//! This module contains the [`PriceBreakdown`] produced by the calculator and
//! the [`Quote`] envelope the API returns around it, together with the audit
//! trace types that record every pricing decision.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CoverageTier, DateRange, PricingMode};

/// A single add-on line in a price breakdown.
///
/// # Example
///
/// ```
/// use rental_pricing::models::{AddOnCharge, PricingMode};
/// use rust_decimal::Decimal;
///
/// let charge = AddOnCharge {
///     id: "gps".to_string(),
///     pricing_mode: PricingMode::PerDay,
///     unit_price: Decimal::new(6, 0),
///     quantity: 5,
///     amount: Decimal::new(30, 0),
/// };
/// assert_eq!(charge.amount, charge.unit_price * Decimal::from(charge.quantity));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnCharge {
    /// The id of the extra.
    pub id: String,
    /// How the extra is charged.
    pub pricing_mode: PricingMode,
    /// The price per unit.
    pub unit_price: Decimal,
    /// Billable units (days for per-day extras, 1 for one-time extras).
    pub quantity: i64,
    /// `unit_price * quantity`.
    pub amount: Decimal,
}

/// The derived price of a rental.
///
/// The deposit is reported but never included in `grand_total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Billable rental days.
    pub total_days: i64,
    /// Daily rate after plan markup and car discount.
    pub daily_price: Decimal,
    /// Deposit after the plan's deposit discount.
    pub deposit_amount: Decimal,
    /// `daily_price * total_days`.
    pub rental_total: Decimal,
    /// Sum of all add-on charges.
    pub add_ons_total: Decimal,
    /// `rental_total + add_ons_total`.
    pub grand_total: Decimal,
    /// Individual add-on charges.
    #[serde(default)]
    pub add_on_charges: Vec<AddOnCharge>,
}

/// A single step in the audit trace recording a pricing decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag degraded results (fallback tariffs, ignored duplicates)
/// that do not stop a quote from being produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a new warning.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: severity.into(),
        }
    }
}

/// The complete audit trace for a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// A priced rental offer returned by the quote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Unique identifier for this quote.
    pub quote_id: Uuid,
    /// When the quote was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the quote.
    pub engine_version: String,
    /// The quoted car.
    pub car_id: String,
    /// Currency of every amount in the breakdown.
    pub currency: String,
    /// The selected coverage tier, if any.
    pub coverage: Option<CoverageTier>,
    /// The rental period, serialized as top-level `start_date` / `end_date`.
    #[serde(flatten)]
    pub rental_period: DateRange,
    /// The tariff band the daily rate came from.
    pub tariff_id: String,
    /// The computed prices.
    pub breakdown: PriceBreakdown,
    /// Complete audit trace of pricing decisions.
    pub audit_trace: AuditTrace,
}
