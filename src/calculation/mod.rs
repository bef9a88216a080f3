//! Calculation logic for the rental pricing engine.
//!
//! This module contains the pricing rules: rental duration with the grace
//! hour, tariff band selection, coverage plan adjustment, the car-level
//! discount, and the total calculation that composes them.

mod discount;
mod duration;
mod plan_adjustment;
mod tariff_selection;
mod total;

pub use discount::{DiscountResult, apply_discount};
pub use duration::{
    DAY_MS, DayCountRule, GRACE_PERIOD_MS, compute_total_days, compute_total_days_with,
};
pub use plan_adjustment::{PlanAdjustmentResult, apply_plan};
pub use tariff_selection::{
    TARIFF_FALLBACK_WARNING, TariffBandIssue, TariffMatch, TariffSelectionResult, select_tariff,
    sort_tariffs, validate_tariff_bands,
};
pub use total::{
    DUPLICATE_ADD_ON_WARNING, NON_POSITIVE_DAYS_WARNING, PricingTerms, TotalCalculationResult,
    compute_total,
};
