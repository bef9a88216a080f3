//! Coverage plan adjustment.
//!
//! Applies a coverage plan's markup to the daily rate and its discount to
//! the deposit.

use rust_decimal::Decimal;

use crate::models::{AuditStep, CarCountingRule};

/// The result of applying a coverage plan, including the audit step.
#[derive(Debug, Clone)]
pub struct PlanAdjustmentResult {
    /// Daily rate after markup.
    pub adjusted_daily_price: Decimal,
    /// Deposit after discount.
    pub adjusted_deposit: Decimal,
    /// The audit step recording this adjustment.
    pub audit_step: AuditStep,
}

/// Applies a coverage plan to a daily rate and deposit.
///
/// - `adjusted_daily_price = base_daily_price * (1 + price_percent / 100)`
/// - `adjusted_deposit = base_deposit * (1 - deposit_percent / 100)`
///
/// Without a plan both percentages are zero: no markup and the full deposit.
/// The markup applies once to the given rate and never compounds.
///
/// # Examples
///
/// ```
/// use rental_pricing::calculation::apply_plan;
/// use rental_pricing::models::CarCountingRule;
/// use rust_decimal::Decimal;
///
/// let plan = CarCountingRule {
///     id: "half".to_string(),
///     price_percent: Decimal::new(20, 0),
///     deposit_percent: Decimal::new(50, 0),
/// };
///
/// let result = apply_plan(Decimal::new(100, 0), Decimal::new(1000, 0), Some(&plan), 1);
/// assert_eq!(result.adjusted_daily_price, Decimal::new(120, 0));
/// assert_eq!(result.adjusted_deposit, Decimal::new(500, 0));
/// ```
pub fn apply_plan(
    base_daily_price: Decimal,
    base_deposit: Decimal,
    plan: Option<&CarCountingRule>,
    step_number: u32,
) -> PlanAdjustmentResult {
    let (plan_id, price_percent, deposit_percent) = match plan {
        Some(plan) => (
            Some(plan.id.as_str()),
            plan.price_percent,
            plan.deposit_percent,
        ),
        None => (None, Decimal::ZERO, Decimal::ZERO),
    };

    let markup = Decimal::ONE + price_percent / Decimal::ONE_HUNDRED;
    let deposit_factor = Decimal::ONE - deposit_percent / Decimal::ONE_HUNDRED;

    let adjusted_daily_price = base_daily_price * markup;
    let adjusted_deposit = base_deposit * deposit_factor;

    let reasoning = match plan_id {
        Some(id) => format!(
            "Plan '{}': ${} x {} = ${} per day; deposit ${} x {} = ${}",
            id,
            base_daily_price.normalize(),
            markup.normalize(),
            adjusted_daily_price.normalize(),
            base_deposit.normalize(),
            deposit_factor.normalize(),
            adjusted_deposit.normalize()
        ),
        None => format!(
            "No coverage plan selected - ${} per day and full deposit ${}",
            base_daily_price.normalize(),
            base_deposit.normalize()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "plan_adjustment".to_string(),
        rule_name: "Coverage Plan Adjustment".to_string(),
        input: serde_json::json!({
            "base_daily_price": base_daily_price.normalize().to_string(),
            "base_deposit": base_deposit.normalize().to_string(),
            "plan_id": plan_id,
            "price_percent": price_percent.normalize().to_string(),
            "deposit_percent": deposit_percent.normalize().to_string()
        }),
        output: serde_json::json!({
            "adjusted_daily_price": adjusted_daily_price.normalize().to_string(),
            "adjusted_deposit": adjusted_deposit.normalize().to_string()
        }),
        reasoning,
    };

    PlanAdjustmentResult {
        adjusted_daily_price,
        adjusted_deposit,
        audit_step,
    }
}
