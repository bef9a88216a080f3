//! Car-level discount.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::AuditStep;

/// The result of applying a car discount, including the audit step.
#[derive(Debug, Clone)]
pub struct DiscountResult {
    /// The daily rate after discount, rounded to whole currency units.
    pub final_daily_price: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies a percentage discount to a plan-adjusted daily rate.
///
/// `final_daily_price = round(adjusted_daily_price * (1 - discount_percent / 100))`,
/// rounded to the nearest whole unit with halves rounded away from zero.
///
/// # Examples
///
/// ```
/// use rental_pricing::calculation::apply_discount;
/// use rust_decimal::Decimal;
///
/// let result = apply_discount(Decimal::new(120, 0), Decimal::new(10, 0), 1);
/// assert_eq!(result.final_daily_price, Decimal::new(108, 0));
/// ```
pub fn apply_discount(
    adjusted_daily_price: Decimal,
    discount_percent: Decimal,
    step_number: u32,
) -> DiscountResult {
    let factor = Decimal::ONE - discount_percent / Decimal::ONE_HUNDRED;
    let discounted = adjusted_daily_price * factor;
    let final_daily_price =
        discounted.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    let audit_step = AuditStep {
        step_number,
        rule_id: "car_discount".to_string(),
        rule_name: "Car Discount".to_string(),
        input: serde_json::json!({
            "adjusted_daily_price": adjusted_daily_price.normalize().to_string(),
            "discount_percent": discount_percent.normalize().to_string()
        }),
        output: serde_json::json!({
            "final_daily_price": final_daily_price.normalize().to_string()
        }),
        reasoning: format!(
            "round(${} x {}) = ${}",
            adjusted_daily_price.normalize(),
            factor.normalize(),
            final_daily_price.normalize()
        ),
    };

    DiscountResult {
        final_daily_price,
        audit_step,
    }
}
