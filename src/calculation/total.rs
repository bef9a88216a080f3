//! Total price calculation.
//!
//! Composes tariff selection, plan adjustment and the car discount with the
//! selected add-ons into a [`PriceBreakdown`].

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::models::{
    AddOnCharge, AuditStep, AuditWarning, Car, CarCountingRule, ExtraItem, PriceBreakdown,
    RentalTariff,
};

use super::discount::apply_discount;
use super::plan_adjustment::apply_plan;
use super::tariff_selection::{TariffMatch, select_tariff};

/// Warning code emitted when an add-on id is selected more than once.
pub const DUPLICATE_ADD_ON_WARNING: &str = "DUPLICATE_ADD_ON";

/// Warning code emitted when the day count is zero or negative.
pub const NON_POSITIVE_DAYS_WARNING: &str = "NON_POSITIVE_DAYS";

/// Car-level amounts that feed the calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingTerms {
    /// Deposit before the plan discount.
    pub base_deposit: Decimal,
    /// Discount percentage (0-100) on the plan-adjusted daily rate.
    pub discount_percent: Decimal,
}

impl From<&Car> for PricingTerms {
    fn from(car: &Car) -> Self {
        Self {
            base_deposit: car.base_deposit,
            discount_percent: car.discount_percent,
        }
    }
}

/// The result of a total calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalCalculationResult {
    /// The computed prices.
    pub breakdown: PriceBreakdown,
    /// The tariff band the daily rate came from.
    pub tariff: RentalTariff,
    /// How the tariff was chosen.
    pub tariff_match: TariffMatch,
    /// Every step taken, in order.
    pub audit_steps: Vec<AuditStep>,
    /// Non-fatal anomalies met along the way.
    pub warnings: Vec<AuditWarning>,
}

/// Computes the full price breakdown for a rental.
///
/// 1. Select the tariff band for `total_days`
/// 2. Apply the coverage plan (markup on the rate, discount on the deposit)
/// 3. Apply the car discount when it is non-zero, rounding to whole units
/// 4. `rental_total = daily_price * total_days`
/// 5. Add-ons: `price * total_days` per day, `price` once otherwise;
///    repeated ids are charged once
/// 6. `grand_total = rental_total + add_ons_total`; the deposit is reported
///    separately and never included
///
/// Non-positive `total_days` yields zero rental, add-on and grand totals.
/// The calculation is pure: identical inputs give identical results.
///
/// # Returns
///
/// `None` if `tariffs` is empty, meaning pricing is unavailable.
///
/// # Examples
///
/// ```
/// use rental_pricing::calculation::{PricingTerms, compute_total};
/// use rental_pricing::models::{ExtraItem, PricingMode, RentalTariff};
/// use rust_decimal::Decimal;
///
/// let band = |id: &str, min_days, max_days, price| RentalTariff {
///     id: id.to_string(),
///     min_days,
///     max_days,
///     daily_price: Decimal::new(price, 0),
/// };
/// let tariffs = vec![band("short", 1, 3, 100), band("week", 4, 7, 90), band("long", 8, 0, 80)];
/// let gps = ExtraItem {
///     id: "gps".to_string(),
///     name: "GPS".to_string(),
///     price: Decimal::new(6, 0),
///     pricing_mode: PricingMode::PerDay,
/// };
/// let terms = PricingTerms {
///     base_deposit: Decimal::new(1000, 0),
///     discount_percent: Decimal::ZERO,
/// };
///
/// let result = compute_total(&tariffs, None, 5, &[gps], &terms).unwrap();
/// assert_eq!(result.breakdown.rental_total, Decimal::new(450, 0));
/// assert_eq!(result.breakdown.add_ons_total, Decimal::new(30, 0));
/// assert_eq!(result.breakdown.grand_total, Decimal::new(480, 0));
/// ```
pub fn compute_total(
    tariffs: &[RentalTariff],
    plan: Option<&CarCountingRule>,
    total_days: i64,
    add_ons: &[ExtraItem],
    terms: &PricingTerms,
) -> Option<TotalCalculationResult> {
    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let selection = select_tariff(tariffs, total_days, step_number)?;
    audit_steps.push(selection.audit_step);
    warnings.extend(selection.warning);
    step_number += 1;

    let adjustment = apply_plan(
        selection.tariff.daily_price,
        terms.base_deposit,
        plan,
        step_number,
    );
    audit_steps.push(adjustment.audit_step);
    step_number += 1;

    let daily_price = if terms.discount_percent > Decimal::ZERO {
        let discount = apply_discount(
            adjustment.adjusted_daily_price,
            terms.discount_percent,
            step_number,
        );
        audit_steps.push(discount.audit_step);
        step_number += 1;
        discount.final_daily_price
    } else {
        adjustment.adjusted_daily_price
    };

    let billable = total_days > 0;
    if !billable {
        warnings.push(AuditWarning::new(
            NON_POSITIVE_DAYS_WARNING,
            format!(
                "Rental has {} billable days; totals are zero until a valid range is selected",
                total_days
            ),
            "high",
        ));
    }

    let rental_total = if billable {
        daily_price * Decimal::from(total_days)
    } else {
        Decimal::ZERO
    };

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "rental_total".to_string(),
        rule_name: "Rental Total".to_string(),
        input: serde_json::json!({
            "daily_price": daily_price.normalize().to_string(),
            "total_days": total_days
        }),
        output: serde_json::json!({
            "rental_total": rental_total.normalize().to_string()
        }),
        reasoning: if billable {
            format!(
                "${} x {} days = ${}",
                daily_price.normalize(),
                total_days,
                rental_total.normalize()
            )
        } else {
            format!("No billable days ({}); rental total is $0", total_days)
        },
    });
    step_number += 1;

    let mut seen: HashSet<&str> = HashSet::new();
    let mut add_on_charges: Vec<AddOnCharge> = Vec::new();
    for item in add_ons {
        if !seen.insert(item.id.as_str()) {
            warnings.push(AuditWarning::new(
                DUPLICATE_ADD_ON_WARNING,
                format!("Add-on '{}' selected more than once; charged once", item.id),
                "low",
            ));
            continue;
        }
        if !billable {
            continue;
        }
        let quantity = item.quantity(total_days);
        add_on_charges.push(AddOnCharge {
            id: item.id.clone(),
            pricing_mode: item.pricing_mode,
            unit_price: item.price,
            quantity,
            amount: item.price * Decimal::from(quantity),
        });
    }
    let add_ons_total: Decimal = add_on_charges.iter().map(|c| c.amount).sum();

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "add_ons_total".to_string(),
        rule_name: "Add-ons Total".to_string(),
        input: serde_json::json!({
            "selected": add_ons.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(),
            "total_days": total_days
        }),
        output: serde_json::json!({
            "charged": add_on_charges.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
            "add_ons_total": add_ons_total.normalize().to_string()
        }),
        reasoning: format!(
            "{} add-on(s) charged for a total of ${}",
            add_on_charges.len(),
            add_ons_total.normalize()
        ),
    });
    step_number += 1;

    let grand_total = rental_total + add_ons_total;

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "grand_total".to_string(),
        rule_name: "Grand Total".to_string(),
        input: serde_json::json!({
            "rental_total": rental_total.normalize().to_string(),
            "add_ons_total": add_ons_total.normalize().to_string(),
            "deposit_amount": adjustment.adjusted_deposit.normalize().to_string()
        }),
        output: serde_json::json!({
            "grand_total": grand_total.normalize().to_string()
        }),
        reasoning: format!(
            "${} + ${} = ${} (deposit ${} held separately)",
            rental_total.normalize(),
            add_ons_total.normalize(),
            grand_total.normalize(),
            adjustment.adjusted_deposit.normalize()
        ),
    });

    Some(TotalCalculationResult {
        breakdown: PriceBreakdown {
            total_days,
            daily_price,
            deposit_amount: adjustment.adjusted_deposit,
            rental_total,
            add_ons_total,
            grand_total,
            add_on_charges,
        },
        tariff: selection.tariff,
        tariff_match: selection.match_kind,
        audit_steps,
        warnings,
    })
}
