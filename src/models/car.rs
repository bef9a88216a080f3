//! Car model.
//!
//! A car carries everything the calculator needs: its tariff bands, base
//! deposit, car-level discount and the coverage plans it offers.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CarCountingRule, CoverageTier, RentalTariff};

/// A rentable car and its pricing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Unique identifier for the car.
    pub id: String,
    /// Display name (e.g., "Toyota Corolla").
    pub name: String,
    /// Deposit before any coverage plan discount.
    pub base_deposit: Decimal,
    /// Car-level discount percentage (0-100) on the daily rate.
    #[serde(default)]
    pub discount_percent: Decimal,
    /// Day-count bands, sorted ascending by `min_days` once loaded.
    pub tariffs: Vec<RentalTariff>,
    /// Coverage plans keyed by tier.
    #[serde(default)]
    pub coverage_plans: BTreeMap<CoverageTier, CarCountingRule>,
}

impl Car {
    /// Returns the plan offered for `tier`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use rental_pricing::models::{Car, CarCountingRule, CoverageTier};
    /// use rust_decimal::Decimal;
    /// use std::collections::BTreeMap;
    ///
    /// let mut coverage_plans = BTreeMap::new();
    /// coverage_plans.insert(
    ///     CoverageTier::Coverage50,
    ///     CarCountingRule {
    ///         id: "half".to_string(),
    ///         price_percent: Decimal::new(10, 0),
    ///         deposit_percent: Decimal::new(50, 0),
    ///     },
    /// );
    /// let car = Car {
    ///     id: "fiat_500".to_string(),
    ///     name: "Fiat 500".to_string(),
    ///     base_deposit: Decimal::new(500, 0),
    ///     discount_percent: Decimal::ZERO,
    ///     tariffs: vec![],
    ///     coverage_plans,
    /// };
    /// assert!(car.plan(CoverageTier::Coverage50).is_some());
    /// assert!(car.plan(CoverageTier::Coverage100).is_none());
    /// ```
    pub fn plan(&self, tier: CoverageTier) -> Option<&CarCountingRule> {
        self.coverage_plans.get(&tier)
    }

    /// Returns true if the car carries a non-zero discount.
    pub fn has_discount(&self) -> bool {
        self.discount_percent > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_car_with_keyed_plans() {
        let yaml = r#"
id: corolla
name: Toyota Corolla
base_deposit: "1000"
tariffs:
  - id: short
    min_days: 1
    max_days: 3
    daily_price: "100"
coverage_plans:
  deposit:
    id: corolla_deposit
    price_percent: "0"
    deposit_percent: "0"
  coverage_100:
    id: corolla_full
    price_percent: "30"
    deposit_percent: "100"
"#;

        let car: Car = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(car.id, "corolla");
        assert_eq!(car.discount_percent, Decimal::ZERO);
        assert!(!car.has_discount());
        assert_eq!(car.tariffs.len(), 1);
        assert_eq!(
            car.plan(CoverageTier::Coverage100).unwrap().id,
            "corolla_full"
        );
        assert!(car.plan(CoverageTier::Coverage50).is_none());
    }

    #[test]
    fn test_car_with_discount() {
        let car = Car {
            id: "golf".to_string(),
            name: "VW Golf".to_string(),
            base_deposit: Decimal::new(800, 0),
            discount_percent: Decimal::new(10, 0),
            tariffs: vec![],
            coverage_plans: BTreeMap::new(),
        };
        assert!(car.has_discount());
    }
}
