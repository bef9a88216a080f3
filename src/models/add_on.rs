//! Add-on (extra item) model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How an add-on is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    /// Charged once for every rental day.
    PerDay,
    /// Charged once per booking.
    OneTime,
}

/// An optional extra that can be booked with a car (child seat, GPS, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraItem {
    /// Unique identifier for the extra.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Price per unit.
    pub price: Decimal,
    /// Whether the price is per day or per booking.
    pub pricing_mode: PricingMode,
}

impl ExtraItem {
    /// Returns the number of billable units for a rental of `total_days`.
    ///
    /// Non-positive day counts bill nothing, including one-time extras.
    ///
    /// # Examples
    ///
    /// ```
    /// use rental_pricing::models::{ExtraItem, PricingMode};
    /// use rust_decimal::Decimal;
    ///
    /// let gps = ExtraItem {
    ///     id: "gps".to_string(),
    ///     name: "GPS".to_string(),
    ///     price: Decimal::new(6, 0),
    ///     pricing_mode: PricingMode::PerDay,
    /// };
    /// assert_eq!(gps.quantity(5), 5);
    /// assert_eq!(gps.quantity(0), 0);
    /// ```
    pub fn quantity(&self, total_days: i64) -> i64 {
        if total_days <= 0 {
            return 0;
        }
        match self.pricing_mode {
            PricingMode::PerDay => total_days,
            PricingMode::OneTime => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extra(pricing_mode: PricingMode) -> ExtraItem {
        ExtraItem {
            id: "child_seat".to_string(),
            name: "Child seat".to_string(),
            price: Decimal::new(25, 0),
            pricing_mode,
        }
    }

    #[test]
    fn test_one_time_extra_bills_single_unit() {
        assert_eq!(extra(PricingMode::OneTime).quantity(9), 1);
    }

    #[test]
    fn test_one_time_extra_bills_nothing_without_days() {
        assert_eq!(extra(PricingMode::OneTime).quantity(0), 0);
        assert_eq!(extra(PricingMode::OneTime).quantity(-2), 0);
    }

    #[test]
    fn test_deserialize_extra_without_name() {
        let json = r#"{"id": "gps", "price": "6.00", "pricing_mode": "per_day"}"#;
        let item: ExtraItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.pricing_mode, PricingMode::PerDay);
        assert!(item.name.is_empty());
    }
}
