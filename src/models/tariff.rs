//! Rental tariff model.
//!
//! A tariff is a day-count band with a daily rate. A car owns an ordered set
//! of tariffs that partition the day-count axis.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A day-count band with an associated daily rate.
///
/// A `max_days` of `0` means the band is unbounded ("and above").
///
/// # Example
///
/// ```
/// use rental_pricing::models::RentalTariff;
/// use rust_decimal::Decimal;
///
/// let weekly = RentalTariff {
///     id: "week".to_string(),
///     min_days: 4,
///     max_days: 7,
///     daily_price: Decimal::new(90, 0),
/// };
/// assert!(weekly.matches(5));
/// assert!(!weekly.matches(8));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalTariff {
    /// Unique identifier for the tariff.
    pub id: String,
    /// The smallest day count this band applies to (inclusive).
    pub min_days: u32,
    /// The largest day count this band applies to (inclusive), `0` for unbounded.
    pub max_days: u32,
    /// The daily rate charged within this band.
    pub daily_price: Decimal,
}

impl RentalTariff {
    /// Returns true if the band has no upper limit.
    pub fn is_unbounded(&self) -> bool {
        self.max_days == 0
    }

    /// Returns true if `total_days` falls within this band.
    pub fn matches(&self, total_days: i64) -> bool {
        total_days >= i64::from(self.min_days)
            && (self.is_unbounded() || total_days <= i64::from(self.max_days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tariff(min_days: u32, max_days: u32) -> RentalTariff {
        RentalTariff {
            id: format!("{}_{}", min_days, max_days),
            min_days,
            max_days,
            daily_price: Decimal::new(100, 0),
        }
    }

    #[test]
    fn test_bounded_band_includes_both_ends() {
        let band = tariff(1, 3);
        assert!(band.matches(1));
        assert!(band.matches(3));
        assert!(!band.matches(0));
        assert!(!band.matches(4));
    }

    #[test]
    fn test_unbounded_band_matches_everything_above_min() {
        let band = tariff(8, 0);
        assert!(band.is_unbounded());
        assert!(band.matches(8));
        assert!(band.matches(365));
        assert!(!band.matches(7));
    }

    #[test]
    fn test_deserialize_tariff_with_string_price() {
        let json = r#"{
            "id": "short",
            "min_days": 1,
            "max_days": 3,
            "daily_price": "100.00"
        }"#;

        let tariff: RentalTariff = serde_json::from_str(json).unwrap();
        assert_eq!(tariff.id, "short");
        assert_eq!(tariff.daily_price, Decimal::new(10000, 2));
    }
}
