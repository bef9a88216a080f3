//! Coverage plan models.
//!
//! A coverage plan (deposit/insurance tier) marks up the daily rate and
//! discounts the deposit. Plans are addressed by [`CoverageTier`], a stable
//! key, rather than by their position in a list.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The selectable coverage tiers.
///
/// Ordered from highest deposit / lowest price to lowest deposit / highest price.
///
/// # Example
///
/// ```
/// use rental_pricing::models::CoverageTier;
///
/// let tier: CoverageTier = "coverage_50".parse().unwrap();
/// assert_eq!(tier, CoverageTier::Coverage50);
/// assert_eq!(tier.to_string(), "coverage_50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageTier {
    /// Full deposit, no price markup.
    Deposit,
    /// Half coverage: reduced deposit, moderate markup.
    #[serde(rename = "coverage_50")]
    Coverage50,
    /// Full coverage: lowest deposit, highest markup.
    #[serde(rename = "coverage_100")]
    Coverage100,
}

impl CoverageTier {
    /// All tiers in display order.
    pub const ALL: [CoverageTier; 3] = [
        CoverageTier::Deposit,
        CoverageTier::Coverage50,
        CoverageTier::Coverage100,
    ];

    /// Returns the stable key used in configuration and requests.
    pub fn key(&self) -> &'static str {
        match self {
            CoverageTier::Deposit => "deposit",
            CoverageTier::Coverage50 => "coverage_50",
            CoverageTier::Coverage100 => "coverage_100",
        }
    }
}

impl fmt::Display for CoverageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CoverageTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CoverageTier::ALL
            .into_iter()
            .find(|tier| tier.key() == s)
            .ok_or_else(|| format!("unknown coverage tier: {}", s))
    }
}

/// A coverage plan record.
///
/// `price_percent` is a markup applied to the daily rate and
/// `deposit_percent` a discount applied to the base deposit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarCountingRule {
    /// Unique identifier for the plan.
    pub id: String,
    /// Percentage markup on the daily rate.
    pub price_percent: Decimal,
    /// Percentage discount on the base deposit.
    pub deposit_percent: Decimal,
}
