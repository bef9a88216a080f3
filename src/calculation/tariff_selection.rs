//! Tariff band selection.
//!
//! Picks the daily rate that applies to a rental of a given length from a
//! car's tariff bands, and checks a band list for configuration gaps.

use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, AuditWarning, RentalTariff};

/// Warning code emitted when no band matched and the last band was used.
pub const TARIFF_FALLBACK_WARNING: &str = "TARIFF_FALLBACK";

/// How the selected tariff was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TariffMatch {
    /// No usable day count yet; the first band is shown as the base rate.
    Placeholder,
    /// The day count falls within the band.
    Band,
    /// No band covers the day count; the last band was used.
    Fallback,
}

/// The result of selecting a tariff, including the band and audit step.
#[derive(Debug, Clone)]
pub struct TariffSelectionResult {
    /// The selected tariff.
    pub tariff: RentalTariff,
    /// How the tariff was chosen.
    pub match_kind: TariffMatch,
    /// Set when the selection had to fall back.
    pub warning: Option<AuditWarning>,
    /// The audit step recording this selection.
    pub audit_step: AuditStep,
}

/// Returns the tariffs sorted ascending by `min_days`.
///
/// The sort is stable, so bands sharing a `min_days` keep their list order.
pub fn sort_tariffs(tariffs: &[RentalTariff]) -> Vec<&RentalTariff> {
    let mut sorted: Vec<&RentalTariff> = tariffs.iter().collect();
    sorted.sort_by_key(|t| t.min_days);
    sorted
}

/// Selects the tariff band that applies to `total_days`.
///
/// Bands are sorted by `min_days` first. Then:
/// 1. If `total_days <= 0`, the first band is returned as a placeholder rate
/// 2. Otherwise the first band with `min_days <= total_days <= max_days`
///    (or an unbounded band) is returned
/// 3. If no band matches, the last band is returned with a warning
///
/// # Returns
///
/// `None` if `tariffs` is empty, meaning pricing is unavailable.
///
/// # Examples
///
/// ```
/// use rental_pricing::calculation::{TariffMatch, select_tariff};
/// use rental_pricing::models::RentalTariff;
/// use rust_decimal::Decimal;
///
/// let band = |id: &str, min_days, max_days, price| RentalTariff {
///     id: id.to_string(),
///     min_days,
///     max_days,
///     daily_price: Decimal::new(price, 0),
/// };
/// let tariffs = vec![band("short", 1, 3, 100), band("week", 4, 7, 90), band("long", 8, 0, 80)];
///
/// let result = select_tariff(&tariffs, 4, 1).unwrap();
/// assert_eq!(result.tariff.daily_price, Decimal::new(90, 0));
/// assert_eq!(result.match_kind, TariffMatch::Band);
///
/// assert!(select_tariff(&[], 4, 1).is_none());
/// ```
pub fn select_tariff(
    tariffs: &[RentalTariff],
    total_days: i64,
    step_number: u32,
) -> Option<TariffSelectionResult> {
    let sorted = sort_tariffs(tariffs);
    let first = *sorted.first()?;

    let (tariff, match_kind) = if total_days <= 0 {
        (first, TariffMatch::Placeholder)
    } else {
        match sorted.iter().find(|t| t.matches(total_days)) {
            Some(tariff) => (*tariff, TariffMatch::Band),
            // `first` exists, so `last` does too
            None => (*sorted.last()?, TariffMatch::Fallback),
        }
    };

    let reasoning = match match_kind {
        TariffMatch::Placeholder => format!(
            "No billable days ({}); showing first band '{}' at ${} as the base rate",
            total_days, tariff.id, tariff.daily_price
        ),
        TariffMatch::Band => format!(
            "{} days falls within band '{}' ({}-{}) at ${} per day",
            total_days,
            tariff.id,
            tariff.min_days,
            if tariff.is_unbounded() {
                "unbounded".to_string()
            } else {
                tariff.max_days.to_string()
            },
            tariff.daily_price
        ),
        TariffMatch::Fallback => format!(
            "No band covers {} days; falling back to last band '{}' at ${} per day",
            total_days, tariff.id, tariff.daily_price
        ),
    };

    let warning = (match_kind == TariffMatch::Fallback).then(|| {
        AuditWarning::new(
            TARIFF_FALLBACK_WARNING,
            format!(
                "No tariff band covers {} days; used band '{}'",
                total_days, tariff.id
            ),
            "medium",
        )
    });

    let audit_step = AuditStep {
        step_number,
        rule_id: "tariff_selection".to_string(),
        rule_name: "Tariff Selection".to_string(),
        input: serde_json::json!({
            "total_days": total_days,
            "band_count": sorted.len()
        }),
        output: serde_json::json!({
            "tariff_id": tariff.id,
            "daily_price": tariff.daily_price.to_string(),
            "match": match_kind
        }),
        reasoning,
    };

    Some(TariffSelectionResult {
        tariff: tariff.clone(),
        match_kind,
        warning,
        audit_step,
    })
}

/// A configuration problem found in a car's tariff bands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TariffBandIssue {
    /// Day counts between two bands are not covered.
    Gap {
        /// First uncovered day count.
        from_days: u32,
        /// Last uncovered day count.
        to_days: u32,
    },
    /// Two bands both cover a day count.
    Overlap {
        /// The earlier band.
        first: String,
        /// The later band.
        second: String,
    },
    /// An unbounded band is followed by further bands.
    UnboundedNotLast {
        /// The unbounded band.
        tariff_id: String,
    },
    /// A band's `max_days` is below its `min_days`.
    InvertedBand {
        /// The offending band.
        tariff_id: String,
    },
}

/// Checks that bands are contiguous, non-overlapping and well formed.
///
/// Bands are checked in `min_days` order starting from day 1. The last band
/// is not required to be unbounded.
pub fn validate_tariff_bands(tariffs: &[RentalTariff]) -> Vec<TariffBandIssue> {
    let sorted = sort_tariffs(tariffs);
    let mut issues = Vec::new();
    let mut next_uncovered: u32 = 1;
    let mut unbounded_seen: Option<&str> = None;
    let mut previous: Option<&RentalTariff> = None;

    for tariff in sorted {
        if !tariff.is_unbounded() && tariff.max_days < tariff.min_days {
            issues.push(TariffBandIssue::InvertedBand {
                tariff_id: tariff.id.clone(),
            });
            continue;
        }

        if let Some(id) = unbounded_seen {
            issues.push(TariffBandIssue::UnboundedNotLast {
                tariff_id: id.to_string(),
            });
            break;
        }

        if tariff.min_days > next_uncovered {
            issues.push(TariffBandIssue::Gap {
                from_days: next_uncovered,
                to_days: tariff.min_days - 1,
            });
        } else if tariff.min_days < next_uncovered {
            if let Some(prev) = previous {
                issues.push(TariffBandIssue::Overlap {
                    first: prev.id.clone(),
                    second: tariff.id.clone(),
                });
            }
        }

        if tariff.is_unbounded() {
            unbounded_seen = Some(tariff.id.as_str());
        } else {
            next_uncovered = next_uncovered.max(tariff.max_days.saturating_add(1));
        }
        previous = Some(tariff);
    }

    issues
}
