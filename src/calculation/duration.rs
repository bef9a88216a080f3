//! Rental duration calculation.
//!
//! Converts a pickup/return pair into a whole number of billable days. One
//! grace hour is subtracted before rounding up, so a return up to an hour
//! past a whole-day multiple is not billed as an extra day.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One hour in milliseconds.
pub const GRACE_PERIOD_MS: i64 = 3_600_000;

/// One day in milliseconds.
pub const DAY_MS: i64 = 86_400_000;

/// The rule used to turn elapsed time into billable days.
///
/// Both rules subtract the grace hour and round up. They differ in how
/// the result is floored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCountRule {
    /// `max(ceil((|end - start| - 1h) / 24h), 1)`.
    ///
    /// An exact N-day rental plus up to one hour bills N days; anything
    /// shorter than a day bills one.
    #[default]
    GraceHour,
    /// `ceil((|end - start| - 1h) / 24h) + 1`.
    ///
    /// Bills one day more than [`DayCountRule::GraceHour`] for every range
    /// longer than the grace hour.
    GraceHourPlusOne,
}

/// Integer ceiling division for a positive divisor.
fn ceil_div(numerator: i64, divisor: i64) -> i64 {
    let quotient = numerator / divisor;
    if numerator % divisor > 0 {
        quotient + 1
    } else {
        quotient
    }
}

/// Computes billable days using [`DayCountRule::GraceHour`].
///
/// No validation is performed: reversed ranges are measured by their
/// absolute length and a same-instant range bills one day.
///
/// # Examples
///
/// ```
/// use rental_pricing::calculation::compute_total_days;
/// use chrono::{Duration, NaiveDateTime};
///
/// let pickup = NaiveDateTime::parse_from_str("2026-03-02 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// assert_eq!(compute_total_days(pickup, pickup), 1);
/// assert_eq!(compute_total_days(pickup, pickup + Duration::minutes(24 * 60 + 30)), 1);
/// assert_eq!(compute_total_days(pickup, pickup + Duration::minutes(25 * 60 + 1)), 2);
/// ```
pub fn compute_total_days(start_date: NaiveDateTime, end_date: NaiveDateTime) -> i64 {
    compute_total_days_with(DayCountRule::GraceHour, start_date, end_date)
}

/// Computes billable days under an explicit [`DayCountRule`].
pub fn compute_total_days_with(
    rule: DayCountRule,
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
) -> i64 {
    let diff_ms = (end_date - start_date).num_milliseconds().abs() - GRACE_PERIOD_MS;
    let whole_days = ceil_div(diff_ms, DAY_MS);

    match rule {
        DayCountRule::GraceHour => whole_days.max(1),
        DayCountRule::GraceHourPlusOne => whole_days + 1,
    }
}
