//! Rental period model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::calculation::{DayCountRule, compute_total_days_with};

/// The pickup and return instants of a rental.
///
/// A range is only meaningful when `end_date` is after `start_date`;
/// there is no maximum length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Pickup time.
    pub start_date: NaiveDateTime,
    /// Return time.
    pub end_date: NaiveDateTime,
}

impl DateRange {
    /// Creates a new range from pickup and return times.
    pub fn new(start_date: NaiveDateTime, end_date: NaiveDateTime) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Returns true if the return time is strictly after pickup.
    pub fn is_valid(&self) -> bool {
        self.end_date > self.start_date
    }

    /// Returns the number of billable days under the given rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use rental_pricing::calculation::DayCountRule;
    /// use rental_pricing::models::DateRange;
    /// use chrono::NaiveDateTime;
    ///
    /// let range = DateRange::new(
    ///     NaiveDateTime::parse_from_str("2026-03-02 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     NaiveDateTime::parse_from_str("2026-03-05 10:45:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    /// );
    /// assert_eq!(range.total_days(DayCountRule::GraceHour), 3);
    /// ```
    pub fn total_days(&self, rule: DayCountRule) -> i64 {
        compute_total_days_with(rule, self.start_date, self.end_date)
    }
}
