//! Request types for the rental pricing API.
//!
//! This module defines the JSON request structures for the `/quote` endpoint.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{CoverageTier, DateRange};

/// Request body for the `/quote` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The car to price.
    pub car_id: String,
    /// Pickup time.
    pub start_date: NaiveDateTime,
    /// Return time.
    pub end_date: NaiveDateTime,
    /// The selected coverage tier. Omitted means no plan: no markup, full deposit.
    #[serde(default)]
    pub coverage: Option<CoverageTier>,
    /// Ids of the selected extras.
    #[serde(default)]
    pub add_ons: Vec<String>,
}

impl QuoteRequest {
    /// Returns the requested rental period.
    pub fn rental_period(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}
