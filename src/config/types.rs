//! Configuration types for the fleet.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashMap;

use serde::Deserialize;

use crate::calculation::DayCountRule;
use crate::models::{Car, ExtraItem};

/// Metadata about the fleet and its pricing context.
///
/// Passed explicitly to everything that formats or counts, rather than
/// living in global state.
#[derive(Debug, Clone, Deserialize)]
pub struct FleetMetadata {
    /// The human-readable name of the fleet.
    pub name: String,
    /// ISO 4217 currency code all prices are expressed in.
    pub currency: String,
    /// How rental periods are turned into billable days.
    #[serde(default)]
    pub day_count_rule: DayCountRule,
}

/// Extras catalogue file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtrasConfig {
    /// All extras that can be added to a booking.
    #[serde(default)]
    pub extras: Vec<ExtraItem>,
}

/// The complete fleet configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct FleetConfig {
    /// Fleet metadata.
    metadata: FleetMetadata,
    /// Cars keyed by id.
    cars: HashMap<String, Car>,
    /// Extras keyed by id.
    extras: HashMap<String, ExtraItem>,
}

impl FleetConfig {
    /// Creates a new FleetConfig from its component parts.
    ///
    /// Each car's tariffs are sorted ascending by `min_days`.
    pub fn new(metadata: FleetMetadata, cars: Vec<Car>, extras: Vec<ExtraItem>) -> Self {
        let cars = cars
            .into_iter()
            .map(|mut car| {
                car.tariffs.sort_by_key(|t| t.min_days);
                (car.id.clone(), car)
            })
            .collect();
        let extras = extras.into_iter().map(|e| (e.id.clone(), e)).collect();

        Self {
            metadata,
            cars,
            extras,
        }
    }

    /// Returns the fleet metadata.
    pub fn fleet(&self) -> &FleetMetadata {
        &self.metadata
    }

    /// Returns all cars.
    pub fn cars(&self) -> &HashMap<String, Car> {
        &self.cars
    }

    /// Returns all extras.
    pub fn extras(&self) -> &HashMap<String, ExtraItem> {
        &self.extras
    }
}
