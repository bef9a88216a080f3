//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the fleet
//! configuration from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::calculation::{TariffBandIssue, validate_tariff_bands};
use crate::error::{PricingError, PricingResult};
use crate::models::{Car, CarCountingRule, CoverageTier, ExtraItem};

use super::types::{ExtrasConfig, FleetConfig, FleetMetadata};

/// Loads and provides access to the fleet configuration.
///
/// # Directory Structure
///
/// ```text
/// config/fleet/
/// ├── fleet.yaml      # Fleet metadata and pricing context
/// ├── extras.yaml     # Add-on catalogue
/// └── cars/
///     └── corolla.yaml  # One car per file
/// ```
///
/// # Example
///
/// ```no_run
/// use rental_pricing::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/fleet")?;
/// let car = loader.get_car("toyota_corolla")?;
/// println!("{} from {} per day", car.name, car.tariffs[0].daily_price);
/// # Ok::<(), rental_pricing::error::PricingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: FleetConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing, or `cars/` holds no car files (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - A car breaks a fleet rule (`InvalidConfig`)
    ///
    /// Tariff band gaps and overlaps are logged but do not fail the load.
    pub fn load<P: AsRef<Path>>(path: P) -> PricingResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<FleetMetadata>(&path.join("fleet.yaml"))?;
        let extras = Self::load_yaml::<ExtrasConfig>(&path.join("extras.yaml"))?;
        let cars = Self::load_cars(&path.join("cars"))?;

        info!(
            fleet = %metadata.name,
            currency = %metadata.currency,
            cars = cars.len(),
            extras = extras.extras.len(),
            "Loaded fleet configuration"
        );

        Ok(Self {
            config: FleetConfig::new(metadata, cars, extras.extras),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PricingResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PricingError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PricingError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all car files from the cars directory.
    fn load_cars(cars_dir: &Path) -> PricingResult<Vec<Car>> {
        let cars_dir_str = cars_dir.display().to_string();

        let entries = fs::read_dir(cars_dir).map_err(|_| PricingError::ConfigNotFound {
            path: cars_dir_str.clone(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| PricingError::ConfigNotFound {
                path: cars_dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut cars = Vec::new();
        let mut ids = HashSet::new();
        for path in paths {
            let path_str = path.display().to_string();
            let car = Self::load_yaml::<Car>(&path)?;
            validate_car(&car, &path_str)?;
            if !ids.insert(car.id.clone()) {
                return Err(PricingError::InvalidConfig {
                    path: path_str,
                    message: format!("duplicate car id '{}'", car.id),
                });
            }
            for issue in validate_tariff_bands(&car.tariffs) {
                warn!(car_id = %car.id, issue = %describe_band_issue(&issue), "Tariff band issue");
            }
            cars.push(car);
        }

        if cars.is_empty() {
            return Err(PricingError::ConfigNotFound {
                path: format!("{} (no car files found)", cars_dir_str),
            });
        }

        Ok(cars)
    }

    /// Returns the underlying fleet configuration.
    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    /// Returns the fleet metadata.
    pub fn fleet(&self) -> &FleetMetadata {
        self.config.fleet()
    }

    /// Returns all cars sorted by id.
    pub fn cars(&self) -> Vec<&Car> {
        let mut cars: Vec<&Car> = self.config.cars().values().collect();
        cars.sort_by(|a, b| a.id.cmp(&b.id));
        cars
    }

    /// Gets a car by its id.
    pub fn get_car(&self, car_id: &str) -> PricingResult<&Car> {
        self.config
            .cars()
            .get(car_id)
            .ok_or_else(|| PricingError::CarNotFound {
                car_id: car_id.to_string(),
            })
    }

    /// Gets an extra by its id.
    pub fn get_extra(&self, extra_id: &str) -> PricingResult<&ExtraItem> {
        self.config
            .extras()
            .get(extra_id)
            .ok_or_else(|| PricingError::ExtraNotFound {
                extra_id: extra_id.to_string(),
            })
    }

    /// Resolves a list of extra ids, preserving order.
    ///
    /// Repeated ids are returned repeatedly; the calculator charges them once.
    pub fn resolve_extras(&self, extra_ids: &[String]) -> PricingResult<Vec<ExtraItem>> {
        extra_ids
            .iter()
            .map(|id| self.get_extra(id).cloned())
            .collect()
    }

    /// Gets a car's coverage plan for a tier.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rental_pricing::config::ConfigLoader;
    /// use rental_pricing::models::CoverageTier;
    ///
    /// let loader = ConfigLoader::load("./config/fleet")?;
    /// let plan = loader.get_plan("toyota_corolla", CoverageTier::Coverage50)?;
    /// println!("+{}% per day", plan.price_percent);
    /// # Ok::<(), rental_pricing::error::PricingError>(())
    /// ```
    pub fn get_plan(&self, car_id: &str, tier: CoverageTier) -> PricingResult<&CarCountingRule> {
        self.get_car(car_id)?
            .plan(tier)
            .ok_or_else(|| PricingError::PlanNotFound {
                car_id: car_id.to_string(),
                tier,
            })
    }
}

/// Checks a car against the fleet rules.
///
/// A car must have at least one tariff, non-negative prices and deposit,
/// a discount between 0 and 100, and plan percentages where the price
/// markup is non-negative and the deposit discount is between 0 and 100.
pub fn validate_car(car: &Car, path: &str) -> PricingResult<()> {
    let invalid = |message: String| PricingError::InvalidConfig {
        path: path.to_string(),
        message,
    };
    let hundred = Decimal::ONE_HUNDRED;

    if car.tariffs.is_empty() {
        return Err(invalid(format!("car '{}' has no tariffs", car.id)));
    }
    if car.base_deposit < Decimal::ZERO {
        return Err(invalid(format!("car '{}' has a negative deposit", car.id)));
    }
    if car.discount_percent < Decimal::ZERO || car.discount_percent > hundred {
        return Err(invalid(format!(
            "car '{}' discount_percent {} is outside 0-100",
            car.id, car.discount_percent
        )));
    }
    if let Some(tariff) = car.tariffs.iter().find(|t| t.daily_price < Decimal::ZERO) {
        return Err(invalid(format!(
            "tariff '{}' has a negative daily_price",
            tariff.id
        )));
    }
    for (tier, plan) in &car.coverage_plans {
        if plan.price_percent < Decimal::ZERO {
            return Err(invalid(format!(
                "plan '{}' ({}) has a negative price_percent",
                plan.id, tier
            )));
        }
        if plan.deposit_percent < Decimal::ZERO || plan.deposit_percent > hundred {
            return Err(invalid(format!(
                "plan '{}' ({}) deposit_percent {} is outside 0-100",
                plan.id, tier, plan.deposit_percent
            )));
        }
    }

    Ok(())
}

fn describe_band_issue(issue: &TariffBandIssue) -> String {
    match issue {
        TariffBandIssue::Gap { from_days, to_days } => {
            format!("days {}-{} are not covered by any band", from_days, to_days)
        }
        TariffBandIssue::Overlap { first, second } => {
            format!("bands '{}' and '{}' overlap", first, second)
        }
        TariffBandIssue::UnboundedNotLast { tariff_id } => {
            format!("unbounded band '{}' is followed by other bands", tariff_id)
        }
        TariffBandIssue::InvertedBand { tariff_id } => {
            format!("band '{}' has max_days below min_days", tariff_id)
        }
    }
}
