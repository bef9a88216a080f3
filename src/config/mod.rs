//! Configuration loading and management for the rental pricing engine.
//!
//! This module loads the fleet from YAML files: fleet metadata and pricing
//! context, the add-on catalogue, and one file per car with its tariff
//! bands and coverage plans.
//!
//! # Example
//!
//! ```no_run
//! use rental_pricing::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/fleet").unwrap();
//! println!("Loaded fleet: {}", config.fleet().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, validate_car};
pub use types::{ExtrasConfig, FleetConfig, FleetMetadata};
