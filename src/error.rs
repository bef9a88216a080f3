//! Error types for the rental pricing engine.
//!
//! The calculator itself never fails: it degrades to `None` or zero totals.
//! These errors belong to the configuration and API layers around it.

use thiserror::Error;

use crate::models::CoverageTier;

/// The main error type for the rental pricing engine.
///
/// # Example
///
/// ```
/// use rental_pricing::error::PricingError;
///
/// let error = PricingError::CarNotFound {
///     car_id: "tesla_model_3".to_string(),
/// };
/// assert_eq!(error.to_string(), "Car not found: tesla_model_3");
/// ```
#[derive(Debug, Error)]
pub enum PricingError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but violates a fleet rule.
    #[error("Invalid configuration '{path}': {message}")]
    InvalidConfig {
        /// The file or entity the problem was found in.
        path: String,
        /// A description of the problem.
        message: String,
    },

    /// No car with the given id exists in the fleet.
    #[error("Car not found: {car_id}")]
    CarNotFound {
        /// The requested car id.
        car_id: String,
    },

    /// An add-on id was not found in the extras catalogue.
    #[error("Extra not found: {extra_id}")]
    ExtraNotFound {
        /// The requested extra id.
        extra_id: String,
    },

    /// The car does not offer the requested coverage tier.
    #[error("Coverage plan '{tier}' not offered for car '{car_id}'")]
    PlanNotFound {
        /// The car id.
        car_id: String,
        /// The requested tier.
        tier: CoverageTier,
    },

    /// The requested rental period is not a usable range.
    #[error("Invalid date range: {message}")]
    InvalidDateRange {
        /// A description of what is wrong with the range.
        message: String,
    },

    /// No tariff could be resolved for the car.
    #[error("Pricing unavailable for car '{car_id}'")]
    PricingUnavailable {
        /// The car id.
        car_id: String,
    },
}

/// A type alias for Results that return PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = PricingError::ConfigNotFound {
            path: "/missing/fleet.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/fleet.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PricingError::ConfigParseError {
            path: "/config/cars/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/cars/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_plan_not_found_displays_tier_key() {
        let error = PricingError::PlanNotFound {
            car_id: "fiat_500".to_string(),
            tier: CoverageTier::Coverage100,
        };
        assert_eq!(
            error.to_string(),
            "Coverage plan 'coverage_100' not offered for car 'fiat_500'"
        );
    }

    #[test]
    fn test_invalid_date_range_displays_message() {
        let error = PricingError::InvalidDateRange {
            message: "end_date must be after start_date".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: end_date must be after start_date"
        );
    }

    #[test]
    fn test_pricing_unavailable_displays_car() {
        let error = PricingError::PricingUnavailable {
            car_id: "fiat_500".to_string(),
        };
        assert_eq!(error.to_string(), "Pricing unavailable for car 'fiat_500'");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PricingError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_car_not_found() -> PricingResult<()> {
            Err(PricingError::CarNotFound {
                car_id: "ghost".to_string(),
            })
        }

        fn propagates_error() -> PricingResult<()> {
            returns_car_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
