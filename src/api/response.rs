//! Response types for the rental pricing API.
//!
//! This module defines the car listing bodies, the error response
//! structures, and the mapping from engine errors to HTTP statuses.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::select_tariff;
use crate::error::PricingError;
use crate::models::{Car, CarCountingRule, CoverageTier, RentalTariff};

/// A car as listed by `/cars`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarSummary {
    /// The car id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Currency of all amounts.
    pub currency: String,
    /// Rate shown before a period is chosen (the first band's rate).
    pub base_daily_price: Option<Decimal>,
    /// Deposit before any coverage plan.
    pub base_deposit: Decimal,
    /// Car-level discount percentage.
    pub discount_percent: Decimal,
    /// Tariff bands in ascending order.
    pub tariffs: Vec<RentalTariff>,
    /// Coverage plans keyed by tier.
    pub coverage_plans: BTreeMap<CoverageTier, CarCountingRule>,
}

impl CarSummary {
    /// Builds a summary for a car priced in `currency`.
    pub fn new(car: &Car, currency: &str) -> Self {
        let base_daily_price = select_tariff(&car.tariffs, 0, 1).map(|s| s.tariff.daily_price);

        Self {
            id: car.id.clone(),
            name: car.name.clone(),
            currency: currency.to_string(),
            base_daily_price,
            base_deposit: car.base_deposit,
            discount_percent: car.discount_percent,
            tariffs: car.tariffs.clone(),
            coverage_plans: car.coverage_plans.clone(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PricingError> for ApiErrorResponse {
    fn from(error: PricingError) -> Self {
        let message = error.to_string();
        match error {
            PricingError::ConfigNotFound { .. }
            | PricingError::ConfigParseError { .. }
            | PricingError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            PricingError::CarNotFound { car_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "CAR_NOT_FOUND",
                    message,
                    format!("The car '{}' is not part of this fleet", car_id),
                ),
            },
            PricingError::ExtraNotFound { extra_id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "EXTRA_NOT_FOUND",
                    message,
                    format!("The extra '{}' is not in the catalogue", extra_id),
                ),
            },
            PricingError::PlanNotFound { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "PLAN_NOT_FOUND",
                    message,
                    "Choose one of the coverage tiers listed for this car",
                ),
            },
            PricingError::InvalidDateRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_DATE_RANGE", message),
            },
            PricingError::PricingUnavailable { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "PRICING_UNAVAILABLE",
                    message,
                    "The car has no tariff configured",
                ),
            },
        }
    }
}
