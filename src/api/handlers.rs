//! HTTP request handlers for the rental pricing API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{PricingTerms, compute_total};
use crate::config::ConfigLoader;
use crate::error::{PricingError, PricingResult};
use crate::models::{AuditTrace, Quote};

use super::request::QuoteRequest;
use super::response::{ApiError, ApiErrorResponse, CarSummary};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/cars", get(list_cars_handler))
        .route("/cars/:car_id", get(get_car_handler))
        .route("/quote", post(quote_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "rental-pricing",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Handler for GET /cars.
async fn list_cars_handler(State(state): State<AppState>) -> impl IntoResponse {
    let config = state.config();
    let currency = &config.fleet().currency;
    let cars: Vec<CarSummary> = config
        .cars()
        .into_iter()
        .map(|car| CarSummary::new(car, currency))
        .collect();

    Json(cars)
}

/// Handler for GET /cars/:car_id.
async fn get_car_handler(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
) -> Response {
    let config = state.config();
    match config.get_car(&car_id) {
        Ok(car) => Json(CarSummary::new(car, &config.fleet().currency)).into_response(),
        Err(err) => {
            warn!(car_id = %car_id, "Car not found");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /quote.
///
/// Accepts a quote request and returns the priced rental.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    match perform_quote(&request, state.config()) {
        Ok(quote) => {
            info!(
                correlation_id = %correlation_id,
                car_id = %quote.car_id,
                total_days = quote.breakdown.total_days,
                grand_total = %quote.breakdown.grand_total,
                warnings = quote.audit_trace.warnings.len(),
                duration_us = quote.audit_trace.duration_us,
                "Quote completed successfully"
            );
            (StatusCode::OK, Json(quote)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                car_id = %request.car_id,
                error = %err,
                "Quote failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Prices a quote request against the fleet.
fn perform_quote(request: &QuoteRequest, config: &ConfigLoader) -> PricingResult<Quote> {
    let start_time = Instant::now();

    let car = config.get_car(&request.car_id)?;

    let rental_period = request.rental_period();
    if !rental_period.is_valid() {
        return Err(PricingError::InvalidDateRange {
            message: format!(
                "end_date {} must be after start_date {}",
                rental_period.end_date, rental_period.start_date
            ),
        });
    }

    let plan = request
        .coverage
        .map(|tier| config.get_plan(&car.id, tier))
        .transpose()?;
    let add_ons = config.resolve_extras(&request.add_ons)?;

    let fleet = config.fleet();
    let total_days = rental_period.total_days(fleet.day_count_rule);

    let result = compute_total(
        &car.tariffs,
        plan,
        total_days,
        &add_ons,
        &PricingTerms::from(car),
    )
    .ok_or_else(|| PricingError::PricingUnavailable {
        car_id: car.id.clone(),
    })?;

    Ok(Quote {
        quote_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        car_id: car.id.clone(),
        currency: fleet.currency.clone(),
        coverage: request.coverage,
        rental_period,
        tariff_id: result.tariff.id,
        breakdown: result.breakdown,
        audit_trace: AuditTrace {
            steps: result.audit_steps,
            warnings: result.warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}
