//! Integration tests for the rental pricing engine.
//!
//! This test suite drives the HTTP router against the sample fleet in
//! `config/fleet` and covers:
//! - Tariff band selection by rental length
//! - Coverage plans (markup and deposit discount)
//! - Car-level discounts with rounding
//! - The grace hour in day counting
//! - Per-day and one-time add-ons
//! - Fleet browsing endpoints
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use rental_pricing::api::{AppState, create_router};
use rental_pricing::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/fleet").expect("Failed to load config");
    create_router(AppState::new(config))
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_quote(body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/quote")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(create_router_for_test(), request).await
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(create_router_for_test(), request).await
}

fn create_request(
    car_id: &str,
    start_date: &str,
    end_date: &str,
    coverage: Option<&str>,
    add_ons: Vec<&str>,
) -> Value {
    json!({
        "car_id": car_id,
        "start_date": start_date,
        "end_date": end_date,
        "coverage": coverage,
        "add_ons": add_ons
    })
}

fn assert_amount(result: &Value, field: &str, expected: &str) {
    let actual = result["breakdown"][field].as_str().unwrap();
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {} {}, got {}",
        field,
        expected,
        actual
    );
}

fn assert_total_days(result: &Value, expected: i64) {
    assert_eq!(result["breakdown"]["total_days"].as_i64().unwrap(), expected);
}

fn warning_codes(result: &Value) -> Vec<String> {
    result["audit_trace"]["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["code"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// SECTION 1: Tariff bands
// =============================================================================

#[tokio::test]
async fn test_five_day_rental_with_gps() {
    // Corolla week band: 90 x 5 = 450, GPS 6 x 5 = 30
    let (status, result) = post_quote(create_request(
        "toyota_corolla",
        "2026-03-02T10:00:00",
        "2026-03-07T10:00:00",
        Some("deposit"),
        vec!["gps"],
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_total_days(&result, 5);
    assert_eq!(result["tariff_id"], "corolla_week");
    assert_amount(&result, "daily_price", "90");
    assert_amount(&result, "rental_total", "450");
    assert_amount(&result, "add_ons_total", "30");
    assert_amount(&result, "grand_total", "480");
    assert_amount(&result, "deposit_amount", "1000");
    assert_eq!(result["currency"], "EUR");
    assert_eq!(result["start_date"], "2026-03-02T10:00:00");
    assert_eq!(result["end_date"], "2026-03-07T10:00:00");
}

#[tokio::test]
async fn test_short_band_upper_bound() {
    let (status, result) = post_quote(create_request(
        "toyota_corolla",
        "2026-03-02T10:00:00",
        "2026-03-05T10:00:00",
        None,
        vec![],
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_total_days(&result, 3);
    assert_eq!(result["tariff_id"], "corolla_short");
    assert_amount(&result, "grand_total", "300");
}

#[tokio::test]
async fn test_unbounded_band_for_long_rental() {
    let (status, result) = post_quote(create_request(
        "toyota_corolla",
        "2026-03-01T09:00:00",
        "2026-03-31T09:00:00",
        None,
        vec![],
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_total_days(&result, 30);
    assert_eq!(result["tariff_id"], "corolla_long");
    assert_amount(&result, "rental_total", "2400");
}

// =============================================================================
// SECTION 2: Coverage plans
// =============================================================================

#[tokio::test]
async fn test_coverage_50_marks_up_rate_and_halves_deposit() {
    // 100 x 1.2 = 120 per day, deposit 1000 x 0.5 = 500
    let (status, result) = post_quote(create_request(
        "toyota_corolla",
        "2026-03-02T10:00:00",
        "2026-03-05T10:00:00",
        Some("coverage_50"),
        vec![],
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result, "daily_price", "120");
    assert_amount(&result, "rental_total", "360");
    assert_amount(&result, "deposit_amount", "500");
    assert_amount(&result, "grand_total", "360");
    assert_eq!(result["coverage"], "coverage_50");
}

#[tokio::test]
async fn test_coverage_100_removes_deposit() {
    // 80 x 1.35 = 108 per day over 8 days
    let (status, result) = post_quote(create_request(
        "toyota_corolla",
        "2026-03-02T10:00:00",
        "2026-03-10T10:00:00",
        Some("coverage_100"),
        vec![],
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_total_days(&result, 8);
    assert_amount(&result, "daily_price", "108");
    assert_amount(&result, "rental_total", "864");
    assert_amount(&result, "deposit_amount", "0");
}

#[tokio::test]
async fn test_tier_not_offered_returns_400() {
    let (status, result) = post_quote(create_request(
        "fiat_500",
        "2026-03-02T10:00:00",
        "2026-03-05T10:00:00",
        Some("coverage_100"),
        vec![],
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "PLAN_NOT_FOUND");
}

// =============================================================================
// SECTION 3: Car discount
// =============================================================================

#[tokio::test]
async fn test_discount_applies_after_plan_markup() {
    // BMW short band 200 x 1.2 = 240, round(240 x 0.9) = 216
    let (status, result) = post_quote(create_request(
        "bmw_x5",
        "2026-03-02T10:00:00",
        "2026-03-04T10:00:00",
        Some("coverage_50"),
        vec![],
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_total_days(&result, 2);
    assert_amount(&result, "daily_price", "216");
    assert_amount(&result, "rental_total", "432");
    assert_amount(&result, "deposit_amount", "1500");
}

#[tokio::test]
async fn test_discount_without_plan() {
    // BMW long band 180, round(180 x 0.9) = 162
    let (status, result) = post_quote(create_request(
        "bmw_x5",
        "2026-03-02T10:00:00",
        "2026-03-07T10:00:00",
        None,
        vec![],
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["tariff_id"], "x5_long");
    assert_amount(&result, "daily_price", "162");
    assert_amount(&result, "rental_total", "810");
    assert_amount(&result, "deposit_amount", "3000");
}

// =============================================================================
// SECTION 4: Grace hour
// =============================================================================

#[tokio::test]
async fn test_return_within_grace_hour_is_not_billed() {
    let (status, result) = post_quote(create_request(
        "toyota_corolla",
        "2026-03-02T10:00:00",
        "2026-03-03T11:00:00",
        None,
        vec![],
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_total_days(&result, 1);
    assert_amount(&result, "grand_total", "100");
}

#[tokio::test]
async fn test_return_past_grace_hour_bills_extra_day() {
    let (status, result) = post_quote(create_request(
        "toyota_corolla",
        "2026-03-02T10:00:00",
        "2026-03-03T11:01:00",
        None,
        vec![],
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_total_days(&result, 2);
    assert_amount(&result, "grand_total", "200");
}

// =============================================================================
// SECTION 5: Add-ons
// =============================================================================

#[tokio::test]
async fn test_one_time_and_per_day_add_ons() {
    // 80 x 10 = 800; child seat 8 x 10 = 80; delivery 40 once
    let (status, result) = post_quote(create_request(
        "toyota_corolla",
        "2026-03-02T10:00:00",
        "2026-03-12T10:00:00",
        None,
        vec!["child_seat", "airport_delivery"],
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result, "rental_total", "800");
    assert_amount(&result, "add_ons_total", "120");
    assert_amount(&result, "grand_total", "920");

    let charges = result["breakdown"]["add_on_charges"].as_array().unwrap();
    assert_eq!(charges.len(), 2);
    assert_eq!(charges[0]["quantity"], 10);
    assert_eq!(charges[1]["quantity"], 1);
}

#[tokio::test]
async fn test_duplicate_add_on_charged_once() {
    let (status, result) = post_quote(create_request(
        "fiat_500",
        "2026-03-02T10:00:00",
        "2026-03-04T10:00:00",
        None,
        vec!["gps", "gps"],
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result, "add_ons_total", "12");
    assert_amount(&result, "grand_total", "102");
    assert_eq!(warning_codes(&result), vec!["DUPLICATE_ADD_ON"]);
}

#[tokio::test]
async fn test_unknown_add_on_returns_400() {
    let (status, result) = post_quote(create_request(
        "fiat_500",
        "2026-03-02T10:00:00",
        "2026-03-04T10:00:00",
        None,
        vec!["jetpack"],
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "EXTRA_NOT_FOUND");
}

// =============================================================================
// SECTION 6: Audit trace and idempotence
// =============================================================================

#[tokio::test]
async fn test_audit_trace_lists_every_step() {
    let (_, result) = post_quote(create_request(
        "bmw_x5",
        "2026-03-02T10:00:00",
        "2026-03-04T10:00:00",
        Some("coverage_100"),
        vec!["gps"],
    ))
    .await;

    let rules: Vec<&str> = result["audit_trace"]["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["rule_id"].as_str().unwrap())
        .collect();
    assert_eq!(
        rules,
        vec![
            "tariff_selection",
            "plan_adjustment",
            "car_discount",
            "rental_total",
            "add_ons_total",
            "grand_total"
        ]
    );
    assert!(warning_codes(&result).is_empty());
}

#[tokio::test]
async fn test_identical_requests_price_identically() {
    let request = create_request(
        "toyota_corolla",
        "2026-03-02T08:15:00",
        "2026-03-11T09:00:00",
        Some("coverage_50"),
        vec!["gps", "airport_delivery"],
    );

    let (_, first) = post_quote(request.clone()).await;
    let (_, second) = post_quote(request).await;

    assert_eq!(first["breakdown"], second["breakdown"]);
    assert_eq!(first["audit_trace"]["steps"], second["audit_trace"]["steps"]);
    assert_ne!(first["quote_id"], second["quote_id"]);
}

// =============================================================================
// SECTION 7: Fleet endpoints
// =============================================================================

#[tokio::test]
async fn test_list_cars() {
    let (status, result) = get("/cars").await;

    assert_eq!(status, StatusCode::OK);
    let cars = result.as_array().unwrap();
    let ids: Vec<&str> = cars.iter().map(|c| c["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["bmw_x5", "fiat_500", "toyota_corolla"]);

    // Tariffs are sorted on load, so the base rate is the shortest band
    assert_eq!(normalize_decimal(cars[0]["base_daily_price"].as_str().unwrap()), "200");
    assert_eq!(cars[0]["tariffs"][0]["id"], "x5_short");
}

#[tokio::test]
async fn test_get_car() {
    let (status, result) = get("/cars/fiat_500").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["name"], "Fiat 500");
    assert_eq!(result["currency"], "EUR");
    assert!(result["coverage_plans"]["coverage_50"].is_object());
    assert!(result["coverage_plans"]["coverage_100"].is_null());
}

#[tokio::test]
async fn test_get_unknown_car_returns_404() {
    let (status, result) = get("/cars/delorean").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(result["code"], "CAR_NOT_FOUND");
}

#[tokio::test]
async fn test_health() {
    let (status, result) = get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["status"], "healthy");
}

// =============================================================================
// SECTION 8: Error cases
// =============================================================================

#[tokio::test]
async fn test_end_before_start_returns_400() {
    let (status, result) = post_quote(create_request(
        "toyota_corolla",
        "2026-03-05T10:00:00",
        "2026-03-02T10:00:00",
        None,
        vec![],
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_DATE_RANGE");
}

#[tokio::test]
async fn test_same_instant_range_returns_400() {
    let (status, result) = post_quote(create_request(
        "toyota_corolla",
        "2026-03-02T10:00:00",
        "2026-03-02T10:00:00",
        None,
        vec![],
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_DATE_RANGE");
}

#[tokio::test]
async fn test_unknown_car_returns_404() {
    let (status, result) = post_quote(create_request(
        "delorean",
        "2026-03-02T10:00:00",
        "2026-03-05T10:00:00",
        None,
        vec![],
    ))
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(result["code"], "CAR_NOT_FOUND");
}

#[tokio::test]
async fn test_unknown_coverage_tier_returns_400() {
    let (status, result) = post_quote(json!({
        "car_id": "toyota_corolla",
        "start_date": "2026-03-02T10:00:00",
        "end_date": "2026-03-05T10:00:00",
        "coverage": "coverage_75"
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_content_type_returns_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/quote")
        .body(Body::from(
            create_request(
                "toyota_corolla",
                "2026-03-02T10:00:00",
                "2026-03-05T10:00:00",
                None,
                vec![],
            )
            .to_string(),
        ))
        .unwrap();

    let (status, result) = send(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MISSING_CONTENT_TYPE");
}
