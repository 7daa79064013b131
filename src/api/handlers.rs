//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{CalculationRecord, PayrollInput};

use super::request::PayrollRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Handler for POST /calculate.
///
/// Accepts a payroll request and returns the computed calculation record.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: reject(correlation_id, rejection),
            }
            .into_response();
        }
    };

    // Convert request to domain input
    let input: PayrollInput = request.into();

    // Perform the calculation
    let start_time = Instant::now();
    match state.engine().compute_salary(&input) {
        Ok(result) => {
            let duration_us = elapsed_micros(start_time);
            let record = CalculationRecord::new(input, result, duration_us);
            info!(
                correlation_id = %correlation_id,
                calculation_id = %record.calculation_id,
                gross_salary = %record.gross_salary,
                net_salary = %record.net_salary,
                duration_us,
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(record),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Microseconds since `start`, saturating at `u64::MAX`.
fn elapsed_micros(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX)
}

/// Maps a body extraction failure to an API error.
fn reject(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Valid JSON of the wrong shape: a required field is absent or
            // a value is not a number.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
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
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::PayrollEngine;
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use tower::ServiceExt;

    fn create_test_router() -> Router {
        create_router(AppState::new(PayrollEngine::moroccan()))
    }

    fn amount(value: &serde_json::Value) -> Decimal {
        value.as_str().unwrap().parse().unwrap()
    }

    async fn post_json(body: &str) -> (StatusCode, serde_json::Value) {
        let response = create_test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_valid_request_returns_record() {
        let (status, body) = post_json(r#"{"hourly_rate": 50, "worked_hours": 191}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["calculation_id"].is_string());
        assert!(body["duration_us"].is_u64());
        assert_eq!(amount(&body["gross_salary"]), dec!(9550));
        assert_eq!(
            amount(&body["result"]["social_pension_contributions"]["CNSS Contribution (4.48%)"]),
            dec!(268.80)
        );
    }

    #[tokio::test]
    async fn test_missing_field_is_validation_error() {
        let (status, body) = post_json(r#"{"hourly_rate": 50}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["message"].as_str().unwrap().contains("worked_hours"));
    }

    #[tokio::test]
    async fn test_syntax_error_is_malformed_json() {
        let (status, body) = post_json(r#"{"hourly_rate": 50,"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_range_violation_is_invalid_input() {
        let (status, body) =
            post_json(r#"{"hourly_rate": 50, "worked_hours": 191, "seniority_rate_percent": 120}"#)
                .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_INPUT");
        assert_eq!(body["details"], "seniority_rate_percent");
    }

    #[tokio::test]
    async fn test_engine_rejection_is_json_with_content_type() {
        let response = create_test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"hourly_rate": -5, "worked_hours": 191}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "INVALID_INPUT");
        assert_eq!(body["details"], "hourly_rate");
    }

    #[test]
    fn test_elapsed_micros_fits_u64() {
        let start = Instant::now();
        assert!(elapsed_micros(start) < u64::MAX);
    }

    #[tokio::test]
    async fn test_health_reports_healthy() {
        let response = create_test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
    }
}
