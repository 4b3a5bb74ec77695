//! HTTP request handlers for the pay engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_total_pay;
use crate::models::WorkShift;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a list of shifts and a tax percentage and returns the pay
/// calculation.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

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
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response();
        }
    };

    let tax_percentage = request.tax_percentage;
    let shifts: Vec<WorkShift> = request.shifts.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    match calculate_total_pay(&shifts, tax_percentage, state.rates()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                shifts_count = shifts.len(),
                hours_worked = %result.hours_worked,
                total_before_tax = %result.total_before_tax,
                net_pay = %result.net_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::ShiftRequest;
    use crate::models::PayCalculation;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_valid_request() -> CalculationRequest {
        CalculationRequest {
            shifts: vec![ShiftRequest {
                id: "shift_001".to_string(),
                date: make_date("2026-01-13"),
                start_time: "17:00".to_string(),
                end_time: "22:00".to_string(),
            }],
            tax_percentage: Decimal::from(35),
        }
    }

    async fn send(body: String, content_type: Option<&str>) -> axum::response::Response {
        let router = create_router(AppState::default());
        let mut builder = Request::builder().method("POST").uri("/calculate");
        if let Some(content_type) = content_type {
            builder = builder.header("Content-Type", content_type);
        }
        router
            .oneshot(builder.body(Body::from(body)).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let body = serde_json::to_string(&create_valid_request()).unwrap();
        let response = send(body, Some("application/json")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: PayCalculation = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.hours_worked, Decimal::from(5));
        assert_eq!(result.allowances, Decimal::from(111));
        assert_eq!(result.details.len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let response = send("{not json".to_string(), Some("application/json")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");
        let json = body_json(response).await;
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let body = r#"{"shifts":[{"id":"s1","date":"2026-01-13","start_time":"09:00"}]}"#;
        let response = send(body.to_string(), Some("application/json")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let body = serde_json::to_string(&create_valid_request()).unwrap();
        let response = send(body, None).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_invalid_time_returns_400() {
        let mut request = create_valid_request();
        request.shifts[0].end_time = "25:00".to_string();
        let body = serde_json::to_string(&request).unwrap();
        let response = send(body, Some("application/json")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");
        let json = body_json(response).await;
        assert_eq!(json["code"], "INVALID_TIME");
    }

    #[tokio::test]
    async fn test_overnight_shift_returns_400() {
        let mut request = create_valid_request();
        request.shifts[0].start_time = "22:00".to_string();
        request.shifts[0].end_time = "06:00".to_string();
        let body = serde_json::to_string(&request).unwrap();
        let response = send(body, Some("application/json")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "INVALID_SHIFT");
    }

    #[tokio::test]
    async fn test_allowance_overflow_returns_422() {
        let mut rates = crate::config::PayRates::default();
        rates.allowances.sunday = Decimal::MAX;
        let router = create_router(AppState::new(rates));

        let mut request = create_valid_request();
        request.shifts[0].date = make_date("2026-01-18");
        let body = serde_json::to_string(&request).unwrap();
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json["code"], "CALCULATION_ERROR");
    }
}
