//! HTTP request handlers for the Payroll Calculation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate, validate_for_record};
use crate::error::Violation;

use super::request::CalculationRequest;
use super::response::{ApiError, CalculationResponse, CalculationWarning};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the itemized payroll breakdown
/// wrapped in a persistence-ready envelope.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let config = state.config().config();

    // This endpoint serves persistence-intending callers, so the employee
    // identifier is validated alongside the payroll input.
    if let Err(violations) =
        validate_for_record(&request.input, request.employee_id.as_deref(), config)
    {
        return validation_failure(correlation_id, &violations);
    }

    let calculation = match calculate(&request.input, config) {
        Ok(calculation) => calculation,
        Err(violations) => return validation_failure(correlation_id, &violations),
    };

    let mut warnings = Vec::new();
    if calculation.net_salary < Decimal::ZERO {
        warn!(
            correlation_id = %correlation_id,
            net_salary = %calculation.net_salary,
            "Deductions exceed gross salary"
        );
        warnings.push(CalculationWarning::negative_net_salary());
    }

    // validate_for_record guarantees the identifier is present here
    let employee_id = request.employee_id.unwrap_or_default();

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        gross_salary = %calculation.earnings.gross_salary,
        net_salary = %calculation.net_salary,
        "Calculation completed successfully"
    );

    let response = CalculationResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id,
        calculation,
        warnings,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

fn validation_failure(correlation_id: Uuid, violations: &[Violation]) -> axum::response::Response {
    warn!(
        correlation_id = %correlation_id,
        violation_count = violations.len(),
        "Validation failed"
    );
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ApiError::validation_error(violations)),
    )
        .into_response()
}
