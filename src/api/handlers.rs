//! HTTP request handlers for the Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use super::request::{IdentifyRequest, MarkRequest, ReportQuery};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance", post(mark_handler))
        .route("/attendance/identify", post(identify_handler))
        .route("/reports/monthly", get(monthly_report_handler))
        .with_state(state)
}

/// Handler for POST /attendance.
///
/// Records an attendance mark for an already-identified employee.
async fn mark_handler(
    State(state): State<AppState>,
    payload: Result<Json<MarkRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        "Processing attendance mark"
    );

    match state.engine().record_attendance(&request.employee_id, state.now()) {
        Ok(receipt) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %receipt.employee_id,
                status = %receipt.status,
                "Mark recorded"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(receipt),
            )
                .into_response()
        }
        Err(err) => rejection_response(correlation_id, err),
    }
}

/// Handler for POST /attendance/identify.
///
/// Resolves a captured sample through the identification collaborator and
/// records a mark for the matched employee.
async fn identify_handler(
    State(state): State<AppState>,
    payload: Result<Json<IdentifyRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    info!(correlation_id = %correlation_id, "Processing identification mark");

    let result = state.engine().record_from_sample(
        state.identity(),
        request.sample.as_bytes(),
        state.now(),
    );
    match result {
        Ok(receipt) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(receipt),
        )
            .into_response(),
        Err(err) => rejection_response(correlation_id, err),
    }
}

/// Handler for GET /reports/monthly.
///
/// Builds the monthly attendance matrix for every stored employee.
async fn monthly_report_handler(
    State(state): State<AppState>,
    query: Result<Query<ReportQuery>, axum::extract::rejection::QueryRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Bad report query");
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::validation_error(
                    "query parameters 'year' and 'month' are required",
                )),
            )
                .into_response();
        }
    };

    // Month and year ranges are caller errors, not aggregator concerns.
    if !(1..=12).contains(&query.month) {
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ApiError::validation_error(format!(
                "month {} is out of range 1..=12",
                query.month
            ))),
        )
            .into_response();
    }
    if NaiveDate::from_ymd_opt(query.year, query.month, 1).is_none() {
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ApiError::validation_error(format!(
                "year {} is outside the supported calendar range",
                query.year
            ))),
        )
            .into_response();
    }

    info!(
        correlation_id = %correlation_id,
        year = query.year,
        month = query.month,
        "Building monthly reports"
    );

    let today = state.engine().today(state.now());
    match state
        .engine()
        .monthly_reports_all(query.year, query.month, today)
    {
        Ok(reports) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(reports),
        )
            .into_response(),
        Err(err) => rejection_response(correlation_id, err),
    }
}

/// Maps an engine rejection to its HTTP response, logging it once.
fn rejection_response(
    correlation_id: Uuid,
    err: crate::error::EngineError,
) -> axum::response::Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request rejected");
    ApiErrorResponse::from(err).into_response()
}

/// Maps a JSON extraction rejection to a 400 response.
fn json_rejection_response(
    correlation_id: Uuid,
    rejection: JsonRejection,
) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
