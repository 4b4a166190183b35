//! HTTP request handlers for the report API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use super::request::ReportRequest;
use super::response::{ApiError, ApiErrorResponse, ReportResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reports", post(generate_handler))
        .route("/reports/:filename", get(download_handler))
        .with_state(state)
}

/// Handler for POST /reports.
///
/// Parses the uploaded log, generates one report per employee present in
/// the requested month and returns where each report was stored.
async fn generate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

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
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let start_time = Instant::now();
    let result = tokio::task::spawn_blocking(move || {
        state
            .generator()
            .generate_from_lines(request.log.lines(), &request.month)
    })
    .await;

    let result = match result {
        Ok(result) => result,
        Err(join_error) => {
            warn!(
                correlation_id = %correlation_id,
                error = %join_error,
                "Report generation task failed"
            );
            return internal_error(join_error);
        }
    };

    match result {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                month = %summary.month,
                reports = summary.reports.len(),
                failures = summary.failures.len(),
                skipped_rows = summary.skipped_rows,
                duration_us = start_time.elapsed().as_micros(),
                "Report request completed"
            );
            (StatusCode::OK, Json(ReportResponse::from(summary))).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Report request failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /reports/:filename.
///
/// Serves a previously generated report as an attachment.
async fn download_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    let name = filename.clone();
    let result =
        tokio::task::spawn_blocking(move || state.generator().store().read(&name)).await;

    let result = match result {
        Ok(result) => result,
        Err(join_error) => {
            warn!(filename = %filename, error = %join_error, "Report download task failed");
            return internal_error(join_error);
        }
    };

    match result {
        Ok(bytes) => {
            let content_type = if filename.ends_with(".json") {
                "application/json"
            } else {
                "text/plain; charset=utf-8"
            };
            let disposition = format!("attachment; filename=\"{}\"", filename);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, content_type.to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            )
                .into_response()
        }
        Err(err) => {
            warn!(filename = %filename, error = %err, "Report download failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// 500 response for a blocking task that panicked or was cancelled.
fn internal_error(join_error: tokio::task::JoinError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::with_details(
            "INTERNAL_ERROR",
            "Report task did not complete",
            join_error.to_string(),
        )),
    )
        .into_response()
}
