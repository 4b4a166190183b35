//! Response types for the report API.
//!
//! This module defines the success body of `POST /reports`, the error
//! response structure, and the mapping from [`ReportError`] to HTTP errors.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::models::{EmployeeFailure, GenerationSummary};

/// Response body for a report generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportResponse {
    /// The month reported, `YYYY-MM`.
    pub month: String,
    /// Localised month heading.
    pub heading: String,
    /// Employee id to generated file name, downloadable from `/reports/{file}`.
    pub reports: BTreeMap<String, String>,
    /// Employees whose report failed.
    pub failures: Vec<EmployeeFailure>,
    /// Log rows skipped as malformed.
    pub skipped_rows: usize,
}

impl From<GenerationSummary> for ReportResponse {
    fn from(summary: GenerationSummary) -> Self {
        Self {
            month: summary.month.to_string(),
            heading: summary.heading,
            reports: summary.reports,
            failures: summary.failures,
            skipped_rows: summary.skipped_rows,
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

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ReportError> for ApiErrorResponse {
    fn from(error: ReportError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            ReportError::InvalidMonth { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details("INVALID_MONTH", message, "Use the YYYY-MM format"),
            ),
            ReportError::EmptyLog => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "EMPTY_LOG",
                    message,
                    "The log must start with a header line",
                ),
            ),
            ReportError::UnparseableLog { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "UNPARSEABLE_LOG",
                    message,
                    "Rows need 7 tab-separated fields and a YYYY/MM/DD or YYYY-MM-DD timestamp",
                ),
            ),
            ReportError::InvalidFileName { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_FILE_NAME", message),
            ),
            ReportError::ReportNotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiError::new("REPORT_NOT_FOUND", message),
            ),
            ReportError::ConfigNotFound { .. } | ReportError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            ReportError::LogRead { .. }
            | ReportError::Render { .. }
            | ReportError::Write { .. }
            | ReportError::ReportRead { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("STORAGE_ERROR", "Report storage failed", message),
            ),
        };
        ApiErrorResponse { status, error }
    }
}
