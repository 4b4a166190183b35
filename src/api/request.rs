//! Request types for the report API.

use serde::{Deserialize, Serialize};

/// Request body for the `POST /reports` endpoint.
///
/// Carries the exported attendance log verbatim, header line included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Month to report, formatted `YYYY-MM`.
    pub month: String,
    /// Tab-delimited log contents.
    pub log: String,
}
