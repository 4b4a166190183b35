//! HTTP API module for attendance report generation.
//!
//! A thin transport shell: `POST /reports` accepts a log and a month and
//! generates the reports, `GET /reports/:filename` downloads one of them.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReportRequest;
pub use response::{ApiError, ReportResponse};
pub use state::AppState;
