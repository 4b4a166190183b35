use crate::error::{ReportError, ReportResult};
use crate::models::{MonthlyReport, ReportLabels};

use super::ReportRenderer;

/// Renders the report structure as pretty JSON.
///
/// Missing slots serialise as `null`; the labels are not used.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn extension(&self) -> &str {
        "json"
    }

    fn render(&self, report: &MonthlyReport, _labels: &ReportLabels) -> ReportResult<Vec<u8>> {
        serde_json::to_vec_pretty(report).map_err(|e| ReportError::Render {
            employee_id: report.employee_id.clone(),
            message: e.to_string(),
        })
    }
}
