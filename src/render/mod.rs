//! Rendering of monthly reports into document bytes.
//!
//! The layout engine produces a [`MonthlyReport`]; a [`ReportRenderer`] turns
//! it into the bytes of one artifact. Renderers are stateless collaborators
//! and may be shared across threads.

mod json;
mod text;

use serde::{Deserialize, Serialize};

use crate::error::ReportResult;
use crate::models::{MonthlyReport, ReportLabels};

pub use json::JsonRenderer;
pub use text::{DEFAULT_LINES_PER_PAGE, PAGE_BREAK, TextRenderer};

/// Turns a laid-out report into a document.
pub trait ReportRenderer: Send + Sync {
    /// File extension of produced documents, without the dot.
    fn extension(&self) -> &str;

    /// Renders one employee's report.
    fn render(&self, report: &MonthlyReport, labels: &ReportLabels) -> ReportResult<Vec<u8>>;
}

/// Document formats available from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Paged fixed-width text grid.
    #[default]
    Text,
    /// Pretty-printed JSON of the report structure.
    Json,
}

impl OutputFormat {
    /// Builds the renderer for this format.
    pub fn renderer(self, lines_per_page: usize) -> Box<dyn ReportRenderer> {
        match self {
            OutputFormat::Text => Box::new(TextRenderer::new(lines_per_page)),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}
