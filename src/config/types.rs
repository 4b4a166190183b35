//! Configuration types for report generation.
//!
//! These structures are deserialized from a YAML file. Every field has a
//! default, so an empty file (or no file at all) yields a working Spanish
//! configuration.

use std::path::PathBuf;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::models::{NameTable, ReportLabels};
use crate::processing::DEFAULT_COALESCE_WINDOW_SECS;
use crate::render::{DEFAULT_LINES_PER_PAGE, OutputFormat, ReportRenderer};

/// Complete report generation configuration.
///
/// # Example
///
/// ```
/// use attendance_report::config::ReportConfig;
///
/// let config: ReportConfig = serde_yaml::from_str("format: json\n").unwrap();
/// assert_eq!(config.coalesce_window_secs, 30);
/// assert_eq!(config.renderer().extension(), "json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory generated reports are written to.
    pub output_dir: PathBuf,
    /// Punches this many seconds or less after the last kept punch are dropped.
    pub coalesce_window_secs: i64,
    /// Document format of generated reports.
    pub format: OutputFormat,
    /// Page height used by the text format.
    pub lines_per_page: usize,
    /// Weekday and month names.
    pub names: NameTable,
    /// Captions printed around the grid.
    pub labels: ReportLabels,
}

impl ReportConfig {
    /// The deduplication window as a duration.
    pub fn coalesce_window(&self) -> Duration {
        Duration::seconds(self.coalesce_window_secs)
    }

    /// Builds the renderer selected by `format`.
    pub fn renderer(&self) -> Box<dyn ReportRenderer> {
        self.format.renderer(self.lines_per_page)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("reports"),
            coalesce_window_secs: DEFAULT_COALESCE_WINDOW_SECS,
            format: OutputFormat::default(),
            lines_per_page: DEFAULT_LINES_PER_PAGE,
            names: NameTable::default(),
            labels: ReportLabels::default(),
        }
    }
}
