//! Report generation: the outer per-employee loop.
//!
//! A run parses the month selector first (fatal if invalid), then the log
//! (fatal only if nothing in it is usable), then lays out, renders and stores
//! one report per employee present in the month. A failure for one employee is
//! recorded in the summary and the run moves on to the next.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Duration;
use tracing::{info, warn};

use crate::config::ReportConfig;
use crate::error::ReportResult;
use crate::models::{
    EmployeeFailure, GenerationSummary, MonthlyReport, NameTable, RawPunchRecord, YearMonth,
};
use crate::render::ReportRenderer;
use crate::storage::ReportStore;

use super::grouping::group_by_employee;
use super::layout::{build_report, report_file_name};
use super::parser::{ParsedLog, parse_log, read_log_file};

/// Lays out a report for every employee with punches in `month`.
///
/// This is the pure part of the pipeline: no rendering and no storage. The
/// reports come back in first-seen employee order.
pub fn monthly_reports(
    records: &[RawPunchRecord],
    month: &YearMonth,
    names: &NameTable,
    window: Duration,
) -> Vec<MonthlyReport> {
    group_by_employee(records, month, window)
        .iter()
        .map(|group| build_report(group, month, names))
        .collect()
}

/// Generates and stores monthly attendance reports.
pub struct ReportGenerator {
    config: ReportConfig,
    renderer: Box<dyn ReportRenderer>,
    store: ReportStore,
}

impl ReportGenerator {
    /// Creates a generator using the renderer and output directory from `config`.
    pub fn new(config: ReportConfig) -> Self {
        let renderer = config.renderer();
        Self::with_renderer(config, renderer)
    }

    /// Creates a generator with an explicit renderer.
    pub fn with_renderer(config: ReportConfig, renderer: Box<dyn ReportRenderer>) -> Self {
        let store = ReportStore::new(config.output_dir.clone());
        Self {
            config,
            renderer,
            store,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Where reports are stored.
    pub fn store(&self) -> &ReportStore {
        &self.store
    }

    /// Generates reports from log lines (header first) for a `YYYY-MM` month.
    pub fn generate_from_lines<I, S>(&self, lines: I, month: &str) -> ReportResult<GenerationSummary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let month = YearMonth::parse(month)?;
        let parsed = parse_log(lines)?;
        Ok(self.generate(&parsed, &month))
    }

    /// Generates reports from a log file for a `YYYY-MM` month.
    pub fn generate_from_file<P: AsRef<Path>>(
        &self,
        path: P,
        month: &str,
    ) -> ReportResult<GenerationSummary> {
        let month = YearMonth::parse(month)?;
        let parsed = read_log_file(path)?;
        Ok(self.generate(&parsed, &month))
    }

    /// Generates reports for an already parsed log.
    pub fn generate(&self, parsed: &ParsedLog, month: &YearMonth) -> GenerationSummary {
        let heading = self.config.names.month_heading(month);
        let reports = monthly_reports(
            &parsed.records,
            month,
            &self.config.names,
            self.config.coalesce_window(),
        );

        let mut generated = BTreeMap::new();
        let mut failures = Vec::new();

        for report in &reports {
            match self.write_report(report) {
                Ok(filename) => {
                    info!(
                        employee_id = %report.employee_id,
                        filename = %filename,
                        "Generated attendance report"
                    );
                    generated.insert(report.employee_id.clone(), filename);
                }
                Err(error) => {
                    warn!(
                        employee_id = %report.employee_id,
                        error = %error,
                        "Attendance report generation failed"
                    );
                    failures.push(EmployeeFailure {
                        employee_id: report.employee_id.clone(),
                        message: error.to_string(),
                    });
                }
            }
        }

        info!(
            month = %month,
            employees = reports.len(),
            generated = generated.len(),
            failed = failures.len(),
            skipped_rows = parsed.skipped.len(),
            "Report generation finished"
        );

        GenerationSummary {
            month: *month,
            heading,
            reports: generated,
            failures,
            skipped_rows: parsed.skipped.len(),
        }
    }

    fn write_report(&self, report: &MonthlyReport) -> ReportResult<String> {
        let filename = report_file_name(
            &report.employee_id,
            &report.heading,
            self.renderer.extension(),
        );
        let bytes = self.renderer.render(report, &self.config.labels)?;
        self.store.write(&filename, &bytes)?;
        Ok(filename)
    }
}
