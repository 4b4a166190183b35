//! Report structures handed to renderers and returned to callers.

use std::collections::BTreeMap;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::YearMonth;

/// The four canonical punches of a day.
///
/// A `None` slot means no punch was available for that position; renderers
/// choose how to print it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchSlots {
    /// First punch of the day.
    pub morning_in: Option<NaiveTime>,
    /// Second punch of the day.
    pub morning_out: Option<NaiveTime>,
    /// Third punch of the day.
    pub afternoon_in: Option<NaiveTime>,
    /// Fourth punch of the day.
    pub afternoon_out: Option<NaiveTime>,
}

impl PunchSlots {
    /// Slots in printing order.
    pub fn as_array(&self) -> [Option<NaiveTime>; 4] {
        [
            self.morning_in,
            self.morning_out,
            self.afternoon_in,
            self.afternoon_out,
        ]
    }

    /// True when no slot is filled.
    pub fn is_empty(&self) -> bool {
        self.as_array().iter().all(Option::is_none)
    }
}

/// One day's cell in the printed grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    /// Day of month.
    pub day: u32,
    /// Localised weekday name.
    pub weekday: String,
    /// Inferred punches.
    pub slots: PunchSlots,
}

/// A printed table row: one day in the left column and, when it exists, the
/// matching day of the second half-month in the right column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Day from the first half of the month.
    pub left: DayCell,
    /// Day from the second half of the month.
    pub right: Option<DayCell>,
}

/// A complete monthly attendance report for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Enrollment number of the employee.
    pub employee_id: String,
    /// Display name of the employee.
    pub employee_name: String,
    /// The month covered.
    pub month: YearMonth,
    /// Localised, upper-cased month heading (e.g. `ENERO 2024`).
    pub heading: String,
    /// Grid rows, first half-month top to bottom.
    pub rows: Vec<ReportRow>,
}

impl MonthlyReport {
    /// Every day cell, left column first, then right column.
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.rows
            .iter()
            .map(|row| &row.left)
            .chain(self.rows.iter().filter_map(|row| row.right.as_ref()))
    }
}

/// An employee whose report could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFailure {
    /// Enrollment number of the employee.
    pub employee_id: String,
    /// Why generation failed.
    pub message: String,
}

/// Outcome of one report generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// The month reported.
    pub month: YearMonth,
    /// Localised month heading.
    pub heading: String,
    /// Employee id to generated artifact file name.
    pub reports: BTreeMap<String, String>,
    /// Employees whose artifact could not be produced.
    pub failures: Vec<EmployeeFailure>,
    /// Log rows skipped as malformed.
    pub skipped_rows: usize,
}
