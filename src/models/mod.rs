//! Core data models for attendance reporting.
//!
//! This module contains the domain types that flow through the pipeline,
//! from raw punch records to rendered-ready monthly reports.

mod attendance;
mod month;
mod names;
mod punch;
mod report;

pub use attendance::{DayPunches, EmployeeMonthGroup};
pub use month::YearMonth;
pub use names::{NameTable, ReportLabels, english_weekday};
pub use punch::{CANONICAL_TIMESTAMP_FORMAT, RawPunchRecord};
pub use report::{
    DayCell, EmployeeFailure, GenerationSummary, MonthlyReport, PunchSlots, ReportRow,
};
