//! The attendance reconstruction pipeline.
//!
//! This module contains each stage of report generation: log parsing,
//! month filtering with punch deduplication, positional punch slot inference,
//! two-column month layout, and the generator that drives them per employee.

mod generate;
mod grouping;
mod layout;
mod parser;
mod slots;

pub use generate::{ReportGenerator, monthly_reports};
pub use grouping::{
    DEFAULT_COALESCE_WINDOW_SECS, group_by_employee, is_distinct_punch, push_punch,
};
pub use layout::{build_report, day_cell, half_month, report_file_name};
pub use parser::{
    MIN_FIELDS, ParsedLog, SkippedRow, TIMESTAMP_FORMATS, parse_log, parse_row, parse_timestamp,
    read_log_file,
};
pub use slots::{SLOT_COUNT, infer_slots};
