//! Two-column monthly report layout.
//!
//! A month of `n` days is printed as `ceil(n / 2)` rows. Row `i` shows day `i`
//! on the left and day `i + ceil(n / 2)` on the right; when `n` is odd the last
//! row has no right-hand day. Every calendar day appears exactly once, with or
//! without punches.

use chrono::Datelike;

use crate::models::{DayCell, EmployeeMonthGroup, MonthlyReport, NameTable, ReportRow, YearMonth};

use super::slots::infer_slots;

/// Number of rows (and of left-column days) for a month of `days_in_month` days.
///
/// # Example
///
/// ```
/// use attendance_report::processing::half_month;
///
/// assert_eq!(half_month(28), 14);
/// assert_eq!(half_month(31), 16);
/// ```
pub fn half_month(days_in_month: u32) -> u32 {
    days_in_month.div_ceil(2)
}

/// Builds the cell for one calendar day.
///
/// Days without punches still resolve their weekday from the calendar and
/// carry empty slots.
pub fn day_cell(
    group: &EmployeeMonthGroup,
    month: &YearMonth,
    day: u32,
    names: &NameTable,
) -> DayCell {
    let punches = group.day(day);
    let weekday = punches
        .map(|p| p.weekday)
        .or_else(|| month.date(day).map(|date| date.weekday()))
        .map(|w| names.weekday_name(w))
        .unwrap_or_default();
    let slots = punches
        .map(|p| infer_slots(&p.times))
        .unwrap_or_default();

    DayCell {
        day,
        weekday,
        slots,
    }
}

/// Lays out one employee's month.
///
/// # Example
///
/// ```
/// use attendance_report::models::{EmployeeMonthGroup, NameTable, YearMonth};
/// use attendance_report::processing::build_report;
///
/// let month = YearMonth::parse("2023-02").unwrap();
/// let group = EmployeeMonthGroup::new("1001", "Ana Torres");
/// let report = build_report(&group, &month, &NameTable::default());
///
/// assert_eq!(report.heading, "FEBRERO 2023");
/// assert_eq!(report.rows.len(), 14);
/// assert_eq!(report.rows[0].left.day, 1);
/// assert_eq!(report.rows[0].right.as_ref().unwrap().day, 15);
/// assert_eq!(report.rows[13].right.as_ref().unwrap().day, 28);
/// ```
pub fn build_report(
    group: &EmployeeMonthGroup,
    month: &YearMonth,
    names: &NameTable,
) -> MonthlyReport {
    let days_in_month = month.days_in_month();
    let half = half_month(days_in_month);

    let rows = (1..=half)
        .map(|day| ReportRow {
            left: day_cell(group, month, day, names),
            right: (day + half <= days_in_month)
                .then(|| day_cell(group, month, day + half, names)),
        })
        .collect();

    MonthlyReport {
        employee_id: group.employee_id.clone(),
        employee_name: group.employee_name.clone(),
        month: *month,
        heading: names.month_heading(month),
        rows,
    }
}

/// Escape character for id bytes that may not appear in a file name.
const ID_ESCAPE: char = '~';

/// File name for an employee's artifact: `<id>_<HEADING>.<extension>`.
///
/// Spaces in the heading become underscores. In the id, ASCII alphanumerics,
/// `-` and `_` are kept and every other byte is written as `~XX` (upper-case
/// hex, `~` itself included), so distinct ids always get distinct names and
/// the name needs no escaping in a URL path.
///
/// # Example
///
/// ```
/// use attendance_report::processing::report_file_name;
///
/// assert_eq!(report_file_name("1001", "ENERO 2024", "txt"), "1001_ENERO_2024.txt");
/// assert_eq!(report_file_name("../x", "ENERO 2024", "txt"), "~2E~2E~2Fx_ENERO_2024.txt");
/// ```
pub fn report_file_name(employee_id: &str, heading: &str, extension: &str) -> String {
    let mut id = String::with_capacity(employee_id.len());
    for byte in employee_id.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            id.push(char::from(byte));
        } else {
            id.push(ID_ESCAPE);
            id.push_str(&format!("{byte:02X}"));
        }
    }
    format!("{}_{}.{}", id, heading.replace(' ', "_"), extension)
}
