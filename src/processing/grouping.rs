//! Month filtering, grouping and punch deduplication.
//!
//! Records are filtered to the selected month, bucketed by employee and then
//! by day of month. Within a day, punches are appended in input order through
//! a single forward coalescing pass: a punch is kept only if it is more than
//! the coalescing window after the previously kept punch.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveTime};
use tracing::debug;

use crate::models::{DayPunches, EmployeeMonthGroup, RawPunchRecord, YearMonth};

/// Default minimum gap between two accepted punches.
pub const DEFAULT_COALESCE_WINDOW_SECS: i64 = 30;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Returns true when `next` should be kept after `last`.
///
/// Elapsed time is read on the time-of-day clock and wraps at midnight, so a
/// punch earlier than `last` is never taken for a duplicate of it.
///
/// # Example
///
/// ```
/// use attendance_report::processing::is_distinct_punch;
/// use chrono::{Duration, NaiveTime};
///
/// let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let window = Duration::seconds(30);
/// assert!(!is_distinct_punch(nine, NaiveTime::from_hms_opt(9, 0, 10).unwrap(), window));
/// assert!(!is_distinct_punch(nine, NaiveTime::from_hms_opt(9, 0, 30).unwrap(), window));
/// assert!(is_distinct_punch(nine, NaiveTime::from_hms_opt(9, 0, 31).unwrap(), window));
/// ```
pub fn is_distinct_punch(last: NaiveTime, next: NaiveTime, window: Duration) -> bool {
    let elapsed = (next - last).num_seconds().rem_euclid(SECONDS_PER_DAY);
    elapsed > window.num_seconds()
}

/// Appends `time` to a day bucket unless it coalesces with the last kept punch.
///
/// Returns whether the punch was kept.
pub fn push_punch(day: &mut DayPunches, time: NaiveTime, window: Duration) -> bool {
    let keep = match day.times.last() {
        None => true,
        Some(&last) => is_distinct_punch(last, time, window),
    };
    if keep {
        day.times.push(time);
    }
    keep
}

/// Groups the records of one month by employee and day.
///
/// Employees come back in first-seen order and keep the first name seen for
/// them. Employees with no punch in `month` do not appear at all.
///
/// # Example
///
/// ```
/// use attendance_report::models::{RawPunchRecord, YearMonth};
/// use attendance_report::processing::group_by_employee;
/// use chrono::{Duration, NaiveDateTime};
///
/// let punch = |ts: &str| RawPunchRecord {
///     employee_id: "1001".to_string(),
///     employee_name: "Ana".to_string(),
///     timestamp: NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
/// let records = vec![
///     punch("2024-01-15 09:00:00"),
///     punch("2024-01-15 09:00:10"),
///     punch("2024-01-15 09:05:00"),
///     punch("2024-02-01 09:00:00"),
/// ];
///
/// let month = YearMonth::parse("2024-01").unwrap();
/// let groups = group_by_employee(&records, &month, Duration::seconds(30));
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].day(15).unwrap().times.len(), 2);
/// ```
pub fn group_by_employee(
    records: &[RawPunchRecord],
    month: &YearMonth,
    window: Duration,
) -> Vec<EmployeeMonthGroup> {
    let mut groups: Vec<EmployeeMonthGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records.iter().filter(|r| month.contains(&r.timestamp)) {
        let position = *index.entry(record.employee_id.as_str()).or_insert_with(|| {
            groups.push(EmployeeMonthGroup::new(
                record.employee_id.as_str(),
                record.employee_name.as_str(),
            ));
            groups.len() - 1
        });

        let date = record.date();
        let day = groups[position]
            .days
            .entry(date.day())
            .or_insert_with(|| DayPunches::new(date.weekday()));

        if !push_punch(day, record.time(), window) {
            debug!(
                employee_id = %record.employee_id,
                timestamp = %record.canonical_timestamp(),
                "Dropping duplicate punch"
            );
        }
    }

    groups
}
