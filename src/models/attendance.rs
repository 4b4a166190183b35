//! Per-employee, per-day punch buckets built by the grouping engine.

use std::collections::BTreeMap;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Accepted punches of one employee on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPunches {
    /// Day of the week the punches fall on.
    pub weekday: Weekday,
    /// Accepted punch times in input order.
    pub times: Vec<NaiveTime>,
}

impl DayPunches {
    /// Creates an empty bucket for a day.
    pub fn new(weekday: Weekday) -> Self {
        Self {
            weekday,
            times: Vec::new(),
        }
    }
}

/// One employee's punches in the selected month, keyed by day of month.
///
/// # Example
///
/// ```
/// use attendance_report::models::{DayPunches, EmployeeMonthGroup};
/// use chrono::Weekday;
///
/// let mut group = EmployeeMonthGroup::new("1001", "Ana Torres");
/// group.days.insert(15, DayPunches::new(Weekday::Mon));
/// assert!(group.day(15).is_some());
/// assert!(group.day(16).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeMonthGroup {
    /// Enrollment number of the employee.
    pub employee_id: String,
    /// First-seen display name.
    pub employee_name: String,
    /// Punch buckets by day of month (1..=31).
    pub days: BTreeMap<u32, DayPunches>,
}

impl EmployeeMonthGroup {
    /// Creates a group with no recorded days.
    pub fn new(employee_id: impl Into<String>, employee_name: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            days: BTreeMap::new(),
        }
    }

    /// The bucket for a day of month, if anything was punched that day.
    pub fn day(&self, day: u32) -> Option<&DayPunches> {
        self.days.get(&day)
    }

    /// Total accepted punches across the month.
    pub fn punch_count(&self) -> usize {
        self.days.values().map(|d| d.times.len()).sum()
    }
}
