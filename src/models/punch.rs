//! Raw punch records as read from the attendance log.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Canonical textual form of a normalised punch timestamp.
pub const CANONICAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single punch event from one log line.
///
/// # Example
///
/// ```
/// use attendance_report::models::RawPunchRecord;
/// use chrono::NaiveDateTime;
///
/// let record = RawPunchRecord {
///     employee_id: "1001".to_string(),
///     employee_name: "Ana Torres".to_string(),
///     timestamp: NaiveDateTime::parse_from_str("2024-01-15 08:01:12", "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
/// assert_eq!(record.canonical_timestamp(), "2024-01-15 08:01:12");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPunchRecord {
    /// Enrollment number of the employee.
    pub employee_id: String,
    /// Display name as exported by the clock.
    pub employee_name: String,
    /// When the punch happened, without time zone.
    pub timestamp: NaiveDateTime,
}

impl RawPunchRecord {
    /// Calendar date of the punch.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Time of day of the punch.
    pub fn time(&self) -> NaiveTime {
        self.timestamp.time()
    }

    /// The timestamp rendered as `YYYY-MM-DD HH:MM:SS`.
    pub fn canonical_timestamp(&self) -> String {
        self.timestamp
            .format(CANONICAL_TIMESTAMP_FORMAT)
            .to_string()
    }
}
