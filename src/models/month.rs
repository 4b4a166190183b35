//! The month selector a report is generated for.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};

/// A calendar month, parsed from a `YYYY-MM` token.
///
/// # Example
///
/// ```
/// use attendance_report::models::YearMonth;
///
/// let month = YearMonth::parse("2023-02").unwrap();
/// assert_eq!(month.days_in_month(), 28);
/// assert_eq!(month.to_string(), "2023-02");
/// assert!(YearMonth::parse("2023-2x").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    /// Four-digit year.
    pub year: i32,
    /// Month number, 1 through 12.
    pub month: u32,
}

impl YearMonth {
    /// Parses a `YYYY-MM` selector.
    ///
    /// The year must be four ASCII digits and the month one or two ASCII
    /// digits in `1..=12`. Surrounding whitespace is ignored.
    pub fn parse(token: &str) -> ReportResult<Self> {
        let invalid = || ReportError::InvalidMonth {
            token: token.to_string(),
        };

        let (year, month) = token.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if month.is_empty() || month.len() > 2 || !month.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Ok(Self { year, month })
    }

    /// Number of days in the month, accounting for leap years.
    pub fn days_in_month(&self) -> u32 {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|next| next.pred_opt())
            .map(|last| last.day())
            .unwrap_or(31)
    }

    /// The date of `day` within this month, if that day exists.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Whether a timestamp falls in this month (field equality, no calendar math).
    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        timestamp.year() == self.year && timestamp.month() == self.month
    }
}

impl FromStr for YearMonth {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
