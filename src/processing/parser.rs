//! Attendance log parsing.
//!
//! The clock exports a tab-delimited text file whose first line is a header.
//! Every following line is one punch; the employee id sits in field 2, the
//! name in field 3 and the timestamp in field 6. Rows that cannot be read are
//! skipped and reported, never fatal on their own. Blank lines are not rows.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use crate::error::{ReportError, ReportResult, RowError};
use crate::models::RawPunchRecord;

/// Minimum number of tab-separated fields a data row must have.
pub const MIN_FIELDS: usize = 7;

const ID_FIELD: usize = 2;
const NAME_FIELD: usize = 3;
const TIMESTAMP_FIELD: usize = 6;

/// Accepted timestamp layouts, tried in order.
pub const TIMESTAMP_FORMATS: [&str; 2] = ["%Y/%m/%d %H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// A data row that was not turned into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the input, header included.
    pub line: usize,
    /// Why the row was rejected.
    pub error: RowError,
}

/// Result of parsing a whole log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLog {
    /// Parsed records in input order.
    pub records: Vec<RawPunchRecord>,
    /// Rejected rows in input order.
    pub skipped: Vec<SkippedRow>,
}

impl ParsedLog {
    /// Number of data rows examined (header excluded).
    pub fn data_rows(&self) -> usize {
        self.records.len() + self.skipped.len()
    }
}

/// Parses a timestamp in either `YYYY/MM/DD HH:MM:SS` or `YYYY-MM-DD HH:MM:SS`.
///
/// # Example
///
/// ```
/// use attendance_report::processing::parse_timestamp;
///
/// let slash = parse_timestamp("2024/01/15 08:00:00").unwrap();
/// let dash = parse_timestamp("2024-01-15 08:00:00").unwrap();
/// assert_eq!(slash, dash);
/// assert!(parse_timestamp("15.01.2024 08:00").is_err());
/// ```
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, RowError> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| RowError::InvalidTimestamp {
            value: value.to_string(),
        })
}

/// Parses one data row into a record.
pub fn parse_row(line: &str) -> Result<RawPunchRecord, RowError> {
    let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('\t').collect();
    if fields.len() < MIN_FIELDS {
        return Err(RowError::TooFewFields {
            found: fields.len(),
        });
    }

    let timestamp = parse_timestamp(fields[TIMESTAMP_FIELD])?;

    Ok(RawPunchRecord {
        employee_id: fields[ID_FIELD].trim().to_string(),
        employee_name: fields[NAME_FIELD].trim().to_string(),
        timestamp,
    })
}

/// Parses a log from its lines. The first line is the header and is skipped.
///
/// # Errors
///
/// - [`ReportError::EmptyLog`] when there is not even a header line.
/// - [`ReportError::UnparseableLog`] when data rows exist but none is valid.
///
/// A log holding only a header is valid and yields no records.
///
/// # Example
///
/// ```
/// use attendance_report::processing::parse_log;
///
/// let lines = [
///     "No\tTMNo\tEnNo\tName\tGMNo\tMode\tDateTime",
///     "1\t1\t1001\tAna Torres\t1\t1\t2024/01/15 08:00:00",
///     "short\trow",
/// ];
/// let parsed = parse_log(lines).unwrap();
/// assert_eq!(parsed.records.len(), 1);
/// assert_eq!(parsed.skipped.len(), 1);
/// ```
pub fn parse_log<I, S>(lines: I) -> ReportResult<ParsedLog>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = lines.into_iter();
    if lines.next().is_none() {
        return Err(ReportError::EmptyLog);
    }

    let mut parsed = ParsedLog::default();
    for (index, line) in lines.enumerate() {
        // header is line 1
        let line_number = index + 2;
        let line = line.as_ref();
        if line.trim().is_empty() {
            debug!(line = line_number, "Ignoring blank line");
            continue;
        }
        match parse_row(line) {
            Ok(record) => parsed.records.push(record),
            Err(error) => {
                warn!(line = line_number, error = %error, "Skipping malformed row");
                parsed.skipped.push(SkippedRow {
                    line: line_number,
                    error,
                });
            }
        }
    }

    if parsed.records.is_empty() && !parsed.skipped.is_empty() {
        return Err(ReportError::UnparseableLog {
            rows: parsed.skipped.len(),
        });
    }

    info!(
        records = parsed.records.len(),
        skipped = parsed.skipped.len(),
        "Parsed attendance log"
    );
    Ok(parsed)
}

/// Reads and parses a log file.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected so a single
/// mis-encoded name cannot sink the whole file.
pub fn read_log_file<P: AsRef<Path>>(path: P) -> ReportResult<ParsedLog> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| ReportError::LogRead {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let text = String::from_utf8_lossy(&bytes);
    parse_log(text.lines())
}
