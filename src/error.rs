//! Error types for attendance report generation.
//!
//! Structural problems (a bad month selector, an unreadable or wholly
//! unparseable log, broken configuration) are fatal and surface as
//! [`ReportError`]. Row-level problems never abort a run; they are described by
//! [`RowError`] and only counted and logged.

use thiserror::Error;

/// The main error type for report generation.
///
/// # Example
///
/// ```
/// use attendance_report::error::ReportError;
///
/// let error = ReportError::InvalidMonth {
///     token: "2024-13".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid month selector '2024-13': expected YYYY-MM");
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// The month selector was not a valid `YYYY-MM` token.
    #[error("Invalid month selector '{token}': expected YYYY-MM")]
    InvalidMonth {
        /// The rejected token.
        token: String,
    },

    /// The log had no header line.
    #[error("Attendance log is empty")]
    EmptyLog,

    /// The log had data rows but none of them could be parsed.
    #[error("Attendance log could not be parsed: none of {rows} data rows are valid")]
    UnparseableLog {
        /// Number of data rows examined.
        rows: usize,
    },

    /// The log file could not be read.
    #[error("Failed to read attendance log '{path}': {message}")]
    LogRead {
        /// The path that failed.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Rendering one employee's report failed.
    #[error("Failed to render report for employee '{employee_id}': {message}")]
    Render {
        /// The employee whose report failed.
        employee_id: String,
        /// A description of the rendering failure.
        message: String,
    },

    /// Writing a generated artifact failed.
    #[error("Failed to write report '{path}': {message}")]
    Write {
        /// The artifact path.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// A stored report exists but could not be read.
    #[error("Failed to read report '{path}': {message}")]
    ReportRead {
        /// The artifact path.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// No generated report exists under the requested name.
    #[error("Report not found: {filename}")]
    ReportNotFound {
        /// The requested file name.
        filename: String,
    },

    /// A requested report name could escape the output directory.
    #[error("Invalid report file name: {filename}")]
    InvalidFileName {
        /// The rejected file name.
        filename: String,
    },
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;

/// Why a single log row was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// The row had fewer than the seven tab-separated fields required.
    #[error("expected at least 7 tab-separated fields, found {found}")]
    TooFewFields {
        /// Number of fields present.
        found: usize,
    },

    /// The timestamp field matched neither supported format.
    #[error("unrecognised timestamp '{value}'")]
    InvalidTimestamp {
        /// The raw timestamp text.
        value: String,
    },
}
