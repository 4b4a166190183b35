//! Localised weekday, month and caption text.
//!
//! Names are plain data carried by the configuration, never read from the
//! process locale, so the same input always renders the same report.

use std::collections::HashMap;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::YearMonth;

const WEEKDAYS: [(&str, &str); 7] = [
    ("Monday", "Lunes"),
    ("Tuesday", "Martes"),
    ("Wednesday", "Miércoles"),
    ("Thursday", "Jueves"),
    ("Friday", "Viernes"),
    ("Saturday", "Sábado"),
    ("Sunday", "Domingo"),
];

const MONTHS: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// English name of a weekday, used as the lookup key.
pub fn english_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Weekday and month names for one language.
///
/// # Example
///
/// ```
/// use attendance_report::models::{NameTable, YearMonth};
/// use chrono::Weekday;
///
/// let names = NameTable::default();
/// assert_eq!(names.weekday_name(Weekday::Wed), "Miércoles");
/// assert_eq!(names.translate_weekday("Holiday"), "Holiday");
///
/// let month = YearMonth::parse("2024-01").unwrap();
/// assert_eq!(names.month_heading(&month), "ENERO 2024");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameTable {
    /// English weekday name to localised name.
    pub weekdays: HashMap<String, String>,
    /// Localised month names, January first.
    pub months: Vec<String>,
}

impl NameTable {
    /// The built-in Spanish table.
    pub fn spanish() -> Self {
        Self {
            weekdays: WEEKDAYS
                .iter()
                .map(|(en, es)| (en.to_string(), es.to_string()))
                .collect(),
            months: MONTHS.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Localises an English weekday name; unknown names pass through unchanged.
    pub fn translate_weekday(&self, english: &str) -> String {
        self.weekdays
            .get(english)
            .cloned()
            .unwrap_or_else(|| english.to_string())
    }

    /// Localised name of a weekday.
    pub fn weekday_name(&self, weekday: Weekday) -> String {
        self.translate_weekday(english_weekday(weekday))
    }

    /// Localised month name, falling back to the month number when the
    /// table is short.
    pub fn month_name(&self, month: u32) -> String {
        month
            .checked_sub(1)
            .and_then(|index| self.months.get(index as usize))
            .cloned()
            .unwrap_or_else(|| format!("{:02}", month))
    }

    /// Upper-cased `"<MONTH> <YEAR>"` heading, e.g. `ENERO 2024`.
    pub fn month_heading(&self, month: &YearMonth) -> String {
        format!("{} {}", self.month_name(month.month), month.year).to_uppercase()
    }
}

impl Default for NameTable {
    fn default() -> Self {
        Self::spanish()
    }
}

/// Captions printed around the attendance grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLabels {
    /// Title prefix before the employee name.
    pub title: String,
    /// Caption before the employee id.
    pub registry: String,
    /// Day-of-month column header.
    pub day: String,
    /// Weekday column header.
    pub weekday: String,
    /// Entry punch column header.
    pub entry: String,
    /// Exit punch column header.
    pub exit: String,
    /// Caption over the morning punch pair.
    pub morning: String,
    /// Caption over the afternoon punch pair.
    pub afternoon: String,
    /// Text printed for a missing punch.
    pub missing: String,
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self {
            title: "Asistencia".to_string(),
            registry: "Registro".to_string(),
            day: "Dia".to_string(),
            weekday: "Semana".to_string(),
            entry: "Entrada".to_string(),
            exit: "Salida".to_string(),
            morning: "Mañana".to_string(),
            afternoon: "Tarde".to_string(),
            missing: "-----".to_string(),
        }
    }
}
