//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading report
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{ReportError, ReportResult};

use super::types::ReportConfig;

/// Largest accepted coalescing window: one day.
const MAX_COALESCE_WINDOW_SECS: i64 = 24 * 60 * 60;

/// Loads and validates report configuration.
///
/// # File Format
///
/// ```text
/// output_dir: reports
/// coalesce_window_secs: 30
/// format: text            # or json
/// lines_per_page: 40
/// names:
///   weekdays: { Monday: Lunes, Tuesday: Martes, ... }
///   months: [Enero, Febrero, ..., Diciembre]
/// labels:
///   missing: "-----"
/// ```
///
/// Omitted fields take their defaults.
///
/// # Example
///
/// ```no_run
/// use attendance_report::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/report.yaml")?;
/// println!("Writing reports to {}", loader.config().output_dir.display());
/// # Ok::<(), attendance_report::error::ReportError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ReportConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - The month table does not have exactly twelve entries
    /// - The coalescing window is negative or longer than a day
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReportError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|message| ReportError::ConfigParseError {
            path: path_str.clone(),
            message,
        })?;

        info!(
            path = %path_str,
            output_dir = %config.output_dir.display(),
            format = ?config.format,
            "Loaded report configuration"
        );
        Ok(Self { config })
    }

    /// Parses and validates configuration text.
    fn parse(content: &str) -> Result<ReportConfig, String> {
        // An empty document deserializes as unit, not as an empty map.
        let config: ReportConfig = if content.trim().is_empty() {
            ReportConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| e.to_string())?
        };

        if config.names.months.len() != 12 {
            return Err(format!(
                "names.months must list 12 months, found {}",
                config.names.months.len()
            ));
        }
        if !(0..=MAX_COALESCE_WINDOW_SECS).contains(&config.coalesce_window_secs) {
            return Err(format!(
                "coalesce_window_secs must be between 0 and {}, found {}",
                MAX_COALESCE_WINDOW_SECS, config.coalesce_window_secs
            ));
        }

        Ok(config)
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ReportConfig {
        self.config
    }
}
