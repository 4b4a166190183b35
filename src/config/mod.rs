//! Configuration loading for report generation.
//!
//! Configuration is read from a single YAML file: output location,
//! deduplication window, document format and the localised names used in the
//! printed report.
//!
//! # Example
//!
//! ```no_run
//! use attendance_report::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/report.yaml").unwrap();
//! println!("Reports go to {}", config.config().output_dir.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::ReportConfig;
