//! Application state for the report API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::processing::ReportGenerator;

/// Shared application state.
///
/// Holds the report generator, which owns the configuration, the renderer
/// and the output store.
#[derive(Clone)]
pub struct AppState {
    generator: Arc<ReportGenerator>,
}

impl AppState {
    /// Creates a new application state around a generator.
    pub fn new(generator: ReportGenerator) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }

    /// Returns the report generator.
    pub fn generator(&self) -> &ReportGenerator {
        &self.generator
    }
}
