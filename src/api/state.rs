//! Application state for the Timesheet Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::{ConfigLoader, TimesheetConfig};

/// Shared application state.
///
/// Holds the current settings. Settings can be replaced at runtime through
/// `PUT /settings`; calculations copy one snapshot up front so a concurrent
/// update never splits a month between two settings values.
#[derive(Clone)]
pub struct AppState {
    settings: Arc<RwLock<TimesheetConfig>>,
}

impl AppState {
    /// Creates a new application state from loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            settings: Arc::new(RwLock::new(*config.config())),
        }
    }

    /// Returns a copy of the current settings.
    pub async fn settings(&self) -> TimesheetConfig {
        *self.settings.read().await
    }

    /// Replaces the current settings.
    pub async fn replace_settings(&self, settings: TimesheetConfig) {
        *self.settings.write().await = settings;
    }
}
