//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading timesheet
//! settings from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::TimesheetConfig;

/// Name of the settings file inside a configuration directory.
pub const SETTINGS_FILE: &str = "settings.yaml";

/// Loads and provides access to timesheet settings.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── settings.yaml   # nocturnal window and required load, in minutes
/// ```
///
/// # Example
///
/// ```no_run
/// use timesheet_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Weekday load: {} min", loader.config().required_load.weekday);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TimesheetConfig,
}

impl ConfigLoader {
    /// Loads settings from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `settings.yaml` is missing
    /// - the file contains invalid YAML
    /// - a value is outside a single day
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let settings_path = path.as_ref().join(SETTINGS_FILE);
        let config = Self::load_yaml::<TimesheetConfig>(&settings_path)?;
        config.validate()?;

        debug!(
            path = %settings_path.display(),
            nocturnal_start = config.nocturnal_window.start,
            nocturnal_end = config.nocturnal_window.end,
            weekday_load = config.required_load.weekday,
            weekend_load = config.required_load.weekend,
            "Loaded timesheet settings"
        );

        Ok(Self { config })
    }

    /// Wraps an already built config, e.g. the built-in defaults.
    pub fn from_config(config: TimesheetConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded settings.
    pub fn config(&self) -> &TimesheetConfig {
        &self.config
    }
}
