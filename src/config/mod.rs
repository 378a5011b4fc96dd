//! Configuration loading and management for the Timesheet Engine.
//!
//! Settings are the nocturnal window and the required-load table. They are
//! loaded from YAML and passed as an explicit value into every calculation.
//!
//! # Example
//!
//! ```no_run
//! use timesheet_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Nocturnal window starts at minute {}", loader.config().nocturnal_window.start);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, SETTINGS_FILE};
pub use types::{
    DEFAULT_NOCTURNAL_END, DEFAULT_NOCTURNAL_START, DEFAULT_WEEKDAY_LOAD, DEFAULT_WEEKEND_LOAD,
    NocturnalWindow, RequiredLoadTable, TimesheetConfig,
};
