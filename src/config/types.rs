//! Configuration types for timesheet accounting.
//!
//! This module contains the strongly-typed settings that are deserialized
//! from YAML and threaded explicitly into every per-day calculation.

use serde::{Deserialize, Serialize};

use crate::calculation::{DayType, MINUTES_PER_DAY};
use crate::error::{EngineError, EngineResult};

/// Default start of the nocturnal window (22:00).
pub const DEFAULT_NOCTURNAL_START: u32 = 22 * 60;

/// Default end of the nocturnal window (05:00).
pub const DEFAULT_NOCTURNAL_END: u32 = 5 * 60;

/// Default required load on weekdays (8h).
pub const DEFAULT_WEEKDAY_LOAD: u32 = 8 * 60;

/// Default required load on Saturdays and Sundays (4h).
pub const DEFAULT_WEEKEND_LOAD: u32 = 4 * 60;

/// The clock-time band in which worked minutes count as nocturnal.
///
/// Both ends are minutes of day in `[0, 1440]`. When `start > end` the
/// window wraps past midnight, which is the conventional 22:00-05:00 case.
///
/// # Example
///
/// ```
/// use timesheet_engine::config::NocturnalWindow;
///
/// let window = NocturnalWindow::default();
/// assert_eq!(window.start, 1320);
/// assert_eq!(window.end, 300);
/// assert!(window.wraps_midnight());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NocturnalWindow {
    /// Start of the window in minutes of day.
    pub start: u32,
    /// End of the window in minutes of day.
    pub end: u32,
}

impl NocturnalWindow {
    /// Creates a window from two minute-of-day values.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns true when the window crosses midnight.
    pub fn wraps_midnight(&self) -> bool {
        self.start > self.end
    }
}

impl Default for NocturnalWindow {
    fn default() -> Self {
        Self::new(DEFAULT_NOCTURNAL_START, DEFAULT_NOCTURNAL_END)
    }
}

/// Minutes a day must reach before the excess counts as overtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredLoadTable {
    /// Required minutes Monday through Friday.
    pub weekday: u32,
    /// Required minutes on Saturday and Sunday.
    pub weekend: u32,
}

impl RequiredLoadTable {
    /// Creates a table from weekday and weekend minute values.
    pub fn new(weekday: u32, weekend: u32) -> Self {
        Self { weekday, weekend }
    }

    /// Looks up the required load for a day type.
    ///
    /// # Example
    ///
    /// ```
    /// use timesheet_engine::calculation::DayType;
    /// use timesheet_engine::config::RequiredLoadTable;
    ///
    /// let table = RequiredLoadTable::default();
    /// assert_eq!(table.for_day(DayType::Weekday), 480);
    /// assert_eq!(table.for_day(DayType::Saturday), 240);
    /// assert_eq!(table.for_day(DayType::Sunday), 240);
    /// ```
    pub fn for_day(&self, day_type: DayType) -> u32 {
        match day_type {
            DayType::Weekday => self.weekday,
            DayType::Saturday | DayType::Sunday => self.weekend,
        }
    }
}

impl Default for RequiredLoadTable {
    fn default() -> Self {
        Self::new(DEFAULT_WEEKDAY_LOAD, DEFAULT_WEEKEND_LOAD)
    }
}

/// The complete set of settings a calculation runs against.
///
/// A `TimesheetConfig` is a plain value: callers take one snapshot and pass it
/// by reference to every day of a month so all days see the same settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimesheetConfig {
    /// The nocturnal-premium window.
    #[serde(default)]
    pub nocturnal_window: NocturnalWindow,
    /// The required daily load per day type.
    #[serde(default)]
    pub required_load: RequiredLoadTable,
}

impl TimesheetConfig {
    /// Creates a config from its two parts.
    pub fn new(nocturnal_window: NocturnalWindow, required_load: RequiredLoadTable) -> Self {
        Self {
            nocturnal_window,
            required_load,
        }
    }

    /// Checks that every value is a minute count within a single day.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] naming the first field above 1440.
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [
            ("nocturnal_window.start", self.nocturnal_window.start),
            ("nocturnal_window.end", self.nocturnal_window.end),
            ("required_load.weekday", self.required_load.weekday),
            ("required_load.weekend", self.required_load.weekend),
        ];

        for (field, value) in fields {
            if value > MINUTES_PER_DAY {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("{} exceeds {} minutes", value, MINUTES_PER_DAY),
                });
            }
        }

        Ok(())
    }
}
