//! Daily overtime detection functionality.
//!
//! This module splits a day's worked minutes into normal minutes (up to the
//! required load) and overtime minutes (the excess).

use serde::{Deserialize, Serialize};

/// The split between normal and overtime minutes for one day.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::OvertimeSplit;
///
/// let split = OvertimeSplit {
///     normal_minutes: 480,
///     overtime_minutes: 120,
/// };
/// assert_eq!(split.total(), 600);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSplit {
    /// Minutes up to the required load.
    pub normal_minutes: u32,
    /// Minutes exceeding the required load.
    pub overtime_minutes: u32,
}

impl OvertimeSplit {
    /// Returns normal plus overtime minutes.
    pub fn total(&self) -> u32 {
        self.normal_minutes + self.overtime_minutes
    }
}

/// Splits worked minutes against the required load.
///
/// # Returns
///
/// An [`OvertimeSplit`] where:
/// - `overtime_minutes` is `max(worked - required, 0)`
/// - `normal_minutes` is `worked - overtime_minutes`, i.e. `min(worked, required)`
///
/// # Examples
///
/// ## Day exceeding the load
///
/// ```
/// use timesheet_engine::calculation::split_overtime;
///
/// let split = split_overtime(600, 480);
/// assert_eq!(split.normal_minutes, 480);
/// assert_eq!(split.overtime_minutes, 120);
/// ```
///
/// ## Short day
///
/// ```
/// use timesheet_engine::calculation::split_overtime;
///
/// let split = split_overtime(300, 480);
/// assert_eq!(split.normal_minutes, 300);
/// assert_eq!(split.overtime_minutes, 0);
/// ```
pub fn split_overtime(worked_minutes: u32, required_minutes: u32) -> OvertimeSplit {
    let overtime_minutes = worked_minutes.saturating_sub(required_minutes);

    OvertimeSplit {
        normal_minutes: worked_minutes - overtime_minutes,
        overtime_minutes,
    }
}
