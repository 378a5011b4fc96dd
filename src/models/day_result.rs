//! Per-day calculation output.

use serde::{Deserialize, Serialize};

use crate::calculation::DayType;

/// The accounting result for one day.
///
/// When `has_parse_error` is set every minute field is 0 and
/// `below_required` is false. Otherwise
/// `normal_minutes + overtime_minutes == worked_minutes`.
/// Nocturnal minutes overlap the other two and are not part of that sum.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::DayResult;
///
/// let result = DayResult {
///     worked_minutes: 600,
///     normal_minutes: 480,
///     overtime_minutes: 120,
///     nocturnal_minutes: 420,
///     has_parse_error: false,
///     below_required: false,
/// };
/// assert_eq!(result.normal_minutes + result.overtime_minutes, result.worked_minutes);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayResult {
    /// Total minutes worked across the three shifts.
    pub worked_minutes: u32,
    /// Worked minutes up to the required load.
    pub normal_minutes: u32,
    /// Worked minutes beyond the required load.
    pub overtime_minutes: u32,
    /// Worked minutes inside the nocturnal window.
    pub nocturnal_minutes: u32,
    /// A completed token could not be read as a clock time.
    pub has_parse_error: bool,
    /// Something was worked, but less than the required load.
    pub below_required: bool,
}

impl DayResult {
    /// The result of a day with malformed input: flagged, all zeros.
    pub fn errored() -> Self {
        Self {
            has_parse_error: true,
            ..Self::default()
        }
    }
}

/// A day's result tagged with its position in the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayReport {
    /// Day of the month (1-31).
    pub day: u32,
    /// The day's classification.
    pub day_type: DayType,
    /// The computed result.
    pub result: DayResult,
}
