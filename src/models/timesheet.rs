//! The raw-token holder for a whole month.
//!
//! [`MonthTimesheet`] owns one [`DayInput`] per calendar day. It stores only
//! what was typed; results are derived on demand by
//! [`calculate_month`](crate::calculation::calculate_month), so a settings
//! change is reflected without re-entering anything.

use serde::{Deserialize, Serialize};

use crate::calculation::{DayType, month_days};
use crate::error::{EngineError, EngineResult};

use super::DayInput;

/// One calendar day and its raw input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetDay {
    /// Day of the month (1-31).
    pub day: u32,
    /// The day's classification.
    pub day_type: DayType,
    /// Tokens typed for the day.
    pub input: DayInput,
}

/// Raw time entries for every day of one month.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{DayInput, MonthTimesheet, ShiftTokens};
///
/// let mut timesheet = MonthTimesheet::new(2026, 1).unwrap();
/// assert_eq!(timesheet.days().len(), 31);
///
/// let input = DayInput {
///     first_shift: ShiftTokens::new("0800", "1700"),
///     ..DayInput::default()
/// };
/// timesheet.set_day(12, input).unwrap();
///
/// // 2026-01-18 is a Sunday
/// assert!(timesheet.set_day(18, DayInput {
///     first_shift: ShiftTokens::new("0800", "1200"),
///     ..DayInput::default()
/// }).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthTimesheet {
    year: i32,
    month: u32,
    days: Vec<TimesheetDay>,
}

impl MonthTimesheet {
    /// Creates an empty timesheet with one day per calendar day.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDate`] for a month chrono cannot build.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        let days = month_days(year, month)?
            .into_iter()
            .map(|(day, day_type)| TimesheetDay {
                day,
                day_type,
                input: DayInput::default(),
            })
            .collect();

        Ok(Self { year, month, days })
    }

    /// Returns the calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the calendar month (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns every day in calendar order.
    pub fn days(&self) -> &[TimesheetDay] {
        &self.days
    }

    /// Returns one day by its day-of-month number.
    pub fn day(&self, day: u32) -> EngineResult<&TimesheetDay> {
        let index = self.index_of(day)?;
        Ok(&self.days[index])
    }

    /// Replaces the tokens of a day.
    ///
    /// # Errors
    ///
    /// - [`EngineError::DayOutOfRange`] if `day` is not in the month
    /// - [`EngineError::InvalidToken`] if a token is not 0-4 digits
    /// - [`EngineError::DayLocked`] if the day is a Sunday and `input` is not empty
    pub fn set_day(&mut self, day: u32, input: DayInput) -> EngineResult<()> {
        let index = self.index_of(day)?;
        input.validate()?;

        let entry = &mut self.days[index];
        if entry.day_type.is_exempt() && !input.is_empty() {
            return Err(EngineError::DayLocked { day });
        }

        entry.input = input;
        Ok(())
    }

    /// Clears every day's tokens.
    pub fn clear(&mut self) {
        self.days.iter_mut().for_each(|entry| entry.input.clear());
    }

    fn index_of(&self, day: u32) -> EngineResult<usize> {
        let days_in_month = self.days.len() as u32;
        if day == 0 || day > days_in_month {
            return Err(EngineError::DayOutOfRange { day, days_in_month });
        }
        Ok((day - 1) as usize)
    }
}
