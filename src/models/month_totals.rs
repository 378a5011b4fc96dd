//! Month-level totals.

use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use super::{DayReport, DayResult};

/// Pointwise sums of day results over a month.
///
/// Errored days contribute nothing to the minute sums but are still counted
/// in `days` and `errored_days`.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{DayResult, MonthTotals};
///
/// let days = [
///     DayResult { worked_minutes: 600, normal_minutes: 480, overtime_minutes: 120, ..DayResult::default() },
///     DayResult::errored(),
/// ];
/// let totals: MonthTotals = days.iter().sum();
/// assert_eq!(totals.normal, 480);
/// assert_eq!(totals.extra, 120);
/// assert_eq!(totals.days, 2);
/// assert_eq!(totals.errored_days, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthTotals {
    /// Sum of normal minutes.
    pub normal: u32,
    /// Sum of overtime minutes.
    pub extra: u32,
    /// Sum of nocturnal minutes.
    pub nocturnal: u32,
    /// Sum of worked minutes.
    pub worked: u32,
    /// Number of days folded in.
    pub days: u32,
    /// Number of those days flagged with a parse error.
    pub errored_days: u32,
}

impl Add for MonthTotals {
    type Output = MonthTotals;

    fn add(self, other: MonthTotals) -> MonthTotals {
        MonthTotals {
            normal: self.normal + other.normal,
            extra: self.extra + other.extra,
            nocturnal: self.nocturnal + other.nocturnal,
            worked: self.worked + other.worked,
            days: self.days + other.days,
            errored_days: self.errored_days + other.errored_days,
        }
    }
}

impl From<&DayResult> for MonthTotals {
    fn from(result: &DayResult) -> Self {
        if result.has_parse_error {
            return MonthTotals {
                days: 1,
                errored_days: 1,
                ..MonthTotals::default()
            };
        }

        MonthTotals {
            normal: result.normal_minutes,
            extra: result.overtime_minutes,
            nocturnal: result.nocturnal_minutes,
            worked: result.worked_minutes,
            days: 1,
            errored_days: 0,
        }
    }
}

impl<'a> Sum<&'a DayResult> for MonthTotals {
    fn sum<I: Iterator<Item = &'a DayResult>>(iter: I) -> Self {
        iter.map(MonthTotals::from).fold(MonthTotals::default(), Add::add)
    }
}

impl Sum for MonthTotals {
    fn sum<I: Iterator<Item = MonthTotals>>(iter: I) -> Self {
        iter.fold(MonthTotals::default(), Add::add)
    }
}

/// Every day of a month with its result, plus the month totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
    /// One report per day, in calendar order.
    pub days: Vec<DayReport>,
    /// Totals over `days`.
    pub totals: MonthTotals,
}
