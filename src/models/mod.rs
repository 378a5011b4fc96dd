//! Core data models for the Timesheet Engine.
//!
//! Raw input (tokens per day and per month) and the results derived from it.

mod day_input;
mod day_result;
mod month_totals;
mod timesheet;

pub use day_input::{DayInput, ShiftTokens, accept_token};
pub use day_result::{DayReport, DayResult};
pub use month_totals::{MonthSummary, MonthTotals};
pub use timesheet::{MonthTimesheet, TimesheetDay};
