//! Request types for the Timesheet Engine API.
//!
//! This module defines the JSON request structures for the `/calculate/*`
//! endpoints.

use serde::{Deserialize, Serialize};

use crate::config::TimesheetConfig;
use crate::models::DayInput;

/// Request body for the `/calculate/day` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCalculationRequest {
    /// A day type (`weekday`, `saturday`, `sunday`) or a day-of-week name
    /// such as `"Sáb"` or `"Monday"`.
    pub day_of_week: String,
    /// The day's tokens.
    #[serde(flatten)]
    pub input: DayInput,
    /// Settings to use instead of the server's current settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<TimesheetConfig>,
}

/// Request body for the `/calculate/month` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthCalculationRequest {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
    /// Days that have tokens; days not listed are empty.
    #[serde(default)]
    pub days: Vec<MonthDayRequest>,
    /// Settings to use instead of the server's current settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<TimesheetConfig>,
}

/// Tokens for one day of a month request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthDayRequest {
    /// Day of the month (1-31).
    pub day: u32,
    /// The day's tokens.
    #[serde(flatten)]
    pub input: DayInput,
}
