//! HTTP API module for the Timesheet Engine.
//!
//! This module provides the REST endpoints for calculating single days and
//! whole months and for reading and replacing the current settings.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DayCalculationRequest, MonthCalculationRequest, MonthDayRequest};
pub use response::{
    ApiError, DayDisplay, DayResultResponse, FormattedTotals, HourTotals,
    MonthCalculationResult, TotalsResponse, ERROR_MARKER, EXEMPT_MARKER,
};
pub use state::AppState;
