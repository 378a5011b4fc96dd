//! Response types for the Timesheet Engine API.
//!
//! This module defines the result payloads, the error response structures,
//! and the mapping from [`EngineError`] to HTTP errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{DayType, format_hh_mm, minutes_to_hours};
use crate::config::TimesheetConfig;
use crate::error::EngineError;
use crate::models::{DayReport, DayResult, MonthTotals};

/// Shown in place of every value of a day with malformed input.
pub const ERROR_MARKER: &str = "ERROR";

/// Shown in place of a zero value on a day that takes no input.
pub const EXEMPT_MARKER: &str = "--";

/// `HH:mm` renderings of a day's values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayDisplay {
    /// Worked time.
    pub worked: String,
    /// Overtime.
    pub overtime: String,
    /// Nocturnal time.
    pub nocturnal: String,
}

impl DayDisplay {
    /// Renders a result the way a timesheet row shows it.
    pub fn render(day_type: DayType, result: &DayResult) -> Self {
        if result.has_parse_error {
            return Self {
                worked: ERROR_MARKER.to_string(),
                overtime: ERROR_MARKER.to_string(),
                nocturnal: ERROR_MARKER.to_string(),
            };
        }

        let cell = |minutes: u32| {
            if minutes == 0 && day_type.is_exempt() {
                EXEMPT_MARKER.to_string()
            } else {
                format_hh_mm(minutes)
            }
        };

        Self {
            worked: cell(result.worked_minutes),
            overtime: cell(result.overtime_minutes),
            nocturnal: cell(result.nocturnal_minutes),
        }
    }
}

/// A day's result with its renderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayResultResponse {
    /// Day of the month, for month calculations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    /// The day's classification.
    pub day_type: DayType,
    /// The computed minutes and flags.
    #[serde(flatten)]
    pub result: DayResult,
    /// `HH:mm` renderings.
    pub display: DayDisplay,
}

impl DayResultResponse {
    /// Builds the response for a single day calculation.
    pub fn single(day_type: DayType, result: DayResult) -> Self {
        Self {
            day: None,
            day_type,
            display: DayDisplay::render(day_type, &result),
            result,
        }
    }
}

impl From<DayReport> for DayResultResponse {
    fn from(report: DayReport) -> Self {
        Self {
            day: Some(report.day),
            ..Self::single(report.day_type, report.result)
        }
    }
}

/// Month totals in `HH:mm`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedTotals {
    /// Normal time.
    pub normal: String,
    /// Overtime.
    pub extra: String,
    /// Nocturnal time.
    pub nocturnal: String,
    /// Worked time.
    pub worked: String,
}

/// Month totals in decimal hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourTotals {
    /// Normal hours.
    pub normal: Decimal,
    /// Overtime hours.
    pub extra: Decimal,
    /// Nocturnal hours.
    pub nocturnal: Decimal,
    /// Worked hours.
    pub worked: Decimal,
}

/// Month totals in minutes, `HH:mm` and decimal hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsResponse {
    /// Raw minute totals and day counts.
    pub minutes: MonthTotals,
    /// `HH:mm` renderings.
    pub formatted: FormattedTotals,
    /// Decimal hours.
    pub hours: HourTotals,
}

impl From<MonthTotals> for TotalsResponse {
    fn from(totals: MonthTotals) -> Self {
        Self {
            formatted: FormattedTotals {
                normal: format_hh_mm(totals.normal),
                extra: format_hh_mm(totals.extra),
                nocturnal: format_hh_mm(totals.nocturnal),
                worked: format_hh_mm(totals.worked),
            },
            hours: HourTotals {
                normal: minutes_to_hours(totals.normal),
                extra: minutes_to_hours(totals.extra),
                nocturnal: minutes_to_hours(totals.nocturnal),
                worked: minutes_to_hours(totals.worked),
            },
            minutes: totals,
        }
    }
}

/// The result of a month calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCalculationResult {
    /// Unique id of this calculation.
    pub calculation_id: Uuid,
    /// When the calculation ran.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
    /// The settings snapshot every day was computed with.
    pub settings: TimesheetConfig,
    /// One entry per calendar day.
    pub days: Vec<DayResultResponse>,
    /// Month totals.
    pub totals: TotalsResponse,
    /// Calculation time in microseconds.
    pub duration_us: u64,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SETTINGS",
                    message,
                    format!("Settings field '{}' must be between 0 and 1440 minutes", field),
                ),
            },
            EngineError::InvalidDate { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_DATE", message),
            },
            EngineError::DayOutOfRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("DAY_OUT_OF_RANGE", message),
            },
            EngineError::DayLocked { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "DAY_LOCKED",
                    message,
                    "Sundays do not accept time entries",
                ),
            },
            EngineError::InvalidToken { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_TOKEN", message),
            },
            EngineError::UnknownDayName { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("UNKNOWN_DAY", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_day_locked_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::DayLocked { day: 4 }.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "DAY_LOCKED");
        assert!(api_error.error.message.contains('4'));
    }

    #[test]
    fn test_config_not_found_maps_to_server_error() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "/etc/settings.yaml".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_display_of_errored_day() {
        let display = DayDisplay::render(DayType::Weekday, &DayResult::errored());
        assert_eq!(display.worked, ERROR_MARKER);
        assert_eq!(display.overtime, ERROR_MARKER);
        assert_eq!(display.nocturnal, ERROR_MARKER);
    }

    #[test]
    fn test_display_of_sunday_without_input() {
        let display = DayDisplay::render(DayType::Sunday, &DayResult::default());
        assert_eq!(display.worked, EXEMPT_MARKER);
        assert_eq!(display.nocturnal, EXEMPT_MARKER);
    }

    #[test]
    fn test_display_of_worked_day() {
        let result = DayResult {
            worked_minutes: 600,
            normal_minutes: 480,
            overtime_minutes: 120,
            nocturnal_minutes: 0,
            has_parse_error: false,
            below_required: false,
        };
        let display = DayDisplay::render(DayType::Weekday, &result);
        assert_eq!(display.worked, "10:00");
        assert_eq!(display.overtime, "02:00");
        assert_eq!(display.nocturnal, "00:00");
    }

    #[test]
    fn test_day_response_flattens_result() {
        let report = DayReport {
            day: 9,
            day_type: DayType::Weekday,
            result: DayResult::default(),
        };
        let json = serde_json::to_value(DayResultResponse::from(report)).unwrap();
        assert_eq!(json["day"], 9);
        assert_eq!(json["worked_minutes"], 0);
        assert_eq!(json["display"]["worked"], "00:00");
    }

    #[test]
    fn test_totals_response_renders_all_forms() {
        let totals = MonthTotals {
            normal: 1500,
            extra: 90,
            nocturnal: 0,
            worked: 1590,
            days: 30,
            errored_days: 0,
        };
        let response = TotalsResponse::from(totals);
        assert_eq!(response.formatted.normal, "25:00");
        assert_eq!(response.formatted.extra, "01:30");
        assert_eq!(response.hours.normal, Decimal::from(25));
        assert_eq!(response.hours.extra, Decimal::new(15, 1));
        assert_eq!(response.minutes, totals);
    }
}
