//! HTTP request handlers for the Timesheet Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_day, calculate_month, day_type_from_name};
use crate::config::TimesheetConfig;
use crate::error::EngineResult;
use crate::models::MonthTimesheet;

use super::request::{DayCalculationRequest, MonthCalculationRequest};
use super::response::{
    ApiError, ApiErrorResponse, DayResultResponse, MonthCalculationResult, TotalsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate/day", post(calculate_day_handler))
        .route("/calculate/month", post(calculate_month_handler))
        .route(
            "/settings",
            get(get_settings_handler).put(put_settings_handler),
        )
        .with_state(state)
}

/// Handler for POST /calculate/day endpoint.
///
/// Computes one day from its six tokens and a day-of-week name.
async fn calculate_day_handler(
    State(state): State<AppState>,
    payload: Result<Json<DayCalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing day calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let outcome = resolve_settings(&state, request.settings)
        .await
        .and_then(|settings| {
            let day_type = day_type_from_name(&request.day_of_week)?;
            request.input.validate()?;
            Ok((day_type, calculate_day(&request.input, day_type, &settings)))
        });

    match outcome {
        Ok((day_type, result)) => {
            info!(
                correlation_id = %correlation_id,
                %day_type,
                worked_minutes = result.worked_minutes,
                has_parse_error = result.has_parse_error,
                "Day calculation completed"
            );
            json_response(StatusCode::OK, DayResultResponse::single(day_type, result))
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Day calculation failed");
            error_response(err.into())
        }
    }
}

/// Handler for POST /calculate/month endpoint.
///
/// Builds the month's timesheet from the listed days and computes every day
/// plus the month totals against a single settings snapshot.
async fn calculate_month_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthCalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing month calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let settings = match resolve_settings(&state, request.settings).await {
        Ok(settings) => settings,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected settings override");
            return error_response(err.into());
        }
    };

    match perform_month_calculation(request, settings) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                year = result.year,
                month = result.month,
                worked_minutes = result.totals.minutes.worked,
                errored_days = result.totals.minutes.errored_days,
                duration_us = result.duration_us,
                "Month calculation completed"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Month calculation failed");
            error_response(err.into())
        }
    }
}

/// Handler for GET /settings endpoint.
async fn get_settings_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.settings().await)
}

/// Handler for PUT /settings endpoint.
///
/// Validates and replaces the in-memory settings. Later calculations use the
/// new values; nothing is written back to disk.
async fn put_settings_handler(
    State(state): State<AppState>,
    payload: Result<Json<TimesheetConfig>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let settings = match payload {
        Ok(Json(settings)) => settings,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = settings.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Rejected settings update");
        return error_response(err.into());
    }

    state.replace_settings(settings).await;
    info!(
        correlation_id = %correlation_id,
        nocturnal_start = settings.nocturnal_window.start,
        nocturnal_end = settings.nocturnal_window.end,
        weekday_load = settings.required_load.weekday,
        weekend_load = settings.required_load.weekend,
        "Settings updated"
    );

    json_response(StatusCode::OK, settings)
}

/// Picks the settings for one calculation: a validated override, or a copy
/// of the current settings.
async fn resolve_settings(
    state: &AppState,
    settings_override: Option<TimesheetConfig>,
) -> EngineResult<TimesheetConfig> {
    match settings_override {
        Some(settings) => {
            settings.validate()?;
            Ok(settings)
        }
        None => Ok(state.settings().await),
    }
}

/// Performs the month calculation for a request.
fn perform_month_calculation(
    request: MonthCalculationRequest,
    settings: TimesheetConfig,
) -> EngineResult<MonthCalculationResult> {
    let start_time = Instant::now();

    let mut timesheet = MonthTimesheet::new(request.year, request.month)?;
    for entry in request.days {
        timesheet.set_day(entry.day, entry.input)?;
    }

    let summary = calculate_month(&timesheet, &settings);
    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(MonthCalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        year: summary.year,
        month: summary.month,
        settings,
        days: summary.days.into_iter().map(Into::into).collect(),
        totals: TotalsResponse::from(summary.totals),
        duration_us,
    })
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    error_response(ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    })
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, api_error.error)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
