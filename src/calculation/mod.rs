//! Calculation logic for the Timesheet Engine.
//!
//! This module contains the clock-time primitives (token parsing, flat
//! interval overlap, `HH:mm` rendering), shift duration and nocturnal overlap
//! on the circular 0-1440 clock, daily overtime detection, per-day error
//! detection and accounting, day-type detection for the month calendar, and
//! month aggregation.

mod clock;
mod daily_overtime;
mod day_accounting;
mod day_detection;
mod month_aggregate;
mod nocturnal_overlap;
mod shift_duration;

pub use clock::{
    END_OF_DAY_TOKEN, MINUTES_PER_DAY, format_hh_mm, interval_overlap, minutes_to_hours,
    parse_clock_token,
};
pub use daily_overtime::{OvertimeSplit, split_overtime};
pub use day_accounting::{calculate_day, has_parse_error};
pub use day_detection::{DayType, day_type_from_name, days_in_month, get_day_type, month_days};
pub use month_aggregate::{aggregate, calculate_month};
pub use nocturnal_overlap::compute_nocturnal_overlap;
pub use shift_duration::compute_duration;
