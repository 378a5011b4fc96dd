//! Per-day shift accounting.
//!
//! Combines the three shifts of a day into worked, normal, overtime and
//! nocturnal minutes under one settings snapshot. Malformed entries never
//! fail the calculation; they flag the day and zero it.

use tracing::debug;

use crate::config::TimesheetConfig;
use crate::models::{DayInput, DayResult};

use super::clock::{END_OF_DAY_TOKEN, parse_clock_token};
use super::daily_overtime::split_overtime;
use super::day_detection::DayType;
use super::nocturnal_overlap::compute_nocturnal_overlap;
use super::shift_duration::compute_duration;

/// Returns true if any completed token is not a readable clock time.
///
/// A token is completed when it has four characters. It is malformed when it
/// parses to 0 without being the literal `"0000"`. Empty and partially typed
/// tokens never flag the day.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::has_parse_error;
///
/// assert!(!has_parse_error(["0800", "1200", "", "", "", ""]));
/// assert!(!has_parse_error(["0000", "0800", "", "", "", ""]));
/// assert!(!has_parse_error(["08", "", "", "", "", ""]));
/// assert!(has_parse_error(["0800", "2575", "", "", "", ""]));
/// ```
pub fn has_parse_error<'a, I>(tokens: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    tokens.into_iter().any(|token| {
        token.chars().count() == 4 && parse_clock_token(token) == 0 && token != END_OF_DAY_TOKEN
    })
}

/// Computes one day's result from its raw tokens.
///
/// # Arguments
///
/// * `input` - The day's six tokens
/// * `day_type` - Selects the required load (Saturday and Sunday use the weekend value)
/// * `config` - The settings snapshot for this calculation
///
/// # Returns
///
/// A [`DayResult`]. Nocturnal minutes are an overlay and are not subtracted
/// from normal or overtime minutes. If any token is malformed the result is
/// [`DayResult::errored`].
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{calculate_day, DayType};
/// use timesheet_engine::config::TimesheetConfig;
/// use timesheet_engine::models::{DayInput, ShiftTokens};
///
/// let input = DayInput {
///     first_shift: ShiftTokens::new("2000", "0600"),
///     ..DayInput::default()
/// };
/// let result = calculate_day(&input, DayType::Weekday, &TimesheetConfig::default());
///
/// assert_eq!(result.worked_minutes, 600);
/// assert_eq!(result.normal_minutes, 480);
/// assert_eq!(result.overtime_minutes, 120);
/// assert_eq!(result.nocturnal_minutes, 420);
/// ```
pub fn calculate_day(input: &DayInput, day_type: DayType, config: &TimesheetConfig) -> DayResult {
    if has_parse_error(input.tokens()) {
        debug!(?day_type, tokens = ?input.tokens(), "Malformed time entry, day zeroed");
        return DayResult::errored();
    }

    let window = config.nocturnal_window;
    let (worked_minutes, nocturnal_minutes) = input
        .shifts()
        .iter()
        .map(|shift| {
            let start = parse_clock_token(&shift.entry);
            let end = parse_clock_token(&shift.exit);
            (
                compute_duration(start, end),
                compute_nocturnal_overlap(start, end, window.start, window.end),
            )
        })
        .fold((0, 0), |(worked, night), (d, n)| (worked + d, night + n));

    let required_minutes = config.required_load.for_day(day_type);
    let split = split_overtime(worked_minutes, required_minutes);

    DayResult {
        worked_minutes,
        normal_minutes: split.normal_minutes,
        overtime_minutes: split.overtime_minutes,
        nocturnal_minutes,
        has_parse_error: false,
        below_required: worked_minutes > 0 && worked_minutes < required_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NocturnalWindow, RequiredLoadTable};
    use crate::models::ShiftTokens;

    fn day(first: (&str, &str), second: (&str, &str), extra: (&str, &str)) -> DayInput {
        DayInput::new(
            ShiftTokens::new(first.0, first.1),
            ShiftTokens::new(second.0, second.1),
            ShiftTokens::new(extra.0, extra.1),
        )
    }

    fn weekday(input: &DayInput) -> DayResult {
        calculate_day(input, DayType::Weekday, &TimesheetConfig::default())
    }

    #[test]
    fn test_empty_day_is_all_zero() {
        let result = weekday(&DayInput::default());
        assert_eq!(result, DayResult::default());
    }

    #[test]
    fn test_regular_office_day() {
        let result = weekday(&day(("0800", "1200"), ("1300", "1700"), ("", "")));
        assert_eq!(result.worked_minutes, 480);
        assert_eq!(result.normal_minutes, 480);
        assert_eq!(result.overtime_minutes, 0);
        assert_eq!(result.nocturnal_minutes, 0);
        assert!(!result.below_required);
    }

    #[test]
    fn test_extra_shift_becomes_overtime() {
        let result = weekday(&day(("0800", "1200"), ("1300", "1700"), ("1800", "2000")));
        assert_eq!(result.worked_minutes, 600);
        assert_eq!(result.normal_minutes, 480);
        assert_eq!(result.overtime_minutes, 120);
    }

    #[test]
    fn test_overnight_shift_on_weekday() {
        let result = weekday(&day(("2000", "0600"), ("", ""), ("", "")));
        assert_eq!(result.worked_minutes, 600);
        assert_eq!(result.normal_minutes, 480);
        assert_eq!(result.overtime_minutes, 120);
        assert_eq!(result.nocturnal_minutes, 420);
    }

    #[test]
    fn test_nocturnal_overlay_is_not_subtracted() {
        let result = weekday(&day(("2200", "0000"), ("", ""), ("", "")));
        assert_eq!(result.worked_minutes, 120);
        assert_eq!(result.normal_minutes, 120);
        assert_eq!(result.nocturnal_minutes, 120);
    }

    #[test]
    fn test_saturday_uses_weekend_load() {
        let input = day(("0800", "1200"), ("1300", "1400"), ("", ""));
        let result = calculate_day(&input, DayType::Saturday, &TimesheetConfig::default());
        assert_eq!(result.worked_minutes, 300);
        assert_eq!(result.normal_minutes, 240);
        assert_eq!(result.overtime_minutes, 60);
    }

    #[test]
    fn test_sunday_uses_weekend_load() {
        let input = day(("0800", "1300"), ("", ""), ("", ""));
        let result = calculate_day(&input, DayType::Sunday, &TimesheetConfig::default());
        assert_eq!(result.normal_minutes, 240);
        assert_eq!(result.overtime_minutes, 60);
    }

    #[test]
    fn test_short_day_is_below_required() {
        let result = weekday(&day(("0800", "1200"), ("", ""), ("", "")));
        assert_eq!(result.normal_minutes, 240);
        assert!(result.below_required);
    }

    #[test]
    fn test_completed_invalid_token_zeroes_the_day() {
        let result = weekday(&day(("0800", "1200"), ("1300", "1700"), ("9999", "")));
        assert_eq!(result, DayResult::errored());
    }

    #[test]
    fn test_invalid_minute_zeroes_the_day() {
        let result = weekday(&day(("0800", "1275"), ("", ""), ("", "")));
        assert!(result.has_parse_error);
        assert_eq!(result.normal_minutes, 0);
    }

    #[test]
    fn test_hour_24_is_an_error_but_0000_is_not() {
        assert!(weekday(&day(("2000", "2400"), ("", ""), ("", ""))).has_parse_error);
        assert!(!weekday(&day(("2000", "0000"), ("", ""), ("", ""))).has_parse_error);
    }

    #[test]
    fn test_partial_token_is_not_an_error() {
        // "08" is still being typed: parses to 0 but is ignored by error detection
        let result = weekday(&day(("0800", "12"), ("", ""), ("", "")));
        assert!(!result.has_parse_error);
        assert_eq!(result.worked_minutes, 960);
    }

    #[test]
    fn test_non_digit_token_of_length_four_is_an_error() {
        assert!(has_parse_error(["12a4"]));
        assert!(has_parse_error(["    "]));
    }

    #[test]
    fn test_custom_settings_are_applied() {
        let config = TimesheetConfig::new(
            NocturnalWindow::new(21 * 60, 6 * 60),
            RequiredLoadTable::new(360, 120),
        );
        let input = day(("2000", "0600"), ("", ""), ("", ""));
        let result = calculate_day(&input, DayType::Weekday, &config);

        assert_eq!(result.normal_minutes, 360);
        assert_eq!(result.overtime_minutes, 240);
        assert_eq!(result.nocturnal_minutes, 540);
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let input = day(("2200", "0300"), ("0700", "0930"), ("1500", "1815"));
        let config = TimesheetConfig::default();
        assert_eq!(
            calculate_day(&input, DayType::Weekday, &config),
            calculate_day(&input, DayType::Weekday, &config)
        );
    }
}
