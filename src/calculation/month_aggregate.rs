//! Month aggregation.
//!
//! Days are independent, so the fold is commutative and associative. Each pass
//! borrows a single settings snapshot for every day it computes.

use tracing::debug;

use crate::config::TimesheetConfig;
use crate::models::{DayReport, DayResult, MonthSummary, MonthTimesheet, MonthTotals};

use super::day_accounting::calculate_day;

/// Sums a collection of day results.
///
/// Errored days contribute zero minutes; see [`MonthTotals`].
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::aggregate;
/// use timesheet_engine::models::DayResult;
///
/// let days = vec![
///     DayResult { worked_minutes: 480, normal_minutes: 480, ..DayResult::default() },
///     DayResult { worked_minutes: 600, normal_minutes: 480, overtime_minutes: 120, ..DayResult::default() },
/// ];
/// let totals = aggregate(&days);
/// assert_eq!(totals.normal, 960);
/// assert_eq!(totals.extra, 120);
/// ```
pub fn aggregate<'a, I>(results: I) -> MonthTotals
where
    I: IntoIterator<Item = &'a DayResult>,
{
    results.into_iter().sum()
}

/// Computes every day of a timesheet and the month totals.
///
/// # Arguments
///
/// * `timesheet` - The month's raw tokens
/// * `config` - The settings snapshot used for every day
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::calculate_month;
/// use timesheet_engine::config::TimesheetConfig;
/// use timesheet_engine::models::{DayInput, MonthTimesheet, ShiftTokens};
///
/// let mut timesheet = MonthTimesheet::new(2026, 1).unwrap();
/// timesheet.set_day(12, DayInput {
///     first_shift: ShiftTokens::new("0800", "1800"),
///     ..DayInput::default()
/// }).unwrap();
///
/// let summary = calculate_month(&timesheet, &TimesheetConfig::default());
/// assert_eq!(summary.days.len(), 31);
/// assert_eq!(summary.totals.normal, 480);
/// assert_eq!(summary.totals.extra, 120);
/// ```
pub fn calculate_month(timesheet: &MonthTimesheet, config: &TimesheetConfig) -> MonthSummary {
    let days: Vec<DayReport> = timesheet
        .days()
        .iter()
        .map(|entry| DayReport {
            day: entry.day,
            day_type: entry.day_type,
            result: calculate_day(&entry.input, entry.day_type, config),
        })
        .collect();

    let totals = aggregate(days.iter().map(|report| &report.result));

    debug!(
        year = timesheet.year(),
        month = timesheet.month(),
        normal = totals.normal,
        extra = totals.extra,
        nocturnal = totals.nocturnal,
        errored_days = totals.errored_days,
        "Month aggregated"
    );

    MonthSummary {
        year: timesheet.year(),
        month: timesheet.month(),
        days,
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NocturnalWindow, RequiredLoadTable};
    use crate::models::{DayInput, ShiftTokens};

    fn input(entry: &str, exit: &str) -> DayInput {
        DayInput {
            first_shift: ShiftTokens::new(entry, exit),
            ..DayInput::default()
        }
    }

    fn january() -> MonthTimesheet {
        let mut timesheet = MonthTimesheet::new(2026, 1).unwrap();
        timesheet.set_day(12, input("0800", "1800")).unwrap(); // Monday, 10h
        timesheet.set_day(13, input("2000", "0600")).unwrap(); // Tuesday, overnight
        timesheet.set_day(17, input("0800", "1300")).unwrap(); // Saturday, 5h
        timesheet
    }

    #[test]
    fn test_month_totals() {
        let summary = calculate_month(&january(), &TimesheetConfig::default());

        assert_eq!(summary.year, 2026);
        assert_eq!(summary.month, 1);
        assert_eq!(summary.totals.worked, 600 + 600 + 300);
        assert_eq!(summary.totals.normal, 480 + 480 + 240);
        assert_eq!(summary.totals.extra, 120 + 120 + 60);
        assert_eq!(summary.totals.nocturnal, 420);
        assert_eq!(summary.totals.days, 31);
        assert_eq!(summary.totals.errored_days, 0);
    }

    #[test]
    fn test_reports_follow_calendar_order() {
        let summary = calculate_month(&january(), &TimesheetConfig::default());
        let numbers: Vec<u32> = summary.days.iter().map(|r| r.day).collect();
        assert_eq!(numbers, (1..=31).collect::<Vec<_>>());
        assert_eq!(summary.days[16].day_type, crate::calculation::DayType::Saturday);
    }

    #[test]
    fn test_errored_day_is_counted_but_contributes_nothing() {
        let mut timesheet = january();
        timesheet.set_day(14, input("0800", "2575")).unwrap();

        let summary = calculate_month(&timesheet, &TimesheetConfig::default());
        assert!(summary.days[13].result.has_parse_error);
        assert_eq!(summary.totals.errored_days, 1);
        assert_eq!(summary.totals.normal, 480 + 480 + 240);
    }

    #[test]
    fn test_settings_change_applies_without_reentry() {
        let timesheet = january();
        let before = calculate_month(&timesheet, &TimesheetConfig::default());

        let config = TimesheetConfig::new(
            NocturnalWindow::new(23 * 60, 5 * 60),
            RequiredLoadTable::new(600, 300),
        );
        let after = calculate_month(&timesheet, &config);

        assert_ne!(before.totals, after.totals);
        assert_eq!(after.totals.normal, 600 + 600 + 300);
        assert_eq!(after.totals.extra, 0);
        assert_eq!(after.totals.nocturnal, 60 + 300);
    }

    #[test]
    fn test_aggregate_is_order_independent() {
        let summary = calculate_month(&january(), &TimesheetConfig::default());
        let mut results: Vec<DayResult> = summary.days.iter().map(|r| r.result).collect();
        let forward = aggregate(&results);

        results.reverse();
        assert_eq!(aggregate(&results), forward);

        results.rotate_left(7);
        assert_eq!(aggregate(&results), forward);
    }

    #[test]
    fn test_cleared_timesheet_totals_zero() {
        let mut timesheet = january();
        timesheet.clear();

        let totals = calculate_month(&timesheet, &TimesheetConfig::default()).totals;
        assert_eq!(totals.worked, 0);
        assert_eq!(totals.normal, 0);
        assert_eq!(totals.days, 31);
    }
}
