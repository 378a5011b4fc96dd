//! Worked duration of a single shift.

use super::clock::MINUTES_PER_DAY;

/// Computes the worked minutes of a shift given its start and end minute.
///
/// # Behavior
///
/// - `(0, 0)` means the shift was not entered and yields 0
/// - `end >= start` yields `end - start`
/// - `end < start` crosses midnight and yields `1440 - start + end`
///
/// Malformed tokens parse to 0 and are indistinguishable here from a real
/// value; the day-level error check handles them.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::compute_duration;
///
/// assert_eq!(compute_duration(480, 1020), 540); // 08:00-17:00
/// assert_eq!(compute_duration(1380, 60), 120); // 23:00-01:00
/// assert_eq!(compute_duration(0, 0), 0);
/// ```
pub fn compute_duration(start: u32, end: u32) -> u32 {
    if start == 0 && end == 0 {
        return 0;
    }

    if end >= start {
        end - start
    } else {
        (MINUTES_PER_DAY - start) + end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::parse_clock_token;

    fn duration(entry: &str, exit: &str) -> u32 {
        compute_duration(parse_clock_token(entry), parse_clock_token(exit))
    }

    #[test]
    fn test_not_entered_is_zero() {
        assert_eq!(duration("", ""), 0);
    }

    #[test]
    fn test_same_day_shift() {
        assert_eq!(duration("0800", "1200"), 240);
        assert_eq!(duration("1300", "1730"), 270);
    }

    #[test]
    fn test_zero_length_shift() {
        assert_eq!(duration("0900", "0900"), 0);
    }

    #[test]
    fn test_midnight_crossing_shift() {
        assert_eq!(duration("2300", "0100"), 120);
        assert_eq!(duration("2000", "0600"), 600);
    }

    #[test]
    fn test_shift_ending_at_midnight_uses_sentinel() {
        // "0000" as exit is 1440, so 22:00-24:00
        assert_eq!(duration("2200", "0000"), 120);
    }

    #[test]
    fn test_shift_starting_at_midnight() {
        // "0000" as entry is 1440, which wraps to a 00:00 start
        assert_eq!(duration("0000", "0800"), 480);
    }

    #[test]
    fn test_midnight_to_midnight_is_zero() {
        assert_eq!(duration("0000", "0000"), 0);
    }

    #[test]
    fn test_missing_exit_runs_to_midnight() {
        // Only the entry was typed: exit parses to 0, which reads as crossing
        assert_eq!(duration("0800", ""), 960);
    }
}
