//! Clock-time primitives.
//!
//! Raw entries are 4-digit `HHmm` tokens. They are normalised to a minute of
//! day in `[0, 1440]`, where 1440 is the end-of-day sentinel produced by the
//! literal `"0000"`. Everything else that cannot be read as a clock time
//! collapses to 0; telling that apart from a real midnight is the job of
//! [`has_parse_error`](super::has_parse_error), not of the parser.

use rust_decimal::Decimal;

/// Minutes in one day; also the end-of-day sentinel value.
pub const MINUTES_PER_DAY: u32 = 1440;

/// The token that denotes midnight at the end of the day.
pub const END_OF_DAY_TOKEN: &str = "0000";

/// Parses an `HHmm` token into a minute of day.
///
/// # Returns
///
/// - `1440` for `"0000"`
/// - `0` for anything that is not exactly four ASCII digits, or whose hour is
///   above 23 or minute above 59
/// - `hh * 60 + mm` otherwise
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::parse_clock_token;
///
/// assert_eq!(parse_clock_token("0000"), 1440);
/// assert_eq!(parse_clock_token("0730"), 450);
/// assert_eq!(parse_clock_token("2359"), 1439);
/// assert_eq!(parse_clock_token("2400"), 0);
/// assert_eq!(parse_clock_token(""), 0);
/// ```
pub fn parse_clock_token(token: &str) -> u32 {
    if token == END_OF_DAY_TOKEN {
        return MINUTES_PER_DAY;
    }

    let bytes = token.as_bytes();
    if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_digit) {
        return 0;
    }

    let digit = |i: usize| u32::from(bytes[i] - b'0');
    let hours = digit(0) * 10 + digit(1);
    let minutes = digit(2) * 10 + digit(3);

    if hours > 23 || minutes > 59 {
        return 0;
    }

    hours * 60 + minutes
}

/// Length of the overlap between `[s, e)` and `[x, y)` on a flat line.
///
/// Callers split midnight-crossing ranges before calling this.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::interval_overlap;
///
/// assert_eq!(interval_overlap(1200, 1440, 1320, 1440), 120);
/// assert_eq!(interval_overlap(480, 1020, 1320, 1440), 0);
/// ```
pub fn interval_overlap(s: u32, e: u32, x: u32, y: u32) -> u32 {
    if e <= x || s >= y {
        return 0;
    }

    e.min(y).saturating_sub(s.max(x))
}

/// Renders minutes as zero-padded `HH:mm`; hours are not wrapped at 24.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::format_hh_mm;
///
/// assert_eq!(format_hh_mm(0), "00:00");
/// assert_eq!(format_hh_mm(485), "08:05");
/// assert_eq!(format_hh_mm(1500), "25:00");
/// ```
pub fn format_hh_mm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Converts minutes to decimal hours, rounded to two places.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::minutes_to_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(minutes_to_hours(90), Decimal::new(150, 2));
/// assert_eq!(minutes_to_hours(20), Decimal::new(33, 2));
/// ```
pub fn minutes_to_hours(minutes: u32) -> Decimal {
    (Decimal::from(minutes) / Decimal::from(60)).round_dp(2)
}
