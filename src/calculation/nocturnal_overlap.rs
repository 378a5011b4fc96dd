//! Overlap of a shift with the nocturnal window.
//!
//! Both the shift and the window live on a circular 0-1440 clock and either
//! may wrap midnight. Each is split into non-wrapping ranges on the flat line
//! and every (shift range, window band) pair is measured with
//! [`interval_overlap`]. A wrapping shift against a wrapping window therefore
//! sums four terms.

use super::clock::{MINUTES_PER_DAY, interval_overlap};

/// Splits a circular `[start, end)` into at most two flat ranges.
fn flat_ranges(start: u32, end: u32) -> [(u32, u32); 2] {
    if end >= start {
        [(start, end), (0, 0)]
    } else {
        [(start, MINUTES_PER_DAY), (0, end)]
    }
}

/// Computes how many minutes of a shift fall inside the nocturnal window.
///
/// The window is `[window_start, 1440) ∪ [0, window_end)` when
/// `window_start > window_end`, otherwise the single band
/// `[window_start, window_end)`. The result never exceeds
/// [`compute_duration`](super::compute_duration) of the same shift.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::compute_nocturnal_overlap;
///
/// // 20:00-06:00 against 22:00-05:00: 2h before midnight, 5h after
/// assert_eq!(compute_nocturnal_overlap(1200, 360, 1320, 300), 420);
///
/// // 08:00-17:00 has no nocturnal minutes
/// assert_eq!(compute_nocturnal_overlap(480, 1020, 1320, 300), 0);
/// ```
pub fn compute_nocturnal_overlap(start: u32, end: u32, window_start: u32, window_end: u32) -> u32 {
    let shift = flat_ranges(start, end);
    let window = flat_ranges(window_start, window_end);

    shift
        .iter()
        .flat_map(|&(s, e)| window.iter().map(move |&(x, y)| interval_overlap(s, e, x, y)))
        .sum()
}
