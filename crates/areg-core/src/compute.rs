//! Shift end computation logic.
//!
//! This module implements the AREG rule: a fixed 6-hour journey where all
//! but the first 15 minutes of the break count as time still owed, so
//!
//! ```text
//! shift_end = entry + 6h + (break_duration - 15min)
//! ```

use chrono::{Duration, NaiveDate};

use crate::error::{AregError, Result};
use crate::models::{ClockTime, ShiftEnd, ShiftInput, ShiftResult};
use crate::parse::{normalize, parse_clock_time};

/// Total journey length in minutes (fixed at 6 hours).
pub const JOURNEY_MINUTES: i64 = 6 * 60;

/// Break minutes that do not count toward the journey.
pub const UNCREDITED_BREAK_MINUTES: i64 = 15;

/// Arbitrary common day all three times are anchored to. Only relative
/// ordering and durations matter, never the actual date.
fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

/// Compute the shift end for three already-parsed times.
///
/// Requires `entry < break_start < break_end` on the same nominal day;
/// violations fail with [`AregError::TimesOutOfOrder`]. A break of exactly
/// 15 minutes adds nothing to the 6-hour journey; a longer break pushes
/// the end later by the excess, and a shorter one pulls it earlier.
///
/// An end time past midnight wraps to next-day wall-clock time, flagged
/// via [`ShiftEnd::next_day`].
///
/// # Examples
///
/// ```
/// use areg_core::compute::compute_shift_end;
/// use areg_core::parse::parse_clock_time;
///
/// let entry = parse_clock_time("08:00").unwrap();
/// let break_start = parse_clock_time("12:00").unwrap();
/// let break_end = parse_clock_time("12:30").unwrap();
///
/// let end = compute_shift_end(entry, break_start, break_end).unwrap();
/// assert_eq!(end.time.to_string(), "14:15");
/// assert!(!end.next_day);
/// ```
pub fn compute_shift_end(
    entry: ClockTime,
    break_start: ClockTime,
    break_end: ClockTime,
) -> Result<ShiftEnd> {
    if !(entry < break_start && break_start < break_end) {
        return Err(AregError::TimesOutOfOrder);
    }

    let break_duration = break_end
        .as_naive()
        .signed_duration_since(break_start.as_naive());
    let credited = break_duration - Duration::minutes(UNCREDITED_BREAK_MINUTES);

    // Anchor to a common reference day so plain datetime arithmetic
    // carries the end past midnight when needed.
    let start = reference_date().and_time(entry.as_naive());
    let end = start + Duration::minutes(JOURNEY_MINUTES) + credited;

    Ok(ShiftEnd {
        time: ClockTime::from_naive(end.time()),
        next_day: end.date() > reference_date(),
    })
}

/// Compute a shift result from three raw field strings.
///
/// This is a convenience function that normalizes each field, parses it
/// strictly, runs [`compute_shift_end`], and returns a complete
/// [`ShiftResult`].
///
/// # Arguments
///
/// * `entry` - Raw entry time field
/// * `break_start` - Raw break start field
/// * `break_end` - Raw break end field
///
/// # Returns
///
/// A [`ShiftResult`] on success, or an error if any field is malformed or
/// the times are out of order.
pub fn compute_shift_end_from_strings(
    entry: &str,
    break_start: &str,
    break_end: &str,
) -> Result<ShiftResult> {
    let entry_time = parse_clock_time(&normalize(entry))?;
    let break_start_time = parse_clock_time(&normalize(break_start))?;
    let break_end_time = parse_clock_time(&normalize(break_end))?;

    let shift_end = compute_shift_end(entry_time, break_start_time, break_end_time)?;

    let break_minutes =
        break_end_time.minutes_from_midnight() - break_start_time.minutes_from_midnight();

    Ok(ShiftResult {
        input: ShiftInput {
            entry: entry.trim().to_string(),
            break_start: break_start.trim().to_string(),
            break_end: break_end.trim().to_string(),
        },
        break_minutes,
        credited_minutes: break_minutes - UNCREDITED_BREAK_MINUTES,
        shift_end,
    })
}
