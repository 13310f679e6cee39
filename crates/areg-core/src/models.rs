//! Core data types for shift end calculation.
//!
//! This module defines the primary types used throughout the library:
//! - [`ClockTime`] - A wall-clock time of day (no date, no timezone)
//! - [`ShiftInput`] - The three raw field values as supplied by the caller
//! - [`ShiftEnd`] - A computed shift end with next-day wrap flag
//! - [`ShiftResult`] - Complete result for a shift end calculation

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

use crate::parse::parse_clock_time;

/// A wall-clock time of day with hour 00-23 and minute 00-59.
///
/// Carries no date and no timezone. Ordering is chronological within
/// one nominal day, which is all the shift rule needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Construct from hour and minute components.
    ///
    /// Returns `None` if either component is out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(ClockTime)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_from_midnight(&self) -> i64 {
        i64::from(self.0.hour()) * 60 + i64::from(self.0.minute())
    }

    pub(crate) fn as_naive(&self) -> NaiveTime {
        self.0
    }

    pub(crate) fn from_naive(time: NaiveTime) -> Self {
        ClockTime(time)
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl std::str::FromStr for ClockTime {
    type Err = crate::error::AregError;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        parse_clock_time(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// The three raw field values of one calculation, echoed back verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct ShiftInput {
    /// Entry time as supplied by the caller.
    pub entry: String,
    /// Break start as supplied by the caller.
    pub break_start: String,
    /// Break end as supplied by the caller.
    pub break_end: String,
}

/// A computed shift end.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ShiftEnd {
    /// Wall-clock end time, wrapped past midnight if needed.
    pub time: ClockTime,
    /// True when the end time falls on the day after the entry.
    pub next_day: bool,
}

/// Complete result of a shift end calculation.
#[derive(Debug, Clone, Serialize)]
pub struct ShiftResult {
    /// The raw inputs that were processed.
    pub input: ShiftInput,
    /// Break duration in minutes.
    pub break_minutes: i64,
    /// Break minutes counted toward the journey (duration minus 15).
    pub credited_minutes: i64,
    /// The computed shift end.
    pub shift_end: ShiftEnd,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hm_valid() {
        let t = ClockTime::from_hm(8, 30).unwrap();
        assert_eq!(t.hour(), 8);
        assert_eq!(t.minute(), 30);
    }

    #[test]
    fn from_hm_rejects_out_of_range() {
        assert!(ClockTime::from_hm(24, 0).is_none());
        assert!(ClockTime::from_hm(0, 60).is_none());
    }

    #[test]
    fn display_zero_pads() {
        let t = ClockTime::from_hm(7, 5).unwrap();
        assert_eq!(t.to_string(), "07:05");
    }

    #[test]
    fn ordering_is_chronological() {
        let early = ClockTime::from_hm(8, 0).unwrap();
        let late = ClockTime::from_hm(12, 30).unwrap();
        assert!(early < late);
    }

    #[test]
    fn minutes_from_midnight() {
        let t = ClockTime::from_hm(10, 45).unwrap();
        assert_eq!(t.minutes_from_midnight(), 645);
    }

    #[test]
    fn clock_time_serializes_as_string() {
        let t = ClockTime::from_hm(14, 15).unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"14:15\"");
    }

    #[test]
    fn shift_end_serialization() {
        let end = ShiftEnd {
            time: ClockTime::from_hm(14, 15).unwrap(),
            next_day: false,
        };
        assert_eq!(
            serde_json::to_string(&end).unwrap(),
            "{\"time\":\"14:15\",\"next_day\":false}"
        );
    }
}
