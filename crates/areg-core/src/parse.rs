//! Input normalization and strict time parsing.
//!
//! This module provides the two entry points of the input pipeline:
//! - [`normalize`]: expand the 4-digit shorthand (`"0800"` -> `"08:00"`)
//! - [`parse_clock_time`]: parse strictly as two-digit `HH:MM`

use crate::error::{AregError, Result};
use crate::models::ClockTime;

/// Expand the 4-digit shorthand for a time field.
///
/// If the trimmed input is exactly four ASCII digits, a colon is inserted
/// after the second digit (`"0800"` -> `"08:00"`). Anything else passes
/// through unchanged. No value validation happens here; `"9999"` becomes
/// `"99:99"` and is rejected by [`parse_clock_time`].
///
/// # Examples
///
/// ```
/// use areg_core::parse::normalize;
///
/// assert_eq!(normalize("0800"), "08:00");
/// assert_eq!(normalize("08:00"), "08:00");
/// assert_eq!(normalize("800"), "800");
/// ```
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();

    if trimmed.len() == 4 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}:{}", &trimmed[..2], &trimmed[2..])
    } else {
        trimmed.to_string()
    }
}

/// Parse a string strictly as `HH:MM`.
///
/// The input must be exactly five characters: two digits, a colon, two
/// digits, with hour 00-23 and minute 00-59. Everything else fails with
/// [`AregError::InvalidTimeFormat`], including single-digit hours like
/// `"8:00"`.
///
/// # Examples
///
/// ```
/// use areg_core::parse::parse_clock_time;
///
/// let t = parse_clock_time("08:30").unwrap();
/// assert_eq!(t.to_string(), "08:30");
///
/// assert!(parse_clock_time("25:00").is_err());
/// assert!(parse_clock_time("8:00").is_err());
/// ```
pub fn parse_clock_time(text: &str) -> Result<ClockTime> {
    let trimmed = text.trim();
    let bytes = trimmed.as_bytes();

    let well_formed = bytes.len() == 5
        && bytes[2] == b':'
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit();

    if !well_formed {
        return Err(AregError::InvalidTimeFormat(text.to_string()));
    }

    let hour = u32::from(bytes[0] - b'0') * 10 + u32::from(bytes[1] - b'0');
    let minute = u32::from(bytes[3] - b'0') * 10 + u32::from(bytes[4] - b'0');

    ClockTime::from_hm(hour, minute).ok_or_else(|| AregError::InvalidTimeFormat(text.to_string()))
}
