//! # areg-core
//!
//! Shift end calculation library for 6-hour AREG journeys.
//!
//! This library computes the end time of an AREG work shift from three
//! wall-clock values: entry time, break start, and break end. The employer
//! credits all but the first 15 minutes of the break as time still owed,
//! so the rule is:
//!
//! ```text
//! shift_end = entry + 6h + (break_duration - 15min)
//! ```
//!
//! ## Features
//!
//! - **Strict Parsing**: Times must be two-digit `HH:MM`; out-of-range or
//!   malformed fields are rejected with descriptive errors.
//! - **Shorthand Expansion**: 4-digit all-numeric input like `0800` is
//!   normalized to `08:00` before parsing.
//! - **Ordering Validation**: `entry < break_start < break_end` is enforced;
//!   violations are errors, never panics.
//! - **Pure Computation**: Deterministic, no I/O, no shared state.
//!
//! ## Example
//!
//! ```rust
//! use areg_core::prelude::*;
//!
//! let result = compute_shift_end_from_strings("08:00", "12:00", "12:30").unwrap();
//!
//! assert_eq!(result.shift_end.time.to_string(), "14:15");
//! assert_eq!(result.break_minutes, 30);
//! assert_eq!(result.credited_minutes, 15);
//! ```

pub mod compute;
pub mod error;
pub mod models;
pub mod parse;

// Re-export commonly used types at the crate root
pub use compute::{
    JOURNEY_MINUTES, UNCREDITED_BREAK_MINUTES, compute_shift_end, compute_shift_end_from_strings,
};
pub use error::{AregError, Result};
pub use models::{ClockTime, ShiftEnd, ShiftInput, ShiftResult};
pub use parse::{normalize, parse_clock_time};

/// Prelude module for convenient imports.
///
/// ```
/// use areg_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compute::{
        JOURNEY_MINUTES, UNCREDITED_BREAK_MINUTES, compute_shift_end,
        compute_shift_end_from_strings,
    };
    pub use crate::error::{AregError, Result};
    pub use crate::models::*;
    pub use crate::parse::{normalize, parse_clock_time};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_workflow_typical_shift() {
        let entry = parse_clock_time(&normalize("0800")).unwrap();
        let break_start = parse_clock_time(&normalize("12:00")).unwrap();
        let break_end = parse_clock_time(&normalize("12:30")).unwrap();

        let end = compute_shift_end(entry, break_start, break_end).unwrap();
        assert_eq!(end.time.to_string(), "14:15");
    }

    #[test]
    fn full_workflow_with_string_input() {
        let result = compute_shift_end_from_strings("07:00", "11:00", "11:15").unwrap();

        assert_eq!(result.shift_end.time.to_string(), "13:00");
        assert_eq!(result.credited_minutes, 0);
        assert_eq!(result.input.entry, "07:00");
    }

    #[test]
    fn malformed_field_surfaces_as_format_error() {
        let result = compute_shift_end_from_strings("08:00", "abc", "12:30");
        assert!(matches!(result, Err(AregError::InvalidTimeFormat(_))));
    }

    #[test]
    fn prelude_exports() {
        // Test that prelude exports work
        use crate::prelude::*;

        let _t = parse_clock_time("08:00").unwrap();
        assert_eq!(JOURNEY_MINUTES, 360);
        assert_eq!(UNCREDITED_BREAK_MINUTES, 15);
    }
}
