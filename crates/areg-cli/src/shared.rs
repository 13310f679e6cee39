use areg_core::{AregError, ShiftResult};

use crate::error::{CliError, CliResult};

pub const STATUS_EMPTY: &str = "empty";
pub const STATUS_FORMAT: &str = "format";
pub const STATUS_ORDER: &str = "order";

/// Reject blank required fields before the core ever sees them.
pub fn require_field(name: &str, value: &str) -> CliResult<()> {
    if value.trim().is_empty() {
        Err(CliError::categorized(
            format!("Missing required field '{}'. Fill in all three times", name),
            STATUS_EMPTY,
        ))
    } else {
        Ok(())
    }
}

/// Map a core error to a CLI error carrying the matching category tag.
pub fn map_core_error(err: AregError) -> CliError {
    let status = match err {
        AregError::InvalidTimeFormat(_) => STATUS_FORMAT,
        AregError::TimesOutOfOrder => STATUS_ORDER,
    };
    CliError::categorized(err.to_string(), status)
}

/// One-line text rendering of a result, echoing the raw inputs.
pub fn format_result_line(result: &ShiftResult) -> String {
    let marker = if result.shift_end.next_day {
        " (next day)"
    } else {
        ""
    };
    format!(
        "{} {} {} -> {}{}",
        result.input.entry,
        result.input.break_start,
        result.input.break_end,
        result.shift_end.time,
        marker
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use areg_core::compute_shift_end_from_strings;

    #[test]
    fn require_field_rejects_blank() {
        assert!(require_field("entry", "").is_err());
        assert!(require_field("entry", "   ").is_err());
        assert!(require_field("entry", "08:00").is_ok());
    }

    #[test]
    fn core_errors_keep_their_category() {
        let format_err = map_core_error(AregError::InvalidTimeFormat("abc".into()));
        assert!(format_err.to_string().contains("abc"));

        let order_err = map_core_error(AregError::TimesOutOfOrder);
        assert!(order_err.to_string().contains("order"));
    }

    #[test]
    fn result_line_format() {
        let result = compute_shift_end_from_strings("08:00", "12:00", "12:30").unwrap();
        assert_eq!(
            format_result_line(&result),
            "08:00 12:00 12:30 -> 14:15"
        );
    }

    #[test]
    fn result_line_marks_next_day() {
        let result = compute_shift_end_from_strings("18:30", "21:00", "21:30").unwrap();
        assert_eq!(
            format_result_line(&result),
            "18:30 21:00 21:30 -> 00:45 (next day)"
        );
    }
}
