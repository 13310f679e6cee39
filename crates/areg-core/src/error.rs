//! Error types for areg-core.
//!
//! This module defines the error type used throughout the library,
//! with specific categories for malformed time strings and
//! chronological ordering violations.

use thiserror::Error;

/// The main error type for shift end calculations.
#[derive(Debug, Error)]
pub enum AregError {
    /// Input is not a valid `HH:MM` time (bad pattern or out-of-range values).
    #[error("Invalid time '{0}'. Expected HH:MM format (e.g. 08:30)")]
    InvalidTimeFormat(String),

    /// The three times do not satisfy entry < break start < break end.
    #[error("Times out of order. Expected entry < break start < break end")]
    TimesOutOfOrder,
}

/// Result type alias for shift end calculations.
pub type Result<T> = std::result::Result<T, AregError>;
