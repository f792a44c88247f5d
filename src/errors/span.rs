// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for calendar span arithmetic.

use chrono::NaiveDateTime;

/// Errors that can occur while combining calendar spans or applying them to
/// an instant.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use datetime_window::{CalendarSpan, SpanError};
///
/// let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let huge = CalendarSpan::new().years(i64::MAX);
///
/// match huge.add_to(&at) {
///     Err(SpanError::Overflow { details }) => println!("overflow: {details}"),
///     other => println!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    /// A unit or the resulting date left the representable range.
    #[error("Calendar arithmetic overflow: {details}")]
    Overflow {
        /// What overflowed
        details: String,
    },

    /// The local wall-clock time produced by the arithmetic does not exist in
    /// the target zone (it falls into a forward DST transition).
    #[error("Local time {local} does not exist in the target time zone")]
    NonexistentLocalTime {
        /// The wall-clock value that could not be placed
        local: NaiveDateTime,
    },

    /// The local wall-clock time is ambiguous and the caller asked for
    /// ambiguity to be rejected.
    #[error("Local time {local} is ambiguous in the target time zone")]
    AmbiguousLocalTime {
        /// The wall-clock value that matched two instants
        local: NaiveDateTime,
    },
}

impl SpanError {
    /// Create an `Overflow` error with details.
    pub fn overflow(details: impl Into<String>) -> Self {
        SpanError::Overflow {
            details: details.into(),
        }
    }

    /// Create a `NonexistentLocalTime` error.
    pub fn nonexistent(local: NaiveDateTime) -> Self {
        SpanError::NonexistentLocalTime { local }
    }

    /// Create an `AmbiguousLocalTime` error.
    pub fn ambiguous(local: NaiveDateTime) -> Self {
        SpanError::AmbiguousLocalTime { local }
    }
}
