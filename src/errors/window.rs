// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for window construction, transformation and comparison.

use std::fmt::Debug;

use super::SpanError;

/// Errors that can occur when building or querying a [`Window`](crate::Window).
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use datetime_window::{Window, WindowError};
///
/// let early = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let late = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
///
/// match Window::try_new(late, early) {
///     Err(WindowError::InvalidRange { start, end }) => {
///         eprintln!("start {start} is after end {end}");
///     }
///     other => panic!("expected InvalidRange, got {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// The resolved start lies strictly after the resolved end.
    ///
    /// Only the validating constructor and the transformations built on it
    /// produce this error; the ordering constructor swaps the endpoints instead.
    #[error("Cannot have a start after the end ({start}, {end})")]
    InvalidRange {
        /// Rendered start instant
        start: String,
        /// Rendered end instant
        end: String,
    },

    /// An operation received an argument of the wrong kind.
    #[error("{operation} expects {expected}, got {found}")]
    TypeMismatch {
        /// The operation that rejected the argument
        operation: &'static str,
        /// What the operation accepts
        expected: &'static str,
        /// What it was given
        found: &'static str,
    },

    /// Applying a calendar span to an endpoint failed.
    #[error("Span arithmetic error: {0}")]
    Span(#[from] SpanError),
}

impl WindowError {
    /// Create an `InvalidRange` error from the offending endpoints.
    pub fn invalid_range(start: impl Debug, end: impl Debug) -> Self {
        WindowError::InvalidRange {
            start: format!("{start:?}"),
            end: format!("{end:?}"),
        }
    }

    /// Create a `TypeMismatch` error.
    pub fn type_mismatch(
        operation: &'static str,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        WindowError::TypeMismatch {
            operation,
            expected,
            found,
        }
    }
}
