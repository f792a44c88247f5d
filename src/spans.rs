// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tracing span helpers for window operations.
//!
//! Telemetry is kept apart from the arithmetic: instead of `#[instrument]`
//! attributes, each instrumented operation calls its helper here and enters
//! the returned span.
//!
//! ```rust,ignore
//! pub fn my_operation(&self, span: CalendarSpan) -> Result<Window<Tz>, WindowError> {
//!     let span = spans::transform_window("my_operation", &span);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use chrono::{DateTime, TimeZone};
use tracing::Span;

use crate::calendar_span::CalendarSpan;
use crate::config::NowSampling;

/// Create span for building a window through the factory.
///
/// Parent: caller
/// Children: none
#[inline]
pub(crate) fn create_window(operation: &'static str, now_sampling: NowSampling) -> Span {
    tracing::debug_span!(
        "datetime_window.create",
        operation = operation,
        now_sampling = ?now_sampling,
    )
}

/// Create span for shifting or expanding an existing window.
///
/// Parent: caller
/// Children: none
#[inline]
pub(crate) fn transform_window(operation: &'static str, span: &CalendarSpan) -> Span {
    tracing::trace_span!(
        "datetime_window.transform",
        operation = operation,
        span = %span,
    )
}

/// Create span for intersecting two windows.
///
/// Parent: caller
/// Children: none
#[inline]
pub(crate) fn overlap_windows<Tz: TimeZone>(
    first: (&DateTime<Tz>, &DateTime<Tz>),
    second: (&DateTime<Tz>, &DateTime<Tz>),
) -> Span {
    tracing::trace_span!(
        "datetime_window.overlap",
        first_start = ?first.0,
        first_end = ?first.1,
        second_start = ?second.0,
        second_end = ?second.1,
    )
}
