// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Argument types accepted at the window boundary

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use super::Window;
use crate::calendar_span::CalendarSpan;

/// One endpoint as given to a [`WindowFactory`](crate::WindowFactory)
/// constructor
///
/// A `Span` is resolved against the other endpoint; a `Naive` value gets the
/// configured default zone attached.
#[derive(Debug, Clone, PartialEq)]
pub enum Bound<Tz: TimeZone = Utc> {
    Instant(DateTime<Tz>),
    Naive(NaiveDateTime),
    Span(CalendarSpan),
}

impl<Tz: TimeZone> Bound<Tz> {
    /// Short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Bound::Instant(_) => "an instant",
            Bound::Naive(_) => "a naive date-time",
            Bound::Span(_) => "a calendar span",
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Bound<Tz> {
    fn from(instant: DateTime<Tz>) -> Self {
        Bound::Instant(instant)
    }
}

impl<Tz: TimeZone> From<&DateTime<Tz>> for Bound<Tz> {
    fn from(instant: &DateTime<Tz>) -> Self {
        Bound::Instant(instant.clone())
    }
}

impl<Tz: TimeZone> From<NaiveDateTime> for Bound<Tz> {
    fn from(naive: NaiveDateTime) -> Self {
        Bound::Naive(naive)
    }
}

impl<Tz: TimeZone> From<CalendarSpan> for Bound<Tz> {
    fn from(span: CalendarSpan) -> Self {
        Bound::Span(span)
    }
}

/// The argument of a comparison predicate on [`Window`]
///
/// Instants are compared as point windows. Spans are accepted by the
/// conversion so that callers holding a mixed value get a `TypeMismatch`
/// instead of a silent answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand<Tz: TimeZone = Utc> {
    Instant(DateTime<Tz>),
    Window(Window<Tz>),
    Span(CalendarSpan),
}

impl<Tz: TimeZone> Operand<Tz> {
    /// Short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Instant(_) => "an instant",
            Operand::Window(_) => "a window",
            Operand::Span(_) => "a calendar span",
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Operand<Tz> {
    fn from(instant: DateTime<Tz>) -> Self {
        Operand::Instant(instant)
    }
}

impl<Tz: TimeZone> From<&DateTime<Tz>> for Operand<Tz> {
    fn from(instant: &DateTime<Tz>) -> Self {
        Operand::Instant(instant.clone())
    }
}

impl<Tz: TimeZone> From<Window<Tz>> for Operand<Tz> {
    fn from(window: Window<Tz>) -> Self {
        Operand::Window(window)
    }
}

impl<Tz: TimeZone> From<&Window<Tz>> for Operand<Tz> {
    fn from(window: &Window<Tz>) -> Self {
        Operand::Window(window.clone())
    }
}

impl<Tz: TimeZone> From<CalendarSpan> for Operand<Tz> {
    fn from(span: CalendarSpan) -> Self {
        Operand::Span(span)
    }
}
