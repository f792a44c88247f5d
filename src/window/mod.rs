// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Windows between two instants
//!
//! A [`Window`] is the closed interval `[start, end]` between two
//! timezone-aware instants, together with its calendar duration. Windows are
//! immutable: every transformation returns a new window.
//!
//! # Examples
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use datetime_window::{CalendarSpan, Window};
//!
//! let q1 = Window::try_new(
//!     Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap(),
//! )?;
//! assert_eq!(q1.duration(), &CalendarSpan::new().months(3));
//!
//! let q2 = q1.shift_window(CalendarSpan::new().months(3))?;
//! assert_eq!(q2.start(), &Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap());
//! # Ok::<(), datetime_window::WindowError>(())
//! ```

mod bound;
mod compare;
mod overlap;

pub use bound::{Bound, Operand};

use std::fmt;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use serde::Serialize;

use crate::calendar_span::CalendarSpan;
use crate::config::constants::SECONDS_PER_DAY;
use crate::errors::WindowError;
use crate::spans;

/// An ordered pair of instants, `start <= end`, and the calendar span between
/// them
///
/// Equal endpoints make a legal point window. Two windows are equal when
/// their endpoints denote the same instants, whatever zones they are shown in.
#[derive(Clone, Serialize)]
#[serde(bound(serialize = "DateTime<Tz>: Serialize"))]
pub struct Window<Tz: TimeZone = Utc> {
    start: DateTime<Tz>,
    end: DateTime<Tz>,
    duration: CalendarSpan,
}

impl<Tz: TimeZone> Window<Tz> {
    /// Creates the window between two instants given in either order
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use datetime_window::Window;
    ///
    /// let early = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    /// let late = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    ///
    /// assert_eq!(Window::new(late, early), Window::new(early, late));
    /// ```
    pub fn new(a: DateTime<Tz>, b: DateTime<Tz>) -> Self {
        if b < a {
            Self::from_ordered(b, a)
        } else {
            Self::from_ordered(a, b)
        }
    }

    /// Creates the window `[start, end]`, refusing to reorder
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidRange`] if `start` is strictly after `end`.
    pub fn try_new(start: DateTime<Tz>, end: DateTime<Tz>) -> Result<Self, WindowError> {
        if start > end {
            return Err(WindowError::invalid_range(&start, &end));
        }
        Ok(Self::from_ordered(start, end))
    }

    /// The point window at `instant`
    pub fn at(instant: DateTime<Tz>) -> Self {
        Self::from_ordered(instant.clone(), instant)
    }

    /// The window between `anchor` and `anchor + span`, in whichever order
    /// they fall
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use datetime_window::{CalendarSpan, Window};
    ///
    /// let today = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
    /// let last_week = Window::from_span(today, CalendarSpan::new().days(-7))?;
    /// assert_eq!(last_week.end(), &today);
    /// # Ok::<(), datetime_window::WindowError>(())
    /// ```
    pub fn from_span(anchor: DateTime<Tz>, span: CalendarSpan) -> Result<Self, WindowError> {
        let other = span.add_to(&anchor)?;
        Ok(Self::new(other, anchor))
    }

    fn from_ordered(start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        let duration = CalendarSpan::between_instants(&start, &end);
        Self {
            start,
            end,
            duration,
        }
    }

    pub fn start(&self) -> &DateTime<Tz> {
        &self.start
    }

    pub fn end(&self) -> &DateTime<Tz> {
        &self.end
    }

    /// Calendar span from `start` to `end`
    ///
    /// Whole months are counted on the start's wall clock and the rest is
    /// elapsed time, so adding the duration to `start` always yields `end`.
    pub fn duration(&self) -> &CalendarSpan {
        &self.duration
    }

    /// Elapsed time from `start` to `end`
    pub fn elapsed(&self) -> TimeDelta {
        self.end.clone() - self.start.clone()
    }

    /// Elapsed time as a number of 24-hour days, at one-second resolution
    ///
    /// Unlike [`duration`](Self::duration), this is a plain number that can be
    /// compared across windows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use datetime_window::Window;
    ///
    /// let window = Window::new(
    ///     Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
    /// );
    /// assert_eq!(window.duration_days(), 0.5);
    /// ```
    pub fn duration_days(&self) -> f64 {
        self.elapsed().num_seconds() as f64 / SECONDS_PER_DAY as f64
    }

    /// True if `start` and `end` are the same instant
    pub fn is_point(&self) -> bool {
        self.start == self.end
    }

    /// Moves `start` by `span`, keeping `end`
    ///
    /// # Errors
    ///
    /// [`WindowError::InvalidRange`] if the new start passes the end, or
    /// [`WindowError::Span`] if the span cannot be applied.
    pub fn shift_start(&self, span: CalendarSpan) -> Result<Self, WindowError> {
        let trace = spans::transform_window("shift_start", &span);
        let _guard = trace.enter();

        let start = span.add_to(&self.start)?;
        Self::try_new(start, self.end.clone())
    }

    /// Moves `end` by `span`, keeping `start`
    pub fn shift_end(&self, span: CalendarSpan) -> Result<Self, WindowError> {
        let trace = spans::transform_window("shift_end", &span);
        let _guard = trace.enter();

        let end = span.add_to(&self.end)?;
        Self::try_new(self.start.clone(), end)
    }

    /// Moves both endpoints by `span`
    ///
    /// Month arithmetic clamps the day of month, so shifting by a span and
    /// then by its negation only restores the window when no clamping happened.
    pub fn shift_window(&self, span: CalendarSpan) -> Result<Self, WindowError> {
        let trace = spans::transform_window("shift_window", &span);
        let _guard = trace.enter();

        let start = span.add_to(&self.start)?;
        let end = span.add_to(&self.end)?;
        Self::try_new(start, end)
    }

    /// Moves `start` back and `end` forward by `span`
    ///
    /// A negative span narrows the window from both sides.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use datetime_window::{CalendarSpan, Window};
    ///
    /// let window = Window::new(
    ///     Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap(),
    /// );
    /// let wider = window.expand(CalendarSpan::new().days(5))?;
    /// assert_eq!(wider.start(), &Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap());
    /// assert_eq!(wider.end(), &Utc.with_ymd_and_hms(2024, 1, 25, 0, 0, 0).unwrap());
    /// # Ok::<(), datetime_window::WindowError>(())
    /// ```
    pub fn expand(&self, span: CalendarSpan) -> Result<Self, WindowError> {
        let trace = spans::transform_window("expand", &span);
        let _guard = trace.enter();

        let start = span.negate().add_to(&self.start)?;
        let end = span.add_to(&self.end)?;
        Self::try_new(start, end)
    }

    /// The same window with both endpoints expressed in `zone`
    pub fn with_timezone<Tz2: TimeZone>(&self, zone: &Tz2) -> Window<Tz2> {
        Window::from_ordered(
            self.start.with_timezone(zone),
            self.end.with_timezone(zone),
        )
    }
}

impl<Tz: TimeZone> PartialEq for Window<Tz> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl<Tz: TimeZone> Eq for Window<Tz> {}

impl<Tz: TimeZone> fmt::Debug for Window<Tz> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Window({:?}, {:?})", self.start, self.end)
    }
}

impl<Tz: TimeZone> fmt::Display for Window<Tz>
where
    Tz::Offset: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{start: {}, end: {}, duration: {}}}",
            self.start, self.end, self.duration
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_new_orders_endpoints() {
        let window = Window::new(utc(2024, 3, 1), utc(2024, 1, 1));
        assert_eq!(window.start(), &utc(2024, 1, 1));
        assert_eq!(window.end(), &utc(2024, 3, 1));
        assert_eq!(window.duration(), &CalendarSpan::new().months(2));
    }

    #[test]
    fn test_try_new_rejects_inverted_range() {
        let result = Window::try_new(utc(2024, 3, 1), utc(2024, 1, 1));
        assert!(matches!(result, Err(WindowError::InvalidRange { .. })));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Cannot have a start after the end"));
    }

    #[test]
    fn test_point_window_is_legal() {
        let window = Window::try_new(utc(2024, 1, 1), utc(2024, 1, 1)).unwrap();
        assert!(window.is_point());
        assert!(window.duration().is_zero());
        assert_eq!(window.duration_days(), 0.0);
        assert_eq!(window, Window::at(utc(2024, 1, 1)));
    }

    #[test]
    fn test_duration_days_is_elapsed() {
        let window = Window::try_new(utc(2024, 1, 1), utc(2024, 3, 1)).unwrap();
        assert_eq!(window.duration_days(), 60.0);

        let window = Window::try_new(
            utc(2024, 1, 1),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 1).unwrap(),
        )
        .unwrap();
        assert!((window.duration_days() - 1.0 / 86_400.0).abs() < 1e-12);
    }

    #[test]
    fn test_shift_start_and_end() {
        let window = Window::new(utc(2024, 1, 10), utc(2024, 1, 20));

        let later_start = window.shift_start(CalendarSpan::new().days(3)).unwrap();
        assert_eq!(later_start.start(), &utc(2024, 1, 13));
        assert_eq!(later_start.end(), &utc(2024, 1, 20));

        let earlier_end = window.shift_end(CalendarSpan::new().days(-3)).unwrap();
        assert_eq!(earlier_end.start(), &utc(2024, 1, 10));
        assert_eq!(earlier_end.end(), &utc(2024, 1, 17));
    }

    #[test]
    fn test_shift_past_other_end_fails() {
        let window = Window::new(utc(2024, 1, 10), utc(2024, 1, 20));

        let result = window.shift_start(CalendarSpan::new().months(1));
        assert!(matches!(result, Err(WindowError::InvalidRange { .. })));

        let result = window.shift_end(CalendarSpan::new().days(-11));
        assert!(matches!(result, Err(WindowError::InvalidRange { .. })));
    }

    #[test]
    fn test_shift_window_translates() {
        let window = Window::new(utc(2024, 1, 31), utc(2024, 2, 10));
        let shifted = window.shift_window(CalendarSpan::new().months(1)).unwrap();
        assert_eq!(shifted.start(), &utc(2024, 2, 29));
        assert_eq!(shifted.end(), &utc(2024, 3, 10));
    }

    #[test]
    fn test_expand_and_narrow() {
        let window = Window::new(utc(2024, 1, 10), utc(2024, 1, 20));

        let wider = window.expand(CalendarSpan::new().days(5)).unwrap();
        assert_eq!(wider, Window::new(utc(2024, 1, 5), utc(2024, 1, 25)));

        let narrower = window.expand(CalendarSpan::new().days(-5)).unwrap();
        assert!(narrower.is_point());

        let inverted = window.expand(CalendarSpan::new().days(-6));
        assert!(matches!(inverted, Err(WindowError::InvalidRange { .. })));
    }

    #[test]
    fn test_span_overflow_surfaces_as_window_error() {
        let window = Window::new(utc(2024, 1, 10), utc(2024, 1, 20));
        let result = window.shift_end(CalendarSpan::new().years(10_000_000));
        assert!(matches!(result, Err(WindowError::Span(_))));
    }

    #[test]
    fn test_from_span_either_direction() {
        let anchor = utc(2024, 3, 15);

        let ahead = Window::from_span(anchor, CalendarSpan::new().months(1)).unwrap();
        assert_eq!(ahead.start(), &anchor);
        assert_eq!(ahead.end(), &utc(2024, 4, 15));

        let behind = Window::from_span(anchor, CalendarSpan::new().months(-1)).unwrap();
        assert_eq!(behind.start(), &utc(2024, 2, 15));
        assert_eq!(behind.end(), &anchor);
    }

    #[test]
    fn test_duration_uses_start_zone_wall_clock() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let start = plus_two.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        // Same instant as 2024-02-01T00:00+02:00
        let end = utc(2024, 1, 31).with_timezone(&plus_two) + TimeDelta::hours(22);

        let window = Window::new(start, end);
        assert_eq!(window.duration(), &CalendarSpan::new().months(1));
    }

    #[test]
    fn test_equality_ignores_display_zone() {
        let window = Window::new(utc(2024, 1, 1), utc(2024, 2, 1));
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();

        let shown_in_tokyo = window.with_timezone(&tokyo);
        assert_eq!(shown_in_tokyo.start(), window.start());
        assert_eq!(shown_in_tokyo.end(), window.end());
    }

    #[test]
    fn test_display_and_debug() {
        let window = Window::new(utc(2024, 1, 1), utc(2024, 3, 1));
        assert_eq!(
            window.to_string(),
            "{start: 2024-01-01 00:00:00 UTC, end: 2024-03-01 00:00:00 UTC, duration: +2mo}"
        );
        assert_eq!(
            format!("{window:?}"),
            "Window(2024-01-01T00:00:00Z, 2024-03-01T00:00:00Z)"
        );
    }

    #[test]
    fn test_serializes_endpoints_and_duration() {
        let window = Window::new(utc(2024, 1, 1), utc(2024, 1, 2));
        let json = serde_json::to_value(&window).unwrap();

        assert_eq!(json["start"], "2024-01-01T00:00:00Z");
        assert_eq!(json["end"], "2024-01-02T00:00:00Z");
        assert_eq!(json["duration"]["days"], 1);
    }
}
