// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Intersection of two windows

use std::cmp::{max, min};

use chrono::TimeZone;
use tracing::trace;

use super::Window;
use crate::spans;

impl<Tz: TimeZone> Window<Tz> {
    /// The window shared by `self` and `other`, or `None` if they are disjoint
    ///
    /// The overlap is measured in calendar units rather than seconds. With
    /// `overall` the window covering both inputs, `end_to_end` the window
    /// between the two ends and `start_to_start` the window between the two
    /// starts, the overlap span is
    ///
    /// ```text
    /// overall.duration - end_to_end.duration - start_to_start.duration
    /// ```
    ///
    /// subtracted unit by unit. Its sign is taken at the wall-clock start of
    /// `overall`. When it is non-negative the result runs from the later start
    /// to the earlier end. Windows that only touch share a point window.
    ///
    /// The result does not depend on the order of the arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use datetime_window::Window;
    ///
    /// let utc = |m, d| Utc.with_ymd_and_hms(2024, m, d, 0, 0, 0).unwrap();
    ///
    /// let a = Window::new(utc(1, 1), utc(3, 1));
    /// let b = Window::new(utc(2, 1), utc(4, 1));
    /// assert_eq!(a.overlap(&b), Some(Window::new(utc(2, 1), utc(3, 1))));
    ///
    /// let c = Window::new(utc(5, 1), utc(6, 1));
    /// assert_eq!(a.overlap(&c), None);
    /// ```
    pub fn overlap(&self, other: &Window<Tz>) -> Option<Window<Tz>> {
        let trace = spans::overlap_windows((&self.start, &self.end), (&other.start, &other.end));
        let _guard = trace.enter();

        let overall = Window::new(
            min(other.start.clone(), self.start.clone()),
            max(other.end.clone(), self.end.clone()),
        );
        let end_to_end = Window::new(
            min(other.end.clone(), self.end.clone()),
            max(other.end.clone(), self.end.clone()),
        );
        let start_to_start = Window::new(
            min(other.start.clone(), self.start.clone()),
            max(other.start.clone(), self.start.clone()),
        );

        let overlap_span = overall.duration - end_to_end.duration - start_to_start.duration;
        let reference = overall.start.naive_local();

        if !overlap_span.is_non_negative_at(reference) {
            trace!(overlap_span = %overlap_span, "Windows do not overlap");
            return None;
        }

        // Month clamping can leave a small negative gap looking non-negative
        let shared = Window::try_new(start_to_start.end, end_to_end.start).ok();
        trace!(
            overlap_span = %overlap_span,
            found = shared.is_some(),
            "Computed window overlap"
        );
        shared
    }
}
