// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Window constructors that may read the clock
//!
//! [`WindowFactory`] pairs a [`WindowConfig`] with a [`Clock`]. It fills in
//! omitted endpoints with "now", attaches the default zone to naive inputs and
//! resolves span endpoints against the other end.
//!
//! # Examples
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use datetime_window::{Bound, CalendarSpan, FixedClock, WindowConfig, WindowFactory};
//!
//! let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
//! let factory = WindowFactory::new(WindowConfig::utc(), FixedClock::new(now));
//!
//! // The seven days leading up to now
//! let last_week = factory.create(Bound::Span(CalendarSpan::new().days(-7)), None)?;
//! assert_eq!(last_week.end(), &now);
//! assert_eq!(last_week.duration(), &CalendarSpan::new().days(7));
//! # Ok::<(), datetime_window::WindowError>(())
//! ```

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::config::{NowSampling, WindowConfig};
use crate::errors::WindowError;
use crate::spans;
use crate::window::{Bound, Window};
use crate::zone::localize;

/// Builds windows using a configured default zone and clock
#[derive(Debug, Clone)]
pub struct WindowFactory<Tz: TimeZone = Utc, C: Clock = SystemClock> {
    config: WindowConfig<Tz>,
    clock: C,
}

impl Default for WindowFactory<Utc, SystemClock> {
    fn default() -> Self {
        Self::new(WindowConfig::utc(), SystemClock)
    }
}

impl<Tz: TimeZone, C: Clock> WindowFactory<Tz, C> {
    pub fn new(config: WindowConfig<Tz>, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &WindowConfig<Tz> {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The current instant in the default zone
    pub fn now(&self) -> DateTime<Tz> {
        self.clock.now(&self.config.default_zone)
    }

    /// Attaches the default zone to a naive wall-clock value
    ///
    /// # Errors
    ///
    /// [`WindowError::Span`] wrapping a non-existent or (under
    /// [`Disambiguation::Reject`](crate::Disambiguation::Reject)) ambiguous
    /// local time.
    pub fn localize(&self, naive: NaiveDateTime) -> Result<DateTime<Tz>, WindowError> {
        Ok(localize(
            &self.config.default_zone,
            &naive,
            self.config.disambiguation,
        )?)
    }

    /// Creates the window between `a` and `b`, in either order
    ///
    /// `b` defaults to now. If `a` is a span it is added to `b` to obtain the
    /// other end.
    ///
    /// # Errors
    ///
    /// - [`WindowError::TypeMismatch`] if `b` is a span
    /// - [`WindowError::Span`] if a naive value cannot be localized or the
    ///   span cannot be applied
    pub fn create(&self, a: Bound<Tz>, b: Option<Bound<Tz>>) -> Result<Window<Tz>, WindowError> {
        let trace = spans::create_window("create", self.config.now_sampling);
        let _guard = trace.enter();

        let b = match b {
            Some(bound) => self.resolve_instant(bound, "create")?,
            None => self.now(),
        };
        let a = match a {
            Bound::Span(span) => span.add_to_with(&b, self.config.disambiguation)?,
            bound => self.resolve_instant(bound, "create")?,
        };

        Ok(Window::new(a, b))
    }

    /// Creates the window `[start, end]` without reordering
    ///
    /// Omitted endpoints default to now. Under [`NowSampling::Independent`]
    /// each omitted endpoint reads the clock separately, so a clock stepped
    /// backwards between the reads fails with `InvalidRange`;
    /// [`NowSampling::Shared`] reads it once per call.
    ///
    /// # Errors
    ///
    /// - [`WindowError::InvalidRange`] if the resolved start is after the end
    /// - [`WindowError::TypeMismatch`] if either endpoint is a span
    /// - [`WindowError::Span`] if a naive value cannot be localized
    pub fn create_explicit(
        &self,
        start: Option<Bound<Tz>>,
        end: Option<Bound<Tz>>,
    ) -> Result<Window<Tz>, WindowError> {
        let trace = spans::create_window("create_explicit", self.config.now_sampling);
        let _guard = trace.enter();

        let shared_now = match self.config.now_sampling {
            NowSampling::Shared if start.is_none() || end.is_none() => Some(self.now()),
            _ => None,
        };
        let sample = || {
            shared_now.clone().unwrap_or_else(|| {
                let now = self.now();
                debug!(now = ?now, "Sampled clock for omitted endpoint");
                now
            })
        };

        let start = match start {
            Some(bound) => self.resolve_instant(bound, "create_explicit")?,
            None => sample(),
        };
        let end = match end {
            Some(bound) => self.resolve_instant(bound, "create_explicit")?,
            None => sample(),
        };

        Window::try_new(start, end)
    }

    fn resolve_instant(
        &self,
        bound: Bound<Tz>,
        operation: &'static str,
    ) -> Result<DateTime<Tz>, WindowError> {
        match bound {
            Bound::Instant(instant) => Ok(instant),
            Bound::Naive(naive) => self.localize(naive),
            span @ Bound::Span(_) => Err(WindowError::type_mismatch(
                operation,
                "an instant",
                span.kind(),
            )),
        }
    }
}
