// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Sources of "now"
//!
//! The [`Clock`] trait is the only place the crate reads the current time.
//! [`WindowFactory`](crate::WindowFactory) calls it whenever an endpoint is
//! omitted; pure `Window` constructors never do.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

/// Supplies the current instant in a requested zone
pub trait Clock {
    /// Returns the current instant expressed in `zone`
    fn now<Tz: TimeZone>(&self, zone: &Tz) -> DateTime<Tz>;
}

impl<C: Clock> Clock for &C {
    fn now<Tz: TimeZone>(&self, zone: &Tz) -> DateTime<Tz> {
        (**self).now(zone)
    }
}

/// The system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now<Tz: TimeZone>(&self, zone: &Tz) -> DateTime<Tz> {
        Utc::now().with_timezone(zone)
    }
}

/// A clock frozen at one instant
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use datetime_window::{Clock, FixedClock};
///
/// let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let clock = FixedClock::new(at);
/// assert_eq!(clock.now(&Utc), at);
/// assert_eq!(clock.now(&Utc), at);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new<Tz: TimeZone>(instant: DateTime<Tz>) -> Self {
        Self {
            instant: instant.with_timezone(&Utc),
        }
    }
}

impl Clock for FixedClock {
    fn now<Tz: TimeZone>(&self, zone: &Tz) -> DateTime<Tz> {
        self.instant.with_timezone(zone)
    }
}

/// A clock that moves by a fixed step after every read
///
/// A negative step models a clock adjusted backwards between two reads, which
/// is how two independent "now" samples can come out in the wrong order.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeDelta, TimeZone, Utc};
/// use datetime_window::{Clock, SteppingClock};
///
/// let origin = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let clock = SteppingClock::new(origin, TimeDelta::seconds(1));
///
/// assert_eq!(clock.now(&Utc), origin);
/// assert_eq!(clock.now(&Utc), origin + TimeDelta::seconds(1));
/// assert_eq!(clock.reads(), 2);
/// ```
#[derive(Debug)]
pub struct SteppingClock {
    next: Mutex<DateTime<Utc>>,
    step: TimeDelta,
    reads: AtomicUsize,
}

impl SteppingClock {
    pub fn new<Tz: TimeZone>(origin: DateTime<Tz>, step: TimeDelta) -> Self {
        Self {
            next: Mutex::new(origin.with_timezone(&Utc)),
            step,
            reads: AtomicUsize::new(0),
        }
    }

    /// Number of times the clock has been read
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Clock for SteppingClock {
    fn now<Tz: TimeZone>(&self, zone: &Tz) -> DateTime<Tz> {
        let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);
        let current = *next;
        // Saturate at chrono's range instead of wrapping
        *next = current.checked_add_signed(self.step).unwrap_or(current);
        self.reads.fetch_add(1, Ordering::SeqCst);
        current.with_timezone(zone)
    }
}
