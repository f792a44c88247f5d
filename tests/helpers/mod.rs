// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for datetime-window integration tests
//!
//! Short constructors for UTC instants and windows so test bodies read like
//! the calendar dates they describe.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use datetime_window::{FixedClock, Window, WindowConfig, WindowFactory};

/// Midnight UTC on the given date
#[allow(dead_code)]
pub fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    utc_hms(year, month, day, 0, 0, 0)
}

/// A UTC instant with a time of day
#[allow(dead_code)]
pub fn utc_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .expect("valid UTC date")
}

/// A naive wall-clock value
#[allow(dead_code)]
pub fn naive(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, min, 0))
        .expect("valid naive date-time")
}

/// The window between two UTC midnights, `(year, month, day)` each
#[allow(dead_code)]
pub fn window(start: (i32, u32, u32), end: (i32, u32, u32)) -> Window {
    Window::try_new(utc(start.0, start.1, start.2), utc(end.0, end.1, end.2))
        .expect("start must not be after end")
}

/// A UTC factory whose clock is frozen at `now`
#[allow(dead_code)]
pub fn frozen_factory(now: DateTime<Utc>) -> WindowFactory<Utc, FixedClock> {
    WindowFactory::new(WindowConfig::utc(), FixedClock::new(now))
}
