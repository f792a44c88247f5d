// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar-relative durations
//!
//! A [`CalendarSpan`] counts years, months, days, hours, minutes, seconds and
//! nanoseconds separately. The fixed-ratio units carry into each other when a
//! span is normalized, but days never carry into months: a month has no fixed
//! length, so "1 month" and "30 days" are different spans.
//!
//! Years and months are applied to the wall clock of an instant in its own
//! zone, clamping the day of month (Jan 31 + 1 month is the last day of
//! February). Days and the time units are fixed lengths added as elapsed
//! time, so a day is always 24 hours, including across DST transitions.
//!
//! # Examples
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use datetime_window::CalendarSpan;
//!
//! let jan_31 = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
//! let feb_29 = CalendarSpan::new().months(1).add_to(&jan_31).unwrap();
//! assert_eq!(feb_29, Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

use chrono::{DateTime, Datelike, Months, NaiveDateTime, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};

use crate::config::constants::{
    HOURS_PER_DAY, MINUTES_PER_HOUR, MONTHS_PER_YEAR, NANOS_PER_SECOND, SECONDS_PER_DAY,
    SECONDS_PER_MINUTE,
};
use crate::errors::SpanError;
use crate::zone::{localize, Disambiguation};

/// A signed duration measured in calendar units
///
/// Equality compares normalized values, so `hours(25)` equals
/// `days(1).hours(1)` and `months(13)` equals `years(1).months(1)`, while
/// `days(31)` and `months(1)` stay different.
///
/// Two spans cannot be ordered by magnitude without an anchor; use
/// [`CalendarSpan::signum_at`] to ask how a span moves a concrete reference.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CalendarSpan {
    years: i64,
    months: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    nanoseconds: i64,
}

impl CalendarSpan {
    /// The empty span
    pub const ZERO: Self = Self::new();

    /// Creates an empty span; chain the unit setters to fill it in
    ///
    /// # Examples
    ///
    /// ```rust
    /// use datetime_window::CalendarSpan;
    ///
    /// let span = CalendarSpan::new().months(1).days(-3);
    /// assert_eq!(span.get_months(), 1);
    /// assert_eq!(span.get_days(), -3);
    /// ```
    pub const fn new() -> Self {
        Self {
            years: 0,
            months: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            nanoseconds: 0,
        }
    }

    /// Sets the years unit
    pub const fn years(self, years: i64) -> Self {
        Self { years, ..self }
    }

    /// Sets the months unit
    pub const fn months(self, months: i64) -> Self {
        Self { months, ..self }
    }

    /// Sets the days unit
    pub const fn days(self, days: i64) -> Self {
        Self { days, ..self }
    }

    /// Sets the hours unit
    pub const fn hours(self, hours: i64) -> Self {
        Self { hours, ..self }
    }

    /// Sets the minutes unit
    pub const fn minutes(self, minutes: i64) -> Self {
        Self { minutes, ..self }
    }

    /// Sets the seconds unit
    pub const fn seconds(self, seconds: i64) -> Self {
        Self { seconds, ..self }
    }

    /// Sets the nanoseconds unit (the fractional-seconds part)
    pub const fn nanoseconds(self, nanoseconds: i64) -> Self {
        Self {
            nanoseconds,
            ..self
        }
    }

    pub const fn get_years(&self) -> i64 {
        self.years
    }

    pub const fn get_months(&self) -> i64 {
        self.months
    }

    pub const fn get_days(&self) -> i64 {
        self.days
    }

    pub const fn get_hours(&self) -> i64 {
        self.hours
    }

    pub const fn get_minutes(&self) -> i64 {
        self.minutes
    }

    pub const fn get_seconds(&self) -> i64 {
        self.seconds
    }

    pub const fn get_nanoseconds(&self) -> i64 {
        self.nanoseconds
    }

    /// Returns true if every unit is zero after normalization
    pub fn is_zero(&self) -> bool {
        self.normalized().units() == [0; 7]
    }

    /// Carries overflow between the fixed-ratio units
    ///
    /// Nanoseconds carry into seconds, seconds into minutes, minutes into hours,
    /// hours into days and months into years. Each unit keeps its own sign, so
    /// `hours(-25)` becomes `days(-1).hours(-1)`. Carries saturate at the `i64`
    /// bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use datetime_window::CalendarSpan;
    ///
    /// let span = CalendarSpan::new().minutes(150).months(14).normalized();
    /// assert_eq!(span.get_hours(), 2);
    /// assert_eq!(span.get_minutes(), 30);
    /// assert_eq!(span.get_years(), 1);
    /// assert_eq!(span.get_months(), 2);
    /// ```
    pub fn normalized(&self) -> Self {
        let (nanoseconds, seconds) = carry(self.nanoseconds, NANOS_PER_SECOND, self.seconds);
        let (seconds, minutes) = carry(seconds, SECONDS_PER_MINUTE, self.minutes);
        let (minutes, hours) = carry(minutes, MINUTES_PER_HOUR, self.hours);
        let (hours, days) = carry(hours, HOURS_PER_DAY, self.days);
        let (months, years) = carry(self.months, MONTHS_PER_YEAR, self.years);
        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
            nanoseconds,
        }
    }

    /// Flips the sign of every unit
    pub fn negate(&self) -> Self {
        Self {
            years: self.years.saturating_neg(),
            months: self.months.saturating_neg(),
            days: self.days.saturating_neg(),
            hours: self.hours.saturating_neg(),
            minutes: self.minutes.saturating_neg(),
            seconds: self.seconds.saturating_neg(),
            nanoseconds: self.nanoseconds.saturating_neg(),
        }
    }

    /// Unit-wise addition, normalized
    pub fn checked_add(&self, other: &Self) -> Result<Self, SpanError> {
        self.zip_with(other, i64::checked_add, "addition")
    }

    /// Unit-wise subtraction, normalized
    ///
    /// No unit is converted into another with a variable ratio: a result such
    /// as `months(1).days(-30)` is kept as is and only gets a sign when it is
    /// applied to a reference instant.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, SpanError> {
        self.zip_with(other, i64::checked_sub, "subtraction")
    }

    /// The calendar difference from `from` to `to` on the wall clock
    ///
    /// Whole months are estimated from the year and month fields, then
    /// stepped back toward `from` until applying them no longer overshoots
    /// `to`. What remains is carried in days and the time units. Applying the
    /// result to `from` yields `to`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use datetime_window::CalendarSpan;
    ///
    /// let from = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// let to = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap().and_hms_opt(6, 0, 0).unwrap();
    ///
    /// let span = CalendarSpan::between(from, to);
    /// assert_eq!(span, CalendarSpan::new().months(1).days(24).hours(6));
    /// ```
    pub fn between(from: NaiveDateTime, to: NaiveDateTime) -> Self {
        let (months, probe) = whole_months(month_estimate(&from, &to), &from, &to, |months| {
            shift_months(from, months)
        });
        Self::from_months_and_remainder(months, to - probe)
    }

    /// The calendar difference between two instants
    ///
    /// Whole months are counted on the wall clock of `from`'s zone, resolving
    /// each probe to its earliest instant. The rest is the elapsed time from
    /// that probe to `to`, so [`add_to`](Self::add_to) on `from` yields `to`
    /// even when the two ends straddle a DST transition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use datetime_window::CalendarSpan;
    ///
    /// let from = Utc.with_ymd_and_hms(2024, 1, 31, 6, 0, 0).unwrap();
    /// let to = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    ///
    /// let span = CalendarSpan::between_instants(&from, &to);
    /// assert_eq!(span, CalendarSpan::new().months(1).hours(18));
    /// assert_eq!(span.add_to(&from).unwrap(), to);
    /// ```
    pub fn between_instants<Tz: TimeZone>(from: &DateTime<Tz>, to: &DateTime<Tz>) -> Self {
        let zone = from.timezone();
        let from_local = from.naive_local();
        let to_local = to.with_timezone(&zone).naive_local();

        let estimate = month_estimate(&from_local, &to_local);
        let (months, probe) = whole_months(estimate, from, to, |months| {
            let local = shift_months(from_local, months)?;
            localize(&zone, &local, Disambiguation::Earliest).ok()
        });
        Self::from_months_and_remainder(months, to.clone() - probe)
    }

    fn from_months_and_remainder(months: i64, remainder: TimeDelta) -> Self {
        Self::new()
            .months(months)
            .seconds(remainder.num_seconds())
            .nanoseconds(i64::from(remainder.subsec_nanos()))
            .normalized()
    }

    /// Applies the span to a naive wall-clock value
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::Overflow`] if a unit or the resulting date leaves
    /// chrono's representable range.
    pub fn checked_add_naive(&self, at: NaiveDateTime) -> Result<NaiveDateTime, SpanError> {
        let total_months = self.total_months()?;

        let shifted = shift_months(at, total_months)
            .ok_or_else(|| SpanError::overflow(format!("{at} shifted by {total_months} months")))?;

        let fixed = self.fixed_delta()?;
        shifted
            .checked_add_signed(fixed)
            .ok_or_else(|| SpanError::overflow(format!("{shifted} shifted by {fixed}")))
    }

    /// Applies the span to an instant, resolving ambiguous results to the
    /// earliest candidate
    ///
    /// Years and months move the wall clock and are resolved through the
    /// instant's zone; days and the time units are then added as elapsed time.
    ///
    /// # Errors
    ///
    /// Fails with [`SpanError::NonexistentLocalTime`] when the month-shifted
    /// wall clock falls into a DST gap, or [`SpanError::Overflow`] when the
    /// date leaves the representable range.
    pub fn add_to<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> Result<DateTime<Tz>, SpanError> {
        self.add_to_with(at, Disambiguation::Earliest)
    }

    /// Applies the span to an instant with an explicit ambiguity policy
    pub fn add_to_with<Tz: TimeZone>(
        &self,
        at: &DateTime<Tz>,
        disambiguation: Disambiguation,
    ) -> Result<DateTime<Tz>, SpanError> {
        let total_months = self.total_months()?;

        // Re-resolving an unshifted wall clock could jump across a DST fold
        let base = if total_months == 0 {
            at.clone()
        } else {
            let local = shift_months(at.naive_local(), total_months).ok_or_else(|| {
                SpanError::overflow(format!("{at:?} shifted by {total_months} months"))
            })?;
            localize(&at.timezone(), &local, disambiguation)?
        };

        let fixed = self.fixed_delta()?;
        base.clone()
            .checked_add_signed(fixed)
            .ok_or_else(|| SpanError::overflow(format!("{base:?} shifted by {fixed}")))
    }

    /// How the span moves `reference`: `Greater` if forward, `Less` if
    /// backward, `Equal` if not at all
    ///
    /// This is the comparison primitive for spans. A span with mixed signs
    /// (`months(1).days(-30)`) can be positive from one reference and negative
    /// from another, so the answer is only meaningful together with the
    /// reference it was asked for. If applying the span overflows, the sign of
    /// its most significant non-zero unit is used.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use datetime_window::CalendarSpan;
    /// use std::cmp::Ordering;
    ///
    /// let span = CalendarSpan::new().months(1).days(-30);
    /// let jan = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// let feb = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    ///
    /// assert_eq!(span.signum_at(jan), Ordering::Greater); // January has 31 days
    /// assert_eq!(span.signum_at(feb), Ordering::Less); // February has 28
    /// ```
    pub fn signum_at(&self, reference: NaiveDateTime) -> Ordering {
        match self.checked_add_naive(reference) {
            Ok(moved) => moved.cmp(&reference),
            Err(_) => self.leading_sign(),
        }
    }

    /// True if the span does not move `reference` backward
    pub fn is_non_negative_at(&self, reference: NaiveDateTime) -> bool {
        self.signum_at(reference) != Ordering::Less
    }

    fn leading_sign(&self) -> Ordering {
        self.normalized()
            .units()
            .into_iter()
            .find(|unit| *unit != 0)
            .map_or(Ordering::Equal, |unit| unit.cmp(&0))
    }

    fn total_months(&self) -> Result<i64, SpanError> {
        self.years
            .checked_mul(MONTHS_PER_YEAR)
            .and_then(|months| months.checked_add(self.months))
            .ok_or_else(|| SpanError::overflow("years and months exceed i64"))
    }

    /// Days and the time units as one elapsed duration
    fn fixed_delta(&self) -> Result<TimeDelta, SpanError> {
        let seconds = self
            .days
            .checked_mul(SECONDS_PER_DAY)
            .and_then(|s| {
                s.checked_add(self.hours.checked_mul(MINUTES_PER_HOUR * SECONDS_PER_MINUTE)?)
            })
            .and_then(|s| s.checked_add(self.minutes.checked_mul(SECONDS_PER_MINUTE)?))
            .and_then(|s| s.checked_add(self.seconds))
            .and_then(|s| s.checked_add(self.nanoseconds / NANOS_PER_SECOND))
            .ok_or_else(|| SpanError::overflow("days and time units exceed i64 seconds"))?;

        TimeDelta::try_seconds(seconds)
            .and_then(|delta| {
                delta.checked_add(&TimeDelta::nanoseconds(self.nanoseconds % NANOS_PER_SECOND))
            })
            .ok_or_else(|| SpanError::overflow(format!("{seconds} seconds")))
    }

    fn units(&self) -> [i64; 7] {
        [
            self.years,
            self.months,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
            self.nanoseconds,
        ]
    }

    fn zip_with(
        &self,
        other: &Self,
        op: fn(i64, i64) -> Option<i64>,
        what: &str,
    ) -> Result<Self, SpanError> {
        let unit = |a: i64, b: i64, name: &str| {
            op(a, b).ok_or_else(|| SpanError::overflow(format!("{name} {what}")))
        };
        Ok(Self {
            years: unit(self.years, other.years, "years")?,
            months: unit(self.months, other.months, "months")?,
            days: unit(self.days, other.days, "days")?,
            hours: unit(self.hours, other.hours, "hours")?,
            minutes: unit(self.minutes, other.minutes, "minutes")?,
            seconds: unit(self.seconds, other.seconds, "seconds")?,
            nanoseconds: unit(self.nanoseconds, other.nanoseconds, "nanoseconds")?,
        }
        .normalized())
    }
}

/// Splits `value` at `base`, moving whole multiples into `next`.
fn carry(value: i64, base: i64, next: i64) -> (i64, i64) {
    let base = base.unsigned_abs();
    let magnitude = value.unsigned_abs();
    if magnitude < base {
        return (value, next);
    }
    let sign = value.signum();
    // Both fit: the remainder is below `base`, the quotient at most 2^62
    let whole = (magnitude / base) as i64;
    let rest = (magnitude % base) as i64;
    (rest * sign, next.saturating_add(whole * sign))
}

/// Whole months between the year and month fields of two wall clocks
fn month_estimate(from: &NaiveDateTime, to: &NaiveDateTime) -> i64 {
    i64::from(to.year() - from.year()) * MONTHS_PER_YEAR + i64::from(to.month())
        - i64::from(from.month())
}

/// Steps `months` toward zero until `probe(months)` no longer passes `to`
///
/// A probe that cannot be placed counts as passing. Zero months always
/// resolves to `from`.
fn whole_months<T: PartialOrd + Clone>(
    mut months: i64,
    from: &T,
    to: &T,
    probe: impl Fn(i64) -> Option<T>,
) -> (i64, T) {
    let step = if to < from { 1 } else { -1 };
    // Wall clocks can run against the instants inside a DST fold
    if months.signum() == step {
        months = 0;
    }
    loop {
        if months == 0 {
            return (0, from.clone());
        }
        match probe(months) {
            Some(probe) if (step < 0 && *to < probe) || (step > 0 && *to > probe) => {
                months += step;
            }
            Some(probe) => return (months, probe),
            None => months += step,
        }
    }
}

fn shift_months(at: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        at.checked_add_months(magnitude)
    } else {
        at.checked_sub_months(magnitude)
    }
}

impl PartialEq for CalendarSpan {
    fn eq(&self, other: &Self) -> bool {
        self.normalized().units() == other.normalized().units()
    }
}

impl Eq for CalendarSpan {}

impl Neg for CalendarSpan {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

/// Unit-wise, saturating at the `i64` bounds. Use
/// [`CalendarSpan::checked_add`] to detect overflow.
impl Add for CalendarSpan {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| Some(a.saturating_add(b)), "addition")
            .unwrap_or(self)
    }
}

/// Unit-wise, saturating at the `i64` bounds. Use
/// [`CalendarSpan::checked_sub`] to detect overflow.
impl Sub for CalendarSpan {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| Some(a.saturating_sub(b)), "subtraction")
            .unwrap_or(self)
    }
}

impl fmt::Display for CalendarSpan {
    /// Compact signed form, e.g. `+1y +2mo -3d`; the empty span is `0s`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SUFFIXES: [&str; 7] = ["y", "mo", "d", "h", "m", "s", "ns"];

        let parts: Vec<String> = self
            .normalized()
            .units()
            .into_iter()
            .zip(SUFFIXES)
            .filter(|(value, _)| *value != 0)
            .map(|(value, suffix)| format!("{value:+}{suffix}"))
            .collect();

        if parts.is_empty() {
            f.write_str("0s")
        } else {
            f.write_str(&parts.join(" "))
        }
    }
}
