// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Attaching a time zone to naive wall-clock values.
//!
//! Zone rules come from chrono's [`TimeZone`] implementations (`Utc`,
//! `FixedOffset`, or `chrono_tz::Tz` for IANA zones). This module only decides
//! what to do when a wall-clock value maps to zero or two instants.

use chrono::{DateTime, MappedLocalTime, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::errors::SpanError;

/// How to resolve a local time that occurs twice (a backward DST transition)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disambiguation {
    /// Pick the earlier of the two instants
    #[default]
    Earliest,
    /// Pick the later of the two instants
    Latest,
    /// Fail with [`SpanError::AmbiguousLocalTime`]
    Reject,
}

/// Attaches `zone` to a naive wall-clock value.
///
/// Non-existent local times (inside a forward DST gap) always fail with
/// [`SpanError::NonexistentLocalTime`].
///
/// # Examples
///
/// ```rust
/// use chrono::{NaiveDate, Utc};
/// use datetime_window::{localize, Disambiguation};
///
/// let naive = NaiveDate::from_ymd_opt(2024, 3, 1)
///     .unwrap()
///     .and_hms_opt(12, 0, 0)
///     .unwrap();
/// let aware = localize(&Utc, &naive, Disambiguation::Earliest).unwrap();
/// assert_eq!(aware.naive_utc(), naive);
/// ```
pub fn localize<Tz: TimeZone>(
    zone: &Tz,
    local: &NaiveDateTime,
    disambiguation: Disambiguation,
) -> Result<DateTime<Tz>, SpanError> {
    match zone.from_local_datetime(local) {
        MappedLocalTime::Single(dt) => Ok(dt),
        MappedLocalTime::Ambiguous(earliest, latest) => match disambiguation {
            Disambiguation::Earliest => Ok(earliest),
            Disambiguation::Latest => Ok(latest),
            Disambiguation::Reject => Err(SpanError::ambiguous(*local)),
        },
        MappedLocalTime::None => Err(SpanError::nonexistent(*local)),
    }
}
