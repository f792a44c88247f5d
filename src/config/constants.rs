// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fixed calendar ratios
//!
//! Only the units with a fixed conversion live here. Days to months and
//! months to days have no constant ratio and are never converted.

/// Seconds in a 24-hour day, used by elapsed-time measurements
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Nanoseconds in one second
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Seconds in one minute
pub const SECONDS_PER_MINUTE: i64 = 60;

/// Minutes in one hour
pub const MINUTES_PER_HOUR: i64 = 60;

/// Hours in one day; days are always 24 elapsed hours
pub const HOURS_PER_DAY: i64 = 24;

/// Months in one year
pub const MONTHS_PER_YEAR: i64 = 12;
