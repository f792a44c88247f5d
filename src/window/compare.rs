// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Comparison predicates on windows

use chrono::TimeZone;

use super::{Operand, Window};
use crate::errors::WindowError;

impl<Tz: TimeZone> Window<Tz> {
    /// Does the window start after `instant`?
    ///
    /// # Errors
    ///
    /// [`WindowError::TypeMismatch`] unless `operand` is an instant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use datetime_window::Window;
    ///
    /// let window = Window::new(
    ///     Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap(),
    /// );
    /// assert!(window.starts_after(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())?);
    /// assert!(!window.starts_after(window.start())?);
    /// # Ok::<(), datetime_window::WindowError>(())
    /// ```
    pub fn starts_after(&self, operand: impl Into<Operand<Tz>>) -> Result<bool, WindowError> {
        match operand.into() {
            Operand::Instant(instant) => Ok(instant < self.start),
            other => Err(WindowError::type_mismatch(
                "starts_after",
                "an instant",
                other.kind(),
            )),
        }
    }

    /// Does the window end after `instant`?
    ///
    /// # Errors
    ///
    /// [`WindowError::TypeMismatch`] unless `operand` is an instant.
    pub fn ends_after(&self, operand: impl Into<Operand<Tz>>) -> Result<bool, WindowError> {
        match operand.into() {
            Operand::Instant(instant) => Ok(instant < self.end),
            other => Err(WindowError::type_mismatch(
                "ends_after",
                "an instant",
                other.kind(),
            )),
        }
    }

    /// Does the window contain an instant or another window?
    ///
    /// Both ends are inclusive, so every window contains itself and its own
    /// endpoints.
    ///
    /// # Errors
    ///
    /// [`WindowError::TypeMismatch`] if `operand` is a calendar span.
    pub fn contains(&self, operand: impl Into<Operand<Tz>>) -> Result<bool, WindowError> {
        let inner = match operand.into() {
            Operand::Instant(instant) => Window::at(instant),
            Operand::Window(window) => window,
            other => {
                return Err(WindowError::type_mismatch(
                    "contains",
                    "an instant or a window",
                    other.kind(),
                ))
            }
        };
        Ok(inner.start >= self.start && inner.end <= self.end)
    }
}
