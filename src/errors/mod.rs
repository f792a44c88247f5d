// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the datetime-window library.
//!
//! Like the rest of the crate, errors follow a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling
//!   ([`WindowError`], [`SpanError`])
//! - **Unified error type** ([`DatetimeWindowError`]) for callers that do not
//!   need to tell the sources apart
//!
//! # Examples
//!
//! ## Fine-grained error handling
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use datetime_window::{CalendarSpan, Window, WindowError};
//!
//! let window = Window::new(
//!     Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap(),
//! );
//!
//! match window.shift_start(CalendarSpan::new().months(1)) {
//!     Ok(shifted) => println!("{shifted}"),
//!     Err(WindowError::InvalidRange { start, end }) => {
//!         eprintln!("shift would invert the window: {start} > {end}");
//!     }
//!     Err(e) => eprintln!("other error: {e}"),
//! }
//! ```
//!
//! ## Using the unified error type
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use datetime_window::{CalendarSpan, DatetimeWindowError, Window};
//!
//! fn widen() -> Result<Window, DatetimeWindowError> {
//!     let window = Window::at(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
//!     Ok(window.expand(CalendarSpan::new().days(1))?)
//! }
//! # widen().unwrap();
//! ```

mod span;
mod window;

pub use span::SpanError;
pub use window::WindowError;

/// Unified error type for all datetime-window operations.
///
/// Module-specific error types convert into it via `From`, so `?` works
/// across the crate's APIs.
#[derive(Debug, thiserror::Error)]
pub enum DatetimeWindowError {
    /// Error from window construction, transformation or comparison.
    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    /// Error from calendar span arithmetic.
    #[error("Span error: {0}")]
    Span(#[from] SpanError),
}
