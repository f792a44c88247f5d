// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # datetime-window
//!
//! Windows between two timezone-aware instants, with calendar-aware
//! arithmetic: shift and expand them by spans of years, months, days and time
//! units, measure them, test containment and intersect them.
//!
//! "Add one month" follows the calendar. Jan 31 plus one month is the last day
//! of February, and a window's [`duration`](Window::duration) is a
//! [`CalendarSpan`] such as `+1mo +1d`, not a number of seconds.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use datetime_window::{CalendarSpan, Window};
//!
//! let utc = |m, d| Utc.with_ymd_and_hms(2024, m, d, 0, 0, 0).unwrap();
//!
//! let billing = Window::try_new(utc(1, 1), utc(3, 1))?;
//! assert_eq!(billing.duration(), &CalendarSpan::new().months(2));
//! assert_eq!(billing.duration_days(), 60.0);
//!
//! let promo = Window::new(utc(2, 1), utc(4, 1));
//! assert_eq!(billing.overlap(&promo), Some(Window::new(utc(2, 1), utc(3, 1))));
//!
//! assert!(billing.contains(utc(1, 15))?);
//! # Ok::<(), datetime_window::WindowError>(())
//! ```
//!
//! ## Reading the clock
//!
//! Pure constructors on [`Window`] never read the clock. [`WindowFactory`]
//! combines a [`WindowConfig`] (default zone, ambiguity policy, clock
//! sampling) with a [`Clock`] and fills in omitted endpoints with "now".
//!
//! ## Observability
//!
//! Transformations, factory calls and overlaps emit `tracing` spans at debug
//! and trace level. Install any subscriber to see them.

pub mod calendar_span;
pub mod clock;
pub mod config;
pub mod errors;
pub mod factory;
pub mod window;
pub mod zone;

pub(crate) mod spans;

pub use calendar_span::CalendarSpan;
pub use clock::{Clock, FixedClock, SteppingClock, SystemClock};
pub use config::{NowSampling, WindowConfig, WindowConfigBuilder};
pub use errors::{DatetimeWindowError, SpanError, WindowError};
pub use factory::WindowFactory;
pub use window::{Bound, Operand, Window};
pub use zone::{localize, Disambiguation};
