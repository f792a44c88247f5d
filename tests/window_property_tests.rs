// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for windows and calendar spans
//!
//! These tests use proptest to validate invariants of window construction,
//! shifting and intersection over a wide range of UTC instants, and over
//! America/New_York instants around its 2024 DST transitions.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::{America::New_York, Tz};
use datetime_window::{CalendarSpan, Window, WindowError};
use proptest::prelude::*;

// 1970-01-01 through 2099-12-31
const MAX_TIMESTAMP: i64 = 4_102_444_799;

// 2024-03-10T07:00:00Z and 2024-11-03T06:00:00Z
const SPRING_FORWARD: i64 = 1_710_054_000;
const FALL_BACK: i64 = 1_730_613_600;
const THREE_DAYS: i64 = 3 * 86_400;

// Helper to generate arbitrary UTC instants at one-second resolution
fn arb_instant() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..=MAX_TIMESTAMP).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
}

// Helper to generate instants whose day of month survives any month shift
fn arb_clamp_free_instant() -> impl Strategy<Value = DateTime<Utc>> {
    let fields = (1970i32..2090, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60);
    fields.prop_map(|(year, month, day, hour, minute)| {
        Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
    })
}

// Helper to generate New York instants within three days of a 2024 DST transition
fn arb_new_york_instant() -> impl Strategy<Value = DateTime<Tz>> {
    prop_oneof![
        (SPRING_FORWARD - THREE_DAYS)..=(SPRING_FORWARD + THREE_DAYS),
        (FALL_BACK - THREE_DAYS)..=(FALL_BACK + THREE_DAYS),
    ]
    .prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap().with_timezone(&New_York))
}

// Helper to generate New York windows, some of them spanning both transitions
fn arb_new_york_window() -> impl Strategy<Value = Window<Tz>> {
    (arb_new_york_instant(), arb_new_york_instant()).prop_map(|(a, b)| Window::new(a, b))
}

// Helper to generate arbitrary windows
fn arb_window() -> impl Strategy<Value = Window> {
    (arb_instant(), arb_instant()).prop_map(|(a, b)| Window::new(a, b))
}

// Spans without months or years: exact in UTC
fn arb_fixed_span() -> impl Strategy<Value = CalendarSpan> {
    let units = (-3650i64..=3650, -48i64..=48, -120i64..=120, -3600i64..=3600);
    units.prop_map(|(days, hours, minutes, seconds)| {
        CalendarSpan::new()
            .days(days)
            .hours(hours)
            .minutes(minutes)
            .seconds(seconds)
    })
}

// Spans of whole months and years
fn arb_month_span() -> impl Strategy<Value = CalendarSpan> {
    (-5i64..=5, -60i64..=60)
        .prop_map(|(years, months)| CalendarSpan::new().years(years).months(months))
}

proptest! {
    /// Property: Order-independent construction always yields start <= end
    #[test]
    fn prop_new_orders_endpoints(a in arb_instant(), b in arb_instant()) {
        let window = Window::new(a, b);

        prop_assert!(window.start() <= window.end());
        prop_assert_eq!(window.clone(), Window::new(b, a));
        prop_assert!(
            window.elapsed() >= chrono::TimeDelta::zero(),
            "Elapsed time must never be negative"
        );
    }

    /// Property: The validating constructor fails exactly when start > end
    #[test]
    fn prop_try_new_rejects_only_inverted(a in arb_instant(), b in arb_instant()) {
        let result = Window::try_new(a, b);

        if a > b {
            let rejected = matches!(result, Err(WindowError::InvalidRange { .. }));
            prop_assert!(rejected);
        } else {
            let window = result.unwrap();
            prop_assert_eq!(window.start(), &a);
            prop_assert_eq!(window.end(), &b);
        }
    }

    /// Property: Start plus the calendar duration lands exactly on the end
    #[test]
    fn prop_duration_reaches_end(window in arb_window()) {
        let reached = window.duration().add_to(window.start()).unwrap();
        prop_assert_eq!(&reached, window.end());
    }

    /// Property: Shifting by a fixed-unit span and back restores the window
    #[test]
    fn prop_fixed_shift_round_trip(window in arb_window(), span in arb_fixed_span()) {
        let restored = window
            .shift_window(span)
            .and_then(|shifted| shifted.shift_window(-span))
            .unwrap();

        prop_assert_eq!(restored, window);
    }

    /// Property: Month shifts round-trip when no day-of-month clamping occurs
    #[test]
    fn prop_month_shift_round_trip(
        a in arb_clamp_free_instant(),
        b in arb_clamp_free_instant(),
        span in arb_month_span(),
    ) {
        let window = Window::new(a, b);
        let restored = window
            .shift_window(span)
            .and_then(|shifted| shifted.shift_window(-span))
            .unwrap();

        prop_assert_eq!(restored, window);
    }

    /// Property: A window contains itself and both of its endpoints
    #[test]
    fn prop_contains_is_reflexive(window in arb_window()) {
        prop_assert!(window.contains(&window).unwrap());
        prop_assert!(window.contains(window.start()).unwrap());
        prop_assert!(window.contains(window.end()).unwrap());
    }

    /// Property: Overlap does not depend on argument order
    #[test]
    fn prop_overlap_is_symmetric(a in arb_window(), b in arb_window()) {
        prop_assert_eq!(a.overlap(&b), b.overlap(&a));
    }

    /// Property: Disjoint windows never report an overlap
    #[test]
    fn prop_disjoint_windows_have_no_overlap(a in arb_window(), b in arb_window()) {
        if a.end() < b.start() || b.end() < a.start() {
            prop_assert_eq!(a.overlap(&b), None);
        }
    }

    /// Property: Any overlap lies within both inputs
    #[test]
    fn prop_overlap_within_both(a in arb_window(), b in arb_window()) {
        if let Some(shared) = a.overlap(&b) {
            prop_assert!(a.contains(&shared).unwrap(), "{:?} not within {:?}", shared, a);
            prop_assert!(b.contains(&shared).unwrap(), "{:?} not within {:?}", shared, b);
        }
    }

    /// Property: A window overlaps itself completely
    #[test]
    fn prop_self_overlap_is_identity(window in arb_window()) {
        prop_assert_eq!(window.overlap(&window), Some(window.clone()));
    }

    /// Property: Start plus the duration reaches the end in a zone with DST
    #[test]
    fn prop_new_york_duration_reaches_end(window in arb_new_york_window()) {
        let reached = window.duration().add_to(window.start()).unwrap();
        prop_assert_eq!(&reached, window.end());
    }

    /// Property: Durations never point backwards, even inside a fold
    #[test]
    fn prop_new_york_duration_is_non_negative(window in arb_new_york_window()) {
        prop_assert!(
            window.duration().is_non_negative_at(window.start().naive_local()),
            "{:?} has duration {}",
            window,
            window.duration()
        );
    }

    /// Property: New York overlaps are symmetric and lie within both inputs
    #[test]
    fn prop_new_york_overlap_within_both(
        a in arb_new_york_window(),
        b in arb_new_york_window(),
    ) {
        let shared = a.overlap(&b);
        prop_assert_eq!(&shared, &b.overlap(&a));

        if let Some(shared) = shared {
            prop_assert!(a.contains(&shared).unwrap(), "{:?} not within {:?}", shared, a);
            prop_assert!(b.contains(&shared).unwrap(), "{:?} not within {:?}", shared, b);
        }
    }

    /// Property: `between` measures a span that reproduces its endpoint
    #[test]
    fn prop_between_round_trip(from in arb_instant(), to in arb_instant()) {
        let span = CalendarSpan::between(from.naive_utc(), to.naive_utc());
        prop_assert_eq!(span.checked_add_naive(from.naive_utc()).unwrap(), to.naive_utc());
    }
}
