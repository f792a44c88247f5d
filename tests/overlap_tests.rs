// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for window intersection

mod helpers;

use datetime_window::Window;
use helpers::{utc, utc_hms, window};

#[test]
fn test_quarter_and_promotion_overlap() {
    let q1 = window((2024, 1, 1), (2024, 3, 31));
    let promotion = window((2024, 3, 15), (2024, 4, 15));

    assert_eq!(
        q1.overlap(&promotion),
        Some(window((2024, 3, 15), (2024, 3, 31))),
        "Overlap should run from the later start to the earlier end"
    );
}

#[test]
fn test_overlap_is_symmetric() {
    let pairs = [
        (window((2024, 1, 1), (2024, 3, 1)), window((2024, 2, 1), (2024, 4, 1))),
        (window((2024, 1, 31), (2024, 2, 29)), window((2024, 2, 28), (2024, 5, 31))),
        (window((2024, 1, 1), (2024, 1, 2)), window((2024, 6, 1), (2024, 6, 2))),
    ];

    for (a, b) in pairs {
        assert_eq!(a.overlap(&b), b.overlap(&a), "overlap({a:?}, {b:?})");
    }
}

#[test]
fn test_disjoint_windows_have_no_overlap() {
    let january = window((2024, 1, 1), (2024, 1, 31));
    let march = window((2024, 3, 1), (2024, 3, 31));

    assert_eq!(january.overlap(&march), None);
    assert_eq!(march.overlap(&january), None);
}

#[test]
fn test_gap_of_one_second_is_disjoint() {
    let morning = Window::new(utc_hms(2024, 1, 1, 0, 0, 0), utc_hms(2024, 1, 1, 11, 59, 59));
    let afternoon = Window::new(utc_hms(2024, 1, 1, 12, 0, 0), utc_hms(2024, 1, 1, 18, 0, 0));

    assert_eq!(morning.overlap(&afternoon), None);
}

#[test]
fn test_touching_windows_share_an_instant() {
    let january = window((2024, 1, 1), (2024, 2, 1));
    let february = window((2024, 2, 1), (2024, 3, 1));

    let shared = january.overlap(&february).expect("windows touch at Feb 1");
    assert!(shared.is_point());
    assert_eq!(shared.start(), &utc(2024, 2, 1));
}

#[test]
fn test_overlap_across_leap_day() {
    let winter = window((2024, 1, 15), (2024, 2, 29));
    let spring = window((2024, 2, 28), (2024, 5, 31));

    assert_eq!(
        winter.overlap(&spring),
        Some(window((2024, 2, 28), (2024, 2, 29)))
    );
}

#[test]
fn test_month_clamping_hides_one_day_overlap() {
    // The instants share Feb 28 through Feb 29, but measured in calendar units
    // the remaining span is +1 month -30 days, which is negative from Jan 31
    let winter = window((2024, 1, 31), (2024, 2, 29));
    let spring = window((2024, 2, 28), (2024, 5, 31));

    assert_eq!(winter.overlap(&spring), None);
    assert_eq!(spring.overlap(&winter), None);
}

#[test]
fn test_overlap_with_point_window() {
    let january = window((2024, 1, 1), (2024, 1, 31));
    let instant = Window::at(utc_hms(2024, 1, 15, 9, 30, 0));

    assert_eq!(january.overlap(&instant), Some(instant.clone()));
    assert_eq!(instant.overlap(&january), Some(instant));
}

#[test]
fn test_overlap_is_contained_in_both() {
    let a = Window::new(utc_hms(2023, 12, 20, 6, 0, 0), utc_hms(2024, 2, 10, 18, 0, 0));
    let b = Window::new(utc_hms(2024, 1, 31, 12, 0, 0), utc_hms(2024, 3, 31, 0, 0, 0));

    let shared = a.overlap(&b).expect("windows overlap");
    assert!(a.contains(&shared).unwrap());
    assert!(b.contains(&shared).unwrap());
    assert_eq!(shared.start(), b.start());
    assert_eq!(shared.end(), a.end());
}
