// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar labels for month-indexed axes.
//!
//! Month labels come from a fixed table indexed `0..=11` (January is `0`), so they do not depend
//! on the current date or locale.

/// Full English month names, indexed from `0` (January).
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the full month name for a 0-based month index, or `None` past December.
pub fn month_name(month: u8) -> Option<&'static str> {
    MONTH_NAMES.get(usize::from(month)).copied()
}
