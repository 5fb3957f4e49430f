// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/label formatting.

use chrono::{DateTime, Datelike, Utc};

/// English month names, indexed by zero-based month.
const MONTHS: [&str; 12] = [
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

/// Month name for a timestamp.
pub fn month_name(date: DateTime<Utc>) -> &'static str {
    MONTHS[date.month0() as usize]
}

/// Format a timestamp as `<day>/<month-name>`, the date part of a workout
/// label.
pub fn day_month_label(date: DateTime<Utc>) -> String {
    format!("{}/{}", date.day(), month_name(date))
}
