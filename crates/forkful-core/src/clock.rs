// ABOUTME: Time-of-day helpers shared by the analytics crates
// ABOUTME: Minutes-since-midnight extraction and 12-hour clock formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Nutrition Intelligence

use chrono::{DateTime, Timelike, Utc};

/// Minutes in a full day
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Minutes after midnight for a timestamp, within its own calendar day
#[must_use]
pub fn minutes_since_midnight(ts: &DateTime<Utc>) -> f64 {
    f64::from(ts.hour() * 60 + ts.minute())
}

/// Format minutes-after-midnight as a 12-hour clock string, e.g. `"8:05am"`
///
/// Values are rounded to the nearest minute and wrapped into a single day.
#[must_use]
pub fn format_clock_time(minutes: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = (minutes.round().max(0.0) as u32) % MINUTES_PER_DAY;
    let hour = total / 60;
    let minute = total % 60;

    let (display_hour, suffix) = match hour {
        0 => (12, "am"),
        1..=11 => (hour, "am"),
        12 => (12, "pm"),
        _ => (hour - 12, "pm"),
    };
    format!("{display_hour}:{minute:02}{suffix}")
}
