//! # Time Windows
//!
//! GitHub limits a single `contributionsCollection` query to a range of at most
//! one year. Longer ranges are split into consecutive windows that are queried
//! separately and merged afterwards.

use chrono::{DateTime, Months, Utc};
use serde::Serialize;

#[cfg(test)]
#[path = "windows_tests.rs"]
mod tests;

/// A half-open range of time `[start, end)` used for a single time-ranged query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Splits `[start, end]` into contiguous windows of at most one calendar year.
///
/// Each window starts where the previous one ended. The last window is shortened
/// so that it ends exactly at `end`. Adding a year to February 29 yields February 28.
///
/// If `start` is not before `end` no windows are produced.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use gh_stats_core::windows::split_into_windows;
///
/// let start = Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
///
/// let windows = split_into_windows(start, end);
/// assert_eq!(windows.len(), 2);
/// assert_eq!(windows[0].end, Utc.with_ymd_and_hms(2022, 6, 1, 0, 0, 0).unwrap());
/// assert_eq!(windows[1].end, end);
/// ```
pub fn split_into_windows(start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<TimeWindow> {
    let mut windows = Vec::new();
    let mut cursor = start;

    while cursor < end {
        let window_end = cursor
            .checked_add_months(Months::new(12))
            .map_or(end, |next_year| next_year.min(end));

        windows.push(TimeWindow {
            start: cursor,
            end: window_end,
        });
        cursor = window_end;
    }

    windows
}
