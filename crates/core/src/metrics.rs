//! # Metrics
//!
//! Derived analytics computed from merged data.
//!
//! The metrics are organized into submodules:
//! - `streaks`: Current, longest and total contribution streaks
//! - `engagement`: Review turnaround and success rate, issue resolution time and rate
//! - `languages`: Language share and trend across repositories
//!
//! Every function in these modules is pure.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::config::NOT_AVAILABLE;
use crate::errors::StatsError;

pub mod engagement;
pub mod languages;
pub mod streaks;

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// An average duration in the form it is reported: whole hours below one day,
/// whole days otherwise, or not available when there was nothing to average.
///
/// Serialized as `"5h"`, `"3d"` or `"N/A"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turnaround {
    NotAvailable,
    Hours(i64),
    Days(i64),
}

impl Turnaround {
    /// Builds the turnaround for an average expressed in milliseconds. Both units are
    /// rounded down.
    pub fn from_average_millis(millis: f64) -> Self {
        let hours = (millis / MILLIS_PER_HOUR).floor() as i64;
        if hours < 24 {
            Turnaround::Hours(hours)
        } else {
            Turnaround::Days(hours / 24)
        }
    }

    /// Averages the given durations. An empty input is not available.
    pub fn average<I>(durations: I) -> Self
    where
        I: IntoIterator<Item = chrono::Duration>,
    {
        let (total, count) = durations
            .into_iter()
            .fold((0f64, 0u32), |(total, count), duration| {
                (total + duration.num_milliseconds() as f64, count + 1)
            });

        if count == 0 {
            Turnaround::NotAvailable
        } else {
            Turnaround::from_average_millis(total / f64::from(count))
        }
    }
}

impl fmt::Display for Turnaround {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turnaround::NotAvailable => f.write_str(NOT_AVAILABLE),
            Turnaround::Hours(hours) => write!(f, "{}h", hours),
            Turnaround::Days(days) => write!(f, "{}d", days),
        }
    }
}

impl FromStr for Turnaround {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == NOT_AVAILABLE {
            return Ok(Turnaround::NotAvailable);
        }

        let invalid = || StatsError::DataShape(format!("Invalid turnaround value: '{}'", s));
        if let Some(hours) = s.strip_suffix('h') {
            hours.parse().map(Turnaround::Hours).map_err(|_| invalid())
        } else if let Some(days) = s.strip_suffix('d') {
            days.parse().map(Turnaround::Days).map_err(|_| invalid())
        } else {
            Err(invalid())
        }
    }
}

impl Serialize for Turnaround {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Turnaround {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Rounds to two decimal places, halves away from zero.
pub fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `part / total * 100` rounded to two decimals. A `total` of zero yields 0.
pub fn rate(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    round_to_two_decimals(part as f64 / total as f64 * 100.0)
}
