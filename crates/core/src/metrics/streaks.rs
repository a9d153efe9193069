//! # Contribution Streaks
//!
//! A streak is a maximal run of consecutive calendar days with at least one
//! contribution. The contribution calendar holds exactly one entry per day, so
//! runs are detected on adjacent entries without looking at the dates.

use serde::Serialize;

use crate::models::ContributionDay;

#[cfg(test)]
#[path = "streaks_tests.rs"]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    /// Length of the run that includes the most recent day, 0 if that day has no contributions
    pub current_streak: u32,

    /// Length of the longest run
    pub longest_streak: u32,

    /// Number of runs
    pub total_streaks: u32,
}

/// Calculates streaks over days sorted by date, most recent first.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use gh_stats_core::metrics::streaks::calculate_streaks;
/// use gh_stats_core::models::ContributionDay;
///
/// let newest = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// let days: Vec<ContributionDay> = [3, 2, 0, 1, 4, 0, 5]
///     .iter()
///     .enumerate()
///     .map(|(offset, count)| ContributionDay {
///         date: newest - chrono::Duration::days(offset as i64),
///         contribution_count: *count,
///     })
///     .collect();
///
/// let summary = calculate_streaks(&days);
/// assert_eq!(summary.current_streak, 2);
/// assert_eq!(summary.longest_streak, 2);
/// assert_eq!(summary.total_streaks, 3);
/// ```
pub fn calculate_streaks(days_newest_first: &[ContributionDay]) -> StreakSummary {
    let current_streak = days_newest_first
        .iter()
        .take_while(|day| day.contribution_count > 0)
        .count() as u32;

    let mut longest_streak = 0;
    let mut total_streaks = 0;
    let mut run = 0u32;

    for day in days_newest_first {
        if day.contribution_count > 0 {
            run += 1;
            longest_streak = longest_streak.max(run);
        } else if run > 0 {
            total_streaks += 1;
            run = 0;
        }
    }

    if run > 0 {
        total_streaks += 1;
    }

    StreakSummary {
        current_streak,
        longest_streak,
        total_streaks,
    }
}
