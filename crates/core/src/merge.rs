//! # Merge
//!
//! Combines the per-window results into a single result for the full range.
//!
//! - Counters are summed.
//! - Contribution weeks are concatenated in the order of the batches. Batches are
//!   expected in chronological window order.
//! - Engagement days from all windows are pooled and sorted by date. The sort does
//!   not depend on the order of the batches.
//! - Review and issue events are concatenated.

use crate::models::{ContributionStats, EngagementBatch, MergedEngagement};

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;

/// Merges contribution counters of consecutive windows. No batches yield all zeros.
pub fn merge_contributions<I>(batches: I) -> ContributionStats
where
    I: IntoIterator<Item = ContributionStats>,
{
    batches
        .into_iter()
        .fold(ContributionStats::default(), |mut merged, batch| {
            merged.total_commit_contributions += batch.total_commit_contributions;
            merged.total_pull_request_contributions += batch.total_pull_request_contributions;
            merged.total_issue_contributions += batch.total_issue_contributions;
            merged.total_repository_contributions += batch.total_repository_contributions;
            merged.restricted_contributions_count += batch.restricted_contributions_count;
            merged.total_repositories_with_contributed_commits +=
                batch.total_repositories_with_contributed_commits;

            let calendar = &mut merged.contribution_calendar;
            calendar.total_contributions += batch.contribution_calendar.total_contributions;
            calendar.weeks.extend(batch.contribution_calendar.weeks);

            merged
        })
}

/// Merges engagement data of all windows, sorting the pooled days oldest first.
pub fn merge_engagement<I>(batches: I) -> MergedEngagement
where
    I: IntoIterator<Item = EngagementBatch>,
{
    let mut merged = MergedEngagement::default();

    for batch in batches {
        merged.days.extend(
            batch
                .calendar
                .weeks
                .into_iter()
                .flat_map(|week| week.contribution_days),
        );
        merged.reviews.extend(batch.reviews);
        merged.issues.extend(batch.issues);
    }

    merged.days.sort_by_key(|day| day.date);
    merged
}
