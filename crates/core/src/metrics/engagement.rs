//! # Engagement Metrics
//!
//! Review and issue metrics. An average over nothing is reported as
//! [`Turnaround::NotAvailable`] while a rate over nothing is reported as 0.

use tracing::debug;

use super::streaks::calculate_streaks;
use super::{rate, Turnaround};
use crate::models::{ContributionDay, GitHubEngagement, IssueEvent, MergedEngagement, ReviewEvent};

#[cfg(test)]
#[path = "engagement_tests.rs"]
mod tests;

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewMetrics {
    pub total_reviews: u32,

    /// Mean time from pull request creation to the review, for merged pull requests only
    pub average_review_time: Turnaround,

    pub review_success_rate: f64,
    pub total_review_comments: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IssueMetrics {
    /// Mean time from creation to closing, for closed issues only
    pub average_issue_resolution_time: Turnaround,

    pub issue_resolution_rate: f64,
}

pub fn review_metrics(reviews: &[ReviewEvent]) -> ReviewMetrics {
    let average_review_time = Turnaround::average(
        reviews
            .iter()
            .filter(|review| review.pull_request_merged_at.is_some())
            .map(|review| review.occurred_at - review.pull_request_created_at),
    );

    let merged = reviews.iter().filter(|review| review.is_merged()).count();

    ReviewMetrics {
        total_reviews: reviews.len() as u32,
        average_review_time,
        review_success_rate: rate(merged, reviews.len()),
        total_review_comments: reviews.iter().map(|review| review.comment_count).sum(),
    }
}

pub fn issue_metrics(issues: &[IssueEvent]) -> IssueMetrics {
    let average_issue_resolution_time = Turnaround::average(
        issues
            .iter()
            .filter_map(|issue| issue.closed_at.map(|closed_at| closed_at - issue.created_at)),
    );

    let closed = issues.iter().filter(|issue| issue.is_closed()).count();

    IssueMetrics {
        average_issue_resolution_time,
        issue_resolution_rate: rate(closed, issues.len()),
    }
}

/// Derives all engagement metrics from the merged engagement data.
///
/// `merged.days` must be sorted oldest first, as produced by
/// [`crate::merge::merge_engagement`].
pub fn derive_engagement(merged: &MergedEngagement) -> GitHubEngagement {
    let newest_first: Vec<ContributionDay> = merged.days.iter().rev().copied().collect();
    let streaks = calculate_streaks(&newest_first);
    let reviews = review_metrics(&merged.reviews);
    let issues = issue_metrics(&merged.issues);

    debug!(
        days = newest_first.len(),
        reviews = reviews.total_reviews,
        issues = merged.issues.len(),
        current_streak = streaks.current_streak,
        "Derived engagement metrics"
    );

    GitHubEngagement {
        current_streak: streaks.current_streak,
        longest_streak: streaks.longest_streak,
        total_streaks: streaks.total_streaks,
        total_reviews: reviews.total_reviews,
        average_review_time: reviews.average_review_time,
        review_success_rate: reviews.review_success_rate,
        total_review_comments: reviews.total_review_comments,
        average_issue_resolution_time: issues.average_issue_resolution_time,
        issue_resolution_rate: issues.issue_resolution_rate,
    }
}
