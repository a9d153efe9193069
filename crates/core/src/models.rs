//! # Models
//!
//! This module contains the normalized data model produced by the pipeline.
//!
//! The models are serialized with camelCase field names so that the JSON output
//! keeps the field names used by the GitHub API.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::metrics::Turnaround;

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Profile information of a GitHub user.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use gh_stats_core::models::GitHubUser;
///
/// let user = GitHubUser {
///     login: "octocat".to_string(),
///     name: "The Octocat".to_string(),
///     avatar_url: "https://avatars.githubusercontent.com/u/583231".to_string(),
///     bio: String::new(),
///     location: "San Francisco".to_string(),
///     company: "@github".to_string(),
///     created_at: Utc.with_ymd_and_hms(2011, 1, 25, 18, 44, 36).unwrap(),
///     followers: 100,
///     following: 9,
///     repositories: 8,
///     starred_repositories: 3,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubUser {
    pub login: String,

    /// Display name, the login when the user did not set one
    pub name: String,

    pub avatar_url: String,
    pub bio: String,
    pub location: String,
    pub company: String,
    pub created_at: DateTime<Utc>,
    pub followers: u64,
    pub following: u64,
    pub repositories: u64,
    pub starred_repositories: u64,
}

/// Number of contributions on a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub contribution_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek {
    pub contribution_days: Vec<ContributionDay>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    pub total_contributions: u64,
    pub weeks: Vec<ContributionWeek>,
}

impl ContributionCalendar {
    /// All days of the calendar in week order.
    pub fn days(&self) -> impl Iterator<Item = &ContributionDay> {
        self.weeks.iter().flat_map(|week| week.contribution_days.iter())
    }
}

/// Contribution counters for a time range.
///
/// A value of this type describes either a single window or, after merging,
/// the complete requested range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContributionStats {
    pub total_commit_contributions: u64,
    pub total_pull_request_contributions: u64,
    pub total_issue_contributions: u64,
    pub total_repository_contributions: u64,
    pub restricted_contributions_count: u64,
    pub total_repositories_with_contributed_commits: u64,
    pub contribution_calendar: ContributionCalendar,
}

/// Name and color of a programming language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub color: Option<String>,
}

/// A repository owned by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub name: String,
    pub description: String,
    pub url: String,
    pub stargazer_count: u64,
    pub fork_count: u64,
    pub is_private: bool,
    pub primary_language: Option<Language>,
}

/// Direction of the activity for a language.
///
/// The value is derived from the number of commits on the default branch of a
/// repository using the language. That number covers the full lifetime of the
/// repository, so this is an approximation of activity rather than a rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

/// Size of a language inside a single repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageUsage {
    pub language: Language,

    /// Bytes of code written in the language
    pub size: u64,
}

/// Languages of a single repository, as used for language aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLanguages {
    pub is_private: bool,

    /// Commits on the default branch over the lifetime of the repository
    pub default_branch_commits: u64,

    pub languages: Vec<LanguageUsage>,
}

/// Usage of a language across all repositories of the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStat {
    pub name: String,
    pub color: Option<String>,
    pub percentage: f64,
    pub repo_count: u32,

    /// Total size in bytes across repositories
    pub lines_of_code: u64,

    pub trend: Trend,
    pub private_repo_count: u32,
}

/// A pull request review performed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEvent {
    pub pull_request_created_at: DateTime<Utc>,
    pub pull_request_merged_at: Option<DateTime<Utc>>,
    pub pull_request_state: String,
    pub comment_count: u64,
    pub occurred_at: DateTime<Utc>,
}

impl ReviewEvent {
    pub fn is_merged(&self) -> bool {
        self.pull_request_state == "MERGED"
    }
}

/// An issue opened by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueEvent {
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub state: String,
    pub comment_count: u64,
}

impl IssueEvent {
    pub fn is_closed(&self) -> bool {
        self.state == "CLOSED"
    }
}

/// Engagement data of a single time window.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngagementBatch {
    pub calendar: ContributionCalendar,
    pub reviews: Vec<ReviewEvent>,
    pub issues: Vec<IssueEvent>,
}

/// Engagement data of all windows combined.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergedEngagement {
    /// Every contribution day of every window, sorted by date, oldest first
    pub days: Vec<ContributionDay>,
    pub reviews: Vec<ReviewEvent>,
    pub issues: Vec<IssueEvent>,
}

/// Metrics describing how the user participates in reviews and issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubEngagement {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_streaks: u32,
    pub total_reviews: u32,
    pub average_review_time: Turnaround,

    /// Percentage of reviews on pull requests that got merged, two decimals
    pub review_success_rate: f64,

    pub total_review_comments: u64,
    pub average_issue_resolution_time: Turnaround,

    /// Percentage of closed issues, two decimals
    pub issue_resolution_rate: f64,
}

/// The complete set of statistics for a user and time range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubStats {
    pub user: GitHubUser,
    pub contributions: ContributionStats,
    pub repositories: Vec<Repository>,
    pub languages: Vec<LanguageStat>,
    pub engagement: GitHubEngagement,
}
