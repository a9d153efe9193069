//! # Raw Payloads
//!
//! Shapes returned by the GitHub GraphQL API for the documents in [`crate::queries`].
//!
//! Every field the API documents as nullable, and every object whose absence must be
//! reported as missing data rather than as a parse failure, is an `Option`. The
//! conversion into the normalized model lives in [`crate::transform`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// The `data` member of every query: `{ "user": ... }`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserEnvelope<T> {
    pub user: Option<T>,
}

#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawTotalCount {
    pub total_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawNodes<T> {
    pub nodes: Option<Vec<T>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProfile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub followers: RawTotalCount,
    pub following: RawTotalCount,
    pub repositories: RawTotalCount,
    pub starred_repositories: RawTotalCount,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContributionDay {
    pub contribution_count: u32,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContributionWeek {
    pub contribution_days: Vec<RawContributionDay>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContributionCalendar {
    pub total_contributions: u64,
    pub weeks: Vec<RawContributionWeek>,
}

/// `user.contributionsCollection` as returned by the contributions query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContributionsCollection {
    pub total_commit_contributions: u64,
    pub total_pull_request_contributions: u64,
    pub total_issue_contributions: u64,
    pub total_repository_contributions: u64,
    pub restricted_contributions_count: u64,
    pub total_repositories_with_contributed_commits: u64,
    pub contribution_calendar: Option<RawContributionCalendar>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContributionsUser {
    pub contributions_collection: Option<RawContributionsCollection>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReviewedPullRequest {
    pub created_at: DateTime<Utc>,
    pub merged_at: Option<DateTime<Utc>>,
    pub state: String,
    pub comments: RawTotalCount,
    pub review_decision: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReviewContribution {
    pub pull_request: RawReviewedPullRequest,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIssue {
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub state: String,
    pub comments: RawTotalCount,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawIssueContribution {
    pub issue: RawIssue,
}

/// `user.contributionsCollection` as returned by the engagement query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEngagementCollection {
    pub contribution_calendar: Option<RawContributionCalendar>,
    pub pull_request_review_contributions: RawNodes<RawReviewContribution>,
    pub issue_contributions: RawNodes<RawIssueContribution>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEngagementUser {
    pub contributions_collection: Option<RawEngagementCollection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLanguage {
    pub name: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRepository {
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub stargazer_count: u64,
    pub fork_count: u64,
    pub is_private: bool,
    pub primary_language: Option<RawLanguage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRepositoriesUser {
    pub repositories: Option<RawNodes<RawRepository>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLanguageEdge {
    pub size: u64,
    pub node: RawLanguage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLanguageEdges {
    pub edges: Option<Vec<RawLanguageEdge>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCommitHistory {
    pub history: Option<RawTotalCount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBranchRef {
    pub target: Option<RawCommitHistory>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLanguageRepository {
    pub is_private: bool,
    pub languages: Option<RawLanguageEdges>,
    pub default_branch_ref: Option<RawBranchRef>,
}

impl RawLanguageRepository {
    /// Number of commits on the default branch, 0 when the repository is empty.
    pub fn default_branch_commit_count(&self) -> u64 {
        self.default_branch_ref
            .as_ref()
            .and_then(|branch| branch.target.as_ref())
            .and_then(|target| target.history)
            .map(|history| history.total_count)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLanguagesUser {
    pub repositories: Option<RawNodes<RawLanguageRepository>>,
}
