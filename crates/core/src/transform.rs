//! # Transform
//!
//! Converts the raw payloads returned by GitHub into the normalized model.
//!
//! Optional text fields default to an empty string and a missing primary language
//! stays `None`. Objects that the pipeline cannot work without (the user, a
//! contributions collection, a contribution calendar, a repository list) produce
//! [`StatsError::MissingRequiredData`]. Payloads with the wrong JSON shape produce
//! [`StatsError::DataShape`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::LanguagePercentagePolicy;
use crate::errors::StatsError;
use crate::metrics::languages::aggregate_languages;
use crate::models::{
    ContributionCalendar, ContributionDay, ContributionStats, ContributionWeek, EngagementBatch,
    GitHubUser, IssueEvent, Language, LanguageStat, LanguageUsage, Repository,
    RepositoryLanguages, ReviewEvent,
};
use crate::raw::{
    RawContributionCalendar, RawContributionsUser, RawEngagementUser, RawLanguage,
    RawLanguageRepository, RawLanguagesUser, RawProfile, RawRepositoriesUser, RawRepository,
    UserEnvelope,
};

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;

/// Decodes the `data` member of a response into `{ "user": T }` and returns the user.
///
/// Returns `None` when GitHub reported `user: null`.
pub fn decode_user<T: DeserializeOwned>(data: Value) -> Result<Option<T>, StatsError> {
    let envelope: UserEnvelope<T> = serde_json::from_value(data)?;
    Ok(envelope.user)
}

fn required<T>(value: Option<T>, what: &str) -> Result<T, StatsError> {
    value.ok_or_else(|| StatsError::MissingRequiredData(what.to_string()))
}

pub fn transform_user_profile(user: Option<RawProfile>) -> Result<GitHubUser, StatsError> {
    let user = required(user, "user")?;

    Ok(GitHubUser {
        name: user
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| user.login.clone()),
        login: user.login,
        avatar_url: user.avatar_url,
        bio: user.bio.unwrap_or_default(),
        location: user.location.unwrap_or_default(),
        company: user.company.unwrap_or_default(),
        created_at: user.created_at,
        followers: user.followers.total_count,
        following: user.following.total_count,
        repositories: user.repositories.total_count,
        starred_repositories: user.starred_repositories.total_count,
    })
}

fn transform_calendar(calendar: Option<RawContributionCalendar>) -> Result<ContributionCalendar, StatsError> {
    let calendar = required(calendar, "contribution calendar")?;

    Ok(ContributionCalendar {
        total_contributions: calendar.total_contributions,
        weeks: calendar
            .weeks
            .into_iter()
            .map(|week| ContributionWeek {
                contribution_days: week
                    .contribution_days
                    .into_iter()
                    .map(|day| ContributionDay {
                        date: day.date,
                        contribution_count: day.contribution_count,
                    })
                    .collect(),
            })
            .collect(),
    })
}

/// Normalizes the contribution counters of a single window.
pub fn transform_contribution_batch(
    user: Option<RawContributionsUser>,
) -> Result<ContributionStats, StatsError> {
    let collection = required(
        required(user, "user")?.contributions_collection,
        "contributions collection",
    )?;

    Ok(ContributionStats {
        total_commit_contributions: collection.total_commit_contributions,
        total_pull_request_contributions: collection.total_pull_request_contributions,
        total_issue_contributions: collection.total_issue_contributions,
        total_repository_contributions: collection.total_repository_contributions,
        restricted_contributions_count: collection.restricted_contributions_count,
        total_repositories_with_contributed_commits: collection
            .total_repositories_with_contributed_commits,
        contribution_calendar: transform_calendar(collection.contribution_calendar)?,
    })
}

/// Normalizes the calendar, reviews and issues of a single window.
pub fn transform_engagement_batch(
    user: Option<RawEngagementUser>,
) -> Result<EngagementBatch, StatsError> {
    let collection = required(
        required(user, "user")?.contributions_collection,
        "contributions collection",
    )?;

    let reviews = collection
        .pull_request_review_contributions
        .nodes
        .unwrap_or_default()
        .into_iter()
        .map(|review| ReviewEvent {
            pull_request_created_at: review.pull_request.created_at,
            pull_request_merged_at: review.pull_request.merged_at,
            pull_request_state: review.pull_request.state,
            comment_count: review.pull_request.comments.total_count,
            occurred_at: review.occurred_at,
        })
        .collect();

    let issues = collection
        .issue_contributions
        .nodes
        .unwrap_or_default()
        .into_iter()
        .map(|contribution| IssueEvent {
            created_at: contribution.issue.created_at,
            closed_at: contribution.issue.closed_at,
            state: contribution.issue.state,
            comment_count: contribution.issue.comments.total_count,
        })
        .collect();

    Ok(EngagementBatch {
        calendar: transform_calendar(collection.contribution_calendar)?,
        reviews,
        issues,
    })
}

fn transform_language(language: RawLanguage) -> Language {
    Language {
        name: language.name,
        color: language.color,
    }
}

fn transform_repository(repository: RawRepository) -> Repository {
    Repository {
        name: repository.name,
        description: repository.description.unwrap_or_default(),
        url: repository.url,
        stargazer_count: repository.stargazer_count,
        fork_count: repository.fork_count,
        is_private: repository.is_private,
        primary_language: repository.primary_language.map(transform_language),
    }
}

pub fn transform_repositories(
    user: Option<RawRepositoriesUser>,
) -> Result<Vec<Repository>, StatsError> {
    let nodes = required(
        required(user, "user")?.repositories.and_then(|r| r.nodes),
        "repositories",
    )?;

    Ok(nodes.into_iter().map(transform_repository).collect())
}

fn transform_repository_languages(repository: RawLanguageRepository) -> RepositoryLanguages {
    let default_branch_commits = repository.default_branch_commit_count();

    RepositoryLanguages {
        is_private: repository.is_private,
        default_branch_commits,
        languages: repository
            .languages
            .and_then(|languages| languages.edges)
            .unwrap_or_default()
            .into_iter()
            .map(|edge| LanguageUsage {
                language: transform_language(edge.node),
                size: edge.size,
            })
            .collect(),
    }
}

/// Normalizes the language payload and aggregates it into one entry per language.
pub fn transform_language_stats(
    user: Option<RawLanguagesUser>,
    policy: LanguagePercentagePolicy,
) -> Result<Vec<LanguageStat>, StatsError> {
    let nodes = required(
        required(user, "user")?.repositories.and_then(|r| r.nodes),
        "repositories",
    )?;

    let repositories: Vec<RepositoryLanguages> = nodes
        .into_iter()
        .map(transform_repository_languages)
        .collect();

    Ok(aggregate_languages(&repositories, policy))
}
