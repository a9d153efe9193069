//! # GitHub Stats Core
//!
//! Core pipeline for collecting statistics about a GitHub user.
//!
//! GitHub limits time-ranged contribution queries to one year, so a request is
//! processed in stages:
//! - The requested range is split into windows of at most one year
//! - Per-window queries are dispatched concurrently
//! - Per-window results are normalized and merged
//! - Streaks, review and issue metrics and language shares are derived from the merged data
//!
//! Complete results are cached per username and time range.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gh_stats_core::{StatsAggregator, TimeRange};
//! use gh_stats_developer_platforms::github::{create_token_client, GitHubGraphQlClient};
//! use anyhow::Result;
//!
//! async fn print_stats(token: &str) -> Result<()> {
//!     let client = create_token_client(token)?;
//!     let aggregator = StatsAggregator::new(GitHubGraphQlClient::new(client));
//!
//!     let stats = aggregator.collect_stats("octocat", TimeRange::AllTime).await?;
//!     println!(
//!         "{} made {} commits",
//!         stats.user.name, stats.contributions.total_commit_contributions
//!     );
//!
//!     Ok(())
//! }
//! ```

use chrono::{DateTime, Datelike, TimeZone, Utc};
use gh_stats_developer_platforms::GraphQlExecutor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, instrument};

pub mod cache;
use cache::StatsCache;

pub mod config;
use config::{AggregationConfig, GITHUB_LOGIN_REGEX};

pub mod dispatcher;
use dispatcher::QueryDispatcher;

pub mod errors;
use errors::StatsError;

pub mod markdown;

pub mod merge;
use merge::{merge_contributions, merge_engagement};

pub mod metrics;
use metrics::engagement::derive_engagement;

pub mod models;
use models::GitHubStats;

pub mod queries;
pub mod raw;

pub mod transform;
use transform::{
    transform_contribution_batch, transform_engagement_batch, transform_language_stats,
    transform_repositories, transform_user_profile,
};

pub mod windows;
use windows::split_into_windows;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// The period the statistics cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeRange {
    /// From January 1st of the current year (UTC) until now
    CurrentYear,

    /// From the creation of the account until now
    AllTime,
}

impl TimeRange {
    /// Returns the start of the range for an account created at `created_at`.
    pub fn start(
        &self,
        created_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, StatsError> {
        match self {
            TimeRange::AllTime => Ok(created_at),
            TimeRange::CurrentYear => Utc
                .with_ymd_and_hms(now.year(), 1, 1, 0, 0, 0)
                .single()
                .ok_or_else(|| {
                    StatsError::Validation(format!("No start of year for {}", now.year()))
                }),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRange::CurrentYear => f.write_str("current-year"),
            TimeRange::AllTime => f.write_str("all-time"),
        }
    }
}

impl FromStr for TimeRange {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "current-year" => Ok(TimeRange::CurrentYear),
            "all-time" => Ok(TimeRange::AllTime),
            other => Err(StatsError::Validation(format!(
                "Unknown time range '{}', expected 'current-year' or 'all-time'",
                other
            ))),
        }
    }
}

/// Checks that a username could be a GitHub login and returns it without
/// surrounding whitespace.
pub fn validate_username(username: &str) -> Result<&str, StatsError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(StatsError::Validation(
            "A username is required".to_string(),
        ));
    }

    if !GITHUB_LOGIN_REGEX.is_match(username) {
        return Err(StatsError::Validation(format!(
            "'{}' is not a valid GitHub username",
            username
        )));
    }

    Ok(username)
}

/// Collects statistics for GitHub users.
///
/// `StatsAggregator` owns the executor used to reach GitHub and the cache of
/// completed results. A request either produces complete statistics or fails;
/// partial results are never returned or cached.
///
/// # Examples
///
/// ```rust,no_run
/// use gh_stats_core::{StatsAggregator, TimeRange, config::AggregationConfig};
/// use gh_stats_developer_platforms::GraphQlExecutor;
/// use anyhow::Result;
///
/// async fn example<E: GraphQlExecutor>(executor: E) -> Result<()> {
///     let config = AggregationConfig {
///         cache_ttl_seconds: 300,
///         ..Default::default()
///     };
///     let aggregator = StatsAggregator::with_config(executor, config);
///
///     let stats = aggregator.collect_stats("octocat", TimeRange::CurrentYear).await?;
///     println!("Current streak: {} days", stats.engagement.current_streak);
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct StatsAggregator<E: GraphQlExecutor> {
    executor: E,
    config: AggregationConfig,
    cache: StatsCache,
}

impl<E: GraphQlExecutor> StatsAggregator<E> {
    /// Creates an aggregator with the default configuration.
    pub fn new(executor: E) -> Self {
        Self::with_config(executor, AggregationConfig::default())
    }

    pub fn with_config(executor: E, config: AggregationConfig) -> Self {
        let cache = StatsCache::new(config.cache_ttl());
        Self {
            executor,
            config,
            cache,
        }
    }

    pub fn cache(&self) -> &StatsCache {
        &self.cache
    }

    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Collects the statistics of `username` for the given range, ending now.
    pub async fn collect_stats(
        &self,
        username: &str,
        range: TimeRange,
    ) -> Result<GitHubStats, StatsError> {
        self.collect_stats_at(username, range, Utc::now()).await
    }

    /// Collects the statistics of `username` for the given range, ending at `now`.
    ///
    /// # Errors
    ///
    /// - `StatsError::Validation` if the username is empty or cannot be a GitHub login.
    ///   No query is sent in that case.
    /// - `StatsError::Upstream` if any query fails.
    /// - `StatsError::MissingRequiredData` or `StatsError::DataShape` if a response
    ///   cannot be normalized.
    #[instrument(skip(self))]
    pub async fn collect_stats_at(
        &self,
        username: &str,
        range: TimeRange,
        now: DateTime<Utc>,
    ) -> Result<GitHubStats, StatsError> {
        let username = validate_username(username)?;

        if let Some(stats) = self.cache.get(username, range) {
            info!(username, range = %range, "Serving statistics from cache");
            return Ok(stats);
        }

        let dispatcher = QueryDispatcher::new(&self.executor, self.config.page_size);

        let user = transform_user_profile(dispatcher.fetch_profile(username).await?)?;

        let start = range.start(user.created_at, now)?;
        let windows = split_into_windows(start, now);
        debug!(
            username,
            range = %range,
            start = %start,
            windows = windows.len(),
            "Split range into windows"
        );

        let fetched = dispatcher.fetch(username, &windows).await?;

        let repositories = transform_repositories(fetched.repositories)?;
        let languages =
            transform_language_stats(fetched.languages, self.config.language_percentage)?;

        let contribution_batches = fetched
            .contributions
            .into_iter()
            .map(transform_contribution_batch)
            .collect::<Result<Vec<_>, _>>()?;
        let engagement_batches = fetched
            .engagement
            .into_iter()
            .map(transform_engagement_batch)
            .collect::<Result<Vec<_>, _>>()?;

        let contributions = merge_contributions(contribution_batches);
        let engagement = derive_engagement(&merge_engagement(engagement_batches));

        let stats = GitHubStats {
            user,
            contributions,
            repositories,
            languages,
            engagement,
        };

        info!(
            username,
            range = %range,
            commits = stats.contributions.total_commit_contributions,
            repositories = stats.repositories.len(),
            languages = stats.languages.len(),
            "Collected statistics"
        );

        self.cache.insert(username, range, stats.clone());
        Ok(stats)
    }
}
