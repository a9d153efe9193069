//! # Query Dispatcher
//!
//! Issues the remote queries needed for a set of statistics.
//!
//! The profile is fetched on its own because its creation date decides the range
//! to cover. The repository and language snapshots are fetched once, concurrently.
//! Contribution and engagement queries are issued for every window, all at the
//! same time. Each phase waits for all of its queries; the first failure aborts
//! the whole fetch.

use chrono::{DateTime, SecondsFormat, Utc};
use futures::future::try_join_all;
use gh_stats_developer_platforms::GraphQlExecutor;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, info, instrument};

use crate::config::LANGUAGES_PER_REPOSITORY;
use crate::errors::StatsError;
use crate::queries::{
    USER_CONTRIBUTIONS_QUERY, USER_ENGAGEMENT_QUERY, USER_LANGUAGES_QUERY, USER_PROFILE_QUERY,
    USER_REPOSITORIES_QUERY,
};
use crate::raw::{
    RawContributionsUser, RawEngagementUser, RawLanguagesUser, RawProfile, RawRepositoriesUser,
};
use crate::transform::decode_user;
use crate::windows::TimeWindow;

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;

/// Raw payloads of a fetch. The per-window vectors are in the order of the windows.
#[derive(Debug, Clone)]
pub struct FetchedData {
    pub repositories: Option<RawRepositoriesUser>,
    pub languages: Option<RawLanguagesUser>,
    pub contributions: Vec<Option<RawContributionsUser>>,
    pub engagement: Vec<Option<RawEngagementUser>>,
}

/// Formats an instant the way GitHub expects a `DateTime` scalar.
fn to_graphql_datetime(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug)]
pub struct QueryDispatcher<'a, E: GraphQlExecutor + ?Sized> {
    executor: &'a E,
    page_size: u32,
}

impl<'a, E: GraphQlExecutor + ?Sized> QueryDispatcher<'a, E> {
    pub fn new(executor: &'a E, page_size: u32) -> Self {
        Self {
            executor,
            page_size,
        }
    }

    async fn query<T: DeserializeOwned>(
        &self,
        document: &str,
        variables: Value,
    ) -> Result<Option<T>, StatsError> {
        let data = self.executor.execute(document, variables).await?;
        decode_user(data)
    }

    fn window_variables(&self, username: &str, window: &TimeWindow) -> Value {
        json!({
            "username": username,
            "from": to_graphql_datetime(window.start),
            "to": to_graphql_datetime(window.end),
            "first": self.page_size,
        })
    }

    /// Fetches the profile of the user.
    #[instrument(skip(self))]
    pub async fn fetch_profile(&self, username: &str) -> Result<Option<RawProfile>, StatsError> {
        debug!(username, "Fetching user profile");
        self.query(USER_PROFILE_QUERY, json!({ "username": username }))
            .await
    }

    /// Fetches the repository and language snapshots and the per-window data.
    #[instrument(skip(self, windows), fields(windows = windows.len()))]
    pub async fn fetch(
        &self,
        username: &str,
        windows: &[TimeWindow],
    ) -> Result<FetchedData, StatsError> {
        info!(
            username,
            windows = windows.len(),
            "Fetching repositories and languages"
        );

        let (repositories, languages) = tokio::try_join!(
            self.query::<RawRepositoriesUser>(
                USER_REPOSITORIES_QUERY,
                json!({ "username": username, "first": self.page_size }),
            ),
            self.query::<RawLanguagesUser>(
                USER_LANGUAGES_QUERY,
                json!({
                    "username": username,
                    "first": self.page_size,
                    "languages": LANGUAGES_PER_REPOSITORY,
                }),
            ),
        )?;

        info!(username, windows = windows.len(), "Fetching time-ranged data");

        let contribution_queries = windows.iter().map(|window| {
            self.query::<RawContributionsUser>(
                USER_CONTRIBUTIONS_QUERY,
                self.window_variables(username, window),
            )
        });
        let engagement_queries = windows.iter().map(|window| {
            self.query::<RawEngagementUser>(
                USER_ENGAGEMENT_QUERY,
                self.window_variables(username, window),
            )
        });

        let (contributions, engagement) = tokio::try_join!(
            try_join_all(contribution_queries),
            try_join_all(engagement_queries),
        )?;

        debug!(
            username,
            contribution_batches = contributions.len(),
            engagement_batches = engagement.len(),
            "Fetched all windows"
        );

        Ok(FetchedData {
            repositories,
            languages,
            contributions,
            engagement,
        })
    }
}
