use async_trait::async_trait;
use octocrab::Octocrab;
use serde_json::{json, Value};
use tracing::{debug, error, instrument};

use crate::{errors::Error, GraphQlExecutor};

#[cfg(test)]
#[path = "github_tests.rs"]
mod tests;

/// Creates an `Octocrab` client authenticated with a personal access token.
///
/// # Arguments
///
/// * `token` - A GitHub personal access token. Reading private contributions requires the
///   `read:user` scope.
///
/// # Errors
///
/// Returns `Error::AuthError` if the token is empty or the client cannot be built.
#[instrument(skip(token))]
pub fn create_token_client(token: &str) -> Result<Octocrab, Error> {
    if token.trim().is_empty() {
        return Err(Error::AuthError("No GitHub token was provided".to_string()));
    }

    Octocrab::builder()
        .personal_token(token.to_string())
        .build()
        .map_err(|e| Error::AuthError(format!("Failed to build the GitHub client: {}", e)))
}

/// Creates an `Octocrab` client authenticated with a personal access token that talks to
/// the API at `base_uri` instead of `https://api.github.com`.
///
/// This is used for GitHub Enterprise Server installations.
///
/// # Example
///
/// ```rust,no_run
/// use gh_stats_developer_platforms::github::create_token_client_with_base_uri;
///
/// #[tokio::main]
/// async fn main() {
///     let client = create_token_client_with_base_uri("ghp_example", "https://github.example.com/api")
///         .expect("client");
/// }
/// ```
#[instrument(skip(token))]
pub fn create_token_client_with_base_uri(token: &str, base_uri: &str) -> Result<Octocrab, Error> {
    if token.trim().is_empty() {
        return Err(Error::AuthError("No GitHub token was provided".to_string()));
    }

    Octocrab::builder()
        .base_uri(base_uri)
        .map_err(|e| Error::AuthError(format!("Invalid API base URI '{}': {}", base_uri, e)))?
        .personal_token(token.to_string())
        .build()
        .map_err(|e| Error::AuthError(format!("Failed to build the GitHub client: {}", e)))
}

fn log_octocrab_error(message: &str, e: &octocrab::Error) {
    match e {
        octocrab::Error::GitHub { source, backtrace } => error!(
            error_message = %source.message,
            backtrace = backtrace.to_string(),
            "{}. Received an error from GitHub",
            message
        ),
        _ => error!(error_message = e.to_string(), message),
    };
}

/// Converts a raw GraphQL response body into its `data` member.
///
/// The first entry of a non-empty `errors` array wins over any partial `data`.
fn extract_data(mut response: Value) -> Result<Value, Error> {
    if let Some(first) = response
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
    {
        let message = first
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown GraphQL error")
            .to_string();
        return Err(Error::QueryFailed(message));
    }

    match response.get_mut("data").map(Value::take) {
        Some(data) if !data.is_null() => Ok(data),
        _ => Err(Error::InvalidResponse),
    }
}

/// Executes GraphQL documents against the GitHub GraphQL endpoint.
#[derive(Debug)]
pub struct GitHubGraphQlClient {
    client: Octocrab,
}

impl GitHubGraphQlClient {
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GraphQlExecutor for GitHubGraphQlClient {
    #[instrument(skip(self, document))]
    async fn execute(&self, document: &str, variables: Value) -> Result<Value, Error> {
        let payload = json!({
            "query": document,
            "variables": variables,
        });

        let response: Value = self.client.graphql(&payload).await.map_err(|e| {
            log_octocrab_error("Failed to execute GraphQL query", &e);
            match e {
                octocrab::Error::GitHub { source, .. } => Error::QueryFailed(source.message),
                other => Error::TransportError(other.to_string()),
            }
        })?;

        debug!("Received GraphQL response");
        extract_data(response).inspect_err(|e| {
            error!(error_message = %e.upstream_message(), "GitHub rejected the query");
        })
    }
}
