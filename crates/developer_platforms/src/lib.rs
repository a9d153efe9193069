use async_trait::async_trait;
use serde_json::Value;

pub mod errors;

pub mod github;

use errors::Error;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Trait for executing GraphQL documents against a developer platform (e.g., GitHub).
///
/// Implementations own everything related to the transport: authentication, the HTTP
/// exchange and the translation of application level errors reported in the response
/// body. Callers only see the `data` member of a successful response.
///
/// # Example Implementation
///
/// ```rust,no_run
/// use gh_stats_developer_platforms::{GraphQlExecutor, errors::Error};
/// use async_trait::async_trait;
/// use serde_json::{json, Value};
///
/// #[derive(Debug)]
/// struct StaticExecutor;
///
/// #[async_trait]
/// impl GraphQlExecutor for StaticExecutor {
///     async fn execute(&self, _document: &str, _variables: Value) -> Result<Value, Error> {
///         Ok(json!({ "user": null }))
///     }
/// }
/// ```
#[async_trait]
pub trait GraphQlExecutor: Sync + Send {
    /// Executes a GraphQL document with the given variables.
    ///
    /// # Arguments
    ///
    /// * `document` - The GraphQL query document
    /// * `variables` - A JSON object holding the values for the variables declared by the document
    ///
    /// # Returns
    ///
    /// A `Result` containing the `data` member of the response. If the platform reports one or
    /// more errors the first error message is returned as `Error::QueryFailed`.
    async fn execute(&self, document: &str, variables: Value) -> Result<Value, Error>;
}
