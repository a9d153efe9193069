#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Error types for developer platform operations.
///
/// This enum represents all possible errors that can occur when querying
/// developer platforms like GitHub. Each variant provides specific context
/// about the type of failure encountered.
///
/// # Examples
///
/// ```rust
/// use gh_stats_developer_platforms::errors::Error;
///
/// let query_error = Error::QueryFailed("Could not resolve to a User with the login of 'x'.".to_string());
/// assert_eq!(
///     query_error.upstream_message(),
///     "Could not resolve to a User with the login of 'x'."
/// );
///
/// let invalid = Error::InvalidResponse;
/// assert_eq!(invalid.to_string(), "Invalid response format");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Authentication failed with the platform.
    ///
    /// This error indicates that the provided token is missing, invalid or could not be
    /// used to build an authenticated client.
    #[error("Authentication failed: {0}")]
    AuthError(String),

    /// Invalid response format from platform API.
    ///
    /// The response could be read but did not contain a `data` member, or the body
    /// was not a JSON object.
    #[error("Invalid response format")]
    InvalidResponse,

    /// The platform reported an application level error for the query.
    ///
    /// GraphQL endpoints report errors in the response body while returning a successful
    /// HTTP status. The string parameter holds the first reported message, verbatim.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// The request could not be delivered or the response could not be read.
    #[error("Transport failure: {0}")]
    TransportError(String),
}

impl Error {
    /// Returns the message reported by the platform without any decoration.
    ///
    /// For `QueryFailed` and `TransportError` this is the wrapped message. For the
    /// remaining variants it is the display text of the error.
    pub fn upstream_message(&self) -> String {
        match self {
            Error::QueryFailed(message) | Error::TransportError(message) => message.clone(),
            other => other.to_string(),
        }
    }
}
