use gh_stats_developer_platforms::errors::Error as PlatformError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unexpected data shape: {0}")]
    DataShape(String),

    #[error("Missing required data: {0}")]
    MissingRequiredData(String),

    /// The remote service reported an error. Holds the first reported message verbatim.
    #[error("{0}")]
    Upstream(String),

    #[error("Invalid input: {0}")]
    Validation(String),
}

impl From<PlatformError> for StatsError {
    fn from(err: PlatformError) -> Self {
        StatsError::Upstream(err.upstream_message())
    }
}

impl From<serde_json::Error> for StatsError {
    fn from(err: serde_json::Error) -> Self {
        StatsError::DataShape(err.to_string())
    }
}
