use gh_stats_core::errors::StatsError;
use gh_stats_developer_platforms::errors::Error as PlatformError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Authentication error
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Network error, including errors reported by GitHub
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Invalid arguments
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The statistics could not be built from the data GitHub returned
    #[error("Collecting statistics failed: {0}")]
    StatsFailed(String),

    /// Other errors
    #[error("Error: {0}")]
    Other(String),
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Other(err.to_string())
    }
}

impl From<StatsError> for CliError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::ConfigError(message) => CliError::ConfigError(message),
            StatsError::Validation(message) => CliError::InvalidArguments(message),
            StatsError::Upstream(message) => CliError::NetworkError(message),
            e @ (StatsError::DataShape(_) | StatsError::MissingRequiredData(_)) => {
                CliError::StatsFailed(e.to_string())
            }
        }
    }
}

impl From<PlatformError> for CliError {
    fn from(err: PlatformError) -> Self {
        match err {
            PlatformError::AuthError(message) => CliError::AuthError(message),
            e => CliError::NetworkError(e.upstream_message()),
        }
    }
}

impl CliError {
    /// Process exit code reported for the error
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::ConfigError(_) => 2,
            CliError::AuthError(_) => 3,
            CliError::NetworkError(_) => 4,
            CliError::InvalidArguments(_) => 5,
            CliError::StatsFailed(_) => 6,
            CliError::Other(_) => 1,
        }
    }
}

impl std::process::Termination for CliError {
    fn report(self) -> std::process::ExitCode {
        std::process::ExitCode::from(self.exit_code())
    }
}
