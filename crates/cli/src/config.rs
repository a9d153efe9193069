use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use gh_stats_core::{config::AggregationConfig, errors::StatsError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = ".gh-stats.toml";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Configuration for the gh-stats CLI
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Settings for collecting and aggregating statistics
    #[serde(default)]
    pub aggregation: AggregationConfig,

    /// How the GitHub token is obtained
    #[serde(default)]
    pub authentication: AuthenticationConfig,
}

impl AppConfig {
    /// Load configuration from the specified file
    pub fn load(path: &Path) -> Result<Self, StatsError> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(StatsError::ConfigError(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            StatsError::ConfigError(format!("Failed to read configuration file: {}", e))
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| {
            StatsError::ConfigError(format!("Failed to parse configuration file: {}", e))
        })?;

        Ok(config)
    }

    /// Load the configuration for a command.
    ///
    /// An explicitly given file must exist. When no file is given the default file is
    /// used if present, otherwise the built-in defaults apply.
    pub fn load_or_default(config_path: Option<&str>) -> Result<Self, StatsError> {
        let path = get_config_path(config_path);
        if config_path.is_none() && !path.exists() {
            debug!("No configuration file at {:?}, using defaults", path);
            return Ok(AppConfig::default());
        }

        AppConfig::load(&path)
    }

    /// Save configuration to the specified file
    pub fn save(&self, path: &Path) -> Result<(), StatsError> {
        debug!("Saving configuration to {:?}", path);

        let content = toml::to_string_pretty(self).map_err(|e| {
            StatsError::ConfigError(format!("Failed to serialize configuration: {}", e))
        })?;

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StatsError::ConfigError(format!("Failed to create directory: {}", e))
            })?;
        }

        fs::write(path, content).map_err(|e| {
            StatsError::ConfigError(format!("Failed to write configuration file: {}", e))
        })?;

        info!("Configuration saved to {:?}", path);
        Ok(())
    }
}

/// Source of the GitHub personal access token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    /// Token stored in the OS keyring by `gh-stats auth github token`
    #[default]
    Token,

    /// Token read from the `GITHUB_TOKEN` environment variable
    Env,
}

impl std::fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthMethod::Token => f.write_str("token"),
            AuthMethod::Env => f.write_str("env"),
        }
    }
}

/// Authentication settings
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthenticationConfig {
    /// Where the token comes from
    #[serde(default)]
    pub auth_method: AuthMethod,
}

/// Get the path to the configuration file
pub fn get_config_path(config_path: Option<&str>) -> PathBuf {
    if let Some(path) = config_path {
        PathBuf::from(path)
    } else {
        // Look for config in current directory
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(DEFAULT_CONFIG_FILENAME)
    }
}
