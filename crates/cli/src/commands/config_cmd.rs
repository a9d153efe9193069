use clap::{Subcommand, ValueEnum};
use gh_stats_core::config::LanguagePercentagePolicy;
use tracing::debug;

use crate::config::{get_config_path, AppConfig, AuthMethod};
use crate::errors::CliError;

#[cfg(test)]
#[path = "config_cmd_tests.rs"]
mod tests;

/// Subcommands for the config command
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Create initial configuration file
    Init {
        /// Path to save the configuration file
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Check configuration syntax
    Validate {
        /// Path to the configuration file
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Show current configuration
    Get {
        /// Path to the configuration file
        #[arg(short, long)]
        path: Option<String>,

        /// Configuration key to get (e.g., "aggregation.page_size")
        key: Option<String>,
    },

    /// Update configuration values
    Set {
        /// Path to the configuration file
        #[arg(short, long)]
        path: Option<String>,

        /// Configuration key to set (e.g., "aggregation.cache_ttl_seconds")
        key: String,

        /// Value to set
        value: String,
    },
}

/// Execute the config command
pub async fn execute(cmd: ConfigCommands) -> Result<(), CliError> {
    match cmd {
        ConfigCommands::Init { path } => init_config(path.as_deref()),
        ConfigCommands::Validate { path } => validate_config(path.as_deref()),
        ConfigCommands::Get { path, key } => get_config(path.as_deref(), key.as_deref()),
        ConfigCommands::Set { path, key, value } => set_config(path.as_deref(), &key, &value),
    }
}

/// Initialize a new configuration file
fn init_config(path: Option<&str>) -> Result<(), CliError> {
    let config_path = get_config_path(path);
    debug!("Initializing configuration at {:?}", config_path);

    if config_path.exists() {
        return Err(CliError::ConfigError(format!(
            "Configuration file already exists at {:?}",
            config_path
        )));
    }

    let config = AppConfig::default();
    config.save(&config_path)?;

    println!("Configuration initialized at {:?}", config_path);
    Ok(())
}

/// Validate a configuration file
fn validate_config(path: Option<&str>) -> Result<(), CliError> {
    let config_path = get_config_path(path);
    debug!("Validating configuration at {:?}", config_path);

    let config = AppConfig::load(&config_path)?;
    if config.aggregation.page_size == 0 || config.aggregation.page_size > 100 {
        return Err(CliError::ConfigError(format!(
            "aggregation.page_size must be between 1 and 100, found {}",
            config.aggregation.page_size
        )));
    }

    println!("Configuration is valid");
    Ok(())
}

/// Get a configuration value
fn get_config(path: Option<&str>, key: Option<&str>) -> Result<(), CliError> {
    let config_path = get_config_path(path);
    debug!("Getting configuration from {:?}", config_path);

    let config = AppConfig::load(&config_path)?;

    if let Some(key) = key {
        let value = get_config_value(&config, key)?;
        println!("{}: {}", key, value);
    } else {
        let config_str = toml::to_string_pretty(&config).map_err(|e| {
            CliError::ConfigError(format!("Failed to serialize configuration: {}", e))
        })?;
        println!("{}", config_str);
    }

    Ok(())
}

/// Set a configuration value
fn set_config(path: Option<&str>, key: &str, value: &str) -> Result<(), CliError> {
    let config_path = get_config_path(path);
    debug!("Setting configuration at {:?}", config_path);

    let mut config = if config_path.exists() {
        AppConfig::load(&config_path)?
    } else {
        AppConfig::default()
    };

    set_config_value(&mut config, key, value)?;
    config.save(&config_path)?;

    println!("Configuration updated: {} = {}", key, value);
    Ok(())
}

/// Error for a key that does not name a setting
fn invalid_key(key: &str) -> CliError {
    CliError::InvalidArguments(format!("Invalid configuration key: {}", key))
}

/// Error for a value that cannot be used for the key
fn invalid_value(key: &str, value: &str) -> CliError {
    CliError::InvalidArguments(format!("Invalid value for {}: {}", key, value))
}

/// Text form of a language percentage policy, as written in the configuration file
fn policy_name(policy: LanguagePercentagePolicy) -> &'static str {
    match policy {
        LanguagePercentagePolicy::RunningAverage => "running-average",
        LanguagePercentagePolicy::SizeWeighted => "size-weighted",
    }
}

/// Get a value from the configuration by key path
fn get_config_value(config: &AppConfig, key: &str) -> Result<String, CliError> {
    match key.split_once('.') {
        Some(("aggregation", "page_size")) => Ok(config.aggregation.page_size.to_string()),
        Some(("aggregation", "cache_ttl_seconds")) => {
            Ok(config.aggregation.cache_ttl_seconds.to_string())
        }
        Some(("aggregation", "language_percentage")) => {
            Ok(policy_name(config.aggregation.language_percentage).to_string())
        }
        Some(("authentication", "auth_method")) => {
            Ok(config.authentication.auth_method.to_string())
        }
        _ => Err(invalid_key(key)),
    }
}

/// Set a value in the configuration by key path
fn set_config_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), CliError> {
    match key.split_once('.') {
        Some(("aggregation", "page_size")) => {
            config.aggregation.page_size = value
                .parse()
                .ok()
                .filter(|size| (1..=100).contains(size))
                .ok_or_else(|| invalid_value(key, value))?;
        }
        Some(("aggregation", "cache_ttl_seconds")) => {
            config.aggregation.cache_ttl_seconds =
                value.parse().map_err(|_| invalid_value(key, value))?;
        }
        Some(("aggregation", "language_percentage")) => {
            config.aggregation.language_percentage = match value {
                "running-average" => LanguagePercentagePolicy::RunningAverage,
                "size-weighted" => LanguagePercentagePolicy::SizeWeighted,
                _ => return Err(invalid_value(key, value)),
            };
        }
        Some(("authentication", "auth_method")) => {
            config.authentication.auth_method =
                AuthMethod::from_str(value, true).map_err(|_| invalid_value(key, value))?;
        }
        _ => return Err(invalid_key(key)),
    }

    Ok(())
}
