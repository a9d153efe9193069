use clap::Subcommand;
use keyring::Entry;
use tracing::{debug, info, warn};

use crate::config::{get_config_path, AppConfig, AuthMethod, AuthenticationConfig};
use crate::errors::CliError;

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;

/// Keyring service under which credentials are stored
pub const KEY_RING_SERVICE_NAME: &str = "gh_stats_cli";

/// Keyring entry holding the personal access token
pub const KEY_RING_USER_TOKEN: &str = "github_token";

/// Environment variable read when the `env` method is configured
pub const GITHUB_TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Subcommands for the auth command
#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Authenticate with GitHub
    #[command(name = "github")]
    GitHub {
        /// Authentication method (token or env)
        #[arg(value_enum, default_value_t = AuthMethod::Token)]
        method: AuthMethod,
    },
}

/// Execute the auth command
pub async fn execute(cmd: AuthCommands) -> Result<(), CliError> {
    match cmd {
        AuthCommands::GitHub { method } => auth_github(method).await,
    }
}

/// Opens the keyring entry that holds the token
fn token_entry() -> Result<Entry, CliError> {
    Entry::new(KEY_RING_SERVICE_NAME, KEY_RING_USER_TOKEN).map_err(|e| {
        CliError::AuthError(format!("Failed to create an entry in the keyring: {}", e))
    })
}

/// Returns the token without surrounding whitespace, rejecting a blank one
fn normalize_token(token: &str) -> Result<&str, CliError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(CliError::AuthError("Token cannot be empty".to_string()));
    }

    Ok(token)
}

/// Reads the token from the value of the `GITHUB_TOKEN` variable
fn token_from_env(value: Option<String>) -> Result<String, CliError> {
    let value = value.ok_or_else(|| {
        CliError::AuthError(format!(
            "The {} environment variable is not set",
            GITHUB_TOKEN_ENV_VAR
        ))
    })?;

    normalize_token(&value).map(str::to_string)
}

/// Finds the GitHub token for the configured authentication method
pub fn resolve_token(config: &AuthenticationConfig) -> Result<String, CliError> {
    debug!(method = %config.auth_method, "Resolving GitHub token");

    match config.auth_method {
        AuthMethod::Env => token_from_env(std::env::var(GITHUB_TOKEN_ENV_VAR).ok()),
        AuthMethod::Token => {
            let token = token_entry()?.get_password().map_err(|e| {
                CliError::AuthError(format!(
                    "Failed to get the token from the keyring, run 'gh-stats auth github' first: {}",
                    e
                ))
            })?;
            normalize_token(&token).map(str::to_string)
        }
    }
}

/// Authenticate with GitHub
async fn auth_github(method: AuthMethod) -> Result<(), CliError> {
    debug!("Authenticating with GitHub using method: {}", method);

    let config_path = get_config_path(None);
    let mut config = if config_path.exists() {
        AppConfig::load(&config_path)?
    } else {
        AppConfig::default()
    };

    match method {
        AuthMethod::Token => {
            println!("GitHub Personal Access Token Authentication");
            println!("------------------------------------------");
            println!("Please provide your GitHub Personal Access Token:");

            let mut token = String::new();
            std::io::stdin()
                .read_line(&mut token)
                .map_err(|e| CliError::AuthError(format!("Failed to read input: {}", e)))?;
            let token = normalize_token(&token)?;

            token_entry()?.set_password(token).map_err(|e| {
                CliError::AuthError(format!("Failed to save token to keyring: {}", e))
            })?;

            println!("GitHub token authentication configured successfully!");
        }
        AuthMethod::Env => {
            if std::env::var(GITHUB_TOKEN_ENV_VAR).is_err() {
                warn!(
                    "{} is not set, statistics cannot be collected until it is",
                    GITHUB_TOKEN_ENV_VAR
                );
            }

            println!(
                "GitHub token will be read from the {} environment variable",
                GITHUB_TOKEN_ENV_VAR
            );
        }
    }

    config.authentication.auth_method = method;
    config.save(&config_path)?;

    info!(method = %method, "Authentication method saved");
    Ok(())
}
