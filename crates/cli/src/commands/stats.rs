use clap::{Args, ValueEnum};
use gh_stats_core::{markdown::generate_markdown, models::GitHubStats, StatsAggregator, TimeRange};
use gh_stats_developer_platforms::github::{create_token_client, GitHubGraphQlClient};
use tracing::{info, instrument};

use crate::commands::auth::resolve_token;
use crate::config::AppConfig;
use crate::errors::CliError;

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;

/// Period covered by the statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RangeArg {
    /// From January 1st of the current year
    CurrentYear,

    /// Since the account was created
    AllTime,
}

impl From<RangeArg> for TimeRange {
    fn from(range: RangeArg) -> Self {
        match range {
            RangeArg::CurrentYear => TimeRange::CurrentYear,
            RangeArg::AllTime => TimeRange::AllTime,
        }
    }
}

/// Output format of the statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty printed JSON with camelCase field names
    Json,

    /// Markdown summary
    Markdown,
}

/// Arguments for the stats command
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// GitHub login of the user
    pub username: String,

    /// Time range to collect statistics for
    #[arg(short, long, value_enum, default_value_t = RangeArg::AllTime)]
    pub range: RangeArg,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Alternate config file
    #[arg(short, long)]
    pub config: Option<String>,
}

/// Renders the statistics in the requested format
fn render(stats: &GitHubStats, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(stats)
            .map_err(|e| CliError::Other(format!("Failed to serialize statistics: {}", e))),
        OutputFormat::Markdown => Ok(generate_markdown(stats)),
    }
}

/// Execute the stats command
#[instrument(skip(args), fields(username = %args.username, range = ?args.range))]
pub async fn execute(args: StatsArgs) -> Result<(), CliError> {
    let config = AppConfig::load_or_default(args.config.as_deref())?;

    let token = resolve_token(&config.authentication)?;
    let client = create_token_client(&token)?;

    let aggregator = StatsAggregator::with_config(GitHubGraphQlClient::new(client), config.aggregation);
    let stats = aggregator
        .collect_stats(&args.username, args.range.into())
        .await?;

    info!(
        login = %stats.user.login,
        repositories = stats.repositories.len(),
        "Statistics collected"
    );

    println!("{}", render(&stats, args.format)?);
    Ok(())
}
