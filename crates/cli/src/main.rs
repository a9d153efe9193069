//! # gh-stats CLI
//!
//! Command-line interface for collecting statistics about a GitHub user.
//!
//! This binary provides a CLI interface to the gh-stats pipeline, allowing
//! users to collect statistics, manage configuration, and authenticate with
//! GitHub from the command line.
//!
//! # Commands
//!
//! - `stats` - Collect the statistics of a user and print them as JSON or Markdown
//! - `config` - Manage configuration files and settings
//! - `auth` - Configure how the GitHub token is obtained
//!
//! # Examples
//!
//! ```bash
//! # Collect statistics for the current year as Markdown
//! gh-stats stats octocat --range current-year --format markdown
//!
//! # Initialize configuration
//! gh-stats config init
//!
//! # Store a personal access token in the OS keyring
//! gh-stats auth github token
//! ```

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

use clap::{Parser, Subcommand};
use std::process::{ExitCode, Termination};
use tracing::{debug, error};

/// Command implementations for the CLI.
mod commands;

/// Configuration management for the CLI.
mod config;

/// Error types specific to the CLI.
mod errors;

use commands::{auth::AuthCommands, config_cmd::ConfigCommands, stats::StatsArgs};
use errors::CliError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter
const LOG_ENV_VAR: &str = "GH_STATS_LOG";

/// Command-line interface structure for gh-stats.
///
/// This struct defines the top-level CLI interface using clap's derive API.
/// It includes global options like verbose logging and the main command structure.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

/// Available commands for the gh-stats CLI.
#[derive(Subcommand)]
enum Commands {
    /// Collect the statistics of a GitHub user
    Stats(StatsArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Authenticate with GitHub
    #[command(subcommand)]
    Auth(AuthCommands),
}

/// Installs the tracing subscriber.
///
/// The filter is read from `GH_STATS_LOG`. Without it only warnings are shown,
/// or debug output when `verbose` is set. Logs go to stderr so that the
/// statistics printed on stdout can be piped.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::registry()
        .with(fmt::layer().pretty().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Dispatches to the handler of the selected command.
async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Stats(args) => commands::stats::execute(args).await.inspect_err(|e| {
            error!("Error collecting statistics: {}", e);
        }),
        Commands::Config(cmd) => commands::config_cmd::execute(cmd).await.inspect_err(|e| {
            error!("Error executing config command: {}", e);
        }),
        Commands::Auth(cmd) => commands::auth::execute(cmd).await.inspect_err(|e| {
            error!("Error executing auth command: {}", e);
        }),
    }
}

/// Main entry point for the gh-stats CLI.
///
/// Initializes logging, parses the command line and runs the selected command.
/// A failure is printed on stderr and mapped to the exit code of the error kind.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.verbose {
        debug!("Verbose mode enabled");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            e.report()
        }
    }
}
