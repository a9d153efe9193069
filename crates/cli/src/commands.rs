/// Authentication commands for configuring GitHub access
pub mod auth;
/// Configuration management commands
pub mod config_cmd;
/// Statistics collection commands
pub mod stats;
