//! Configuration settings for the statistics pipeline.
//!
//! This module centralizes configuration constants and settings used throughout
//! the crate, making it easier to modify behavior in one place.
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Number of seconds a collected set of statistics stays valid in the cache
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 3600;

/// Number of nodes requested for every paginated connection
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Number of languages requested per repository
pub const LANGUAGES_PER_REPOSITORY: u32 = 10;

/// Text reported for an average duration that cannot be computed
pub const NOT_AVAILABLE: &str = "N/A";

/// More default-branch commits than this marks a language as increasing
pub const TREND_INCREASING_THRESHOLD: u64 = 10;

/// Fewer default-branch commits than this marks a language as decreasing
pub const TREND_DECREASING_THRESHOLD: u64 = 3;

lazy_static! {
    /// Pre-compiled regex for GitHub login validation: alphanumerics and hyphens,
    /// not starting with a hyphen, at most 39 characters.
    pub static ref GITHUB_LOGIN_REGEX: Regex = Regex::new(
        r"^[A-Za-z0-9][A-Za-z0-9-]{0,38}$"
    ).expect("Failed to compile GitHub login regex");
}

/// How per-repository language percentages are combined across repositories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LanguagePercentagePolicy {
    /// `(existing + new) / 2` for every additional repository. Later repositories
    /// weigh more than earlier ones.
    #[default]
    RunningAverage,

    /// Total bytes of the language divided by the total bytes of all languages.
    SizeWeighted,
}

/// Settings that control how statistics are collected and aggregated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AggregationConfig {
    /// Number of nodes requested for each paginated connection
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Seconds a collected result is reused for the same username and time range
    #[serde(default = "default_cache_ttl_seconds")]
    pub cache_ttl_seconds: u64,

    /// Policy used to combine language percentages
    #[serde(default)]
    pub language_percentage: LanguagePercentagePolicy,
}

impl AggregationConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            cache_ttl_seconds: default_cache_ttl_seconds(),
            language_percentage: LanguagePercentagePolicy::default(),
        }
    }
}

fn default_cache_ttl_seconds() -> u64 {
    DEFAULT_CACHE_TTL_SECONDS
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}
