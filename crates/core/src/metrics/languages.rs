//! # Language Statistics
//!
//! Combines the language sizes of every repository into a single entry per
//! language name.
//!
//! Within a repository each language gets `size / repository size * 100`. How the
//! per-repository percentages are combined depends on the
//! [`LanguagePercentagePolicy`]:
//! - `RunningAverage` replaces the stored percentage with `(stored + new) / 2` for
//!   every further repository, so the result depends on the repository order.
//! - `SizeWeighted` divides the total size of the language by the total size of all
//!   languages in all repositories.

use std::collections::HashMap;

use crate::config::{
    LanguagePercentagePolicy, TREND_DECREASING_THRESHOLD, TREND_INCREASING_THRESHOLD,
};
use crate::models::{LanguageStat, RepositoryLanguages, Trend};

#[cfg(test)]
#[path = "languages_tests.rs"]
mod tests;

/// Maps the default branch commit count of a repository to a trend.
///
/// # Examples
///
/// ```
/// use gh_stats_core::metrics::languages::determine_trend;
/// use gh_stats_core::models::Trend;
///
/// assert_eq!(determine_trend(11), Trend::Increasing);
/// assert_eq!(determine_trend(5), Trend::Stable);
/// assert_eq!(determine_trend(2), Trend::Decreasing);
/// ```
pub fn determine_trend(commit_count: u64) -> Trend {
    if commit_count > TREND_INCREASING_THRESHOLD {
        Trend::Increasing
    } else if commit_count < TREND_DECREASING_THRESHOLD {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}

/// Aggregates language usage over repositories, processed in the given order.
///
/// The trend of a language is taken from the last repository that uses it. The
/// result is sorted by total size, largest first; languages of equal size keep the
/// order in which they were first seen.
pub fn aggregate_languages(
    repositories: &[RepositoryLanguages],
    policy: LanguagePercentagePolicy,
) -> Vec<LanguageStat> {
    let mut stats: Vec<LanguageStat> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut size_of_all_languages: u64 = 0;

    for repository in repositories {
        let repository_size: u64 = repository.languages.iter().map(|usage| usage.size).sum();
        let trend = determine_trend(repository.default_branch_commits);

        for usage in &repository.languages {
            let percentage = if repository_size == 0 {
                0.0
            } else {
                usage.size as f64 / repository_size as f64 * 100.0
            };

            match positions.get(&usage.language.name) {
                Some(&position) => {
                    let existing = &mut stats[position];
                    existing.repo_count += 1;
                    existing.lines_of_code += usage.size;
                    existing.percentage = (existing.percentage + percentage) / 2.0;
                    existing.trend = trend;
                    if repository.is_private {
                        existing.private_repo_count += 1;
                    }
                }
                None => {
                    positions.insert(usage.language.name.clone(), stats.len());
                    stats.push(LanguageStat {
                        name: usage.language.name.clone(),
                        color: usage.language.color.clone(),
                        percentage,
                        repo_count: 1,
                        lines_of_code: usage.size,
                        trend,
                        private_repo_count: u32::from(repository.is_private),
                    });
                }
            }
        }

        size_of_all_languages += repository_size;
    }

    if policy == LanguagePercentagePolicy::SizeWeighted {
        for stat in &mut stats {
            stat.percentage = if size_of_all_languages == 0 {
                0.0
            } else {
                stat.lines_of_code as f64 / size_of_all_languages as f64 * 100.0
            };
        }
    }

    stats.sort_by(|a, b| b.lines_of_code.cmp(&a.lines_of_code));
    stats
}
