//! Markdown rendering of collected statistics.
//!
//! User supplied text (name, login) is inserted as-is, without escaping.

use indoc::formatdoc;

use crate::models::{GitHubStats, LanguageStat};

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;

fn language_lines(languages: &[LanguageStat]) -> String {
    languages
        .iter()
        .map(|language| format!("- {}: {:.1}%", language.name, language.percentage))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a summary of the statistics as a Markdown document.
pub fn generate_markdown(stats: &GitHubStats) -> String {
    let user = &stats.user;
    let contributions = &stats.contributions;
    let engagement = &stats.engagement;

    let document = formatdoc! {"
        # {name}'s GitHub Statistics

        ## 📊 Profile Overview
        - **Username:** [@{login}](https://github.com/{login})
        - **Followers:** {followers}
        - **Following:** {following}
        - **Total Repositories:** {repositories}

        ## 🏆 Contribution Statistics
        - **Total Contributions:** {total}
        - **Commits:** {commits}
        - **Pull Requests:** {pull_requests}
        - **Issues:** {issues}
        - **Code Reviews:** {reviews}

        ## 🔥 Streak Statistics
        - **Current Streak:** {current} days
        - **Longest Streak:** {longest} days
        - **Total Streaks:** {streaks}

        ## 📈 Language Distribution
        {languages}

        *Generated with gh-stats*
        ",
        name = user.name,
        login = user.login,
        followers = user.followers,
        following = user.following,
        repositories = user.repositories,
        total = contributions.contribution_calendar.total_contributions,
        commits = contributions.total_commit_contributions,
        pull_requests = contributions.total_pull_request_contributions,
        issues = contributions.total_issue_contributions,
        reviews = engagement.total_reviews,
        current = engagement.current_streak,
        longest = engagement.longest_streak,
        streaks = engagement.total_streaks,
        languages = language_lines(&stats.languages),
    };

    document.trim().to_string()
}
