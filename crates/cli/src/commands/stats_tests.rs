use super::*;
use chrono::{TimeZone, Utc};
use gh_stats_core::metrics::Turnaround;
use gh_stats_core::models::{ContributionStats, GitHubEngagement, GitHubUser};

fn sample_stats() -> GitHubStats {
    GitHubStats {
        user: GitHubUser {
            login: "octocat".to_string(),
            name: "The Octocat".to_string(),
            avatar_url: String::new(),
            bio: String::new(),
            location: String::new(),
            company: String::new(),
            created_at: Utc.with_ymd_and_hms(2011, 1, 25, 18, 44, 36).unwrap(),
            followers: 100,
            following: 9,
            repositories: 8,
            starred_repositories: 3,
        },
        contributions: ContributionStats {
            total_commit_contributions: 42,
            ..Default::default()
        },
        repositories: Vec::new(),
        languages: Vec::new(),
        engagement: GitHubEngagement {
            current_streak: 1,
            longest_streak: 2,
            total_streaks: 3,
            total_reviews: 0,
            average_review_time: Turnaround::NotAvailable,
            review_success_rate: 0.0,
            total_review_comments: 0,
            average_issue_resolution_time: Turnaround::NotAvailable,
            issue_resolution_rate: 0.0,
        },
    }
}

#[test]
fn test_range_arg_maps_to_time_range() {
    assert_eq!(TimeRange::from(RangeArg::AllTime), TimeRange::AllTime);
    assert_eq!(TimeRange::from(RangeArg::CurrentYear), TimeRange::CurrentYear);
}

#[test]
fn test_range_arg_accepts_kebab_case_names() {
    assert_eq!(
        RangeArg::from_str("current-year", false).unwrap(),
        RangeArg::CurrentYear
    );
    assert_eq!(RangeArg::from_str("all-time", false).unwrap(), RangeArg::AllTime);
}

#[test]
fn test_render_json_uses_camel_case() {
    let output = render(&sample_stats(), OutputFormat::Json).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["user"]["login"], "octocat");
    assert_eq!(value["contributions"]["totalCommitContributions"], 42);
    assert_eq!(value["engagement"]["averageReviewTime"], "N/A");
}

#[test]
fn test_render_markdown() {
    let output = render(&sample_stats(), OutputFormat::Markdown).unwrap();

    assert!(output.starts_with("# The Octocat's GitHub Statistics"));
    assert!(output.contains("- **Commits:** 42"));
}
