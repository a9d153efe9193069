use super::*;
use crate::models::Trend;
use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::json;

fn profile_data(name: Value, bio: Value) -> Value {
    json!({
        "user": {
            "name": name,
            "login": "octocat",
            "avatarUrl": "https://avatars.githubusercontent.com/u/583231",
            "bio": bio,
            "company": null,
            "location": "San Francisco",
            "createdAt": "2011-01-25T18:44:36Z",
            "followers": { "totalCount": 100 },
            "following": { "totalCount": 9 },
            "repositories": { "totalCount": 8 },
            "starredRepositories": { "totalCount": 3 }
        }
    })
}

fn calendar(days: &[(&str, u32)]) -> Value {
    let total: u32 = days.iter().map(|(_, count)| count).sum();
    json!({
        "totalContributions": total,
        "weeks": [{
            "contributionDays": days
                .iter()
                .map(|(date, count)| json!({ "date": date, "contributionCount": count }))
                .collect::<Vec<_>>()
        }]
    })
}

#[test]
fn test_transform_user_profile_applies_defaults() {
    let user = decode_user::<RawProfile>(profile_data(Value::Null, Value::Null)).unwrap();

    let profile = transform_user_profile(user).expect("profile should transform");

    assert_eq!(profile.login, "octocat");
    assert_eq!(profile.name, "octocat");
    assert_eq!(profile.bio, "");
    assert_eq!(profile.company, "");
    assert_eq!(profile.location, "San Francisco");
    assert_eq!(
        profile.created_at,
        Utc.with_ymd_and_hms(2011, 1, 25, 18, 44, 36).unwrap()
    );
    assert_eq!(profile.followers, 100);
    assert_eq!(profile.following, 9);
    assert_eq!(profile.repositories, 8);
    assert_eq!(profile.starred_repositories, 3);
}

#[test]
fn test_transform_user_profile_keeps_values() {
    let user = decode_user::<RawProfile>(profile_data(json!("The Octocat"), json!("Hello")))
        .unwrap();

    let profile = transform_user_profile(user).unwrap();

    assert_eq!(profile.name, "The Octocat");
    assert_eq!(profile.bio, "Hello");
}

#[test]
fn test_transform_user_profile_missing_user() {
    let user = decode_user::<RawProfile>(json!({ "user": null })).unwrap();

    let result = transform_user_profile(user);

    assert!(matches!(result, Err(StatsError::MissingRequiredData(ref what)) if what == "user"));
}

#[test]
fn test_decode_user_with_wrong_shape() {
    let result = decode_user::<RawProfile>(json!({ "user": { "login": 42 } }));

    assert!(matches!(result, Err(StatsError::DataShape(_))));
}

#[test]
fn test_transform_contribution_batch() {
    let data = json!({
        "user": {
            "contributionsCollection": {
                "totalCommitContributions": 120,
                "totalPullRequestContributions": 14,
                "totalIssueContributions": 3,
                "totalRepositoryContributions": 2,
                "restrictedContributionsCount": 40,
                "totalRepositoriesWithContributedCommits": 6,
                "contributionCalendar": calendar(&[("2024-01-01", 2), ("2024-01-02", 0)])
            }
        }
    });

    let stats = transform_contribution_batch(decode_user(data).unwrap()).unwrap();

    assert_eq!(stats.total_commit_contributions, 120);
    assert_eq!(stats.total_pull_request_contributions, 14);
    assert_eq!(stats.total_issue_contributions, 3);
    assert_eq!(stats.total_repository_contributions, 2);
    assert_eq!(stats.restricted_contributions_count, 40);
    assert_eq!(stats.total_repositories_with_contributed_commits, 6);
    assert_eq!(stats.contribution_calendar.total_contributions, 2);

    let days: Vec<&ContributionDay> = stats.contribution_calendar.days().collect();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(days[0].contribution_count, 2);
}

#[test]
fn test_transform_contribution_batch_missing_calendar() {
    let data = json!({
        "user": {
            "contributionsCollection": {
                "totalCommitContributions": 1,
                "totalPullRequestContributions": 0,
                "totalIssueContributions": 0,
                "totalRepositoryContributions": 0,
                "restrictedContributionsCount": 0,
                "totalRepositoriesWithContributedCommits": 0
            }
        }
    });

    let result = transform_contribution_batch(decode_user(data).unwrap());

    assert!(
        matches!(result, Err(StatsError::MissingRequiredData(ref what)) if what == "contribution calendar")
    );
}

#[test]
fn test_transform_contribution_batch_missing_collection() {
    let result = transform_contribution_batch(decode_user(json!({ "user": {} })).unwrap());

    assert!(matches!(result, Err(StatsError::MissingRequiredData(_))));
}

#[test]
fn test_transform_engagement_batch() {
    let data = json!({
        "user": {
            "contributionsCollection": {
                "contributionCalendar": calendar(&[("2024-02-01", 1)]),
                "pullRequestReviewContributions": {
                    "nodes": [{
                        "pullRequest": {
                            "createdAt": "2024-02-01T00:00:00Z",
                            "mergedAt": "2024-02-02T00:00:00Z",
                            "state": "MERGED",
                            "comments": { "totalCount": 4 },
                            "reviewDecision": "APPROVED"
                        },
                        "occurredAt": "2024-02-01T06:00:00Z"
                    }]
                },
                "issueContributions": {
                    "nodes": [{
                        "issue": {
                            "createdAt": "2024-02-01T00:00:00Z",
                            "closedAt": null,
                            "state": "OPEN",
                            "comments": { "totalCount": 1 }
                        }
                    }]
                }
            }
        }
    });

    let batch = transform_engagement_batch(decode_user(data).unwrap()).unwrap();

    assert_eq!(batch.calendar.days().count(), 1);
    assert_eq!(batch.reviews.len(), 1);
    assert!(batch.reviews[0].is_merged());
    assert_eq!(batch.reviews[0].comment_count, 4);
    assert_eq!(batch.issues.len(), 1);
    assert!(!batch.issues[0].is_closed());
    assert_eq!(batch.issues[0].closed_at, None);
}

#[test]
fn test_transform_repositories_applies_defaults() {
    let data = json!({
        "user": {
            "repositories": {
                "nodes": [
                    {
                        "name": "hello-world",
                        "description": null,
                        "url": "https://github.com/octocat/hello-world",
                        "stargazerCount": 42,
                        "forkCount": 7,
                        "isPrivate": false,
                        "primaryLanguage": null
                    },
                    {
                        "name": "spoon-knife",
                        "description": "Fork me",
                        "url": "https://github.com/octocat/spoon-knife",
                        "stargazerCount": 10,
                        "forkCount": 100,
                        "isPrivate": true,
                        "primaryLanguage": { "name": "HTML", "color": "#e34c26" }
                    }
                ]
            }
        }
    });

    let repositories = transform_repositories(decode_user(data).unwrap()).unwrap();

    assert_eq!(repositories.len(), 2);
    assert_eq!(repositories[0].description, "");
    assert_eq!(repositories[0].primary_language, None);
    assert_eq!(repositories[1].description, "Fork me");
    assert_eq!(
        repositories[1].primary_language,
        Some(Language {
            name: "HTML".to_string(),
            color: Some("#e34c26".to_string())
        })
    );
    assert!(repositories[1].is_private);
}

#[test]
fn test_transform_repositories_missing_nodes() {
    let result = transform_repositories(decode_user(json!({ "user": { "repositories": null } })).unwrap());

    assert!(matches!(result, Err(StatsError::MissingRequiredData(ref what)) if what == "repositories"));
}

#[test]
fn test_transform_repositories_nodes_not_an_array() {
    let result = decode_user::<RawRepositoriesUser>(json!({
        "user": { "repositories": { "nodes": "oops" } }
    }));

    assert!(matches!(result, Err(StatsError::DataShape(_))));
}

#[test]
fn test_transform_language_stats() {
    let data = json!({
        "user": {
            "repositories": {
                "nodes": [
                    {
                        "isPrivate": true,
                        "languages": {
                            "edges": [
                                { "size": 600, "node": { "name": "Go", "color": "#00ADD8" } },
                                { "size": 400, "node": { "name": "Rust", "color": "#dea584" } }
                            ]
                        },
                        "defaultBranchRef": { "target": { "history": { "totalCount": 25 } } }
                    },
                    {
                        "isPrivate": false,
                        "languages": { "edges": null },
                        "defaultBranchRef": null
                    },
                    {
                        "isPrivate": false,
                        "languages": {
                            "edges": [
                                { "size": 40, "node": { "name": "Go", "color": "#00ADD8" } },
                                { "size": 60, "node": { "name": "Python", "color": null } }
                            ]
                        },
                        "defaultBranchRef": { "target": {} }
                    }
                ]
            }
        }
    });

    let stats = transform_language_stats(
        decode_user(data).unwrap(),
        LanguagePercentagePolicy::RunningAverage,
    )
    .unwrap();

    assert_eq!(stats.len(), 3);
    assert_eq!(stats[0].name, "Go");
    assert!((stats[0].percentage - 50.0).abs() < 1e-9);
    assert_eq!(stats[0].repo_count, 2);
    assert_eq!(stats[0].private_repo_count, 1);
    // The last repository using Go has no commit history, which counts as 0 commits
    assert_eq!(stats[0].trend, Trend::Decreasing);
    assert_eq!(stats[1].name, "Rust");
    assert_eq!(stats[1].trend, Trend::Increasing);
    assert_eq!(stats[2].name, "Python");
    assert_eq!(stats[2].color, None);
}

#[test]
fn test_transform_language_stats_missing_user() {
    let result = transform_language_stats(None, LanguagePercentagePolicy::RunningAverage);

    assert!(matches!(result, Err(StatsError::MissingRequiredData(_))));
}
