use super::*;
use crate::metrics::Turnaround;
use crate::models::{ContributionStats, GitHubEngagement, GitHubUser};
use chrono::{TimeZone, Utc};

fn stats_for(login: &str, commits: u64) -> GitHubStats {
    GitHubStats {
        user: GitHubUser {
            login: login.to_string(),
            name: login.to_string(),
            avatar_url: String::new(),
            bio: String::new(),
            location: String::new(),
            company: String::new(),
            created_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            followers: 0,
            following: 0,
            repositories: 0,
            starred_repositories: 0,
        },
        contributions: ContributionStats {
            total_commit_contributions: commits,
            ..Default::default()
        },
        repositories: Vec::new(),
        languages: Vec::new(),
        engagement: GitHubEngagement {
            current_streak: 0,
            longest_streak: 0,
            total_streaks: 0,
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
fn test_get_on_empty_cache_misses() {
    let cache = StatsCache::new(Duration::from_secs(60));

    assert!(cache.get("octocat", TimeRange::AllTime).is_none());
    assert!(cache.is_empty());
}

#[test]
fn test_insert_then_get_returns_the_stats() {
    let cache = StatsCache::new(Duration::from_secs(60));

    cache.insert("octocat", TimeRange::AllTime, stats_for("octocat", 7));

    let cached = cache.get("octocat", TimeRange::AllTime).expect("entry should be cached");
    assert_eq!(cached.contributions.total_commit_contributions, 7);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_entries_are_keyed_by_username_and_range() {
    let cache = StatsCache::new(Duration::from_secs(60));

    cache.insert("octocat", TimeRange::AllTime, stats_for("octocat", 1));
    cache.insert("octocat", TimeRange::CurrentYear, stats_for("octocat", 2));
    cache.insert("hubot", TimeRange::AllTime, stats_for("hubot", 3));

    assert_eq!(
        cache
            .get("octocat", TimeRange::CurrentYear)
            .unwrap()
            .contributions
            .total_commit_contributions,
        2
    );
    assert_eq!(
        cache
            .get("hubot", TimeRange::AllTime)
            .unwrap()
            .contributions
            .total_commit_contributions,
        3
    );
    assert!(cache.get("hubot", TimeRange::CurrentYear).is_none());
    assert_eq!(cache.len(), 3);
}

#[test]
fn test_entry_is_served_up_to_the_ttl() {
    let ttl = Duration::from_secs(3600);
    let cache = StatsCache::new(ttl);
    let inserted = Instant::now();

    cache.insert_at("octocat", TimeRange::AllTime, stats_for("octocat", 1), inserted);

    assert!(cache
        .get_at("octocat", TimeRange::AllTime, inserted + ttl)
        .is_some());
}

#[test]
fn test_expired_entry_is_evicted_on_lookup() {
    let ttl = Duration::from_secs(3600);
    let cache = StatsCache::new(ttl);
    let inserted = Instant::now();

    cache.insert_at("octocat", TimeRange::AllTime, stats_for("octocat", 1), inserted);

    let later = inserted + ttl + Duration::from_millis(1);
    assert!(cache.get_at("octocat", TimeRange::AllTime, later).is_none());
    assert!(cache.is_empty());
}

#[test]
fn test_reinsert_replaces_entry_and_restarts_ttl() {
    let ttl = Duration::from_secs(10);
    let cache = StatsCache::new(ttl);
    let first = Instant::now();

    cache.insert_at("octocat", TimeRange::AllTime, stats_for("octocat", 1), first);
    cache.insert_at(
        "octocat",
        TimeRange::AllTime,
        stats_for("octocat", 2),
        first + Duration::from_secs(8),
    );

    let cached = cache
        .get_at("octocat", TimeRange::AllTime, first + Duration::from_secs(15))
        .expect("replacement should still be fresh");
    assert_eq!(cached.contributions.total_commit_contributions, 2);
}

#[test]
fn test_invalidate_and_clear() {
    let cache = StatsCache::new(Duration::from_secs(60));
    cache.insert("octocat", TimeRange::AllTime, stats_for("octocat", 1));
    cache.insert("hubot", TimeRange::AllTime, stats_for("hubot", 1));

    cache.invalidate("octocat", TimeRange::AllTime);
    assert!(cache.get("octocat", TimeRange::AllTime).is_none());
    assert_eq!(cache.len(), 1);

    cache.clear();
    assert!(cache.is_empty());
}
