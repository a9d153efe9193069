//! In-memory cache of collected statistics, keyed by username and time range.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::models::GitHubStats;
use crate::TimeRange;

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;

#[derive(Debug, Clone)]
struct CacheEntry {
    stats: GitHubStats,
    inserted_at: Instant,
}

/// Stores complete results for a fixed time-to-live.
///
/// Only successful results are ever inserted. An entry is served while its age is
/// at most the TTL and is evicted on the first lookup after that. Concurrent
/// misses for the same key are not coalesced; each caller fetches on its own.
#[derive(Debug)]
pub struct StatsCache {
    ttl: Duration,
    entries: Mutex<HashMap<(String, TimeRange), CacheEntry>>,
}

impl StatsCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached statistics for the key if they have not expired.
    pub fn get(&self, username: &str, range: TimeRange) -> Option<GitHubStats> {
        self.get_at(username, range, Instant::now())
    }

    pub(crate) fn get_at(&self, username: &str, range: TimeRange, now: Instant) -> Option<GitHubStats> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let key = (username.to_string(), range);

        let expired = match entries.get(&key) {
            None => return None,
            Some(entry) => now.saturating_duration_since(entry.inserted_at) > self.ttl,
        };

        if expired {
            debug!(username, range = %range, "Evicting expired statistics");
            entries.remove(&key);
            return None;
        }

        entries.get(&key).map(|entry| entry.stats.clone())
    }

    pub fn insert(&self, username: &str, range: TimeRange, stats: GitHubStats) {
        self.insert_at(username, range, stats, Instant::now());
    }

    pub(crate) fn insert_at(&self, username: &str, range: TimeRange, stats: GitHubStats, now: Instant) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(
            (username.to_string(), range),
            CacheEntry {
                stats,
                inserted_at: now,
            },
        );
    }

    /// Drops the entry for the key, if any.
    pub fn invalidate(&self, username: &str, range: TimeRange) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(&(username.to_string(), range));
    }

    /// Drops every entry.
    pub fn clear(&self) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
