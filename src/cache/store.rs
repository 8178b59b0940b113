//! In-process TTL cache.
//!
//! Entries expire lazily on read and are also swept on a fixed interval by a
//! background task. The cache is process-local: separate processes each hold
//! their own copy.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use regex::Regex;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Interval between background sweeps.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// A stored value with its creation time and lifetime.
#[derive(Clone, Debug)]
pub struct CacheEntry<V> {
    pub data: V,
    pub timestamp: DateTime<Utc>,
    pub ttl: Duration,
}

impl<V> CacheEntry<V> {
    /// Live while `now - timestamp <= ttl`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        let age = now.signed_duration_since(self.timestamp);
        match chrono::Duration::from_std(self.ttl) {
            Ok(ttl) => age > ttl,
            // TTL too large to represent never expires
            Err(_) => false,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Point-in-time copy of an entry, for inspection.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySnapshot<V> {
    pub key: String,
    pub data: V,
    pub timestamp: DateTime<Utc>,
    /// Lifetime in milliseconds
    pub ttl: u64,
    pub is_expired: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub size: usize,
    pub keys: Vec<String>,
}

/// Thread-safe key/value cache with per-entry TTL.
///
/// Cloning shares the underlying map.
#[derive(Clone, Debug)]
pub struct TtlCache<V> {
    entries: Arc<DashMap<String, CacheEntry<V>>>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
        }
    }

    /// Store `data` under `key`, replacing any previous entry.
    pub fn set(&self, key: &str, data: V, ttl: Duration) {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                data,
                timestamp: Utc::now(),
                ttl,
            },
        );
    }

    /// Fetch a live entry. Expired entries are removed and read as absent.
    pub fn get(&self, key: &str) -> Option<V> {
        if let Some(entry) = self.entries.get(key) {
            if !entry.is_expired() {
                debug!("Cache HIT for {}", key);
                return Some(entry.data.clone());
            }
            // Stale: drop the read guard before removing
            drop(entry);
            self.entries.remove_if(key, |_, entry| entry.is_expired());
            debug!("Cache entry expired for {}", key);
        }
        debug!("Cache MISS for {}", key);
        None
    }

    pub fn delete(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Remove everything. Returns the number of entries this call dropped.
    pub fn clear(&self) -> usize {
        self.remove_where(|_, _| true)
    }

    /// Remove every key matching `pattern`. Returns the number removed.
    pub fn invalidate(&self, pattern: &Regex) -> usize {
        let removed = self.remove_where(|key, _| pattern.is_match(key));
        info!("Invalidated {} cache entries matching {}", removed, pattern);
        removed
    }

    /// Remove every expired entry. Returns the number removed.
    pub fn sweep(&self) -> usize {
        let now = Utc::now();
        self.remove_where(|_, entry| entry.is_expired_at(now))
    }

    /// Remove matching entries, counting within the same pass.
    fn remove_where(&self, mut remove: impl FnMut(&str, &CacheEntry<V>) -> bool) -> usize {
        let mut removed = 0;
        self.entries.retain(|key, entry| {
            if remove(key.as_str(), &*entry) {
                removed += 1;
                false
            } else {
                true
            }
        });
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        let mut keys: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        CacheStats {
            size: keys.len(),
            keys,
        }
    }

    /// Snapshot of all entries, sorted by key. Does not evict.
    pub fn entries(&self) -> Vec<EntrySnapshot<V>> {
        let now = Utc::now();
        let mut snapshots: Vec<EntrySnapshot<V>> = self
            .entries
            .iter()
            .map(|e| EntrySnapshot {
                key: e.key().clone(),
                data: e.data.clone(),
                timestamp: e.timestamp,
                ttl: u64::try_from(e.ttl.as_millis()).unwrap_or(u64::MAX),
                is_expired: e.is_expired_at(now),
            })
            .collect();
        snapshots.sort_by(|a, b| a.key.cmp(&b.key));
        snapshots
    }
}

impl<V: Clone + Send + Sync + 'static> TtlCache<V> {
    /// Sweep expired entries every `interval` until `shutdown` fires.
    pub fn spawn_sweeper(&self, interval: Duration, shutdown: CancellationToken) -> JoinHandle<()> {
        let cache = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // First tick completes immediately
            ticker.tick().await;
            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => {
                        debug!("Cache sweeper stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        let removed = cache.sweep();
                        if removed > 0 {
                            info!("Cache sweep removed {} expired entries", removed);
                        }
                    }
                }
            }
        })
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: Duration = Duration::from_secs(3600);

    #[test]
    fn cache_hit_within_ttl() {
        let cache = TtlCache::new();
        cache.set("shl-games-24100519", "games".to_string(), HOUR);

        assert_eq!(cache.get("shl-games-24100519"), Some("games".to_string()));
    }

    #[test]
    fn cache_miss_for_unknown_key() {
        let cache: TtlCache<String> = TtlCache::new();
        assert_eq!(cache.get("chl-games-24100519"), None);
    }

    #[test]
    fn expired_read_removes_entry() {
        let cache = TtlCache::new();
        cache.set("k", 1u32, Duration::from_millis(1));

        std::thread::sleep(Duration::from_millis(5));

        assert_eq!(cache.get("k"), None, "Entry should be stale after TTL");
        assert!(cache.is_empty(), "Expired read should evict the entry");
    }

    #[test]
    fn overwrite_replaces_value() {
        let cache = TtlCache::new();
        cache.set("k", "old".to_string(), HOUR);
        cache.set("k", "new".to_string(), HOUR);

        assert_eq!(cache.get("k"), Some("new".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn liveness_boundary_is_inclusive() {
        let timestamp = Utc::now();
        let entry = CacheEntry {
            data: (),
            timestamp,
            ttl: Duration::from_millis(1000),
        };
        assert!(!entry.is_expired_at(timestamp + chrono::Duration::milliseconds(1000)));
        assert!(entry.is_expired_at(timestamp + chrono::Duration::milliseconds(1001)));
    }

    #[test]
    fn delete_and_clear() {
        let cache = TtlCache::new();
        cache.set("a", 1u32, HOUR);
        cache.set("b", 2u32, HOUR);

        assert!(cache.delete("a"));
        assert!(!cache.delete("a"));
        assert_eq!(cache.len(), 1);

        assert_eq!(cache.clear(), 1);
        assert!(cache.is_empty());
        assert_eq!(cache.clear(), 0);
    }

    #[test]
    fn removal_counts_ignore_concurrent_inserts() {
        let cache = TtlCache::new();
        for i in 0..200 {
            cache.set(&format!("stale-{i}"), i, Duration::from_millis(1));
        }
        std::thread::sleep(Duration::from_millis(5));

        let swept = std::thread::scope(|scope| {
            let writer = cache.clone();
            scope.spawn(move || {
                for i in 0..2000 {
                    writer.set(&format!("fresh-{i}"), i, HOUR);
                }
            });
            cache.sweep()
        });

        assert_eq!(swept, 200);
        assert_eq!(cache.len(), 2000);
        assert_eq!(cache.clear(), 2000);
    }

    #[test]
    fn sweep_removes_only_expired() {
        let cache = TtlCache::new();
        cache.set("stale", 1u32, Duration::from_millis(1));
        cache.set("fresh", 2u32, HOUR);

        std::thread::sleep(Duration::from_millis(5));

        assert_eq!(cache.sweep(), 1);
        assert_eq!(cache.stats().keys, vec!["fresh".to_string()]);
    }

    #[test]
    fn invalidate_by_pattern() {
        let cache = TtlCache::new();
        cache.set("shl-games-24100519", 1u32, HOUR);
        cache.set("shl-standings-24100519", 2u32, HOUR);
        cache.set("chl-games-24100519", 3u32, HOUR);

        let removed = cache.invalidate(&Regex::new("^shl-").unwrap());
        assert_eq!(removed, 2);
        assert_eq!(cache.stats().keys, vec!["chl-games-24100519".to_string()]);
    }

    #[test]
    fn stats_lists_sorted_keys() {
        let cache = TtlCache::new();
        cache.set("b", 1u32, HOUR);
        cache.set("a", 2u32, HOUR);

        let stats = cache.stats();
        assert_eq!(stats.size, 2);
        assert_eq!(stats.keys, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn entries_report_expiry_without_evicting() {
        let cache = TtlCache::new();
        cache.set("stale", 1u32, Duration::from_millis(1));
        cache.set("fresh", 2u32, HOUR);

        std::thread::sleep(Duration::from_millis(5));

        let entries = cache.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key, "fresh");
        assert!(!entries[0].is_expired);
        assert_eq!(entries[0].ttl, 3_600_000);
        assert!(entries[1].is_expired);
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn sweeper_runs_until_cancelled() {
        let cache = TtlCache::new();
        cache.set("stale", 1u32, Duration::from_millis(1));

        let shutdown = CancellationToken::new();
        let handle = cache.spawn_sweeper(Duration::from_millis(10), shutdown.clone());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(cache.is_empty(), "Sweeper should have removed the entry");

        shutdown.cancel();
        handle.await.unwrap();
    }
}
